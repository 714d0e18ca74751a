pub mod document;
pub mod effects;
pub mod headless;
pub mod hooks;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod timers;
