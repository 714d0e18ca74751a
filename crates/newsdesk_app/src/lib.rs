//! Newsdesk host layer: DOM capability traits, the headless document, and the
//! page runtime that drives `newsdesk_core` from host events.
pub mod platform;

pub use platform::document::{Document, DomError, DomQuery, PageSurface, Selector};
pub use platform::headless::{ElementSpec, HeadlessDocument, OpenedWindow};
pub use platform::runtime::PageRuntime;
pub use platform::session::{ConfigOverrides, FixtureError, SessionEvent, SessionFile};
pub use platform::timers::TimerQueue;
