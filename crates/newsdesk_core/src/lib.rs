//! Newsdesk core: pure page-interaction state machine and view-model helpers.
mod config;
mod effect;
mod msg;
mod share;
mod state;
pub mod strings;
mod types;
mod update;
mod view_model;
mod visibility;

pub use config::{PageConfig, WindowSize, AD_LOAD_DELAY_MS, LOAD_MORE_DELAY_MS, SCROLL_THROTTLE_MS};
pub use effect::{Effect, LogEvent};
pub use msg::Msg;
pub use share::{encode_uri_component, SharePlatform, UnsupportedPlatform};
pub use state::{AdLoadState, PageState};
pub use types::{IndicatorId, NodeId, Rect, SlotGeometry, Timer, Viewport};
pub use update::update;
pub use view_model::PageViewModel;
pub use visibility::{is_fully_visible, ScrollThrottle};
