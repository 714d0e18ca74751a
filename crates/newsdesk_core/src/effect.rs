use crate::{IndicatorId, NodeId, Timer};

/// Side effects requested by `update`; the host applies them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AddClass {
        node: NodeId,
        class: &'static str,
    },
    RemoveClass {
        node: NodeId,
        class: &'static str,
    },
    /// Force a class on or off (menu toggle).
    SetClass {
        node: NodeId,
        class: &'static str,
        present: bool,
    },
    SetText {
        node: NodeId,
        text: String,
    },
    /// Write a `data-*` attribute.
    SetData {
        node: NodeId,
        key: &'static str,
        value: String,
    },
    AppendIndicator {
        container: NodeId,
        indicator: IndicatorId,
        text: &'static str,
    },
    RemoveIndicator {
        container: NodeId,
        indicator: IndicatorId,
    },
    ResetForm {
        form: NodeId,
    },
    Navigate {
        target: String,
    },
    OpenWindow {
        url: String,
        features: String,
    },
    Alert(String),
    Log(LogEvent),
    ScheduleTimer {
        timer: Timer,
        after_ms: u64,
    },
    /// Ask the host for the current `.ad-placeholder` elements; it answers
    /// with `Msg::PlaceholdersListed`.
    ListAdPlaceholders,
    /// Ask the host for fresh slot geometry; it answers with `Msg::SlotsMeasured`.
    MeasureAdSlots,
}

/// Diagnostic events routed to the host's log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    AdClick { ad_id: String, position: String },
    AdImpression { ad_id: String },
}

impl std::fmt::Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEvent::AdClick { ad_id, position } => {
                write!(f, "Ad clicked: {ad_id} at position {position}")
            }
            LogEvent::AdImpression { ad_id } => write!(f, "Ad impression: {ad_id}"),
        }
    }
}
