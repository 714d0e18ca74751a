use std::collections::BTreeMap;

use crate::view_model::PageViewModel;
use crate::{IndicatorId, NodeId, PageConfig, ScrollThrottle};

/// Placeholder loading state; only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdLoadState {
    Loading,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingLoad {
    pub(crate) category: String,
    pub(crate) container: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    config: PageConfig,
    ready: bool,
    menu_active: bool,
    placeholders: BTreeMap<NodeId, AdLoadState>,
    throttle: ScrollThrottle,
    impressions: u64,
    next_indicator: u64,
    pending_loads: BTreeMap<IndicatorId, PendingLoad>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn view(&self) -> PageViewModel {
        let loading = self
            .placeholders
            .values()
            .filter(|s| **s == AdLoadState::Loading)
            .count();
        PageViewModel {
            ready: self.ready,
            menu_active: self.menu_active,
            placeholders_loading: loading,
            placeholders_loaded: self.placeholders.len() - loading,
            scan_pending: self.throttle.is_pending(),
            impressions: self.impressions,
            pending_loads: self.pending_loads.len(),
        }
    }

    pub fn placeholder_state(&self, node: NodeId) -> Option<AdLoadState> {
        self.placeholders.get(&node).copied()
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.ready
    }

    pub(crate) fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub(crate) fn set_menu_active(&mut self, active: bool) {
        self.menu_active = active;
    }

    /// Registers a placeholder as loading; returns false if it was already known.
    pub(crate) fn track_placeholder(&mut self, node: NodeId) -> bool {
        if self.placeholders.contains_key(&node) {
            return false;
        }
        self.placeholders.insert(node, AdLoadState::Loading);
        true
    }

    /// Marks `node` loaded, tracking it first if it appeared after ready.
    /// Returns false when it was already loaded.
    pub(crate) fn finish_loading(&mut self, node: NodeId) -> bool {
        let previous = self.placeholders.insert(node, AdLoadState::Loaded);
        previous != Some(AdLoadState::Loaded)
    }

    pub(crate) fn throttle_mut(&mut self) -> &mut ScrollThrottle {
        &mut self.throttle
    }

    pub(crate) fn record_impression(&mut self) {
        self.impressions += 1;
    }

    pub(crate) fn begin_load(&mut self, category: String, container: NodeId) -> IndicatorId {
        self.next_indicator += 1;
        let indicator = IndicatorId(self.next_indicator);
        self.pending_loads
            .insert(indicator, PendingLoad { category, container });
        indicator
    }

    pub(crate) fn finish_load(&mut self, indicator: IndicatorId) -> Option<PendingLoad> {
        self.pending_loads.remove(&indicator)
    }
}
