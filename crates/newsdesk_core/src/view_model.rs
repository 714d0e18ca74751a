#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub ready: bool,
    pub menu_active: bool,
    pub placeholders_loading: usize,
    pub placeholders_loaded: usize,
    pub scan_pending: bool,
    pub impressions: u64,
    pub pending_loads: usize,
}
