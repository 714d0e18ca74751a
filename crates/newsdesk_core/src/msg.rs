use crate::{NodeId, SlotGeometry, Timer, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Document structure finished loading.
    PageReady { ad_placeholders: Vec<NodeId> },
    /// Placeholders present when the ad-load delay elapsed.
    PlaceholdersListed { placeholders: Vec<NodeId> },
    /// A scheduled timer elapsed.
    TimerFired(Timer),
    /// Menu toggle activated; `nav_menu` is absent when the page has no menu.
    MenuToggleClicked {
        nav_menu: Option<NodeId>,
        currently_active: bool,
    },
    /// Click landed on an article or featured card.
    CardClicked {
        inside_anchor: bool,
        target: Option<String>,
    },
    /// Newsletter form submitted with the current email field value.
    NewsletterSubmitted { form: NodeId, email: String },
    /// "Load more" for a category; `container` is its articles list if found.
    LoadMoreRequested {
        category: String,
        container: Option<NodeId>,
    },
    ShareRequested {
        platform: String,
        url: String,
        title: String,
    },
    BreakingNewsReceived {
        ticker: Option<NodeId>,
        items: Vec<String>,
    },
    /// Search button clicked or search requested programmatically.
    SearchSubmitted { query: String },
    /// Key pressed inside the search input.
    SearchKeyPressed { key: String, query: String },
    AdClicked { ad_id: String, position: String },
    Scrolled,
    /// Geometry of every `.ad-slot` at scan time.
    SlotsMeasured {
        viewport: Viewport,
        slots: Vec<SlotGeometry>,
    },
}
