use std::collections::{HashMap, VecDeque};

use newsdesk_core::strings::CLASS_MENU_ACTIVE;
use newsdesk_core::{update, IndicatorId, Msg, NodeId, PageConfig, PageState, PageViewModel};
use page_logging::{page_debug, page_trace, page_warn, set_page_clock};

use super::document::{Document, DomQuery, PageSurface, Selector};
use super::effects::{measure_ad_slots, EffectRunner};
use super::hooks::{
    category_section_id, AD_PLACEHOLDER_CLASS, BREAKING_NEWS_ID, CARD_CLASSES, CARD_TARGET_ATTR,
    CATEGORY_ARTICLES_CLASS, MENU_TOGGLE_ID, NAV_MENU_ID, NEWSLETTER_FORM_ID, SEARCH_BOX_CLASS,
};
use super::timers::TimerQueue;

/// Listeners registered when the page becomes ready.
#[derive(Debug, Default)]
struct Listeners {
    menu_toggle: Option<NodeId>,
    newsletter_form: Option<NodeId>,
    cards: Vec<NodeId>,
    search_input: Option<NodeId>,
    search_button: Option<NodeId>,
}

/// Single-threaded page event loop: routes host events into `Msg`s and
/// applies the resulting effects to the document.
pub struct PageRuntime<D: Document> {
    document: D,
    state: PageState,
    timers: TimerQueue,
    listeners: Option<Listeners>,
    indicators: HashMap<IndicatorId, NodeId>,
}

impl<D: Document> PageRuntime<D> {
    pub fn new(document: D) -> Self {
        Self::with_config(document, PageConfig::default())
    }

    pub fn with_config(document: D, config: PageConfig) -> Self {
        set_page_clock(0);
        Self {
            document,
            state: PageState::with_config(config),
            timers: TimerQueue::new(),
            listeners: None,
            indicators: HashMap::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn view(&self) -> PageViewModel {
        self.state.view()
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Fires the document-ready trigger. Only the first call has any effect.
    pub fn page_ready(&mut self) {
        if self.listeners.is_some() {
            page_debug!("page_ready ignored: already ready");
            return;
        }
        let doc = &self.document;
        let search_box = doc.query_all(&Selector::Class(SEARCH_BOX_CLASS)).first().copied();
        let (search_input, search_button) = match search_box {
            Some(search_box) => {
                let input = doc.query_within(search_box, &Selector::Tag("input"));
                let button = doc.query_within(search_box, &Selector::Tag("button"));
                match (input, button) {
                    (Some(input), Some(button)) => (Some(input), Some(button)),
                    _ => (None, None),
                }
            }
            None => (None, None),
        };
        let listeners = Listeners {
            menu_toggle: doc.element_by_id(MENU_TOGGLE_ID),
            newsletter_form: doc.element_by_id(NEWSLETTER_FORM_ID),
            cards: doc.query_all(&Selector::AnyClass(CARD_CLASSES)),
            search_input,
            search_button,
        };
        page_debug!(
            "page ready: menu={} newsletter={} cards={} search={}",
            listeners.menu_toggle.is_some(),
            listeners.newsletter_form.is_some(),
            listeners.cards.len(),
            listeners.search_input.is_some()
        );
        self.listeners = Some(listeners);

        let ad_placeholders = doc.query_all(&Selector::Class(AD_PLACEHOLDER_CLASS));
        self.dispatch(Msg::PageReady { ad_placeholders });
    }

    /// Simulates a click on `target`, bubbling through its ancestors.
    /// A click inside `<a href>` then follows the link.
    pub fn click(&mut self, target: NodeId) {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(node) = current {
            path.push(node);
            current = self.document.parent(node);
        }
        let anchor = self.document.closest(target, &Selector::Tag("a"));

        for node in path {
            let Some(listeners) = &self.listeners else {
                break;
            };
            let mut messages = Vec::new();
            if listeners.menu_toggle == Some(node) {
                messages.push(self.menu_toggle_msg());
            }
            if listeners.cards.contains(&node) {
                messages.push(Msg::CardClicked {
                    inside_anchor: anchor.is_some(),
                    target: self.document.attribute(node, CARD_TARGET_ATTR),
                });
            }
            if listeners.search_button == Some(node) {
                let query = listeners
                    .search_input
                    .and_then(|input| self.document.value(input))
                    .unwrap_or_default();
                messages.push(Msg::SearchSubmitted { query });
            }
            for msg in messages {
                self.dispatch(msg);
            }
        }

        if let Some(href) = anchor.and_then(|a| self.document.attribute(a, "href")) {
            self.document.navigate(&href);
        }
    }

    /// Simulates a form submission. Returns true when a listener prevented
    /// the default full-page submit.
    pub fn submit(&mut self, form: NodeId) -> bool {
        let is_newsletter = self
            .listeners
            .as_ref()
            .is_some_and(|l| l.newsletter_form == Some(form));
        if !is_newsletter {
            return false;
        }
        let Some(input) = self
            .document
            .query_within(form, &Selector::InputType("email"))
        else {
            page_warn!("newsletter form {} has no email input", form);
            return true;
        };
        let email = self.document.value(input).unwrap_or_default();
        self.dispatch(Msg::NewsletterSubmitted { form, email });
        true
    }

    /// Simulates a key press while `target` has focus.
    pub fn key_press(&mut self, target: NodeId, key: &str) {
        let is_search_input = self
            .listeners
            .as_ref()
            .is_some_and(|l| l.search_input == Some(target));
        if !is_search_input {
            return;
        }
        let query = self.document.value(target).unwrap_or_default();
        self.dispatch(Msg::SearchKeyPressed {
            key: key.to_string(),
            query,
        });
    }

    /// Window scroll; throttled into at most one pending visibility scan.
    pub fn scroll(&mut self) {
        self.dispatch(Msg::Scrolled);
    }

    /// Advances the virtual clock, firing every timer that falls due.
    pub fn advance_time(&mut self, delta_ms: u64) {
        let target = self.timers.now_ms().saturating_add(delta_ms);
        while let Some(timer) = self.timers.pop_due(target) {
            set_page_clock(self.timers.now_ms());
            page_trace!("timer fired {:?}", timer);
            self.dispatch(Msg::TimerFired(timer));
        }
        self.timers.set_now(target);
        set_page_clock(target);
    }

    /// Tears the page down; pending timers never fire.
    pub fn teardown(self) -> D {
        if !self.timers.is_empty() {
            page_debug!("teardown dropped {} pending timer(s)", self.timers.len());
        }
        self.document
    }

    pub fn toggle_mobile_menu(&mut self) {
        let msg = self.menu_toggle_msg();
        self.dispatch(msg);
    }

    pub fn track_ad_click(&mut self, ad_id: &str, position: &str) {
        self.dispatch(Msg::AdClicked {
            ad_id: ad_id.to_string(),
            position: position.to_string(),
        });
    }

    /// Runs a visibility scan immediately, bypassing the scroll throttle.
    pub fn check_ad_visibility(&mut self) {
        let msg = measure_ad_slots(&self.document);
        self.dispatch(msg);
    }

    pub fn load_more_news(&mut self, category: &str) {
        let container = self
            .document
            .element_by_id(&category_section_id(category))
            .and_then(|section| {
                self.document
                    .query_within(section, &Selector::Class(CATEGORY_ARTICLES_CLASS))
            });
        self.dispatch(Msg::LoadMoreRequested {
            category: category.to_string(),
            container,
        });
    }

    pub fn share_news(&mut self, platform: &str, url: &str, title: &str) {
        self.dispatch(Msg::ShareRequested {
            platform: platform.to_string(),
            url: url.to_string(),
            title: title.to_string(),
        });
    }

    pub fn update_breaking_news<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch(Msg::BreakingNewsReceived {
            ticker: self.document.element_by_id(BREAKING_NEWS_ID),
            items: items.into_iter().map(Into::into).collect(),
        });
    }

    pub fn search_news(&mut self, query: &str) {
        self.dispatch(Msg::SearchSubmitted {
            query: query.to_string(),
        });
    }

    fn menu_toggle_msg(&self) -> Msg {
        let nav_menu = self.document.element_by_id(NAV_MENU_ID);
        Msg::MenuToggleClicked {
            nav_menu,
            currently_active: nav_menu
                .is_some_and(|menu| self.document.has_class(menu, CLASS_MENU_ACTIVE)),
        }
    }

    /// Runs a message and any replies it provokes to completion.
    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            page_trace!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            let replies =
                EffectRunner::new(&mut self.document, &mut self.timers, &mut self.indicators)
                    .run(effects);
            inbox.extend(replies);
        }
    }
}
