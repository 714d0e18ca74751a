use crate::share::SharePlatform;
use crate::strings::{
    self, CLASS_AD_LOADED, CLASS_AD_LOADING, CLASS_MENU_ACTIVE, DATA_VIEWED,
    EMPTY_SEARCH_PROMPT, LOADING_INDICATOR_TEXT, TICKER_SEPARATOR, UNKNOWN_SLOT_ID,
};
use crate::visibility::is_fully_visible;
use crate::{Effect, LogEvent, Msg, PageState, SlotGeometry, Timer, Viewport};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageReady { ad_placeholders } => {
            let first_ready = !state.is_ready();
            state.mark_ready();
            let mut effects: Vec<Effect> = ad_placeholders
                .into_iter()
                .filter(|node| state.track_placeholder(*node))
                .map(|node| Effect::AddClass {
                    node,
                    class: CLASS_AD_LOADING,
                })
                .collect();
            if first_ready {
                effects.push(Effect::ScheduleTimer {
                    timer: Timer::AdLoad,
                    after_ms: state.config().ad_load_delay_ms,
                });
            }
            effects
        }
        Msg::TimerFired(Timer::AdLoad) => vec![Effect::ListAdPlaceholders],
        Msg::PlaceholdersListed { placeholders } => placeholders
            .into_iter()
            .filter(|node| state.finish_loading(*node))
            .flat_map(|node| {
                [
                    Effect::RemoveClass {
                        node,
                        class: CLASS_AD_LOADING,
                    },
                    Effect::AddClass {
                        node,
                        class: CLASS_AD_LOADED,
                    },
                ]
            })
            .collect(),
        Msg::TimerFired(Timer::VisibilityScan) => {
            state.throttle_mut().complete();
            vec![Effect::MeasureAdSlots]
        }
        Msg::TimerFired(Timer::LoadMore(indicator)) => match state.finish_load(indicator) {
            Some(load) => vec![
                Effect::RemoveIndicator {
                    container: load.container,
                    indicator,
                },
                Effect::Alert(strings::load_more_done(&load.category)),
            ],
            None => Vec::new(),
        },
        Msg::MenuToggleClicked {
            nav_menu,
            currently_active,
        } => match nav_menu {
            Some(node) => {
                let present = !currently_active;
                state.set_menu_active(present);
                vec![Effect::SetClass {
                    node,
                    class: CLASS_MENU_ACTIVE,
                    present,
                }]
            }
            None => Vec::new(),
        },
        Msg::CardClicked {
            inside_anchor,
            target,
        } => {
            if inside_anchor {
                // The anchor's own navigation proceeds.
                return (state, Vec::new());
            }
            match target {
                Some(target) if !target.is_empty() => vec![Effect::Navigate { target }],
                _ => Vec::new(),
            }
        }
        Msg::NewsletterSubmitted { form, email } => vec![
            Effect::Alert(strings::newsletter_thanks(&email)),
            Effect::ResetForm { form },
        ],
        Msg::LoadMoreRequested {
            category,
            container,
        } => match container {
            Some(container) => {
                let indicator = state.begin_load(category, container);
                vec![
                    Effect::AppendIndicator {
                        container,
                        indicator,
                        text: LOADING_INDICATOR_TEXT,
                    },
                    Effect::ScheduleTimer {
                        timer: Timer::LoadMore(indicator),
                        after_ms: state.config().load_more_delay_ms,
                    },
                ]
            }
            None => Vec::new(),
        },
        Msg::ShareRequested {
            platform,
            url,
            title,
        } => match platform.parse::<SharePlatform>() {
            Ok(platform) => vec![Effect::OpenWindow {
                url: platform.share_url(&url, &title),
                features: state.config().share_window.features(),
            }],
            Err(_) => Vec::new(),
        },
        Msg::BreakingNewsReceived { ticker, items } => match ticker {
            Some(node) if !items.is_empty() => vec![Effect::SetText {
                node,
                text: items.join(TICKER_SEPARATOR),
            }],
            _ => Vec::new(),
        },
        Msg::SearchSubmitted { query } => search(&query),
        Msg::SearchKeyPressed { key, query } => {
            if key == "Enter" {
                search(&query)
            } else {
                Vec::new()
            }
        }
        Msg::AdClicked { ad_id, position } => {
            vec![Effect::Log(LogEvent::AdClick { ad_id, position })]
        }
        Msg::Scrolled => {
            if state.throttle_mut().request() {
                vec![Effect::ScheduleTimer {
                    timer: Timer::VisibilityScan,
                    after_ms: state.config().scroll_throttle_ms,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::SlotsMeasured { viewport, slots } => scan_slots(&mut state, &viewport, &slots),
    };

    (state, effects)
}

fn search(query: &str) -> Vec<Effect> {
    if query.trim().is_empty() {
        return vec![Effect::Alert(EMPTY_SEARCH_PROMPT.to_string())];
    }
    vec![Effect::Alert(strings::search_ack(query))]
}

fn scan_slots(state: &mut PageState, viewport: &Viewport, slots: &[SlotGeometry]) -> Vec<Effect> {
    let mut effects = Vec::new();
    for slot in slots {
        if slot.viewed || !is_fully_visible(&slot.rect, viewport) {
            continue;
        }
        state.record_impression();
        let ad_id = slot
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(UNKNOWN_SLOT_ID)
            .to_string();
        effects.push(Effect::SetData {
            node: slot.node,
            key: DATA_VIEWED,
            value: "true".to_string(),
        });
        effects.push(Effect::Log(LogEvent::AdImpression { ad_id }));
    }
    effects
}
