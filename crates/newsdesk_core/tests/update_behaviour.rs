use std::sync::Once;

use newsdesk_core::{
    strings, update, Effect, IndicatorId, Msg, NodeId, PageConfig, PageState, Timer,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn toggle(state: PageState, currently_active: bool) -> (PageState, Vec<Effect>) {
    update(
        state,
        Msg::MenuToggleClicked {
            nav_menu: Some(NodeId(7)),
            currently_active,
        },
    )
}

fn alerts(effects: &[Effect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Alert(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn menu_toggle_is_its_own_inverse() {
    init_logging();
    let (state, effects) = toggle(PageState::new(), false);
    assert!(state.view().menu_active);
    assert_eq!(
        effects,
        vec![Effect::SetClass {
            node: NodeId(7),
            class: "active",
            present: true,
        }]
    );

    let (state, effects) = toggle(state, true);
    assert!(!state.view().menu_active);
    assert_eq!(
        effects,
        vec![Effect::SetClass {
            node: NodeId(7),
            class: "active",
            present: false,
        }]
    );
}

#[test]
fn card_click_navigates_to_target_once() {
    init_logging();
    let (_state, effects) = update(
        PageState::new(),
        Msg::CardClicked {
            inside_anchor: false,
            target: Some("noticias/carnaval.html".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            target: "noticias/carnaval.html".to_string()
        }]
    );
}

#[test]
fn card_click_inside_anchor_does_nothing() {
    init_logging();
    let (_state, effects) = update(
        PageState::new(),
        Msg::CardClicked {
            inside_anchor: true,
            target: Some("noticias/carnaval.html".to_string()),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn card_with_empty_target_is_ignored() {
    let (_state, effects) = update(
        PageState::new(),
        Msg::CardClicked {
            inside_anchor: false,
            target: Some(String::new()),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn newsletter_acknowledges_and_resets_without_validation() {
    init_logging();
    let (_state, effects) = update(
        PageState::new(),
        Msg::NewsletterSubmitted {
            form: NodeId(3),
            email: "not-an-email".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![
            Effect::Alert(
                "Obrigado por se inscrever! Você receberá nossas notícias no email: not-an-email"
                    .to_string()
            ),
            Effect::ResetForm { form: NodeId(3) },
        ]
    );
}

#[test]
fn load_more_appends_indicator_then_alerts_after_delay() {
    init_logging();
    let (state, effects) = update(
        PageState::new(),
        Msg::LoadMoreRequested {
            category: "politica".to_string(),
            container: Some(NodeId(11)),
        },
    );
    let indicator = IndicatorId(1);
    assert_eq!(
        effects,
        vec![
            Effect::AppendIndicator {
                container: NodeId(11),
                indicator,
                text: "Carregando mais notícias...",
            },
            Effect::ScheduleTimer {
                timer: Timer::LoadMore(indicator),
                after_ms: 1000,
            },
        ]
    );
    assert_eq!(state.view().pending_loads, 1);

    let (state, effects) = update(state, Msg::TimerFired(Timer::LoadMore(indicator)));
    assert_eq!(
        effects,
        vec![
            Effect::RemoveIndicator {
                container: NodeId(11),
                indicator,
            },
            Effect::Alert("Mais notícias de politica seriam carregadas aqui.".to_string()),
        ]
    );
    assert_eq!(state.view().pending_loads, 0);

    // A stale timer for an already finished load is ignored.
    let (_state, effects) = update(state, Msg::TimerFired(Timer::LoadMore(indicator)));
    assert!(effects.is_empty());
}

#[test]
fn concurrent_load_more_requests_get_distinct_indicators() {
    let (state, first) = update(
        PageState::new(),
        Msg::LoadMoreRequested {
            category: "esportes".to_string(),
            container: Some(NodeId(1)),
        },
    );
    let (state, second) = update(
        state,
        Msg::LoadMoreRequested {
            category: "esportes".to_string(),
            container: Some(NodeId(1)),
        },
    );
    assert_ne!(first[0], second[0]);
    assert_eq!(state.view().pending_loads, 2);
}

#[test]
fn share_twitter_encodes_url_and_title() {
    init_logging();
    let (_state, effects) = update(
        PageState::new(),
        Msg::ShareRequested {
            platform: "twitter".to_string(),
            url: "https://example.com/a?b=1".to_string(),
            title: "Título x".to_string(),
        },
    );
    let [Effect::OpenWindow {
        url: share_url,
        features,
    }] = effects.as_slice()
    else {
        panic!("expected a single OpenWindow effect, got {effects:?}");
    };
    assert_eq!(
        share_url,
        "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3D1&text=T%C3%ADtulo%20x"
    );
    assert_eq!(features, "width=600,height=400");

    let parsed = url::Url::parse(share_url).unwrap();
    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("url".to_string(), "https://example.com/a?b=1".to_string()),
            ("text".to_string(), "Título x".to_string()),
        ]
    );
}

#[test]
fn share_builds_each_supported_platform() {
    let cases = [
        (
            "facebook",
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fb.v%2F1",
        ),
        (
            "whatsapp",
            "https://api.whatsapp.com/send?text=Oi%20https%3A%2F%2Fb.v%2F1",
        ),
        (
            "telegram",
            "https://t.me/share/url?url=https%3A%2F%2Fb.v%2F1&text=Oi",
        ),
    ];
    for (platform, expected) in cases {
        let (_state, effects) = update(
            PageState::new(),
            Msg::ShareRequested {
                platform: platform.to_string(),
                url: "https://b.v/1".to_string(),
                title: "Oi".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![Effect::OpenWindow {
                url: expected.to_string(),
                features: "width=600,height=400".to_string(),
            }]
        );
    }
}

#[test]
fn share_unknown_platform_opens_nothing() {
    let (_state, effects) = update(
        PageState::new(),
        Msg::ShareRequested {
            platform: "unknown-platform".to_string(),
            url: "https://example.com".to_string(),
            title: "x".to_string(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn share_window_size_follows_config() {
    let mut config = PageConfig::default();
    config.share_window.width = 800;
    let (_state, effects) = update(
        PageState::with_config(config),
        Msg::ShareRequested {
            platform: "facebook".to_string(),
            url: "u".to_string(),
            title: "t".to_string(),
        },
    );
    assert!(matches!(
        effects.as_slice(),
        [Effect::OpenWindow { features, .. }] if features == "width=800,height=400"
    ));
}

#[test]
fn breaking_news_joins_items_with_bullet() {
    let (_state, effects) = update(
        PageState::new(),
        Msg::BreakingNewsReceived {
            ticker: Some(NodeId(2)),
            items: vec!["A".to_string(), "B".to_string()],
        },
    );
    assert_eq!(
        effects,
        vec![Effect::SetText {
            node: NodeId(2),
            text: "A • B".to_string(),
        }]
    );

    let (_state, effects) = update(
        PageState::new(),
        Msg::BreakingNewsReceived {
            ticker: Some(NodeId(2)),
            items: Vec::new(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn empty_search_prompts_for_input() {
    init_logging();
    for query in ["", "   ", "\t\n"] {
        let (_state, effects) = update(
            PageState::new(),
            Msg::SearchSubmitted {
                query: query.to_string(),
            },
        );
        assert_eq!(alerts(&effects), vec![strings::EMPTY_SEARCH_PROMPT]);
    }
}

#[test]
fn search_acknowledges_query() {
    let (_state, effects) = update(
        PageState::new(),
        Msg::SearchSubmitted {
            query: "brasil".to_string(),
        },
    );
    let alerts = alerts(&effects);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("brasil"));
    assert_ne!(alerts[0], strings::EMPTY_SEARCH_PROMPT);
}

#[test]
fn enter_key_and_button_behave_identically() {
    for query in ["", "  ", "copa do mundo"] {
        let (_s, by_button) = update(
            PageState::new(),
            Msg::SearchSubmitted {
                query: query.to_string(),
            },
        );
        let (_s, by_enter) = update(
            PageState::new(),
            Msg::SearchKeyPressed {
                key: "Enter".to_string(),
                query: query.to_string(),
            },
        );
        assert_eq!(by_button, by_enter);
    }

    let (_s, effects) = update(
        PageState::new(),
        Msg::SearchKeyPressed {
            key: "a".to_string(),
            query: "copa".to_string(),
        },
    );
    assert!(effects.is_empty());
}
