use newsdesk_core::{update, IndicatorId, Msg, PageState, Timer};

#[test]
fn stray_input_leaves_state_untouched() {
    let state = PageState::new();
    let messages = vec![
        Msg::SearchKeyPressed {
            key: "a".to_string(),
            query: "brasil".to_string(),
        },
        Msg::TimerFired(Timer::LoadMore(IndicatorId(42))),
        Msg::ShareRequested {
            platform: "myspace".to_string(),
            url: "https://brasilviral.com.br/".to_string(),
            title: "Oi".to_string(),
        },
    ];

    for msg in messages {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}

#[test]
fn missing_hooks_are_silent_noops() {
    let state = PageState::new();
    let messages = vec![
        Msg::MenuToggleClicked {
            nav_menu: None,
            currently_active: false,
        },
        Msg::LoadMoreRequested {
            category: "esportes".to_string(),
            container: None,
        },
        Msg::BreakingNewsReceived {
            ticker: None,
            items: vec!["A".to_string()],
        },
        Msg::CardClicked {
            inside_anchor: false,
            target: None,
        },
    ];

    for msg in messages {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }
}
