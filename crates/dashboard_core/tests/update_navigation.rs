use std::sync::Once;

use dashboard_core::{dispatch, update, Effect, Msg, NavAction, ThemeMode, ViewState};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

#[test]
fn each_action_opens_exactly_its_own_panel() {
    init_logging();
    for action in NavAction::ALL {
        let (_state, effects) = update(ViewState::new(), Msg::NavClicked(action));
        assert_eq!(effects, vec![Effect::OpenPanel(action)]);
    }
}

#[test]
fn navigation_leaves_session_state_untouched() {
    init_logging();
    let (state, _) = update(
        ViewState::with_theme(ThemeMode::Dark),
        Msg::OptionSubmitted(Some("🎵 Download music only".to_string())),
    );
    let before = state.view();

    let (state, _) = update(state, Msg::NavClicked(NavAction::ShowApiDoc));

    assert_eq!(state.view(), before);
}

#[test]
fn repeated_navigation_reopens_without_accumulating() {
    init_logging();
    let mut state = ViewState::new();
    for _ in 0..3 {
        let (next, effects) = update(state, Msg::NavClicked(NavAction::ShowAbout));
        assert_eq!(effects, vec![dispatch(NavAction::ShowAbout)]);
        state = next;
    }
    assert_eq!(state, ViewState::new());
}
