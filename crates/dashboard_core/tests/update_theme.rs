use dashboard_core::{update, Msg, ThemeMode, ViewState};

fn toggle_times(mut state: ViewState, times: usize) -> ViewState {
    for _ in 0..times {
        let (next, effects) = update(state, Msg::ThemeToggled);
        assert!(effects.is_empty());
        state = next;
    }
    state
}

#[test]
fn even_toggles_restore_the_original_mode() {
    for start in [ThemeMode::Light, ThemeMode::Dark] {
        let original = ViewState::with_theme(start);
        let after = toggle_times(original.clone(), 4);
        assert_eq!(after.dark_mode(), original.dark_mode());
    }
}

#[test]
fn odd_toggles_flip_the_mode() {
    let state = toggle_times(ViewState::new(), 3);
    assert!(state.dark_mode());
    assert_eq!(state.view().theme.attr(), "dark");
}

#[test]
fn dark_theme_name_starts_dark() {
    assert_eq!(ThemeMode::from_theme_name("Dark"), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_theme_name("minty"), ThemeMode::Light);
}
