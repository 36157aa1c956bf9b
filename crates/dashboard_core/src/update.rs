use dashboard_logging::dash_warn;

use crate::{
    dispatch, handle_option, validate_selection, Effect, Msg, Notice, ViewState, VideoUrl,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Submissions are validated before anything is stored, so a rejected one leaves the state as it was.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::ThemeToggled => {
            state.toggle_theme();
            Vec::new()
        }
        Msg::NavClicked(action) => vec![dispatch(action)],
        Msg::PrimarySubmitted(input) => match VideoUrl::parse(&input) {
            Ok(url) => {
                state.set_url_input(url.as_str().to_owned());
                vec![Effect::ParseVideo {
                    url: Some(url.into_string()),
                }]
            }
            Err(err) => {
                dash_warn!("Primary form rejected: {}", err);
                vec![Effect::ShowNotice(Notice::Invalid(err))]
            }
        },
        Msg::OptionSubmitted(label) => match validate_selection(label.as_deref()) {
            Ok(label) => {
                state.select_option(label.to_owned());
                handle_option(label, None)
            }
            Err(err) => {
                dash_warn!("Option form rejected: {}", err);
                vec![Effect::ShowNotice(Notice::Invalid(err))]
            }
        },
    };

    (state, effects)
}
