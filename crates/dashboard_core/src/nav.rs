use crate::{Effect, Trigger};

/// Secondary navigation actions. Each one opens a panel rendered by an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    ShowIosShortcut,
    ShowApiDoc,
    ShowDownloader,
    ShowAbout,
}

impl NavAction {
    /// Navigation bar order.
    pub const ALL: [NavAction; 4] = [
        NavAction::ShowIosShortcut,
        NavAction::ShowApiDoc,
        NavAction::ShowDownloader,
        NavAction::ShowAbout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavAction::ShowIosShortcut => "iOS Shortcut",
            NavAction::ShowApiDoc => "API Docs",
            NavAction::ShowDownloader => "Downloader",
            NavAction::ShowAbout => "About",
        }
    }
}

/// Maps a navigation action to the one panel effect it produces.
///
/// Reads and writes no session state, so repeating an action simply reopens the panel.
pub fn dispatch(action: NavAction) -> Effect {
    Effect::OpenPanel(action)
}

/// Bridge trigger bound to a navigation action.
pub fn trigger_for(action: NavAction) -> Trigger {
    match action {
        NavAction::ShowIosShortcut => Trigger::IosShortcut,
        NavAction::ShowApiDoc => Trigger::ApiDoc,
        NavAction::ShowDownloader => Trigger::Downloader,
        NavAction::ShowAbout => Trigger::About,
    }
}
