use dashboard_core::NavAction;
use thiserror::Error;

use crate::OutputSink;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("{0}")]
    Failed(String),
}

/// External entry points the dashboard invokes by name.
///
/// Implementations render whatever they produce through `sink`. They may be called repeatedly
/// for the same session, so each call must stand on its own.
pub trait Collaborators: Send + Sync {
    fn render_ios_shortcut_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError>;

    fn render_api_doc_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError>;

    fn render_downloader_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError>;

    fn render_about_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError>;

    /// `None` asks the parser to prompt for links itself.
    fn parse_video(
        &self,
        url: Option<&str>,
        sink: &dyn OutputSink,
    ) -> Result<(), CollaboratorError>;
}

/// Name of the panel entry point behind a navigation action, as used in logs and notices.
pub fn entry_point_name(action: NavAction) -> &'static str {
    match action {
        NavAction::ShowIosShortcut => "renderIosShortcutPanel",
        NavAction::ShowApiDoc => "renderApiDocPanel",
        NavAction::ShowDownloader => "renderDownloaderPanel",
        NavAction::ShowAbout => "renderAboutPanel",
    }
}
