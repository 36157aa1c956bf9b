use std::sync::Arc;

use dashboard_core::{Effect, NavAction, Notice};
use dashboard_logging::{dash_debug, dash_error, dash_info};

use crate::{entry_point_name, CollaboratorError, Collaborators, Output, OutputSink};

/// Executes effects against the collaborators, one call per effect.
#[derive(Clone)]
pub struct EffectRunner {
    collaborators: Arc<dyn Collaborators>,
}

impl EffectRunner {
    pub fn new(collaborators: Arc<dyn Collaborators>) -> Self {
        Self { collaborators }
    }

    /// Runs effects in order. Collaborator failures become notices and never abort the rest.
    pub fn run(&self, effects: Vec<Effect>, sink: &dyn OutputSink) {
        for effect in effects {
            match effect {
                Effect::OpenPanel(action) => {
                    let entry_point = entry_point_name(action);
                    dash_info!("OpenPanel {}", entry_point);
                    let result = self.open_panel(action, sink);
                    report(entry_point, result, sink);
                }
                Effect::ParseVideo { url } => {
                    dash_info!(
                        "ParseVideo url={}",
                        url.as_deref().unwrap_or("<prompt>")
                    );
                    let result = self.collaborators.parse_video(url.as_deref(), sink);
                    report("parseVideo", result, sink);
                }
                Effect::ShowNotice(notice) => {
                    dash_debug!("ShowNotice {:?}", notice);
                    sink.emit(Output::Notice(notice));
                }
            }
        }
    }

    fn open_panel(&self, action: NavAction, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        match action {
            NavAction::ShowIosShortcut => self.collaborators.render_ios_shortcut_panel(sink),
            NavAction::ShowApiDoc => self.collaborators.render_api_doc_panel(sink),
            NavAction::ShowDownloader => self.collaborators.render_downloader_panel(sink),
            NavAction::ShowAbout => self.collaborators.render_about_panel(sink),
        }
    }
}

fn report(entry_point: &'static str, result: Result<(), CollaboratorError>, sink: &dyn OutputSink) {
    if let Err(err) = result {
        dash_error!("{} failed: {}", entry_point, err);
        sink.emit(Output::Notice(Notice::CollaboratorFailed { entry_point }));
    }
}
