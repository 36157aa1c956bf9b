#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use dashboard_engine::{CollaboratorError, Collaborators, Output, OutputSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IosShortcut,
    ApiDoc,
    Downloader,
    About,
    ParseVideo(Option<String>),
}

/// Records every entry point invocation and renders a marker fragment for it.
#[derive(Default)]
pub struct RecordingCollaborators {
    calls: Mutex<Vec<Call>>,
    failing: Option<Call>,
    panicking: Option<Call>,
}

impl RecordingCollaborators {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_on(call: Call) -> Arc<Self> {
        Arc::new(Self {
            failing: Some(call),
            ..Self::default()
        })
    }

    pub fn panicking_on(call: Call) -> Arc<Self> {
        Arc::new(Self {
            panicking: Some(call),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.panicking.as_ref() == Some(&call) {
            panic!("collaborator crashed on {call:?}");
        }
        if self.failing.as_ref() == Some(&call) {
            return Err(CollaboratorError::Failed("boom".to_string()));
        }
        sink.emit(Output::Html(format!("<p>{call:?}</p>")));
        Ok(())
    }
}

impl Collaborators for RecordingCollaborators {
    fn render_ios_shortcut_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        self.record(Call::IosShortcut, sink)
    }

    fn render_api_doc_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        self.record(Call::ApiDoc, sink)
    }

    fn render_downloader_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        self.record(Call::Downloader, sink)
    }

    fn render_about_panel(&self, sink: &dyn OutputSink) -> Result<(), CollaboratorError> {
        self.record(Call::About, sink)
    }

    fn parse_video(
        &self,
        url: Option<&str>,
        sink: &dyn OutputSink,
    ) -> Result<(), CollaboratorError> {
        self.record(Call::ParseVideo(url.map(ToOwned::to_owned)), sink)
    }
}

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}
