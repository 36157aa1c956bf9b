use std::sync::{Mutex, PoisonError};

use dashboard_core::Notice;

/// Something rendered into the page's output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Markup produced by a collaborator.
    Html(String),
    Notice(Notice),
}

pub trait OutputSink: Send + Sync {
    fn emit(&self, output: Output);
}

/// Buffers outputs for one interaction so they can be returned to the client in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    outputs: Mutex<Vec<Output>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Output> {
        let mut outputs = self.outputs.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *outputs)
    }
}

impl OutputSink for CollectingSink {
    fn emit(&self, output: Output) {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(output);
    }
}
