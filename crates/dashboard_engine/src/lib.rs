//! Dashboard engine: effect execution and per-session state ownership.
mod collaborators;
mod output;
mod runner;
mod session;

pub use collaborators::{entry_point_name, CollaboratorError, Collaborators};
pub use output::{CollectingSink, Output, OutputSink};
pub use runner::EffectRunner;
pub use session::{SessionError, SessionId, SessionRegistry, DEFAULT_MAX_SESSIONS};
