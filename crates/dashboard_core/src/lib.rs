//! Dashboard core: pure session state machine, navigation and option routing.
mod bridge;
mod config;
mod effect;
mod msg;
mod nav;
mod notice;
mod option;
mod state;
mod update;
mod validate;
mod view_model;

pub use bridge::{
    messages_for, BridgePayload, Trigger, TriggerBinding, OPTION_FIELD, VIDEO_URL_FIELD,
};
pub use config::{Config, ConfigError};
pub use effect::Effect;
pub use msg::Msg;
pub use nav::{dispatch, trigger_for, NavAction};
pub use notice::Notice;
pub use option::{classify, handle_option, ExtraOption};
pub use state::{ThemeMode, ViewState};
pub use update::update;
pub use validate::{validate_selection, ValidationError, VideoUrl};
pub use view_model::DashboardView;
