use crate::{Msg, NavAction};

/// Form field carrying the link typed into the primary form.
pub const VIDEO_URL_FIELD: &str = "video_url";
/// Form field carrying the label chosen in the extra-feature selector.
pub const OPTION_FIELD: &str = "option";

/// Named client-side hooks. The set is closed; the page is generated from it, so every button
/// the client can press has a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    IosShortcut,
    ApiDoc,
    Downloader,
    About,
    PrimarySubmit,
    OptionSubmit,
}

/// Core entry point a trigger is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerBinding {
    Navigation(NavAction),
    ParseVideo,
    OptionHandler,
}

impl Trigger {
    pub const ALL: [Trigger; 6] = [
        Trigger::IosShortcut,
        Trigger::ApiDoc,
        Trigger::Downloader,
        Trigger::About,
        Trigger::PrimarySubmit,
        Trigger::OptionSubmit,
    ];

    /// Wire name used in bridge routes.
    pub fn name(self) -> &'static str {
        match self {
            Trigger::IosShortcut => "onIosShortcut",
            Trigger::ApiDoc => "onApiDoc",
            Trigger::Downloader => "onDownloader",
            Trigger::About => "onAbout",
            Trigger::PrimarySubmit => "onPrimarySubmit",
            Trigger::OptionSubmit => "onOptionSubmit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|trigger| trigger.name() == name)
    }

    /// Client-side function the rendered page calls for this trigger.
    pub fn js_function(self) -> &'static str {
        match self {
            Trigger::IosShortcut => "showIosShortcut",
            Trigger::ApiDoc => "showApiDoc",
            Trigger::Downloader => "showDownloader",
            Trigger::About => "showAbout",
            Trigger::PrimarySubmit => "submitVideoUrl",
            Trigger::OptionSubmit => "submitExtraOption",
        }
    }

    pub fn binding(self) -> TriggerBinding {
        match self {
            Trigger::IosShortcut => TriggerBinding::Navigation(NavAction::ShowIosShortcut),
            Trigger::ApiDoc => TriggerBinding::Navigation(NavAction::ShowApiDoc),
            Trigger::Downloader => TriggerBinding::Navigation(NavAction::ShowDownloader),
            Trigger::About => TriggerBinding::Navigation(NavAction::ShowAbout),
            Trigger::PrimarySubmit => TriggerBinding::ParseVideo,
            Trigger::OptionSubmit => TriggerBinding::OptionHandler,
        }
    }
}

/// Form fields carried with a trigger. Navigation triggers ignore both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgePayload {
    pub video_url: Option<String>,
    pub option: Option<String>,
}

/// Translates one trigger firing into the messages the session applies, in order.
pub fn messages_for(trigger: Trigger, payload: BridgePayload) -> Vec<Msg> {
    match trigger.binding() {
        TriggerBinding::Navigation(action) => vec![Msg::NavClicked(action)],
        TriggerBinding::ParseVideo => {
            vec![Msg::PrimarySubmitted(payload.video_url.unwrap_or_default())]
        }
        TriggerBinding::OptionHandler => vec![Msg::OptionSubmitted(payload.option)],
    }
}
