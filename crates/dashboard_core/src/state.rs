use crate::view_model::DashboardView;
use crate::{classify, ExtraOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Initial mode for a configured theme name; only `dark` starts dark.
    pub fn from_theme_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value of the `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Per-session view state. Owned by exactly one session and only changed through `update`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    theme: ThemeMode,
    url_input: String,
    selected_label: Option<String>,
    selected_option: Option<ExtraOption>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            theme: self.theme,
            url_input: self.url_input.clone(),
            selected_label: self.selected_label.clone(),
            selected_option: self.selected_option,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.theme == ThemeMode::Dark
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_label.as_deref()
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        self.url_input = text;
    }

    pub(crate) fn select_option(&mut self, label: String) {
        self.selected_option = classify(&label);
        self.selected_label = Some(label);
    }
}
