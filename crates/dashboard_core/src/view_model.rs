use crate::{ExtraOption, ThemeMode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardView {
    pub theme: ThemeMode,
    pub url_input: String,
    pub selected_label: Option<String>,
    pub selected_option: Option<ExtraOption>,
}

impl DashboardView {
    pub fn dark_mode(&self) -> bool {
        self.theme == ThemeMode::Dark
    }
}
