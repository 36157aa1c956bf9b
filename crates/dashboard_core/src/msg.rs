#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User pressed the theme toggle.
    ThemeToggled,
    /// User pressed one of the navigation bar buttons.
    NavClicked(crate::NavAction),
    /// User submitted the primary download form with this input.
    PrimarySubmitted(String),
    /// User submitted the extra-feature form; `None` when nothing was chosen.
    OptionSubmitted(Option<String>),
}
