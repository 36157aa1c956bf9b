use crate::{NavAction, Notice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Render the panel owned by the collaborator behind this action.
    OpenPanel(NavAction),
    /// Hand a link (or nothing, letting the parser prompt) to the video parser.
    ParseVideo { url: Option<String> },
    ShowNotice(Notice),
}
