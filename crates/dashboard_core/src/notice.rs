use crate::{ExtraOption, ValidationError};

/// A user-visible message rendered into the page's main region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FeaturePending(ExtraOption),
    UnsupportedSelection,
    Invalid(ValidationError),
    CollaboratorFailed { entry_point: &'static str },
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::FeaturePending(ExtraOption::MusicOnly) => {
                "Music-only downloads will be available soon.".to_string()
            }
            Notice::FeaturePending(ExtraOption::ProfileDownload) => {
                "Downloading a whole user profile is still in development and will be available soon."
                    .to_string()
            }
            Notice::FeaturePending(ExtraOption::BatchDownload) => {
                "Batch downloads will be available soon.".to_string()
            }
            Notice::UnsupportedSelection => {
                "The selected feature is not available right now.".to_string()
            }
            Notice::Invalid(err) => err.to_string(),
            Notice::CollaboratorFailed { entry_point } => {
                format!("Something went wrong in {entry_point}. Please try again.")
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::Invalid(_) | Notice::CollaboratorFailed { .. }
        )
    }
}
