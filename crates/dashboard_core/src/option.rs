use dashboard_logging::dash_info;

use crate::{Effect, Notice};

/// Extra features offered by the secondary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraOption {
    BatchDownload,
    ProfileDownload,
    MusicOnly,
}

impl ExtraOption {
    /// Classification order: the first marker found in a label wins.
    pub const PRIORITY: [ExtraOption; 3] = [
        ExtraOption::BatchDownload,
        ExtraOption::ProfileDownload,
        ExtraOption::MusicOnly,
    ];

    /// Display label; it must contain [`ExtraOption::marker`] so the selection stays routable.
    pub fn label(self) -> &'static str {
        match self {
            ExtraOption::BatchDownload => "🔍 Batch download multiple videos",
            ExtraOption::ProfileDownload => "🔍 Download every video from a user profile",
            ExtraOption::MusicOnly => "🎵 Download music only",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            ExtraOption::BatchDownload => "batch",
            ExtraOption::ProfileDownload => "profile",
            ExtraOption::MusicOnly => "music",
        }
    }
}

/// Classifies a free-text label by case-insensitive marker search in priority order.
pub fn classify(label: &str) -> Option<ExtraOption> {
    let folded = label.to_lowercase();
    ExtraOption::PRIORITY
        .into_iter()
        .find(|option| folded.contains(option.marker()))
}

/// Routes a selected label to exactly one outcome.
///
/// Batch selections go to the video parser with whatever URL the caller supplies (the bridge
/// supplies none, leaving the parser to prompt). Features without a collaborator yield a pending
/// notice, and anything unrecognised yields the generic unsupported notice.
pub fn handle_option(selected_label: &str, url: Option<&str>) -> Vec<Effect> {
    match classify(selected_label) {
        Some(ExtraOption::BatchDownload) => vec![Effect::ParseVideo {
            url: url.map(ToOwned::to_owned),
        }],
        Some(pending) => vec![Effect::ShowNotice(Notice::FeaturePending(pending))],
        None => {
            dash_info!("Unroutable selection {:?}", selected_label);
            vec![Effect::ShowNotice(Notice::UnsupportedSelection)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_classifies_to_itself() {
        for option in ExtraOption::PRIORITY {
            assert_eq!(classify(option.label()), Some(option));
        }
    }

    #[test]
    fn batch_wins_over_later_markers() {
        assert_eq!(
            classify("batch music from a profile"),
            Some(ExtraOption::BatchDownload)
        );
        assert_eq!(
            classify("music of a profile"),
            Some(ExtraOption::ProfileDownload)
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("MUSIC ONLY"), Some(ExtraOption::MusicOnly));
        assert_eq!(classify("unknown option"), None);
        assert_eq!(classify(""), None);
    }
}
