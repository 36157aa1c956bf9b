use thiserror::Error;

/// Input problems that block a form submission. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please paste a video link first.")]
    EmptyUrl,
    #[error("\"{0}\" does not look like a web link.")]
    MalformedUrl(String),
    #[error("Please choose one of the extra features.")]
    NoSelection,
}

/// A non-empty http(s) link with a host, kept exactly as the user typed it (minus outer whitespace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrl(String);

impl VideoUrl {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        let malformed = || ValidationError::MalformedUrl(trimmed.to_string());
        let parsed = url::Url::parse(trimmed).map_err(|_| malformed())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(malformed());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Accepts any non-blank selection; routing decides later whether it is supported.
pub fn validate_selection(label: Option<&str>) -> Result<&str, ValidationError> {
    match label.map(str::trim) {
        Some(label) if !label.is_empty() => Ok(label),
        _ => Err(ValidationError::NoSelection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_submitted_text() {
        let url = VideoUrl::parse("  https://vm.tiktok.com/ZMabc/ ").unwrap();
        assert_eq!(url.as_str(), "https://vm.tiktok.com/ZMabc/");
    }

    #[test]
    fn rejects_blank_and_non_web_input() {
        assert_eq!(VideoUrl::parse("   "), Err(ValidationError::EmptyUrl));
        assert_eq!(
            VideoUrl::parse("not a link"),
            Err(ValidationError::MalformedUrl("not a link".to_string()))
        );
        assert!(matches!(
            VideoUrl::parse("ftp://example.com/video.mp4"),
            Err(ValidationError::MalformedUrl(_))
        ));
    }

    #[test]
    fn blank_selection_is_rejected() {
        assert_eq!(validate_selection(None), Err(ValidationError::NoSelection));
        assert_eq!(validate_selection(Some("  ")), Err(ValidationError::NoSelection));
        assert_eq!(validate_selection(Some("anything")), Ok("anything"));
    }
}
