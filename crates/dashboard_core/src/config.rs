use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required configuration key `{0}`")]
    MissingKey(&'static str),
    #[error("configuration key `{0}` must not be empty")]
    EmptyValue(&'static str),
    #[error("faviconUrl is neither an absolute URL nor a relative path: {0}")]
    InvalidFavicon(String),
}

/// Process-wide page settings, resolved once at startup and shared read-only by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    theme: String,
    tab_title: String,
    description: String,
    favicon_url: String,
}

impl Config {
    pub fn new(
        theme: impl Into<String>,
        tab_title: impl Into<String>,
        description: impl Into<String>,
        favicon_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let theme = required("theme", theme.into())?;
        let tab_title = required("tabTitle", tab_title.into())?;
        let description = required("description", description.into())?;
        let favicon_url = required("faviconUrl", favicon_url.into())?;
        if !is_icon_reference(&favicon_url) {
            return Err(ConfigError::InvalidFavicon(favicon_url));
        }
        Ok(Self {
            theme,
            tab_title,
            description,
            favicon_url,
        })
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn tab_title(&self) -> &str {
        &self.tab_title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn favicon_url(&self) -> &str {
        &self.favicon_url
    }
}

fn required(key: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyValue(key));
    }
    Ok(trimmed.to_string())
}

fn is_icon_reference(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => !parsed.cannot_be_a_base(),
        // Relative references only need to survive being dropped into an href attribute.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            !value.chars().any(|c| c.is_whitespace() || c == '"' || c == '<' || c == '>')
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_relative_and_absolute_favicons() {
        assert!(Config::new("dark", "Downloader", "d", "/f.png").is_ok());
        assert!(Config::new("minty", "T", "d", "https://cdn.example.com/icon.png").is_ok());
        assert!(Config::new("minty", "T", "d", "static/icon.png").is_ok());
    }

    #[test]
    fn values_are_trimmed() {
        let config = Config::new(" dark ", " Downloader\n", "d", "/f.png").unwrap();
        assert_eq!(config.theme(), "dark");
        assert_eq!(config.tab_title(), "Downloader");
    }

    #[test]
    fn rejects_blank_values() {
        assert_eq!(
            Config::new("dark", "   ", "d", "/f.png"),
            Err(ConfigError::EmptyValue("tabTitle"))
        );
        assert_eq!(
            Config::new("", "T", "d", "/f.png"),
            Err(ConfigError::EmptyValue("theme"))
        );
    }

    #[test]
    fn rejects_unusable_favicon() {
        assert!(matches!(
            Config::new("dark", "T", "d", "icon file.png"),
            Err(ConfigError::InvalidFavicon(_))
        ));
        assert!(matches!(
            Config::new("dark", "T", "d", "mailto:someone@example.com"),
            Err(ConfigError::InvalidFavicon(_))
        ));
    }
}
