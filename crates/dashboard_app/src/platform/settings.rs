use std::fs;
use std::path::{Path, PathBuf};

use dashboard_core::{Config, ConfigError};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
    #[error("server.{0} must be greater than zero")]
    ZeroLimit(&'static str),
}

/// Front-end settings; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ServerSettings {
    pub bind: String,
    pub session_idle_secs: u64,
    pub api_docs_url: String,
    pub parse_endpoint: String,
    pub max_connections: usize,
    pub max_sessions: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            session_idle_secs: 30 * 60,
            api_docs_url: "/docs".to_string(),
            parse_endpoint: "/api/hybrid/video_data".to_string(),
            max_connections: 64,
            max_sessions: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: Config,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    theme: Option<String>,
    tab_title: Option<String>,
    description: Option<String>,
    favicon_url: Option<String>,
    #[serde(default)]
    server: ServerSettings,
}

/// CLI argument first, then `DASHBOARD_CONFIG`, then `config.yaml`.
pub fn resolve_config_path(cli_arg: Option<String>, env_value: Option<String>) -> PathBuf {
    let usable = |value: &String| !value.trim().is_empty();
    cli_arg
        .filter(usable)
        .or_else(|| env_value.filter(usable))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn load(path: &Path) -> Result<Settings, ConfigLoadError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml(&text)
}

pub fn from_yaml(text: &str) -> Result<Settings, ConfigLoadError> {
    let raw: RawSettings = serde_yaml::from_str(text)?;
    let config = Config::new(
        raw.theme.ok_or(ConfigError::MissingKey("theme"))?,
        raw.tab_title.ok_or(ConfigError::MissingKey("tabTitle"))?,
        raw.description.ok_or(ConfigError::MissingKey("description"))?,
        raw.favicon_url.ok_or(ConfigError::MissingKey("faviconUrl"))?,
    )?;
    let server = raw.server;
    for (key, value) in [
        ("sessionIdleSecs", server.session_idle_secs),
        ("maxConnections", server.max_connections as u64),
        ("maxSessions", server.max_sessions as u64),
    ] {
        if value == 0 {
            return Err(ConfigLoadError::ZeroLimit(key));
        }
    }
    Ok(Settings {
        config,
        server,
    })
}
