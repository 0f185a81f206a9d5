pub(crate) use crate::config::notion::NotionConfig;
pub(crate) use crate::config::server::ServerConfig;
use config::Config;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

pub mod notion;
pub mod server;

/// Main configuration structure for the relay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// HTTP listener configuration (`RELAY_*`)
    pub server: ServerConfig,

    /// Notion integration configuration (`NOTION_*`)
    pub notion: NotionConfig,
}

/// Errors raised while loading or validating the configuration
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("{0} must be set to a non-empty value")]
    Missing(&'static str),
    #[error("{var} is not a valid absolute http(s) URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
    #[error("{0} must be greater than zero")]
    InvalidTimeout(&'static str),
}

impl Settings {
    /// Creates a new validated Settings instance from environment variables
    pub fn new() -> Result<Self, SettingsError> {
        let settings = Self {
            server: load_from_env("RELAY")?,
            notion: load_from_env("NOTION")?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the integration credentials are usable before serving requests
    pub fn validate(&self) -> Result<(), SettingsError> {
        let notion = &self.notion;
        if notion.client_id.trim().is_empty() {
            return Err(SettingsError::Missing("NOTION_CLIENT_ID"));
        }
        if notion.client_secret.trim().is_empty() {
            return Err(SettingsError::Missing("NOTION_CLIENT_SECRET"));
        }
        if notion.redirect_uri.trim().is_empty() {
            return Err(SettingsError::Missing("NOTION_REDIRECT_URI"));
        }
        validate_url("NOTION_REDIRECT_URI", &notion.redirect_uri)?;
        validate_url("NOTION_API_URL", &notion.api_url)?;
        if notion.request_timeout == 0 {
            return Err(SettingsError::InvalidTimeout("NOTION_REQUEST_TIMEOUT"));
        }
        if notion.connect_timeout == 0 {
            return Err(SettingsError::InvalidTimeout("NOTION_CONNECT_TIMEOUT"));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn for_test_with_mock(notion_mock: &wiremock::MockServer) -> Self {
        Self {
            server: ServerConfig {
                port: 0, // Let the OS choose a port
                ..Default::default()
            },
            notion: NotionConfig {
                client_id: "test-client-id".to_string(),
                client_secret: "test-client-secret".to_string(),
                redirect_uri: "http://localhost:3000/auth/notion/callback".to_string(),
                api_url: notion_mock.uri(),
                request_timeout: 1,
                connect_timeout: 1,
            },
        }
    }
}

/// Reads every `{prefix}_*` environment variable into `T`
fn load_from_env<T: DeserializeOwned>(prefix: &str) -> Result<T, SettingsError> {
    Ok(Config::builder()
        .add_source(
            config::Environment::with_prefix(prefix)
                .prefix_separator("_")
                .convert_case(config::Case::Snake),
        )
        .build()?
        .try_deserialize()?)
}

fn validate_url(var: &'static str, value: &str) -> Result<(), SettingsError> {
    let url = Url::parse(value).map_err(|e| SettingsError::InvalidUrl {
        var,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(SettingsError::InvalidUrl {
            var,
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}
