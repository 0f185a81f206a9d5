use serde::Deserialize;

/// Notion integration credentials and upstream settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotionConfig {
    /// OAuth client id of the public integration (`NOTION_CLIENT_ID`)
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret of the public integration (`NOTION_CLIENT_SECRET`)
    #[serde(default)]
    pub client_secret: String,

    /// Redirect URI registered with the integration (`NOTION_REDIRECT_URI`)
    #[serde(default)]
    pub redirect_uri: String,

    /// Base URL of the Notion API (default: https://api.notion.com)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timeout for a whole upstream request in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Timeout for establishing an upstream connection in seconds (default: 5)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

pub fn default_api_url() -> String {
    "https://api.notion.com".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            api_url: default_api_url(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl NotionConfig {
    /// Returns the full URL of a Notion API endpoint
    pub fn get_url<S: Into<String>>(&self, path: S) -> String {
        let path = path.into();
        let base = self.api_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}
