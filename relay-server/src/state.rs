use crate::config::Settings;
use crate::notion_client::{NotionClient, UpstreamError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub notion: Arc<NotionClient>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self, UpstreamError> {
        let notion = NotionClient::new(&settings.notion)?;
        Ok(Self {
            notion: Arc::new(notion),
        })
    }
}
