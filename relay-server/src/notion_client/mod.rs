use crate::config::NotionConfig;
use crate::errors::ApiError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::{InvalidHeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const TOKEN_ENDPOINT: &str = "/v1/oauth/token";
const INTROSPECT_ENDPOINT: &str = "/v1/oauth/introspect";
const REVOKE_ENDPOINT: &str = "/v1/oauth/revoke";

/// Client for the Notion OAuth endpoints.
///
/// Every request is a JSON POST authenticated with the integration's
/// client credentials using HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    config: NotionConfig,
}

/// Body of the authorization code exchange
#[derive(Debug, Serialize, Clone, PartialEq)]
struct TokenExchangeRequest<'a> {
    grant_type: &'static str,
    code: &'a str,
    redirect_uri: &'a str,
}

/// Body of the introspection and revocation requests
#[derive(Debug, Serialize, Clone, PartialEq)]
struct TokenBody<'a> {
    token: &'a str,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Result<Self, UpstreamError> {
        let mut authorization =
            HeaderValue::from_str(&basic_auth(&config.client_id, &config.client_secret))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Trade an authorization code for an access token
    pub async fn exchange_code(&self, code: &str) -> Result<Value, UpstreamError> {
        let body = TokenExchangeRequest {
            grant_type: "authorization_code",
            code,
            redirect_uri: &self.config.redirect_uri,
        };
        self.send_request(TOKEN_ENDPOINT, &body).await
    }

    /// Ask Notion whether an access token is still active
    pub async fn introspect_token(&self, token: &str) -> Result<Value, UpstreamError> {
        self.send_request(INTROSPECT_ENDPOINT, &TokenBody { token })
            .await
    }

    /// Revoke an access token
    pub async fn revoke_token(&self, token: &str) -> Result<Value, UpstreamError> {
        self.send_request(REVOKE_ENDPOINT, &TokenBody { token }).await
    }

    /// Send a JSON POST to Notion and return the parsed body of a 2xx response
    async fn send_request<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, UpstreamError> {
        let url = self.config.get_url(endpoint);
        debug!("Forwarding request to Notion at: {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // Notion error bodies are JSON; anything else is dropped
            let body = serde_json::from_slice(&bytes).ok();
            return Err(UpstreamError::Rejected { status, body });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Value of the `Authorization` header for the given client credentials
fn basic_auth(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

/// Errors that can occur when calling Notion
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to build request to Notion: {0}")]
    BuildError(#[from] InvalidHeaderValue),
    #[error("Timed out waiting for Notion: {0}")]
    Timeout(reqwest::Error),
    #[error("Failed to connect to Notion: {0}")]
    Unavailable(reqwest::Error),
    #[error("Failed to send request to Notion: {0}")]
    RequestError(reqwest::Error),
    #[error("Notion request failed with status: {status}")]
    Rejected {
        status: StatusCode,
        body: Option<Value>,
    },
    #[error("Failed to parse Notion response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(err)
        } else if err.is_connect() {
            UpstreamError::Unavailable(err)
        } else {
            UpstreamError::RequestError(err)
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::BuildError(_) => ApiError::internal("Failed to build request to Notion"),
            UpstreamError::Timeout(_) => {
                ApiError::gateway_timeout("Notion is unavailable: request timed out")
            }
            UpstreamError::Unavailable(_) => {
                ApiError::service_unavailable("Notion is unavailable: connection failed")
            }
            UpstreamError::RequestError(_) => {
                ApiError::bad_gateway("Failed to send request to Notion")
            }
            UpstreamError::Rejected { status, body } => {
                let error = ApiError::bad_gateway(format!(
                    "Notion rejected the request with status {}",
                    status.as_u16()
                ));
                match body {
                    Some(body) => error.with_data(body),
                    None => error,
                }
            }
            UpstreamError::ParseError(e) => {
                ApiError::bad_gateway(format!("Failed to parse Notion response: {}", e))
            }
        }
    }
}
