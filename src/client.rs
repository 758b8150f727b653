//! HTTP client for the event reference source

use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::document::{parse_markdown, Document};
use crate::error::{Result, StubError};
use crate::extract::extract_all;
use crate::retry::with_retry;

/// Fetches the raw markdown of the event reference
#[derive(Clone)]
pub struct SourceClient {
    client: Client,
    config: ClientConfig,
}

impl SourceClient {
    /// Create a client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use mdn_event_stubs::SourceClient;
    ///
    /// let client = SourceClient::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn source_url(&self) -> &str {
        self.config.effective_source_url()
    }

    /// Fetch the raw markdown text of the event reference
    ///
    /// # Errors
    ///
    /// * `StubError::RequestError` - If the HTTP request fails
    /// * `StubError::ApiError` - If the source answers with a non-success status
    #[instrument(skip(self), fields(url = %self.source_url()))]
    pub async fn fetch_markdown(&self) -> Result<String> {
        debug!("Fetching event reference");
        let response = self.make_request(self.source_url()).await?;
        let text = response.text().await?;
        info!(bytes = text.len(), "Fetched event reference");
        Ok(text)
    }

    /// Fetch and parse the event reference
    pub async fn fetch_document(&self) -> Result<Document> {
        let markdown = self.fetch_markdown().await?;
        debug!("Parsing {}", self.source_url());
        Ok(parse_markdown(&markdown))
    }

    /// Fetch the event reference and extract its event names
    pub async fn fetch_event_types(&self) -> Result<Vec<String>> {
        let document = self.fetch_document().await?;
        extract_all(&document)
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let response = with_retry(
            || async {
                debug!("Making request to: {}", url);
                let response = self.client.get(url).send().await.map_err(StubError::from)?;

                // Server errors and throttling are surfaced as retryable errors
                if response.status().is_server_error() || response.status().as_u16() == 429 {
                    return Err(StubError::ApiError {
                        status: response.status().as_u16(),
                        message: response
                            .status()
                            .canonical_reason()
                            .unwrap_or("Unknown error")
                            .to_string(),
                    });
                }

                Ok(response)
            },
            &self.config.retry_config,
            "Event reference request",
        )
        .await?;

        if !response.status().is_success() {
            warn!("Request failed with status: {}", response.status());
            return Err(StubError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}
