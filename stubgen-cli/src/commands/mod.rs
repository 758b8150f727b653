pub mod generate;
pub mod list;

use std::path::PathBuf;

use anyhow::{Context, Result};
use mdn_event_stubs::{ClientConfig, RenderConfig, RetryConfig, SourceClient, StubGenerator};
use tracing::info;

/// Where the event reference comes from, shared by all commands
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub url: Option<String>,
    pub input: Option<PathBuf>,
    pub timeout_seconds: Option<u64>,
    pub max_retries: Option<u32>,
}

impl SourceOptions {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();

        if let Some(url) = &self.url {
            config = config.with_source_url(url);
        }
        if let Some(seconds) = self.timeout_seconds {
            config = config.with_timeout_seconds(seconds);
        }
        if let Some(max_retries) = self.max_retries {
            config = config.with_retry_config(RetryConfig::new().with_max_retries(max_retries));
        }

        config
    }

    /// Build a stub generator whose header names this source
    pub fn generator(&self, render_config: RenderConfig) -> Result<StubGenerator> {
        let render_config = match &self.input {
            Some(path) if render_config.source.is_none() => RenderConfig {
                source: Some(path.display().to_string()),
                ..render_config
            },
            _ => render_config,
        };
        Ok(StubGenerator::with_config(self.client_config(), render_config)?)
    }

    /// Load the markdown source and a description of where it came from.
    ///
    /// `client` is only used when no local input file was given.
    pub async fn load_markdown(&self, client: &SourceClient) -> Result<(String, String)> {
        if let Some(path) = &self.input {
            info!(path = %path.display(), "Reading event reference from file");
            let markdown = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return Ok((markdown, path.display().to_string()));
        }

        let markdown = client.fetch_markdown().await?;
        Ok((markdown, client.source_url().to_string()))
    }
}
