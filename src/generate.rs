//! Stub generation: fetch, extract, render, write

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::client::SourceClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::extract::extract_event_types;
use crate::render::{RenderConfig, StubRenderer};

/// Produces `event_types.pyi` from the MDN event reference
pub struct StubGenerator {
    client: SourceClient,
    renderer: StubRenderer,
}

impl StubGenerator {
    /// Create a generator with default client and render configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new(), RenderConfig::default())
    }

    /// Create a generator with custom configuration.
    ///
    /// Unless `render_config` names a source, the header of the rendered stub
    /// names the client's source URL.
    pub fn with_config(client_config: ClientConfig, render_config: RenderConfig) -> Result<Self> {
        let source = render_config
            .source
            .clone()
            .unwrap_or_else(|| client_config.effective_source_url().to_string());
        let render_config = RenderConfig {
            source: Some(source),
            ..render_config
        };
        Ok(Self {
            client: SourceClient::with_config(client_config)?,
            renderer: StubRenderer::with_config(render_config),
        })
    }

    pub fn client(&self) -> &SourceClient {
        &self.client
    }

    /// Fetch the event reference and return the extracted event names
    pub async fn fetch_event_types(&self) -> Result<Vec<String>> {
        self.client.fetch_event_types().await
    }

    /// Fetch the event reference and return the rendered stub text
    pub async fn prepare_event_types_pyi(&self) -> Result<String> {
        let markdown = self.client.fetch_markdown().await?;
        self.render_markdown(&markdown)
    }

    /// Extract event names from already-fetched markdown and render the stub
    pub fn render_markdown(&self, markdown: &str) -> Result<String> {
        debug!("Parsing event reference");
        let events = extract_event_types(markdown)?;
        info!(events = events.len(), "Rendering event_types.pyi");
        self.renderer.render(&events)
    }

    /// Generate the stub and write it to `output_path`
    #[instrument(skip(self, output_path), fields(output = %output_path.as_ref().display()))]
    pub async fn execute<P: AsRef<Path>>(&self, output_path: P) -> Result<()> {
        info!("Generating dynamic files for pyscript-stubs");
        let markdown = self.client.fetch_markdown().await?;
        self.render_and_write(&markdown, output_path.as_ref()).await
    }

    /// Generate the stub from already-loaded markdown and write it to
    /// `output_path`. Nothing is written when extraction fails.
    #[instrument(skip_all, fields(output = %output_path.as_ref().display()))]
    pub async fn execute_with_markdown<P: AsRef<Path>>(
        &self,
        markdown: &str,
        output_path: P,
    ) -> Result<()> {
        info!("Generating dynamic files for pyscript-stubs");
        self.render_and_write(markdown, output_path.as_ref()).await
    }

    async fn render_and_write(&self, markdown: &str, output_path: &Path) -> Result<()> {
        let rendered = self.render_markdown(markdown)?;
        write_stub(output_path, &rendered).await
    }
}

/// Write rendered stub text, creating missing parent directories
pub async fn write_stub(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    info!("Writing {}", path.display());
    tokio::fs::write(path, contents).await?;
    Ok(())
}
