use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mdn_event_stubs::{RenderConfig, DEFAULT_OUTPUT_PATH};

use super::SourceOptions;

#[derive(Args, Debug)]
pub struct Generate {
    /// Output path of the generated stub
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print the stub to stdout instead of writing it
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Name of the generated type alias
    #[arg(long, default_value = "EventType")]
    alias: String,

    /// Keep only the first occurrence of each event name
    #[arg(long)]
    dedupe: bool,
}

impl Default for Generate {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            stdout: false,
            alias: "EventType".to_string(),
            dedupe: false,
        }
    }
}

impl Generate {
    pub async fn execute(&self, source: &SourceOptions) -> Result<()> {
        let generator = source.generator(RenderConfig {
            alias_name: self.alias.clone(),
            dedupe: self.dedupe,
            ..RenderConfig::default()
        })?;

        if self.stdout {
            let (markdown, _) = source.load_markdown(generator.client()).await?;
            print!("{}", generator.render_markdown(&markdown)?);
        } else if source.input.is_some() {
            let (markdown, _) = source.load_markdown(generator.client()).await?;
            generator.execute_with_markdown(&markdown, &self.output).await?;
        } else {
            generator.execute(&self.output).await?;
        }

        Ok(())
    }
}
