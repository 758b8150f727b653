use anyhow::Result;
use clap::Args;
use mdn_event_stubs::{extract_event_types, SourceClient};
use serde::Serialize;
use tracing::info;

use super::SourceOptions;

#[derive(Args, Debug)]
pub struct List {
    /// Print a JSON object instead of one name per line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct EventListing<'a> {
    source: &'a str,
    count: usize,
    events: &'a [String],
}

impl List {
    pub async fn execute(&self, source: &SourceOptions) -> Result<()> {
        let client = SourceClient::with_config(source.client_config())?;
        let (markdown, origin) = source.load_markdown(&client).await?;
        let events = extract_event_types(&markdown)?;
        info!(events = events.len(), "Extracted event names");

        if self.json {
            let listing = EventListing {
                source: &origin,
                count: events.len(),
                events: &events,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for event in &events {
                println!("{event}");
            }
        }

        Ok(())
    }
}
