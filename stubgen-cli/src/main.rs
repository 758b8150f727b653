use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "build-stubs",
    about = "Generate pyscript type stubs from the MDN event reference",
    long_about = "Fetches the MDN event reference, extracts every DOM event name and renders them \
                  into event_types.pyi as a Literal type alias"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// URL of the event reference markdown
    #[arg(long, env = "EVENT_TYPES_URL", global = true)]
    url: Option<String>,

    /// Read the event reference from a local markdown file instead of fetching it
    #[arg(long, conflicts_with = "url", global = true)]
    input: Option<PathBuf>,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// Retries for transient HTTP failures (default: 3)
    #[arg(long, global = true)]
    max_retries: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render event_types.pyi (the default when no command is given)
    Generate(commands::generate::Generate),
    /// Print the extracted event names
    List(commands::list::List),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let source = commands::SourceOptions {
        url: cli.url.clone(),
        input: cli.input.clone(),
        timeout_seconds: cli.timeout,
        max_retries: cli.max_retries,
    };

    match &cli.command {
        Some(Commands::Generate(cmd)) => cmd.execute(&source).await,
        Some(Commands::List(cmd)) => cmd.execute(&source).await,
        None => commands::generate::Generate::default().execute(&source).await,
    }
}
