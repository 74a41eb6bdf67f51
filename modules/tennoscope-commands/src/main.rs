use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tennoscope_client::WorldStateClient;
use tennoscope_commands::{ReplySink, WorldStateCommands};

#[derive(Parser)]
#[command(name = "tennoscope")]
#[command(about = "Query Warframe worldstate cycles and the daily sortie")]
#[command(version)]
struct Cli {
    /// Platform segment of the API path (pc, ps4, xb1, swi)
    #[arg(long, default_value = "pc")]
    platform: String,

    /// Display language for upstream-formatted strings
    #[arg(long, default_value = "zh")]
    language: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the open-world cycle overview
    Plains,
    /// Show today's sortie
    Sortie,
}

struct StdoutSink;

#[async_trait]
impl ReplySink for StdoutSink {
    async fn send(&self, text: String) -> Result<()> {
        println!("{text}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tennoscope=info".parse()?))
        .init();

    let cli = Cli::parse();
    let api_url = format!(
        "https://api.warframestat.us/{}?language={}",
        cli.platform, cli.language
    );

    let commands = WorldStateCommands::new(Arc::new(WorldStateClient::new()), api_url);
    let sink = StdoutSink;

    match cli.command {
        Commands::Plains => commands.plains(&sink).await,
        Commands::Sortie => commands.sortie(&sink).await,
    }
}
