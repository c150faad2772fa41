mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rebuildr",
    about = "Rebuild and publish a container image when its source goes stale"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pull, build, and push when the working copy is behind its remote
    Run {
        /// Override the rebuild decision (true/false, 1/0, yes/no)
        #[arg(value_parser = commands::parse_override)]
        rebuild_override: Option<bool>,
    },
    /// Report whether the working copy is behind its remote
    Check,
    /// Check git and docker setup and readiness
    Doctor,
    /// Write a rebuildr.toml skeleton
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { rebuild_override } => commands::run(rebuild_override).await?,
        Commands::Check => commands::check().await?,
        Commands::Doctor => commands::doctor().await?,
        Commands::Init => commands::init().await?,
    }

    Ok(())
}
