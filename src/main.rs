//! Terna Sync CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use terna_sync::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(args) => terna_sync::cli::commands::sync::execute(args, cli.json).await,
        Commands::Status(args) => terna_sync::cli::commands::status::execute(args, cli.json).await,
    };

    if let Err(err) = result {
        terna_sync::cli::handle_error(err, cli.json);
    }
}
