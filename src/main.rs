//! Clientele CLI entry point.

use clap::Parser;

use clientele::cli::{Cli, Commands};
use clientele::infrastructure::config::ConfigLoader;
use clientele::infrastructure::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging format and level come from config; fall back to defaults
    // when no config exists yet (e.g. before `init`).
    let logging_config = ConfigLoader::load()
        .map(|config| config.logging)
        .unwrap_or_default();
    if let Err(err) = logging::init(&logging_config) {
        eprintln!("Failed to initialize logging: {err:#}");
    }

    let result = match cli.command {
        Commands::Init(args) => clientele::cli::commands::init::execute(args, cli.json).await,
        Commands::Customer(args) => {
            clientele::cli::commands::customer::execute(args, cli.json).await
        }
    };

    if let Err(err) = result {
        clientele::cli::handle_error(err, cli.json);
    }
}
