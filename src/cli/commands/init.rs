//! `clientele init` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::adapters::sqlite::initialize_from_config;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

const CONFIG_DIR: &str = ".clientele";
const CONFIG_FILE: &str = ".clientele/config.yaml";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force reinitialization even if already initialized
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
struct InitOutput {
    config_path: String,
    database_path: String,
    created: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.created {
            format!(
                "Initialized Clientele.\n  config:   {}\n  database: {}",
                self.config_path, self.database_path
            )
        } else {
            format!(
                "Already initialized (use --force to rewrite config).\n  config:   {}\n  database: {}",
                self.config_path, self.database_path
            )
        }
    }
}

pub async fn execute(args: InitArgs, json: bool) -> Result<()> {
    let config_exists = Path::new(CONFIG_FILE).exists();

    let created = if config_exists && !args.force {
        false
    } else {
        let defaults = Config::default();
        std::fs::create_dir_all(CONFIG_DIR).context("Failed to create config directory")?;
        let yaml = format!(
            "database:\n  path: {}\n  max_connections: {}\nlogging:\n  level: {}\n  format: {}\n",
            defaults.database.path,
            defaults.database.max_connections,
            defaults.logging.level,
            defaults.logging.format
        );
        std::fs::write(CONFIG_FILE, yaml).context("Failed to write config file")?;
        true
    };

    // Honor env overrides and any pre-existing config.
    let config = crate::infrastructure::config::ConfigLoader::load().unwrap_or_default();

    // Creates the database file and applies pending migrations.
    let pool = initialize_from_config(&config.database)
        .await
        .context("Failed to initialize database")?;
    pool.close().await;

    output(
        &InitOutput {
            config_path: CONFIG_FILE.to_string(),
            database_path: config.database.path.clone(),
            created,
        },
        json,
    );
    Ok(())
}
