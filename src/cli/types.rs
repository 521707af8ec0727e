//! CLI type definitions
//!
//! Clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::customer::CustomerArgs;
use crate::cli::commands::init::InitArgs;

#[derive(Parser)]
#[command(name = "clientele")]
#[command(about = "Clientele - customer directory service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Clientele configuration and database
    Init(InitArgs),

    /// Customer management commands
    Customer(CustomerArgs),
}
