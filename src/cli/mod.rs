//! Command-line interface for the Clientele customer directory.

pub mod commands;
pub mod output;
pub mod types;

pub use output::{output, CommandOutput};
pub use types::{Cli, Commands};

/// Report a command failure and exit nonzero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) {
    if json_mode {
        eprintln!(
            "{}",
            serde_json::json!({ "error": format!("{err:#}") })
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
