//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod analyze;
mod task;

pub use task::TaskCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a site URL for analysis and follow it until it finishes
    Analyze {
        /// Site URL to analyze
        url: String,
    },
    /// Inspect existing analysis tasks
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Analyze { url } => analyze::handle_analyze(&url, config).await,
        Commands::Task { command } => task::handle_task_command(command, config).await,
    }
}
