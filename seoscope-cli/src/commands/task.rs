//! Task command handlers
//!
//! One-shot access to the log and result of existing tasks, plus a watch
//! mode that re-attaches the poll loop to a task id.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use seoscope_client::BackendClient;
use seoscope_core::domain::task::{TaskId, TaskStatus};

use crate::config::Config;
use crate::poller::PollSession;
use crate::screen::TermScreen;

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Print the current progress log for a task
    Log {
        /// Backend-assigned task id
        id: String,
    },
    /// Print the final result for a task, if one exists yet
    Result {
        /// Backend-assigned task id
        id: String,
    },
    /// Follow an existing task until it reaches a terminal status
    Watch {
        /// Backend-assigned task id
        id: String,
    },
}

/// Handle task commands
///
/// Routes task subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The task command to execute
/// * `config` - The CLI configuration
pub async fn handle_task_command(command: TaskCommands, config: &Config) -> Result<()> {
    let client = BackendClient::new(config.backend_url.clone());

    match command {
        TaskCommands::Log { id } => show_log(&client, TaskId::from(id)).await,
        TaskCommands::Result { id } => show_result(&client, TaskId::from(id)).await,
        TaskCommands::Watch { id } => watch(client, TaskId::from(id), config).await,
    }
}

/// Fetch and print the current log snapshot
async fn show_log(client: &BackendClient, task_id: TaskId) -> Result<()> {
    let fetched = client.fetch_log(&task_id).await;
    if matches!(&fetched, Err(err) if err.is_not_found()) {
        println!("{}", format!("No such task: {}", task_id).yellow());
        return Ok(());
    }
    let snapshot = fetched.with_context(|| format!("failed to fetch log for task {}", task_id))?;

    println!("{}", format!("Task {}", task_id).bold());
    println!("  Status: {}", colorize_status(snapshot.status));

    if snapshot.log.is_empty() {
        println!("{}", "No log lines yet.".yellow());
    } else {
        println!("{}", "─".repeat(60).dimmed());
        for line in &snapshot.log {
            println!("{line}");
        }
        println!("{}", "─".repeat(60).dimmed());
    }

    Ok(())
}

/// Fetch and print the final result, if any
async fn show_result(client: &BackendClient, task_id: TaskId) -> Result<()> {
    let fetched = client.fetch_result(&task_id).await;
    if matches!(&fetched, Err(err) if err.is_not_found()) {
        println!("{}", format!("No such task: {}", task_id).yellow());
        return Ok(());
    }
    let envelope =
        fetched.with_context(|| format!("failed to fetch result for task {}", task_id))?;

    match envelope.result {
        Some(result) => {
            println!("{}", "Result".bold());
            println!("{result}");
        }
        None => println!("{}", "No result for this task yet.".yellow()),
    }

    Ok(())
}

/// Re-attach the poll loop to an existing task
async fn watch(client: BackendClient, task_id: TaskId, config: &Config) -> Result<()> {
    let screen = Arc::new(TermScreen::new());
    let mut session = PollSession::new(config.clone(), Arc::new(client), screen);

    session.watch(task_id);
    session.wait().await;

    Ok(())
}

/// Colorize task status for display
fn colorize_status(status: TaskStatus) -> colored::ColoredString {
    match status {
        TaskStatus::Running => "running".cyan(),
        TaskStatus::Done => "done".green(),
        TaskStatus::Error => "error".red(),
    }
}
