//! SEOScope CLI
//!
//! Command-line frontend for the SEOScope analysis backend. Submits a site
//! URL for SEO-core generation and follows the job's progress log until a
//! result is ready; also offers one-shot access to the log and result of
//! existing tasks.

mod commands;
mod config;
mod poller;
mod screen;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{Commands, handle_command};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "seoscope")]
#[command(about = "SEO-core analysis client", long_about = None)]
struct Cli {
    /// Analysis backend URL
    #[arg(
        long,
        env = "SEOSCOPE_BACKEND_URL",
        default_value = "http://localhost:8000"
    )]
    backend_url: String,

    /// Poll interval in milliseconds while following a task
    #[arg(long, env = "SEOSCOPE_POLL_INTERVAL_MS", default_value_t = 2000)]
    poll_interval_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with the rendered
    // log and result regions on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seoscope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
    };

    handle_command(cli.command, &config).await
}
