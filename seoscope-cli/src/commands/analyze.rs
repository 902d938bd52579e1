//! Analyze command handler

use std::sync::Arc;

use anyhow::Result;

use seoscope_client::BackendClient;

use crate::config::Config;
use crate::poller::PollSession;
use crate::screen::TermScreen;

/// Submit a URL and follow the task until it reaches a terminal status
///
/// Submission errors are rendered by the session; the command only maps
/// them to a non-zero exit.
pub async fn handle_analyze(url: &str, config: &Config) -> Result<()> {
    let client = Arc::new(BackendClient::new(config.backend_url.clone()));
    let screen = Arc::new(TermScreen::new());
    let mut session = PollSession::new(config.clone(), client, screen);

    if session.submit(url).await.is_none() {
        anyhow::bail!("analysis did not start");
    }

    session.wait().await;
    Ok(())
}
