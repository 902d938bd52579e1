//! Job poller
//!
//! Drives a submitted analysis task: polls the backend for log snapshots
//! on a fixed interval, renders each snapshot, and fetches the final
//! result once the task reaches a terminal status.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use seoscope_client::BackendClient;
use seoscope_client::error::ClientError;
use seoscope_core::domain::task::{TaskId, TaskStatus};

use crate::config::Config;
use crate::screen::Screen;

/// Notice shown while the submission request is in flight
const SUBMITTING_NOTICE: &str = "Starting analysis...";
/// Notice shown once the backend has accepted the job
const ACCEPTED_NOTICE: &str = "Analysis started. Waiting for progress...";
/// Shown when the submission request cannot reach the backend
pub const CONNECTION_ERROR: &str = "Failed to connect to the analysis backend.";
/// Shown when a task ends in `error` without producing a result string
pub const GENERATION_FAILED: &str = "SEO core generation failed.";

/// Controller for the submit/poll/terminate lifecycle
///
/// Owns the session state: at most one active task and at most one poll
/// driver. Submitting (or watching) a new task aborts the previous driver
/// before the next one is armed, so two tasks are never polled
/// concurrently by one session.
pub struct PollSession {
    config: Config,
    client: Arc<BackendClient>,
    screen: Arc<dyn Screen>,
    active: Option<ActiveTask>,
}

/// The task currently being followed
struct ActiveTask {
    task_id: TaskId,
    driver: JoinHandle<()>,
}

impl PollSession {
    /// Creates a new idle session
    pub fn new(config: Config, client: Arc<BackendClient>, screen: Arc<dyn Screen>) -> Self {
        Self {
            config,
            client,
            screen,
            active: None,
        }
    }

    /// Submit a URL for analysis and start following the resulting task
    ///
    /// On a structured rejection the backend's message is rendered in the
    /// log region; on a transport failure a generic connection notice is
    /// rendered instead. In both cases the session stays idle and `None`
    /// is returned. Polling starts only after a successful submission: the
    /// first poll fires immediately, later ones on the configured
    /// interval.
    pub async fn submit(&mut self, url: &str) -> Option<TaskId> {
        self.disarm();
        self.screen.reset();
        self.screen.show_log(SUBMITTING_NOTICE);

        match self.client.submit_analysis(url).await {
            Ok(task_id) => {
                self.screen.show_log(ACCEPTED_NOTICE);
                self.arm(task_id.clone());
                Some(task_id)
            }
            Err(ClientError::Rejected(message)) => {
                self.screen.show_log(&message);
                None
            }
            Err(err) => {
                debug!("submission failed: {err}");
                self.screen.show_log(CONNECTION_ERROR);
                None
            }
        }
    }

    /// Follow an existing task without submitting anything new
    pub fn watch(&mut self, task_id: TaskId) {
        self.disarm();
        self.screen.reset();
        self.arm(task_id);
    }

    /// Task currently being followed, if any
    pub fn active_task_id(&self) -> Option<&TaskId> {
        self.active.as_ref().map(|active| &active.task_id)
    }

    /// Wait until the active driver observes a terminal status
    ///
    /// Returns immediately when the session is idle. The session is idle
    /// afterwards either way.
    pub async fn wait(&mut self) {
        if let Some(active) = self.active.take() {
            if let Err(err) = active.driver.await {
                // Cancellation here only means the driver was aborted;
                // anything else is a panic worth surfacing.
                if !err.is_cancelled() {
                    warn!("poll driver task failed: {err}");
                }
            }
        }
    }

    /// Abort the active driver, if any, leaving the session idle
    pub fn cancel(&mut self) {
        self.disarm();
    }

    /// Synchronously abort the current driver before a new one is armed
    fn disarm(&mut self) {
        if let Some(prev) = self.active.take() {
            debug!(task_id = %prev.task_id, "cancelling poll driver");
            prev.driver.abort();
        }
    }

    fn arm(&mut self, task_id: TaskId) {
        let driver = tokio::spawn(drive_polling(
            Arc::clone(&self.client),
            Arc::clone(&self.screen),
            task_id.clone(),
            self.config.poll_interval,
        ));
        self.active = Some(ActiveTask { task_id, driver });
    }
}

/// Outcome of a single poll tick
enum Tick {
    Pending,
    Terminal,
}

/// Poll loop for one task
///
/// The first tick fires immediately, then on the configured interval.
/// Tick bodies are serialized: a slow poll delays the next tick instead of
/// overlapping with it, and ticks missed while a poll was in flight are
/// skipped. Failures are logged and swallowed; only a terminal status ends
/// the loop.
async fn drive_polling(
    client: Arc<BackendClient>,
    screen: Arc<dyn Screen>,
    task_id: TaskId,
    poll_interval: Duration,
) {
    let mut ticker = time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        match poll_once(&client, screen.as_ref(), &task_id).await {
            Ok(Tick::Terminal) => break,
            Ok(Tick::Pending) => {}
            Err(err) => {
                // Transient by design: the next tick retries.
                debug!(task_id = %task_id, "poll failed: {err}");
            }
        }
    }
}

/// One poll: fetch the log snapshot, render it, and on a terminal status
/// fetch and render the result
async fn poll_once(
    client: &BackendClient,
    screen: &dyn Screen,
    task_id: &TaskId,
) -> Result<Tick, ClientError> {
    let snapshot = client.fetch_log(task_id).await?;
    screen.show_log(&snapshot.log.join("\n"));

    if !snapshot.status.is_terminal() {
        return Ok(Tick::Pending);
    }

    // A terminal status always ends polling, even when the result fetch
    // itself fails.
    match client.fetch_result(task_id).await {
        Ok(envelope) => match envelope.result {
            Some(result) => screen.show_result(&result),
            None if snapshot.status == TaskStatus::Error => {
                screen.show_result(GENERATION_FAILED);
            }
            None => {}
        },
        Err(err) => debug!(task_id = %task_id, "result fetch failed: {err}"),
    }

    Ok(Tick::Terminal)
}
