//! Configuration module
//!
//! Handles CLI configuration including the backend URL and polling cadence.

use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis backend
    pub backend_url: String,
    /// Delay between poll ticks while following a task
    pub poll_interval: Duration,
}
