//! Log polling DTOs

use serde::{Deserialize, Serialize};

use crate::domain::task::TaskStatus;

/// Point-in-time copy of a task's progress log
///
/// The backend appends lines as the analysis advances; each poll returns
/// the complete log so far together with the current status. A snapshot
/// fully replaces whatever the previous poll returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSnapshot {
    pub log: Vec<String>,
    pub status: TaskStatus,
}
