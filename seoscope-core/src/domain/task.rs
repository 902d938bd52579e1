//! Task domain types

use serde::{Deserialize, Serialize};

/// Opaque backend-assigned task identifier
///
/// Minted by the backend on submission. The client carries it around and
/// interpolates it into request paths, but never inspects or synthesizes
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        TaskId(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_string())
    }
}

/// Analysis task status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Running,
    Done,
    Error,
}

impl TaskStatus {
    /// Whether polling for this task should stop
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_lowercase_wire_values() {
        let status: TaskStatus = serde_json::from_str("\"running\"").unwrap();
        assert_eq!(status, TaskStatus::Running);

        let status: TaskStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, TaskStatus::Done);

        let status: TaskStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(status, TaskStatus::Error);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TaskStatus>("\"pending\"").is_err());
    }

    #[test]
    fn only_done_and_error_are_terminal() {
        assert!(!TaskStatus::Running.is_terminal());
        assert!(TaskStatus::Done.is_terminal());
        assert!(TaskStatus::Error.is_terminal());
    }

    #[test]
    fn task_id_is_a_plain_string_on_the_wire() {
        let id: TaskId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(id.as_str(), "a1b2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a1b2\"");
    }
}
