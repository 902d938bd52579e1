//! Submission DTOs

use serde::{Deserialize, Serialize};

use crate::domain::task::TaskId;

/// Request to start analysis of a site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Response from the submission endpoint
///
/// The backend answers with either `{"task_id": ...}` on acceptance or
/// `{"error": ...}` on rejection. Both are flat single-field objects, so
/// the variants are discriminated by field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Accepted { task_id: TaskId },
    Rejected { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptance_carries_the_task_id() {
        let response: AnalyzeResponse = serde_json::from_str(r#"{"task_id":"T1"}"#).unwrap();
        match response {
            AnalyzeResponse::Accepted { task_id } => assert_eq!(task_id.as_str(), "T1"),
            AnalyzeResponse::Rejected { .. } => panic!("parsed as rejection"),
        }
    }

    #[test]
    fn rejection_carries_the_error_message() {
        let response: AnalyzeResponse = serde_json::from_str(r#"{"error":"bad url"}"#).unwrap();
        match response {
            AnalyzeResponse::Rejected { error } => assert_eq!(error, "bad url"),
            AnalyzeResponse::Accepted { .. } => panic!("parsed as acceptance"),
        }
    }
}
