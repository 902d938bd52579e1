//! Result retrieval DTOs

use serde::{Deserialize, Serialize};

/// Final result payload for a task
///
/// `result` stays absent (or null) until the backend has produced one;
/// failed tasks may never populate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    #[serde(default)]
    pub result: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_results_decode_to_none() {
        let envelope: ResultEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.result, None);

        let envelope: ResultEnvelope =
            serde_json::from_str(r#"{"result":null,"status":"running"}"#).unwrap();
        assert_eq!(envelope.result, None);
    }

    #[test]
    fn present_result_decodes_to_some() {
        let envelope: ResultEnvelope = serde_json::from_str(r#"{"result":"core terms"}"#).unwrap();
        assert_eq!(envelope.result.as_deref(), Some("core terms"));
    }
}
