//! Per-provider query outcome

use serde::{Deserialize, Serialize};

/// Result of querying one provider once: an answer or a failure reason, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum QueryOutcome {
    Answered(String),
    Failed(String),
}

impl QueryOutcome {
    pub fn answered(answer: impl Into<String>) -> Self {
        Self::Answered(answer.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for QueryOutcome {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(answer) => Self::Answered(answer),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: QueryOutcome = Ok::<_, String>("42".to_string()).into();
        assert_eq!(ok, QueryOutcome::answered("42"));

        let err: QueryOutcome = Err::<String, _>("timeout").into();
        assert_eq!(err, QueryOutcome::failed("timeout"));
        assert!(!err.is_answered());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&QueryOutcome::failed("boom")).unwrap();
        assert_eq!(json, r#"{"status":"failed","value":"boom"}"#);
    }
}
