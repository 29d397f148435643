//! Best-effort JSON extraction from model replies.
//!
//! Models asked for "ONLY the JSON" still wrap it in prose or markdown
//! fences often enough that a bare parse is not enough. The fallback
//! takes everything from the first `{` to the last `}` and tries again.

use crate::models::FailureKind;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Distinguished parse failures, each mapping to one sentinel category.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Brackets were located but the substring between them is not valid
    /// JSON.
    #[error("extracted text is not valid JSON: {0}")]
    JsonDecode(#[source] serde_json::Error),

    /// No `{` before a `}` anywhere in the reply.
    #[error("no valid JSON brackets found in reply")]
    MissingBrackets,

    /// The reply parsed as JSON but not as an object, so there is nothing
    /// to merge into a record.
    #[error("reply is valid JSON but not an object")]
    NotAnObject,
}

impl From<&ParseError> for FailureKind {
    fn from(err: &ParseError) -> Self {
        match err {
            ParseError::JsonDecode(_) => FailureKind::JsonDecode,
            ParseError::MissingBrackets => FailureKind::Bracket,
            ParseError::NotAnObject => FailureKind::Unexpected,
        }
    }
}

/// Parses a model reply into the evaluation mapping.
///
/// Tries a direct parse of the trimmed reply first. On failure, extracts
/// the substring from the first `{` to the last `}` (inclusive) and tries
/// that. The parsed object is returned as-is; field names and types are
/// not validated.
pub fn parse_evaluation(reply: &str) -> Result<Map<String, Value>, ParseError> {
    match serde_json::from_str::<Value>(reply.trim()) {
        Ok(Value::Object(map)) => return Ok(map),
        Ok(_) => return Err(ParseError::NotAnObject),
        Err(_) => {
            debug!("direct JSON parse failed, attempting bracket extraction");
        }
    }

    let start = reply.find('{');
    let end = reply.rfind('}');
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(ParseError::MissingBrackets),
    };

    match serde_json::from_str::<Value>(&reply[start..=end]) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ParseError::NotAnObject),
        Err(err) => Err(ParseError::JsonDecode(err)),
    }
}
