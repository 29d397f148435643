//! Data models for the idea evaluator.
//!
//! This module contains the core data structures used throughout
//! the application for representing ideas, evaluation records, and
//! batch statistics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The three evaluation fields the model is asked to fill in.
///
/// Sentinel fallbacks write exactly these fields; successfully parsed
/// replies are merged without any field-name validation.
pub const EVALUATION_FIELDS: [&str; 3] = ["viability", "time_estimate", "monetization"];

/// One row of the input table.
///
/// The CSV headers are `Idea` and `Description`; both columns are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRecord {
    /// Short name of the project idea.
    #[serde(rename = "Idea")]
    pub idea: String,
    /// Free-text description of the idea.
    #[serde(rename = "Description")]
    pub description: String,
}

impl IdeaRecord {
    /// Creates a new idea record.
    #[allow(dead_code)] // Convenience constructor (rows usually come from CSV)
    pub fn new(idea: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            description: description.into(),
        }
    }
}

/// Recognized per-row failure categories.
///
/// Each kind substitutes its sentinel string into all three evaluation
/// fields so a failed row still yields a complete output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Brackets were found but the extracted text is not valid JSON.
    JsonDecode,
    /// The reply contains no usable `{`...`}` pair.
    Bracket,
    /// Any other failure: transport/API errors, non-object JSON replies.
    Unexpected,
}

impl FailureKind {
    /// The sentinel string written into the evaluation fields.
    pub fn sentinel(&self) -> &'static str {
        match self {
            FailureKind::JsonDecode => "JSONDecodeError",
            FailureKind::Bracket => "BracketError",
            FailureKind::Unexpected => "UnexpectedError",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sentinel())
    }
}

/// One flattened output record: the idea fields plus whatever the model
/// returned (or a sentinel triple).
///
/// Serializes transparently as a single JSON object. Field order is
/// insertion order: `idea`, `description`, then the reply fields in the
/// order the model produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationRecord(Map<String, Value>);

impl EvaluationRecord {
    /// Builds a record from a successfully parsed model reply.
    ///
    /// The parsed fields are merged as-is after `idea` and `description`;
    /// on a key collision the reply wins.
    pub fn evaluated(idea: &IdeaRecord, fields: Map<String, Value>) -> Self {
        let mut map = Map::new();
        map.insert("idea".to_string(), Value::String(idea.idea.clone()));
        map.insert(
            "description".to_string(),
            Value::String(idea.description.clone()),
        );
        for (key, value) in fields {
            map.insert(key, value);
        }
        Self(map)
    }

    /// Builds a record with all three evaluation fields set to the
    /// failure's sentinel string.
    pub fn failure(idea: &IdeaRecord, kind: FailureKind) -> Self {
        let mut fields = Map::new();
        for name in EVALUATION_FIELDS {
            fields.insert(name.to_string(), Value::String(kind.sentinel().to_string()));
        }
        Self::evaluated(idea, fields)
    }

    /// Looks up a field by name.
    #[allow(dead_code)] // Accessor (records are serialized whole)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The full flattened mapping.
    #[allow(dead_code)] // Accessor (records are serialized whole)
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Summary of a batch run, printed at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Total rows processed.
    pub total: usize,
    /// Rows whose reply parsed into a JSON object.
    pub evaluated: usize,
    /// Rows that fell back to the `JSONDecodeError` sentinel.
    pub json_decode: usize,
    /// Rows that fell back to the `BracketError` sentinel.
    pub bracket: usize,
    /// Rows that fell back to the `UnexpectedError` sentinel.
    pub unexpected: usize,
}

impl BatchSummary {
    /// Counts one successfully evaluated row.
    pub fn record_success(&mut self) {
        self.total += 1;
        self.evaluated += 1;
    }

    /// Counts one row that fell back to a sentinel.
    pub fn record_failure(&mut self, kind: FailureKind) {
        self.total += 1;
        match kind {
            FailureKind::JsonDecode => self.json_decode += 1,
            FailureKind::Bracket => self.bracket += 1,
            FailureKind::Unexpected => self.unexpected += 1,
        }
    }

    /// Total rows that fell back to a sentinel.
    pub fn failed(&self) -> usize {
        self.json_decode + self.bracket + self.unexpected
    }
}
