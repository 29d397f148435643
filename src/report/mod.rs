//! Output rendering and writing.
//!
//! The whole batch is rendered as one pretty-printed JSON array and
//! written in a single shot: temp file in the target directory, then
//! rename over the destination. An interrupted run never leaves a
//! half-written report behind.

use crate::models::EvaluationRecord;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Renders the records as a pretty-printed JSON array.
///
/// An empty batch renders as `[]`, which is still a valid report.
pub fn generate_json_report(records: &[EvaluationRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(Into::into)
}

/// Writes the report to `path` atomically, replacing any existing file.
pub fn write_json_report(records: &[EvaluationRecord], path: &Path) -> Result<()> {
    let content = generate_json_report(records)?;

    // Temp file in the target directory, then rename.
    let dir = report_dir(path);

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(content.as_bytes())
        .context("Failed to write report")?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// The directory the temp file is created in: the target's parent, or the
/// current directory for a bare filename.
fn report_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FailureKind, IdeaRecord};
    use serde_json::{json, Map};

    fn sample_records() -> Vec<EvaluationRecord> {
        let mut fields = Map::new();
        fields.insert("viability".to_string(), json!("High"));
        fields.insert("time_estimate".to_string(), json!("3 months"));
        fields.insert("monetization".to_string(), json!("Subscription"));

        vec![
            EvaluationRecord::evaluated(
                &IdeaRecord::new("Fitness Tracker App", "Track workouts"),
                fields,
            ),
            EvaluationRecord::failure(
                &IdeaRecord::new("Time Machine", "Travel through time"),
                FailureKind::Bracket,
            ),
        ]
    }

    #[test]
    fn test_report_is_a_pretty_printed_array() {
        let report = generate_json_report(&sample_records()).unwrap();

        assert!(report.starts_with("[\n"));
        assert!(report.ends_with(']'));
        assert!(report.contains("  {"));
        assert!(report.contains("\"viability\": \"High\""));
        assert!(report.contains("\"viability\": \"BracketError\""));
    }

    #[test]
    fn test_report_preserves_record_order_and_field_order() {
        let report = generate_json_report(&sample_records()).unwrap();

        let first = report.find("Fitness Tracker App").unwrap();
        let second = report.find("Time Machine").unwrap();
        assert!(first < second);

        let idea = report.find("\"idea\"").unwrap();
        let description = report.find("\"description\"").unwrap();
        let viability = report.find("\"viability\"").unwrap();
        assert!(idea < description);
        assert!(description < viability);
    }

    #[test]
    fn test_empty_batch_renders_empty_array() {
        let report = generate_json_report(&[]).unwrap();
        assert_eq!(report, "[]");
    }

    #[test]
    fn test_write_report_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluated_ideas.json");

        write_json_report(&sample_records(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<EvaluationRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].get("idea"), Some(&json!("Fitness Tracker App")));
    }

    #[test]
    fn test_write_report_replaces_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluated_ideas.json");
        std::fs::write(&path, "stale content").unwrap();

        write_json_report(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_report_dir_handles_bare_filenames() {
        assert_eq!(report_dir(Path::new("out.json")), Path::new("."));
        assert_eq!(
            report_dir(Path::new("/tmp/reports/out.json")),
            Path::new("/tmp/reports")
        );
    }
}
