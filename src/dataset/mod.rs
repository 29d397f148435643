//! Input table loading.
//!
//! Ideas come in as a CSV file with `Idea` and `Description` columns.
//! Unlike per-row evaluation failures, a malformed input file aborts the
//! whole run: there is no sensible sentinel for a row we never read.

use crate::models::IdeaRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Loads all idea records from a CSV file, preserving row order.
pub fn load_ideas(path: &Path) -> Result<Vec<IdeaRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open ideas file: {}", path.display()))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut ideas = Vec::new();

    for (index, row) in reader.deserialize().enumerate() {
        // +2: one for the header line, one for 1-based numbering.
        let record: IdeaRecord = row.with_context(|| {
            format!("Invalid row at line {} of {}", index + 2, path.display())
        })?;
        ideas.push(record);
    }

    debug!("loaded {} ideas from {}", ideas.len(), path.display());
    Ok(ideas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_loads_rows_in_file_order() {
        let (_dir, path) = write_csv(
            "Idea,Description\n\
             Fitness Tracker App,An app to track workouts\n\
             Simple Calculator,A basic calculator\n\
             Recipe Finder,Search recipes by ingredients\n",
        );

        let ideas = load_ideas(&path).unwrap();

        assert_eq!(ideas.len(), 3);
        assert_eq!(ideas[0].idea, "Fitness Tracker App");
        assert_eq!(ideas[1].idea, "Simple Calculator");
        assert_eq!(ideas[2].idea, "Recipe Finder");
        assert_eq!(ideas[2].description, "Search recipes by ingredients");
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let (_dir, path) = write_csv(
            "Idea,Description\n\
             \"Meal Planner, Pro\",\"Plans meals, tracks macros, and shops\"\n",
        );

        let ideas = load_ideas(&path).unwrap();

        assert_eq!(ideas[0].idea, "Meal Planner, Pro");
        assert_eq!(ideas[0].description, "Plans meals, tracks macros, and shops");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let (_dir, path) = write_csv(
            "Idea,Description,Owner\n\
             Fitness Tracker App,An app to track workouts,sam\n",
        );

        let ideas = load_ideas(&path).unwrap();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].description, "An app to track workouts");
    }

    #[test]
    fn test_header_only_file_yields_no_rows() {
        let (_dir, path) = write_csv("Idea,Description\n");
        let ideas = load_ideas(&path).unwrap();
        assert!(ideas.is_empty());
    }

    #[test]
    fn test_missing_description_column_fails() {
        let (_dir, path) = write_csv("Idea\nFitness Tracker App\n");
        let err = load_ideas(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid row at line 2"));
    }

    #[test]
    fn test_missing_file_fails_with_path_in_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = load_ideas(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to open ideas file"));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn test_bundled_fixture_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/ideas.csv");
        let ideas = load_ideas(&path).unwrap();

        assert_eq!(ideas.len(), 5);
        assert_eq!(ideas[0].idea, "Fitness Tracker App");
        assert_eq!(
            ideas[2].description,
            "Create, send, and track invoices for freelancers"
        );
    }
}
