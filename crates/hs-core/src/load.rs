//! Directory loaders for character data files.
//!
//! Rosters live as one JSON file per character. A malformed file is
//! skipped and reported, never fatal, so one bad record cannot take
//! down the whole batch. A missing directory yields an empty outcome.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{LoadError, SkippedFile};
use crate::npc::Npc;
use crate::pc::Pc;

/// The result of loading a directory of records: everything that
/// parsed, plus everything that didn't.
#[derive(Debug)]
pub struct LoadOutcome<T> {
    /// Successfully parsed records, in file-name order.
    pub records: Vec<T>,
    /// Files that failed to parse, with the reason.
    pub skipped: Vec<SkippedFile>,
}

impl<T> Default for LoadOutcome<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Load all player characters from `*.json` files in `dir`.
pub fn load_pcs(dir: &Path) -> LoadOutcome<Pc> {
    load_dir(dir)
}

/// Load all NPCs from `*.json` files in `dir`.
pub fn load_npcs(dir: &Path) -> LoadOutcome<Npc> {
    load_dir(dir)
}

/// Load every `.json` file in `dir` as a record of type `T`.
fn load_dir<T: DeserializeOwned>(dir: &Path) -> LoadOutcome<T> {
    let mut outcome = LoadOutcome::default();

    let Ok(entries) = fs::read_dir(dir) else {
        return outcome;
    };

    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    for path in paths {
        match read_record(&path) {
            Ok(record) => outcome.records.push(record),
            Err(error) => outcome.skipped.push(SkippedFile { path, error }),
        }
    }

    outcome
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn missing_directory_is_empty() {
        let outcome = load_pcs(Path::new("/nonexistent/heartsim-pc-dir"));
        assert!(outcome.records.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn loads_valid_records_in_name_order() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "b_briar.json",
            r#"{"name": "Briar", "class": "Hound", "calling": "Duty", "weapon": 6}"#,
        );
        write(
            &dir,
            "a_ash.json",
            r#"{"name": "Ash", "class": "Cleaver", "calling": "Hunger", "weapon": 8}"#,
        );

        let outcome = load_pcs(dir.path());
        assert_eq!(outcome.skipped.len(), 0);
        let names: Vec<_> = outcome.records.iter().map(|pc| pc.name.as_str()).collect();
        assert_eq!(names, ["Ash", "Briar"]);
    }

    #[test]
    fn malformed_file_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "good.json",
            r#"{"name": "Ash", "class": "Cleaver", "calling": "Hunger", "weapon": 8}"#,
        );
        write(&dir, "bad.json", r#"{"name": "Broken""#);
        write(&dir, "missing_fields.json", r#"{"name": "NoClass"}"#);

        let outcome = load_pcs(dir.path());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.skipped.len(), 2);
        assert_eq!(outcome.records[0].name, "Ash");
    }

    #[test]
    fn non_json_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        write(&dir, "notes.txt", "not a character");
        write(
            &dir,
            "hound.json",
            r#"{"name": "Hound", "weapon": 4, "resistance": 8, "protection": 1}"#,
        );

        let outcome = load_npcs(dir.path());
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.records[0].max_resistance, 8);
    }
}
