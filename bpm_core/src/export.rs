//! # Snapshot Export
//!
//! Serializes the whole database to a human-readable JSON file, for backups
//! and for feeding other tools. The write is atomic: content goes to a
//! `.tmp` sibling first and is renamed over the target only once fully
//! written, so an interrupted export can never leave a truncated file.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::errors::{StoreError, StoreResult};
use crate::models::{DateEntry, PathEntry, Project};

/// Complete contents of the database at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,

    pub projects: Vec<Project>,
    pub paths: Vec<PathEntry>,
    pub dates: Vec<DateEntry>,
}

impl Snapshot {
    /// Read every table into a snapshot.
    pub fn capture(db: &Database) -> StoreResult<Self> {
        Ok(Snapshot {
            exported_at: Utc::now(),
            projects: db.list_projects()?,
            paths: db.list_paths()?,
            dates: db.list_dates()?,
        })
    }

    /// Total number of records across all tables.
    pub fn record_count(&self) -> usize {
        self.projects.len() + self.paths.len() + self.dates.len()
    }
}

/// Capture the database and write it to `path` as pretty-printed JSON.
pub fn write_snapshot(db: &Database, path: &Path) -> StoreResult<Snapshot> {
    let snapshot = Snapshot::capture(db)?;
    let json = serde_json::to_string_pretty(&snapshot)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json).map_err(|e| {
        StoreError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;
    fs::rename(&tmp_path, path).map_err(|e| {
        // Leave no stray tmp file behind on a failed rename.
        let _ = fs::remove_file(&tmp_path);
        StoreError::file_error("rename", path.display().to_string(), e.to_string())
    })?;

    Ok(snapshot)
}

/// Read a snapshot file back. The GUI does not import snapshots; this exists
/// for scripted restores and round-trip tests.
pub fn read_snapshot(path: &Path) -> StoreResult<Snapshot> {
    let json = fs::read_to_string(path).map_err(|e| {
        StoreError::file_error("read", path.display().to_string(), e.to_string())
    })?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn populated_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        let project = db.add_project("Donut", "tutorial", false).unwrap();
        db.add_path("donut.blend", "/blender/donut.blend", Some(project.id))
            .unwrap();
        db.add_date("2024-01-01", "", Some(project.id)).unwrap();
        db.add_date("later", "eventually", None).unwrap();
        db
    }

    #[test]
    fn test_snapshot_contains_every_row() {
        let db = populated_db();
        let snapshot = Snapshot::capture(&db).unwrap();
        assert_eq!(snapshot.projects.len(), 1);
        assert_eq!(snapshot.paths.len(), 1);
        assert_eq!(snapshot.dates.len(), 2);
        assert_eq!(snapshot.record_count(), 4);
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let db = populated_db();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");

        let written = write_snapshot(&db, &path).unwrap();
        let loaded = read_snapshot(&path).unwrap();

        assert_eq!(loaded.projects, written.projects);
        assert_eq!(loaded.paths, written.paths);
        assert_eq!(loaded.dates, written.dates);
    }

    #[test]
    fn test_export_leaves_no_tmp_file() {
        let db = populated_db();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");

        write_snapshot(&db, &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
