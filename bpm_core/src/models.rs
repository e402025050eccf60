//! # Record Types
//!
//! The three entities persisted by the manager:
//!
//! ```text
//! Project (blender_projects)
//! ├── PathEntry (paths)  - where the .blend files live on disk
//! └── DateEntry (dates)  - start/finish bookkeeping
//! ```
//!
//! A `Project` owns zero or more `PathEntry` and `DateEntry` rows through
//! their `project_id` columns. The reference is deliberately *not* enforced:
//! children may point at a project id that does not (or no longer) exist.
//! Cascade behavior lives in [`crate::db::Database::delete_project`].
//!
//! All types are serde-serializable so whole-database snapshots can be
//! exported as JSON (see [`crate::export`]).

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A single Blender project record.
///
/// `id` is assigned by SQLite on insert; a `Project` returned from the
/// storage layer always carries its final id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,

    /// Required, non-empty at creation
    pub name: String,

    /// Free-form notes, may be empty
    pub description: String,

    pub is_finished: bool,
}

impl TryFrom<&Row<'_>> for Project {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Project {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            is_finished: row.get(3)?,
        })
    }
}

/// A file-system location attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub id: i64,
    pub file_name: String,
    pub path: String,

    /// Owning project, `None` when unset. Not validated against
    /// `blender_projects` on insert.
    pub project_id: Option<i64>,
}

impl TryFrom<&Row<'_>> for PathEntry {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(PathEntry {
            id: row.get(0)?,
            file_name: row.get(1)?,
            path: row.get(2)?,
            project_id: row.get(3)?,
        })
    }
}

/// Start/finish dates for a project.
///
/// Both fields are free text, exactly as typed. The original workflow keeps
/// loose notes like "mid March" here, so no calendar validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    pub id: i64,
    pub start_date: String,
    pub finish_date: String,

    /// Owning project, `None` when unset. Same non-validation as
    /// [`PathEntry::project_id`].
    pub project_id: Option<i64>,
}

impl TryFrom<&Row<'_>> for DateEntry {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(DateEntry {
            id: row.get(0)?,
            start_date: row.get(1)?,
            finish_date: row.get(2)?,
            project_id: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_serialization() {
        let project = Project {
            id: 3,
            name: "Donut".to_string(),
            description: "tutorial scene".to_string(),
            is_finished: false,
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("Donut"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, project);
    }

    #[test]
    fn test_unset_project_id_serializes_as_null() {
        let entry = PathEntry {
            id: 1,
            file_name: "scene.blend".to_string(),
            path: "/assets/scene.blend".to_string(),
            project_id: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"project_id\":null"));
    }
}
