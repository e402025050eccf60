//! # Storage Layer
//!
//! [`Database`] wraps a single long-lived [`rusqlite::Connection`]. The
//! application opens it once at startup and keeps it for the process
//! lifetime; every write statement commits immediately under SQLite's
//! autocommit behavior.
//!
//! The schema is created with `CREATE TABLE IF NOT EXISTS` on open - there is
//! no versioning or migration mechanism. The `project_id` columns declare a
//! reference to `blender_projects` but the constraint is never enforced
//! (`PRAGMA foreign_keys` stays off), so children may be inserted pointing at
//! a project that does not exist. Deleting a project removes its paths and
//! dates explicitly, inside one transaction.
//!
//! ## Example
//!
//! ```rust
//! use bpm_core::db::Database;
//!
//! let db = Database::open_in_memory().unwrap();
//! let project = db.add_project("Donut", "tutorial scene", false).unwrap();
//! assert!(project.id > 0);
//!
//! let all = db.list_projects().unwrap();
//! assert_eq!(all.len(), 1);
//! ```

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::debug;

use crate::errors::{StoreError, StoreResult};
use crate::models::{DateEntry, PathEntry, Project};

/// Row counts per table, for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    pub projects: i64,
    pub paths: i64,
    pub dates: i64,
}

/// Storage handle over one SQLite connection.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the database file at `path` and ensure the schema
    /// exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        debug!(path = %path.display(), "opened database");
        Ok(Database {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a fresh in-memory database. Used by tests and as a scratch store.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Database { conn, path: None })
    }

    /// Location of the backing file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Row counts for all three tables.
    pub fn counts(&self) -> StoreResult<RecordCounts> {
        let count = |table: &str| -> StoreResult<i64> {
            let sql = format!("SELECT COUNT(*) FROM {table}");
            Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
        };
        Ok(RecordCounts {
            projects: count("blender_projects")?,
            paths: count("paths")?,
            dates: count("dates")?,
        })
    }

    // --- Project CRUD ---

    /// Insert a new project. `name` must be non-empty; everything else is
    /// taken as given. Returns the stored record with its assigned id.
    pub fn add_project(
        &self,
        name: &str,
        description: &str,
        is_finished: bool,
    ) -> StoreResult<Project> {
        if name.is_empty() {
            return Err(StoreError::missing_field("name"));
        }
        self.conn.execute(
            "INSERT INTO blender_projects (name, description, is_finished)
             VALUES (?1, ?2, ?3)",
            params![name, description, is_finished],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, name, "added project");
        Ok(Project {
            id,
            name: name.to_string(),
            description: description.to_string(),
            is_finished,
        })
    }

    /// Fetch one project by id.
    pub fn get_project(&self, id: i64) -> StoreResult<Option<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, is_finished
             FROM blender_projects WHERE id = ?1",
        )?;
        match stmt.query_row([id], |row| Project::try_from(row)) {
            Ok(project) => Ok(Some(project)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all projects in id order.
    pub fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, is_finished
             FROM blender_projects ORDER BY id",
        )?;
        let projects = stmt
            .query_map([], |row| Project::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    /// Overwrite all fields of the project with `project.id`.
    pub fn update_project(&self, project: &Project) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE blender_projects SET name = ?1, description = ?2, is_finished = ?3
             WHERE id = ?4",
            params![
                project.name,
                project.description,
                project.is_finished,
                project.id
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::not_found("project", project.id));
        }
        debug!(id = project.id, "updated project");
        Ok(())
    }

    /// Delete a project and every path/date that references it.
    ///
    /// The cascade runs inside one transaction so a partial delete can never
    /// be observed.
    pub fn delete_project(&mut self, id: i64) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM paths WHERE project_id = ?1", [id])?;
        tx.execute("DELETE FROM dates WHERE project_id = ?1", [id])?;
        let changed = tx.execute("DELETE FROM blender_projects WHERE id = ?1", [id])?;
        if changed == 0 {
            // Dropping the transaction rolls back the child deletes.
            return Err(StoreError::not_found("project", id));
        }
        tx.commit()?;
        debug!(id, "deleted project with cascade");
        Ok(())
    }

    // --- Path CRUD ---

    /// Insert a path record. No field is required and `project_id` is not
    /// checked against existing projects.
    pub fn add_path(
        &self,
        file_name: &str,
        path: &str,
        project_id: Option<i64>,
    ) -> StoreResult<PathEntry> {
        self.conn.execute(
            "INSERT INTO paths (file_name, path, project_id)
             VALUES (?1, ?2, ?3)",
            params![file_name, path, project_id],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, file_name, "added path");
        Ok(PathEntry {
            id,
            file_name: file_name.to_string(),
            path: path.to_string(),
            project_id,
        })
    }

    /// List all path records in id order.
    pub fn list_paths(&self) -> StoreResult<Vec<PathEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, file_name, path, project_id
             FROM paths ORDER BY id",
        )?;
        let paths = stmt
            .query_map([], |row| PathEntry::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(paths)
    }

    /// List path records belonging to one project.
    pub fn list_paths_for_project(&self, project_id: i64) -> StoreResult<Vec<PathEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, file_name, path, project_id
             FROM paths WHERE project_id = ?1 ORDER BY id",
        )?;
        let paths = stmt
            .query_map([project_id], |row| PathEntry::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(paths)
    }

    /// Overwrite all fields of the path record with `entry.id`.
    pub fn update_path(&self, entry: &PathEntry) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE paths SET file_name = ?1, path = ?2, project_id = ?3
             WHERE id = ?4",
            params![entry.file_name, entry.path, entry.project_id, entry.id],
        )?;
        if changed == 0 {
            return Err(StoreError::not_found("path", entry.id));
        }
        debug!(id = entry.id, "updated path");
        Ok(())
    }

    /// Delete one path record. Never touches the parent project.
    pub fn delete_path(&self, id: i64) -> StoreResult<()> {
        let changed = self.conn.execute("DELETE FROM paths WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(StoreError::not_found("path", id));
        }
        debug!(id, "deleted path");
        Ok(())
    }

    // --- Date CRUD ---

    /// Insert a date record. Both dates are stored exactly as typed and
    /// `project_id` is not checked against existing projects.
    pub fn add_date(
        &self,
        start_date: &str,
        finish_date: &str,
        project_id: Option<i64>,
    ) -> StoreResult<DateEntry> {
        self.conn.execute(
            "INSERT INTO dates (start_date, finish_date, project_id)
             VALUES (?1, ?2, ?3)",
            params![start_date, finish_date, project_id],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "added date");
        Ok(DateEntry {
            id,
            start_date: start_date.to_string(),
            finish_date: finish_date.to_string(),
            project_id,
        })
    }

    /// List all date records in id order.
    pub fn list_dates(&self) -> StoreResult<Vec<DateEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, start_date, finish_date, project_id
             FROM dates ORDER BY id",
        )?;
        let dates = stmt
            .query_map([], |row| DateEntry::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dates)
    }

    /// List date records belonging to one project.
    pub fn list_dates_for_project(&self, project_id: i64) -> StoreResult<Vec<DateEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, start_date, finish_date, project_id
             FROM dates WHERE project_id = ?1 ORDER BY id",
        )?;
        let dates = stmt
            .query_map([project_id], |row| DateEntry::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dates)
    }

    /// Overwrite all fields of the date record with `entry.id`.
    pub fn update_date(&self, entry: &DateEntry) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE dates SET start_date = ?1, finish_date = ?2, project_id = ?3
             WHERE id = ?4",
            params![entry.start_date, entry.finish_date, entry.project_id, entry.id],
        )?;
        if changed == 0 {
            return Err(StoreError::not_found("date", entry.id));
        }
        debug!(id = entry.id, "updated date");
        Ok(())
    }

    /// Delete one date record. Never touches the parent project.
    pub fn delete_date(&self, id: i64) -> StoreResult<()> {
        let changed = self.conn.execute("DELETE FROM dates WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(StoreError::not_found("date", id));
        }
        debug!(id, "deleted date");
        Ok(())
    }
}

/// Create the three tables if they are absent.
fn init_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS blender_projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            is_finished INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS paths (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            file_name TEXT NOT NULL DEFAULT '',
            path TEXT NOT NULL DEFAULT '',
            project_id INTEGER REFERENCES blender_projects(id)
        );

        CREATE TABLE IF NOT EXISTS dates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            start_date TEXT NOT NULL DEFAULT '',
            finish_date TEXT NOT NULL DEFAULT '',
            project_id INTEGER REFERENCES blender_projects(id)
        );
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_add_project_assigns_fresh_id() {
        let db = db();
        let a = db.add_project("Donut", "tutorial", false).unwrap();
        let b = db.add_project("Chair", "", true).unwrap();
        assert!(a.id > 0);
        assert!(b.id > a.id);

        let all = db.list_projects().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Donut");
        assert_eq!(all[0].description, "tutorial");
        assert!(!all[0].is_finished);
        assert!(all[1].is_finished);
    }

    #[test]
    fn test_add_project_rejects_empty_name() {
        let db = db();
        let err = db.add_project("", "whatever", false).unwrap_err();
        assert_eq!(err, StoreError::missing_field("name"));
        assert!(db.list_projects().unwrap().is_empty());
    }

    #[test]
    fn test_update_project_changes_only_that_record() {
        let db = db();
        let a = db.add_project("Donut", "", false).unwrap();
        let b = db.add_project("Chair", "wip", false).unwrap();

        let mut edited = a.clone();
        edited.name = "Donut v2".to_string();
        edited.is_finished = true;
        db.update_project(&edited).unwrap();

        let all = db.list_projects().unwrap();
        assert_eq!(all[0].name, "Donut v2");
        assert!(all[0].is_finished);
        assert_eq!(all[1], b);
    }

    #[test]
    fn test_update_missing_project_is_not_found() {
        let db = db();
        let ghost = Project {
            id: 99,
            name: "ghost".to_string(),
            description: String::new(),
            is_finished: false,
        };
        let err = db.update_project(&ghost).unwrap_err();
        assert_eq!(err, StoreError::not_found("project", 99));
    }

    #[test]
    fn test_delete_project_cascades_to_children() {
        let mut db = db();
        let keep = db.add_project("Keep", "", false).unwrap();
        let gone = db.add_project("Gone", "", false).unwrap();

        db.add_path("a.blend", "/a", Some(gone.id)).unwrap();
        db.add_path("b.blend", "/b", Some(gone.id)).unwrap();
        db.add_path("c.blend", "/c", Some(keep.id)).unwrap();
        db.add_date("2024-01-01", "", Some(gone.id)).unwrap();
        db.add_date("2024-02-01", "", None).unwrap();

        db.delete_project(gone.id).unwrap();

        let projects = db.list_projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, keep.id);

        let paths = db.list_paths().unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].project_id, Some(keep.id));

        // The unowned date survives the cascade.
        let dates = db.list_dates().unwrap();
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].project_id, None);
    }

    #[test]
    fn test_delete_child_never_touches_parent() {
        let mut db = db();
        let project = db.add_project("Donut", "", false).unwrap();
        let path = db.add_path("a.blend", "/a", Some(project.id)).unwrap();
        let date = db.add_date("jan", "feb", Some(project.id)).unwrap();

        db.delete_path(path.id).unwrap();
        db.delete_date(date.id).unwrap();

        assert_eq!(db.list_projects().unwrap().len(), 1);
        assert!(db.list_paths().unwrap().is_empty());
        assert!(db.list_dates().unwrap().is_empty());

        // Deleting a project with no children still works.
        db.delete_project(project.id).unwrap();
        assert!(db.list_projects().unwrap().is_empty());
    }

    #[test]
    fn test_dangling_project_id_is_accepted() {
        let db = db();
        let entry = db.add_path("orphan.blend", "/nowhere", Some(424242)).unwrap();
        assert_eq!(entry.project_id, Some(424242));

        let dates = db.add_date("someday", "never", Some(424242)).unwrap();
        assert_eq!(dates.project_id, Some(424242));
    }

    #[test]
    fn test_list_children_for_project() {
        let db = db();
        let a = db.add_project("A", "", false).unwrap();
        let b = db.add_project("B", "", false).unwrap();
        db.add_path("a1", "/a1", Some(a.id)).unwrap();
        db.add_path("b1", "/b1", Some(b.id)).unwrap();
        db.add_date("s", "f", Some(a.id)).unwrap();

        assert_eq!(db.list_paths_for_project(a.id).unwrap().len(), 1);
        assert_eq!(db.list_dates_for_project(a.id).unwrap().len(), 1);
        assert!(db.list_dates_for_project(b.id).unwrap().is_empty());
    }

    #[test]
    fn test_counts() {
        let db = db();
        db.add_project("A", "", false).unwrap();
        db.add_path("", "", None).unwrap();
        db.add_path("", "", None).unwrap();

        let counts = db.counts().unwrap();
        assert_eq!(counts.projects, 1);
        assert_eq!(counts.paths, 2);
        assert_eq!(counts.dates, 0);
    }

    #[test]
    fn test_schema_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bpm.db");

        {
            let db = Database::open(&path).unwrap();
            db.add_project("Persisted", "", false).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let all = db.list_projects().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Persisted");
        assert_eq!(db.path(), Some(path.as_path()));
    }
}
