//! Database file location.
//!
//! The database lives in the per-user data directory
//! (`~/.local/share/bpm/bpm.db` on Linux, the platform equivalent
//! elsewhere). Setting `BPM_DB` overrides the full path, which the tests and
//! the CLI use to point both binaries at the same scratch file.

use std::path::PathBuf;

use crate::errors::{StoreError, StoreResult};

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "BPM_DB";

/// Resolve the database path and make sure its parent directory exists.
pub fn database_path() -> StoreResult<PathBuf> {
    let path = match std::env::var(DB_PATH_ENV) {
        Ok(custom) => PathBuf::from(custom),
        Err(_) => default_database_path(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::file_error("create_dir", parent.display().to_string(), e.to_string())
            })?;
        }
    }

    Ok(path)
}

/// `<platform data dir>/bpm/bpm.db`, falling back to the current directory
/// when no data dir is known (stripped-down containers).
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bpm")
        .join("bpm.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = default_database_path();
        assert!(path.ends_with("bpm/bpm.db"));
    }

    #[test]
    fn test_env_override_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("nested").join("override.db");
        std::env::set_var(DB_PATH_ENV, &custom);

        let resolved = database_path().unwrap();
        std::env::remove_var(DB_PATH_ENV);

        assert_eq!(resolved, custom);
        assert!(custom.parent().unwrap().exists());
    }
}
