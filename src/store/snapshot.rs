//! Versioned full-state snapshot persistence
//!
//! Every store mutation rewrites its entire state as one JSON file. That is
//! acceptable at this scale; the load/save seam here keeps the stores
//! ignorant of the strategy so it can later be swapped for incremental
//! persistence without touching store logic.

use crate::error::{ChatGeniusError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current serialized snapshot shape
///
/// Bumped whenever the layout of persisted state changes. There is no
/// migration logic yet; the field exists so a future version can add some
/// without guessing at the shape on disk.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Envelope wrapping every persisted store state
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data: T,
}

/// Resolve the directory holding all snapshot files
///
/// Honors the `CHATGENIUS_DATA_DIR` environment variable (also set by the
/// `--data-dir` CLI flag) before falling back to the platform data
/// directory. The directory is created if missing.
///
/// # Errors
///
/// Returns an error when no data directory can be determined or created.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(override_dir) = std::env::var("CHATGENIUS_DATA_DIR") {
        let dir = PathBuf::from(override_dir);
        std::fs::create_dir_all(&dir)
            .map_err(ChatGeniusError::Io)
            .context("Failed to create data directory")?;
        return Ok(dir);
    }

    let proj_dirs = ProjectDirs::from("com", "xbcsmith", "chatgenius")
        .ok_or_else(|| ChatGeniusError::Storage("Could not determine data directory".into()))?;

    let dir = proj_dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir)
        .map_err(ChatGeniusError::Io)
        .context("Failed to create data directory")?;

    Ok(dir)
}

/// Load a snapshot from `path`
///
/// A missing file means a fresh store and yields `Ok(None)`. A file whose
/// version field is unrecognized is a storage error rather than a silent
/// reset, so a future format bump cannot quietly discard user data.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .map_err(ChatGeniusError::Io)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;

    let envelope: Envelope<T> = serde_json::from_str(&contents)
        .map_err(ChatGeniusError::Serialization)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

    if envelope.version != SNAPSHOT_VERSION {
        return Err(ChatGeniusError::Storage(format!(
            "Unsupported snapshot version {} in {} (expected {})",
            envelope.version,
            path.display(),
            SNAPSHOT_VERSION
        ))
        .into());
    }

    Ok(Some(envelope.data))
}

/// Write a snapshot of `data` to `path`
///
/// The parent directory is created if needed. Writes land in a sibling temp
/// file first and are renamed into place, so a crash mid-write cannot leave
/// a truncated snapshot behind.
pub fn save_snapshot<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(ChatGeniusError::Io)
            .context("Failed to create snapshot directory")?;
    }

    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        data,
    };

    let json = serde_json::to_string_pretty(&envelope)
        .map_err(ChatGeniusError::Serialization)
        .context("Failed to serialize snapshot")?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json)
        .map_err(ChatGeniusError::Io)
        .with_context(|| format!("Failed to write snapshot {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .map_err(ChatGeniusError::Io)
        .with_context(|| format!("Failed to move snapshot into place at {}", path.display()))?;

    tracing::debug!("Saved snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serial_test::serial;
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: usize,
    }

    #[test]
    fn test_load_missing_file_is_fresh_store() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("missing.json");
        let loaded: Option<Sample> = load_snapshot(&path).expect("load failed");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("sample.json");
        let sample = Sample {
            name: "trip".to_string(),
            count: 3,
        };

        save_snapshot(&path, &sample).expect("save failed");
        let loaded: Option<Sample> = load_snapshot(&path).expect("load failed");
        assert_eq!(loaded, Some(sample));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("nested").join("deep").join("sample.json");
        let sample = Sample {
            name: "n".to_string(),
            count: 0,
        };

        save_snapshot(&path, &sample).expect("save failed");
        assert!(path.exists());
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("future.json");
        std::fs::write(&path, r#"{"version": 99, "data": {"name": "x", "count": 1}}"#)
            .expect("write failed");

        let result: Result<Option<Sample>> = load_snapshot(&path);
        let err = result.expect_err("expected version error").to_string();
        assert!(err.contains("Unsupported snapshot version 99"));
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "not json at all").expect("write failed");

        let result: Result<Option<Sample>> = load_snapshot(&path);
        let err = result.expect_err("expected parse error");
        assert!(matches!(
            err.downcast_ref::<ChatGeniusError>(),
            Some(ChatGeniusError::Serialization(_))
        ));
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let dir = tempdir().expect("failed to create tempdir");
        // Parent "blocker" exists as a file, so the directory cannot be made
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "in the way").expect("write failed");
        let path = blocker.join("sample.json");
        let sample = Sample {
            name: "x".to_string(),
            count: 0,
        };

        let err = save_snapshot(&path, &sample).expect_err("expected io error");
        assert!(matches!(
            err.downcast_ref::<ChatGeniusError>(),
            Some(ChatGeniusError::Io(_))
        ));
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("sample.json");
        let sample = Sample {
            name: "t".to_string(),
            count: 1,
        };

        save_snapshot(&path, &sample).expect("save failed");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    #[serial]
    fn test_data_dir_respects_env_override() {
        let dir = tempdir().expect("failed to create tempdir");
        let nested = dir.path().join("nested");
        std::env::set_var("CHATGENIUS_DATA_DIR", nested.to_string_lossy().to_string());

        let resolved = data_dir().expect("data_dir failed with env override");
        assert_eq!(resolved, nested);
        assert!(nested.exists());

        std::env::remove_var("CHATGENIUS_DATA_DIR");
    }
}
