//! Flat-file JSON persistence.
//!
//! Every persisted collection (fridge, grocery list, calendar, staples,
//! display orders) is one small JSON file, read and written whole. The
//! stores themselves never touch the filesystem; the caller persists after a
//! successful in-memory mutation, so a failed write leaves the in-memory
//! state valid and usable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a value from a JSON file.
///
/// A missing or empty file yields the type's default rather than an error.
/// A leading byte-order mark or whitespace is tolerated; any other decode
/// failure is reported with the file path and the original decoding error,
/// since it usually requires a data fix rather than a retry.
pub fn load_json<T>(path: &Path) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(trimmed).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a value to a JSON file, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let data = serde_json::to_string_pretty(value).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, data).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
