// SPDX-License-Identifier: MIT

//! Durable single-snapshot cache shared between the app and widget
//! processes.
//!
//! One serialized value per key, stored as a JSON file inside a namespace
//! directory. Writers replace the whole snapshot via a temp-file rename, so
//! readers in other processes never observe a partial write and no
//! cross-process locking is needed.
//!
//! Everything degrades to "absent" rather than raising: a corrupt entry is
//! discarded on load, a failed serialization discards the entry on save.
//! The only fatal error is failing to open the namespace directory itself,
//! which is a configuration defect rather than a runtime condition.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Distinguishes temp files of concurrent writers within one process; the
/// process id distinguishes writers across processes.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Errors opening the cache namespace.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to open cache namespace {path}: {source}")]
    Namespace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Typed cache of a single serializable value under a fixed key.
#[derive(Debug, Clone)]
pub struct Cache<T> {
    path: PathBuf,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Cache<T> {
    /// Open a cache for `key` inside the shared `namespace` directory,
    /// creating the directory if needed.
    pub fn open(namespace: impl AsRef<Path>, key: &str) -> Result<Self, CacheError> {
        let dir = namespace.as_ref();
        fs::create_dir_all(dir).map_err(|source| CacheError::Namespace {
            path: dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: dir.join(format!("{key}.json")),
            _value: PhantomData,
        })
    }

    /// Load the stored value, or `None` if absent.
    ///
    /// A corrupt or schema-incompatible entry is deleted as a side effect
    /// and reported as absent, so a bad write can poison at most one load.
    pub fn load(&self) -> Option<T> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(_) => return None,
        };

        match serde_json::from_slice(&data) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Discarding corrupt cache entry");
                self.clear();
                None
            }
        }
    }

    /// Replace the stored value for this key.
    ///
    /// The snapshot is written to a temp file and renamed into place, so
    /// concurrent readers see either the old or the new value, never a
    /// partial one. If serialization fails the entry is cleared instead of
    /// being left stale.
    pub fn save(&self, value: &T) {
        let data = match serde_json::to_vec(value) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Cache serialization failed, clearing entry");
                self.clear();
                return;
            }
        };

        // Each writer renames its own intact temp file: two saves racing
        // from the app and the widget process must never share a temp path,
        // or their write bodies could interleave into the live snapshot.
        let tmp = self.path.with_extension(format!(
            "json.tmp.{}.{}",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        let written = fs::write(&tmp, &data).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(err) = written {
            tracing::warn!(path = %self.path.display(), error = %err, "Cache write failed");
            let _ = fs::remove_file(&tmp);
        }
    }

    /// Remove the entry for this key. Idempotent; a missing entry is fine.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to clear cache entry");
            }
        }
    }

    /// Path of the underlying snapshot file (for tests and diagnostics).
    pub fn path(&self) -> &Path {
        &self.path
    }
}
