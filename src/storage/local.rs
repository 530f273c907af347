use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::StorageError;

/// JSON-array collection persisted to `<dir>/<key>.json`.
///
/// Records are kept in insertion order. No ids are assigned here, callers
/// hand in complete records.
///
/// All I/O is blocking `std::fs` on small files. The services call it from
/// `async fn`s, which is fine on the CLI's current-thread runtime; a
/// multi-threaded server would have to move these calls onto
/// `tokio::task::spawn_blocking`.
pub struct LocalStore<T> {
    dir: PathBuf,
    key: String,
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> LocalStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        let dir = dir.into();
        let path = dir.join(format!("{}.json", key));

        Self {
            dir,
            key: key.to_string(),
            path,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every persisted record, oldest first.
    ///
    /// A missing or unreadable collection yields an empty list.
    pub fn get_all(&self) -> Vec<T> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, "Failed to read local collection: {}", err);
                return Vec::new();
            }
        };

        serde_json::from_slice::<Vec<T>>(&bytes).unwrap_or_else(|err| {
            tracing::warn!(
                key = %self.key,
                path = %self.path.display(),
                "Local collection is not well-formed, treating it as empty: {}",
                err
            );
            Vec::new()
        })
    }

    /// Replace the whole collection.
    ///
    /// Written to a temporary file first and renamed over the old one.
    pub fn save_all(&self, items: &[T]) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let body = serde_json::to_vec_pretty(items)?;
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        file.write_all(&body).map_err(io_err)?;
        file.persist(&self.path)
            .map_err(|source| StorageError::Persist {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(key = %self.key, count = items.len(), "Saved local collection");
        Ok(())
    }

    /// Append one record and return it unchanged.
    pub fn add(&self, item: T) -> Result<T, StorageError> {
        let mut items = self.get_all();
        items.push(item.clone());
        self.save_all(&items)?;
        Ok(item)
    }

    /// Drop the collection.
    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Clone for LocalStore<T> {
    fn clone(&self) -> Self {
        Self {
            dir: self.dir.clone(),
            key: self.key.clone(),
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for LocalStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStore")
            .field("key", &self.key)
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn missing_collection_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::<Note>::new(dir.path(), "notes");
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "notes");

        let first = store.add(note(1, "uno")).unwrap();
        store.add(note(2, "dos")).unwrap();

        assert_eq!(first, note(1, "uno"));
        assert_eq!(store.get_all(), vec![note(1, "uno"), note(2, "dos")]);
    }

    #[test]
    fn malformed_collection_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::<Note>::new(dir.path(), "notes");
        std::fs::write(store.path(), b"{not json").unwrap();

        assert!(store.get_all().is_empty());

        store.add(note(3, "tres")).unwrap();
        assert_eq!(store.get_all(), vec![note(3, "tres")]);
    }

    #[test]
    fn save_all_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "notes");
        store.add(note(1, "uno")).unwrap();

        store.save_all(&[note(9, "nueve")]).unwrap();
        assert_eq!(store.get_all(), vec![note(9, "nueve")]);
    }

    #[test]
    fn clear_removes_state_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "notes");
        store.add(note(1, "uno")).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn collections_are_scoped_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let notes = LocalStore::new(dir.path(), "notes");
        let others = LocalStore::<Note>::new(dir.path(), "others");
        notes.add(note(1, "uno")).unwrap();

        assert_eq!(notes.len(), 1);
        assert!(others.is_empty());
    }

    #[test]
    fn creates_missing_storage_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("nested/store"), "notes");
        store.add(note(1, "uno")).unwrap();
        assert_eq!(store.len(), 1);
    }
}
