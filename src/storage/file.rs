//! JSON-file blob store.
//!
//! Each record is stored at `<root>/<namespace>/<user_id>.json`. Writers take an
//! exclusive advisory lock on a sibling `.lock` file and replace the record
//! atomically through a temporary file, so readers never observe a half-written
//! record. Readers take a shared lock on the same file.

use super::{BlobStore, StorageKey};
use crate::constants::FILE_STORE_EXTENSION;
use crate::errors::{AppResult, LockError};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

#[cfg(unix)]
use crate::constants::DEFAULT_DIR_PERMISSIONS;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stores each record as a JSON file under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

enum LockMode {
    Shared,
    Exclusive,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding the record for `key`.
    pub fn record_path(&self, key: &StorageKey) -> PathBuf {
        self.root.join(key.namespace()).join(format!(
            "{}.{}",
            key.user_id(),
            FILE_STORE_EXTENSION
        ))
    }

    fn lock_path(record_path: &Path) -> PathBuf {
        let mut name = record_path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn ensure_dir(dir: &Path) -> AppResult<()> {
        if dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(dir)?;
        #[cfg(unix)]
        fs::set_permissions(dir, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))?;
        Ok(())
    }

    fn acquire_lock(lock_path: &Path, mode: LockMode) -> AppResult<File> {
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(lock_path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: lock_path.to_path_buf(),
                source,
            })?;

        let result = match mode {
            LockMode::Shared => FileExt::try_lock_shared(&lock_file),
            LockMode::Exclusive => FileExt::try_lock_exclusive(&lock_file),
        };

        match result {
            Ok(()) => Ok(lock_file),
            Err(e) if is_contended(&e) => Err(LockError::FileBusy {
                path: lock_path.to_path_buf(),
            }
            .into()),
            Err(source) => Err(LockError::AcquisitionFailed {
                path: lock_path.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}

fn is_contended(error: &io::Error) -> bool {
    error.kind() == ErrorKind::WouldBlock
        || error.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

impl BlobStore for FileStore {
    fn load(&self, key: &StorageKey) -> AppResult<Option<String>> {
        let path = self.record_path(key);
        if !path.exists() {
            debug!("No record file for {}", key);
            return Ok(None);
        }

        let lock = Self::acquire_lock(&Self::lock_path(&path), LockMode::Shared)?;
        let payload = match fs::read_to_string(&path) {
            Ok(payload) => Some(payload),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        drop(lock);

        debug!("Loaded record {} from {:?}", key, path);
        Ok(payload)
    }

    fn save(&self, key: &StorageKey, payload: &str) -> AppResult<()> {
        let path = self.record_path(key);
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        Self::ensure_dir(&dir)?;

        let lock = Self::acquire_lock(&Self::lock_path(&path), LockMode::Exclusive)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(payload.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| e.error)?;
        drop(lock);

        debug!("Saved record {} to {:?}", key, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::UserId;
    use crate::errors::AppError;
    use tempfile::tempdir;

    fn key(user: &str) -> StorageKey {
        StorageKey::entries(&UserId::new(user).unwrap())
    }

    #[test]
    fn test_record_path_layout() {
        let store = FileStore::new("/data/store");
        assert_eq!(
            store.record_path(&key("alice")),
            PathBuf::from("/data/store/entries/alice.json")
        );
    }

    #[test]
    fn test_missing_record_is_none() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert_eq!(store.load(&key("alice")).unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path().join("store"));

        store.save(&key("alice"), "{\"a\":1}").unwrap();
        store.save(&key("alice"), "{\"a\":2}").unwrap();

        assert_eq!(store.load(&key("alice")).unwrap().as_deref(), Some("{\"a\":2}"));
        assert!(store.record_path(&key("alice")).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_created_directories_are_private() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path().join("store"));
        store.save(&key("alice"), "{}").unwrap();

        let dir = store.record_path(&key("alice"));
        let mode = fs::metadata(dir.parent().unwrap())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, DEFAULT_DIR_PERMISSIONS);
    }

    #[test]
    fn test_save_fails_while_record_is_locked() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        store.save(&key("alice"), "{}").unwrap();

        let lock_path = FileStore::lock_path(&store.record_path(&key("alice")));
        let holder = File::open(&lock_path).unwrap();
        FileExt::lock_exclusive(&holder).unwrap();

        match store.save(&key("alice"), "{\"a\":1}") {
            Err(AppError::Lock(LockError::FileBusy { path })) => assert_eq!(path, lock_path),
            other => panic!("Expected FileBusy lock error, got {:?}", other),
        }

        FileExt::unlock(&holder).unwrap();
        store.save(&key("alice"), "{\"a\":1}").unwrap();
    }
}
