//! Storage media: the synchronous string-keyed stores the adapter writes to.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config;
use crate::error::StorageError;

/// Synchronous string-keyed storage provided by the host environment.
///
/// Implementations are allowed to fail on any operation (quota exceeded,
/// storage disabled, I/O error); the [`Storage`](crate::Storage) adapter
/// tolerates that and degrades to defaults.
pub trait StorageMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process medium backed by a plain map.
///
/// Nothing survives the process; intended for tests and hosts that bring
/// their own persistence.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

/// Durable medium persisting the whole keyspace as one JSON object file.
///
/// The file is read once on open; every mutation rewrites it. This is the
/// per-user analogue of a browser's local storage.
#[derive(Debug)]
pub struct FileMedium {
    path: PathBuf,
    items: RefCell<HashMap<String, String>>,
}

impl FileMedium {
    /// Open a medium at an explicit path.
    ///
    /// A missing file starts empty. A file that no longer parses is logged
    /// and treated as empty rather than failing: a corrupted preference file
    /// must never take the UI down with it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Corrupt preferences file {:?}, starting empty: {}", path, e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        Ok(Self {
            path,
            items: RefCell::new(items),
        })
    }

    /// Open the medium at the standard per-user data location.
    pub fn open_default() -> Result<Self, StorageError> {
        let project = ProjectDirs::from("", "", config::APP_NAME)
            .ok_or_else(|| StorageError::Unavailable("no home directory".to_string()))?;
        fs::create_dir_all(project.data_dir())?;
        Self::open(project.data_dir().join(config::PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(&*self.items.borrow())?;
        fs::write(&self.path, contents)?;
        log::debug!("Preferences saved to {:?}", self.path);
        Ok(())
    }
}

impl StorageMedium for FileMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        self.flush()
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.items.borrow_mut().clear();
        self.flush()
    }
}
