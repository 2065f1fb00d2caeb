// SPDX-License-Identifier: MPL-2.0
//! Local key/value storage adapters.
//!
//! [`FileStorage`] keeps every entry in one CBOR file (`storage.cbor`) in the
//! app data directory, separate from the user-editable `settings.toml`.
//! [`MemoryStorage`] is the in-process variant used by tests.

use crate::application::port::LocalStorage;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Storage file name within the app data directory.
pub const STORAGE_FILE: &str = "storage.cbor";

type Entries = BTreeMap<String, String>;

fn lock(entries: &Mutex<Entries>) -> Result<MutexGuard<'_, Entries>> {
    entries
        .lock()
        .map_err(|_| Error::Storage("storage lock poisoned".to_string()))
}

/// CBOR-file backed storage. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStorage {
    /// Opens the storage file inside `dir`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file also
    /// yields an empty store, together with an i18n warning key the caller
    /// can surface as a notification.
    #[must_use]
    pub fn open(dir: &Path) -> (Self, Option<String>) {
        let path = dir.join(STORAGE_FILE);
        let (entries, warning) = match Self::read(&path) {
            Ok(entries) => (entries, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "starting with empty local storage");
                (Entries::new(), Some("notification-storage-error".to_string()))
            }
        };
        (
            Self {
                path,
                entries: Mutex::new(entries),
            },
            warning,
        )
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<Entries> {
        if !path.exists() {
            return Ok(Entries::new());
        }
        let reader = BufReader::new(fs::File::open(path)?);
        Ok(ciborium::from_reader(reader)?)
    }

    fn write(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(entries, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = lock(&self.entries)?;
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.write(&entries) {
            // Keep memory and disk in agreement.
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(err);
        }
        tracing::debug!(key, path = %self.path.display(), "stored local item");
        Ok(())
    }
}

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<Entries>,
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        lock(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
