//! Durable storage for the appearance preference.
//!
//! A [`PreferenceStore`] holds exactly one scalar value. Reading a store that
//! was never written returns `None`, which is a normal outcome rather than an
//! error. Implementations never propagate I/O failures: appearance is cosmetic
//! state, so a broken store degrades to "nothing saved".

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::appearance::{CodeFormat, PersistedCode};
use crate::config::PreferenceConfig;

/// Single-value persistence used by the appearance controller.
pub trait PreferenceStore {
    /// Returns the stored code, or `None` if nothing was saved.
    fn read(&self) -> Option<PersistedCode>;

    /// Persists `code`, replacing any previous value.
    fn write(&mut self, code: PersistedCode);
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preferences I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("preferences file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("value under '{key}' is not an appearance code: {value}")]
    UnexpectedValue { key: String, value: String },
}

/// In-memory store.
///
/// Clones share the same slot, so a test can hand one clone to a controller,
/// drop the controller, and build a new one over another clone to simulate a
/// restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<PersistedCode>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `code`.
    pub fn with_value(code: PersistedCode) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(code))),
        }
    }

    /// Current contents of the shared slot.
    pub fn read_code(&self) -> Option<PersistedCode> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> Option<PersistedCode> {
        self.read_code()
    }

    fn write(&mut self, code: PersistedCode) {
        *self.slot.borrow_mut() = Some(code);
    }
}

/// Stores the preference as one key of a JSON object on disk.
///
/// Other keys in the same file are preserved on write. Writes go through a
/// temporary file and a rename so a crash mid-write leaves the old value.
///
/// Fallback keys are consulted, in order, only when the primary key is absent.
/// Writes always go to the primary key.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    key: String,
    fallback_keys: Vec<String>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            fallback_keys: Vec::new(),
        }
    }

    /// Store for `config`, falling back to the keys of the other code formats
    /// so a value saved before a format switch is still found.
    pub fn from_config(config: &PreferenceConfig) -> Self {
        let mut store = Self::new(config.path.clone(), config.key.clone());
        for format in [CodeFormat::Integer, CodeFormat::Name] {
            store = store.with_fallback_key(format.default_key());
        }
        store
    }

    /// Adds a key read when the primary key holds nothing.
    pub fn with_fallback_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if key != self.key && !self.fallback_keys.contains(&key) {
            self.fallback_keys.push(key);
        }
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored code, reporting why it could not be read.
    pub fn try_read(&self) -> Result<Option<PersistedCode>, StoreError> {
        let Some(entries) = self.load_entries()? else {
            return Ok(None);
        };

        let found = std::iter::once(&self.key)
            .chain(self.fallback_keys.iter())
            .find_map(|key| match entries.get(key) {
                None | Some(Value::Null) => None,
                Some(value) => Some((key, value)),
            });

        match found {
            None => Ok(None),
            Some((key, value)) => {
                if *key != self.key {
                    log::info!("Reading appearance from fallback key '{}'", key);
                }
                serde_json::from_value(value.clone())
                    .map(Some)
                    .map_err(|_| StoreError::UnexpectedValue {
                        key: key.clone(),
                        value: value.to_string(),
                    })
            }
        }
    }

    /// Writes the code, reporting any I/O failure.
    pub fn try_write(&self, code: &PersistedCode) -> Result<(), StoreError> {
        let mut entries = match self.load_entries() {
            Ok(entries) => entries.unwrap_or_default(),
            Err(StoreError::Json(err)) => {
                log::warn!("Replacing corrupt preferences file {}: {}", self.path.display(), err);
                Map::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(self.key.clone(), serde_json::to_value(code)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(entries))?;
        write_atomically(&self.path, &json)?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(entries) => Ok(Some(entries)),
            _ => Ok(None),
        }
    }
}

/// Writes `contents` to a sibling temp file and renames it over `path`.
/// The temp file is removed if the rename fails.
fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

impl PreferenceStore for FileStore {
    fn read(&self) -> Option<PersistedCode> {
        self.try_read().unwrap_or_else(|err| {
            log::warn!("Could not read appearance preference from {}: {}", self.path.display(), err);
            None
        })
    }

    fn write(&mut self, code: PersistedCode) {
        if let Err(err) = self.try_write(&code) {
            log::warn!("Could not save appearance preference to {}: {}", self.path.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("rdarkmode_store_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store_shares_slot() {
        let store = MemoryStore::new();
        let mut writer = store.clone();

        assert_eq!(store.read(), None);
        writer.write(PersistedCode::Integer(2));
        assert_eq!(store.read(), Some(PersistedCode::Integer(2)));
    }

    #[test]
    fn test_file_store_missing_file_is_absent() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let store = FileStore::new(&path, "userInterfaceStyle");
        assert!(store.try_read().unwrap().is_none());
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_file_store_write_then_read() {
        let path = temp_path("write_read");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::new(&path, "userInterfaceStyle");
        store.write(PersistedCode::Integer(1));
        store.write(PersistedCode::Integer(2));

        let reopened = FileStore::new(&path, "userInterfaceStyle");
        assert_eq!(reopened.read(), Some(PersistedCode::Integer(2)));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_preserves_other_keys() {
        let path = temp_path("other_keys");
        fs::write(&path, r#"{"window_count": 3}"#).unwrap();

        let mut store = FileStore::new(&path, "appearanceSelection");
        store.write(PersistedCode::Name("Dark".to_string()));

        let contents: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(contents["window_count"], 3);
        assert_eq!(contents["appearanceSelection"], "Dark");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_unexpected_value() {
        let path = temp_path("unexpected");
        fs::write(&path, r#"{"userInterfaceStyle": true}"#).unwrap();

        let store = FileStore::new(&path, "userInterfaceStyle");
        assert!(matches!(store.try_read(), Err(StoreError::UnexpectedValue { .. })));
        assert_eq!(store.read(), None);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_reads_fallback_key() {
        let path = temp_path("fallback");
        fs::write(&path, r#"{"userInterfaceStyle": 2}"#).unwrap();

        let mut store = FileStore::new(&path, "appearanceSelection").with_fallback_key("userInterfaceStyle");
        assert_eq!(store.read(), Some(PersistedCode::Integer(2)));

        // Once written, the primary key wins over the fallback
        store.write(PersistedCode::Name("Light".to_string()));
        assert_eq!(store.read(), Some(PersistedCode::Name("Light".to_string())));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_config_falls_back_to_other_format_key() {
        let path = temp_path("config_fallback");
        fs::write(&path, r#"{"appearanceSelection": "Dark"}"#).unwrap();

        let mut config = PreferenceConfig::with_format(CodeFormat::Integer);
        config.path = path.clone();
        let store = FileStore::from_config(&config);
        assert_eq!(store.read(), Some(PersistedCode::Name("Dark".to_string())));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        // A directory at the target path makes the rename fail
        let path = temp_path("rename_fails");
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(path.join("occupied")).unwrap();

        assert!(write_atomically(&path, "{}").is_err());
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(&path).unwrap();
    }

    #[test]
    fn test_file_store_corrupt_file_degrades() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::new(&path, "userInterfaceStyle");
        assert_eq!(store.read(), None);

        // Writing replaces the corrupt contents
        store.write(PersistedCode::Integer(1));
        assert_eq!(store.read(), Some(PersistedCode::Integer(1)));

        fs::remove_file(&path).unwrap();
    }
}
