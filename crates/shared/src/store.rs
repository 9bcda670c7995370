//! Key-value persistence boundary
//!
//! Every collection (learned categories, food items, consumed log, shopping list)
//! is a single JSON blob stored under a fixed key. Services receive the store
//! explicitly so the backend can be swapped without touching domain logic.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Read a JSON collection, returning the default value when the key is absent
pub fn load_json<T, S>(store: &S, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    }
}

/// Replace a JSON collection as a whole
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`
///
/// The directory is created lazily on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        tracing::debug!(key, dir = %self.dir.display(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("key").unwrap(), None);

        store.set("key", "value".to_owned()).unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));

        store.remove("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let data_dir = dir.child("data");

        let mut store = FileStore::new(&data_dir);
        assert_eq!(store.get("freshbite_items")?, None);
        store.set("freshbite_items", "[]".to_owned())?;

        let reopened = FileStore::new(&data_dir);
        assert_eq!(reopened.get("freshbite_items")?.as_deref(), Some("[]"));
        assert!(data_dir.join("freshbite_items.json").exists());

        Ok(())
    }

    #[test]
    fn test_file_store_remove_missing_key_is_ok() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut store = FileStore::new(dir.path());
        store.remove("missing")?;
        Ok(())
    }

    #[test]
    fn test_load_json_defaults_when_absent() {
        let mut store = MemoryStore::new();
        let items: Vec<String> = load_json(&store, "list").unwrap();
        assert!(items.is_empty());

        save_json(&mut store, "list", &vec!["a".to_owned()]).unwrap();
        let items: Vec<String> = load_json(&store, "list").unwrap();
        assert_eq!(items, vec!["a".to_owned()]);
    }

    #[test]
    fn test_load_json_reports_malformed_data() {
        let mut store = MemoryStore::new();
        store.set("list", "{not json".to_owned()).unwrap();
        let result: Result<Vec<String>> = load_json(&store, "list");
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }
}
