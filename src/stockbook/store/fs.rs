use super::SnapshotStore;
use crate::error::PersistenceError;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Sibling file the new document is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("snapshot"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent(&self) -> Result<(), PersistenceError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl SnapshotStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io(e)),
        }
    }

    fn write(&self, document: &str) -> Result<(), PersistenceError> {
        self.ensure_parent()?;
        let staging = self.staging_path();
        fs::write(&staging, document)?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(PersistenceError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockbookError;
    use crate::model::Item;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("inventory.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("inventory.json"));
        let items = vec![
            Item::new(1, "Bolt", 100, dec!(0.05)).unwrap(),
            Item::new(2, "Nut", 50, dec!(0.10)).unwrap(),
        ];
        store.save(&items).unwrap();
        assert_eq!(store.load().unwrap(), Some(items));
        assert!(!store.staging_path().exists());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("working.json");
        let store = FileStore::new(&path);
        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn save_overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("inventory.json"));
        store
            .save(&[Item::new(1, "Bolt", 1, dec!(1)).unwrap()])
            .unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ definitely not a list").unwrap();
        let err = FileStore::new(&path).load().unwrap_err();
        match err {
            StockbookError::Persistence { location, source } => {
                assert_eq!(location, path.display().to_string());
                assert!(matches!(source, PersistenceError::Corrupt(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn reads_files_written_with_legacy_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(
            &path,
            r#"[{"ItemId":1,"Name":"Bolt","Quantity":100,"Price":0.05}]"#,
        )
        .unwrap();
        let items = FileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(items, vec![Item::new(1, "Bolt", 100, dec!(0.05)).unwrap()]);
    }
}
