//! JSON file store
//!
//! One JSON document per entity kind under a data directory. Writes go to a
//! temp file first and are renamed into place, so a crash mid-write leaves
//! the previous document intact.

use shared::{EntityKind, Store, StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, kind: EntityKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}

impl Store for JsonFileStore {
    fn load_raw(&self, kind: EntityKind) -> StoreResult<Option<Vec<u8>>> {
        let path = self.path_for(kind);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn save_raw(&self, kind: EntityKind, bytes: Vec<u8>) -> StoreResult<()> {
        let path = self.path_for(kind);
        let tmp = self.data_dir.join(format!("{}.tmp", kind.file_name()));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(kind = %kind, bytes = bytes.len(), "collection saved");
        Ok(())
    }
}
