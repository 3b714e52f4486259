use std::path::{Path, PathBuf};
use std::{env, fs};

use uuid::Uuid;

use sv_core::{export_json, import_json};

use crate::error::{Result, StoreError};
use crate::store::Store;

/// Default base directory for all sv storage.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".scale-validator")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// The run archive: a [`Store`] rooted at a base directory, plus the JSON
/// file bridge for moving runs between machines.
pub struct RunArchive {
    base_dir: PathBuf,
    store: Store,
}

impl RunArchive {
    /// Open (creating if needed) the archive under `base_dir`, or under the
    /// default base directory when none is given.
    pub fn open(base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base_dir).map_err(|e| {
            StoreError::InvalidData(format!("failed to create {}: {e}", base_dir.display()))
        })?;

        let store = Store::open(&base_dir.join("runs.db"))?;
        tracing::debug!("opened run archive at {}", base_dir.display());
        Ok(Self { base_dir, store })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Write one archived run to a JSON file.
    pub fn export_json_file(&self, id: Uuid, path: &Path) -> Result<()> {
        let record = self.store.load_run(id)?;
        let json = export_json(&record)
            .map_err(|e| StoreError::InvalidData(format!("JSON export failed: {e}")))?;
        fs::write(path, json).map_err(|e| {
            StoreError::InvalidData(format!("failed to write {}: {e}", path.display()))
        })
    }

    /// Import a run from a JSON file, archiving it under a fresh id.
    pub fn import_json_file(&self, path: &Path) -> Result<Uuid> {
        let json = fs::read_to_string(path).map_err(|e| {
            StoreError::InvalidData(format!("failed to read {}: {e}", path.display()))
        })?;
        let record = import_json(&json)
            .map_err(|e| StoreError::InvalidData(format!("invalid JSON: {e}")))?;
        self.store.save_run(&record)
    }
}
