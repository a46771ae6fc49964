use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::traits::ProfileStore;
use crate::types::HouseholdProfile;

/// Default location of the saved profile, relative to the working directory
pub const DEFAULT_PROFILE_PATH: &str = "family_preferences.json";

/// Errors raised while reading or writing the saved profile
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Saved profile at {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize profile for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Keeps a single `HouseholdProfile` as pretty-printed JSON in one file
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for FileProfileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_PATH)
    }
}

impl ProfileStore for FileProfileStore {
    fn load(&self) -> Result<Option<HouseholdProfile>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No saved profile at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let profile = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Loaded profile from {:?}", self.path);
        Ok(Some(profile))
    }

    fn save(&self, profile: &HouseholdProfile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(profile).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        // Old record stays intact until the rename succeeds
        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, json) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::io(&temp, e));
        }
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::io(&self.path, e));
        }

        log::info!(
            "💾 Saved family preferences ({} adults, {} kids) to {:?}",
            profile.adult_count,
            profile.kid_count,
            self.path
        );
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Removed saved profile at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}
