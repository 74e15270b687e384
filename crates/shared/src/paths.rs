//! Data directory layout for the persisted collections

use std::path::{Path, PathBuf};

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "REGISTRO_DATA_DIR";

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Locations of the persisted collections
#[derive(Debug, Clone)]
pub struct DataPaths {
    data_dir: PathBuf,
}

impl DataPaths {
    /// Create a layout rooted at the given directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory from `REGISTRO_DATA_DIR`, falling back to
    /// the default.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_DATA_DIR),
        }
    }

    /// The data directory itself
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Participant collection file
    pub fn participants_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    /// Admin credential collection file
    pub fn admins_file(&self) -> PathBuf {
        self.data_dir.join("admins.json")
    }

    /// Default target for the spreadsheet export
    pub fn default_export_file(&self) -> PathBuf {
        self.data_dir.join("participantes.xlsx")
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
