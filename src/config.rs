use crate::error::{PetStoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file searched for upward from the working directory.
pub const CONFIG_FILE: &str = "petstore.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_collection")]
    pub collection: String,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_path() -> String {
    ".petstore".to_string()
}

fn default_collection() -> String {
    "pets".to_string()
}

fn default_id_length() -> usize {
    24
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            collection: default_collection(),
            id_length: default_id_length(),
        }
    }
}

impl StoreConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        let store_root = config_path
            .parent()
            .ok_or_else(|| {
                PetStoreError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, store_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(PetStoreError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, store_root: &Path) -> PathBuf {
        store_root.join(&self.store.path)
    }

    pub fn collection_path(&self, store_root: &Path) -> PathBuf {
        self.data_path(store_root).join(&self.store.collection)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
