mod init;
mod mutate;
mod query;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::StoreConfig;
use crate::store::PetCollection;

/// Common context passed to command handlers.
pub struct CommandContext {
    pub config: StoreConfig,
    pub root: PathBuf,
}

impl CommandContext {
    /// Resolve config and store root. An explicit data directory (flag or
    /// `PETSTORE_DATA`) skips config discovery entirely.
    pub fn load(data_dir: Option<String>) -> Result<Self> {
        let cwd = std::env::current_dir()?;

        if let Some(dir) = data_dir {
            let mut config = StoreConfig::default();
            config.store.path = dir;
            return Ok(Self { config, root: cwd });
        }

        let (config, root) = StoreConfig::load(&cwd)?;
        Ok(Self { config, root })
    }

    pub fn collection(&self) -> PetCollection {
        PetCollection::new(&self.config, &self.root)
    }
}
