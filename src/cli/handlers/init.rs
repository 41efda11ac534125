use anyhow::Result;
use colored::Colorize;

use crate::config::{CONFIG_FILE, StoreConfig};
use crate::error::PetStoreError;

pub fn handle_init(id_length: usize) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(
            PetStoreError::AlreadyInitialized(config_path.display().to_string()).into(),
        );
    }

    let mut config = StoreConfig::default();
    config.store.id_length = id_length;

    let collection_path = config.collection_path(&cwd);
    std::fs::create_dir_all(&collection_path)?;
    config.save(&config_path)?;

    println!(
        "{} pet store in {}",
        "Initialized".green(),
        cwd.display().to_string().cyan()
    );
    Ok(())
}
