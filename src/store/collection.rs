use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{
    config::StoreConfig,
    error::{PetStoreError, Result},
    model::Pet,
    validation,
};

/// Alphabet for generated document ids.
const HEX_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Connector to the pet document collection.
///
/// Cheap to clone; holds only the collection path and id settings. All
/// operations go straight to the store — no cache sits between the
/// connector and the documents on disk.
#[derive(Debug, Clone)]
pub struct PetCollection {
    collection_path: PathBuf,
    id_length: usize,
}

impl PetCollection {
    pub fn new(config: &StoreConfig, store_root: &Path) -> Self {
        Self {
            collection_path: config.collection_path(store_root),
            id_length: config.store.id_length,
        }
    }

    /// Generate a fresh document id. The store owns id generation; callers
    /// never supply their own.
    pub fn generate_id(&self) -> String {
        nanoid::format(nanoid::rngs::default, &HEX_ALPHABET, self.id_length)
    }

    fn document_path(&self, id: &str) -> Result<PathBuf> {
        validation::validate_id(id)?;
        Ok(self.collection_path.join(format!("{}.json", id)))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Pet>> {
        let path = self.document_path(id)?;
        if !tokio::fs::try_exists(&path).await? {
            return Ok(None);
        }
        Ok(Some(self.read_document(&path).await?))
    }

    /// First document whose `name` matches. Used as the pre-insert
    /// uniqueness check.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Pet>> {
        self.find_first(|pet| pet.name == name).await
    }

    /// First document whose `breed` matches. Breeds are not unique, so
    /// which document wins depends on directory order.
    pub async fn find_by_breed(&self, breed: &str) -> Result<Option<Pet>> {
        self.find_first(|pet| pet.breed == breed).await
    }

    /// All documents in the collection, sorted by name then id.
    pub async fn list(&self) -> Result<Vec<Pet>> {
        let mut pets = Vec::new();
        if !tokio::fs::try_exists(&self.collection_path).await? {
            return Ok(pets);
        }

        let mut entries = tokio::fs::read_dir(&self.collection_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                pets.push(self.read_document(&path).await?);
            }
        }

        pets.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(pets)
    }

    pub async fn insert(&self, name: &str, breed: &str) -> Result<Pet> {
        validation::validate_name(name)?;
        validation::validate_breed(breed)?;

        let pet = Pet::new(self.generate_id(), name.to_string(), breed.to_string());
        tracing::info!(id = %pet.id, name = %pet.name, "Inserting pet");

        tokio::fs::create_dir_all(&self.collection_path).await?;

        let path = self.document_path(&pet.id)?;
        if tokio::fs::try_exists(&path).await? {
            return Err(PetStoreError::Storage(format!(
                "Document already exists: {}",
                path.display()
            )));
        }

        self.write_document(&pet).await?;
        Ok(pet)
    }

    /// Replace `name` and `breed` on the matching document. Returns the
    /// post-update document, or `None` if no document matches.
    pub async fn update_by_id(&self, id: &str, name: &str, breed: &str) -> Result<Option<Pet>> {
        validation::validate_name(name)?;
        validation::validate_breed(breed)?;

        let Some(mut pet) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        tracing::info!(id = %pet.id, "Updating pet");
        pet.name = name.to_string();
        pet.breed = breed.to_string();

        self.write_document(&pet).await?;
        Ok(Some(pet))
    }

    /// Remove the matching document. Returns its last persisted state, or
    /// `None` if no document matches.
    pub async fn delete_by_id(&self, id: &str) -> Result<Option<Pet>> {
        let Some(pet) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        tracing::info!(id = %id, "Deleting pet");
        tokio::fs::remove_file(self.document_path(id)?).await?;
        Ok(Some(pet))
    }

    async fn find_first<F>(&self, pred: F) -> Result<Option<Pet>>
    where
        F: Fn(&Pet) -> bool,
    {
        if !tokio::fs::try_exists(&self.collection_path).await? {
            return Ok(None);
        }

        let mut entries = tokio::fs::read_dir(&self.collection_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                let pet = self.read_document(&path).await?;
                if pred(&pet) {
                    return Ok(Some(pet));
                }
            }
        }

        Ok(None)
    }

    async fn read_document(&self, path: &Path) -> Result<Pet> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_document(&self, pet: &Pet) -> Result<()> {
        let content = serde_json::to_string_pretty(pet)?;
        let target = self.document_path(&pet.id)?;

        // Temp file in the collection dir so the final rename stays on one
        // filesystem and is atomic.
        let mut temp_file = NamedTempFile::new_in(&self.collection_path)
            .map_err(|e| PetStoreError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| PetStoreError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| PetStoreError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(&target)
            .map_err(|e| PetStoreError::Storage(format!("Failed to persist document: {}", e)))?;

        Ok(())
    }
}
