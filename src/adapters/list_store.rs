use crate::domain::model::ImportedLists;
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};

pub const IMPORTED_LISTS_KEY: &str = "order-app-imported-lists";

/// Persists the imported lists as one JSON document under a fixed key.
pub struct ImportedListsStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ImportedListsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn file_name() -> String {
        format!("{}.json", IMPORTED_LISTS_KEY)
    }

    /// Missing or unreadable data loads as empty lists.
    pub async fn load(&self) -> ImportedLists {
        let data = match self.storage.read_file(&Self::file_name()).await {
            Ok(data) => data,
            Err(AppError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return ImportedLists::default();
            }
            Err(e) => {
                tracing::error!("Failed to load imported lists from storage: {}", e);
                return ImportedLists::default();
            }
        };

        match serde_json::from_slice(&data) {
            Ok(lists) => lists,
            Err(e) => {
                tracing::error!("Failed to load imported lists from storage: {}", e);
                ImportedLists::default()
            }
        }
    }

    /// Replaces whatever was stored before.
    pub async fn save(&self, parties: Vec<String>, items: Vec<String>) -> Result<ImportedLists> {
        let lists = ImportedLists::new(parties, items);
        let json = serde_json::to_vec_pretty(&lists)?;
        self.storage.write_file(&Self::file_name(), &json).await?;
        tracing::debug!(
            "Saved {} parties and {} items",
            lists.parties.len(),
            lists.items.len()
        );
        Ok(lists)
    }

    pub async fn clear(&self) -> Result<()> {
        match self.storage.remove_file(&Self::file_name()).await {
            Err(AppError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
