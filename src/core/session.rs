use crate::adapters::list_store::ImportedListsStore;
use crate::core::importer::ListImporter;
use crate::domain::model::ImportedLists;
use crate::domain::ports::{SourceFile, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Lists were stored, replacing the previous ones.
    Imported(ImportedLists),
    /// Nothing was stored.
    Rejected { errors: Vec<String> },
}

impl ImportOutcome {
    pub fn message(&self) -> String {
        match self {
            ImportOutcome::Imported(lists) => success_message(lists),
            ImportOutcome::Rejected { errors } => errors.join(" "),
        }
    }
}

/// Import flow of the order form: parse, then persist only on a clean result.
pub struct ImportSession<'a, S: Storage> {
    importer: ListImporter<'a>,
    store: ImportedListsStore<S>,
}

impl<S: Storage> ImportSession<'static, S> {
    pub fn new(storage: S) -> Self {
        Self::with_importer(ListImporter::default(), storage)
    }
}

impl<'a, S: Storage> ImportSession<'a, S> {
    pub fn with_importer(importer: ListImporter<'a>, storage: S) -> Self {
        Self {
            importer,
            store: ImportedListsStore::new(storage),
        }
    }

    pub async fn import<F: SourceFile>(&self, file: &F) -> Result<ImportOutcome> {
        tracing::info!("Importing lists from '{}'", file.name());

        let result = self.importer.parse(file).await;
        if !result.is_success() {
            tracing::warn!("Import of '{}' rejected: {:?}", file.name(), result.errors);
            return Ok(ImportOutcome::Rejected {
                errors: result.errors,
            });
        }

        let lists = self.store.save(result.parties, result.items).await?;
        tracing::info!("✅ {}", success_message(&lists));
        Ok(ImportOutcome::Imported(lists))
    }

    pub async fn current(&self) -> ImportedLists {
        self.store.load().await
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.clear().await?;
        tracing::info!("Cleared imported lists");
        Ok(())
    }
}

fn count_label(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// "Successfully imported 3 parties and 1 item!", leaving out empty lists.
pub fn success_message(lists: &ImportedLists) -> String {
    let mut parts = Vec::new();
    if !lists.parties.is_empty() {
        parts.push(count_label(lists.parties.len(), "party", "parties"));
    }
    if !lists.items.is_empty() {
        parts.push(count_label(lists.items.len(), "item", "items"));
    }
    format!("Successfully imported {}!", parts.join(" and "))
}

pub fn loaded_summary(lists: &ImportedLists) -> String {
    format!(
        "Currently loaded: {}, {}",
        count_label(lists.parties.len(), "party", "parties"),
        count_label(lists.items.len(), "item", "items")
    )
}
