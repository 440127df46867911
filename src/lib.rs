pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::list_store::ImportedListsStore;
pub use adapters::source_file::{InMemoryFile, LocalFile};
pub use config::cli::LocalStorage;
pub use self::core::decoder_loader::DecoderLoader;
pub use self::core::importer::{parse_imported_lists, try_parse_imported_lists, ListImporter};
pub use self::core::session::{ImportOutcome, ImportSession};
pub use domain::model::{CellValue, ImportResult, ImportedLists};
pub use utils::error::{AppError, ErrorKind, ImportError, Result};
