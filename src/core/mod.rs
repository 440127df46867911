pub mod csv_lists;
pub mod decoder_loader;
pub mod importer;
pub mod session;
pub mod sheet_lists;

pub use crate::domain::model::{ImportResult, ImportedLists};
pub use crate::domain::ports::{SourceFile, Storage};
pub use crate::utils::error::Result;
