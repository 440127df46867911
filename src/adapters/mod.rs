// Adapters layer: concrete implementations for external systems (decoding, files, persistence).

pub mod calamine_decoder;
pub mod list_store;
pub mod source_file;
