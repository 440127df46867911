use crate::domain::model::SheetRows;
use crate::utils::error::{ImportError, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// A user-selected file: its name decides the format, its bytes are read lazily.
pub trait SourceFile: Send + Sync {
    fn name(&self) -> &str;
    fn read_bytes(
        &self,
    ) -> impl std::future::Future<Output = std::result::Result<Vec<u8>, ImportError>> + Send;
}

/// An opened workbook.
pub trait WorkbookHandle: Send {
    fn sheet_names(&self) -> Vec<String>;
    fn sheet_rows(&mut self, name: &str) -> std::result::Result<SheetRows, ImportError>;
}

/// Spreadsheet decoding capability: bytes in, workbook out.
pub trait SpreadsheetDecoder: Send + Sync {
    fn open(&self, bytes: Vec<u8>) -> std::result::Result<Box<dyn WorkbookHandle>, ImportError>;
}

/// Where a decoder comes from when none has been obtained yet.
#[async_trait]
pub trait DecoderSource: Send + Sync {
    async fn load(&self) -> std::result::Result<Arc<dyn SpreadsheetDecoder>, String>;
}
