use crate::core::csv_lists::parse_csv_lists;
use crate::core::decoder_loader::DecoderLoader;
use crate::core::sheet_lists::parse_sheet_lists;
use crate::domain::model::ImportResult;
use crate::domain::ports::SourceFile;
use crate::utils::error::ImportError;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Spreadsheet,
}

impl FileFormat {
    /// Format from the text after the last `.` of the name, case-insensitively.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" | "xls" => Some(FileFormat::Spreadsheet),
            _ => None,
        }
    }
}

/// Turns an uploaded file into party and item lists.
pub struct ListImporter<'a> {
    loader: &'a DecoderLoader,
}

impl Default for ListImporter<'static> {
    fn default() -> Self {
        Self::new(DecoderLoader::shared())
    }
}

impl<'a> ListImporter<'a> {
    pub fn new(loader: &'a DecoderLoader) -> Self {
        Self { loader }
    }

    /// Never fails: every problem ends up in `ImportResult::errors`.
    pub async fn parse<F: SourceFile>(&self, file: &F) -> ImportResult {
        match self.try_parse(file).await {
            Ok(result) => {
                tracing::info!(
                    "Parsed '{}': {} parties, {} items",
                    file.name(),
                    result.parties.len(),
                    result.items.len()
                );
                result
            }
            Err(e) => {
                if e.is_exceptional() {
                    tracing::warn!("Failed to parse '{}': {}", file.name(), e);
                } else {
                    tracing::info!("Rejected '{}': {:?}", file.name(), e.kind());
                }
                ImportResult::failed(e.to_display_message())
            }
        }
    }

    pub async fn try_parse<F: SourceFile>(&self, file: &F) -> Result<ImportResult, ImportError> {
        let format =
            FileFormat::from_file_name(file.name()).ok_or(ImportError::UnsupportedFormat)?;
        tracing::debug!("Importing '{}' as {:?}", file.name(), format);

        match format {
            FileFormat::Csv => {
                let bytes = file.read_bytes().await?;
                parse_csv_lists(&String::from_utf8_lossy(&bytes))
            }
            FileFormat::Spreadsheet => {
                let decoder = self.loader.get().await?;
                let bytes = file.read_bytes().await?;
                let mut workbook = decoder.open(bytes)?;
                parse_sheet_lists(&mut *workbook)
            }
        }
    }
}

/// Parse with the process-wide decoder loader.
pub async fn parse_imported_lists<F: SourceFile>(file: &F) -> ImportResult {
    ListImporter::default().parse(file).await
}

pub async fn try_parse_imported_lists<F: SourceFile>(
    file: &F,
) -> Result<ImportResult, ImportError> {
    ListImporter::default().try_parse(file).await
}
