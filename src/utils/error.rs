use thiserror::Error;

/// Classification of an import failure, one variant per user-facing message family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    EmptyFile,
    MissingColumns,
    MissingSheets,
    NoDataExtracted,
    DecodeFailure,
    UnknownFailure,
}

/// Which parser produced a "no data" result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Excel,
}

impl SourceFormat {
    fn label(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "CSV",
            SourceFormat::Excel => "Excel",
        }
    }
}

/// 匯入失敗。Display 即為使用者看到的訊息。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Unsupported file format. Please upload a .csv or .xlsx file.")]
    UnsupportedFormat,

    #[error("The CSV file is empty.")]
    EmptyFile,

    #[error(
        "Could not find \"party\" or \"item\" columns in the CSV. Expected headers like \"partyName\" or \"itemName\"."
    )]
    MissingColumns,

    #[error(
        "Could not find \"Parties\" or \"Items\" sheets in the Excel file. Please ensure your file has sheets named \"Parties\" and/or \"Items\"."
    )]
    MissingSheets,

    #[error("No valid party or item names found in the {} file.", .0.label())]
    NoDataExtracted(SourceFormat),

    #[error("{0}")]
    Decode(String),

    #[error("Failed to load XLSX library: {0}")]
    DecoderUnavailable(String),

    #[error("{0}")]
    Read(String),
}

impl ImportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImportError::UnsupportedFormat => ErrorKind::UnsupportedFormat,
            ImportError::EmptyFile => ErrorKind::EmptyFile,
            ImportError::MissingColumns => ErrorKind::MissingColumns,
            ImportError::MissingSheets => ErrorKind::MissingSheets,
            ImportError::NoDataExtracted(_) => ErrorKind::NoDataExtracted,
            ImportError::Decode(_) | ImportError::DecoderUnavailable(_) => ErrorKind::DecodeFailure,
            ImportError::Read(_) => ErrorKind::UnknownFailure,
        }
    }

    /// Failures raised underneath the parser (I/O, decoding, decoder loading)
    /// rather than detected by it.
    pub fn is_exceptional(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::DecodeFailure | ErrorKind::UnknownFailure
        )
    }

    /// 轉成 `ImportResult.errors` 中的字串
    pub fn to_display_message(&self) -> String {
        if self.is_exceptional() {
            format!("Failed to parse file: {}", self)
        } else {
            self.to_string()
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Read(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::Decode(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Import failed: {0}")]
    ImportError(#[from] ImportError),
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Could not access a file: {}", e),
            AppError::SerializationError(e) => format!("Stored lists are not readable: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AppError::ImportError(e) => e.to_display_message(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::IoError(_) => "Check that the path exists and is readable/writable.",
            AppError::SerializationError(_) => "Run `clear` to reset the stored lists.",
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and try again."
            }
            AppError::ImportError(_) => {
                "Use a .csv file with party/item headers, or an .xlsx file with Parties/Items sheets."
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::IoError(_) | AppError::SerializationError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
