use serde::{Deserialize, Serialize};

/// Outcome of one list import.
///
/// `errors` non-empty means the lists must not be trusted; an empty `errors`
/// always comes with at least one non-empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub parties: Vec<String>,
    pub items: Vec<String>,
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Lists as persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedLists {
    pub parties: Vec<String>,
    pub items: Vec<String>,
}

impl ImportedLists {
    pub fn new(parties: Vec<String>, items: Vec<String>) -> Self {
        Self { parties, items }
    }

    pub fn has_imported_lists(&self) -> bool {
        !self.parties.is_empty() || !self.items.is_empty()
    }
}

/// A decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Other(String),
}

impl CellValue {
    /// Blank in the sense of "no value": empty cells and zero-length text.
    /// Whitespace-only text is not blank here.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) | CellValue::Other(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

/// One worksheet as rows of cells, header row at index 0.
pub type SheetRows = Vec<Vec<CellValue>>;
