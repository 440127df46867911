use crate::domain::model::{CellValue, SheetRows};
use crate::domain::ports::{DecoderSource, SpreadsheetDecoder, WorkbookHandle};
use crate::utils::error::ImportError;
use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets};
use std::io::Cursor;
use std::sync::Arc;

/// Decodes .xlsx / .xls / .xlsb / .ods bytes with calamine.
pub struct CalamineDecoder;

impl SpreadsheetDecoder for CalamineDecoder {
    fn open(&self, bytes: Vec<u8>) -> Result<Box<dyn WorkbookHandle>, ImportError> {
        let sheets = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        Ok(Box::new(CalamineWorkbook { sheets }))
    }
}

struct CalamineWorkbook {
    sheets: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookHandle for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn sheet_rows(&mut self, name: &str) -> Result<SheetRows, ImportError> {
        let range = self.sheets.worksheet_range(name)?;
        Ok(range
            .rows()
            .map(|row| row.iter().map(to_cell_value).collect())
            .collect())
    }
}

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        other => CellValue::Other(other.to_string()),
    }
}

/// calamine is linked in, so loading always succeeds.
pub struct CalamineSource;

#[async_trait]
impl DecoderSource for CalamineSource {
    async fn load(&self) -> Result<Arc<dyn SpreadsheetDecoder>, String> {
        Ok(Arc::new(CalamineDecoder))
    }
}
