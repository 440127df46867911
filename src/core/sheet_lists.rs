use crate::domain::model::{CellValue, ImportResult};
use crate::domain::ports::WorkbookHandle;
use crate::utils::error::{ImportError, SourceFormat};
use std::collections::BTreeSet;

const PARTY_SHEETS: [&str; 2] = ["Parties", "parties"];
const ITEM_SHEETS: [&str; 2] = ["Items", "items"];

/// Extract names from the "Parties" and "Items" sheets of an opened workbook.
pub fn parse_sheet_lists(workbook: &mut dyn WorkbookHandle) -> Result<ImportResult, ImportError> {
    let sheet_names = workbook.sheet_names();
    tracing::debug!("Workbook sheets: {:?}", sheet_names);

    let parties = read_named_sheet(workbook, &sheet_names, &PARTY_SHEETS)?;
    let items = read_named_sheet(workbook, &sheet_names, &ITEM_SHEETS)?;

    if parties.is_none() && items.is_none() {
        return Err(ImportError::MissingSheets);
    }

    let parties = parties.unwrap_or_default();
    let items = items.unwrap_or_default();

    if parties.is_empty() && items.is_empty() {
        return Err(ImportError::NoDataExtracted(SourceFormat::Excel));
    }

    Ok(ImportResult {
        parties,
        items,
        errors: Vec::new(),
    })
}

/// `None` when no sheet carries any of the candidate names.
fn read_named_sheet(
    workbook: &mut dyn WorkbookHandle,
    sheet_names: &[String],
    candidates: &[&str],
) -> Result<Option<Vec<String>>, ImportError> {
    let Some(name) = candidates
        .iter()
        .find(|c| sheet_names.iter().any(|s| s == *c))
    else {
        return Ok(None);
    };

    let rows = workbook.sheet_rows(name)?;
    let values = extract_row_values(&rows);
    tracing::debug!(
        "Sheet '{}': {} rows, {} unique values",
        name,
        rows.len(),
        values.len()
    );
    Ok(Some(values))
}

/// First non-blank value of every row after the header, de-duplicated and sorted.
pub fn extract_row_values(rows: &[Vec<CellValue>]) -> Vec<String> {
    let mut values = BTreeSet::new();

    for row in rows.iter().skip(1) {
        let first = row
            .iter()
            .filter(|cell| !cell.is_blank())
            .map(|cell| cell.to_text().trim().to_string())
            .find(|value| !value.is_empty());

        if let Some(value) = first {
            values.insert(value);
        }
    }

    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SheetRows;

    struct FakeWorkbook {
        sheets: Vec<(String, SheetRows)>,
    }

    impl FakeWorkbook {
        fn new(sheets: Vec<(&str, SheetRows)>) -> Self {
            Self {
                sheets: sheets
                    .into_iter()
                    .map(|(n, r)| (n.to_string(), r))
                    .collect(),
            }
        }
    }

    impl WorkbookHandle for FakeWorkbook {
        fn sheet_names(&self) -> Vec<String> {
            self.sheets.iter().map(|(n, _)| n.clone()).collect()
        }

        fn sheet_rows(&mut self, name: &str) -> Result<SheetRows, ImportError> {
            self.sheets
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, rows)| rows.clone())
                .ok_or_else(|| ImportError::Decode(format!("no sheet {}", name)))
        }
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_parties_sheet_without_items() {
        let mut wb = FakeWorkbook::new(vec![(
            "Parties",
            vec![
                vec![text("Party")],
                vec![text("Acme")],
                vec![text("")],
                vec![text("Beta")],
            ],
        )]);

        let result = parse_sheet_lists(&mut wb).unwrap();
        assert_eq!(result.parties, vec!["Acme", "Beta"]);
        assert!(result.items.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_lowercase_sheet_names() {
        let mut wb = FakeWorkbook::new(vec![
            ("items", vec![vec![text("Item")], vec![text("Oil")]]),
            ("Summary", vec![vec![text("x")], vec![text("y")]]),
        ]);

        let result = parse_sheet_lists(&mut wb).unwrap();
        assert_eq!(result.items, vec!["Oil"]);
        assert!(result.parties.is_empty());
    }

    #[test]
    fn test_capitalised_sheet_preferred() {
        let mut wb = FakeWorkbook::new(vec![
            ("parties", vec![vec![text("h")], vec![text("lower")]]),
            ("Parties", vec![vec![text("h")], vec![text("Upper")]]),
        ]);

        let result = parse_sheet_lists(&mut wb).unwrap();
        assert_eq!(result.parties, vec!["Upper"]);
    }

    #[test]
    fn test_missing_sheets() {
        let mut wb = FakeWorkbook::new(vec![("Sheet1", vec![vec![text("party")]])]);
        assert_eq!(parse_sheet_lists(&mut wb), Err(ImportError::MissingSheets));
    }

    #[test]
    fn test_header_only_sheet_is_no_data() {
        let mut wb = FakeWorkbook::new(vec![("Parties", vec![vec![text("Party")]])]);
        assert_eq!(
            parse_sheet_lists(&mut wb),
            Err(ImportError::NoDataExtracted(SourceFormat::Excel))
        );
    }

    #[test]
    fn test_extract_first_non_blank_cell_per_row() {
        let rows = vec![
            vec![text("ignored header")],
            vec![CellValue::Empty, text(""), text("  "), text(" Acme "), text("Later")],
            vec![CellValue::Number(42.0), text("x")],
            vec![CellValue::Empty, CellValue::Empty],
            vec![],
            vec![text("Acme")],
            vec![CellValue::Other("true".into())],
        ];

        assert_eq!(extract_row_values(&rows), vec!["42", "Acme", "true"]);
    }

    #[test]
    fn test_extract_empty_grid() {
        assert!(extract_row_values(&[]).is_empty());
    }
}
