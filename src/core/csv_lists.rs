use crate::domain::model::ImportResult;
use crate::utils::error::{ImportError, SourceFormat};
use std::collections::BTreeSet;

const PARTY_HEADERS: [&str; 3] = ["party", "partyname", "party name"];
const ITEM_HEADERS: [&str; 3] = ["item", "itemname", "item name"];

/// Extract party and item names from CSV text with a header row.
pub fn parse_csv_lists(text: &str) -> Result<ImportResult, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Err(ImportError::EmptyFile);
    };

    let headers: Vec<String> = split_csv_line(header_line)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();

    let party_column = headers
        .iter()
        .position(|h| PARTY_HEADERS.contains(&h.as_str()));
    let item_column = headers
        .iter()
        .position(|h| ITEM_HEADERS.contains(&h.as_str()));

    tracing::debug!(
        "CSV header {:?}: party column {:?}, item column {:?}",
        headers,
        party_column,
        item_column
    );

    if party_column.is_none() && item_column.is_none() {
        return Err(ImportError::MissingColumns);
    }

    let mut parties = BTreeSet::new();
    let mut items = BTreeSet::new();

    for line in data_lines {
        let cells = split_csv_line(line.trim());

        if let Some(value) = party_column.and_then(|i| cells.get(i)) {
            if !value.is_empty() {
                parties.insert(value.clone());
            }
        }

        if let Some(value) = item_column.and_then(|i| cells.get(i)) {
            if !value.is_empty() {
                items.insert(value.clone());
            }
        }
    }

    if parties.is_empty() && items.is_empty() {
        return Err(ImportError::NoDataExtracted(SourceFormat::Csv));
    }

    Ok(ImportResult {
        parties: parties.into_iter().collect(),
        items: items.into_iter().collect(),
        errors: Vec::new(),
    })
}

/// Split one CSV line into trimmed fields.
///
/// Quotes toggle quoting, `""` inside quotes is a literal quote. An unterminated
/// quote swallows the rest of the line, commas included.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
