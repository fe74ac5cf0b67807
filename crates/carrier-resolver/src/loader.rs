//! Reference table loader
//!
//! Reads the carrier table (`key,name_en,name_cn,name_hk`) from CSV.
//! Tolerated input:
//! - a UTF-8 byte-order mark before the header
//! - whitespace around fields
//! - loosely quoted fields and short rows
//! - rows whose key is not an integer (skipped with a warning)
//!
//! CSV quoting is off: a stray quote can never swallow the rest of the file.
//! Each field loses at most one pair of surrounding quotes, plus a lone
//! unbalanced double quote at either end. Apostrophes inside names survive.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;
use crate::record::{CarrierId, CarrierRecord};

/// Column holding the integer carrier key
pub const KEY_COLUMN: &str = "key";

/// Localized name columns, in the order they are stored on each record
pub const NAME_COLUMNS: [&str; 3] = ["name_en", "name_cn", "name_hk"];

const BOM: char = '\u{feff}';

/// Load carrier records from a CSV file on disk
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<CarrierRecord>, CatalogError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Loading carrier table");
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Load carrier records from any CSV source
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<CarrierRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BOM).trim().to_lowercase())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);

    let key_idx = column(KEY_COLUMN).ok_or(CatalogError::MissingColumn(KEY_COLUMN))?;
    let name_idx: Vec<Option<usize>> = NAME_COLUMNS.iter().map(|c| column(*c)).collect();
    if name_idx.iter().all(Option::is_none) {
        return Err(CatalogError::MissingColumn(NAME_COLUMNS[0]));
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line, row) in csv_reader.records().enumerate() {
        let row = row?;
        let raw_key = row.get(key_idx).map(unquote).unwrap_or_default();

        let id: CarrierId = match raw_key.parse() {
            Ok(id) => id,
            Err(_) => {
                // header is line 1, first data row is line 2
                tracing::warn!(line = line + 2, key = %raw_key, "Skipping carrier row with non-integer key");
                skipped += 1;
                continue;
            }
        };

        let names = name_idx
            .iter()
            .map(|idx| {
                idx.and_then(|i| row.get(i))
                    .map(unquote)
                    .unwrap_or_default()
            })
            .collect();

        records.push(CarrierRecord::new(id, names));
    }

    tracing::info!(records = records.len(), skipped, "Carrier table loaded");
    Ok(records)
}

/// Strip the quoting left around a field by loose quoting
fn unquote(value: &str) -> String {
    let value = value.trim();

    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = value[1..value.len() - 1].trim();
            return if quote == '"' {
                inner.replace("\"\"", "\"")
            } else {
                inner.to_string()
            };
        }
    }

    // unbalanced double quote, e.g. `"DHL Express`
    value
        .strip_prefix('"')
        .or_else(|| value.strip_suffix('"'))
        .unwrap_or(value)
        .trim()
        .to_string()
}
