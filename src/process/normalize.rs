use tracing::debug;

use crate::country::CountryMap;
use crate::dataset::{Row, YearTable};
use crate::error::FetchError;
use crate::process::raw_table::RawTable;

/// Source column holding the country label.
pub const COUNTRY_COLUMN: &str = "Países";
pub const QUANTITY_COLUMN: &str = "Quantidade (Kg)";
pub const VALUE_COLUMN: &str = "Valor (US$)";

/// Aggregate row label; such rows never reach the dataset.
pub const TOTAL_MARKER: &str = "Total";

fn require_column(raw: &RawTable, name: &str) -> Result<usize, FetchError> {
    raw.column(name).ok_or_else(|| {
        FetchError::Parse(format!(
            "column `{}` not found in {:?}",
            name, raw.headers
        ))
    })
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

/// Turn one page's raw table into canonical rows tagged with `year`.
///
/// Country labels go through `map`, `Total` rows are dropped and the
/// quantity/value cells are carried over verbatim.
pub fn normalize(raw: &RawTable, year: i32, map: &CountryMap) -> Result<YearTable, FetchError> {
    let country_idx = require_column(raw, COUNTRY_COLUMN)?;
    let quantity_idx = require_column(raw, QUANTITY_COLUMN)?;
    let value_idx = require_column(raw, VALUE_COLUMN)?;

    let mut rows = Vec::with_capacity(raw.rows.len());
    for raw_row in &raw.rows {
        let country = map.map(raw_row.get(country_idx).map(String::as_str).unwrap_or(""));
        if country == TOTAL_MARKER {
            continue;
        }
        rows.push(Row {
            country: country.to_string(),
            quantity: cell(raw_row, quantity_idx),
            value: cell(raw_row, value_idx),
            year,
        });
    }

    debug!(
        year,
        kept = rows.len(),
        dropped = raw.rows.len() - rows.len(),
        "normalized table"
    );
    Ok(YearTable { year, rows })
}
