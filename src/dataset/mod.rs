// src/dataset/mod.rs

pub mod write;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::info;

use crate::config::Config;
use crate::country::CountryMap;
use crate::fetch::{fetch_year, PageSource};
use crate::process::normalize;

pub use write::{output_path, write_csv, HEADERS};

/// One country's exports for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "Country")]
    pub country: String,
    /// Kilograms, kept exactly as printed on the page.
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Value (US$)")]
    pub value: String,
    #[serde(rename = "Year")]
    pub year: i32,
}

/// Normalized rows of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTable {
    pub year: i32,
    pub rows: Vec<Row>,
}

/// All rows for a year range, in ascending year order and page order within a year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn append(&mut self, table: YearTable) {
        self.rows.extend(table.rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Inclusive, ascending range of report years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// `end` defaults to `start`. A range running backwards is rejected.
    pub fn new(start: i32, end: Option<i32>) -> Result<Self> {
        let end = end.unwrap_or(start);
        if end < start {
            bail!("end year {} is before start year {}", end, start);
        }
        Ok(Self { start, end })
    }

    pub fn min(&self) -> i32 {
        self.start
    }

    pub fn max(&self) -> i32 {
        self.end
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

/// Fetch, normalize and append every year of `range`.
///
/// The first year that cannot be fetched aborts the whole run.
pub async fn assemble<S: PageSource>(
    source: &S,
    config: &Config,
    range: &YearRange,
) -> Result<Dataset> {
    let map = CountryMap::global();
    let mut dataset = Dataset::default();

    for year in range.years() {
        let raw = fetch_year(source, &config.base_url, year, config.retry_delay)
            .await
            .with_context(|| format!("fetching export table for {}", year))?;
        let table = normalize(&raw, year, map)
            .with_context(|| format!("normalizing export table for {}", year))?;

        info!(year, rows = table.rows.len(), "adding data from {} to dataset", year);
        dataset.append(table);
    }

    info!(
        rows = dataset.len(),
        "extraction of data from {}-{} done",
        range.min(),
        range.max()
    );
    Ok(dataset)
}
