use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use super::{Dataset, YearRange};

/// Header line of the output file, in column order.
pub const HEADERS: [&str; 4] = ["Country", "Quantity", "Value (US$)", "Year"];

/// `<dir>/exportacao_<min>_<max>.csv`
pub fn output_path<P: AsRef<Path>>(dir: P, range: &YearRange) -> PathBuf {
    dir.as_ref()
        .join(format!("exportacao_{}_{}.csv", range.min(), range.max()))
}

/// Write `dataset` as CSV to `path`, replacing any existing file.
///
/// Rows go to a temporary file next to `path` which is renamed over it once complete.
/// The parent directory must already exist.
pub fn write_csv<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .with_context(|| format!("output path {:?} has no file name", path))?
        .to_string_lossy();
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    if let Err(e) = write_rows(dataset, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    info!(rows = dataset.len(), path = %path.display(), "stored dataset");
    Ok(())
}

fn write_rows(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {:?}", path))?;

    // explicit header so an empty dataset still gets one
    wtr.write_record(HEADERS)?;
    for row in &dataset.rows {
        wtr.serialize(row)
            .with_context(|| format!("writing row for {} {}", row.country, row.year))?;
    }
    wtr.flush().with_context(|| format!("flushing {:?}", path))?;
    debug!(path = %path.display(), "wrote temporary csv");
    Ok(())
}
