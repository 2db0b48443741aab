// src/fetch/urls.rs
use url::Url;

use crate::error::FetchError;

/// Report section: "Exportação".
pub const EXPORT_OPTION: &str = "opt_06";
/// Sub-report: table wines.
pub const WINE_SUBOPTION: &str = "subopt_01";

/// Page URL for one year of the wine export report, relative to the site root `base`.
///
/// `base` should end in `/`; otherwise its last path segment is replaced.
pub fn year_url(base: &Url, year: i32) -> Result<Url, FetchError> {
    let mut url = base.join("index.php")?;
    url.query_pairs_mut()
        .clear()
        .append_pair("ano", &year.to_string())
        .append_pair("opcao", EXPORT_OPTION)
        .append_pair("subopcao", WINE_SUBOPTION);
    Ok(url)
}
