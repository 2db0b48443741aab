use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::error::FetchError;
use crate::process::utils::clean_cell;

/// CSS selector of the data table on a Vitibrasil report page.
pub const TABLE_SELECTOR: &str = "table.tb_base.tb_dados";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column labels as the page prints them, before any renaming.
    pub headers: Vec<String>,
    /// Body rows followed by footer rows, in page order. The footer carries the `Total` row.
    pub rows: Vec<Vec<String>>,
}

fn parse_selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Parse(format!("bad selector `{}`: {:?}", css, e)))
}

/// Direct element children of `parent` named `name`. Never descends into nested tables.
fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "th" | "td"))
        .map(|cell| clean_cell(&cell.text().collect::<String>()))
        .collect()
}

impl RawTable {
    /// Parse the first table in `html` matching `selector`. Later matches are ignored.
    ///
    /// Only the table's own `thead`/`tbody`/`tfoot` rows are read, so a data table
    /// sitting inside a layout table parses the same as a top-level one.
    pub fn from_html(html: &str, selector: &str) -> Result<Self, FetchError> {
        let document = Html::parse_document(html);
        let table_sel = parse_selector(selector)?;

        let table = document
            .select(&table_sel)
            .next()
            .ok_or_else(|| FetchError::Parse(format!("no table matching `{}`", selector)))?;

        let mut head = Vec::new();
        let mut body = Vec::new();
        let mut foot = Vec::new();
        for section in table.children().filter_map(ElementRef::wrap) {
            match section.value().name() {
                "thead" => head.extend(child_elements(section, "tr")),
                "tbody" => body.extend(child_elements(section, "tr")),
                "tfoot" => foot.extend(child_elements(section, "tr")),
                "tr" => body.push(section),
                _ => {}
            }
        }

        let mut rows: Vec<Vec<String>> = body.into_iter().chain(foot).map(row_cells).collect();

        // Without a <thead> the first row carries the labels.
        let headers = match head.first() {
            Some(tr) => row_cells(*tr),
            None if !rows.is_empty() => rows.remove(0),
            None => Vec::new(),
        };
        if headers.is_empty() {
            return Err(FetchError::Parse(format!(
                "table matching `{}` has no header row",
                selector
            )));
        }

        rows.retain(|r| !r.is_empty());
        trace!(columns = headers.len(), rows = rows.len(), "parsed table");
        Ok(Self { headers, rows })
    }

    /// Index of the column labelled `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
