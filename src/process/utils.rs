use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Trim and collapse internal runs of whitespace (HTML cells often wrap across lines).
pub fn clean_cell(raw: &str) -> String {
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}
