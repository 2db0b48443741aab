use anyhow::Result;
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    fs,
    time::Duration,
};
use tempfile::tempdir;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;
use vitiscraper::{
    assemble, dataset::output_path, write_csv, Config, FetchError, PageSource, YearRange,
};

fn init_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Serves canned pages per year; each request for a year pops the next reply.
#[derive(Default)]
struct FakeSite {
    replies: RefCell<HashMap<i32, VecDeque<Result<String, FetchError>>>>,
    requests: RefCell<Vec<i32>>,
}

impl FakeSite {
    fn reply(self, year: i32, reply: Result<String, FetchError>) -> Self {
        self.replies
            .borrow_mut()
            .entry(year)
            .or_default()
            .push_back(reply);
        self
    }
}

impl PageSource for FakeSite {
    async fn get_page(&self, url: &Url) -> Result<String, FetchError> {
        let year: i32 = url
            .query_pairs()
            .find(|(k, _)| k == "ano")
            .and_then(|(_, v)| v.parse().ok())
            .expect("year in query");
        self.requests.borrow_mut().push(year);
        self.replies
            .borrow_mut()
            .get_mut(&year)
            .and_then(|q| q.pop_front())
            .unwrap_or_else(|| Err(FetchError::Parse(format!("no page for {}", year))))
    }
}

/// Export page with one body row per country plus the footer total.
fn page(countries: &[&str]) -> String {
    let body: String = countries
        .iter()
        .enumerate()
        .map(|(i, c)| format!("<tr><td class=\"tb_item\">{}</td><td>{}</td><td>{}</td></tr>\n", c, i * 10, i * 3))
        .collect();
    format!(
        r#"<html><body>
<table class="tb_base tb_dados">
<thead><tr><th>Países</th><th>Quantidade (Kg)</th><th>Valor (US$)</th></tr></thead>
<tbody>
{}</tbody>
<tfoot class="tb_total"><tr><td>Total</td><td>999</td><td>999</td></tr></tfoot>
</table></body></html>"#,
        body
    )
}

fn refused() -> FetchError {
    FetchError::Connection {
        url: "http://test/".into(),
        message: "connection refused".into(),
    }
}

fn config() -> Config {
    Config {
        base_url: Url::parse("http://test/").unwrap(),
        retry_delay: Duration::ZERO,
        ..Config::default()
    }
}

const Y2020: [&str; 4] = ["Alemanha", "Angola", "Brasil", "Chile"];
const Y2021: [&str; 6] = ["Estados Unidos", "Japão", "Paraguai", "Alemanha", "Uruguai", "China"];

#[tokio::test]
async fn two_year_run_writes_eleven_lines() -> Result<()> {
    init_logging();
    let site = FakeSite::default()
        .reply(2020, Ok(page(&Y2020)))
        .reply(2021, Ok(page(&Y2021)));
    let range = YearRange::new(2020, Some(2021))?;

    let dataset = assemble(&site, &config(), &range).await?;
    assert_eq!(dataset.len(), 4 + 6);
    assert!(dataset.rows.iter().all(|r| r.country != "Total"));

    // year-ascending, page order within a year
    let got: Vec<(&str, i32)> = dataset
        .rows
        .iter()
        .map(|r| (r.country.as_str(), r.year))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Germany", 2020),
            ("Angola", 2020),
            ("Brazil", 2020),
            ("Chile", 2020),
            ("United States", 2021),
            ("Japan", 2021),
            ("Paraguay", 2021),
            ("Germany", 2021),
            ("Uruguay", 2021),
            ("China", 2021),
        ]
    );

    let dir = tempdir()?;
    let path = output_path(dir.path(), &range);
    assert!(path.ends_with("exportacao_2020_2021.csv"));
    write_csv(&dataset, &path)?;

    let text = fs::read_to_string(&path)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "Country,Quantity,Value (US$),Year");
    assert_eq!(lines[1], "Germany,0,0,2020");
    assert_eq!(lines[10], "China,50,15,2021");
    Ok(())
}

#[tokio::test]
async fn omitted_end_year_is_single_year() -> Result<()> {
    init_logging();
    let explicit = FakeSite::default().reply(2020, Ok(page(&Y2020)));
    let omitted = FakeSite::default().reply(2020, Ok(page(&Y2020)));

    let a = assemble(&explicit, &config(), &YearRange::new(2020, Some(2020))?).await?;
    let b = assemble(&omitted, &config(), &YearRange::new(2020, None)?).await?;
    assert_eq!(a, b);
    assert_eq!(*omitted.requests.borrow(), vec![2020]);
    assert_eq!(
        output_path("../data", &YearRange::new(2020, None)?),
        output_path("../data", &YearRange::new(2020, Some(2020))?)
    );
    Ok(())
}

#[tokio::test]
async fn recovers_from_one_connection_failure() -> Result<()> {
    init_logging();
    let clean = FakeSite::default()
        .reply(2020, Ok(page(&Y2020)))
        .reply(2021, Ok(page(&Y2021)));
    let flaky = FakeSite::default()
        .reply(2020, Ok(page(&Y2020)))
        .reply(2021, Err(refused()))
        .reply(2021, Ok(page(&Y2021)));
    let range = YearRange::new(2020, Some(2021))?;

    let expected = assemble(&clean, &config(), &range).await?;
    let got = assemble(&flaky, &config(), &range).await?;
    assert_eq!(got, expected);
    assert_eq!(*flaky.requests.borrow(), vec![2020, 2021, 2021]);
    Ok(())
}

#[tokio::test]
async fn two_connection_failures_abort_without_output() -> Result<()> {
    init_logging();
    let site = FakeSite::default()
        .reply(2020, Ok(page(&Y2020)))
        .reply(2021, Err(refused()))
        .reply(2021, Err(refused()))
        .reply(2022, Ok(page(&Y2020)));
    let range = YearRange::new(2020, Some(2022))?;
    let dir = tempdir()?;

    let result = assemble(&site, &config(), &range).await;
    let err = result.expect_err("second failure must abort");
    assert!(err
        .chain()
        .any(|c| matches!(c.downcast_ref::<FetchError>(), Some(FetchError::Connection { .. }))));
    // later years are never requested
    assert_eq!(*site.requests.borrow(), vec![2020, 2021, 2021]);

    assert!(!output_path(dir.path(), &range).exists());
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_table_aborts_without_retry() -> Result<()> {
    init_logging();
    let site = FakeSite::default().reply(2020, Ok("<html><body>sem dados</body></html>".into()));
    let range = YearRange::new(2020, None)?;

    let err = assemble(&site, &config(), &range).await.unwrap_err();
    assert!(err
        .chain()
        .any(|c| matches!(c.downcast_ref::<FetchError>(), Some(FetchError::Parse(_)))));
    assert_eq!(*site.requests.borrow(), vec![2020]);
    Ok(())
}

/// Same page, with the data table nested inside a layout table.
fn wrapped(countries: &[&str]) -> String {
    format!(
        r#"<table class="layout"><tr><td>{}</td></tr></table>"#,
        page(countries)
    )
}

#[tokio::test]
async fn layout_table_wrapper_keeps_row_counts() -> Result<()> {
    init_logging();
    let site = FakeSite::default()
        .reply(2020, Ok(wrapped(&Y2020)))
        .reply(2021, Ok(wrapped(&Y2021)));
    let range = YearRange::new(2020, Some(2021))?;

    let dataset = assemble(&site, &config(), &range).await?;
    assert_eq!(dataset.len(), Y2020.len() + Y2021.len());
    assert!(dataset
        .rows
        .iter()
        .all(|r| r.country != "Total" && r.country != "Países"));
    Ok(())
}
