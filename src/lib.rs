pub mod config;
pub mod country;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod process;

pub use config::Config;
pub use country::CountryMap;
pub use dataset::{assemble, write_csv, Dataset, Row, YearRange, YearTable};
pub use error::FetchError;
pub use fetch::{HttpSource, PageSource};
pub use process::raw_table::RawTable;
