pub mod normalize;
pub mod raw_table;
pub mod utils;

pub use normalize::{normalize, COUNTRY_COLUMN, QUANTITY_COLUMN, TOTAL_MARKER, VALUE_COLUMN};
pub use raw_table::{RawTable, TABLE_SELECTOR};
