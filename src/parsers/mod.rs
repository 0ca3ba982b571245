pub mod delimited;
pub mod types;

pub use delimited::{load_file, CsvParser};
pub use types::{CsvOptions, Dataset, ParseError, Parseable, Series};
