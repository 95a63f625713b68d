//! Delimited-file loading into an in-memory, column-addressable table.
//!
//! This crate reads a comma-delimited text file once and exposes it as an
//! immutable [`Table`]: named columns over a fixed row count, with cells
//! projected to text or numeric views on demand. An empty cell is a missing
//! value in the numeric projection; a non-empty cell that does not parse as
//! a number is an error, not a silent `NaN`.
//!
//! # Header modes
//!
//! - [`Header::Infer`] - the first row names the columns (the default)
//! - [`Header::Row`] - an explicit 0-based row index names the columns;
//!   earlier rows are discarded
//! - [`Header::None`] - every row is data and columns get positional names
//!   `"0"`, `"1"`, ...
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use statlab_table::{LoadOptions, load_csv};
//!
//! # fn main() -> Result<(), statlab_table::TableError> {
//! let table = load_csv(Path::new("data"), "titanic.csv", &LoadOptions::default())?;
//! let ages = table.numeric("Age")?;
//! let present = ages.iter().flatten().count();
//! println!("{present} of {} ages present", table.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub use self::load::{Header, LoadOptions, load_csv};
pub use self::table::Table;

mod load;
mod table;

/// Errors produced while loading or projecting tabular data.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    /// The input file does not exist (or cannot be opened).
    #[display("data file not found: {}", path.display())]
    DataNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file content is not consistent delimited data.
    #[display("malformed data in {}{}: {reason}", path.display(), fmt_line(*line))]
    Parse {
        path: PathBuf,
        /// 1-based line number, when the reader can attribute one.
        line: Option<u64>,
        reason: String,
    },
    /// A requested column name is not present in the header.
    #[display("column '{name}' not found")]
    ColumnNotFound { name: String },
    /// A non-empty cell could not be parsed in a numeric projection.
    #[display("column '{column}' has non-numeric value '{value}'")]
    NotNumeric { column: String, value: String },
}

fn fmt_line(line: Option<u64>) -> String {
    line.map_or_else(String::new, |l| format!(" (line {l})"))
}
