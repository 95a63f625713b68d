use std::{fs::File, io::BufReader, path::Path};

use crate::{Table, TableError};

/// How column names are derived from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Header {
    /// The first row is the header.
    #[default]
    Infer,
    /// The given 0-based row is the header; earlier rows are discarded.
    Row(usize),
    /// No header row; columns get positional names `"0"`, `"1"`, ...
    None,
}

/// Options for [`load_csv`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    header: Header,
    columns: Option<Vec<String>>,
}

impl LoadOptions {
    /// Options for a file without a header row.
    #[must_use]
    pub fn headerless() -> Self {
        Self {
            header: Header::None,
            columns: None,
        }
    }

    /// Options taking the header from an explicit 0-based row index.
    #[must_use]
    pub fn header_row(row: usize) -> Self {
        Self {
            header: Header::Row(row),
            columns: None,
        }
    }

    /// Restricts loading to the named columns, in the given order.
    #[must_use]
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Loads a comma-delimited file into a [`Table`].
///
/// The path is resolved relative to `base_dir`. Quoted fields (including
/// embedded delimiters) are handled by the reader; records whose length
/// disagrees with the first record fail with [`TableError::Parse`].
///
/// # Errors
///
/// * [`TableError::DataNotFound`] - the file cannot be opened
/// * [`TableError::Parse`] - inconsistent record lengths, an out-of-range
///   header row, or a file with no header row in [`Header::Infer`] mode
/// * [`TableError::ColumnNotFound`] - a requested column subset names a
///   column the header does not contain
pub fn load_csv<P>(base_dir: &Path, relative: P, options: &LoadOptions) -> Result<Table, TableError>
where
    P: AsRef<Path>,
{
    let path = base_dir.join(relative.as_ref());
    let file = File::open(&path).map_err(|source| TableError::DataNotFound {
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| parse_error(&path, &err))?;
        records.push(record);
    }

    let (headers, data_start) = match options.header {
        Header::Infer => {
            let first = records.first().ok_or_else(|| TableError::Parse {
                path: path.clone(),
                line: None,
                reason: "file has no header row".to_string(),
            })?;
            (record_to_row(first), 1)
        }
        Header::Row(row) => {
            let record = records.get(row).ok_or_else(|| TableError::Parse {
                path: path.clone(),
                line: None,
                reason: format!("header row {row} is past the end of the file"),
            })?;
            (record_to_row(record), row + 1)
        }
        Header::None => {
            let width = records.first().map_or(0, csv::StringRecord::len);
            ((0..width).map(|i| i.to_string()).collect(), 0)
        }
    };

    let rows = records[data_start..].iter().map(record_to_row).collect();
    let table = Table::new(headers, rows);
    match &options.columns {
        Some(names) => table.select(names),
        None => Ok(table),
    }
}

fn record_to_row(record: &csv::StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn parse_error(path: &Path, err: &csv::Error) -> TableError {
    TableError::Parse {
        path: path.to_path_buf(),
        line: err.position().map(csv::Position::line),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_infer_header_and_quoted_delimiter() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "people.csv",
            "Name,Age\n\"Braund, Mr. Owen Harris\",22\nHeikkinen,26\n",
        );

        let table = load_csv(dir.path(), "people.csv", &LoadOptions::default()).unwrap();
        assert_eq!(table.headers(), ["Name", "Age"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.text("Name").unwrap()[0], "Braund, Mr. Owen Harris");
        assert_eq!(table.numeric("Age").unwrap(), [Some(22.0), Some(26.0)]);
    }

    #[test]
    fn test_headerless_positional_names() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "wine.data", "1,14.2,1.7\n2,13.2,1.8\n");

        let table = load_csv(dir.path(), "wine.data", &LoadOptions::headerless()).unwrap();
        assert_eq!(table.headers(), ["0", "1", "2"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.numeric_at(0).unwrap(), [Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_explicit_header_row_skips_preamble() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "report.csv", "skip,me\na,b\n1,2\n");

        let table = load_csv(
            dir.path(),
            "report.csv",
            &LoadOptions::header_row(1),
        )
        .unwrap();
        assert_eq!(table.headers(), ["a", "b"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_csv(dir.path(), "absent.csv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, TableError::DataNotFound { .. }));
    }

    #[test]
    fn test_ragged_row_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "ragged.csv", "a,b\n1,2\n3\n");

        let err = load_csv(dir.path(), "ragged.csv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, TableError::Parse { .. }));
    }

    #[test]
    fn test_column_subset() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "wide.csv", "a,b,c\n1,2,3\n4,5,6\n");

        let options = LoadOptions::default().columns(["c", "a"]);
        let table = load_csv(dir.path(), "wide.csv", &options).unwrap();
        assert_eq!(table.headers(), ["c", "a"]);
        assert_eq!(table.numeric("c").unwrap(), [Some(3.0), Some(6.0)]);
    }

    #[test]
    fn test_unknown_column_in_subset() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "wide.csv", "a,b\n1,2\n");

        let options = LoadOptions::default().columns(["nope"]);
        let err = load_csv(dir.path(), "wide.csv", &options).unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_empty_file_with_inferred_header() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "empty.csv", "");

        let err = load_csv(dir.path(), "empty.csv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, TableError::Parse { .. }));
    }
}
