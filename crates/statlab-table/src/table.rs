use crate::TableError;

/// An immutable tabular dataset: named columns over a fixed row count.
///
/// Cells are stored as raw text exactly as read from the file; typed access
/// goes through the projection methods, which never mutate the table. Every
/// projection preserves row order, so index `i` of any column view refers
/// to the same underlying record.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == headers.len()));
        Self { headers, rows }
    }

    /// Column names, in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Resolves a column name to its positional index.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Projects a column to its raw text cells.
    pub fn text(&self, name: &str) -> Result<Vec<&str>, TableError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Projects a column to numeric cells by name.
    ///
    /// An empty cell becomes `None` (missing value); a non-empty cell that
    /// does not parse as a number is a [`TableError::NotNumeric`] error.
    pub fn numeric(&self, name: &str) -> Result<Vec<Option<f64>>, TableError> {
        let index = self.column_index(name)?;
        self.numeric_at(index)
    }

    /// Projects a column to numeric cells by positional index.
    ///
    /// This is the access path for headerless datasets; semantics match
    /// [`Table::numeric`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn numeric_at(&self, index: usize) -> Result<Vec<Option<f64>>, TableError> {
        assert!(index < self.width(), "column index out of bounds");
        self.rows
            .iter()
            .map(|row| parse_cell(&self.headers[index], &row[index]))
            .collect()
    }

    /// Derives a new table containing only the named columns, in the given
    /// order. Row order and count are preserved.
    pub fn select<S>(&self, names: &[S]) -> Result<Table, TableError>
    where
        S: AsRef<str>,
    {
        let indices = names
            .iter()
            .map(|name| self.column_index(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let headers = indices.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Table::new(headers, rows))
    }
}

fn parse_cell(column: &str, cell: &str) -> Result<Option<f64>, TableError> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| TableError::NotNumeric {
            column: column.to_string(),
            value: cell.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["name".to_string(), "age".to_string()],
            vec![
                vec!["Alice".to_string(), "34".to_string()],
                vec!["Bob".to_string(), String::new()],
                vec!["Carol".to_string(), "29.5".to_string()],
            ],
        )
    }

    #[test]
    fn test_text_projection() {
        let table = sample();
        assert_eq!(table.text("name").unwrap(), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_numeric_projection_with_missing_cell() {
        let table = sample();
        let ages = table.numeric("age").unwrap();
        assert_eq!(ages, [Some(34.0), None, Some(29.5)]);
    }

    #[test]
    fn test_unknown_column() {
        let table = sample();
        assert!(matches!(
            table.text("fare"),
            Err(TableError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_non_numeric_cell_is_an_error() {
        let table = sample();
        assert!(matches!(
            table.numeric("name"),
            Err(TableError::NotNumeric { .. })
        ));
    }
}
