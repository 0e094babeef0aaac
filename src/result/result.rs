use crate::core::{Record, Result};
use std::collections::HashSet;
use std::fmt;

/// Output of a single operation.
///
/// Mutations report how many rows they touched; reads carry the rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Record>,
    affected_rows: Option<usize>,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Result set for a read. Columns are the union of the rows' column
    /// names, in order of first appearance.
    pub fn with_rows(rows: Vec<Record>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for column in row.columns() {
                if seen.insert(column) {
                    columns.push(column.to_string());
                }
            }
        }
        Self {
            columns,
            rows,
            affected_rows: None,
        }
    }

    pub fn affected(count: usize) -> Self {
        Self {
            affected_rows: Some(count),
            ..Self::default()
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn affected_rows(&self) -> Option<usize> {
        self.affected_rows
    }

    /// Rows as a JSON array of objects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.rows)?)
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(count) = self.affected_rows {
            return writeln!(f, "{} row(s) affected", count);
        }

        if self.columns.is_empty() {
            return writeln!(f, "Empty result set");
        }

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, column) in self.columns.iter().enumerate() {
                let cell = row.get(column).unwrap_or("");
                widths[i] = widths[i].max(cell.len());
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{:width$}", col, width = widths[i]))
            .collect();
        writeln!(f, "{}", header.join(" | "))?;

        let separator: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{}", separator)?;

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| format!("{:width$}", row.get(col).unwrap_or(""), width = widths[i]))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }

        write!(f, "\n{} row(s)", self.rows.len())
    }
}
