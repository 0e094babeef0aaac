use crate::core::{DbError, Record, Result};

/// Named, ordered sequence of records.
///
/// Rows are addressed by zero-based position. Deleting a row shifts every
/// later row down by one, so a position is not a stable identifier: callers
/// holding a position past a deleted row must adjust it themselves.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    rows: Vec<Record>,
    /// Columns marked with `add_index`. Metadata only, never consulted.
    indexes: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            rows: Vec::with_capacity(capacity),
            indexes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a row; it takes the last position.
    pub fn insert(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Replace the whole record at `index`.
    pub fn update(&mut self, index: usize, new_row: Record) -> Result<()> {
        self.check_bounds(index)?;
        self.rows[index] = new_row;
        Ok(())
    }

    /// Remove the record at `index`, shifting later rows one position down.
    pub fn delete_row(&mut self, index: usize) -> Result<Record> {
        self.check_bounds(index)?;
        Ok(self.rows.remove(index))
    }

    /// All rows in storage order.
    pub fn select(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mark `column` as indexed.
    ///
    /// This is inert metadata: lookups are not accelerated, uniqueness is not
    /// enforced and the column does not have to exist in any row.
    pub fn add_index(&mut self, column: impl Into<String>) {
        let column = column.into();
        if !self.is_indexed(&column) {
            self.indexes.push(column);
        }
    }

    pub fn is_indexed(&self, column: &str) -> bool {
        self.indexes.iter().any(|idx| idx == column)
    }

    pub fn indexed_columns(&self) -> &[String] {
        &self.indexes
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(DbError::OutOfRange {
                table: self.name.clone(),
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }
}
