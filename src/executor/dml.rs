use super::{ExecutionContext, Operation};
use crate::core::{Record, Result};
use crate::result::QueryResult;
use crate::storage::TableHandle;

/// Append one record.
#[derive(Debug, Clone)]
pub struct InsertOperation {
    table: TableHandle,
    row: Record,
}

impl InsertOperation {
    pub fn new(table: TableHandle, row: impl Into<Record>) -> Self {
        Self {
            table,
            row: row.into(),
        }
    }
}

impl Operation for InsertOperation {
    fn name(&self) -> &'static str {
        "INSERT"
    }

    fn target(&self) -> TableHandle {
        self.table
    }

    fn run(self, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        ctx.table.insert(self.row);
        Ok(QueryResult::affected(1))
    }
}

/// Replace the record at a position.
#[derive(Debug, Clone)]
pub struct UpdateOperation {
    table: TableHandle,
    index: usize,
    new_row: Record,
}

impl UpdateOperation {
    pub fn new(table: TableHandle, index: usize, new_row: impl Into<Record>) -> Self {
        Self {
            table,
            index,
            new_row: new_row.into(),
        }
    }
}

impl Operation for UpdateOperation {
    fn name(&self) -> &'static str {
        "UPDATE"
    }

    fn target(&self) -> TableHandle {
        self.table
    }

    fn run(self, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        ctx.table.update(self.index, self.new_row)?;
        Ok(QueryResult::affected(1))
    }
}

/// Remove the record at a position.
#[derive(Debug, Clone, Copy)]
pub struct DeleteOperation {
    table: TableHandle,
    index: usize,
}

impl DeleteOperation {
    pub fn new(table: TableHandle, index: usize) -> Self {
        Self { table, index }
    }
}

impl Operation for DeleteOperation {
    fn name(&self) -> &'static str {
        "DELETE"
    }

    fn target(&self) -> TableHandle {
        self.table
    }

    fn run(self, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        ctx.table.delete_row(self.index)?;
        Ok(QueryResult::affected(1))
    }
}
