use crate::core::Result;
use crate::result::QueryResult;
use crate::storage::{Table, TableHandle};

pub struct ExecutionContext<'a> {
    pub table: &'a mut Table,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(table: &'a mut Table) -> Self {
        Self { table }
    }
}

/// A single bound unit of work against one table.
///
/// The database resolves `target()` and hands the table to `run`; it never
/// looks at the concrete operation type, so new operations only need a new
/// impl of this trait. `run` consumes the operation, so each one executes at
/// most once.
pub trait Operation {
    /// Name for diagnostics.
    fn name(&self) -> &'static str;

    fn target(&self) -> TableHandle;

    fn run(self, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult>;
}
