use super::{ExecutionContext, Operation};
use crate::core::Result;
use crate::result::QueryResult;
use crate::storage::TableHandle;

/// Full scan: every row in storage order. No filtering or projection.
#[derive(Debug, Clone, Copy)]
pub struct SelectOperation {
    table: TableHandle,
}

impl SelectOperation {
    pub fn new(table: TableHandle) -> Self {
        Self { table }
    }
}

impl Operation for SelectOperation {
    fn name(&self) -> &'static str {
        "SELECT"
    }

    fn target(&self) -> TableHandle {
        self.table
    }

    fn run(self, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let rows = ctx.table.select().cloned().collect();
        Ok(QueryResult::with_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use crate::storage::Table;

    #[test]
    fn test_select_returns_rows_in_order() {
        let mut table = Table::new("departments");
        table.insert(Record::from([("id", "1"), ("name", "HR")]));
        table.insert(Record::from([("id", "2"), ("name", "IT")]));

        let mut ctx = ExecutionContext::new(&mut table);
        let result = SelectOperation::new(TableHandle::new(0, 0)).run(&mut ctx).unwrap();

        assert_eq!(result.row_count(), 2);
        assert_eq!(result.rows()[1].get("name"), Some("IT"));
        assert_eq!(result.affected_rows(), None);
    }

    #[test]
    fn test_select_empty_table() {
        let mut table = Table::new("empty");
        let mut ctx = ExecutionContext::new(&mut table);
        let result = SelectOperation::new(TableHandle::new(0, 0)).run(&mut ctx).unwrap();
        assert!(result.is_empty());
        assert!(result.columns().is_empty());
    }
}
