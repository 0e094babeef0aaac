/// Operations defined outside the crate run through the same dispatcher.

use memtabledb::{
    Database, DbError, ExecutionContext, InsertOperation, Operation, QueryResult, Record,
    Result, SelectOperation, TableHandle,
};

/// Clears a table and reports how many rows were removed.
struct TruncateOperation {
    table: TableHandle,
}

impl Operation for TruncateOperation {
    fn name(&self) -> &'static str {
        "TRUNCATE"
    }

    fn target(&self) -> TableHandle {
        self.table
    }

    fn run(self, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let count = ctx.table.len();
        for _ in 0..count {
            ctx.table.delete_row(0)?;
        }
        Ok(QueryResult::affected(count))
    }
}

/// Returns the rows whose `column` equals `value`.
struct FilterOperation {
    table: TableHandle,
    column: &'static str,
    value: &'static str,
}

impl Operation for FilterOperation {
    fn name(&self) -> &'static str {
        "FILTER"
    }

    fn target(&self) -> TableHandle {
        self.table
    }

    fn run(self, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let rows = ctx
            .table
            .select()
            .filter(|row| row.get(self.column) == Some(self.value))
            .cloned()
            .collect();
        Ok(QueryResult::with_rows(rows))
    }
}

fn seeded() -> std::result::Result<(Database, TableHandle), DbError> {
    let mut db = Database::new();
    let t = db.create_table("employees")?;
    for (id, dept) in [("1", "HR"), ("2", "IT"), ("3", "HR")] {
        db.execute_query(InsertOperation::new(t, [("id", id), ("department", dept)]))?;
    }
    Ok((db, t))
}

#[test]
fn test_custom_read_operation() {
    let (mut db, t) = seeded().unwrap();

    let result = db
        .execute_query(FilterOperation { table: t, column: "department", value: "HR" })
        .unwrap();

    let ids: Vec<_> = result.rows().iter().filter_map(|r| r.get("id")).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_custom_mutating_operation() {
    let (mut db, t) = seeded().unwrap();

    let result = db.execute_query(TruncateOperation { table: t }).unwrap();
    assert_eq!(result.affected_rows(), Some(3));
    assert!(db.execute_query(SelectOperation::new(t)).unwrap().is_empty());
}

#[test]
fn test_result_rendering() {
    let (mut db, t) = seeded().unwrap();
    let result = db.execute_query(SelectOperation::new(t)).unwrap();

    assert_eq!(
        result.to_json().unwrap(),
        r#"[{"department":"HR","id":"1"},{"department":"IT","id":"2"},{"department":"HR","id":"3"}]"#
    );
    assert!(result.to_string().ends_with("3 row(s)"));
    assert_eq!(result.rows()[0].to_string(), "department: HR\tid: 1");
    assert_eq!(result.rows()[0], Record::from([("id", "1"), ("department", "HR")]));
}

#[test]
fn test_index_metadata_is_inert() {
    let (mut db, t) = seeded().unwrap();
    db.table_mut(t).unwrap().add_index("id");

    let table = db.table(t).unwrap();
    assert!(table.is_indexed("id"));
    assert_eq!(table.len(), 3);

    // Duplicate values in an "indexed" column are still accepted.
    db.execute_query(InsertOperation::new(t, [("id", "1")])).unwrap();
    assert_eq!(db.table(t).unwrap().len(), 4);
}
