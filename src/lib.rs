// ============================================================================
// MemTableDB Library
// ============================================================================

//! In-process tabular store: named tables of schemaless string records,
//! mutated and read through operations dispatched by a [`Database`].
//!
//! # Examples
//!
//! ```
//! use memtabledb::{Database, InsertOperation, Record, SelectOperation};
//!
//! # fn main() -> Result<(), memtabledb::DbError> {
//! let mut db = Database::new();
//! let employees = db.create_table("employees")?;
//!
//! db.execute_query(InsertOperation::new(
//!     employees,
//!     [("id", "1"), ("name", "Garvit"), ("department", "HR")],
//! ))?;
//!
//! let result = db.execute_query(SelectOperation::new(employees))?;
//! assert_eq!(result.row_count(), 1);
//! assert_eq!(result.rows()[0], Record::from([("id", "1"), ("name", "Garvit"), ("department", "HR")]));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod executor;
pub mod facade;
pub mod result;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{DbError, Record, Result};
pub use crate::executor::{
    DeleteOperation, ExecutionContext, InsertOperation, Operation, SelectOperation,
    UpdateOperation,
};
pub use crate::facade::{Database, DatabaseConfig};
pub use crate::result::QueryResult;
pub use crate::storage::{Table, TableHandle};
