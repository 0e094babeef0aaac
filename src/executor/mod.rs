pub mod dml;
pub mod operation;
pub mod query;

pub use dml::{DeleteOperation, InsertOperation, UpdateOperation};
pub use operation::{ExecutionContext, Operation};
pub use query::SelectOperation;
