pub mod catalog;
pub mod table;

pub use catalog::{Catalog, TableHandle};
pub use table::Table;
