use super::DatabaseConfig;
use crate::core::{DbError, Result};
use crate::executor::{ExecutionContext, Operation};
use crate::result::QueryResult;
use crate::storage::{Catalog, Table, TableHandle};
use log::{debug, trace};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DATABASE_ID: AtomicU64 = AtomicU64::new(1);

/// Owner of a set of uniquely named tables.
///
/// Tables live in an arena for the whole life of the database and are
/// addressed through `TableHandle`s, which operations carry instead of
/// references. Each database has a process-unique id stamped into the
/// handles it issues, so a handle from another database is rejected.
pub struct Database {
    id: u64,
    config: DatabaseConfig,
    tables: Vec<Table>,
    catalog: Catalog,
}

impl Database {
    pub fn new() -> Self {
        Self::from_valid_config(DatabaseConfig::default())
    }

    pub fn with_config(config: DatabaseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DatabaseConfig) -> Self {
        Self {
            id: NEXT_DATABASE_ID.fetch_add(1, Ordering::Relaxed),
            config,
            tables: Vec::new(),
            catalog: Catalog::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Create an empty table named `name`.
    pub fn create_table(&mut self, name: &str) -> Result<TableHandle> {
        if let Some(limit) = self.config.max_tables
            && self.tables.len() >= limit
        {
            return Err(DbError::TableLimitReached(limit));
        }

        let handle = TableHandle::new(self.id, self.tables.len());
        self.catalog.register(name, handle)?;
        self.tables
            .push(Table::with_capacity(name, self.config.row_capacity));

        debug!("{}: created table '{}' (slot {})", self.config.name, name, handle.slot());
        Ok(handle)
    }

    /// Look up a table by name. Never creates one.
    pub fn get_table(&self, name: &str) -> Result<TableHandle> {
        self.catalog.lookup(name)
    }

    pub fn table(&self, handle: TableHandle) -> Result<&Table> {
        let slot = self.resolve(handle)?;
        Ok(&self.tables[slot])
    }

    pub fn table_mut(&mut self, handle: TableHandle) -> Result<&mut Table> {
        let slot = self.resolve(handle)?;
        Ok(&mut self.tables[slot])
    }

    /// Arena slot for `handle`, if this database issued it.
    fn resolve(&self, handle: TableHandle) -> Result<usize> {
        if handle.database() != self.id || handle.slot() >= self.tables.len() {
            return Err(DbError::InvalidHandle(handle.slot()));
        }
        Ok(handle.slot())
    }

    pub fn table_by_name(&self, name: &str) -> Result<&Table> {
        let handle = self.get_table(name)?;
        self.table(handle)
    }

    pub fn table_exists(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Table names in creation order.
    pub fn list_tables(&self) -> Vec<&str> {
        self.tables.iter().map(Table::name).collect()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Run `op` once against its target table and return its result.
    ///
    /// Errors raised by the operation are returned unchanged; a failed
    /// operation leaves the table as it was.
    pub fn execute_query<O: Operation>(&mut self, op: O) -> Result<QueryResult> {
        let handle = op.target();
        let op_name = op.name();
        let slot = self.resolve(handle)?;
        let table = &mut self.tables[slot];

        trace!("{}: {} on '{}'", self.config.name, op_name, table.name());

        let mut ctx = ExecutionContext::new(table);
        op.run(&mut ctx).inspect_err(|err| {
            debug!("{}: {} failed ({}): {}", self.config.name, op_name, err.kind(), err);
        })
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
