use crate::core::{DbError, Result};
use std::collections::HashMap;

/// Handle to a table owned by a `Database`.
///
/// Slot index into the issuing database's table arena, tagged with that
/// database's id. Tables are never dropped, so a handle stays valid for the
/// life of the database that issued it and is rejected by any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableHandle {
    database: u64,
    slot: usize,
}

impl TableHandle {
    pub(crate) fn new(database: u64, slot: usize) -> Self {
        Self { database, slot }
    }

    /// Id of the database that issued this handle.
    pub fn database(self) -> u64 {
        self.database
    }

    pub fn slot(self) -> usize {
        self.slot
    }
}

/// Name -> handle registry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<String, TableHandle>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`. Fails if the name is taken; the existing entry is kept.
    pub fn register(&mut self, name: &str, handle: TableHandle) -> Result<()> {
        if self.tables.contains_key(name) {
            return Err(DbError::DuplicateTable(name.to_string()));
        }
        self.tables.insert(name.to_string(), handle);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<TableHandle> {
        self.tables
            .get(name)
            .copied()
            .ok_or_else(|| DbError::TableNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
