use crate::core::{DbError, Result};
use serde::{Deserialize, Serialize};

/// Database configuration
///
/// Builder-style; every field has a default so a JSON config may name only
/// the fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database name
    pub name: String,

    /// Row capacity reserved for each new table. A sizing hint, not a limit.
    pub row_capacity: usize,

    /// Maximum number of tables (`None` = unbounded)
    pub max_tables: Option<usize>,
}

impl DatabaseConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Set the row capacity hint
    pub fn row_capacity(mut self, capacity: usize) -> Self {
        self.row_capacity = capacity;
        self
    }

    /// Set the maximum number of tables
    pub fn max_tables(mut self, max: usize) -> Self {
        self.max_tables = Some(max);
        self
    }

    /// Parse from a JSON document
    ///
    /// ```
    /// # use memtabledb::DatabaseConfig;
    /// let config = DatabaseConfig::from_json(r#"{"name": "company", "max_tables": 8}"#).unwrap();
    /// assert_eq!(config.name, "company");
    /// assert_eq!(config.row_capacity, 0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DbError::InvalidConfig("database name must not be empty".into()));
        }
        if self.max_tables == Some(0) {
            return Err(DbError::InvalidConfig("max_tables must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "memtabledb".to_string(),
            row_capacity: 0,
            max_tables: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = DatabaseConfig::new("company").row_capacity(64).max_tables(4);
        assert_eq!(config.name, "company");
        assert_eq!(config.row_capacity, 64);
        assert_eq!(config.max_tables, Some(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            DatabaseConfig::new("  ").validate(),
            Err(DbError::InvalidConfig(_))
        ));
        assert!(matches!(
            DatabaseConfig::default().max_tables(0).validate(),
            Err(DbError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json_defaults_and_errors() {
        let config = DatabaseConfig::from_json("{}").unwrap();
        assert_eq!(config, DatabaseConfig::default());

        assert!(matches!(
            DatabaseConfig::from_json("not json"),
            Err(DbError::Serialization(_))
        ));
        assert!(matches!(
            DatabaseConfig::from_json(r#"{"name": ""}"#),
            Err(DbError::InvalidConfig(_))
        ));
    }
}
