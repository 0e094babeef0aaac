use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("Table '{0}' already exists")]
    DuplicateTable(String),

    #[error("Table '{0}' not found")]
    TableNotFound(String),

    #[error("Row index {index} out of range for table '{table}' with {len} row(s)")]
    OutOfRange {
        table: String,
        index: usize,
        len: usize,
    },

    #[error("Table handle #{0} was not issued by this database")]
    InvalidHandle(usize),

    #[error("Table limit of {0} reached")]
    TableLimitReached(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DbError {
    /// Stable code for the error kind, independent of the message text.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateTable(_) => "duplicate_table",
            Self::TableNotFound(_) => "table_not_found",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidHandle(_) => "invalid_handle",
            Self::TableLimitReached(_) => "table_limit_reached",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Serialization(_) => "serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
