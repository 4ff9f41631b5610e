//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for assembly operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for statement assembly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// SELECT statement has no columns configured
    #[error("select statement has no columns")]
    NoColumns,

    /// A configured column is empty or whitespace-only
    #[error("select statement contains a blank column")]
    BlankColumn,

    /// UPDATE statement has no target table
    #[error("no table specified for update")]
    NoTable,

    /// UPDATE statement has no SET assignments
    #[error("no values passed in to set")]
    EmptySet,

    /// Row count exceeds the configured ceiling
    #[error("row count {row_count} exceeds the ceiling {max}")]
    RowCountOutOfRange { row_count: u64, max: u64 },
}

impl BuildError {
    /// Check if this error concerns the SELECT column list
    pub fn is_column_error(&self) -> bool {
        matches!(self, Self::NoColumns | Self::BlankColumn)
    }

    /// Check if this is a pagination policy rejection
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::RowCountOutOfRange { .. })
    }
}
