//! Error types for the settlement pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, SettleError>;

/// Errors that abort a run. There is no partial report.
#[derive(Error, Debug)]
pub enum SettleError {
    /// The ledger could not be read
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A transaction cannot be split
    #[error("Invalid transaction {id}: {reason}")]
    InvalidTransaction { id: usize, reason: String },

    /// The requested intermediate CSV could not be written
    #[error("Failed to write intermediate CSV {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write the balance report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons the ledger file could not be turned into transactions.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to open the input file
    #[error("Cannot open ledger {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error, including unreadable records
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
}
