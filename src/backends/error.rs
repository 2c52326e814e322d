//! Error types for the connection abstraction

use thiserror::Error;

/// Errors surfaced by sequence connections and catalog reads
///
/// Engine-reported failures are propagated unchanged; this layer does not
/// classify or retry them.
#[derive(Debug, Error)]
pub enum DatabaseError {
	#[error("SQL error: {0}")]
	SqlError(#[from] sqlx::Error),

	#[error("Column not found: {0}")]
	ColumnNotFound(String),

	#[error("Type error: {0}")]
	TypeError(String),

	#[error("Execution error: {0}")]
	ExecutionError(String),

	#[error("Expected exactly one row from: {0}")]
	RowNotFound(String),
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
