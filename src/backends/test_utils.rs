//! Test utilities for sequence connection testing
//!
//! This module provides a mock implementation for testing statement
//! generation and catalog reads without requiring an actual database
//! connection.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::connection::SequenceConnection;
use super::error::{DatabaseError, Result};
use super::types::Row;

/// Mock sequence connection for testing
///
/// Responses are scripted per SQL text; every executed DDL statement is
/// recorded for assertion. Queries with no scripted response return an
/// empty row set.
///
/// # Examples
///
/// ```
/// use pg_sequencer::backends::test_utils::MockConnection;
///
/// let conn = MockConnection::new(170000);
/// assert!(conn.executed().is_empty());
/// ```
pub struct MockConnection {
	version: i64,
	responses: HashMap<String, Vec<Row>>,
	failures: HashSet<String>,
	executed: Mutex<Vec<String>>,
}

impl MockConnection {
	/// Create a mock reporting the given `server_version_num`
	pub fn new(version: i64) -> Self {
		Self {
			version,
			responses: HashMap::new(),
			failures: HashSet::new(),
			executed: Mutex::new(Vec::new()),
		}
	}

	/// Script the rows returned for an exact SQL text
	pub fn with_rows(mut self, sql: impl Into<String>, rows: Vec<Row>) -> Self {
		self.responses.insert(sql.into(), rows);
		self
	}

	/// Make an exact SQL text fail with an execution error
	pub fn with_failure(mut self, sql: impl Into<String>) -> Self {
		self.failures.insert(sql.into());
		self
	}

	/// Statements issued through `execute`, in order
	pub fn executed(&self) -> Vec<String> {
		self.executed.lock().expect("executed log poisoned").clone()
	}

	fn check_failure(&self, sql: &str) -> Result<()> {
		if self.failures.contains(sql) {
			return Err(DatabaseError::ExecutionError(format!(
				"scripted failure for: {}",
				sql
			)));
		}
		Ok(())
	}
}

#[async_trait::async_trait]
impl SequenceConnection for MockConnection {
	async fn execute(&self, sql: &str) -> Result<()> {
		self.check_failure(sql)?;
		self.executed
			.lock()
			.expect("executed log poisoned")
			.push(sql.to_string());
		Ok(())
	}

	async fn query(&self, sql: &str) -> Result<Vec<Row>> {
		self.check_failure(sql)?;
		Ok(self.responses.get(sql).cloned().unwrap_or_default())
	}

	async fn query_one(&self, sql: &str) -> Result<Row> {
		self.check_failure(sql)?;
		self.responses
			.get(sql)
			.and_then(|rows| rows.first().cloned())
			.ok_or_else(|| DatabaseError::RowNotFound(sql.to_string()))
	}

	async fn server_version(&self) -> Result<i64> {
		Ok(self.version)
	}
}
