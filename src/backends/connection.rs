//! Connection trait required from a host data-access layer
//!
//! Sequence management needs exactly four capabilities from the underlying
//! connection: running a DDL statement, running a read query, fetching a
//! single row, and probing the server version. Anything that provides them,
//! a real driver pool or a scripted mock, can drive a
//! [`SequenceEditor`](crate::schema::SequenceEditor).

use super::error::Result;
use super::types::Row;

/// Capabilities required from a sequence-managing database connection
///
/// Implemented per target database driver and injected into callers by
/// dependency passing. Connection lifecycle, transactions, timeouts, and
/// retries are the implementor's concern; this layer issues one statement
/// per call and propagates the first failure unchanged.
#[async_trait::async_trait]
pub trait SequenceConnection: Send + Sync {
	/// Run a DDL statement with no result set expected
	async fn execute(&self, sql: &str) -> Result<()>;

	/// Run a read query, returning rows in the order the engine produced them
	async fn query(&self, sql: &str) -> Result<Vec<Row>>;

	/// Run a read query expected to produce exactly one row
	///
	/// Fails on zero rows; implementors may also fail on ambiguity.
	async fn query_one(&self, sql: &str) -> Result<Row>;

	/// Report the server version in `server_version_num` form
	///
	/// For example `100000` for PostgreSQL 10.0. Used solely to select the
	/// catalog query variant.
	async fn server_version(&self) -> Result<i64>;
}
