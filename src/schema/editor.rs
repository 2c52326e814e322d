//! Sequence editor
//!
//! The executing surface over the statement builders: renders DDL text and
//! issues it through an injected [`SequenceConnection`], and exposes
//! catalog introspection of the sequences already present.

use crate::backends::{Result, SequenceConnection};
use crate::introspection::SequenceCatalog;

use super::builder::{change_sequence_sql, create_sequence_sql, drop_sequence_sql};
use super::definition::SequenceDefinition;
use super::options::SequenceOptions;

/// Sequence schema editor over an injected connection
///
/// Stateless between calls; the only state consulted is the database's own.
///
/// # Examples
///
/// ```no_run
/// use pg_sequencer::backends::postgres::PostgresConnection;
/// use pg_sequencer::schema::{SequenceEditor, SequenceOptions};
/// use sqlx::PgPool;
///
/// # async fn example() -> Result<(), pg_sequencer::backends::DatabaseError> {
/// # let pool = PgPool::connect_lazy("postgresql://localhost/mydb").unwrap();
/// let editor = SequenceEditor::new(PostgresConnection::new(pool));
/// editor
///     .create_sequence("seq_user", &SequenceOptions::default().increment(1).cache(5))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SequenceEditor<C> {
	conn: C,
}

impl<C: SequenceConnection> SequenceEditor<C> {
	pub fn new(conn: C) -> Self {
		Self { conn }
	}

	pub fn connection(&self) -> &C {
		&self.conn
	}

	/// Create a sequence with the given options
	pub async fn create_sequence(&self, name: &str, options: &SequenceOptions) -> Result<()> {
		let sql = create_sequence_sql(name, options);
		tracing::debug!(%sql, "creating sequence");
		self.conn.execute(&sql).await
	}

	/// Alter an existing sequence
	///
	/// An empty option set produces no statement; nothing is sent to the
	/// connection and the call succeeds.
	pub async fn change_sequence(&self, name: &str, options: &SequenceOptions) -> Result<()> {
		let sql = change_sequence_sql(name, options);
		if sql.is_empty() {
			return Ok(());
		}
		tracing::debug!(%sql, "altering sequence");
		self.conn.execute(&sql).await
	}

	/// Drop a sequence
	pub async fn drop_sequence(&self, name: &str) -> Result<()> {
		let sql = drop_sequence_sql(name);
		tracing::debug!(%sql, "dropping sequence");
		self.conn.execute(&sql).await
	}

	/// List all user-declared sequences in the schema, ordered by name
	///
	/// Probes the server version once to select the catalog query variant.
	/// Sequences backing identity/serial columns are excluded.
	pub async fn sequences(&self) -> Result<Vec<SequenceDefinition>> {
		let version = self.conn.server_version().await?;
		let catalog = SequenceCatalog::for_version(version);
		catalog.sequences(&self.conn).await
	}
}
