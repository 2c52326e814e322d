//! PostgreSQL implementation of the sequence connection trait

use async_trait::async_trait;
use sqlx::{Column, PgPool, postgres::PgRow};
use std::sync::Arc;

use super::connection::SequenceConnection;
use super::error::{DatabaseError, Result};
use super::types::{QueryValue, Row};

/// PostgreSQL sequence connection backed by a sqlx connection pool
///
/// # Example
///
/// ```no_run
/// use pg_sequencer::backends::postgres::PostgresConnection;
/// use sqlx::PgPool;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = PgPool::connect("postgresql://localhost/mydb").await?;
/// let conn = PostgresConnection::new(pool);
/// # Ok(())
/// # }
/// ```
pub struct PostgresConnection {
	pool: Arc<PgPool>,
}

impl PostgresConnection {
	/// Create a new connection from a pool
	pub fn new(pool: PgPool) -> Self {
		Self {
			pool: Arc::new(pool),
		}
	}

	/// Create from an `Arc<PgPool>`
	pub fn from_pool_arc(pool: Arc<PgPool>) -> Self {
		Self { pool }
	}

	pub fn pool(&self) -> &PgPool {
		&self.pool
	}

	fn convert_row(pg_row: PgRow) -> Row {
		use sqlx::Row as SqlxRow;

		let mut row = Row::new();
		for column in pg_row.columns() {
			let column_name = column.name();

			if let Ok(value) = pg_row.try_get::<bool, _>(column_name) {
				row.insert(column_name.to_string(), QueryValue::Bool(value));
			} else if let Ok(value) = pg_row.try_get::<i64, _>(column_name) {
				row.insert(column_name.to_string(), QueryValue::Int(value));
			} else if let Ok(value) = pg_row.try_get::<i32, _>(column_name) {
				row.insert(column_name.to_string(), QueryValue::Int(value as i64));
			} else if let Ok(value) = pg_row.try_get::<i16, _>(column_name) {
				row.insert(column_name.to_string(), QueryValue::Int(value as i64));
			} else if let Ok(value) = pg_row.try_get::<f64, _>(column_name) {
				row.insert(column_name.to_string(), QueryValue::Float(value));
			} else if let Ok(value) = pg_row.try_get::<String, _>(column_name) {
				row.insert(column_name.to_string(), QueryValue::String(value));
			} else {
				row.insert(column_name.to_string(), QueryValue::Null);
			}
		}
		row
	}
}

#[async_trait]
impl SequenceConnection for PostgresConnection {
	async fn execute(&self, sql: &str) -> Result<()> {
		sqlx::query(sql).execute(self.pool.as_ref()).await?;
		Ok(())
	}

	async fn query(&self, sql: &str) -> Result<Vec<Row>> {
		let rows = sqlx::query(sql).fetch_all(self.pool.as_ref()).await?;
		Ok(rows.into_iter().map(Self::convert_row).collect())
	}

	async fn query_one(&self, sql: &str) -> Result<Row> {
		let row = sqlx::query(sql)
			.fetch_optional(self.pool.as_ref())
			.await?
			.ok_or_else(|| DatabaseError::RowNotFound(sql.to_string()))?;
		Ok(Self::convert_row(row))
	}

	async fn server_version(&self) -> Result<i64> {
		use sqlx::Row as SqlxRow;

		let row = sqlx::query("SELECT current_setting('server_version_num')::bigint AS version")
			.fetch_one(self.pool.as_ref())
			.await?;
		let version: i64 = row
			.try_get("version")
			.map_err(|e| DatabaseError::TypeError(format!("Invalid server version: {}", e)))?;
		Ok(version)
	}
}
