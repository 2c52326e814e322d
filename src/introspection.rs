//! Sequence catalog introspection
//!
//! Reads the system catalogs and normalizes each user-declared sequence
//! into a [`SequenceDefinition`] with the same option shape the statement
//! builder consumes, enabling round-tripping of existing state.
//!
//! PostgreSQL 10 moved per-sequence metadata into the `pg_sequence`
//! catalog; older servers expose it only through the sequence's own backing
//! relation. The two query shapes are modeled as a [`SequenceCatalog`]
//! strategy selected once from the server version probe, keeping each
//! variant independently testable.

use crate::backends::{DatabaseError, QueryValue, Result, Row, SequenceConnection};
use crate::schema::{SequenceDefinition, SequenceOptions};

/// First `server_version_num` with the `pg_sequence` catalog (PostgreSQL 10)
pub const PG_SEQUENCE_CATALOG_VERSION: i64 = 100_000;

/// Single-query listing against `pg_class` joined with `pg_sequence`
///
/// Sequences backing identity/serial columns follow the `_id_seq` naming
/// convention and are filtered out; only explicitly declared sequences
/// surface.
pub const MODERN_SEQUENCES_SQL: &str = "\
SELECT
	c.relname AS name,
	seq.seqstart AS start_value,
	seq.seqincrement AS increment_by,
	seq.seqmax AS max_value,
	seq.seqmin AS min_value,
	seq.seqcache AS cache_value,
	seq.seqcycle AS is_cycled
FROM pg_class c
JOIN pg_sequence seq ON seq.seqrelid = c.relfilenode
WHERE c.relkind = 'S'
AND c.relname NOT LIKE '%_id_seq'
ORDER BY c.relname ASC";

/// Candidate listing for servers without `pg_sequence` (same filter/order)
pub const LEGACY_SEQUENCE_NAMES_SQL: &str = "\
SELECT c.relname
FROM pg_class c
WHERE c.relkind = 'S'
AND c.relname NOT LIKE '%_id_seq'
ORDER BY c.relname ASC";

/// Per-sequence metadata lookup on pre-10 servers
///
/// Each sequence is addressable as a single-row relation named after
/// itself, carrying the same metadata columns the modern catalog exposes.
pub fn legacy_sequence_sql(name: &str) -> String {
	format!("SELECT * FROM {}", name)
}

/// Catalog query strategy, selected once per read from the version probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceCatalog {
	/// `pg_class` joined with `pg_sequence` in a single query
	Modern,
	/// `pg_class` listing plus one lookup per sequence (sequential N+1,
	/// acceptable for administrative introspection over small counts)
	Legacy,
}

impl SequenceCatalog {
	/// Select the strategy for a `server_version_num`
	///
	/// # Examples
	///
	/// ```rust
	/// use pg_sequencer::introspection::SequenceCatalog;
	///
	/// assert_eq!(SequenceCatalog::for_version(100000), SequenceCatalog::Modern);
	/// assert_eq!(SequenceCatalog::for_version(90624), SequenceCatalog::Legacy);
	/// ```
	pub fn for_version(version: i64) -> Self {
		if version >= PG_SEQUENCE_CATALOG_VERSION {
			SequenceCatalog::Modern
		} else {
			SequenceCatalog::Legacy
		}
	}

	/// List all user-declared sequences, ordered by name ascending
	///
	/// Any query failure aborts the whole read; no partial result is
	/// returned.
	pub async fn sequences<C>(&self, conn: &C) -> Result<Vec<SequenceDefinition>>
	where
		C: SequenceConnection + ?Sized,
	{
		match self {
			SequenceCatalog::Modern => modern_sequences(conn).await,
			SequenceCatalog::Legacy => legacy_sequences(conn).await,
		}
	}
}

async fn modern_sequences<C>(conn: &C) -> Result<Vec<SequenceDefinition>>
where
	C: SequenceConnection + ?Sized,
{
	let rows = conn.query(MODERN_SEQUENCES_SQL).await?;
	if rows.is_empty() {
		tracing::warn!("no user-declared sequences found in catalog");
	}

	rows.iter()
		.map(|row| {
			let name = string_column(row, "name")?;
			let options = sequence_options_from_row(row)?;
			Ok(SequenceDefinition::new(name, options))
		})
		.collect()
}

async fn legacy_sequences<C>(conn: &C) -> Result<Vec<SequenceDefinition>>
where
	C: SequenceConnection + ?Sized,
{
	let rows = conn.query(LEGACY_SEQUENCE_NAMES_SQL).await?;
	if rows.is_empty() {
		tracing::warn!("no user-declared sequences found in catalog");
	}

	let mut sequences = Vec::with_capacity(rows.len());
	for row in &rows {
		let name = string_column(row, "relname")?;
		let metadata = conn.query_one(&legacy_sequence_sql(&name)).await?;
		let options = sequence_options_from_row(&metadata)?;
		sequences.push(SequenceDefinition::new(name, options));
	}
	Ok(sequences)
}

/// Normalize one metadata row into the builder's option shape
///
/// Both catalog variants expose the same column names. Every option comes
/// back explicit: bounds as concrete values, cycle as an asserted boolean.
fn sequence_options_from_row(row: &Row) -> Result<SequenceOptions> {
	Ok(SequenceOptions::default()
		.increment(int_column(row, "increment_by")?)
		.min_value(Some(int_column(row, "min_value")?))
		.max_value(Some(int_column(row, "max_value")?))
		.start(int_column(row, "start_value")?)
		.cache(int_column(row, "cache_value")?)
		.cycle(bool_column(row, "is_cycled")?))
}

// Legacy catalogs served over the text protocol report every column as a
// string; coercions accept both the typed and textual forms.

fn int_column(row: &Row, name: &str) -> Result<i64> {
	match row.data.get(name) {
		Some(QueryValue::Int(i)) => Ok(*i),
		Some(QueryValue::String(s)) => s.trim().parse::<i64>().map_err(|_| {
			DatabaseError::TypeError(format!("Cannot read column {} as integer: {:?}", name, s))
		}),
		Some(other) => Err(DatabaseError::TypeError(format!(
			"Cannot read column {} as integer: {:?}",
			name, other
		))),
		None => Err(DatabaseError::ColumnNotFound(name.to_string())),
	}
}

fn bool_column(row: &Row, name: &str) -> Result<bool> {
	match row.data.get(name) {
		Some(QueryValue::Bool(b)) => Ok(*b),
		// single-character flag from the text protocol; anything but 't' is false
		Some(QueryValue::String(s)) => Ok(s == "t"),
		Some(other) => Err(DatabaseError::TypeError(format!(
			"Cannot read column {} as boolean: {:?}",
			name, other
		))),
		None => Err(DatabaseError::ColumnNotFound(name.to_string())),
	}
}

fn string_column(row: &Row, name: &str) -> Result<String> {
	match row.data.get(name) {
		Some(QueryValue::String(s)) => Ok(s.clone()),
		Some(other) => Err(DatabaseError::TypeError(format!(
			"Cannot read column {} as string: {:?}",
			name, other
		))),
		None => Err(DatabaseError::ColumnNotFound(name.to_string())),
	}
}
