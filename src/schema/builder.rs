//! Sequence DDL statement builders
//!
//! Pure functions mapping a sequence name and an option set to DDL text.
//! The name is interpolated directly: supplying a safe identifier is the
//! caller's responsibility, and the emitted grammar matches the target
//! dialect literally (no quoting). No validation of domain constraints such
//! as `start <= max` is performed; the engine accepts or rejects the text
//! at execution time.

use super::options::SequenceOptions;

/// Generate CREATE SEQUENCE SQL
///
/// `CREATE [ TEMPORARY | TEMP ] SEQUENCE name [ INCREMENT [ BY ] increment ]`
/// `    [ MINVALUE minvalue | NO MINVALUE ] [ MAXVALUE maxvalue | NO MAXVALUE ]`
/// `    [ START [ WITH ] start ] [ CACHE cache ] [ [ NO ] CYCLE ]`
///
/// A `restart` option is silently dropped; creation cannot restart.
///
/// # Examples
///
/// ```rust
/// use pg_sequencer::schema::{SequenceOptions, create_sequence_sql};
///
/// let options = SequenceOptions::default()
///     .increment(1)
///     .min_value(Some(1))
///     .max_value(Some(20000))
///     .start(1)
///     .cache(5)
///     .cycle(true);
/// assert_eq!(
///     create_sequence_sql("seq_user", &options),
///     "CREATE SEQUENCE seq_user INCREMENT BY 1 MINVALUE 1 MAXVALUE 20000 START WITH 1 CACHE 5 CYCLE"
/// );
/// ```
pub fn create_sequence_sql(name: &str, options: &SequenceOptions) -> String {
	let mut options = options.clone();
	options.restart = None;
	format!("CREATE SEQUENCE {}{}", name, sequence_options_sql(&options))
}

/// Generate ALTER SEQUENCE SQL
///
/// Returns an empty string when the option set is empty: there is nothing
/// to alter, and the caller must treat the empty string as a no-op rather
/// than send it to the executor. A `start` option is silently dropped; a
/// sequence's start cannot be altered after creation, only restarted.
///
/// # Examples
///
/// ```rust
/// use pg_sequencer::schema::{SequenceOptions, change_sequence_sql};
///
/// let options = SequenceOptions::default().restart(1);
/// assert_eq!(
///     change_sequence_sql("seq_user", &options),
///     "ALTER SEQUENCE seq_user RESTART WITH 1"
/// );
///
/// assert_eq!(change_sequence_sql("seq_user", &SequenceOptions::default()), "");
/// ```
pub fn change_sequence_sql(name: &str, options: &SequenceOptions) -> String {
	if options.is_empty() {
		return String::new();
	}
	let mut options = options.clone();
	options.start = None;
	format!("ALTER SEQUENCE {}{}", name, sequence_options_sql(&options))
}

/// Generate DROP SEQUENCE SQL
///
/// # Examples
///
/// ```rust
/// use pg_sequencer::schema::drop_sequence_sql;
///
/// assert_eq!(drop_sequence_sql("seq_user"), "DROP SEQUENCE seq_user");
/// ```
pub fn drop_sequence_sql(name: &str) -> String {
	format!("DROP SEQUENCE {}", name)
}

/// Render the option clauses shared by CREATE and ALTER
///
/// Clauses appear in a fixed order: increment, min, max, start, restart,
/// cache, cycle. Each is emitted only when its option is set, prefixed with
/// a single space; integers render in base-10.
pub fn sequence_options_sql(options: &SequenceOptions) -> String {
	let mut sql = String::new();
	if let Some(increment) = options.increment {
		sql.push_str(&format!(" INCREMENT BY {}", increment));
	}
	match options.min_value {
		None => {}
		Some(None) => sql.push_str(" NO MINVALUE"),
		Some(Some(min)) => sql.push_str(&format!(" MINVALUE {}", min)),
	}
	match options.max_value {
		None => {}
		Some(None) => sql.push_str(" NO MAXVALUE"),
		Some(Some(max)) => sql.push_str(&format!(" MAXVALUE {}", max)),
	}
	if let Some(start) = options.start {
		sql.push_str(&format!(" START WITH {}", start));
	}
	if let Some(restart) = options.restart {
		sql.push_str(&format!(" RESTART WITH {}", restart));
	}
	if let Some(cache) = options.cache {
		sql.push_str(&format!(" CACHE {}", cache));
	}
	match options.cycle {
		None => {}
		Some(false) => sql.push_str(" NO CYCLE"),
		Some(true) => sql.push_str(" CYCLE"),
	}
	sql
}
