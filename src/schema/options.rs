//! Sequence option set
//!
//! This module provides [`SequenceOptions`], the typed option set consumed
//! by the statement builder and produced by catalog introspection.

/// Option set for CREATE SEQUENCE and ALTER SEQUENCE
///
/// Every option is three-valued where SQL is: an unset option says nothing,
/// an explicitly disabled option negates (`NO MINVALUE`, `NO CYCLE`), and a
/// set option asserts. `min_value`/`max_value` use `None` for unset,
/// `Some(None)` for the negated form and `Some(Some(n))` for a bound;
/// `cycle` uses `None`/`Some(false)`/`Some(true)`. The distinction between
/// unset and explicitly disabled is a real SQL semantic difference (server
/// default vs. explicit override) and is preserved losslessly.
///
/// # Examples
///
/// ```rust
/// use pg_sequencer::schema::SequenceOptions;
///
/// // INCREMENT BY 1 MINVALUE 1 MAXVALUE 20000 START WITH 1 CACHE 5 CYCLE
/// let options = SequenceOptions::default()
///     .increment(1)
///     .min_value(Some(1))
///     .max_value(Some(20000))
///     .start(1)
///     .cache(5)
///     .cycle(true);
///
/// // NO MINVALUE NO MAXVALUE
/// let options = SequenceOptions::default()
///     .min_value(None)
///     .max_value(None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceOptions {
	pub(crate) increment: Option<i64>,
	pub(crate) min_value: Option<Option<i64>>,
	pub(crate) max_value: Option<Option<i64>>,
	pub(crate) start: Option<i64>,
	pub(crate) restart: Option<i64>,
	pub(crate) cache: Option<i64>,
	pub(crate) cycle: Option<bool>,
}

impl SequenceOptions {
	/// Create an option set with every option unset
	pub fn new() -> Self {
		Self::default()
	}

	/// Set INCREMENT BY value
	pub fn increment(mut self, increment: i64) -> Self {
		self.increment = Some(increment);
		self
	}

	/// Set MINVALUE
	///
	/// Use `None` for NO MINVALUE, or `Some(value)` for a specific minimum.
	pub fn min_value(mut self, min_value: Option<i64>) -> Self {
		self.min_value = Some(min_value);
		self
	}

	/// Set MAXVALUE
	///
	/// Use `None` for NO MAXVALUE, or `Some(value)` for a specific maximum.
	pub fn max_value(mut self, max_value: Option<i64>) -> Self {
		self.max_value = Some(max_value);
		self
	}

	/// Set START WITH value
	///
	/// Only rendered by CREATE SEQUENCE; a sequence's start cannot be
	/// altered after creation.
	pub fn start(mut self, start: i64) -> Self {
		self.start = Some(start);
		self
	}

	/// Set RESTART WITH value
	///
	/// Only rendered by ALTER SEQUENCE; creation cannot restart.
	pub fn restart(mut self, restart: i64) -> Self {
		self.restart = Some(restart);
		self
	}

	/// Set CACHE value
	pub fn cache(mut self, cache: i64) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Set CYCLE or NO CYCLE
	pub fn cycle(mut self, cycle: bool) -> Self {
		self.cycle = Some(cycle);
		self
	}

	/// True when every option is unset
	///
	/// An empty option set renders an empty ALTER statement, which callers
	/// treat as "nothing to alter".
	pub fn is_empty(&self) -> bool {
		self.increment.is_none()
			&& self.min_value.is_none()
			&& self.max_value.is_none()
			&& self.start.is_none()
			&& self.restart.is_none()
			&& self.cache.is_none()
			&& self.cycle.is_none()
	}
}
