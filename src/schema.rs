//! # Sequence Schema Management
//!
//! Declarative sequence DDL: statement builders, the typed option set, and
//! the executing editor.
//!
//! ## Overview
//!
//! - **[`SequenceOptions`]**: typed option set with three-valued
//!   min/max/cycle semantics
//! - **[`create_sequence_sql`] / [`change_sequence_sql`] /
//!   [`drop_sequence_sql`]**: pure DDL text builders
//! - **[`SequenceEditor`]**: issues the rendered statements through an
//!   injected connection and lists existing sequences
//! - **[`SequenceDefinition`]**: the normalized introspection record
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_sequencer::schema::{SequenceOptions, create_sequence_sql};
//!
//! let options = SequenceOptions::default()
//!     .increment(1)
//!     .min_value(Some(1))
//!     .max_value(Some(20000))
//!     .start(1)
//!     .cache(5)
//!     .cycle(true);
//!
//! assert_eq!(
//!     create_sequence_sql("seq_user", &options),
//!     "CREATE SEQUENCE seq_user INCREMENT BY 1 MINVALUE 1 MAXVALUE 20000 START WITH 1 CACHE 5 CYCLE"
//! );
//! ```

pub mod builder;
pub mod definition;
pub mod editor;
pub mod options;

pub use builder::{
	change_sequence_sql, create_sequence_sql, drop_sequence_sql, sequence_options_sql,
};
pub use definition::SequenceDefinition;
pub use editor::SequenceEditor;
pub use options::SequenceOptions;
