//! # pg-sequencer
//!
//! Declarative PostgreSQL sequence management: DDL generation for
//! CREATE/ALTER/DROP SEQUENCE plus catalog introspection of existing
//! sequences, behind an injectable connection trait.
//!
//! Sequences declared explicitly (as opposed to the `_id_seq` sequences
//! implicitly backing identity and serial columns) are first-class schema
//! objects, but most data-access layers leave them unmanaged. This crate
//! renders their DDL from a typed option set and reads them back out of
//! the system catalogs in the same shape, so current state can be
//! reproduced or altered declaratively.
//!
//! ## Architecture
//!
//! - [`schema`]: the typed option set, pure statement builders, and the
//!   executing [`SequenceEditor`]
//! - [`introspection`]: the version-gated catalog reader
//!   ([`SequenceCatalog`]), normalizing metadata rows into
//!   [`SequenceDefinition`] values
//! - [`backends`]: the [`SequenceConnection`] boundary trait, the row
//!   model, and the PostgreSQL implementation over `sqlx`
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_sequencer::schema::{SequenceOptions, create_sequence_sql, drop_sequence_sql};
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
//! assert_eq!(drop_sequence_sql("seq_user"), "DROP SEQUENCE seq_user");
//! ```
//!
//! Executing against a live server goes through [`SequenceEditor`] with a
//! driver-backed connection:
//!
//! ```rust,no_run
//! use pg_sequencer::backends::postgres::PostgresConnection;
//! use pg_sequencer::schema::{SequenceEditor, SequenceOptions};
//!
//! # async fn example() -> Result<(), pg_sequencer::backends::DatabaseError> {
//! let pool = sqlx::PgPool::connect("postgresql://localhost/mydb").await?;
//! let editor = SequenceEditor::new(PostgresConnection::new(pool));
//!
//! editor
//!     .create_sequence("seq_user", &SequenceOptions::default().increment(1).cache(5))
//!     .await?;
//!
//! for seq in editor.sequences().await? {
//!     println!("{}", seq.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - **`postgres`** (default): the `sqlx`-backed [`PostgresConnection`]

pub mod backends;
pub mod introspection;
pub mod schema;

pub use backends::{DatabaseError, QueryValue, Result, Row, SequenceConnection};
pub use introspection::SequenceCatalog;
pub use schema::{SequenceDefinition, SequenceEditor, SequenceOptions};

#[cfg(feature = "postgres")]
pub use backends::postgres::PostgresConnection;
