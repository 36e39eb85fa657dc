//! One-shot migration from a rank-based permissions store into a typed
//! permission-node model.
//!
//! The core is a pure translation mapping ([`translate::parse_node`],
//! [`translate::standardize_name`]) plus a sequential driver
//! ([`migrate::Migrator`]) with a fixed ordering/skip contract. Collaborators
//! are injected through the [`source::SourceReader`] and
//! [`target::TargetWriter`] traits; the [`store`] module ships file-backed
//! and in-memory implementations.

pub mod cli;
pub mod config;
pub mod error;
pub mod migrate;
pub mod model;
pub mod source;
pub mod store;
pub mod target;
pub mod translate;

pub use error::MigrationError;
pub use migrate::{MigrationSummary, Migrator};
pub use model::node::{Node, NodeBuilder};
pub use source::SourceReader;
pub use target::{GroupHandle, TargetWriter, UserHandle};
