// SourceReader - the read-only surface of the store being migrated away from

use crate::model::{PlayerRecord, RankRecord, RawPermissionEntry};
use thiserror::Error;

/// Read-only, pull-based view of the source permissions store.
///
/// The migration driver receives an already-constructed reader and never
/// discovers one from a host registry. Implementations own whatever backing
/// format they like (the crate ships a JSON snapshot reader); the driver
/// only sees records.
pub trait SourceReader {
    /// All ranks, in whatever order the store keeps them. The driver does
    /// not sort; store order is migration order.
    fn ranks(&self) -> Result<Vec<RankRecord>, SourceError>;

    /// Permission entries carried by a rank.
    fn permissions(&self, rank: &RankRecord) -> Vec<RawPermissionEntry>;

    /// Parent ranks of a rank, resolved from stored names to full records.
    /// Names with no matching rank resolve to nothing.
    fn parents(&self, rank: &RankRecord) -> Vec<RankRecord>;

    /// All known players, including those without a resolved UUID.
    fn players(&self) -> Result<Vec<PlayerRecord>, SourceError>;

    /// Resolve a usertag name to its stored value. Usertag names and their
    /// values live in separate tables in the source; this is the join.
    /// Unknown tags resolve to an empty string.
    fn tag_value(&self, player: &PlayerRecord, tag: &str) -> String;
}

/// Errors raised while reading the source store.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error reading {path}: {error}")]
    Io { path: String, error: String },

    #[error("malformed snapshot in {path}: {error}")]
    Parse { path: String, error: String },

    #[error("corrupt source data: {detail}")]
    Corrupt { detail: String },
}
