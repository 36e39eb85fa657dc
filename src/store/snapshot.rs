// SnapshotSource - whole-store JSON snapshot implementing SourceReader
//
// The snapshot is a single JSON document exported from the source store:
// every rank, every player, and the usertag value table. Loading it up
// front keeps the driver's iteration order identical to the document order.

use crate::model::{PlayerRecord, RankRecord, RawPermissionEntry};
use crate::source::{SourceError, SourceReader};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed source snapshot.
#[derive(Debug, Deserialize)]
pub struct SnapshotSource {
    #[serde(default)]
    ranks: Vec<RankRecord>,

    #[serde(default)]
    players: Vec<PlayerRecord>,

    /// Usertag name -> value table, stored separately from the players that
    /// carry the tag names.
    #[serde(default)]
    usertag_values: BTreeMap<String, String>,
}

impl SnapshotSource {
    /// Load a snapshot from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SourceError::Parse {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_str(content: &str) -> Result<Self, SourceError> {
        serde_json::from_str(content).map_err(|e| SourceError::Parse {
            path: "<string>".to_string(),
            error: e.to_string(),
        })
    }
}

impl SourceReader for SnapshotSource {
    fn ranks(&self) -> Result<Vec<RankRecord>, SourceError> {
        Ok(self.ranks.clone())
    }

    fn permissions(&self, rank: &RankRecord) -> Vec<RawPermissionEntry> {
        rank.permissions.clone()
    }

    fn parents(&self, rank: &RankRecord) -> Vec<RankRecord> {
        rank.parents
            .iter()
            .filter_map(|name| self.ranks.iter().find(|r| &r.name == name))
            .cloned()
            .collect()
    }

    fn players(&self) -> Result<Vec<PlayerRecord>, SourceError> {
        Ok(self.players.clone())
    }

    fn tag_value(&self, _player: &PlayerRecord, tag: &str) -> String {
        self.usertag_values.get(tag).cloned().unwrap_or_default()
    }
}
