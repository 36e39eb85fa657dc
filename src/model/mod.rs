// Source-side record types - what the rank store hands us, read-only

pub mod node;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One permission grant or negation as stored by the source.
///
/// Entries with an empty `name` are legal in the source store; callers skip
/// them before translation rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPermissionEntry {
    pub name: String,

    #[serde(default = "default_true")]
    pub value: bool,
}

fn default_true() -> bool {
    true
}

/// A rank (permission group) as stored by the source.
///
/// Parents are stored by name; `SourceReader::parents` resolves them to full
/// records. Weight, prefix and suffix are first-class fields here, not
/// permission entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRecord {
    pub name: String,

    #[serde(default)]
    pub weight: i32,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,

    #[serde(default)]
    pub permissions: Vec<RawPermissionEntry>,

    /// Parent rank names (inheritance edges).
    #[serde(default)]
    pub parents: Vec<String>,
}

/// One per-player rank membership with its contextual tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankAssignment {
    pub name: String,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// A player as stored by the source.
///
/// `uuid == None` means the source never resolved this player to a stable
/// identifier; such records are skipped wholesale during migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub uuid: Option<Uuid>,

    #[serde(default)]
    pub ranks: Vec<RankAssignment>,

    #[serde(default)]
    pub usertags: Vec<String>,

    #[serde(default)]
    pub permissions: Vec<RawPermissionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_entry_value_defaults_true() {
        let entry: RawPermissionEntry = serde_json::from_str(r#"{"name":"some.perm"}"#).unwrap();
        assert!(entry.value);
    }

    #[test]
    fn rank_record_minimal_json() {
        let rank: RankRecord = serde_json::from_str(r#"{"name":"default"}"#).unwrap();
        assert_eq!(rank.name, "default");
        assert_eq!(rank.weight, 0);
        assert!(rank.prefix.is_empty());
        assert!(rank.permissions.is_empty());
        assert!(rank.parents.is_empty());
    }

    #[test]
    fn player_record_without_uuid() {
        let player: PlayerRecord = serde_json::from_str(r#"{"ranks":[]}"#).unwrap();
        assert!(player.uuid.is_none());
        assert!(player.usertags.is_empty());
    }

    #[test]
    fn rank_assignment_with_tags() {
        let json = r#"{"name":"vip","tags":{"world":"nether","all":"true"}}"#;
        let assignment: RankAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.name, "vip");
        assert_eq!(assignment.tags.get("world").map(String::as_str), Some("nether"));
    }
}
