// JsonTarget - per-entity JSON documents under an output directory
//
// Layout: <out>/groups/<standardized name>.json and <out>/users/<uuid>.json.
// File names go through standardize_name so raw rank names with spaces or
// colons stay filesystem-safe; the raw name is kept inside the document.

use crate::model::node::Node;
use crate::target::{dedup_nodes, GroupHandle, TargetError, TargetWriter, UserHandle};
use crate::translate::standardize_name;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct GroupDocument<'a> {
    name: &'a str,
    nodes: &'a [Node],
}

#[derive(Debug, Serialize)]
struct UserDocument<'a> {
    uuid: Uuid,
    nodes: &'a [Node],
}

/// Target writer that persists each entity as one JSON file.
pub struct JsonTarget {
    groups_dir: PathBuf,
    users_dir: PathBuf,
}

impl JsonTarget {
    /// Create a writer rooted at `out_dir`, creating the directory layout.
    pub fn new(out_dir: &Path) -> Result<Self, TargetError> {
        let groups_dir = out_dir.join("groups");
        let users_dir = out_dir.join("users");

        for dir in [&groups_dir, &users_dir] {
            fs::create_dir_all(dir).map_err(|e| TargetError::Create {
                entity: format!("directory '{}'", dir.display()),
                detail: e.to_string(),
            })?;
        }

        Ok(Self {
            groups_dir,
            users_dir,
        })
    }

    fn write_document<T: Serialize>(path: &Path, doc: &T, entity: &str) -> Result<(), TargetError> {
        let json = serde_json::to_string_pretty(doc).map_err(|e| TargetError::Save {
            entity: entity.to_string(),
            detail: e.to_string(),
        })?;

        fs::write(path, json).map_err(|e| TargetError::Save {
            entity: entity.to_string(),
            detail: e.to_string(),
        })
    }
}

impl TargetWriter for JsonTarget {
    fn create_group(&mut self, name: &str) -> Result<GroupHandle, TargetError> {
        Ok(GroupHandle::new(name))
    }

    fn load_or_create_user(&mut self, uuid: Uuid) -> Result<UserHandle, TargetError> {
        Ok(UserHandle::new(uuid))
    }

    fn save_group(&mut self, group: GroupHandle) -> Result<(), TargetError> {
        let file_name = format!("{}.json", standardize_name(&group.name));
        let path = self.groups_dir.join(file_name);
        let doc = GroupDocument {
            name: &group.name,
            nodes: &group.nodes,
        };
        Self::write_document(&path, &doc, &format!("group '{}'", group.name))
    }

    fn cleanup_user(&mut self, user: &mut UserHandle) {
        dedup_nodes(&mut user.nodes);
    }

    fn save_user(&mut self, user: UserHandle) -> Result<(), TargetError> {
        let path = self.users_dir.join(format!("{}.json", user.uuid));
        let doc = UserDocument {
            uuid: user.uuid,
            nodes: &user.nodes,
        };
        Self::write_document(&path, &doc, &format!("user '{}'", user.uuid))
    }
}
