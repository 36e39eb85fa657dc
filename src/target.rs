// TargetWriter - the write surface of the permissions system being migrated to

use crate::model::node::Node;
use thiserror::Error;
use uuid::Uuid;

/// A target group entity under construction.
///
/// Created with the raw (non-standardized) source rank name; only
/// cross-references between groups use the standardized form. Nodes are
/// attach-once and never mutated after attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHandle {
    pub name: String,
    pub nodes: Vec<Node>,
}

impl GroupHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn attach(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

/// A target user entity under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHandle {
    pub uuid: Uuid,
    pub nodes: Vec<Node>,
}

impl UserHandle {
    pub fn new(uuid: Uuid) -> Self {
        Self {
            uuid,
            nodes: Vec::new(),
        }
    }

    pub fn attach(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

/// Write surface of the target permissions system.
///
/// All saves are blocking and may fail; the driver stops at the first
/// failure. `cleanup_user` is the target-side hook that runs between the
/// last attach and the save - the shipped implementations use it to drop
/// exact-duplicate nodes.
pub trait TargetWriter {
    fn create_group(&mut self, name: &str) -> Result<GroupHandle, TargetError>;

    fn load_or_create_user(&mut self, uuid: Uuid) -> Result<UserHandle, TargetError>;

    fn save_group(&mut self, group: GroupHandle) -> Result<(), TargetError>;

    fn cleanup_user(&mut self, user: &mut UserHandle);

    fn save_user(&mut self, user: UserHandle) -> Result<(), TargetError>;
}

impl<T: TargetWriter + ?Sized> TargetWriter for &mut T {
    fn create_group(&mut self, name: &str) -> Result<GroupHandle, TargetError> {
        (**self).create_group(name)
    }

    fn load_or_create_user(&mut self, uuid: Uuid) -> Result<UserHandle, TargetError> {
        (**self).load_or_create_user(uuid)
    }

    fn save_group(&mut self, group: GroupHandle) -> Result<(), TargetError> {
        (**self).save_group(group)
    }

    fn cleanup_user(&mut self, user: &mut UserHandle) {
        (**self).cleanup_user(user)
    }

    fn save_user(&mut self, user: UserHandle) -> Result<(), TargetError> {
        (**self).save_user(user)
    }
}

/// Errors raised while writing to the target system.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("failed to create {entity}: {detail}")]
    Create { entity: String, detail: String },

    #[error("failed to save {entity}: {detail}")]
    Save { entity: String, detail: String },
}

/// Drop exact-duplicate nodes, keeping first occurrences in order.
///
/// Shared by the shipped writers' `cleanup_user` hooks. Quadratic, which is
/// fine at per-entity node counts.
pub(crate) fn dedup_nodes(nodes: &mut Vec<Node>) {
    let mut seen: Vec<Node> = Vec::with_capacity(nodes.len());
    nodes.retain(|node| {
        if seen.contains(node) {
            false
        } else {
            seen.push(node.clone());
            true
        }
    });
}
