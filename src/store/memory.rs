// MemoryTarget - in-memory writer for dry runs and tests

use crate::target::{dedup_nodes, GroupHandle, TargetError, TargetWriter, UserHandle};
use uuid::Uuid;

/// Target writer that keeps every saved entity in memory.
///
/// Backs `--dry-run`: the full migration executes, counters and progress
/// behave exactly as in a real run, but nothing touches disk.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    groups: Vec<GroupHandle>,
    users: Vec<UserHandle>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[GroupHandle] {
        &self.groups
    }

    pub fn users(&self) -> &[UserHandle] {
        &self.users
    }
}

impl TargetWriter for MemoryTarget {
    fn create_group(&mut self, name: &str) -> Result<GroupHandle, TargetError> {
        Ok(GroupHandle::new(name))
    }

    fn load_or_create_user(&mut self, uuid: Uuid) -> Result<UserHandle, TargetError> {
        Ok(UserHandle::new(uuid))
    }

    fn save_group(&mut self, group: GroupHandle) -> Result<(), TargetError> {
        self.groups.push(group);
        Ok(())
    }

    fn cleanup_user(&mut self, user: &mut UserHandle) {
        dedup_nodes(&mut user.nodes);
    }

    fn save_user(&mut self, user: UserHandle) -> Result<(), TargetError> {
        self.users.push(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::Node;

    #[test]
    fn saved_entities_are_retained_in_order() {
        let mut target = MemoryTarget::new();

        let mut a = target.create_group("a").unwrap();
        a.attach(Node::weight(1));
        target.save_group(a).unwrap();

        let b = target.create_group("b").unwrap();
        target.save_group(b).unwrap();

        assert_eq!(target.groups().len(), 2);
        assert_eq!(target.groups()[0].name, "a");
        assert_eq!(target.groups()[1].name, "b");
    }
}
