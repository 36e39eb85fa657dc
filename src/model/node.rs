// Target-side node model - typed, immutable, attach-once descriptors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed permission node in the target model.
///
/// Nodes are immutable once built; an entity accumulates nodes via
/// attach-once semantics and never mutates one afterwards. Serialized with
/// an explicit tag so target documents stay self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Plain permission grant or negation.
    Permission { key: String, value: bool },

    /// Membership edge to another group. Context pairs scope where the
    /// membership applies; an empty map means everywhere.
    Inheritance {
        group: String,
        value: bool,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        contexts: BTreeMap<String, String>,
    },

    /// Chat prefix with its resolution priority.
    Prefix {
        text: String,
        priority: i32,
        value: bool,
    },

    /// Chat suffix with its resolution priority.
    Suffix {
        text: String,
        priority: i32,
        value: bool,
    },

    /// Arbitrary key/value metadata.
    Meta { key: String, value: String },

    /// Group weight used for rank ordering in the target.
    Weight { weight: i32 },
}

impl Node {
    pub fn permission(key: impl Into<String>, value: bool) -> Self {
        Node::Permission {
            key: key.into(),
            value,
        }
    }

    pub fn inheritance(group: impl Into<String>) -> Self {
        Node::Inheritance {
            group: group.into(),
            value: true,
            contexts: BTreeMap::new(),
        }
    }

    pub fn prefix(text: impl Into<String>, priority: i32) -> Self {
        Node::Prefix {
            text: text.into(),
            priority,
            value: true,
        }
    }

    pub fn suffix(text: impl Into<String>, priority: i32) -> Self {
        Node::Suffix {
            text: text.into(),
            priority,
            value: true,
        }
    }

    pub fn meta(key: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Meta {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn weight(weight: i32) -> Self {
        Node::Weight { weight }
    }
}

/// A deferred, still-unbuilt node descriptor.
///
/// `parse_node` returns one of these rather than a finished `Node` so the
/// caller can keep adjusting it (flip the value, add context pairs) before
/// attaching. `build` consumes the builder; a builder is used exactly once.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    kind: BuilderKind,
    value: bool,
    contexts: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
enum BuilderKind {
    Permission { key: String },
    Inheritance { group: String },
    Prefix { text: String, priority: i32 },
    Suffix { text: String, priority: i32 },
}

impl NodeBuilder {
    pub fn permission(key: impl Into<String>) -> Self {
        Self::new(BuilderKind::Permission { key: key.into() })
    }

    pub fn inheritance(group: impl Into<String>) -> Self {
        Self::new(BuilderKind::Inheritance {
            group: group.into(),
        })
    }

    pub fn prefix(text: impl Into<String>, priority: i32) -> Self {
        Self::new(BuilderKind::Prefix {
            text: text.into(),
            priority,
        })
    }

    pub fn suffix(text: impl Into<String>, priority: i32) -> Self {
        Self::new(BuilderKind::Suffix {
            text: text.into(),
            priority,
        })
    }

    fn new(kind: BuilderKind) -> Self {
        Self {
            kind,
            value: true,
            contexts: BTreeMap::new(),
        }
    }

    /// Set the node's truth value (grant vs negation).
    pub fn value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    /// Add a context pair. Only meaningful on inheritance nodes; other
    /// variants carry no context and silently drop the pair at build time.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.contexts.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Node {
        match self.kind {
            BuilderKind::Permission { key } => Node::Permission {
                key,
                value: self.value,
            },
            BuilderKind::Inheritance { group } => Node::Inheritance {
                group,
                value: self.value,
                contexts: self.contexts,
            },
            BuilderKind::Prefix { text, priority } => Node::Prefix {
                text,
                priority,
                value: self.value,
            },
            BuilderKind::Suffix { text, priority } => Node::Suffix {
                text,
                priority,
                value: self.value,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_builder_default_value_true() {
        let node = NodeBuilder::permission("some.perm").build();
        assert_eq!(node, Node::permission("some.perm", true));
    }

    #[test]
    fn builder_value_flip() {
        let node = NodeBuilder::permission("some.perm").value(false).build();
        assert_eq!(node, Node::permission("some.perm", false));
    }

    #[test]
    fn inheritance_builder_with_contexts() {
        let node = NodeBuilder::inheritance("vip")
            .with_context("world", "nether")
            .with_context("server", "lobby")
            .build();

        match node {
            Node::Inheritance {
                group,
                value,
                contexts,
            } => {
                assert_eq!(group, "vip");
                assert!(value);
                assert_eq!(contexts.len(), 2);
                assert_eq!(contexts.get("world").map(String::as_str), Some("nether"));
            }
            other => panic!("expected inheritance node, got {other:?}"),
        }
    }

    #[test]
    fn context_dropped_on_non_inheritance() {
        let node = NodeBuilder::permission("some.perm")
            .with_context("world", "nether")
            .build();
        assert_eq!(node, Node::permission("some.perm", true));
    }

    #[test]
    fn node_serialization_tagged() {
        let node = Node::inheritance("default");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "inheritance");
        assert_eq!(json["group"], "default");
        assert!(json.get("contexts").is_none());
    }

    #[test]
    fn node_roundtrip_with_contexts() {
        let node = NodeBuilder::inheritance("staff")
            .with_context("world", "end")
            .build();
        let json = serde_json::to_string(&node).unwrap();
        let parsed: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, node);
    }
}
