// Permission-string translation - the mapping from raw source entries to
// typed target nodes
//
// Source stores keep everything as flat permission strings, with a few
// conventions smuggling richer data through them: "group.<name>" marks an
// inheritance edge, "prefix.<priority>.<text>" and "suffix.<priority>.<text>"
// carry chat decorations. The translator recognizes those shapes and emits
// the matching typed node; everything else stays a plain permission.

use crate::model::node::NodeBuilder;

/// Translate one raw permission string + value into a node builder.
///
/// Pure and deterministic: the same input always yields the same node kind
/// and fields, with `value` flowing into the builder unchanged. Malformed
/// convention shapes (missing segments, non-integer priority) fall back to
/// the plain-permission interpretation rather than erroring.
pub fn parse_node(name: &str, value: bool) -> NodeBuilder {
    if let Some(group) = name.strip_prefix("group.") {
        if !group.is_empty() {
            return NodeBuilder::inheritance(standardize_name(group)).value(value);
        }
    }

    if let Some(rest) = name.strip_prefix("prefix.") {
        if let Some((priority, text)) = split_decoration(rest) {
            return NodeBuilder::prefix(text, priority).value(value);
        }
    }

    if let Some(rest) = name.strip_prefix("suffix.") {
        if let Some((priority, text)) = split_decoration(rest) {
            return NodeBuilder::suffix(text, priority).value(value);
        }
    }

    NodeBuilder::permission(name).value(value)
}

/// Split "<priority>.<text>" into its parts, or None if the shape is off.
fn split_decoration(rest: &str) -> Option<(i32, &str)> {
    let (priority, text) = rest.split_once('.')?;
    let priority = priority.parse::<i32>().ok()?;
    Some((priority, text))
}

/// Normalize a rank name into a valid target group identifier.
///
/// The target rejects spaces, colons and dots in group names and treats
/// names case-insensitively; source stores allow all of those. Applied to
/// every cross-reference (inheritance targets) but never to the group's own
/// creation name. Idempotent and total.
pub fn standardize_name(name: &str) -> String {
    name.trim()
        .replace([':', ' ', '.'], "-")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::Node;

    #[test]
    fn plain_permission() {
        let node = parse_node("essentials.fly", true).build();
        assert_eq!(node, Node::permission("essentials.fly", true));
    }

    #[test]
    fn negated_permission() {
        let node = parse_node("essentials.fly", false).build();
        assert_eq!(node, Node::permission("essentials.fly", false));
    }

    #[test]
    fn wildcard_stays_plain() {
        let node = parse_node("essentials.*", true).build();
        assert_eq!(node, Node::permission("essentials.*", true));
    }

    #[test]
    fn group_convention_becomes_inheritance() {
        let node = parse_node("group.VIP Plus", true).build();
        match node {
            Node::Inheritance { group, value, .. } => {
                assert_eq!(group, "vip-plus");
                assert!(value);
            }
            other => panic!("expected inheritance, got {other:?}"),
        }
    }

    #[test]
    fn bare_group_marker_stays_plain() {
        let node = parse_node("group.", true).build();
        assert_eq!(node, Node::permission("group.", true));
    }

    #[test]
    fn prefix_convention() {
        let node = parse_node("prefix.100.&c[Admin]", true).build();
        assert_eq!(node, Node::prefix("&c[Admin]", 100));
    }

    #[test]
    fn suffix_convention() {
        let node = parse_node("suffix.10. &7[AFK]", true).build();
        assert_eq!(node, Node::suffix(" &7[AFK]", 10));
    }

    #[test]
    fn prefix_with_dots_in_text() {
        // Only the first dot after the priority splits; the rest is text.
        let node = parse_node("prefix.5.a.b.c", true).build();
        assert_eq!(node, Node::prefix("a.b.c", 5));
    }

    #[test]
    fn malformed_prefix_priority_falls_back() {
        let node = parse_node("prefix.high.&c[Admin]", true).build();
        assert_eq!(node, Node::permission("prefix.high.&c[Admin]", true));
    }

    #[test]
    fn prefix_missing_text_falls_back() {
        let node = parse_node("prefix.100", true).build();
        assert_eq!(node, Node::permission("prefix.100", true));
    }

    #[test]
    fn value_is_the_only_difference() {
        for name in [
            "some.perm",
            "group.admin",
            "prefix.10.[X]",
            "suffix.10.[Y]",
            "prefix.broken",
        ] {
            let granted = parse_node(name, true).build();
            let negated = parse_node(name, false).build();
            assert_eq!(flip_value(granted), negated, "name: {name}");
        }
    }

    fn flip_value(node: Node) -> Node {
        match node {
            Node::Permission { key, value } => Node::Permission { key, value: !value },
            Node::Inheritance {
                group,
                value,
                contexts,
            } => Node::Inheritance {
                group,
                value: !value,
                contexts,
            },
            Node::Prefix {
                text,
                priority,
                value,
            } => Node::Prefix {
                text,
                priority,
                value: !value,
            },
            Node::Suffix {
                text,
                priority,
                value,
            } => Node::Suffix {
                text,
                priority,
                value: !value,
            },
            other => other,
        }
    }

    #[test]
    fn standardize_lowercases_and_replaces() {
        assert_eq!(standardize_name("VIP Plus"), "vip-plus");
        assert_eq!(standardize_name("  Admin  "), "admin");
        assert_eq!(standardize_name("a:b.c d"), "a-b-c-d");
    }

    #[test]
    fn standardize_is_idempotent() {
        for name in ["VIP Plus", "  Admin  ", "a:b.c d", "", "already-clean"] {
            let once = standardize_name(name);
            assert_eq!(standardize_name(&once), once, "name: {name:?}");
        }
    }

    #[test]
    fn standardize_empty_is_safe() {
        assert_eq!(standardize_name(""), "");
        assert_eq!(standardize_name("   "), "");
    }
}
