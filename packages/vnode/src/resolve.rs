//! # Descendant Resolver
//!
//! Finds the first meaningful node below (or at) a child value, walking
//! through fragments and templates for at most `max_depth` levels.
//!
//! Only the first entry of a list is ever looked at. A comment in that slot
//! resolves to `None` even when later siblings would qualify.

use crate::classify::{is_comment, is_transparent};
use crate::vdom::{MaybeVNode, VNodeChild};
use tracing::trace;

/// Wrapper levels descended when no depth is given
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// [`get_first_valid_node_with_depth`] with [`DEFAULT_MAX_DEPTH`]
pub fn get_first_valid_node(nodes: &VNodeChild) -> Option<&VNodeChild> {
    get_first_valid_node_with_depth(nodes, DEFAULT_MAX_DEPTH)
}

/// Resolve the first valid node of `nodes`
///
/// - a list is resolved through its first entry only
/// - comments and `Null` resolve to `None`
/// - fragments and templates descend into their children, consuming one
///   level of depth; with no depth left they resolve to `None`
/// - anything else, including non-node values such as raw text, is
///   returned unchanged
pub fn get_first_valid_node_with_depth(
    nodes: &VNodeChild,
    max_depth: usize,
) -> Option<&VNodeChild> {
    match nodes {
        VNodeChild::List(list) => list.first().and_then(|first| valid_child(first, max_depth)),
        node => valid_child(node, max_depth),
    }
}

fn valid_child(node: &VNodeChild, depth: usize) -> Option<&VNodeChild> {
    if node.is_null() || is_comment(node) {
        return None;
    }

    if is_transparent(node) {
        if depth == 0 {
            trace!("Depth exhausted at transparent wrapper");
            return None;
        }
        return node
            .as_vnode()
            .and_then(|wrapper| wrapper.children())
            .and_then(|children| get_first_valid_node_with_depth(children, depth - 1));
    }

    Some(node)
}
