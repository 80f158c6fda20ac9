//! # Node Classifier
//!
//! Total predicates over anything that may be a vnode. Non-nodes are never
//! an error; every predicate simply answers `false` for them.
//!
//! Classification depends only on the node's type tag (plus the tag name
//! for templates), never on its props or children.

use crate::vdom::{MaybeVNode, NodeKind, VNode};

#[inline]
fn kind_of<N: MaybeVNode + ?Sized>(node: &N) -> Option<NodeKind> {
    node.as_vnode().map(VNode::kind)
}

/// Check if value is a vnode at all
#[inline]
pub fn is_vnode<N: MaybeVNode + ?Sized>(node: &N) -> bool {
    node.as_vnode().is_some()
}

/// Check if node is a fragment
#[inline]
pub fn is_fragment<N: MaybeVNode + ?Sized>(node: &N) -> bool {
    kind_of(node) == Some(NodeKind::Fragment)
}

/// Check if node is a text node
#[inline]
pub fn is_text<N: MaybeVNode + ?Sized>(node: &N) -> bool {
    kind_of(node) == Some(NodeKind::Text)
}

/// Check if node is a comment
#[inline]
pub fn is_comment<N: MaybeVNode + ?Sized>(node: &N) -> bool {
    kind_of(node) == Some(NodeKind::Comment)
}

/// Check if node is a `<template>` placeholder element
#[inline]
pub fn is_template<N: MaybeVNode + ?Sized>(node: &N) -> bool {
    kind_of(node) == Some(NodeKind::Template)
}

/// Check if node is a paintable node: any vnode except fragments and
/// comments (e.g. what is left of a `<template v-if>`).
///
/// Text nodes and templates both qualify.
#[inline]
pub fn is_valid_element_node<N: MaybeVNode + ?Sized>(node: &N) -> bool {
    is_vnode(node) && !is_fragment(node) && !is_comment(node)
}

/// Check if node wraps its children without being content itself
#[inline]
pub fn is_transparent<N: MaybeVNode + ?Sized>(node: &N) -> bool {
    is_fragment(node) || is_template(node)
}
