//! # Plume VNode
//!
//! Read-only introspection helpers for a rendered virtual DOM tree.
//!
//! ## Purpose
//!
//! Component code often needs to ask questions about the vnodes it was
//! handed (slot content, wrapped children) without owning or rendering
//! them:
//!
//! - **Classification**: is this a fragment, text, comment, `<template>`,
//!   or a paintable node? See [`classify`].
//! - **Resolution**: what is the first meaningful node under a slot,
//!   looking through fragments and templates? See [`resolve`].
//! - **Effective props**: what are a component's props once declared
//!   defaults and kebab-case instance props are merged? See [`props`].
//! - **Conditional blocks**: render a block or a stable `v-if`
//!   placeholder. See [`block`].
//!
//! Nothing here mutates a tree. Misuse is reported through a
//! [`plume_common::DiagnosticSink`], never by panicking.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plume_vnode::{get_first_valid_node, get_normalized_props, VNode, VNodeChild};
//!
//! let slot: VNodeChild = VNode::fragment(vec![VNode::element("button").into()]).into();
//! let first = get_first_valid_node(&slot);
//! let props = get_normalized_props(&VNode::element("input").with_prop("aria-label", "Toggle"));
//! ```

pub mod block;
pub mod classify;
pub mod inspector;
pub mod patch_flags;
pub mod props;
pub mod resolve;
pub mod vdom;

pub use block::{render_block, render_if, BlockArgs, BlockHost, BlockStack, V_IF};
pub use classify::{
    is_comment, is_fragment, is_template, is_text, is_transparent, is_valid_element_node, is_vnode,
};
pub use inspector::{Inspector, InspectorOptions};
pub use patch_flags::PatchFlags;
pub use props::{get_normalized_props, normalize_props_with};
pub use resolve::{get_first_valid_node, get_first_valid_node_with_depth, DEFAULT_MAX_DEPTH};
pub use vdom::{
    MaybeVNode, NodeKind, PropSpec, Props, TypeDescriptor, VNode, VNodeChild, VNodeType, TEMPLATE,
};
