//! # Prop Normalizer
//!
//! Builds the effective props of a vnode: declared defaults first, then the
//! instance's own props keyed by their camelCase name. Instance props always
//! win, so `active-color="red"` replaces the declared `activeColor` default.

use crate::vdom::{MaybeVNode, Props};
use plume_common::{camelize, DiagnosticSink, ScopedError, TracingSink};
use tracing::trace;

const SCOPE: &str = "VNode";

/// Effective props of `node`, reporting misuse through `tracing`
pub fn get_normalized_props<N: MaybeVNode + ?Sized>(node: &N) -> Props {
    normalize_props_with(node, &TracingSink)
}

/// Effective props of `node`
///
/// A non-vnode yields an empty map and exactly one diagnostic on `sink`.
pub fn normalize_props_with<N: MaybeVNode + ?Sized>(node: &N, sink: &dyn DiagnosticSink) -> Props {
    let Some(node) = node.as_vnode() else {
        sink.warn(&ScopedError::new(SCOPE, "[getNormalizedProps] must be a VNode"));
        return Props::new();
    };

    let mut props = Props::new();

    let declared = node.descriptor().and_then(|descriptor| descriptor.props.as_ref());
    for (key, spec) in declared.into_iter().flatten() {
        if let Some(default) = &spec.default {
            props.insert(key.clone(), default.clone());
        }
    }

    for (key, value) in node.props.iter().flatten() {
        props.insert(camelize(key), value.clone());
    }

    trace!(count = props.len(), "Normalized props");
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{PropSpec, TypeDescriptor, VNode, VNodeChild};
    use plume_common::CapturingSink;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn switch_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(
            TypeDescriptor::new("ElSwitch")
                .with_prop("modelValue", PropSpec::with_default(false))
                .with_prop("activeColor", PropSpec::with_default(""))
                .with_prop("name", PropSpec::new())
                .with_prop("width", PropSpec::with_default(40)),
        )
    }

    #[test]
    fn test_defaults_only() {
        let node = VNode::component("el-switch", switch_descriptor());
        let props = normalize_props_with(&node, &CapturingSink::new());

        assert_eq!(props.get("modelValue"), Some(&json!(false)));
        assert_eq!(props.get("activeColor"), Some(&json!("")));
        assert_eq!(props.get("width"), Some(&json!(40)));
        assert!(!props.contains_key("name"), "no default, no override");
    }

    #[test]
    fn test_kebab_override_replaces_camel_default() {
        let node = VNode::component("el-switch", switch_descriptor())
            .with_prop("active-color", "#13ce66")
            .with_prop("name", "toggle");
        let props = get_normalized_props(&node);

        assert_eq!(props.get("activeColor"), Some(&json!("#13ce66")));
        assert_eq!(props.get("name"), Some(&json!("toggle")));
        assert!(!props.contains_key("active-color"));
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn test_plain_element_keeps_raw_props() {
        let node = VNode::element("input")
            .with_prop("aria-checked", true)
            .with_prop("type", "checkbox");
        let props = get_normalized_props(&node);

        assert_eq!(props.get("ariaChecked"), Some(&json!(true)));
        assert_eq!(props.get("type"), Some(&json!("checkbox")));
    }

    #[test]
    fn test_declared_null_default_is_seeded() {
        let descriptor = Arc::new(TypeDescriptor::new("X").with_prop("value", PropSpec {
            default: Some(Value::Null),
            required: false,
        }));
        let props = get_normalized_props(&VNode::component("x", descriptor));
        assert_eq!(props.get("value"), Some(&Value::Null));
    }

    #[test]
    fn test_descriptor_without_props_table() {
        let node = VNode::component("x", Arc::new(TypeDescriptor::new("X"))).with_prop("id", "a");
        let props = get_normalized_props(&node);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_non_vnode_warns_once() {
        let sink = CapturingSink::new();
        let props = normalize_props_with(&VNodeChild::Null, &sink);

        assert!(props.is_empty());
        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].scope, "VNode");
        assert_eq!(
            diagnostics[0].to_string(),
            "[VNode] [getNormalizedProps] must be a VNode"
        );
    }

    #[test]
    fn test_valid_vnode_does_not_warn() {
        let sink = CapturingSink::new();
        normalize_props_with(&VNode::text("x"), &sink);
        assert!(sink.is_empty());
    }
}
