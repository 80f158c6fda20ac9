//! Tests for effective props of component vnodes

use plume_common::CapturingSink;
use plume_vnode::*;
use serde_json::json;
use std::sync::Arc;

fn descriptor() -> Arc<TypeDescriptor> {
    Arc::new(
        TypeDescriptor::new("ElSwitch")
            .with_prop("foo", PropSpec::with_default("x"))
            .with_prop("fooBar", PropSpec::with_default("z"))
            .with_prop("disabled", PropSpec::with_default(false))
            .with_prop("loading", PropSpec::new().required()),
    )
}

#[test]
fn test_default_without_override() {
    let node = VNode::component("el-switch", descriptor());
    let props = get_normalized_props(&node);

    assert_eq!(props.get("foo"), Some(&json!("x")));
    assert_eq!(props.get("fooBar"), Some(&json!("z")));
    assert!(!props.contains_key("loading"));
}

#[test]
fn test_kebab_override_targets_camel_slot() {
    let node = VNode::component("el-switch", descriptor()).with_prop("foo-bar", "y");
    let props = get_normalized_props(&node);

    assert_eq!(props.get("fooBar"), Some(&json!("y")));
    assert_eq!(props.get("foo"), Some(&json!("x")));
    assert!(props.get("foo-bar").is_none());
}

#[test]
fn test_effective_props_are_fresh_each_call() {
    let node = VNode::component("el-switch", descriptor()).with_prop("disabled", true);

    let mut first = get_normalized_props(&node);
    first.insert("disabled".to_string(), json!("mutated"));

    let second = get_normalized_props(&node);
    assert_eq!(second.get("disabled"), Some(&json!(true)));
    assert_eq!(node.props.as_ref().and_then(|p| p.get("disabled")), Some(&json!(true)));
}

#[test]
fn test_non_node_returns_empty_with_one_diagnostic() {
    let sink = CapturingSink::new();

    let props = normalize_props_with(&None::<VNode>, &sink);
    assert!(props.is_empty());
    assert_eq!(sink.len(), 1);

    let props = normalize_props_with(&json!({ "props": { "a": 1 } }), &sink);
    assert!(props.is_empty());
    assert_eq!(sink.len(), 2);
}

#[test]
fn test_descriptor_from_json() {
    let node: VNode = serde_json::from_str(
        r#"{
            "type": {
                "kind": "element",
                "tag": "el-switch",
                "descriptor": {
                    "name": "ElSwitch",
                    "props": {
                        "activeText": { "default": "" },
                        "inlinePrompt": { "default": false },
                        "value": { "default": null },
                        "name": {}
                    }
                }
            },
            "props": { "inline-prompt": true }
        }"#,
    )
    .expect("fixture should parse");

    let props = get_normalized_props(&node);
    assert_eq!(props.get("activeText"), Some(&json!("")));
    assert_eq!(props.get("inlinePrompt"), Some(&json!(true)));
    assert_eq!(props.get("value"), Some(&json!(null)));
    assert!(!props.contains_key("name"));
    assert_eq!(props.len(), 3);
}

#[test]
fn test_default_sink_logs_through_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    assert!(get_normalized_props(&()).is_empty());
    assert!(get_normalized_props("el-switch").is_empty());
}
