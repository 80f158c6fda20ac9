use crate::patch_flags::PatchFlags;
use plume_common::PlumeResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Property bag: raw instance props, and the effective props built from them
pub type Props = serde_json::Map<String, Value>;

/// Reserved tag of the placeholder-template wrapper
pub const TEMPLATE: &str = "template";

/// Declared specification of a single component prop
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropSpec {
    /// `Some(Value::Null)` is a declared `null` default, distinct from no default
    #[serde(
        default,
        deserialize_with = "deserialize_declared",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    /// Host validation hint; not consulted when merging props
    #[serde(default)]
    pub required: bool,
}

fn deserialize_declared<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PropSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(value: impl Into<Value>) -> Self {
        Self {
            default: Some(value.into()),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Component type descriptor: the declared props of a component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Component name, kept for host diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, PropSpec>>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            props: None,
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, spec: PropSpec) -> Self {
        self.props
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), spec);
        self
    }
}

/// What a vnode is, as tagged by the host framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VNodeType {
    /// HTML element or component instance
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        descriptor: Option<Arc<TypeDescriptor>>,
    },
    Fragment,
    Text,
    Comment,
}

/// Classification of a vnode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Fragment,
    Text,
    Comment,
    /// Element whose tag is [`TEMPLATE`]
    Template,
}

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VNode {
    #[serde(rename = "type")]
    pub node_type: VNodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Box<VNodeChild>>,
    /// Diff key owned by the host; carried, never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub patch_flag: PatchFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_props: Option<Vec<String>>,
    /// Dynamic descendants collected while this node's block was open.
    /// Present only on block roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_children: Option<Vec<VNode>>,
}

/// Anything that can appear where a child is expected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VNodeChild {
    Node(VNode),
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<VNodeChild>),
    Null,
}

impl VNode {
    pub fn new(node_type: VNodeType) -> Self {
        VNode {
            node_type,
            props: None,
            children: None,
            key: None,
            patch_flag: PatchFlags::NONE,
            dynamic_props: None,
            dynamic_children: None,
        }
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(VNodeType::Element {
            tag: tag.into(),
            descriptor: None,
        })
    }

    pub fn component(tag: impl Into<String>, descriptor: Arc<TypeDescriptor>) -> Self {
        Self::new(VNodeType::Element {
            tag: tag.into(),
            descriptor: Some(descriptor),
        })
    }

    pub fn template() -> Self {
        Self::element(TEMPLATE)
    }

    pub fn fragment(children: Vec<VNodeChild>) -> Self {
        Self::new(VNodeType::Fragment).with_children(children)
    }

    pub fn text(content: impl Into<String>) -> Self {
        let mut node = Self::new(VNodeType::Text);
        node.children = Some(Box::new(VNodeChild::Text(content.into())));
        node
    }

    pub fn comment(content: impl Into<String>) -> Self {
        let mut node = Self::new(VNodeType::Comment);
        node.children = Some(Box::new(VNodeChild::Text(content.into())));
        node
    }

    pub fn kind(&self) -> NodeKind {
        match &self.node_type {
            VNodeType::Element { tag, .. } if tag == TEMPLATE => NodeKind::Template,
            VNodeType::Element { .. } => NodeKind::Element,
            VNodeType::Fragment => NodeKind::Fragment,
            VNodeType::Text => NodeKind::Text,
            VNodeType::Comment => NodeKind::Comment,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.node_type {
            VNodeType::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> Option<&TypeDescriptor> {
        match &self.node_type {
            VNodeType::Element { descriptor, .. } => descriptor.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&VNodeChild> {
        self.children.as_deref()
    }

    /// Whether this node is the root of a render block
    pub fn is_block(&self) -> bool {
        self.dynamic_children.is_some()
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props
            .get_or_insert_with(Props::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props.get_or_insert_with(Props::new).extend(props);
        self
    }

    /// Append a child, promoting a single existing child to a list
    pub fn with_child(mut self, child: impl Into<VNodeChild>) -> Self {
        let child = child.into();
        self.children = Some(Box::new(match self.children.take().map(|c| *c) {
            None | Some(VNodeChild::Null) => VNodeChild::List(vec![child]),
            Some(VNodeChild::List(mut list)) => {
                list.push(child);
                VNodeChild::List(list)
            }
            Some(existing) => VNodeChild::List(vec![existing, child]),
        }));
        self
    }

    pub fn with_children(self, children: Vec<VNodeChild>) -> Self {
        children
            .into_iter()
            .fold(self, |node, child| node.with_child(child))
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_patch_flag(mut self, patch_flag: PatchFlags) -> Self {
        self.patch_flag = patch_flag;
        self
    }
}

impl VNodeChild {
    pub fn is_null(&self) -> bool {
        matches!(self, VNodeChild::Null)
    }

    /// Parse a child tree from JSON
    pub fn from_json(source: &str) -> PlumeResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

impl Default for VNodeChild {
    fn default() -> Self {
        VNodeChild::Null
    }
}

impl From<VNode> for VNodeChild {
    fn from(node: VNode) -> Self {
        VNodeChild::Node(node)
    }
}

impl From<Vec<VNodeChild>> for VNodeChild {
    fn from(list: Vec<VNodeChild>) -> Self {
        VNodeChild::List(list)
    }
}

impl From<Vec<VNode>> for VNodeChild {
    fn from(nodes: Vec<VNode>) -> Self {
        VNodeChild::List(nodes.into_iter().map(VNodeChild::Node).collect())
    }
}

impl From<&str> for VNodeChild {
    fn from(text: &str) -> Self {
        VNodeChild::Text(text.to_string())
    }
}

impl From<String> for VNodeChild {
    fn from(text: String) -> Self {
        VNodeChild::Text(text)
    }
}

impl From<f64> for VNodeChild {
    fn from(n: f64) -> Self {
        VNodeChild::Number(n)
    }
}

impl From<bool> for VNodeChild {
    fn from(b: bool) -> Self {
        VNodeChild::Bool(b)
    }
}

impl<T: Into<VNodeChild>> From<Option<T>> for VNodeChild {
    fn from(value: Option<T>) -> Self {
        value.map_or(VNodeChild::Null, Into::into)
    }
}

/// A value that may or may not be a rendered node
///
/// Every classifier accepts any `MaybeVNode`, so they stay total over
/// children, options, raw JSON and plain scalars alike.
pub trait MaybeVNode {
    fn as_vnode(&self) -> Option<&VNode>;
}

impl MaybeVNode for VNode {
    fn as_vnode(&self) -> Option<&VNode> {
        Some(self)
    }
}

impl MaybeVNode for VNodeChild {
    fn as_vnode(&self) -> Option<&VNode> {
        match self {
            VNodeChild::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl<T: MaybeVNode> MaybeVNode for Option<T> {
    fn as_vnode(&self) -> Option<&VNode> {
        self.as_ref().and_then(MaybeVNode::as_vnode)
    }
}

impl<T: MaybeVNode + ?Sized> MaybeVNode for &T {
    fn as_vnode(&self) -> Option<&VNode> {
        (**self).as_vnode()
    }
}

impl<T: MaybeVNode + ?Sized> MaybeVNode for Box<T> {
    fn as_vnode(&self) -> Option<&VNode> {
        (**self).as_vnode()
    }
}

macro_rules! never_a_vnode {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MaybeVNode for $ty {
                fn as_vnode(&self) -> Option<&VNode> {
                    None
                }
            }
        )*
    };
}

never_a_vnode!((), bool, i64, f64, str, String, Value);
