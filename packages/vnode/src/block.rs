//! # Render Blocks
//!
//! A block is a vnode that remembers which of its descendants are dynamic,
//! so a later diff can skip the static parts of the tree. Blocks must be
//! opened before the nodes they contain are created and closed by creating
//! the block root.
//!
//! [`BlockHost`] is the seam to whatever owns that bookkeeping;
//! [`BlockStack`] is the in-process implementation.

use crate::patch_flags::PatchFlags;
use crate::vdom::{Props, VNode, VNodeChild, VNodeType};
use tracing::debug;

/// Debug label of the placeholder left behind by a false `render_if`
pub const V_IF: &str = "v-if";

/// Everything needed to construct a vnode
#[derive(Debug, Clone, PartialEq)]
pub struct BlockArgs {
    pub node_type: VNodeType,
    pub props: Option<Props>,
    pub children: Option<VNodeChild>,
    pub patch_flag: PatchFlags,
    pub dynamic_props: Option<Vec<String>>,
}

impl BlockArgs {
    pub fn new(node_type: VNodeType) -> Self {
        Self {
            node_type,
            props: None,
            children: None,
            patch_flag: PatchFlags::NONE,
            dynamic_props: None,
        }
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(VNodeType::Element {
            tag: tag.into(),
            descriptor: None,
        })
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn with_children(mut self, children: impl Into<VNodeChild>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn with_patch_flag(mut self, patch_flag: PatchFlags) -> Self {
        self.patch_flag = patch_flag;
        self
    }

    pub fn with_dynamic_props(mut self, dynamic_props: Vec<String>) -> Self {
        self.dynamic_props = Some(dynamic_props);
        self
    }

    pub fn into_vnode(self) -> VNode {
        let mut node = VNode::new(self.node_type);
        node.props = self.props;
        node.children = self.children.map(Box::new);
        node.patch_flag = self.patch_flag;
        node.dynamic_props = self.dynamic_props;
        node
    }
}

impl From<VNodeType> for BlockArgs {
    fn from(node_type: VNodeType) -> Self {
        BlockArgs::new(node_type)
    }
}

/// Host-side block bookkeeping
pub trait BlockHost {
    /// Start collecting dynamic nodes into a new block
    fn open_block(&mut self, disable_tracking: bool);

    /// Create the root of the currently open block and close it
    fn create_block(&mut self, args: BlockArgs) -> VNode;

    /// Create a comment vnode, as its own block when `as_block` is set
    fn create_comment_vnode(&mut self, text: &str, as_block: bool) -> VNode;
}

/// Open a block and create its root in one go
pub fn render_block<H: BlockHost + ?Sized>(host: &mut H, args: BlockArgs) -> VNode {
    host.open_block(false);
    host.create_block(args)
}

/// Render `args` as a block when `condition` holds, otherwise a stable
/// `v-if` comment placeholder
pub fn render_if<H: BlockHost + ?Sized>(host: &mut H, condition: bool, args: BlockArgs) -> VNode {
    if condition {
        render_block(host, args)
    } else {
        host.create_comment_vnode(V_IF, true)
    }
}

/// Stack of open blocks
///
/// Each entry collects the dynamic nodes created while it is on top. An
/// entry of `None` is a block opened with tracking disabled.
#[derive(Debug, Default)]
pub struct BlockStack {
    blocks: Vec<Option<Vec<VNode>>>,
}

impl BlockStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open blocks
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    fn current_block(&mut self) -> Option<&mut Vec<VNode>> {
        self.blocks.last_mut().and_then(Option::as_mut)
    }

    /// Create a vnode inside the current block, tracking it if dynamic
    pub fn create_vnode(&mut self, args: BlockArgs) -> VNode {
        let node = args.into_vnode();
        if Self::should_track(&node) {
            if let Some(block) = self.current_block() {
                block.push(node.clone());
            }
        }
        node
    }

    fn should_track(node: &VNode) -> bool {
        let dynamic = node.patch_flag.is_dynamic() || node.descriptor().is_some();
        dynamic && node.patch_flag != PatchFlags::HYDRATE_EVENTS
    }
}

impl BlockHost for BlockStack {
    fn open_block(&mut self, disable_tracking: bool) {
        self.blocks
            .push(if disable_tracking { None } else { Some(Vec::new()) });
        debug!(depth = self.blocks.len(), disable_tracking, "Opened render block");
    }

    fn create_block(&mut self, args: BlockArgs) -> VNode {
        let mut node = args.into_vnode();
        let collected = match self.blocks.pop() {
            Some(block) => block.unwrap_or_default(),
            None => {
                debug!("create_block called without an open block");
                Vec::new()
            }
        };
        debug!(
            depth = self.blocks.len(),
            dynamic_children = collected.len(),
            "Closed render block"
        );
        node.dynamic_children = Some(collected);

        // A block is always a dynamic child of its parent block
        if let Some(parent) = self.current_block() {
            parent.push(node.clone());
        }
        node
    }

    fn create_comment_vnode(&mut self, text: &str, as_block: bool) -> VNode {
        let args = BlockArgs::new(VNodeType::Comment).with_children(text);
        if as_block {
            self.open_block(false);
            self.create_block(args)
        } else {
            self.create_vnode(args)
        }
    }
}
