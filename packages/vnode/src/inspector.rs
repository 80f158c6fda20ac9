//! # Inspector
//!
//! Configured entry point bundling resolver depth and the diagnostic sink.
//! Options deserialize from JSON; unspecified fields keep their defaults.

use crate::props::normalize_props_with;
use crate::resolve::{get_first_valid_node_with_depth, DEFAULT_MAX_DEPTH};
use crate::vdom::{MaybeVNode, Props, VNodeChild};
use plume_common::{DiagnosticSink, PlumeResult, TracingSink};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Tunables for an [`Inspector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectorOptions {
    /// Wrapper levels the resolver may descend through
    pub max_depth: usize,
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl InspectorOptions {
    /// Load options from JSON; missing fields keep their defaults
    pub fn from_json(source: &str) -> PlumeResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Configured entry point for node resolution and prop normalization
#[derive(Clone)]
pub struct Inspector {
    options: InspectorOptions,
    sink: Arc<dyn DiagnosticSink>,
}

impl Inspector {
    pub fn new() -> Self {
        Self::with_options(InspectorOptions::default())
    }

    pub fn with_options(options: InspectorOptions) -> Self {
        Self {
            options,
            sink: Arc::new(TracingSink),
        }
    }

    /// Route diagnostics to `sink` instead of `tracing`
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn options(&self) -> &InspectorOptions {
        &self.options
    }

    pub fn first_valid_node<'a>(&self, nodes: &'a VNodeChild) -> Option<&'a VNodeChild> {
        get_first_valid_node_with_depth(nodes, self.options.max_depth)
    }

    pub fn normalized_props<N: MaybeVNode + ?Sized>(&self, node: &N) -> Props {
        normalize_props_with(node, self.sink.as_ref())
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Inspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspector")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
