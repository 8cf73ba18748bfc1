//! Decision nodes and the node arena.

use crate::route::RouteId;
use crate::template::ParamKind;
use crate::verb::{Verb, VERB_COUNT};

/// Index of a decision node inside its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One primitive decision arm.
#[derive(Debug, Clone)]
pub enum Arm {
    /// Compare the next `bytes.len()` input bytes to `bytes`; advance and
    /// continue at `next` on success, fall through to the next sibling arm
    /// on mismatch.
    Literal {
        /// The expected byte run.
        bytes: Vec<u8>,
        /// The node to continue at after the run.
        next: NodeId,
    },
    /// Capture input bytes up to (not including) the nearest delimiter byte,
    /// coerce them to `kind`, and continue at `next`. A failed coercion or
    /// an empty capture falls through to the next sibling arm.
    Capture {
        /// The parameter kind to coerce the capture to.
        kind: ParamKind,
        /// Bytes that end the capture: the first bytes of the following
        /// literal runs, always including the trailing space sentinel.
        delimiters: Vec<u8>,
        /// The node to continue at after the capture.
        next: NodeId,
    },
    /// The template is fully matched; `route` is the unique registration
    /// terminating here.
    Leaf {
        /// The matched route.
        route: RouteId,
    },
}

/// One compiled decision point: arms tried in order, first success wins.
#[derive(Debug, Clone, Default)]
pub struct DecisionNode {
    /// Ordered arms: literals, then captures, then the leaf.
    pub arms: Vec<Arm>,
}

/// The compiled decision graph for one generation of registrations.
///
/// Immutable once built; the matcher only ever reads it.
#[derive(Debug, Clone)]
pub struct DecisionGraph {
    nodes: Vec<DecisionNode>,
    entries: [Option<NodeId>; VERB_COUNT],
}

impl DecisionGraph {
    pub(crate) fn new(nodes: Vec<DecisionNode>, entries: [Option<NodeId>; VERB_COUNT]) -> Self {
        Self { nodes, entries }
    }

    /// Returns the entry node for a verb, if any template is registered
    /// under it.
    #[must_use]
    pub fn entry(&self, verb: Verb) -> Option<NodeId> {
        self.entries[verb.index()]
    }

    /// Resolves a node id to its node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &DecisionNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no template was registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}
