//! Per-verb tree construction.

use super::node::TreeNode;
use crate::route::RouteId;
use crate::template::PreparedTemplate;
use crate::verb::{Verb, VERB_COUNT};

/// The shared parse trees for one generation of registrations, one root per
/// verb.
///
/// Verbs never share a tree: a GET and a POST registration with identical
/// URIs are fully independent.
#[derive(Debug, Clone)]
pub struct ParseTree {
    roots: [TreeNode; VERB_COUNT],
}

impl Default for ParseTree {
    fn default() -> Self {
        Self {
            roots: std::array::from_fn(|_| TreeNode::default()),
        }
    }
}

impl ParseTree {
    /// Builds the trees from every prepared registration, in registration
    /// order.
    ///
    /// Construction is O(total prepared length); later lookups are O(depth).
    #[must_use]
    pub fn build(prepared: &[(RouteId, PreparedTemplate)]) -> Self {
        let mut tree = Self::default();
        for (route, template) in prepared {
            tree.roots[template.verb().index()].insert(template, *route);
        }
        tree
    }

    /// Returns the root for a verb.
    #[must_use]
    pub fn root(&self, verb: Verb) -> &TreeNode {
        &self.roots[verb.index()]
    }
}
