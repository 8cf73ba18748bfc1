//! Tree-to-graph lowering.

use super::node::{Arm, DecisionGraph, DecisionNode, NodeId};
use crate::error::{CompileError, Result};
use crate::route::RouteId;
use crate::template::PreparedTemplate;
use crate::tree::{ParseTree, TreeNode};
use crate::verb::{Verb, VERB_COUNT};

/// Lowers the shared parse tree into a decision graph.
///
/// Arm order per node is the tie-break policy for overlapping templates:
/// literal arms come before capture arms, so `/products/featured` beats
/// `/products/{?}`, and capture arms keep their first-registration order.
///
/// # Errors
///
/// Returns [`CompileError::DuplicateRegistration`] when two registrations
/// terminate at the same tree node, i.e. their prepared forms are identical.
pub fn lower(tree: &ParseTree, prepared: &[(RouteId, PreparedTemplate)]) -> Result<DecisionGraph> {
    let mut lowerer = Lowerer {
        nodes: Vec::new(),
        prepared,
    };

    let mut entries: [Option<NodeId>; VERB_COUNT] = [None; VERB_COUNT];
    for verb in Verb::ALL {
        let root = tree.root(verb);
        if root.literal_edges.is_empty() && root.param_edges.is_empty() && root.terminals.is_empty()
        {
            continue;
        }
        entries[verb.index()] = Some(lowerer.lower_node(root)?);
    }

    Ok(DecisionGraph::new(lowerer.nodes, entries))
}

struct Lowerer<'a> {
    nodes: Vec<DecisionNode>,
    prepared: &'a [(RouteId, PreparedTemplate)],
}

impl Lowerer<'_> {
    /// Depth-first lowering of one tree node into one decision node.
    fn lower_node(&mut self, tnode: &TreeNode) -> Result<NodeId> {
        let mut arms = Vec::with_capacity(
            tnode.literal_edges.len() + tnode.param_edges.len() + usize::from(!tnode.terminals.is_empty()),
        );

        for edge in &tnode.literal_edges {
            let next = self.lower_node(&edge.node)?;
            arms.push(Arm::Literal {
                bytes: edge.label.clone(),
                next,
            });
        }

        for edge in &tnode.param_edges {
            let next = self.lower_node(&edge.node)?;
            arms.push(Arm::Capture {
                kind: edge.kind,
                delimiters: capture_delimiters(&edge.node),
                next,
            });
        }

        match tnode.terminals.as_slice() {
            [] => {}
            [route] => arms.push(Arm::Leaf { route: *route }),
            [first, second, ..] => {
                return Err(CompileError::DuplicateRegistration {
                    first: *first,
                    second: *second,
                    prepared: self.prepared_text(*first),
                });
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(DecisionNode { arms });
        Ok(id)
    }

    fn prepared_text(&self, route: RouteId) -> String {
        self.prepared
            .iter()
            .find(|(id, _)| *id == route)
            .map_or_else(String::new, |(_, p)| p.canonical_text())
    }
}

/// Delimiter set for a capture entering `after`: the first byte of each
/// literal run reachable next, plus the space sentinel.
fn capture_delimiters(after: &TreeNode) -> Vec<u8> {
    let mut delims = vec![b' '];
    for edge in &after.literal_edges {
        let first = edge.label[0];
        if !delims.contains(&first) {
            delims.push(first);
        }
    }
    delims
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{prepare, ParamKind};

    fn prepare_all(templates: &[(Verb, &str, &[ParamKind])]) -> Vec<(RouteId, PreparedTemplate)> {
        templates
            .iter()
            .enumerate()
            .map(|(i, (verb, template, kinds))| {
                (RouteId::new(i), prepare(*verb, template, kinds).unwrap())
            })
            .collect()
    }

    #[test]
    fn literal_arms_come_before_captures() {
        let prepared = prepare_all(&[
            (Verb::Get, "/products/{?}", &[ParamKind::Str]),
            (Verb::Get, "/products/featured", &[]),
        ]);
        let tree = ParseTree::build(&prepared);
        let graph = lower(&tree, &prepared).unwrap();

        // Walk to the node after "/products/".
        let entry = graph.entry(Verb::Get).unwrap();
        let Arm::Literal { bytes, next } = &graph.node(entry).arms[0] else {
            panic!("expected a literal entry arm");
        };
        assert_eq!(bytes, b"/products/");
        let fork = graph.node(*next);
        assert!(matches!(fork.arms[0], Arm::Literal { .. }));
        assert!(matches!(fork.arms[1], Arm::Capture { .. }));
    }

    #[test]
    fn capture_delimiters_include_sentinel_and_following_literals() {
        let prepared = prepare_all(&[(
            Verb::Get,
            "/orders/{?}/items",
            &[ParamKind::Int],
        )]);
        let tree = ParseTree::build(&prepared);
        let graph = lower(&tree, &prepared).unwrap();

        let entry = graph.entry(Verb::Get).unwrap();
        let Arm::Literal { next, .. } = &graph.node(entry).arms[0] else {
            panic!("expected literal arm");
        };
        let Arm::Capture { delimiters, .. } = &graph.node(*next).arms[0] else {
            panic!("expected capture arm");
        };
        assert!(delimiters.contains(&b' '));
        assert!(delimiters.contains(&b'/'));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let prepared = prepare_all(&[
            (Verb::Get, "/a/{?}", &[ParamKind::Int]),
            (Verb::Get, "/a/{?}", &[ParamKind::Int]),
        ]);
        let tree = ParseTree::build(&prepared);
        let err = lower(&tree, &prepared).unwrap_err();

        assert_eq!(
            err,
            CompileError::DuplicateRegistration {
                first: RouteId::new(0),
                second: RouteId::new(1),
                prepared: "GET /a/@i ".to_owned(),
            }
        );
    }

    #[test]
    fn same_template_under_different_verbs_is_not_a_duplicate() {
        let prepared = prepare_all(&[
            (Verb::Get, "/a/{?}", &[ParamKind::Int]),
            (Verb::Post, "/a/{?}", &[ParamKind::Int]),
        ]);
        let tree = ParseTree::build(&prepared);
        assert!(lower(&tree, &prepared).is_ok());
    }

    #[test]
    fn unregistered_verbs_have_no_entry() {
        let prepared = prepare_all(&[(Verb::Get, "/a", &[])]);
        let tree = ParseTree::build(&prepared);
        let graph = lower(&tree, &prepared).unwrap();
        assert!(graph.entry(Verb::Get).is_some());
        assert!(graph.entry(Verb::Delete).is_none());
        assert!(!graph.is_empty());
    }
}
