//! Tree nodes and insertion.

use std::collections::VecDeque;

use crate::route::RouteId;
use crate::template::{ParamKind, PreparedTemplate, Segment};

/// An outgoing edge labeled with a literal byte run.
#[derive(Debug, Default, Clone)]
pub struct LiteralEdge {
    /// The byte run consumed by this edge.
    pub label: Vec<u8>,
    /// The node reached after consuming the label.
    pub node: TreeNode,
}

/// An outgoing edge consuming one typed parameter capture.
#[derive(Debug, Clone)]
pub struct ParamEdge {
    /// The parameter kind captured by this edge.
    pub kind: ParamKind,
    /// The node reached after the capture.
    pub node: TreeNode,
}

/// One node of the shared prefix tree.
///
/// Literal edges at a node never share a first byte: insertion factors any
/// common prefix out into a shared edge, so sibling literals are mutually
/// exclusive on their first distinguishing byte. Parameter edges are kept in
/// first-insertion order, which the lowering stage preserves as the tie-break
/// order between parameter kinds at the same position.
#[derive(Debug, Default, Clone)]
pub struct TreeNode {
    /// Literal outgoing edges.
    pub literal_edges: Vec<LiteralEdge>,
    /// Parameter outgoing edges, in first-insertion order.
    pub param_edges: Vec<ParamEdge>,
    /// Routes whose prepared form terminates exactly here.
    ///
    /// More than one entry means two registrations prepared identically;
    /// that is surfaced as a duplicate-registration error during lowering,
    /// never resolved by priority.
    pub terminals: Vec<RouteId>,
}

/// One unit of insertion work: a (possibly partial) literal run or a slot.
#[derive(Debug)]
enum Piece {
    Bytes(Vec<u8>),
    Param(ParamKind),
}

impl TreeNode {
    /// Inserts a prepared template's segment stream below this node.
    ///
    /// The walk consumes the longest common prefix with existing literal
    /// edges, splitting an edge where the shared prefix ends.
    pub fn insert(&mut self, prepared: &PreparedTemplate, route: RouteId) {
        let pieces: VecDeque<Piece> = prepared
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Literal(bytes) => Piece::Bytes(bytes.clone()),
                Segment::Param(kind) => Piece::Param(*kind),
            })
            .collect();
        self.insert_pieces(pieces, route);
    }

    fn insert_pieces(&mut self, mut pieces: VecDeque<Piece>, route: RouteId) {
        let Some(piece) = pieces.pop_front() else {
            self.terminals.push(route);
            return;
        };

        match piece {
            Piece::Param(kind) => {
                let i = self
                    .param_edges
                    .iter()
                    .position(|e| e.kind == kind)
                    .unwrap_or_else(|| {
                        self.param_edges.push(ParamEdge {
                            kind,
                            node: TreeNode::default(),
                        });
                        self.param_edges.len() - 1
                    });
                self.param_edges[i].node.insert_pieces(pieces, route);
            }
            Piece::Bytes(run) => self.insert_bytes(run, pieces, route),
        }
    }

    fn insert_bytes(&mut self, run: Vec<u8>, mut rest: VecDeque<Piece>, route: RouteId) {
        debug_assert!(!run.is_empty());

        let shared = self
            .literal_edges
            .iter()
            .position(|edge| edge.label[0] == run[0]);

        let Some(i) = shared else {
            // No edge shares a first byte: open a fresh one.
            self.literal_edges.push(LiteralEdge {
                label: run,
                node: TreeNode::default(),
            });
            let i = self.literal_edges.len() - 1;
            self.literal_edges[i].node.insert_pieces(rest, route);
            return;
        };

        let lcp = common_prefix(&self.literal_edges[i].label, &run);
        if lcp < self.literal_edges[i].label.len() {
            self.split_edge(i, lcp);
        }
        if lcp < run.len() {
            rest.push_front(Piece::Bytes(run[lcp..].to_vec()));
        }
        self.literal_edges[i].node.insert_pieces(rest, route);
    }

    /// Splits the edge at `i` after `at` label bytes, pushing the remainder
    /// down into a fresh intermediate node.
    fn split_edge(&mut self, i: usize, at: usize) {
        let edge = &mut self.literal_edges[i];
        let tail = edge.label.split_off(at);
        let old_child = std::mem::take(&mut edge.node);
        edge.node.literal_edges.push(LiteralEdge {
            label: tail,
            node: old_child,
        });
    }
}

fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::prepare;
    use crate::verb::Verb;

    fn node_with(templates: &[(&str, &[ParamKind])]) -> TreeNode {
        let mut root = TreeNode::default();
        for (i, (template, kinds)) in templates.iter().enumerate() {
            let prepared = prepare(Verb::Get, template, kinds).unwrap();
            root.insert(&prepared, RouteId::new(i));
        }
        root
    }

    #[test]
    fn shared_prefix_is_factored_once() {
        let root = node_with(&[
            ("/products/{?}", &[ParamKind::Str]),
            ("/products/{?}/reviews", &[ParamKind::Str]),
        ]);

        // One shared "/products/" edge into a single parameter slot.
        assert_eq!(root.literal_edges.len(), 1);
        assert_eq!(root.literal_edges[0].label, b"/products/");
        let after_prefix = &root.literal_edges[0].node;
        assert_eq!(after_prefix.param_edges.len(), 1);

        // Below the slot, " " and "/reviews " diverge.
        let after_param = &after_prefix.param_edges[0].node;
        assert_eq!(after_param.literal_edges.len(), 2);
    }

    #[test]
    fn diverging_literals_split_the_edge() {
        let root = node_with(&[("/products/featured", &[]), ("/products/fresh", &[])]);

        assert_eq!(root.literal_edges.len(), 1);
        assert_eq!(root.literal_edges[0].label, b"/products/f");
        let fork = &root.literal_edges[0].node;
        let mut labels: Vec<&[u8]> = fork.literal_edges.iter().map(|e| &e.label[..]).collect();
        labels.sort_unstable();
        assert_eq!(labels, [&b"eatured "[..], &b"resh "[..]]);
    }

    #[test]
    fn sibling_literals_never_share_a_first_byte() {
        let root = node_with(&[("/a", &[]), ("/ab", &[]), ("/b", &[])]);
        let top = &root.literal_edges;
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].label, b"/");
        let firsts: Vec<u8> = top[0]
            .node
            .literal_edges
            .iter()
            .map(|e| e.label[0])
            .collect();
        let mut dedup = firsts.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(firsts.len(), dedup.len());
    }

    #[test]
    fn param_edges_keep_insertion_order() {
        let root = node_with(&[
            ("/items/{?}", &[ParamKind::Int]),
            ("/items/{?}/tag", &[ParamKind::Str]),
        ]);
        let slot_node = &root.literal_edges[0].node;
        let kinds: Vec<ParamKind> = slot_node.param_edges.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ParamKind::Int, ParamKind::Str]);
    }

    #[test]
    fn identical_prepared_forms_stack_terminals() {
        let root = node_with(&[
            ("/dup/{?}", &[ParamKind::Int]),
            ("/dup/{?}", &[ParamKind::Int]),
        ]);
        let mut node = &root.literal_edges[0].node;
        assert_eq!(node.param_edges.len(), 1);
        node = &node.param_edges[0].node;
        let terminal = &node.literal_edges[0].node;
        assert_eq!(terminal.terminals, [RouteId::new(0), RouteId::new(1)]);
    }
}
