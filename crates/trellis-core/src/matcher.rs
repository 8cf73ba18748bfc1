//! Compiled matcher execution.
//!
//! A [`CompiledMatcher`] binds a decision graph to one generation of the
//! registration table. It is immutable once built: any number of threads can
//! call [`CompiledMatcher::match_line`] concurrently without locks, and a
//! rebuild produces a brand-new matcher rather than mutating this one.

use crate::graph::{Arm, DecisionGraph, NodeId};
use crate::route::RouteId;
use crate::template::ParamValue;
use crate::verb::Verb;

/// A successful match: the route handle plus its positional, type-coerced
/// parameter values in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched {
    /// The matched registration.
    pub route: RouteId,
    /// Captured parameter values, in declaration order.
    pub params: Vec<ParamValue>,
}

/// The executable form of one generation of registrations.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    generation: u64,
    graph: DecisionGraph,
}

impl CompiledMatcher {
    /// Wraps a lowered graph, tagging it with the table generation it was
    /// built from.
    #[must_use]
    pub const fn new(generation: u64, graph: DecisionGraph) -> Self {
        Self { generation, graph }
    }

    /// The registration-table generation this matcher was compiled for.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of decision nodes in the compiled graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.len()
    }

    /// Resolves a raw request line of the form `"<VERB> <URI> "`.
    ///
    /// Returns `None` when no registered template matches; an unknown verb,
    /// a malformed line and a failed parameter coercion with no viable
    /// sibling all land here. `None` is a normal outcome, never an error.
    #[must_use]
    pub fn match_line(&self, line: &[u8]) -> Option<Matched> {
        let space = line.iter().position(|&b| b == b' ')?;
        let verb = Verb::from_token(&line[..space])?;
        let entry = self.graph.entry(verb)?;

        let mut params = Vec::new();
        let route = self.run(entry, line, space + 1, &mut params)?;
        Some(Matched { route, params })
    }

    /// Walks the graph from `node` at input offset `pos`.
    ///
    /// The offset only moves forward; failing an arm re-examines the same
    /// offset against the next sibling arm, never previously consumed bytes.
    fn run(
        &self,
        node: NodeId,
        input: &[u8],
        pos: usize,
        params: &mut Vec<ParamValue>,
    ) -> Option<RouteId> {
        for arm in &self.graph.node(node).arms {
            match arm {
                Arm::Leaf { route } => return Some(*route),
                Arm::Literal { bytes, next } => {
                    if input[pos..].starts_with(bytes) {
                        if let Some(route) = self.run(*next, input, pos + bytes.len(), params) {
                            return Some(route);
                        }
                    }
                }
                Arm::Capture {
                    kind,
                    delimiters,
                    next,
                } => {
                    let end = input[pos..]
                        .iter()
                        .position(|b| delimiters.contains(b))
                        .map(|i| pos + i);
                    // A capture needs at least one byte and a closing
                    // delimiter; otherwise this arm is not viable.
                    let Some(end) = end else { continue };
                    if end == pos {
                        continue;
                    }
                    let Some(value) = kind.coerce(&input[pos..end]) else {
                        continue;
                    };
                    params.push(value);
                    if let Some(route) = self.run(*next, input, end, params) {
                        return Some(route);
                    }
                    params.pop();
                }
            }
        }
        None
    }
}
