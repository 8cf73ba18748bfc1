//! Decision graph
//!
//! Lowers the shared parse tree into a flat arena of decision nodes. Each
//! node holds an ordered list of arms: literal byte-run comparisons first,
//! then typed captures in registration order, then the terminal leaf. The
//! matcher walks this graph directly.

mod lower;
mod node;

pub use lower::lower;
pub use node::{Arm, DecisionGraph, DecisionNode, NodeId};
