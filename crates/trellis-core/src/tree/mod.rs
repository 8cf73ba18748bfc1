//! Shared parse tree
//!
//! All prepared templates registered under one verb are merged into a single
//! prefix tree whose edges are literal byte runs or typed parameter slots.
//! Structurally similar templates (`/products/{?}` and `/products/{?}/reviews`)
//! therefore share traversal work in the compiled matcher.

mod builder;
mod node;

pub use builder::ParseTree;
pub use node::{LiteralEdge, ParamEdge, TreeNode};
