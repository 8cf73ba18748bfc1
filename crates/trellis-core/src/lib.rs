//! # trellis-core
//!
//! A compiler and matcher for REST URI templates.
//!
//! User code declares endpoints as a verb plus a URI template in which each
//! path parameter is the anonymous placeholder `{?}`, typed out-of-band by an
//! ordered list of [`ParamKind`]s:
//!
//! ```text
//! GET /products/{?}          (ParamKind::Int)
//! GET /products/{?}/reviews  (ParamKind::Int)
//! ```
//!
//! The pipeline has four stages:
//!
//! 1. [`template`] — normalizes a raw template into a [`PreparedTemplate`],
//!    a canonical stream of literal fragments and typed parameter markers
//!    closed by a single trailing space sentinel.
//! 2. [`tree`] — merges all prepared templates for a verb into a shared
//!    prefix tree so structurally similar templates share traversal work.
//! 3. [`graph`] — lowers the tree into a decision graph of primitive
//!    compare/capture/leaf arms, rejecting duplicate registrations.
//! 4. [`matcher`] — executes the graph against a raw request line
//!    (`"<VERB> <URI> "`) in a single forward scan, producing the matched
//!    route and its type-coerced positional parameters.
//!
//! ```rust
//! use trellis_core::graph::lower;
//! use trellis_core::matcher::CompiledMatcher;
//! use trellis_core::template::{prepare, ParamKind, ParamValue};
//! use trellis_core::tree::ParseTree;
//! use trellis_core::{RouteId, Verb};
//!
//! let orders = prepare(Verb::Get, "/orders/{?}", &[ParamKind::Int]).unwrap();
//! let prepared = vec![(RouteId::new(0), orders)];
//!
//! let tree = ParseTree::build(&prepared);
//! let graph = lower(&tree, &prepared).unwrap();
//! let matcher = CompiledMatcher::new(0, graph);
//!
//! let hit = matcher.match_line(b"GET /orders/42 ").unwrap();
//! assert_eq!(hit.route, RouteId::new(0));
//! assert_eq!(hit.params, vec![ParamValue::Int(42)]);
//! ```

pub mod error;
pub mod graph;
pub mod matcher;
pub mod route;
pub mod template;
pub mod tree;
pub mod verb;

pub use error::{CompileError, Result};
pub use matcher::{CompiledMatcher, Matched};
pub use route::RouteId;
pub use template::{ParamKind, ParamValue, PreparedTemplate};
pub use verb::Verb;
