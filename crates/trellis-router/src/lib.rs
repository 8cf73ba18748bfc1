//! # trellis-router
//!
//! The registration façade over the `trellis-core` template compiler.
//!
//! Applications register handlers against a verb and a URI template during a
//! single-threaded configuration phase, then resolve raw request lines
//! concurrently; the compiled matcher is built lazily and swapped atomically
//! when the registration table changes.
//!
//! ```rust
//! use trellis_router::{ParamKind, ParamValue, Router, Verb};
//!
//! let mut router: Router<&str> = Router::new();
//! router.get("/orders/{?}", &[ParamKind::Int], "order-detail").unwrap();
//! router.get("/orders/pending", &[], "pending-orders").unwrap();
//!
//! let hit = router.resolve(b"GET /orders/42 ").unwrap().unwrap();
//! assert_eq!(*hit.handler, "order-detail");
//! assert_eq!(hit.params, vec![ParamValue::Int(42)]);
//!
//! let hit = router.resolve(b"GET /orders/pending ").unwrap().unwrap();
//! assert_eq!(*hit.handler, "pending-orders");
//! ```

pub mod error;
pub mod router;
pub mod table;

pub use error::RegisterError;
pub use router::{Resolution, Router};
pub use table::{RouteRecord, RouteTable, MAX_PARAMS};

pub use trellis_core::{
    CompileError, CompiledMatcher, Matched, ParamKind, ParamValue, PreparedTemplate, RouteId, Verb,
};
