//! Template normalization
//!
//! This module turns a raw URI template plus its ordered parameter kinds into
//! a canonical [`PreparedTemplate`]: literal byte fragments interleaved with
//! typed parameter markers, closed by a single trailing space sentinel.

mod param;
mod prepared;
mod scanner;

pub use param::{ParamKind, ParamValue};
pub use prepared::{PreparedTemplate, Segment};
pub use scanner::prepare;
