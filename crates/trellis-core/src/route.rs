//! Stable route handles.

use serde::{Deserialize, Serialize};

/// A stable handle for one registered route.
///
/// Handles are assigned in registration order and are equal to the record's
/// index in the registration table, so they stay valid for the lifetime of
/// the table and across matcher rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(usize);

impl RouteId {
    /// Creates a handle from a registration index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the registration index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
