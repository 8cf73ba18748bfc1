//! HTTP verb tokens.

use serde::{Deserialize, Serialize};

/// The fixed set of HTTP method tokens templates can be registered under.
///
/// Verbs are the top-level partition key for templates: a GET and a POST
/// registration never share compiled state, even for identical URIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// DELETE method
    Delete,
    /// PATCH method
    Patch,
}

/// Number of supported verbs; sizes per-verb lookup tables.
pub const VERB_COUNT: usize = 5;

impl Verb {
    /// All verbs, in `index` order.
    pub const ALL: [Self; VERB_COUNT] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
    ];

    /// Parses a verb from a raw request-line token.
    ///
    /// Method tokens are case-sensitive per HTTP, so only the canonical
    /// uppercase forms are accepted.
    #[must_use]
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"GET" => Some(Self::Get),
            b"POST" => Some(Self::Post),
            b"PUT" => Some(Self::Put),
            b"DELETE" => Some(Self::Delete),
            b"PATCH" => Some(Self::Patch),
            _ => None,
        }
    }

    /// Returns the verb as its wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Returns a dense index in `0..VERB_COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Get => 0,
            Self::Post => 1,
            Self::Put => 2,
            Self::Delete => 3,
            Self::Patch => 4,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_parsing() {
        assert_eq!(Verb::from_token(b"GET"), Some(Verb::Get));
        assert_eq!(Verb::from_token(b"PATCH"), Some(Verb::Patch));
        assert_eq!(Verb::from_token(b"get"), None);
        assert_eq!(Verb::from_token(b"HEAD"), None);
        assert_eq!(Verb::from_token(b""), None);
    }

    #[test]
    fn indices_are_dense_and_stable() {
        for (i, verb) in Verb::ALL.iter().enumerate() {
            assert_eq!(verb.index(), i);
        }
    }
}
