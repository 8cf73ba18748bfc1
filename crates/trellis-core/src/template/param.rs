//! Parameter kinds and captured values.

use serde::{Deserialize, Serialize};

/// The closed set of parameter kinds a `{?}` placeholder can carry.
///
/// Each kind has a one-character tag used in the canonical prepared form.
/// The set is deliberately closed: a registration can only name a kind that
/// exists here, so there is no "unknown parameter type" failure mode at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// Raw string, tag `s`. Captured bytes are passed through verbatim.
    Str,
    /// 32-bit signed integer, tag `i`. Captured bytes must be an ASCII
    /// decimal integer.
    Int,
}

impl ParamKind {
    /// Returns the one-character tag used in prepared-template text.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Str => 's',
            Self::Int => 'i',
        }
    }

    /// Coerces a captured byte run to a typed value.
    ///
    /// Returns `None` when the bytes do not form a valid value of this kind;
    /// the matcher treats that as a local failure and falls through to the
    /// next sibling edge rather than aborting the request.
    #[must_use]
    pub fn coerce(self, raw: &[u8]) -> Option<ParamValue> {
        match self {
            Self::Str => std::str::from_utf8(raw).ok().map(|s| ParamValue::Str(s.to_owned())),
            Self::Int => parse_i32(raw).map(ParamValue::Int),
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A positional parameter value extracted by a successful match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamValue {
    /// A string capture.
    Str(String),
    /// An integer capture.
    Int(i32),
}

impl ParamValue {
    /// Returns the string value, if this is a string capture.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer value, if this is an integer capture.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }
}

/// Parses an ASCII decimal `i32` with checked arithmetic.
///
/// An optional leading `-` is accepted; at least one digit is required and
/// overflow is a failure, not a wrap.
fn parse_i32(raw: &[u8]) -> Option<i32> {
    let (negative, digits) = match raw.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, raw),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i32 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(i32::from(b - b'0'))?
        } else {
            value.checked_add(i32::from(b - b'0'))?
        };
    }
    Some(value)
}
