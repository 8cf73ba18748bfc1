//! The canonical prepared form of a template.

use super::ParamKind;
use crate::verb::Verb;

/// One element of a prepared template's segment stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A run of literal URI bytes that must match exactly.
    Literal(Vec<u8>),
    /// A typed parameter slot.
    Param(ParamKind),
}

/// The canonical form of one registered template.
///
/// Segments alternate between literal byte runs and typed parameter slots;
/// the final literal always ends with a single space, used by the matcher as
/// an unambiguous end-of-URI sentinel. Two registrations conflict exactly
/// when their verbs and segment streams are equal.
///
/// The [`Display`](std::fmt::Display) form,
/// `"<VERB> <literal>@<tag><literal>... "`, is a stable diagnostic artifact
/// independent of any internal tree or graph representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTemplate {
    verb: Verb,
    segments: Vec<Segment>,
    param_count: usize,
    source: String,
}

impl PreparedTemplate {
    pub(super) fn new(
        verb: Verb,
        segments: Vec<Segment>,
        param_count: usize,
        source: String,
    ) -> Self {
        Self {
            verb,
            segments,
            param_count,
            source,
        }
    }

    /// The verb this template is registered under.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// The normalized segment stream, sentinel space included.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of parameter slots.
    #[must_use]
    pub const fn param_count(&self) -> usize {
        self.param_count
    }

    /// The raw template string this was prepared from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the canonical textual form, e.g. `"GET /products/@i "`.
    #[must_use]
    pub fn canonical_text(&self) -> String {
        let mut out = String::from(self.verb.as_str());
        out.push(' ');
        for segment in &self.segments {
            match segment {
                Segment::Literal(bytes) => {
                    // Literals originate from a &str template, so they are
                    // valid UTF-8 by construction.
                    out.push_str(&String::from_utf8_lossy(bytes));
                }
                Segment::Param(kind) => {
                    out.push('@');
                    out.push(kind.tag());
                }
            }
        }
        out
    }
}

impl std::fmt::Display for PreparedTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_text())
    }
}
