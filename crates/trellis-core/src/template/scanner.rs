//! Template scanner.
//!
//! A single-pass, two-state scanner over the raw template string. Outside a
//! placeholder it accumulates literal bytes; `{` opens a placeholder body,
//! which must be exactly the anonymous `?`.

use super::param::ParamKind;
use super::prepared::{PreparedTemplate, Segment};
use crate::error::{CompileError, Result};
use crate::verb::Verb;

/// Normalizes a raw template plus its ordered parameter kinds into a
/// [`PreparedTemplate`].
///
/// This is a pure function with no shared state; it is safe to call from any
/// number of threads.
///
/// # Errors
///
/// Returns [`CompileError::EmptyTemplate`] for an empty template,
/// [`CompileError::TemplateSyntax`] for a malformed or non-`?` placeholder
/// body, and [`CompileError::ParameterCountMismatch`] when the placeholder
/// count differs from `kinds.len()`.
pub fn prepare(verb: Verb, template: &str, kinds: &[ParamKind]) -> Result<PreparedTemplate> {
    if template.is_empty() {
        return Err(CompileError::EmptyTemplate);
    }

    let mut scanner = Scanner::new(template, kinds);
    scanner.run()?;
    let (segments, param_count) = scanner.finish()?;

    Ok(PreparedTemplate::new(
        verb,
        segments,
        param_count,
        template.to_owned(),
    ))
}

/// Scanner state: between placeholders, or inside a `{...}` body.
enum State {
    InLiteral,
    InParameter,
}

struct Scanner<'a> {
    template: &'a str,
    kinds: &'a [ParamKind],
    state: State,
    segments: Vec<Segment>,
    literal: Vec<u8>,
    body: String,
    params_seen: usize,
}

impl<'a> Scanner<'a> {
    fn new(template: &'a str, kinds: &'a [ParamKind]) -> Self {
        Self {
            template,
            kinds,
            state: State::InLiteral,
            segments: Vec::new(),
            literal: Vec::new(),
            body: String::new(),
            params_seen: 0,
        }
    }

    fn run(&mut self) -> Result<()> {
        for c in self.template.chars() {
            match self.state {
                State::InLiteral => match c {
                    '{' => {
                        self.flush_literal();
                        self.body.clear();
                        self.state = State::InParameter;
                    }
                    // A stray `}` is a malformed placeholder, not a literal.
                    '}' => return Err(self.syntax_error("}")),
                    _ => {
                        let mut buf = [0u8; 4];
                        self.literal.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                    }
                },
                State::InParameter => {
                    if c == '}' {
                        self.close_parameter()?;
                        self.state = State::InLiteral;
                    } else {
                        self.body.push(c);
                    }
                }
            }
        }
        Ok(())
    }

    /// Validates the placeholder body and emits the typed marker.
    fn close_parameter(&mut self) -> Result<()> {
        if self.body != "?" {
            let body = self.body.clone();
            return Err(self.syntax_error(&body));
        }
        // Kind lookup is positional; an out-of-range index is caught by the
        // final count check, so emit a provisional marker either way.
        let kind = self
            .kinds
            .get(self.params_seen)
            .copied()
            .unwrap_or(ParamKind::Str);
        self.segments.push(Segment::Param(kind));
        self.params_seen += 1;
        Ok(())
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn syntax_error(&self, body: &str) -> CompileError {
        CompileError::TemplateSyntax {
            template: self.template.to_owned(),
            body: body.to_owned(),
        }
    }

    /// Closes the scan: rejects an unterminated placeholder, checks the
    /// declared arity and appends the trailing space sentinel.
    fn finish(mut self) -> Result<(Vec<Segment>, usize)> {
        if matches!(self.state, State::InParameter) {
            let body = self.body.clone();
            return Err(self.syntax_error(&body));
        }
        if self.params_seen != self.kinds.len() {
            return Err(CompileError::ParameterCountMismatch {
                template: self.template.to_owned(),
                placeholders: self.params_seen,
                kinds: self.kinds.len(),
            });
        }

        self.literal.push(b' ');
        self.flush_literal();
        Ok((self.segments, self.params_seen))
    }
}
