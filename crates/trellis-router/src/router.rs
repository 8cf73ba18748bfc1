//! The registration façade and matcher lifecycle.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::info;

use crate::error::Result as RegisterResult;
use crate::table::{RouteRecord, RouteTable};
use trellis_core::graph::lower;
use trellis_core::tree::ParseTree;
use trellis_core::{CompileError, CompiledMatcher, ParamKind, ParamValue, RouteId, Verb};

/// A resolved request: the registered handler plus the captured parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolution<'a, T> {
    /// The matched registration's handle.
    pub route: RouteId,
    /// The handler registered for the matched template.
    pub handler: &'a T,
    /// Positional parameter values, in declaration order.
    pub params: Vec<ParamValue>,
}

/// The public registration surface.
///
/// `Router` owns the registration table and a lazily compiled matcher.
/// Registration takes `&mut self` and is meant for an application's
/// single-threaded configuration phase; [`Router::resolve`] takes `&self`
/// and is safe for unlimited concurrent callers once the table is live.
///
/// A compile is triggered on first resolution and again whenever the table's
/// generation has advanced. The new matcher is built completely before it is
/// swapped in, so a resolution that already holds the previous matcher
/// finishes against its original, now-detached graph.
pub struct Router<T> {
    table: RouteTable<T>,
    compiled: ArcSwapOption<CompiledMatcher>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
            compiled: ArcSwapOption::const_empty(),
        }
    }

    /// Registers a handler for `GET <template>`.
    pub fn get(&mut self, template: &str, kinds: &[ParamKind], handler: T) -> RegisterResult<RouteId> {
        self.route(Verb::Get, template, kinds, handler)
    }

    /// Registers a handler for `POST <template>`.
    pub fn post(&mut self, template: &str, kinds: &[ParamKind], handler: T) -> RegisterResult<RouteId> {
        self.route(Verb::Post, template, kinds, handler)
    }

    /// Registers a handler for `PUT <template>`.
    pub fn put(&mut self, template: &str, kinds: &[ParamKind], handler: T) -> RegisterResult<RouteId> {
        self.route(Verb::Put, template, kinds, handler)
    }

    /// Registers a handler for `DELETE <template>`.
    pub fn delete(
        &mut self,
        template: &str,
        kinds: &[ParamKind],
        handler: T,
    ) -> RegisterResult<RouteId> {
        self.route(Verb::Delete, template, kinds, handler)
    }

    /// Registers a handler for `PATCH <template>`.
    pub fn patch(
        &mut self,
        template: &str,
        kinds: &[ParamKind],
        handler: T,
    ) -> RegisterResult<RouteId> {
        self.route(Verb::Patch, template, kinds, handler)
    }

    /// Registers a handler under any verb.
    ///
    /// `kinds` types the template's `{?}` placeholders positionally; at most
    /// [`MAX_PARAMS`](crate::table::MAX_PARAMS) are accepted.
    pub fn route(
        &mut self,
        verb: Verb,
        template: &str,
        kinds: &[ParamKind],
        handler: T,
    ) -> RegisterResult<RouteId> {
        self.table.register(verb, template, kinds, handler)
    }

    /// Adds an on-registration observer.
    pub fn on_register(&mut self, observer: impl Fn(&RouteRecord) + Send + Sync + 'static) {
        self.table.on_register(observer);
    }

    /// Clears all registrations and drops the compiled matcher. Intended
    /// for test isolation.
    pub fn reset(&mut self) {
        self.table.reset();
        self.compiled.store(None);
    }

    /// The registered records, in registration order.
    #[must_use]
    pub fn routes(&self) -> &[RouteRecord] {
        self.table.records()
    }

    /// Compiles the current registrations into a fresh matcher and swaps it
    /// in.
    ///
    /// The previous matcher is replaced only after the new one is fully
    /// built; on error nothing is swapped and the previously compiled
    /// matcher, if any, stays active.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::DuplicateRegistration`] when two
    /// registrations share a prepared form. (Syntax and arity problems are
    /// rejected earlier, at registration.)
    pub fn compile(&self) -> Result<Arc<CompiledMatcher>, CompileError> {
        let prepared = self.table.prepared();
        let tree = ParseTree::build(&prepared);
        let graph = lower(&tree, &prepared)?;
        let matcher = Arc::new(CompiledMatcher::new(self.table.generation(), graph));

        self.compiled.store(Some(Arc::clone(&matcher)));
        info!(
            routes = self.table.len(),
            generation = self.table.generation(),
            nodes = matcher.node_count(),
            "compiled matcher"
        );
        Ok(matcher)
    }

    /// Resolves a raw request line (`"<VERB> <URI> "`) against the current
    /// registrations, compiling first if the cached matcher is missing or
    /// stale.
    ///
    /// `Ok(None)` means no handler is registered for the request — a normal
    /// outcome for the transport to translate into its 404 equivalent.
    ///
    /// # Errors
    ///
    /// Propagates a [`CompileError`] when a lazy rebuild fails; resolution
    /// never invents a match from a stale table.
    pub fn resolve(&self, line: &[u8]) -> Result<Option<Resolution<'_, T>>, CompileError> {
        let matcher = self.current()?;
        Ok(matcher.match_line(line).map(|hit| Resolution {
            route: hit.route,
            handler: self.table.handler(hit.route),
            params: hit.params,
        }))
    }

    /// Returns the cached matcher, rebuilding when the table has moved on.
    fn current(&self) -> Result<Arc<CompiledMatcher>, CompileError> {
        if let Some(matcher) = self.compiled.load_full() {
            if matcher.generation() == self.table.generation() {
                return Ok(matcher);
            }
        }
        self.compile()
    }
}

impl<T> std::fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router").field("table", &self.table).finish()
    }
}
