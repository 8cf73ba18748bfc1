//! The registration table.

use tracing::debug;

use crate::error::{RegisterError, Result};
use trellis_core::template::prepare;
use trellis_core::{ParamKind, PreparedTemplate, RouteId, Verb};

/// Maximum positional parameters per registration.
///
/// This is a limit of the registration grammar, not of the matcher; raising
/// it needs no structural change.
pub const MAX_PARAMS: usize = 3;

/// One handler registration, normalized at registration time.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// The stable handle for this registration.
    pub id: RouteId,
    /// The verb the template is registered under.
    pub verb: Verb,
    /// The raw template as the application declared it.
    pub template: String,
    /// The canonical prepared form.
    pub prepared: PreparedTemplate,
}

/// Observer invoked for every new registration, before `register` returns.
pub type Observer = Box<dyn Fn(&RouteRecord) + Send + Sync>;

/// An ordered, append-only collection of registrations plus their handlers.
///
/// Writing is single-threaded by convention (registration happens during an
/// application's configuration phase); reading is free-threaded once the
/// table is live.
pub struct RouteTable<T> {
    records: Vec<RouteRecord>,
    handlers: Vec<T>,
    generation: u64,
    observers: Vec<Observer>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            handlers: Vec::new(),
            generation: 0,
            observers: Vec::new(),
        }
    }
}

impl<T> RouteTable<T> {
    /// Creates an empty table at generation zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registration, normalizing the template immediately so that
    /// syntax and arity problems surface to the registering code.
    ///
    /// The returned handle equals the record's index and stays stable for
    /// the lifetime of the table.
    pub fn register(
        &mut self,
        verb: Verb,
        template: &str,
        kinds: &[ParamKind],
        handler: T,
    ) -> Result<RouteId> {
        if kinds.len() > MAX_PARAMS {
            return Err(RegisterError::TooManyParameters {
                template: template.to_owned(),
                declared: kinds.len(),
            });
        }

        let id = RouteId::new(self.records.len());
        let prepared = prepare(verb, template, kinds)?;
        debug!(verb = %verb, template, id = id.index(), prepared = %prepared, "registered route");

        let record = RouteRecord {
            id,
            verb,
            template: template.to_owned(),
            prepared,
        };
        for observer in &self.observers {
            observer(&record);
        }

        self.records.push(record);
        self.handlers.push(handler);
        self.generation += 1;
        Ok(id)
    }

    /// Adds an on-registration observer, used externally for diagnostics and
    /// tracing.
    pub fn on_register(&mut self, observer: impl Fn(&RouteRecord) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Clears all registrations and advances the generation, invalidating
    /// any matcher compiled from the old contents. Intended for test
    /// isolation, not production hot-reload.
    pub fn reset(&mut self) {
        self.records.clear();
        self.handlers.clear();
        self.generation += 1;
    }

    /// The registered records, in registration order.
    #[must_use]
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// The handler registered under `id`.
    #[must_use]
    pub fn handler(&self, id: RouteId) -> &T {
        &self.handlers[id.index()]
    }

    /// The current generation; advances on every mutation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepared templates paired with their handles, for compilation.
    #[must_use]
    pub fn prepared(&self) -> Vec<(RouteId, PreparedTemplate)> {
        self.records
            .iter()
            .map(|r| (r.id, r.prepared.clone()))
            .collect()
    }
}

impl<T> std::fmt::Debug for RouteTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("records", &self.records)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}
