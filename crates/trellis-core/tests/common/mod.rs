#![allow(dead_code)]

use trellis_core::graph::lower;
use trellis_core::template::prepare;
use trellis_core::tree::ParseTree;
use trellis_core::{CompileError, CompiledMatcher, ParamKind, PreparedTemplate, RouteId, Verb};

/// A registration as integration tests declare it.
pub type Registration<'a> = (Verb, &'a str, &'a [ParamKind]);

pub fn prepare_all(registrations: &[Registration]) -> Vec<(RouteId, PreparedTemplate)> {
    registrations
        .iter()
        .enumerate()
        .map(|(i, (verb, template, kinds))| {
            let prepared = prepare(*verb, template, kinds)
                .unwrap_or_else(|e| panic!("Failed to prepare: {template}\nError: {e:?}"));
            (RouteId::new(i), prepared)
        })
        .collect()
}

/// Runs the full pipeline: normalize, build the tree, lower, wrap.
pub fn compile(registrations: &[Registration]) -> CompiledMatcher {
    try_compile(registrations)
        .unwrap_or_else(|e| panic!("Expected registrations to compile\nError: {e:?}"))
}

pub fn try_compile(registrations: &[Registration]) -> Result<CompiledMatcher, CompileError> {
    let prepared = prepare_all(registrations);
    let tree = ParseTree::build(&prepared);
    let graph = lower(&tree, &prepared)?;
    Ok(CompiledMatcher::new(1, graph))
}

pub fn compile_err(registrations: &[Registration]) -> CompileError {
    try_compile(registrations).map_or_else(
        |e| e,
        |_| panic!("Expected a compile error for {registrations:?}"),
    )
}
