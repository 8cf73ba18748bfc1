//! Compile-time rejection: template syntax, arity and duplicates.

mod common;
use common::*;

use trellis_core::template::prepare;
use trellis_core::{CompileError, ParamKind, RouteId, Verb};

#[test]
fn named_placeholders_fail_fast() {
    let err = prepare(Verb::Get, "/users/{id}/posts", &[ParamKind::Int]).unwrap_err();
    let CompileError::TemplateSyntax { template, body } = err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert_eq!(template, "/users/{id}/posts");
    assert_eq!(body, "id");
}

#[test]
fn syntax_errors_name_the_offending_template() {
    for bad in ["/a/{x}", "/a/{", "/a/}", "/a/{??}"] {
        let err = prepare(Verb::Get, bad, &[ParamKind::Str]).unwrap_err();
        match err {
            CompileError::TemplateSyntax { template, .. } => assert_eq!(template, bad),
            other => panic!("expected a syntax error for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn duplicate_registration_names_both_routes() {
    let err = compile_err(&[
        (Verb::Get, "/a/{?}", &[ParamKind::Str]),
        (Verb::Get, "/b", &[]),
        (Verb::Get, "/a/{?}", &[ParamKind::Str]),
    ]);

    assert_eq!(
        err,
        CompileError::DuplicateRegistration {
            first: RouteId::new(0),
            second: RouteId::new(2),
            prepared: "GET /a/@s ".to_owned(),
        }
    );
}

#[test]
fn same_uri_with_different_kinds_is_not_a_duplicate() {
    let m = try_compile(&[
        (Verb::Get, "/a/{?}", &[ParamKind::Str]),
        (Verb::Get, "/a/{?}", &[ParamKind::Int]),
    ]);
    assert!(m.is_ok());
}

#[test]
fn same_uri_under_another_verb_is_not_a_duplicate() {
    let m = try_compile(&[
        (Verb::Get, "/a/{?}", &[ParamKind::Str]),
        (Verb::Put, "/a/{?}", &[ParamKind::Str]),
    ]);
    assert!(m.is_ok());
}

#[test]
fn error_messages_carry_context() {
    let err = prepare(Verb::Get, "/users/{name}", &[ParamKind::Str]).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("/users/{name}"));
    assert!(rendered.contains("name"));

    let err = compile_err(&[
        (Verb::Post, "/dup", &[]),
        (Verb::Post, "/dup", &[]),
    ]);
    let rendered = err.to_string();
    assert!(rendered.contains("#0"));
    assert!(rendered.contains("#1"));
    assert!(rendered.contains("POST /dup "));
}
