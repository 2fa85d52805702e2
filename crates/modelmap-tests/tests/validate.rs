//! Validator diagnostics and skip semantics, end to end.

use modelmap_schema::diagnostic::DiagnosticCode;
use modelmap_tests::generate_with_diagnostics;

#[test]
fn duplicate_declarations_in_one_namespace_are_flagged() {
    let output = generate_with_diagnostics(&[
        "mod domain { pub struct Person { pub name: String } }
         mod api {
             #[model_target(types(domain::Person))]
             struct A;
             #[model_target(types(domain::Person))]
             struct B;
         }",
    ]);

    assert!(output.diagnostics.has_code(DiagnosticCode::DuplicateTargetDeclaration));
    assert!(output.artifacts.is_empty());
}

#[test]
fn record_like_types_are_flagged() {
    let output = generate_with_diagnostics(&[
        "mod domain { pub struct Point(pub f64, pub f64); }
         mod api {
             #[model_target(types(domain::Point))]
             struct Mappings;
         }",
    ]);

    assert!(output.diagnostics.has_code(DiagnosticCode::RecordLikeType));
    assert!(output.artifacts.is_empty());
}

#[test]
fn payload_enums_are_record_like() {
    let output = generate_with_diagnostics(&[
        "mod domain { pub enum Event { Opened, Closed(String) } }
         mod api {
             #[model_target(types(domain::Event))]
             struct Mappings;
         }",
    ]);

    assert!(output.diagnostics.has_code(DiagnosticCode::RecordLikeType));
}

#[test]
fn open_generic_references_are_flagged() {
    let output = generate_with_diagnostics(&[
        "mod domain { pub struct Registration<T> { pub item: T } }
         mod api {
             #[model_target(types(domain::Registration))]
             struct Mappings;
         }",
    ]);

    assert!(output.diagnostics.has_code(DiagnosticCode::OpenGenericReference));
    assert!(output.artifacts.is_empty());
}

#[test]
fn short_name_collisions_within_a_declaration_are_flagged() {
    let output = generate_with_diagnostics(&[
        "mod a { pub struct Person { pub name: String } }
         mod b { pub struct Person { pub age: u32 } }
         mod api {
             #[model_target(types(a::Person, b::Person))]
             struct Mappings;
         }",
    ]);

    assert!(output.diagnostics.has_code(DiagnosticCode::DuplicateShortName));
    assert!(output.artifacts.is_empty());
}

#[test]
fn listing_the_same_type_twice_is_not_a_collision() {
    let output = generate_with_diagnostics(&[
        "mod domain { pub struct Person { pub name: String } }
         mod api {
             #[model_target(types(domain::Person, domain::Person))]
             struct Mappings;
         }",
    ]);

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.artifacts.len(), 2);
}

#[test]
fn flagged_declarations_do_not_block_clean_ones() {
    let output = generate_with_diagnostics(&[
        "mod domain {
             pub struct Point(pub f64, pub f64);
             pub struct Person { pub name: String }
         }
         mod api {
             #[model_target(types(domain::Point))]
             struct Broken;
         }
         mod admin {
             #[model_target(types(domain::Person))]
             struct Clean;
         }",
    ]);

    assert!(output.diagnostics.flags_namespace("api"));
    assert!(!output.diagnostics.flags_namespace("admin"));

    let names: Vec<&str> = output.artifacts.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(
        names,
        [
            "admin.domain.PersonModel.g.rs",
            "admin.domain.PersonMapper.g.rs",
        ]
    );
}
