//! Front-end for modelmap.
//!
//! Parses Rust source text, indexes struct and enum definitions by dotted
//! module path, and resolves `#[model_target(types(...))]` declarations
//! into the descriptor input contract. Purely syntactic: nothing here
//! touches the filesystem or the compiler.

mod resolve;
mod visit;

use modelmap_schema::node::Declaration;
use thiserror::Error as ThisError;

///
/// FrontError
///

#[derive(Debug, ThisError)]
pub enum FrontError {
    #[error("failed to parse source #{index}: {message}")]
    Parse { index: usize, message: String },

    #[error("malformed #[model_target] attribute in '{namespace}': {message}")]
    Attribute { namespace: String, message: String },

    #[error("cannot resolve listed type '{path}' in target '{namespace}'")]
    UnresolvableType { path: String, namespace: String },

    #[error("listed or member type in target '{namespace}' is not a plain type path")]
    UnsupportedTypeExpression { namespace: String },

    #[error("wrong number of generic arguments for '{path}' in target '{namespace}'")]
    GenericArity { path: String, namespace: String },
}

/// Parse each source text and resolve every target declaration found
/// across all of them. Declarations may reference types defined in any
/// source, in any order.
pub fn parse_sources(sources: &[&str]) -> Result<Vec<Declaration>, FrontError> {
    let mut index = visit::Index::default();
    for (i, text) in sources.iter().enumerate() {
        let file = syn::parse_file(text).map_err(|err| FrontError::Parse {
            index: i,
            message: err.to_string(),
        })?;
        visit::collect(&file, &mut index)?;
    }

    resolve::declarations(&index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_may_span_sources() {
        let declarations = parse_sources(&[
            "mod domain { pub struct Person { pub name: String } }",
            "mod api { #[model_target(types(domain::Person))] struct Mappings; }",
        ])
        .unwrap();

        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].namespace, "api");
        assert_eq!(declarations[0].types[0].type_ref.display(), "domain.Person");
    }

    #[test]
    fn unparsable_source_reports_its_position() {
        let err = parse_sources(&["fn broken {", ""]).unwrap_err();
        assert!(matches!(err, FrontError::Parse { index: 0, .. }));
    }

    #[test]
    fn sources_without_targets_yield_nothing() {
        let declarations =
            parse_sources(&["mod domain { pub struct Person { pub name: String } }"]).unwrap();
        assert!(declarations.is_empty());
    }
}
