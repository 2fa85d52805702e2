//! Code synthesis for modelmap.
//!
//! Takes the target descriptors built from validated declarations and emits
//! one model + mapper artifact pair per processed type (per group for
//! generic instantiations). The engine performs no I/O: artifacts are
//! returned to the host, which decides where the text lands.

mod cancel;
mod class;
mod r#enum;
mod generic;
mod mapper;
mod model;
pub mod naming;
mod render;

pub use cancel::{CancelSource, CancelToken};

use modelmap_schema::{node::{SourceType, Target}, relate};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    /// Two targets claim the same destination namespace. Fail-closed: no
    /// output is emitted for any target in the compilation, because the
    /// colliding artifacts would silently overwrite each other.
    #[error("duplicate destination namespace '{namespace}' across target declarations")]
    DuplicateTargetNamespace { namespace: String },

    #[error("generation cancelled")]
    Cancelled,

    #[error("generated source failed to parse: {0}")]
    Render(#[from] syn::Error),
}

///
/// Artifact
/// One named generated source file.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    pub filename: String,
    pub source: String,
}

/// Generate model and mapper artifacts for every target.
pub fn generate(targets: Vec<Target>) -> Result<Vec<Artifact>, BuildError> {
    generate_with_cancel(targets, &CancelToken::default())
}

/// As [`generate`], with cooperative cancellation checked before the
/// target loop and once per target. No artifact of an interrupted target
/// is committed.
pub fn generate_with_cancel(
    targets: Vec<Target>,
    cancel: &CancelToken,
) -> Result<Vec<Artifact>, BuildError> {
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    check_unique_namespaces(&targets)?;

    if cancel.is_cancelled() {
        return Err(BuildError::Cancelled);
    }

    let mut artifacts = Vec::new();
    for mut target in targets {
        if cancel.is_cancelled() {
            return Err(BuildError::Cancelled);
        }

        // Relation resolution must complete before any synthesis for the
        // target: a type referenced by a property may appear later in the
        // same argument list.
        relate::resolve(&mut target);

        let mut staged = Vec::new();
        for source in &target.types {
            if source.is_enum() {
                r#enum::build(source, &target, &mut staged)?;
            } else if !source.is_generic {
                class::build(source, &target, &mut staged)?;
            }
        }
        for group in group_instantiations(&target.types) {
            generic::build_group(&group, &target, &mut staged)?;
        }

        // Commit only once the whole target processed cleanly.
        artifacts.append(&mut staged);
    }

    Ok(artifacts)
}

// The global barrier: runs to completion before any per-target synthesis.
fn check_unique_namespaces(targets: &[Target]) -> Result<(), BuildError> {
    let mut seen = BTreeSet::new();
    for target in targets {
        if !seen.insert(target.namespace.as_str()) {
            return Err(BuildError::DuplicateTargetNamespace {
                namespace: target.namespace.clone(),
            });
        }
    }
    Ok(())
}

/// Group closed instantiations by their open definition, preserving
/// first-seen order. Passed to the generic synthesizer explicitly; there is
/// no process-wide cache.
fn group_instantiations(types: &[SourceType]) -> Vec<Vec<&SourceType>> {
    let mut keys: Vec<String> = Vec::new();
    let mut groups: Vec<Vec<&SourceType>> = Vec::new();

    for source in types.iter().filter(|s| s.is_generic && !s.is_enum()) {
        let key = source.type_ref.definition_name();
        match keys.iter().position(|k| *k == key) {
            Some(index) => groups[index].push(source),
            None => {
                keys.push(key);
                groups.push(vec![source]);
            }
        }
    }

    groups
}
