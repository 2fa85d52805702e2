//! modelmap
//!
//! Compile-time synthesis of mirrored model types and bidirectional mappers
//! for annotated domain types. The pipeline runs in three stages:
//!
//! 1. [`modelmap_syn`] parses Rust source text into target declarations.
//! 2. [`modelmap_schema`] validates them and builds the descriptor tree.
//! 3. [`modelmap_build`] renders one model + mapper artifact pair per
//!    processed type.
//!
//! Generated mapper code references the [`ToModel`] and [`ToDomain`] traits
//! from this crate, so hosts that compile the artifacts depend on `modelmap`
//! itself.

mod traits;

pub use traits::{ToDomain, ToModel};

pub use modelmap_build as build;
pub use modelmap_schema as schema;
pub use modelmap_syn as front;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{ToDomain, ToModel};
    pub use modelmap_build::{Artifact, BuildError, CancelSource, CancelToken};
    pub use modelmap_schema::prelude::*;
}

/// Run the full pipeline over in-memory source texts: parse, validate,
/// skip flagged declarations, build targets, generate artifacts.
pub fn generate_sources(sources: &[&str]) -> Result<GenerateOutput, PipelineError> {
    let declarations = modelmap_syn::parse_sources(sources)?;
    let diagnostics = modelmap_schema::validate::validate_declarations(&declarations);
    let retained = modelmap_schema::validate::skip_flagged(declarations, &diagnostics);

    let targets = retained
        .into_iter()
        .map(modelmap_schema::node::Target::build)
        .collect();
    let artifacts = modelmap_build::generate(targets)?;

    Ok(GenerateOutput {
        artifacts,
        diagnostics,
    })
}

///
/// GenerateOutput
/// Artifacts plus the non-fatal diagnostics raised while producing them.
///

#[derive(Debug)]
pub struct GenerateOutput {
    pub artifacts: Vec<modelmap_build::Artifact>,
    pub diagnostics: modelmap_schema::diagnostic::Diagnostics,
}

///
/// PipelineError
///

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Front(#[from] modelmap_syn::FrontError),

    #[error(transparent)]
    Build(#[from] modelmap_build::BuildError),
}
