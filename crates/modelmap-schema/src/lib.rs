//! Descriptor data model for modelmap.
//!
//! ## Crate layout
//! - `node`: member, type, and target descriptors plus the front-end input
//!   contract (`Declaration`, `TypeInfo`, `TypeRef`).
//! - `relate`: the relation resolver that marks nested-mapping properties.
//! - `validate`: pre-generation validation passes over declarations.
//! - `diagnostic`: stable-coded diagnostics and their aggregate.

pub mod diagnostic;
pub mod node;
pub mod relate;
pub mod validate;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        diagnostic::{Diagnostic, DiagnosticCode, Diagnostics},
        node::*,
    };
    pub use serde::Serialize;
}
