//! Pre-generation validation over front-end declarations.
//!
//! Four structural gates run before any descriptor reaches the
//! synthesizers. A declaration flagged by any pass is skipped entirely;
//! generation for the remaining declarations proceeds.

pub mod naming;
pub mod shape;

use crate::{diagnostic::Diagnostics, node::Declaration};

/// Run all validation passes in a staged, deterministic order.
#[must_use]
pub fn validate_declarations(declarations: &[Declaration]) -> Diagnostics {
    let mut diags = Diagnostics::new();

    naming::validate_unique_declarations(declarations, &mut diags);
    naming::validate_short_names(declarations, &mut diags);
    shape::validate_shapes(declarations, &mut diags);

    diags
}

/// Drop every declaration whose namespace carries a diagnostic.
#[must_use]
pub fn skip_flagged(declarations: Vec<Declaration>, diags: &Diagnostics) -> Vec<Declaration> {
    declarations
        .into_iter()
        .filter(|decl| !diags.flags_namespace(&decl.namespace))
        .collect()
}
