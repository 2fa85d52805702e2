//! Relation resolution.
//!
//! Marks every struct property whose declared return type is itself listed
//! in the owning target, so synthesis wires a nested mapper call instead of
//! a verbatim assignment. Must run after all of a target's contained types
//! are built (a type referenced by a property may appear later in the same
//! argument list) and before any synthesis for that target.

use crate::node::Target;

/// Mark related properties across all contained types of a target.
pub fn resolve(target: &mut Target) {
    let namespace = target.namespace.clone();
    let related = target.related.clone();

    for source in &mut target.types {
        for property in source.properties_mut() {
            let display = property.return_type.display();
            if related.iter().any(|name| *name == display) {
                property.mark_related_in(&namespace);
            }
        }
    }
}
