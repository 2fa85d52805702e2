use crate::{
    diagnostic::{Diagnostic, DiagnosticCode, Diagnostics},
    node::Declaration,
};
use std::collections::BTreeMap;

/// At most one annotated declaration per namespace: two declarations in the
/// same namespace would both claim it as their destination.
pub fn validate_unique_declarations(declarations: &[Declaration], diags: &mut Diagnostics) {
    let mut by_namespace: BTreeMap<&str, usize> = BTreeMap::new();

    for declaration in declarations {
        *by_namespace.entry(declaration.namespace.as_str()).or_default() += 1;
    }

    for (namespace, count) in by_namespace {
        if count > 1 {
            diags.add(Diagnostic::new(
                DiagnosticCode::DuplicateTargetDeclaration,
                namespace,
                format!("{count} target declarations found in namespace '{namespace}'"),
            ));
        }
    }
}

/// Two listed types sharing a short name are ambiguous at the call site,
/// even though output filenames would disambiguate them.
pub fn validate_short_names(declarations: &[Declaration], diags: &mut Diagnostics) {
    for declaration in declarations {
        let mut by_name: BTreeMap<&str, &str> = BTreeMap::new();

        for info in &declaration.types {
            let short = info.type_ref.name.as_str();
            let namespace = info.type_ref.namespace.as_str();
            if let Some(prev) = by_name.insert(short, namespace) {
                if prev != namespace {
                    diags.add(Diagnostic::new(
                        DiagnosticCode::DuplicateShortName,
                        declaration.namespace.clone(),
                        format!(
                            "types '{prev}.{short}' and '{namespace}.{short}' share the short name '{short}'"
                        ),
                    ));
                }
            }
        }
    }
}
