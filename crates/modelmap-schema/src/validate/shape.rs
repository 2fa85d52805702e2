use crate::{
    diagnostic::{Diagnostic, DiagnosticCode, Diagnostics},
    node::{Declaration, Shape},
};

/// Reject shapes the synthesizers cannot mirror: record-like types (tuple
/// and unit structs, enums with payload variants) and open generic
/// references.
pub fn validate_shapes(declarations: &[Declaration], diags: &mut Diagnostics) {
    for declaration in declarations {
        for info in &declaration.types {
            let display = info.type_ref.display();
            match &info.shape {
                Shape::Struct {
                    is_open_generic,
                    record_like,
                    ..
                } => {
                    if *record_like {
                        diags.add(Diagnostic::new(
                            DiagnosticCode::RecordLikeType,
                            declaration.namespace.clone(),
                            format!("record-like type '{display}' cannot be mirrored"),
                        ));
                    }
                    if *is_open_generic {
                        diags.add(Diagnostic::new(
                            DiagnosticCode::OpenGenericReference,
                            declaration.namespace.clone(),
                            format!("open generic reference '{display}' must close its arguments"),
                        ));
                    }
                }
                Shape::Enum { record_like, .. } => {
                    if *record_like {
                        diags.add(Diagnostic::new(
                            DiagnosticCode::RecordLikeType,
                            declaration.namespace.clone(),
                            format!("enum '{display}' carries payload variants and cannot be mirrored"),
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{TypeInfo, TypeRef, TypeRefKind};

    #[test]
    fn flags_record_like_and_open_generic() {
        let tuple_struct = TypeInfo {
            type_ref: TypeRef::new("Pair", "domain", TypeRefKind::Struct),
            shape: Shape::Struct {
                properties: vec![],
                is_generic: false,
                is_open_generic: false,
                record_like: true,
            },
        };
        let open_generic = TypeInfo {
            type_ref: TypeRef::new("Registration", "domain", TypeRefKind::Struct),
            shape: Shape::Struct {
                properties: vec![],
                is_generic: true,
                is_open_generic: true,
                record_like: false,
            },
        };

        let mut diags = Diagnostics::new();
        validate_shapes(
            &[Declaration {
                namespace: "api".into(),
                types: vec![tuple_struct, open_generic],
            }],
            &mut diags,
        );

        assert!(diags.has_code(DiagnosticCode::RecordLikeType));
        assert!(diags.has_code(DiagnosticCode::OpenGenericReference));
        assert_eq!(diags.len(), 2);
    }
}
