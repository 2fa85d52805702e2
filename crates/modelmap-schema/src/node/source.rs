use crate::node::{Property, Shape, TypeInfo, TypeRef, Variant};
use serde::Serialize;
use std::hash::{Hash, Hasher};

///
/// Members
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Members {
    Props(Vec<Property>),
    Variants(Vec<Variant>),
}

///
/// SourceType
/// A whole mirrored type: short name, namespace, ordered members, and the
/// generic flags. Owned by the target that referenced it; two targets
/// listing the same type each hold their own copy because generated code is
/// namespace-scoped per target.
///

#[derive(Clone, Debug, Serialize)]
pub struct SourceType {
    /// The reference as listed, including closed generic arguments.
    pub type_ref: TypeRef,

    pub name: String,
    pub namespace: String,
    pub members: Members,
    pub is_generic: bool,
    pub is_open_generic: bool,
}

impl SourceType {
    /// Build a descriptor from a front-end handle. Returns `None` for an
    /// enum with no usable constants; such a type contributes nothing and
    /// the caller skips it silently.
    #[must_use]
    pub fn build(info: TypeInfo) -> Option<Self> {
        let type_ref = info.type_ref;
        let (members, is_generic, is_open_generic) = match info.shape {
            Shape::Enum { variants, .. } => {
                if variants.is_empty() {
                    return None;
                }
                let variants = variants.into_iter().map(Variant::build).collect();
                (Members::Variants(variants), false, false)
            }
            Shape::Struct {
                properties,
                is_generic,
                is_open_generic,
                ..
            } => {
                let props = properties.into_iter().map(Property::build).collect();
                (Members::Props(props), is_generic, is_open_generic)
            }
        };

        Some(Self {
            name: type_ref.name.clone(),
            namespace: type_ref.namespace.clone(),
            type_ref,
            members,
            is_generic,
            is_open_generic,
        })
    }

    /// Full dotted display name, the identity used for de-duplication and
    /// relatedness.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.type_ref.display()
    }

    #[must_use]
    pub fn properties(&self) -> &[Property] {
        match &self.members {
            Members::Props(props) => props,
            Members::Variants(_) => &[],
        }
    }

    pub fn properties_mut(&mut self) -> &mut [Property] {
        match &mut self.members {
            Members::Props(props) => props,
            Members::Variants(_) => &mut [],
        }
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        match &self.members {
            Members::Variants(variants) => variants,
            Members::Props(_) => &[],
        }
    }

    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.members, Members::Variants(_))
    }
}

impl PartialEq for SourceType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.namespace == other.namespace
            && self.members == other.members
    }
}

impl Eq for SourceType {}

impl Hash for SourceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.namespace.hash(state);
        self.members.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{TypeRefKind, VariantInfo};

    fn enum_info(name: &str, variants: Vec<VariantInfo>) -> TypeInfo {
        TypeInfo {
            type_ref: TypeRef::new(name, "domain", TypeRefKind::Enum),
            shape: Shape::Enum {
                variants,
                record_like: false,
            },
        }
    }

    #[test]
    fn empty_enum_is_skipped() {
        assert!(SourceType::build(enum_info("Empty", vec![])).is_none());
    }

    #[test]
    fn enum_members_preserve_declaration_order() {
        let info = enum_info(
            "AddressType",
            vec![
                VariantInfo {
                    name: "Business".into(),
                    value: Some(0),
                },
                VariantInfo {
                    name: "Home".into(),
                    value: Some(1),
                },
            ],
        );

        let ty = SourceType::build(info).unwrap();
        assert!(ty.is_enum());
        let names: Vec<_> = ty.variants().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Business", "Home"]);
    }
}
