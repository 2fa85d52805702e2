use crate::node::{TypeRef, TypeRefKind};
use serde::Serialize;

///
/// Declaration
/// One annotated declaration as exposed by the front-end: the dotted
/// namespace textually enclosing it, and the listed type handles in source
/// order. Syntactic duplicates are not removed here; `Target::build`
/// collapses them by display name.
///

#[derive(Clone, Debug, Serialize)]
pub struct Declaration {
    pub namespace: String,
    pub types: Vec<TypeInfo>,
}

///
/// TypeInfo
/// A resolved type handle: the reference (with closed arguments, if any)
/// plus the shape of the underlying definition.
///

#[derive(Clone, Debug, Serialize)]
pub struct TypeInfo {
    pub type_ref: TypeRef,
    pub shape: Shape,
}

impl TypeInfo {
    #[must_use]
    pub fn kind(&self) -> TypeRefKind {
        self.type_ref.kind
    }
}

///
/// Shape
///

#[derive(Clone, Debug, Serialize)]
pub enum Shape {
    Struct {
        properties: Vec<PropertyInfo>,
        is_generic: bool,

        /// The reference names a generic definition without closing its
        /// arguments. Only meaningful pre-specialization.
        is_open_generic: bool,

        /// Tuple or unit struct: members cannot be mirrored as named
        /// properties. Flagged by the record validator, not by descriptor
        /// construction.
        record_like: bool,
    },

    Enum {
        variants: Vec<VariantInfo>,

        /// At least one variant carries a payload.
        record_like: bool,
    },
}

///
/// PropertyInfo
///

#[derive(Clone, Debug, Serialize)]
pub struct PropertyInfo {
    pub name: String,

    /// Declared type with any `Option` wrapper already stripped.
    pub type_ref: TypeRef,

    /// The declared type was `Option<..>`.
    pub nullable: bool,

    pub has_getter: bool,
    pub has_setter: bool,

    /// In the open definition this property's type is exactly one of the
    /// definition's own generic parameters.
    pub from_type_param: bool,
}

///
/// VariantInfo
///

#[derive(Clone, Debug, Serialize)]
pub struct VariantInfo {
    pub name: String,

    /// Explicit discriminant, or the implicit one (previous + 1, from 0).
    pub value: Option<i64>,
}
