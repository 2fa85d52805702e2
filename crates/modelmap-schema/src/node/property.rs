use crate::node::{PropertyInfo, TypeRef};
use serde::Serialize;
use std::hash::{Hash, Hasher};

///
/// Property
/// One mirrored property of a source struct. Identity is structural, not
/// referential: the incremental cache must see "no real change" across
/// recompilations, so equality covers exactly the fields that affect
/// generated output identity (name, accessor flags, return-type name and
/// namespace).
///

#[derive(Clone, Debug, Serialize)]
pub struct Property {
    pub name: String,

    /// Declared return type, `Option`-stripped; `nullable` records the
    /// stripped wrapper.
    pub return_type: TypeRef,

    pub nullable: bool,
    pub has_getter: bool,
    pub has_setter: bool,
    pub from_type_param: bool,

    /// Destination namespaces in which this property's return type is
    /// itself a mirrored type. Populated by the relation resolver after
    /// construction.
    pub related_namespaces: Vec<String>,
}

impl Property {
    #[must_use]
    pub fn build(info: PropertyInfo) -> Self {
        Self {
            name: info.name,
            return_type: info.type_ref,
            nullable: info.nullable,
            has_getter: info.has_getter,
            has_setter: info.has_setter,
            from_type_param: info.from_type_param,
            related_namespaces: Vec::new(),
        }
    }

    pub fn mark_related_in(&mut self, namespace: &str) {
        self.related_namespaces.push(namespace.to_string());
    }

    #[must_use]
    pub fn is_related_in(&self, namespace: &str) -> bool {
        self.related_namespaces.iter().any(|ns| ns == namespace)
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.has_getter == other.has_getter
            && self.has_setter == other.has_setter
            && self.name == other.name
            && self.return_type.name == other.return_type.name
            && self.return_type.namespace == other.return_type.namespace
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.has_getter.hash(state);
        self.has_setter.hash(state);
        self.name.hash(state);
        self.return_type.name.hash(state);
        self.return_type.namespace.hash(state);
    }
}
