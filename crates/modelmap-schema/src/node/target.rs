use crate::node::{Declaration, SourceType};
use serde::Serialize;
use std::hash::{Hash, Hasher};

///
/// Target
/// One annotated declaration: the destination namespace generated code is
/// emitted into, the de-duplicated ordered list of contained types, and the
/// display names of those types ("related types") used by the relation
/// resolver.
///

#[derive(Clone, Debug, Serialize)]
pub struct Target {
    pub namespace: String,
    pub types: Vec<SourceType>,

    /// Display names of every retained contained type, in order.
    pub related: Vec<String>,
}

impl Target {
    /// Duplicates by display name collapse to the first occurrence;
    /// construction failures (empty enums) are skipped without trace.
    #[must_use]
    pub fn build(declaration: Declaration) -> Self {
        let mut related: Vec<String> = Vec::with_capacity(declaration.types.len());
        let mut types: Vec<SourceType> = Vec::with_capacity(declaration.types.len());

        for info in declaration.types {
            let name = info.type_ref.display();
            if related.contains(&name) {
                continue;
            }
            let Some(source) = SourceType::build(info) else {
                continue;
            };
            types.push(source);
            related.push(name);
        }

        Self {
            namespace: declaration.namespace,
            types,
            related,
        }
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
            && self.related == other.related
            && self.types == other.types
    }
}

impl Eq for Target {}

impl Hash for Target {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.related.hash(state);
        self.types.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{PropertyInfo, Shape, TypeInfo, TypeRef, TypeRefKind};

    fn struct_info(name: &str) -> TypeInfo {
        TypeInfo {
            type_ref: TypeRef::new(name, "domain", TypeRefKind::Struct),
            shape: Shape::Struct {
                properties: vec![PropertyInfo {
                    name: "id".into(),
                    type_ref: TypeRef::new("u64", "", TypeRefKind::Other),
                    nullable: false,
                    has_getter: true,
                    has_setter: true,
                    from_type_param: false,
                }],
                is_generic: false,
                is_open_generic: false,
                record_like: false,
            },
        }
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let target = Target::build(Declaration {
            namespace: "api".into(),
            types: vec![struct_info("Person"), struct_info("Person")],
        });

        assert_eq!(target.types.len(), 1);
        assert_eq!(target.related, ["domain.Person"]);
    }

    #[test]
    fn descriptors_serialize_for_snapshots() {
        let target = Target::build(Declaration {
            namespace: "api".into(),
            types: vec![struct_info("Person")],
        });

        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value["namespace"], "api");
        assert_eq!(value["related"][0], "domain.Person");
    }

    #[test]
    fn skipped_types_do_not_enter_related_list() {
        let empty_enum = TypeInfo {
            type_ref: TypeRef::new("Empty", "domain", TypeRefKind::Enum),
            shape: Shape::Enum {
                variants: vec![],
                record_like: false,
            },
        };

        let target = Target::build(Declaration {
            namespace: "api".into(),
            types: vec![empty_enum, struct_info("Person")],
        });

        assert_eq!(target.related, ["domain.Person"]);
    }
}
