//! Deterministic output identifiers and type-path rendering.
//!
//! Filenames are `<destination>.<source namespace>.<GeneratedName>.g.rs` —
//! injective across a compilation, so two source types with the same short
//! name in different namespaces never collide at the output level. All
//! artifacts of one target are meant to be included in its destination
//! module.

use modelmap_schema::node::{TypeRef, TypeRefKind};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

pub const GENERATED_EXTENSION: &str = "g.rs";

#[must_use]
pub fn filename(destination: &str, source_namespace: &str, generated_name: &str) -> String {
    format!("{destination}.{source_namespace}.{generated_name}.{GENERATED_EXTENSION}")
}

/// Render a type reference as the type expression generated code uses.
/// Declared types resolve from the crate root; anything else is emitted
/// as written.
pub(crate) fn type_tokens(ty: &TypeRef) -> TokenStream {
    let mut path = match ty.kind {
        TypeRefKind::Struct | TypeRefKind::Enum => {
            let segments = namespace_idents(&ty.namespace);
            let name = format_ident!("{}", ty.name);
            quote!(crate:: #(#segments::)* #name)
        }
        TypeRefKind::Other => {
            let segments = namespace_idents(&ty.namespace);
            let name = format_ident!("{}", ty.name);
            quote!(#(#segments::)* #name)
        }
    };

    if !ty.args.is_empty() {
        let args = ty.args.iter().map(type_tokens);
        path.extend(quote!(<#(#args),*>));
    }

    path
}

/// `crate::<destination>::<Short>Model` — the path of a related model type.
pub(crate) fn model_path(destination: &str, short_name: &str) -> TokenStream {
    let segments = namespace_idents(destination);
    let name = format_ident!("{short_name}Model");
    quote!(crate:: #(#segments::)* #name)
}

fn namespace_idents(namespace: &str) -> Vec<proc_macro2::Ident> {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format_ident!("{segment}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_fully_qualified() {
        assert_eq!(
            filename("api", "domain", "PersonModel"),
            "api.domain.PersonModel.g.rs"
        );
    }

    #[test]
    fn declared_types_resolve_from_crate_root() {
        let ty = TypeRef::new("Person", "domain", TypeRefKind::Struct);
        assert_eq!(type_tokens(&ty).to_string(), "crate :: domain :: Person");
    }

    #[test]
    fn other_types_render_as_written() {
        let bare = TypeRef::new("String", "", TypeRefKind::Other);
        assert_eq!(type_tokens(&bare).to_string(), "String");

        let vec = TypeRef::new("Vec", "", TypeRefKind::Other)
            .with_args(vec![TypeRef::new("Person", "domain", TypeRefKind::Struct)]);
        assert_eq!(
            type_tokens(&vec).to_string(),
            "Vec < crate :: domain :: Person >"
        );
    }

    #[test]
    fn model_path_is_destination_qualified() {
        assert_eq!(
            model_path("api", "Person").to_string(),
            "crate :: api :: PersonModel"
        );
    }
}
