//! Mapper-body synthesis shared by the class and generic builders.
//!
//! `to_model` assigns every property with a public getter; `to_domain` only
//! those with both accessors. Getter-only properties intentionally do not
//! round-trip.

use modelmap_schema::node::{Property, SourceType, Target};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

pub(crate) struct MapperBodies {
    pub to_model: TokenStream,
    pub to_domain: TokenStream,

    /// Every source field appears in the `to_domain` literal. When false
    /// the literal needs a `..Default::default()` tail.
    pub domain_complete: bool,
}

pub(crate) fn populate(source: &SourceType, target: &Target) -> MapperBodies {
    let mut to_model = quote!();
    let mut to_domain = quote!();
    let mut domain_complete = true;

    for property in source.properties() {
        if !property.has_getter {
            domain_complete = false;
            continue;
        }

        let name = format_ident!("{}", property.name);
        let related = property.is_related_in(&target.namespace);

        let model_expr = assignment(&name, related, property, Direction::ToModel);
        to_model.extend(quote!(#name: #model_expr,));

        if property.has_setter {
            let domain_expr = assignment(&name, related, property, Direction::ToDomain);
            to_domain.extend(quote!(#name: #domain_expr,));
        } else {
            domain_complete = false;
        }
    }

    MapperBodies {
        to_model,
        to_domain,
        domain_complete,
    }
}

#[derive(Clone, Copy)]
enum Direction {
    ToModel,
    ToDomain,
}

fn assignment(
    name: &proc_macro2::Ident,
    related: bool,
    property: &Property,
    direction: Direction,
) -> TokenStream {
    if !related {
        return quote!(self.#name.clone());
    }

    match (direction, property.nullable) {
        (Direction::ToModel, false) => quote!(self.#name.to_model()),
        (Direction::ToModel, true) => {
            quote!(self.#name.as_ref().map(::modelmap::ToModel::to_model))
        }
        (Direction::ToDomain, false) => quote!(self.#name.to_domain()),
        (Direction::ToDomain, true) => {
            quote!(self.#name.as_ref().map(::modelmap::ToDomain::to_domain))
        }
    }
}
