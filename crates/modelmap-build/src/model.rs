//! Model-type field synthesis shared by the class and generic builders.

use crate::naming;
use modelmap_schema::node::{Property, SourceType, Target, TypeRef};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

/// One `pub` field per property with a public getter. Related properties
/// use the destination-qualified model type; parameter-positional
/// properties use the `T{n}` slot of the argument position they close over.
pub(crate) fn field_defs(source: &SourceType, target: &Target) -> TokenStream {
    let mut fields = quote!();

    for property in source.properties() {
        if !property.has_getter {
            continue;
        }

        let name = format_ident!("{}", property.name);
        let ty = if property.from_type_param {
            let param = format_ident!("T{}", param_slot(source, property));
            if property.nullable {
                quote!(Option<#param>)
            } else {
                quote!(#param)
            }
        } else {
            field_type(property, target)
        };

        fields.extend(quote! {
            pub #name: #ty,
        });
    }

    fields
}

/// Synthesized generic parameter idents, one per written type argument.
/// Arity must track the argument list, not the property list, so two
/// instantiations never collapse into the same model type.
pub(crate) fn param_idents(source: &SourceType) -> Vec<Ident> {
    (0..source.type_ref.args.len())
        .map(|slot| format_ident!("T{slot}"))
        .collect()
}

/// The argument position a parameter-positional property closes over. The
/// recorded return type is the substituted argument, so a direct match;
/// a nullable property matches through the stripped `Option` wrapper.
pub(crate) fn param_slot(source: &SourceType, property: &Property) -> usize {
    source
        .type_ref
        .args
        .iter()
        .position(|arg| arg_matches(arg, &property.return_type))
        .unwrap_or(0)
}

/// Argument positions no getter property surfaces. The model carries a
/// phantom marker per such position to stay a distinct type per
/// instantiation.
pub(crate) fn unused_param_slots(source: &SourceType) -> Vec<usize> {
    (0..source.type_ref.args.len())
        .filter(|slot| {
            !source
                .properties()
                .iter()
                .any(|p| p.has_getter && p.from_type_param && param_slot(source, p) == *slot)
        })
        .collect()
}

fn arg_matches(arg: &TypeRef, return_type: &TypeRef) -> bool {
    arg == return_type
        || (arg.name == "Option" && arg.args.len() == 1 && arg.args[0] == *return_type)
}

fn field_type(property: &Property, target: &Target) -> TokenStream {
    let base = if property.is_related_in(&target.namespace) {
        naming::model_path(&target.namespace, &property.return_type.name)
    } else {
        naming::type_tokens(&property.return_type)
    };

    if property.nullable {
        quote!(Option<#base>)
    } else {
        base
    }
}
