//! Synthesis for generic struct types.
//!
//! All closed instantiations of one open definition arrive as a group: the
//! model is rendered once, generic over one `T{n}` slot per written type
//! argument, and the mapper artifact carries one `ToModel`/`ToDomain` impl
//! pair per distinct instantiation. Type arguments close to the related
//! model type when the argument is itself mirrored, and are carried
//! verbatim otherwise; nested generic arguments are not recursively
//! mirrored. An argument no getter property surfaces gets a phantom marker
//! field, keeping each closed model a distinct type.

use crate::{Artifact, BuildError, mapper, model, naming, render};
use modelmap_schema::node::{SourceType, Target, TypeRef};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

pub(crate) fn build_group(
    group: &[&SourceType],
    target: &Target,
    out: &mut Vec<Artifact>,
) -> Result<(), BuildError> {
    let first = group[0];
    let model_name = format!("{}Model", first.name);
    let mapper_name = format!("{}Mapper", first.name);
    let model_ident = format_ident!("{model_name}");

    let params = model::param_idents(first);
    let fields = model::field_defs(first, target);
    let markers = marker_fields(first);
    let model_tokens = quote! {
        #[derive(Clone, Debug)]
        pub struct #model_ident<#(#params),*> {
            #fields
            #markers
        }
    };

    let mut impls = quote!();
    for instantiation in group {
        impls.extend(instantiation_impls(instantiation, target, &model_ident));
    }

    let mapper_tokens = quote! {
        use ::modelmap::{ToDomain, ToModel};

        #impls
    };

    out.push(Artifact {
        filename: naming::filename(&target.namespace, &first.namespace, &model_name),
        source: render::source(model_tokens)?,
    });
    out.push(Artifact {
        filename: naming::filename(&target.namespace, &first.namespace, &mapper_name),
        source: render::source(mapper_tokens)?,
    });

    Ok(())
}

fn instantiation_impls(
    source: &SourceType,
    target: &Target,
    model_ident: &proc_macro2::Ident,
) -> TokenStream {
    let domain_ty = naming::type_tokens(&source.type_ref);

    // Struct literals cannot carry generic arguments; the annotated return
    // type closes them.
    let domain_literal = {
        let bare = TypeRef {
            args: Vec::new(),
            ..source.type_ref.clone()
        };
        naming::type_tokens(&bare)
    };

    let model_args: Vec<TokenStream> = source
        .type_ref
        .args
        .iter()
        .map(|arg| closed_model_arg(arg, target))
        .collect();
    let model_ty = quote!(#model_ident<#(#model_args),*>);

    let bodies = mapper::populate(source, target);
    let to_model = &bodies.to_model;
    let markers = marker_inits(source);
    let to_domain = &bodies.to_domain;
    let domain_tail = if bodies.domain_complete {
        quote!()
    } else {
        quote!(..Default::default())
    };

    quote! {
        impl ToModel for #domain_ty {
            type Model = #model_ty;

            fn to_model(&self) -> #model_ty {
                #model_ident {
                    #to_model
                    #markers
                }
            }
        }

        impl ToDomain for #model_ty {
            type Domain = #domain_ty;

            fn to_domain(&self) -> #domain_ty {
                #domain_literal {
                    #to_domain
                    #domain_tail
                }
            }
        }
    }
}

fn marker_fields(source: &SourceType) -> TokenStream {
    model::unused_param_slots(source)
        .into_iter()
        .map(|slot| {
            let name = format_ident!("_t{slot}");
            let param = format_ident!("T{slot}");
            quote!(pub #name: ::std::marker::PhantomData<#param>,)
        })
        .collect()
}

fn marker_inits(source: &SourceType) -> TokenStream {
    model::unused_param_slots(source)
        .into_iter()
        .map(|slot| {
            let name = format_ident!("_t{slot}");
            quote!(#name: ::std::marker::PhantomData,)
        })
        .collect()
}

/// Close one model type argument: the related model type when the argument
/// is mirrored in this target, the argument as written otherwise.
fn closed_model_arg(arg: &TypeRef, target: &Target) -> TokenStream {
    if target.related.iter().any(|name| *name == arg.display()) {
        naming::model_path(&target.namespace, &arg.name)
    } else {
        naming::type_tokens(arg)
    }
}
