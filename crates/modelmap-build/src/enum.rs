//! Synthesis for enumerations.
//!
//! Mapping functions are total: every variant gets an arm, and a guarded
//! catch-all turns any future unmatched addition into an "unknown enum
//! value" failure instead of a silent mis-mapping.

use crate::{Artifact, BuildError, naming, render};
use modelmap_schema::node::{SourceType, Target};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

pub(crate) fn build(
    source: &SourceType,
    target: &Target,
    out: &mut Vec<Artifact>,
) -> Result<(), BuildError> {
    let model_name = format!("{}Model", source.name);
    let mapper_name = format!("{}Mapper", source.name);
    let model_ident = format_ident!("{model_name}");
    let domain_path = naming::type_tokens(&source.type_ref);

    let mut variant_defs = quote!();
    let mut to_model_arms = quote!();
    let mut to_domain_arms = quote!();

    for variant in source.variants() {
        let name = format_ident!("{}", variant.name);

        match variant.value {
            Some(value) => {
                let ordinal = Literal::i64_unsuffixed(value);
                variant_defs.extend(quote!(#name = #ordinal,));
            }
            None => variant_defs.extend(quote!(#name,)),
        }

        to_model_arms.extend(quote! {
            #domain_path::#name => #model_ident::#name,
        });
        to_domain_arms.extend(quote! {
            #model_ident::#name => #domain_path::#name,
        });
    }

    let catch_all: TokenStream = quote! {
        #[allow(unreachable_patterns)]
        _ => panic!("unknown enum value"),
    };

    let model_tokens = quote! {
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum #model_ident {
            #variant_defs
        }
    };

    let mapper_tokens = quote! {
        use ::modelmap::{ToDomain, ToModel};

        impl ToModel for #domain_path {
            type Model = #model_ident;

            fn to_model(&self) -> #model_ident {
                match self {
                    #to_model_arms
                    #catch_all
                }
            }
        }

        impl ToDomain for #model_ident {
            type Domain = #domain_path;

            fn to_domain(&self) -> #domain_path {
                match self {
                    #to_domain_arms
                    #catch_all
                }
            }
        }
    };

    out.push(Artifact {
        filename: naming::filename(&target.namespace, &source.namespace, &model_name),
        source: render::source(model_tokens)?,
    });
    out.push(Artifact {
        filename: naming::filename(&target.namespace, &source.namespace, &mapper_name),
        source: render::source(mapper_tokens)?,
    });

    Ok(())
}
