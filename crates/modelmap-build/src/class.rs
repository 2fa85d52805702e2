//! Synthesis for plain (non-generic) struct types.

use crate::{Artifact, BuildError, mapper, model, naming, render};
use modelmap_schema::node::{SourceType, Target};
use quote::{format_ident, quote};

pub(crate) fn build(
    source: &SourceType,
    target: &Target,
    out: &mut Vec<Artifact>,
) -> Result<(), BuildError> {
    let model_name = format!("{}Model", source.name);
    let mapper_name = format!("{}Mapper", source.name);
    let model_ident = format_ident!("{model_name}");

    let fields = model::field_defs(source, target);
    let model_tokens = quote! {
        #[derive(Clone, Debug)]
        pub struct #model_ident {
            #fields
        }
    };

    let domain_path = naming::type_tokens(&source.type_ref);
    let bodies = mapper::populate(source, target);
    let to_model = &bodies.to_model;
    let to_domain = &bodies.to_domain;
    let domain_tail = if bodies.domain_complete {
        quote!()
    } else {
        quote!(..Default::default())
    };

    let mapper_tokens = quote! {
        use ::modelmap::{ToDomain, ToModel};

        impl ToModel for #domain_path {
            type Model = #model_ident;

            fn to_model(&self) -> #model_ident {
                #model_ident {
                    #to_model
                }
            }
        }

        impl ToDomain for #model_ident {
            type Domain = #domain_path;

            fn to_domain(&self) -> #domain_path {
                #domain_path {
                    #to_domain
                    #domain_tail
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
