//! Token-stream rendering.
//!
//! Synthesizers assemble typed token fragments; this module is the single
//! place they become text. Parsing through `syn` before pretty-printing
//! guarantees every emitted artifact is syntactically valid Rust, and
//! `prettyplease` output is deterministic, so identical descriptors yield
//! byte-identical artifacts.

use proc_macro2::TokenStream;

pub(crate) const GENERATED_HEADER: &str = "// @generated by modelmap\n";

pub(crate) fn source(tokens: TokenStream) -> Result<String, syn::Error> {
    let file: syn::File = syn::parse2(tokens)?;
    Ok(format!("{GENERATED_HEADER}{}", prettyplease::unparse(&file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn renders_formatted_source_with_header() {
        let text = source(quote! {
            pub struct BoxModel {}
        })
        .unwrap();

        assert!(text.starts_with(GENERATED_HEADER));
        assert!(text.contains("pub struct BoxModel {}"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let tokens = quote! {
            pub struct PersonModel {
                pub name: String,
            }
        };
        assert_eq!(source(tokens.clone()).unwrap(), source(tokens).unwrap());
    }
}
