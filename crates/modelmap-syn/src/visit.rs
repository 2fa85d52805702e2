//! Source scanning.
//!
//! Walks parsed files with the syn visitor, tracking the dotted module path,
//! and records every struct and enum definition plus every
//! `#[model_target(types(...))]` declaration into an [`Index`]. Resolution
//! of the listed types happens later, once all sources are indexed, so a
//! declaration may reference types defined in a file scanned after it.

use crate::FrontError;
use syn::punctuated::Punctuated;
use syn::visit::Visit;

///
/// Index
/// Everything the resolver needs, keyed by dotted module path.
///

#[derive(Default)]
pub(crate) struct Index {
    pub structs: Vec<DeclaredStruct>,
    pub enums: Vec<DeclaredEnum>,
    pub targets: Vec<RawTarget>,
}

pub(crate) struct DeclaredStruct {
    pub namespace: String,
    pub item: syn::ItemStruct,
}

pub(crate) struct DeclaredEnum {
    pub namespace: String,
    pub item: syn::ItemEnum,
}

/// One `#[model_target(types(...))]` occurrence: the dotted destination
/// namespace and the listed type expressions, as written.
pub(crate) struct RawTarget {
    pub namespace: String,
    pub types: Vec<syn::Type>,
}

impl Index {
    pub fn find_struct(&self, namespace: &str, name: &str) -> Option<&DeclaredStruct> {
        self.structs
            .iter()
            .find(|d| d.namespace == namespace && d.item.ident == name)
    }

    pub fn find_enum(&self, namespace: &str, name: &str) -> Option<&DeclaredEnum> {
        self.enums
            .iter()
            .find(|d| d.namespace == namespace && d.item.ident == name)
    }
}

pub(crate) fn collect(file: &syn::File, index: &mut Index) -> Result<(), FrontError> {
    let mut collector = Collector {
        path: Vec::new(),
        index,
        error: None,
    };
    collector.visit_file(file);

    match collector.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

struct Collector<'a> {
    path: Vec<String>,
    index: &'a mut Index,
    error: Option<FrontError>,
}

impl Collector<'_> {
    fn namespace(&self) -> String {
        self.path.join(".")
    }

    fn check_target(&mut self, attrs: &[syn::Attribute], namespace: String) {
        for attr in attrs {
            if !attr.path().is_ident("model_target") {
                continue;
            }
            match parse_target_types(attr) {
                Ok(types) => self.index.targets.push(RawTarget {
                    namespace: namespace.clone(),
                    types,
                }),
                Err(err) => {
                    if self.error.is_none() {
                        self.error = Some(FrontError::Attribute {
                            namespace: namespace.clone(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for Collector<'_> {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        self.path.push(node.ident.to_string());
        // A marked module is its own destination.
        let namespace = self.namespace();
        self.check_target(&node.attrs, namespace);
        syn::visit::visit_item_mod(self, node);
        self.path.pop();
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        let namespace = self.namespace();
        self.check_target(&node.attrs, namespace.clone());
        self.index.structs.push(DeclaredStruct {
            namespace,
            item: node.clone(),
        });
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        let namespace = self.namespace();
        self.check_target(&node.attrs, namespace.clone());
        self.index.enums.push(DeclaredEnum {
            namespace,
            item: node.clone(),
        });
    }
}

/// `#[model_target(types(A, path::B, C<D>,))]` — trailing commas allowed,
/// anything other than a `types(...)` list rejected.
fn parse_target_types(attr: &syn::Attribute) -> syn::Result<Vec<syn::Type>> {
    let mut types = Vec::new();
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("types") {
            let content;
            syn::parenthesized!(content in meta.input);
            let listed = Punctuated::<syn::Type, syn::Token![,]>::parse_terminated(&content)?;
            types.extend(listed);
            Ok(())
        } else {
            Err(meta.error("expected `types(...)`"))
        }
    })?;
    Ok(types)
}
