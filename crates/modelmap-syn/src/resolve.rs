//! Listed-type resolution.
//!
//! Turns the raw `#[model_target(types(...))]` lists into the descriptor
//! input contract: each listed path is matched against the indexed
//! definitions, closed generic arguments are substituted into the open
//! definition's field types, `Option` wrappers are stripped into the
//! nullability flag, and accessor flags are read off field visibility and
//! `#[model(...)]` annotations.

use crate::FrontError;
use crate::visit::{DeclaredEnum, DeclaredStruct, Index};
use modelmap_schema::node::{
    Declaration, PropertyInfo, Shape, TypeInfo, TypeRef, TypeRefKind, VariantInfo,
};
use std::collections::BTreeMap;

pub(crate) fn declarations(index: &Index) -> Result<Vec<Declaration>, FrontError> {
    index
        .targets
        .iter()
        .map(|raw| {
            let types = raw
                .types
                .iter()
                .map(|ty| listed_type(index, ty, &raw.namespace))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Declaration {
                namespace: raw.namespace.clone(),
                types,
            })
        })
        .collect()
}

/// Resolve one listed type expression to a `TypeInfo`. Equivalent spellings
/// (`crate::`-prefixed, crate-relative, bare within the declaring module)
/// resolve to the same definition.
fn listed_type(index: &Index, ty: &syn::Type, target_ns: &str) -> Result<TypeInfo, FrontError> {
    let syn::Type::Path(type_path) = ty else {
        return Err(FrontError::UnsupportedTypeExpression {
            namespace: target_ns.to_string(),
        });
    };
    let Some((written_ns, name, args)) = split_path(&type_path.path) else {
        return Err(FrontError::UnsupportedTypeExpression {
            namespace: target_ns.to_string(),
        });
    };

    if let Some(decl) = lookup_struct(index, &written_ns, &name, target_ns) {
        return struct_info(index, decl, &args, target_ns);
    }
    if let Some(decl) = lookup_enum(index, &written_ns, &name, target_ns) {
        return Ok(enum_info(decl));
    }

    Err(FrontError::UnresolvableType {
        path: display_path(&written_ns, &name),
        namespace: target_ns.to_string(),
    })
}

fn struct_info(
    index: &Index,
    decl: &DeclaredStruct,
    args: &[syn::Type],
    target_ns: &str,
) -> Result<TypeInfo, FrontError> {
    let name = decl.item.ident.to_string();
    let params: Vec<String> = decl
        .item
        .generics
        .type_params()
        .map(|p| p.ident.to_string())
        .collect();

    let is_generic = !params.is_empty();
    let is_open_generic = is_generic && args.is_empty();
    if is_generic && !args.is_empty() && args.len() != params.len() {
        return Err(FrontError::GenericArity {
            path: display_path(&decl.namespace, &name),
            namespace: target_ns.to_string(),
        });
    }

    let record_like = !matches!(decl.item.fields, syn::Fields::Named(_));

    let substitutions: BTreeMap<String, syn::Type> = params
        .iter()
        .cloned()
        .zip(args.iter().cloned())
        .collect();

    let mut resolved_args = Vec::with_capacity(args.len());
    for arg in args {
        resolved_args.push(type_ref(index, arg, &decl.namespace, target_ns)?);
    }

    let mut properties = Vec::new();
    if !record_like {
        for field in &decl.item.fields {
            properties.push(property(index, decl, field, &params, &substitutions, target_ns)?);
        }
    }

    Ok(TypeInfo {
        type_ref: TypeRef::new(name.as_str(), decl.namespace.as_str(), TypeRefKind::Struct)
            .with_args(resolved_args),
        shape: Shape::Struct {
            properties,
            is_generic,
            is_open_generic,
            record_like,
        },
    })
}

fn property(
    index: &Index,
    decl: &DeclaredStruct,
    field: &syn::Field,
    params: &[String],
    substitutions: &BTreeMap<String, syn::Type>,
    target_ns: &str,
) -> Result<PropertyInfo, FrontError> {
    // Named fields only: record-like shapes never reach here.
    let name = field
        .ident
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let (has_getter, has_setter) = accessors(field);

    let (stripped, mut nullable) = strip_option(&field.ty);
    let from_type_param = params.iter().any(|p| is_bare_ident(&stripped, p));

    let substituted = substitute(&stripped, substitutions);
    let (concrete, inner_nullable) = strip_option(&substituted);
    nullable = nullable || inner_nullable;

    Ok(PropertyInfo {
        name,
        type_ref: type_ref(index, &concrete, &decl.namespace, target_ns)?,
        nullable,
        has_getter,
        has_setter,
        from_type_param,
    })
}

fn enum_info(decl: &DeclaredEnum) -> TypeInfo {
    let record_like = decl
        .item
        .variants
        .iter()
        .any(|v| !matches!(v.fields, syn::Fields::Unit));

    // Implicit discriminants follow the host compiler: previous + 1 from 0.
    let mut next: i64 = 0;
    let mut variants = Vec::new();
    for variant in &decl.item.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            continue;
        }
        if let Some((_, expr)) = &variant.discriminant {
            if let Some(value) = int_value(expr) {
                next = value;
            }
        }
        variants.push(VariantInfo {
            name: variant.ident.to_string(),
            value: Some(next),
        });
        next += 1;
    }

    TypeInfo {
        type_ref: TypeRef::new(
            decl.item.ident.to_string(),
            decl.namespace.as_str(),
            TypeRefKind::Enum,
        ),
        shape: Shape::Enum {
            variants,
            record_like,
        },
    }
}

/// Resolve a property or argument type to its descriptor reference: a
/// declared struct or enum resolves to its defining namespace; anything
/// else is carried as written.
fn type_ref(
    index: &Index,
    ty: &syn::Type,
    declaring_ns: &str,
    target_ns: &str,
) -> Result<TypeRef, FrontError> {
    let syn::Type::Path(type_path) = ty else {
        return Err(FrontError::UnsupportedTypeExpression {
            namespace: target_ns.to_string(),
        });
    };
    let Some((written_ns, name, args)) = split_path(&type_path.path) else {
        return Err(FrontError::UnsupportedTypeExpression {
            namespace: target_ns.to_string(),
        });
    };

    let mut resolved_args = Vec::with_capacity(args.len());
    for arg in &args {
        resolved_args.push(type_ref(index, arg, declaring_ns, target_ns)?);
    }

    let base = if let Some(decl) = lookup_struct(index, &written_ns, &name, declaring_ns) {
        TypeRef::new(name.as_str(), decl.namespace.as_str(), TypeRefKind::Struct)
    } else if let Some(decl) = lookup_enum(index, &written_ns, &name, declaring_ns) {
        TypeRef::new(name.as_str(), decl.namespace.as_str(), TypeRefKind::Enum)
    } else {
        TypeRef::new(name.as_str(), written_ns.as_str(), TypeRefKind::Other)
    };

    Ok(base.with_args(resolved_args))
}

/// Qualified names match exactly; bare names resolve first within the
/// fallback namespace, then by unique short name across all definitions.
fn lookup_struct<'a>(
    index: &'a Index,
    written_ns: &str,
    name: &str,
    fallback_ns: &str,
) -> Option<&'a DeclaredStruct> {
    if !written_ns.is_empty() {
        return index.find_struct(written_ns, name);
    }
    if let Some(decl) = index.find_struct(fallback_ns, name) {
        return Some(decl);
    }

    let mut matches = index.structs.iter().filter(|d| d.item.ident == name);
    let first = matches.next()?;
    matches.next().is_none().then_some(first)
}

fn lookup_enum<'a>(
    index: &'a Index,
    written_ns: &str,
    name: &str,
    fallback_ns: &str,
) -> Option<&'a DeclaredEnum> {
    if !written_ns.is_empty() {
        return index.find_enum(written_ns, name);
    }
    if let Some(decl) = index.find_enum(fallback_ns, name) {
        return Some(decl);
    }

    let mut matches = index.enums.iter().filter(|d| d.item.ident == name);
    let first = matches.next()?;
    matches.next().is_none().then_some(first)
}

/// Accessor flags from field visibility and `#[model(...)]` annotations.
fn accessors(field: &syn::Field) -> (bool, bool) {
    let mut read_only = false;
    let mut write_only = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("model") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("read_only") {
                read_only = true;
            } else if meta.path.is_ident("write_only") {
                write_only = true;
            }
            Ok(())
        });
    }

    if read_only {
        (true, false)
    } else if write_only {
        (false, true)
    } else if matches!(field.vis, syn::Visibility::Public(_)) {
        (true, true)
    } else {
        (false, false)
    }
}

/// `(dotted namespace, short name, generic arguments)` of a type path.
/// A leading `crate` segment is spelling, not identity, and is dropped.
fn split_path(path: &syn::Path) -> Option<(String, String, Vec<syn::Type>)> {
    let last = path.segments.last()?;
    let name = last.ident.to_string();

    let args = match &last.arguments {
        syn::PathArguments::None => Vec::new(),
        syn::PathArguments::AngleBracketed(brackets) => brackets
            .args
            .iter()
            .filter_map(|arg| match arg {
                syn::GenericArgument::Type(ty) => Some(ty.clone()),
                _ => None,
            })
            .collect(),
        syn::PathArguments::Parenthesized(_) => return None,
    };

    let namespace = path
        .segments
        .iter()
        .take(path.segments.len() - 1)
        .map(|segment| segment.ident.to_string())
        .filter(|segment| segment != "crate")
        .collect::<Vec<_>>()
        .join(".");

    Some((namespace, name, args))
}

fn display_path(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// `Option<T>` strips to `T`; the wrapper is recorded as nullability.
fn strip_option(ty: &syn::Type) -> (syn::Type, bool) {
    if let syn::Type::Path(type_path) = ty {
        if let Some(last) = type_path.path.segments.last() {
            if last.ident == "Option" {
                if let syn::PathArguments::AngleBracketed(brackets) = &last.arguments {
                    if brackets.args.len() == 1 {
                        if let Some(syn::GenericArgument::Type(inner)) = brackets.args.first() {
                            return (inner.clone(), true);
                        }
                    }
                }
            }
        }
    }
    (ty.clone(), false)
}

fn is_bare_ident(ty: &syn::Type, ident: &str) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.qself.is_none() && type_path.path.is_ident(ident)
    } else {
        false
    }
}

/// Replace generic-parameter occurrences with the written arguments,
/// recursing through angle-bracketed positions.
fn substitute(ty: &syn::Type, substitutions: &BTreeMap<String, syn::Type>) -> syn::Type {
    let syn::Type::Path(type_path) = ty else {
        return ty.clone();
    };
    if type_path.qself.is_none() {
        if let Some(ident) = type_path.path.get_ident() {
            if let Some(replacement) = substitutions.get(&ident.to_string()) {
                return replacement.clone();
            }
        }
    }

    let mut type_path = type_path.clone();
    for segment in &mut type_path.path.segments {
        if let syn::PathArguments::AngleBracketed(brackets) = &mut segment.arguments {
            for arg in &mut brackets.args {
                if let syn::GenericArgument::Type(inner) = arg {
                    *inner = substitute(inner, substitutions);
                }
            }
        }
    }
    syn::Type::Path(type_path)
}

fn int_value(expr: &syn::Expr) -> Option<i64> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => lit.base10_parse().ok(),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => int_value(expr).map(|v| -v),
        _ => None,
    }
}
