//! AST parsing for the `HashKey` derive.
//!
//! This module transforms `syn::DeriveInput` into our intermediate representation.

use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use crate::ir::{KeyEnumIR, KeyVariantIR};
use stringhash_core::hash_str;

/// Parse a `DeriveInput` into our intermediate representation.
pub fn parse(input: DeriveInput) -> syn::Result<KeyEnumIR> {
    // Ensure it's an enum
    let data_enum = match &input.data {
        Data::Enum(e) => e,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(HashKey)] only supports enums, not structs",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(HashKey)] only supports enums, not unions",
            ))
        }
    };

    let mut variants = Vec::new();
    for variant in &data_enum.variants {
        // Ensure it's a unit variant (no fields)
        match &variant.fields {
            Fields::Unit => {}
            Fields::Named(_) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "#[derive(HashKey)] only supports unit variants (no fields)",
                ))
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "#[derive(HashKey)] only supports unit variants (no tuple fields)",
                ))
            }
        }

        let key = extract_key_attribute(&variant.attrs)?
            .unwrap_or_else(|| variant.ident.to_string());

        variants.push(KeyVariantIR {
            ident: variant.ident.clone(),
            hash: hash_str(&key),
            key,
            span: variant.span(),
        });
    }

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "#[derive(HashKey)] requires at least one variant",
        ));
    }

    Ok(KeyEnumIR {
        enum_name: input.ident.clone(),
        generics: input.generics.clone(),
        variants,
    })
}

/// Extract the key from a `#[key = "..."]` attribute.
fn extract_key_attribute(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut found = None;

    for attr in attrs {
        if !attr.path().is_ident("key") {
            continue;
        }

        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
        }

        let name_value = attr.meta.require_name_value()?;
        match &name_value.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) => found = Some(lit_str.value()),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal for #[key = \"...\"]",
                ))
            }
        }
    }

    Ok(found)
}
