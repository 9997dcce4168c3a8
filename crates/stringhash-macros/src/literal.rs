//! The `string_hash!` function-like macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Lit;

use stringhash_core::hash_compat;

/// Expand a string or byte string literal to its hash as a `u32` literal.
pub fn string_hash_impl(lit: Lit) -> syn::Result<TokenStream> {
    let hash = match &lit {
        Lit::Str(s) => hash_compat(s.value()),
        Lit::ByteStr(b) => hash_compat(b.value()),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "string_hash! expects a string or byte string literal",
            ))
        }
    };

    Ok(quote! { #hash })
}
