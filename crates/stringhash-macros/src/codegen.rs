//! Code generation for the `HashKey` derive.

use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::KeyEnumIR;

/// Generate the `HashKey` implementation from the IR.
pub fn generate(ir: &KeyEnumIR) -> TokenStream {
    let enum_name = &ir.enum_name;
    let (impl_generics, ty_generics, where_clause) = ir.generics.split_for_impl();

    let key_arms = ir.variants.iter().map(|v| {
        let ident = &v.ident;
        let key = &v.key;
        quote! { Self::#ident => #key, }
    });

    let hash_arms = ir.variants.iter().map(|v| {
        let ident = &v.ident;
        let hash = v.hash;
        quote! { Self::#ident => #hash, }
    });

    let from_hash_arms = ir.variants.iter().map(|v| {
        let ident = &v.ident;
        let hash = v.hash;
        quote! { #hash => ::core::option::Option::Some(Self::#ident), }
    });

    let keys: Vec<&str> = ir.variants.iter().map(|v| v.key.as_str()).collect();

    quote! {
        impl #impl_generics ::stringhash::core::HashKey for #enum_name #ty_generics #where_clause {
            fn key(&self) -> &'static str {
                match self {
                    #(#key_arms)*
                }
            }

            fn keys() -> &'static [&'static str] {
                &[#(#keys),*]
            }

            fn hash_key(&self) -> u32 {
                match self {
                    #(#hash_arms)*
                }
            }

            fn from_hash_key(hash: u32) -> ::core::option::Option<Self> {
                match hash {
                    #(#from_hash_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
