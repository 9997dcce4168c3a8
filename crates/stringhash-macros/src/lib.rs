//! Macros for the stringhash crates.
//!
//! - [`string_hash!`] hashes a literal at compile time.
//! - `#[derive(HashKey)]` implements `HashKey` for a unit enum, with every
//!   hash computed at compile time and collisions rejected.
//!
//! # Example
//!
//! ```ignore
//! use stringhash::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, HashKey)]
//! pub enum Channel {
//!     #[key = "presence"]
//!     Presence,
//!     #[key = "chat"]
//!     Chat,
//! }
//!
//! const CHAT: u32 = string_hash!("chat");
//! assert_eq!(Channel::from_hash_key(CHAT), Some(Channel::Chat));
//! ```

use proc_macro::TokenStream;

mod codegen;
mod ir;
mod literal;
mod parse;
mod validate;

/// Hash a string or byte string literal at compile time.
///
/// Expands to a `u32` literal equal to `hash_compat` of the literal's bytes,
/// so it can initialise constants and appear in `match` patterns. Byte
/// strings may contain invalid UTF-8.
///
/// # Example
///
/// ```ignore
/// const HELLO: u32 = string_hash!("Hello");
/// assert_eq!(HELLO, 181379975);
///
/// match stringhash::hash_str(input) {
///     string_hash!("ping") => pong(),
///     _ => {}
/// }
/// ```
#[proc_macro]
pub fn string_hash(input: TokenStream) -> TokenStream {
    let lit = syn::parse_macro_input!(input as syn::Lit);

    match literal::string_hash_impl(lit) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive macro for implementing `HashKey` on unit enums.
///
/// # Attributes
///
/// - `#[key = "..."]` - Optional key for a variant. If not specified, the
///   variant identifier is used as the key.
///
/// # Validation
///
/// Compilation fails if two variants share a key, or if two keys hash to
/// the same value. The error names both keys.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, HashKey)]
/// pub enum Event {
///     #[key = "user.login"]
///     Login,
///     #[key = "user.logout"]
///     Logout,
///     Heartbeat,  // Uses "Heartbeat" as key
/// }
/// ```
#[proc_macro_derive(HashKey, attributes(key))]
pub fn derive_hash_key(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match derive_hash_key_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_hash_key_impl(input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ir = parse::parse(input)?;
    validate::validate(&ir)?;
    Ok(codegen::generate(&ir))
}
