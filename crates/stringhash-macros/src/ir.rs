//! Intermediate representation for the `HashKey` derive.
//!
//! This module defines the data structures that represent a parsed key enum,
//! after AST parsing but before code generation.

use proc_macro2::Span;

/// Intermediate representation of a key enum.
pub struct KeyEnumIR {
    /// The enum name (e.g., `Channel`)
    pub enum_name: syn::Ident,
    /// Generic parameters, if any
    pub generics: syn::Generics,
    /// All variants, in declaration order
    pub variants: Vec<KeyVariantIR>,
}

/// A single unit variant and its key.
pub struct KeyVariantIR {
    /// The variant identifier (e.g., `Presence`)
    pub ident: syn::Ident,
    /// The key (from `#[key = "..."]` or the identifier)
    pub key: String,
    /// `string-hash` value of the key
    pub hash: u32,
    /// Span for error reporting
    pub span: Span,
}
