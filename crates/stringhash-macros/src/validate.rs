//! Semantic validation for the `HashKey` derive.

use std::collections::HashMap;

use crate::ir::{KeyEnumIR, KeyVariantIR};

/// Validate the IR for semantic correctness.
///
/// Keys must be unique and must not share a hash. Equal keys always share a
/// hash, so one map keyed by hash catches both.
pub fn validate(ir: &KeyEnumIR) -> syn::Result<()> {
    let mut seen: HashMap<u32, &KeyVariantIR> = HashMap::with_capacity(ir.variants.len());

    for variant in &ir.variants {
        if let Some(first) = seen.get(&variant.hash) {
            let message = if first.key == variant.key {
                format!(
                    "Duplicate key \"{}\": already used by variant `{}`",
                    variant.key, first.ident
                )
            } else {
                format!(
                    "Key hash collision: \"{}\" and \"{}\" both hash to 0x{:08x}. \
                     Rename one of these keys to avoid the collision.",
                    variant.key, first.key, variant.hash
                )
            };
            return Err(syn::Error::new(variant.span, message));
        }
        seen.insert(variant.hash, variant);
    }

    Ok(())
}
