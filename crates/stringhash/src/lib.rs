//! # stringhash
//!
//! JavaScript-compatible string hashing for Rust.
//!
//! Computes the same 32-bit value as the JavaScript
//! [`string-hash`](https://www.npmjs.com/package/string-hash) package, so a
//! Rust service and a JavaScript client can derive identical keys from the
//! same text.
//!
//! ## Architecture
//!
//! ```text
//! UTF-8 bytes
//!      ↓
//! code_units (UTF-16 view, invalid bytes passed through)
//!      ↓
//! hash_code_units (h = h * 33 ^ unit, last unit first)
//!      ↓
//! u32
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use stringhash::prelude::*;
//!
//! assert_eq!(hash_compat("Hello, world!"), 343662184);
//!
//! // Many long inputs: reuse one buffer
//! let mut scratch = HashScratch::new();
//! assert_eq!(scratch.hash("Mary had a little lamb."), 1766333550);
//! ```
//!
//! With the `derive` feature (default):
//!
//! ```rust
//! use stringhash::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, HashKey)]
//! enum Channel {
//!     #[key = "presence"]
//!     Presence,
//!     #[key = "chat"]
//!     Chat,
//! }
//!
//! const CHAT: u32 = string_hash!("chat");
//! assert_eq!(Channel::from_hash_key(CHAT), Some(Channel::Chat));
//! ```

// Re-export sub-crates
pub use stringhash_core as core;

pub use stringhash_core::{
    code_units, extend_code_units, hash_code_units, hash_compat, hash_str, CodeUnits, HashKey,
    HashScratch, PoolConfig, PooledScratch, ScratchPool, INLINE_CAPACITY, MULTIPLIER, SEED,
};

// Re-export macros when feature is enabled
#[cfg(feature = "derive")]
pub use stringhash_macros::string_hash;
#[cfg(feature = "derive")]
pub use stringhash_macros::HashKey;

/// Prelude module for convenient imports.
///
/// ```rust
/// use stringhash::prelude::*;
/// ```
pub mod prelude {
    pub use stringhash_core::{
        // Hashing
        hash_code_units, hash_compat, hash_str,
        // Buffers
        HashScratch, PoolConfig, ScratchPool,
        // Keys
        HashKey,
    };

    // Macros (when feature enabled)
    #[cfg(feature = "derive")]
    pub use stringhash_macros::{string_hash, HashKey};
}
