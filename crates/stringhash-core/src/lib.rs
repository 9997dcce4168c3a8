//! # stringhash-core
//!
//! JavaScript-compatible string hashing for Rust.
//!
//! [`hash_compat`] returns the same `u32` as the JavaScript
//! [`string-hash`](https://www.npmjs.com/package/string-hash) package for the
//! same text, so the value can serve as a key agreed on by Rust and
//! JavaScript processes.
//!
//! JavaScript hashes UTF-16 code units; Rust text is UTF-8. The crate
//! rebuilds the UTF-16 view ([`code_units`]) and folds it with the
//! `string-hash` recurrence ([`hash_code_units`]). Malformed UTF-8 is never
//! rejected: each offending byte is hashed as its own value.
//!
//! ## Functions
//!
//! - [`hash_compat`] - Hash any byte-like input
//! - [`hash_str`] - Hash a string slice
//! - [`hash_code_units`] - Hash text that is already UTF-16 (`const fn`)
//! - [`code_units`] / [`extend_code_units`] - The UTF-16 view itself
//!
//! ## Types
//!
//! - [`HashScratch`] - Caller-owned buffer reused across calls
//! - [`ScratchPool`] - Locked pool of buffers for multi-threaded callers
//! - [`PoolConfig`] - Pool limits
//! - [`HashKey`] - Closed key sets identified by their hashes

pub mod code_units;
pub mod config;
pub mod hash;
pub mod key;
pub mod pool;
pub mod scratch;

// Re-exports for convenience
pub use code_units::{code_units, extend_code_units, CodeUnits};
pub use config::{PoolConfig, INLINE_CAPACITY};
pub use hash::{hash_code_units, hash_compat, hash_str, MULTIPLIER, SEED};
pub use key::HashKey;
pub use pool::{PooledScratch, ScratchPool};
pub use scratch::HashScratch;
