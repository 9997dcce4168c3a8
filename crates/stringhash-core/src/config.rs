//! Buffer sizing configuration.
//!
//! Short inputs are converted into a fixed stack buffer instead of a heap
//! allocation. Its size can be configured via Cargo features:
//! - Default: 256 bytes
//! - `inline-128`: 128 bytes (smaller stack footprint)
//! - `inline-512`: 512 bytes
//! - `inline-1024`: 1024 bytes
//!
//! When several are enabled the largest wins.
//!
//! [`PoolConfig`] controls how much memory a [`ScratchPool`](crate::ScratchPool)
//! keeps around between calls.

// =============================================================================
// Inline Buffer Configuration
// =============================================================================

/// Longest input, in bytes, converted without a heap allocation.
///
/// Configurable via Cargo features: `inline-128`, `inline-512`, `inline-1024`.
/// Default is 256 bytes.
#[cfg(feature = "inline-1024")]
pub const INLINE_CAPACITY: usize = 1024;

/// Longest input, in bytes, converted without a heap allocation.
#[cfg(all(feature = "inline-512", not(feature = "inline-1024")))]
pub const INLINE_CAPACITY: usize = 512;

/// Longest input, in bytes, converted without a heap allocation.
#[cfg(not(any(feature = "inline-128", feature = "inline-512", feature = "inline-1024")))]
pub const INLINE_CAPACITY: usize = 256;

/// Longest input, in bytes, converted without a heap allocation.
#[cfg(all(feature = "inline-128", not(feature = "inline-512"), not(feature = "inline-1024")))]
pub const INLINE_CAPACITY: usize = 128;

// =============================================================================
// Pool Configuration
// =============================================================================

/// Limits for a [`ScratchPool`](crate::ScratchPool).
///
/// # Example
///
/// ```
/// use stringhash_core::{PoolConfig, ScratchPool};
///
/// const CONFIG: PoolConfig = PoolConfig::new()
///     .with_max_idle(4)
///     .with_max_retained_capacity(16 * 1024);
///
/// let pool = ScratchPool::with_config(CONFIG);
/// assert_eq!(pool.hash("Hello"), 181379975);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Idle buffers kept for reuse. Buffers returned beyond this are dropped.
    pub max_idle: usize,

    /// Capacity, in code units, an idle buffer may keep. Larger buffers are
    /// shrunk on return so one huge input does not pin its allocation.
    pub max_retained_capacity: usize,
}

impl PoolConfig {
    /// Default number of idle buffers.
    pub const DEFAULT_MAX_IDLE: usize = 8;
    /// Default retained capacity per idle buffer (64 Ki code units).
    pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 64 * 1024;

    /// Create a configuration with default limits.
    pub const fn new() -> Self {
        Self {
            max_idle: Self::DEFAULT_MAX_IDLE,
            max_retained_capacity: Self::DEFAULT_MAX_RETAINED_CAPACITY,
        }
    }

    /// Set the number of idle buffers kept.
    pub const fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Set the capacity an idle buffer may keep.
    pub const fn with_max_retained_capacity(mut self, capacity: usize) -> Self {
        self.max_retained_capacity = capacity;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}
