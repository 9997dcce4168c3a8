//! Shared pool of scratch buffers.
//!
//! A [`HashScratch`] is single-owner. When many threads hash long strings
//! and each wants to avoid allocating, a [`ScratchPool`] hands buffers out
//! under a lock and takes them back when the caller is done. The lock only
//! guards the idle list; hashing runs outside it.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

use crate::config::PoolConfig;
use crate::scratch::HashScratch;

/// Thread-safe pool of [`HashScratch`] buffers.
///
/// # Examples
///
/// ```
/// use stringhash_core::{hash_compat, ScratchPool};
///
/// let pool = ScratchPool::new();
/// let text = "Na ".repeat(1000);
///
/// std::thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| assert_eq!(pool.hash(&text), hash_compat(&text)));
///     }
/// });
/// ```
#[derive(Debug)]
pub struct ScratchPool {
    idle: Mutex<Vec<HashScratch>>,
    config: PoolConfig,
}

impl ScratchPool {
    /// Create a pool with default limits.
    pub fn new() -> Self {
        Self::with_config(PoolConfig::new())
    }

    /// Create a pool with the given limits.
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(config.max_idle)),
            config,
        }
    }

    /// The limits this pool was created with.
    #[inline]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Take a buffer from the pool, or a fresh one if none is idle.
    ///
    /// The buffer goes back to the pool when the guard is dropped.
    pub fn checkout(&self) -> PooledScratch<'_> {
        let scratch = self.lock_idle().pop().unwrap_or_default();
        PooledScratch { pool: self, scratch }
    }

    /// Hash `text` with a pooled buffer. Same result as
    /// [`hash_compat`](crate::hash_compat).
    pub fn hash(&self, text: impl AsRef<[u8]>) -> u32 {
        self.checkout().hash(text)
    }

    /// Number of buffers currently waiting for reuse.
    pub fn idle(&self) -> usize {
        self.lock_idle().len()
    }

    fn lock_idle(&self) -> MutexGuard<'_, Vec<HashScratch>> {
        // Idle buffers hold no state worth protecting, so a panic in another
        // thread does not make them unusable.
        self.idle.lock().unwrap_or_else(|poisoned| {
            log::warn!("Scratch pool lock poisoned, recovering idle buffers");
            self.idle.clear_poison();
            poisoned.into_inner()
        })
    }

    fn give_back(&self, mut scratch: HashScratch) {
        scratch.clear();

        let max_capacity = self.config.max_retained_capacity;
        if scratch.capacity() > max_capacity {
            log::debug!(
                "Shrinking pooled scratch buffer from {} to {} code units",
                scratch.capacity(),
                max_capacity
            );
            scratch.shrink_to(max_capacity);
        }

        let mut idle = self.lock_idle();
        if idle.len() >= self.config.max_idle {
            log::debug!("Scratch pool full ({} idle), dropping buffer", idle.len());
            return;
        }
        idle.push(scratch);
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`HashScratch`] borrowed from a [`ScratchPool`].
///
/// Dereferences to the buffer; returns it to the pool on drop.
#[derive(Debug)]
pub struct PooledScratch<'a> {
    pool: &'a ScratchPool,
    scratch: HashScratch,
}

impl Deref for PooledScratch<'_> {
    type Target = HashScratch;

    fn deref(&self) -> &HashScratch {
        &self.scratch
    }
}

impl DerefMut for PooledScratch<'_> {
    fn deref_mut(&mut self) -> &mut HashScratch {
        &mut self.scratch
    }
}

impl Drop for PooledScratch<'_> {
    fn drop(&mut self) {
        let scratch = std::mem::take(&mut self.scratch);
        self.pool.give_back(scratch);
    }
}
