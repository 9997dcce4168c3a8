//! Caller-owned conversion buffer.

use crate::code_units::extend_code_units;
use crate::hash::hash_code_units;

/// Reusable buffer for the UTF-16 view of hashed text.
///
/// [`hash_compat`](crate::hash_compat) allocates for every input longer than
/// [`INLINE_CAPACITY`](crate::INLINE_CAPACITY). Code that hashes many long
/// strings can keep one `HashScratch` and reuse its allocation instead.
///
/// Methods take `&mut self`, so a scratch buffer cannot be shared between
/// threads without external locking. [`ScratchPool`](crate::ScratchPool)
/// provides that locking.
///
/// # Examples
///
/// ```
/// use stringhash_core::{hash_compat, HashScratch};
///
/// let mut scratch = HashScratch::new();
/// for line in ["Hello", "Hello, world!", "Mary had a little lamb."] {
///     assert_eq!(scratch.hash(line), hash_compat(line));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct HashScratch {
    units: Vec<u16>,
}

impl HashScratch {
    /// Create an empty scratch buffer. Does not allocate.
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Create a scratch buffer able to hold `capacity` code units.
    ///
    /// Since no input produces more code units than bytes, a capacity equal
    /// to the longest expected input avoids all further allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Hash `text`, reusing this buffer. Same result as
    /// [`hash_compat`](crate::hash_compat).
    pub fn hash(&mut self, text: impl AsRef<[u8]>) -> u32 {
        hash_code_units(self.code_units(text))
    }

    /// Convert `text` to its UTF-16 code units, replacing the buffer contents.
    pub fn code_units(&mut self, text: impl AsRef<[u8]>) -> &[u16] {
        self.units.clear();
        extend_code_units(text.as_ref(), &mut self.units);
        &self.units
    }

    /// Code units left over from the last conversion.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.units
    }

    /// Number of code units the buffer holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    /// Drop the buffer contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Release memory down to `min_capacity` code units.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.units.shrink_to(min_capacity);
    }
}
