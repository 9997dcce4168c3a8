//! UTF-16 code unit view of UTF-8 input.
//!
//! JavaScript exposes strings as a sequence of UTF-16 code units
//! (`String.prototype.charCodeAt`). Rust stores text as UTF-8, so the
//! JavaScript view has to be rebuilt before hashing:
//!
//! - Scalar values below U+10000 become one code unit.
//! - Scalar values from U+10000 up become a surrogate pair, high unit first.
//! - A byte that does not start a valid UTF-8 sequence at its position
//!   becomes one code unit holding the raw byte value (0-255), and decoding
//!   resumes at the very next byte.
//!
//! The conversion never fails and never produces more code units than there
//! are input bytes.

use std::iter::FusedIterator;
use std::slice;
use std::str::{Chars, Utf8Chunks};

const NO_BYTES: &[u8] = &[];

/// Iterator over the UTF-16 code units a JavaScript engine would report for
/// the same text.
///
/// Created by [`code_units`].
///
/// # Examples
///
/// ```
/// use stringhash_core::code_units;
///
/// // U+1F600 is a surrogate pair, 0xFF is not valid UTF-8.
/// let units: Vec<u16> = code_units(b"a\xF0\x9F\x98\x80\xFF").collect();
/// assert_eq!(units, [0x61, 0xD83D, 0xDE00, 0xFF]);
/// ```
#[derive(Clone, Debug)]
pub struct CodeUnits<'a> {
    /// Chunks not yet started.
    chunks: Utf8Chunks<'a>,
    /// Bytes held by `chunks`, for `size_hint`.
    pending_bytes: usize,
    /// Valid text of the current chunk.
    chars: Chars<'a>,
    /// Invalid bytes trailing the current chunk.
    invalid: slice::Iter<'a, u8>,
    /// Second half of a surrogate pair whose high unit was already yielded.
    low_surrogate: Option<u16>,
}

/// Iterate the UTF-16 code units of `bytes`.
#[inline]
pub fn code_units(bytes: &[u8]) -> CodeUnits<'_> {
    CodeUnits {
        chunks: bytes.utf8_chunks(),
        pending_bytes: bytes.len(),
        chars: "".chars(),
        invalid: NO_BYTES.iter(),
        low_surrogate: None,
    }
}

/// Append the UTF-16 code units of `bytes` to `out`.
///
/// Reserves one slot per input byte up front, which always suffices.
pub fn extend_code_units(bytes: &[u8], out: &mut Vec<u16>) {
    out.reserve(bytes.len());
    out.extend(code_units(bytes));
}

/// Write the code units of `bytes` into the front of `dst` and return how
/// many were written.
///
/// `dst` must hold at least `bytes.len()` units.
pub(crate) fn write_code_units(bytes: &[u8], dst: &mut [u16]) -> usize {
    debug_assert!(dst.len() >= bytes.len());

    let mut len = 0;
    for (slot, unit) in dst.iter_mut().zip(code_units(bytes)) {
        *slot = unit;
        len += 1;
    }
    len
}

impl Iterator for CodeUnits<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        loop {
            if let Some(low) = self.low_surrogate.take() {
                return Some(low);
            }

            if let Some(c) = self.chars.next() {
                let mut pair = [0u16; 2];
                let units = c.encode_utf16(&mut pair);
                if let [_, low] = *units {
                    self.low_surrogate = Some(low);
                }
                return Some(units[0]);
            }

            // Each byte of an ill-formed sequence stands on its own. Bytes
            // after the first are continuation bytes, which are never valid
            // at the start of a sequence, so this matches decoding one byte
            // at a time.
            if let Some(&byte) = self.invalid.next() {
                return Some(u16::from(byte));
            }

            let chunk = self.chunks.next()?;
            self.pending_bytes -= chunk.valid().len() + chunk.invalid().len();
            self.chars = chunk.valid().chars();
            self.invalid = chunk.invalid().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending_low = usize::from(self.low_surrogate.is_some());
        let lower = pending_low + self.invalid.len();
        let upper = lower + self.chars.as_str().len() + self.pending_bytes;
        (lower, Some(upper))
    }
}

impl FusedIterator for CodeUnits<'_> {}
