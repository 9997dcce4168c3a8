//! The `string-hash` function.
//!
//! Produces the same 32-bit value as the JavaScript `string-hash` package
//! (<https://github.com/darkskyapp/string-hash>) for the same text.

use crate::code_units::{extend_code_units, write_code_units};
use crate::config::INLINE_CAPACITY;

/// Initial accumulator value.
pub const SEED: u32 = 5381;

/// Per-step multiplier.
pub const MULTIPLIER: u32 = 33;

/// Fold UTF-16 code units into a hash.
///
/// Units are consumed from last to first: `h = (h * 33) ^ unit`, with the
/// multiplication wrapping modulo 2^32. An empty slice returns [`SEED`].
///
/// Use this directly when the text is already UTF-16, e.g. when it came
/// from a JavaScript engine or a wide-string API.
///
/// # Examples
///
/// ```
/// use stringhash_core::hash_code_units;
///
/// let units: Vec<u16> = "Hello".encode_utf16().collect();
/// assert_eq!(hash_code_units(&units), 181379975);
///
/// // Compile-time usage
/// const EMPTY: u32 = hash_code_units(&[]);
/// assert_eq!(EMPTY, 5381);
/// ```
#[inline]
pub const fn hash_code_units(units: &[u16]) -> u32 {
    let mut hash = SEED;
    let mut i = units.len();
    while i > 0 {
        i -= 1;
        hash = hash.wrapping_mul(MULTIPLIER) ^ units[i] as u32;
    }
    hash
}

/// Hash text the way JavaScript's `string-hash` does.
///
/// Accepts anything that views as bytes. The bytes are read as UTF-8;
/// malformed sequences are not rejected, each offending byte is hashed as
/// a code unit equal to its own value. The function is total and
/// deterministic.
///
/// Inputs of at most [`INLINE_CAPACITY`] bytes are converted on the stack,
/// longer ones in a heap buffer sized to the input. To reuse one buffer
/// across many calls, see [`HashScratch`](crate::HashScratch).
///
/// # Examples
///
/// ```
/// use stringhash_core::hash_compat;
///
/// assert_eq!(hash_compat(""), 5381);
/// assert_eq!(hash_compat("Mary had a little lamb."), 1766333550);
/// assert_eq!(hash_compat("Hello, 世界"), 1861035601);
///
/// // Not valid UTF-8
/// assert_eq!(hash_compat(b"\x08\xC3\x01"), 193382351);
/// ```
pub fn hash_compat(text: impl AsRef<[u8]>) -> u32 {
    let bytes = text.as_ref();

    if bytes.len() <= INLINE_CAPACITY {
        let mut units = [0u16; INLINE_CAPACITY];
        let len = write_code_units(bytes, &mut units);
        hash_code_units(&units[..len])
    } else {
        let mut units = Vec::new();
        extend_code_units(bytes, &mut units);
        hash_code_units(&units)
    }
}

/// Hash a string slice. Same result as [`hash_compat`].
#[inline]
pub fn hash_str(s: &str) -> u32 {
    hash_compat(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const LARGE: &str = "Hello This is a very large string, supposed to be more than 256 characters: abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ... Wait.. I can write a song: Hey Jude, don't make it bad. Take a sad song and make it better. Remember to let her into your heart, Then you can start to make it better. Hey Jude, don't be afraid, You were made to go out and get her, The minute you let her under your skin Then you begin to make it better. Na Na Na Na Na Na Na Na Na Na Na.. Hey Jude";

    #[test]
    fn test_empty_is_seed() {
        assert_eq!(hash_compat(""), SEED);
        assert_eq!(hash_code_units(&[]), 5381);
    }

    #[test]
    fn test_ascii_vectors() {
        assert_eq!(hash_compat("Mary had a little lamb."), 1766333550);
        assert_eq!(hash_compat("Hello, world!"), 343662184);
        assert_eq!(hash_compat("Hello"), 181379975);
        assert_eq!(hash_compat("a"), 177604);
    }

    #[test]
    fn test_non_ascii_vectors() {
        assert_eq!(hash_compat("Hello, 世界"), 1861035601);
        assert_eq!(hash_compat("A界𐐷"), 1362180894);
        assert_eq!(hash_compat("é"), 177484);
        assert_eq!(hash_compat("\u{FFFD}"), 150104);
    }

    #[test]
    fn test_invalid_utf8_vectors() {
        assert_eq!(hash_compat(b"\x08\xC3\x01"), 193382351);
        assert_eq!(hash_compat(b"\xED\x80\x01"), 193380297);
        assert_eq!(hash_compat(b"\xD8\x01\xC3"), 193308639);
        assert_eq!(hash_compat(b"\xDC\x11\x02"), 193379722);
        assert_eq!(hash_compat(b"\xFF"), 177498);
    }

    #[test]
    fn test_surrogate_pair_low_unit_folded_first() {
        // U+10437 is D801 DC37; reverse iteration folds DC37 first.
        let expected = (SEED.wrapping_mul(33) ^ 0xDC37).wrapping_mul(33) ^ 0xD801;
        assert_eq!(hash_compat("𐐷"), expected);
        assert_eq!(hash_compat("𐐷"), 5194707);
    }

    #[test]
    fn test_large_string_wraps() {
        assert_eq!(hash_compat(LARGE), 1610438000);
    }

    #[test]
    fn test_inline_and_heap_paths_agree() {
        let text = "ab😀".repeat(INLINE_CAPACITY);
        let units: Vec<u16> = text.encode_utf16().collect();
        assert!(text.len() > INLINE_CAPACITY);
        assert_eq!(hash_compat(&text), hash_code_units(&units));

        let short = &text[..INLINE_CAPACITY / 6 * 6];
        let short_units: Vec<u16> = short.encode_utf16().collect();
        assert_eq!(hash_compat(short), hash_code_units(&short_units));
    }

    #[test]
    fn test_exactly_inline_capacity() {
        let text = "x".repeat(INLINE_CAPACITY);
        let units = vec![u16::from(b'x'); INLINE_CAPACITY];
        assert_eq!(hash_compat(&text), hash_code_units(&units));
    }

    #[test]
    fn test_accepts_owned_and_borrowed() {
        let expected = hash_compat("Hello");
        assert_eq!(hash_compat(String::from("Hello")), expected);
        assert_eq!(hash_compat(b"Hello".to_vec()), expected);
        assert_eq!(hash_compat(&b"Hello"[..]), expected);
        assert_eq!(hash_str("Hello"), expected);
    }

    #[test]
    fn test_const_context() {
        const HASH: u32 = hash_code_units(&[72, 101, 108, 108, 111]);
        assert_eq!(HASH, hash_compat("Hello"));
    }

    #[test]
    fn test_deterministic() {
        let h1 = hash_compat(LARGE);
        let h2 = hash_compat(LARGE);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(hash_compat("ab"), hash_compat("ba"));
        assert_eq!(hash_compat("ab"), 5861062);
        assert_eq!(hash_compat("ba"), 5860902);
    }

    #[test]
    fn test_single_unit_change_changes_hash() {
        let base = "the quick brown fox jumps over the lazy dog";
        let base_hash = hash_compat(base);
        let mut changed = 0;
        let mut total = 0;
        for i in 0..base.len() {
            let mut bytes = base.as_bytes().to_vec();
            bytes[i] = if bytes[i] == b'z' { b'a' } else { bytes[i] + 1 };
            total += 1;
            if hash_compat(&bytes) != base_hash {
                changed += 1;
            }
        }
        assert_eq!(changed, total);
    }

    #[test]
    fn test_adjacent_swap_changes_hash() {
        let base = "abcdefghijklmnopqrstuvwxyz0123456789";
        let base_hash = hash_compat(base);
        for i in 0..base.len() - 1 {
            let mut bytes = base.as_bytes().to_vec();
            bytes.swap(i, i + 1);
            assert_ne!(hash_compat(&bytes), base_hash, "swap at {}", i);
        }
    }

    #[test]
    fn test_distribution_10000_keys() {
        let hashes: HashSet<u32> = (0..10_000).map(|i| hash_compat(format!("key-{}", i))).collect();
        assert!(hashes.len() >= 9_990, "only {} distinct hashes", hashes.len());
    }
}
