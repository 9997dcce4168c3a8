//! Stable string keys with JavaScript-compatible hashes.

use crate::hash::hash_str;

/// A closed set of string keys, each identified by its `string-hash` value.
///
/// Lets a Rust enum and a JavaScript peer agree on numeric identifiers:
/// the JavaScript side computes `stringHash(key)` and the Rust side maps the
/// number back with [`from_hash_key`](HashKey::from_hash_key).
///
/// Usually implemented with `#[derive(HashKey)]` from the `stringhash`
/// crate, which computes every hash at compile time and rejects enums whose
/// keys collide.
///
/// # Example
///
/// ```
/// use stringhash_core::{hash_str, HashKey};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Channel {
///     Presence,
///     Chat,
/// }
///
/// impl HashKey for Channel {
///     fn key(&self) -> &'static str {
///         match self {
///             Channel::Presence => "presence",
///             Channel::Chat => "chat",
///         }
///     }
///
///     fn keys() -> &'static [&'static str] {
///         &["presence", "chat"]
///     }
///
///     fn from_hash_key(hash: u32) -> Option<Self> {
///         [Channel::Presence, Channel::Chat]
///             .into_iter()
///             .find(|channel| channel.hash_key() == hash)
///     }
/// }
///
/// assert_eq!(Channel::from_hash_key(hash_str("chat")), Some(Channel::Chat));
/// assert_eq!(Channel::from_key("presence"), Some(Channel::Presence));
/// ```
pub trait HashKey: Sized + 'static {
    /// The string key of this value.
    fn key(&self) -> &'static str;

    /// All keys, in declaration order.
    fn keys() -> &'static [&'static str];

    /// Look a value up by the hash of its key.
    fn from_hash_key(hash: u32) -> Option<Self>;

    /// The `string-hash` value of [`key`](HashKey::key).
    fn hash_key(&self) -> u32 {
        hash_str(self.key())
    }

    /// Look a value up by its key.
    ///
    /// Unlike [`from_hash_key`](HashKey::from_hash_key), a string that
    /// merely hashes like a known key is not accepted.
    fn from_key(key: &str) -> Option<Self> {
        Self::from_hash_key(hash_str(key)).filter(|value| value.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Greeting {
        Hello,
        World,
    }

    impl HashKey for Greeting {
        fn key(&self) -> &'static str {
            match self {
                Greeting::Hello => "Hello",
                Greeting::World => "Hello, world!",
            }
        }

        fn keys() -> &'static [&'static str] {
            &["Hello", "Hello, world!"]
        }

        fn from_hash_key(hash: u32) -> Option<Self> {
            match hash {
                181379975 => Some(Greeting::Hello),
                343662184 => Some(Greeting::World),
                _ => None,
            }
        }
    }

    #[test]
    fn test_hash_key_default() {
        assert_eq!(Greeting::Hello.hash_key(), 181379975);
        assert_eq!(Greeting::World.hash_key(), 343662184);
    }

    #[test]
    fn test_round_trip_through_hash() {
        for value in [Greeting::Hello, Greeting::World] {
            assert_eq!(Greeting::from_hash_key(value.hash_key()), Some(value));
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Greeting::from_key("Hello"), Some(Greeting::Hello));
        assert_eq!(Greeting::from_key("hello"), None);
    }

    #[test]
    fn test_keys_in_order() {
        assert_eq!(Greeting::keys(), ["Hello", "Hello, world!"]);
    }
}
