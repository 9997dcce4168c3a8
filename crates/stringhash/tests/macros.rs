#![cfg(feature = "derive")]

use stringhash::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, HashKey)]
enum Channel {
    #[key = "presence"]
    Presence,
    #[key = "chat"]
    Chat,
    Heartbeat,
}

#[derive(Debug, Clone, Copy, PartialEq, HashKey)]
enum Unicode {
    #[key = "Hello, 世界"]
    World,
    #[key = "A界𐐷"]
    Supplementary,
}

#[test]
fn string_hash_matches_runtime() {
    const HELLO: u32 = string_hash!("Hello");
    assert_eq!(HELLO, 181379975);
    assert_eq!(string_hash!("Mary had a little lamb."), hash_compat("Mary had a little lamb."));
    assert_eq!(string_hash!(""), 5381);
}

#[test]
fn string_hash_byte_strings() {
    assert_eq!(string_hash!(b"\xED\x80\x01"), 193380297);
    assert_eq!(string_hash!(b"\xD8\x01\xC3"), hash_compat(b"\xD8\x01\xC3"));
}

#[test]
fn string_hash_in_match_pattern() {
    fn route(name: &str) -> &'static str {
        match hash_str(name) {
            string_hash!("ping") => "pong",
            string_hash!("Hello") => "world",
            _ => "unknown",
        }
    }

    assert_eq!(route("ping"), "pong");
    assert_eq!(route("Hello"), "world");
    assert_eq!(route("nope"), "unknown");
}

#[test]
fn derived_keys() {
    assert_eq!(Channel::Presence.key(), "presence");
    assert_eq!(Channel::Heartbeat.key(), "Heartbeat");
    assert_eq!(Channel::keys(), ["presence", "chat", "Heartbeat"]);
}

#[test]
fn derived_hashes_match_runtime() {
    for channel in [Channel::Presence, Channel::Chat, Channel::Heartbeat] {
        assert_eq!(channel.hash_key(), hash_str(channel.key()));
    }
    assert_eq!(Unicode::World.hash_key(), 1861035601);
    assert_eq!(Unicode::Supplementary.hash_key(), 1362180894);
}

#[test]
fn derived_lookup() {
    assert_eq!(Channel::from_hash_key(hash_str("chat")), Some(Channel::Chat));
    assert_eq!(Channel::from_hash_key(string_hash!("Heartbeat")), Some(Channel::Heartbeat));
    assert_eq!(Channel::from_hash_key(0), None);
    assert_eq!(Channel::from_key("presence"), Some(Channel::Presence));
    assert_eq!(Channel::from_key("Presence"), None);
}

#[test]
fn reexports_are_usable() {
    assert_eq!(stringhash::SEED, 5381);
    assert_eq!(stringhash::core::hash_compat("Hello"), stringhash::hash_str("Hello"));
    let pool = ScratchPool::with_config(PoolConfig::new().with_max_idle(1));
    assert_eq!(pool.hash("Hello, world!"), 343662184);
}
