//! Custom serde module implementations.
//!
//! Human-readable formats use `0x`-prefixed lowercase hex, matching the JSON
//! representation used by CKB nodes and indexers. Other formats use raw
//! bytes and native integers.

pub mod bytes;
pub mod hash;
pub mod u128_hex;

/// Strip an optional `0x` prefix from a hex string.
pub(crate) fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}
