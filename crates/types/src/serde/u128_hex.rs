//! Supply amounts as `0x`-prefixed hex numbers in human-readable formats.
//!
//! Amounts never pass through a narrower integer type, so the full `u128`
//! range survives a round trip.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a `u128` amount.
pub fn serialize<S>(value: &u128, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if s.is_human_readable() {
        format!("{value:#x}").serialize(s)
    } else {
        value.serialize(s)
    }
}

/// Deserialize a `u128` amount.
pub fn deserialize<'de, D>(d: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    if d.is_human_readable() {
        let string = String::deserialize(d)?;
        u128::from_str_radix(super::strip_0x(&string), 16).map_err(serde::de::Error::custom)
    } else {
        u128::deserialize(d)
    }
}
