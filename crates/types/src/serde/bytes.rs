//! Variable length byte strings (script args, cursors, cell data).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a byte string.
pub fn serialize<S>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if s.is_human_readable() {
        format!("0x{}", hex::encode(bytes)).serialize(s)
    } else {
        bytes.serialize(s)
    }
}

/// Deserialize a byte string.
pub fn deserialize<'de, D>(d: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    if d.is_human_readable() {
        let string = String::deserialize(d)?;
        hex::decode(super::strip_0x(&string)).map_err(serde::de::Error::custom)
    } else {
        Vec::deserialize(d)
    }
}
