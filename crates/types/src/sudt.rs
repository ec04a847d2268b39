//! # sUDT Supply Records
//! The caller-facing records produced by decoding RC supply info cells.

use crate::{Hash, Identity};
use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// The supply state and metadata of a UDT, as stored in an info cell's data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SudtSupplyInfo {
    /// Info cell data format version.
    pub version: u8,
    /// Amount issued so far.
    #[serde(with = "crate::serde::u128_hex")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub current_supply: u128,
    /// Upper bound on the issued amount.
    #[serde(with = "crate::serde::u128_hex")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub max_supply: u128,
    /// Hash of the sUDT type script issued under this info cell.
    #[serde(with = "crate::serde::hash")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub sudt_script_hash: Hash,
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Number of decimal places.
    pub decimals: u8,
    /// Free-form description.
    pub description: String,
}

/// A decoded RC supply info cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SudtInfo {
    /// Type id hash of the info cell, identifying the issuance.
    #[serde(with = "crate::serde::hash")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub udt_id: Hash,
    /// Owner of the supply lock.
    pub rc_identity: Identity,
    /// Supply state and metadata, serialized inline with the fields above.
    #[serde(flatten)]
    pub supply: SudtSupplyInfo,
}
