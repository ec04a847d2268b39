//! # Scripts and Cells
//! A minimal view of the CKB ledger model: just enough to describe the
//! scripts this workspace derives and the cells returned by an indexer.

use crate::Hash;
use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// How a script's `code_hash` is matched against deployed code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum HashType {
    /// Match the data hash of the code cell, run with VM version 0.
    Data = 0,
    /// Match the type script hash of the code cell.
    #[default]
    Type = 1,
    /// Match the data hash, run with VM version 1.
    Data1 = 2,
    /// Match the data hash, run with VM version 2.
    Data2 = 4,
}

/// A script without its args.
///
/// Deployment configuration names the code of a script; the args are filled
/// in per identity and issuer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScriptTemplate {
    /// Hash identifying the script code.
    #[serde(with = "crate::serde::hash")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub code_hash: Hash,
    /// How `code_hash` is interpreted.
    pub hash_type: HashType,
}

/// A lock or type script.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Script {
    /// Hash identifying the script code.
    #[serde(with = "crate::serde::hash")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub code_hash: Hash,
    /// How `code_hash` is interpreted.
    pub hash_type: HashType,
    /// Arguments passed to the script.
    #[serde(with = "crate::serde::bytes")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub args: Vec<u8>,
}

/// Which script of a cell an indexer search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    /// Match the lock script.
    Lock,
    /// Match the type script.
    Type,
}

/// Reference to a cell: the transaction that created it and the output index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OutPoint {
    /// Hash of the creating transaction.
    #[serde(with = "crate::serde::hash")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub tx_hash: Hash,
    /// Index of the output within the transaction.
    pub index: u32,
}

/// The output part of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CellOutput {
    /// Capacity in shannons.
    pub capacity: u64,
    /// The lock script.
    pub lock: Script,
    /// The optional type script.
    #[serde(rename = "type")]
    pub type_: Option<Script>,
}

/// A live cell as returned by an indexer query.
///
/// This is a read-only snapshot; nothing in this workspace mutates or
/// persists it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResolvedCell {
    /// Where the cell lives.
    pub out_point: OutPoint,
    /// The cell's capacity and scripts.
    pub output: CellOutput,
    /// The cell's data.
    #[serde(with = "crate::serde::bytes")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub output_data: Vec<u8>,
}

impl HashType {
    /// The byte used for this hash type in serialized scripts.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl ScriptTemplate {
    /// Complete the template with the given args.
    pub fn with_args(&self, args: Vec<u8>) -> Script {
        Script {
            code_hash: self.code_hash,
            hash_type: self.hash_type,
            args,
        }
    }
}

impl From<&Script> for ScriptTemplate {
    fn from(script: &Script) -> Self {
        Self {
            code_hash: script.code_hash,
            hash_type: script.hash_type,
        }
    }
}
