//! A minimal crate containing the [`script_hash`] function and the
//! associated pre-hash [`serialize`] implementation for [`Script`]s.
//!
//! Both are delegated to `ckb-types`: scripts are serialized as the molecule
//! `Script` table and hashed with CKB's personalized blake2b-256. Any other
//! serialization would produce a different hash from the one computed on
//! chain.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use ckb_types::{packed, prelude::*};
use rc_lock_types::{Hash, Script};

/// Standardized trait for hashing scripts with the ledger's hash function.
pub trait ScriptHash {
    /// Produce the script hash of self.
    fn script_hash(&self) -> Hash;
}

/// Convert to the ledger model's packed script.
pub fn to_packed(script: &Script) -> packed::Script {
    packed::Script::new_builder()
        .code_hash(script.code_hash.pack())
        .hash_type(packed::Byte::new(script.hash_type.as_u8()))
        .args(script.args.as_slice().pack())
        .build()
}

/// Serialize a script the way the ledger does before hashing it.
pub fn serialize(script: &Script) -> Vec<u8> {
    to_packed(script).as_slice().to_vec()
}

/// Hash a script.
pub fn script_hash(script: &Script) -> Hash {
    let hash = to_packed(script).calc_script_hash();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(hash.as_slice());
    bytes
}

impl ScriptHash for Script {
    fn script_hash(&self) -> Hash {
        script_hash(self)
    }
}
