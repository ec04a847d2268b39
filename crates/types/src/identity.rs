//! # RC Identities
//!
//! An identity names the owner of an RC lock: a flag saying which kind of
//! key it is, followed by the 20-byte hash of the public key.
//!
//! See the `ckb_identity.h` header of `ckb-c-stdlib` for the on-chain
//! counterpart of [`IdentityFlag`].

use crate::PubkeyHash;
use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;


/// The kind of key behind an [`Identity`].
///
/// Only the two flags below are recognised. Any other byte is rejected with
/// [`UnknownFlagError`] and never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum IdentityFlag {
    /// A secp256k1 key hashed with CKB's blake160.
    Ckb = 0x00,
    /// An Ethereum address.
    Eth = 0x01,
}

/// The identity flag byte was neither `0x00` nor `0x01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown RC identity flag: {0}")]
pub struct UnknownFlagError(pub u8);

bitflags::bitflags! {
    /// Flags stored in the lock flag byte of RC lock args.
    ///
    /// Decoding keeps every bit, including ones not named here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct LockFlag: u8 {
        /// Administrator (root) mode.
        const ROOT = 1;
        /// Anyone-can-pay mode.
        const ACP = 1 << 1;
        /// Time lock mode.
        const SINCE = 1 << 2;
        /// Supply mode, where the lock guards a UDT issuance info cell.
        const SUPPLY = 1 << 3;
    }
}

/// An owner of an RC lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// The kind of key.
    pub flag: IdentityFlag,
    /// Hash of the public key.
    #[serde(with = "crate::serde::hash")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub pubkey_hash: PubkeyHash,
}

/// Validate a raw identity flag byte.
pub const fn validate_flag(n: u8) -> Result<IdentityFlag, UnknownFlagError> {
    match n {
        0x00 => Ok(IdentityFlag::Ckb),
        0x01 => Ok(IdentityFlag::Eth),
        _ => Err(UnknownFlagError(n)),
    }
}

impl IdentityFlag {
    /// The byte stored on chain for this flag.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for IdentityFlag {
    type Error = UnknownFlagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        validate_flag(value)
    }
}

impl From<IdentityFlag> for u8 {
    fn from(flag: IdentityFlag) -> Self {
        flag.as_u8()
    }
}

impl Identity {
    /// Size in bytes of an identity as it appears at the front of lock args.
    pub const SIZE: usize = 1 + core::mem::size_of::<PubkeyHash>();

    /// Shorthand constructor.
    pub const fn new(flag: IdentityFlag, pubkey_hash: PubkeyHash) -> Self {
        Self { flag, pubkey_hash }
    }

    /// The flag byte followed by the pubkey hash.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = self.flag.as_u8();
        bytes[1..].copy_from_slice(&self.pubkey_hash);
        bytes
    }
}

#[cfg(feature = "fuzz")]
impl proptest::arbitrary::Arbitrary for IdentityFlag {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        prop_oneof![Just(IdentityFlag::Ckb), Just(IdentityFlag::Eth)].boxed()
    }
}
