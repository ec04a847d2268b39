//! # RC Lock Args
//!
//! | Field | Size (bytes) | Description |
//! | --- | --- | --- |
//! | `rc_identity_flag` | 1 | [`IdentityFlag`][rc_lock_types::IdentityFlag] |
//! | `rc_identity_pubkey_hash` | 20 | hash of the owner's public key |
//! | `rc_lock_flag` | 1 | [`LockFlag`] bits |
//! | `type_id_hash` | 32 | issuer type id hash, supply args only |
//!
//! The identity flag is validated before any other field is read.

use crate::{
    error::{DecodeResult, EncodeResult},
    schema::{FieldKind, FieldSchema, FieldValue, Record},
};
use once_cell::sync::Lazy;
use rc_lock_types::{Hash, Identity, LockFlag, PubkeyHash};

#[cfg(test)]
mod tests;

/// Name of the identity flag field.
pub const RC_IDENTITY_FLAG: &str = "rc_identity_flag";
/// Name of the pubkey hash field.
pub const RC_IDENTITY_PUBKEY_HASH: &str = "rc_identity_pubkey_hash";
/// Name of the lock flag field.
pub const RC_LOCK_FLAG: &str = "rc_lock_flag";
/// Name of the issuer type id hash field.
pub const TYPE_ID_HASH: &str = "type_id_hash";

/// Layout of [`LockArgsIdentity`].
pub static LOCK_ARGS_IDENTITY: Lazy<FieldSchema> = Lazy::new(|| {
    FieldSchema::new()
        .field(RC_IDENTITY_FLAG, FieldKind::IdentityFlag)
        .field(
            RC_IDENTITY_PUBKEY_HASH,
            FieldKind::Bytes(core::mem::size_of::<PubkeyHash>()),
        )
        .field(RC_LOCK_FLAG, FieldKind::U8)
});

/// Layout of [`LockArgsSupply`]: the identity layout followed by the issuer
/// type id hash.
pub static LOCK_ARGS_SUPPLY: Lazy<FieldSchema> = Lazy::new(|| {
    LOCK_ARGS_IDENTITY.extended(TYPE_ID_HASH, FieldKind::Bytes(core::mem::size_of::<Hash>()))
});

/// Omni lock shares the RC lock args layout.
pub use self::LOCK_ARGS_IDENTITY as OMNI_IDENTITY_LOCK_ARGS;
/// Omni lock shares the RC supply lock args layout.
pub use self::LOCK_ARGS_SUPPLY as OMNI_SUPPLY_LOCK_ARGS;

/// Lock args naming an identity and its lock mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockArgsIdentity {
    /// Owner of the lock.
    pub identity: Identity,
    /// Lock mode bits.
    pub lock_flag: LockFlag,
}

/// Lock args of an RC supply info cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockArgsSupply {
    /// Owner of the lock.
    pub identity: Identity,
    /// Lock mode bits, [`LockFlag::SUPPLY`] for supply cells.
    pub lock_flag: LockFlag,
    /// Type id hash of the issuance this lock guards.
    pub type_id_hash: Hash,
}

impl LockArgsIdentity {
    /// Encoded size in bytes.
    pub const SIZE: usize = 22;

    /// Encode to [`Self::SIZE`] bytes.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        LOCK_ARGS_IDENTITY.encode(&self.to_record())
    }

    /// Decode from the start of `buf`.
    pub fn decode(buf: &[u8]) -> DecodeResult<Self> {
        Self::from_record(&LOCK_ARGS_IDENTITY.decode(buf, 0)?)
    }

    /// The field values of these args.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with(
                RC_IDENTITY_FLAG,
                FieldValue::IdentityFlag(self.identity.flag),
            )
            .with(
                RC_IDENTITY_PUBKEY_HASH,
                FieldValue::Bytes(self.identity.pubkey_hash.to_vec()),
            )
            .with(RC_LOCK_FLAG, FieldValue::U8(self.lock_flag.bits()))
    }

    /// Read the args back out of decoded field values.
    pub fn from_record(record: &Record) -> DecodeResult<Self> {
        Ok(Self {
            identity: Identity {
                flag: record.identity_flag(RC_IDENTITY_FLAG)?,
                pubkey_hash: record.array(RC_IDENTITY_PUBKEY_HASH)?,
            },
            lock_flag: LockFlag::from_bits_retain(record.u8(RC_LOCK_FLAG)?),
        })
    }
}

impl LockArgsSupply {
    /// Encoded size in bytes.
    pub const SIZE: usize = LockArgsIdentity::SIZE + 32;

    /// Supply lock args with the [`LockFlag::SUPPLY`] flag alone.
    pub const fn new(identity: Identity, type_id_hash: Hash) -> Self {
        Self {
            identity,
            lock_flag: LockFlag::SUPPLY,
            type_id_hash,
        }
    }

    /// Encode to [`Self::SIZE`] bytes.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        LOCK_ARGS_SUPPLY.encode(&self.to_record())
    }

    /// Decode from the start of `buf`.
    pub fn decode(buf: &[u8]) -> DecodeResult<Self> {
        Self::from_record(&LOCK_ARGS_SUPPLY.decode(buf, 0)?)
    }

    /// The field values of these args.
    pub fn to_record(&self) -> Record {
        LockArgsIdentity {
            identity: self.identity,
            lock_flag: self.lock_flag,
        }
        .to_record()
        .with(TYPE_ID_HASH, FieldValue::Bytes(self.type_id_hash.to_vec()))
    }

    /// Read the args back out of decoded field values.
    pub fn from_record(record: &Record) -> DecodeResult<Self> {
        let LockArgsIdentity {
            identity,
            lock_flag,
        } = LockArgsIdentity::from_record(record)?;
        Ok(Self {
            identity,
            lock_flag,
            type_id_hash: record.array(TYPE_ID_HASH)?,
        })
    }
}

impl From<LockArgsSupply> for LockArgsIdentity {
    fn from(args: LockArgsSupply) -> Self {
        Self {
            identity: args.identity,
            lock_flag: args.lock_flag,
        }
    }
}
