//! Deterministic derivation of RC supply lock scripts and the sUDT type
//! scripts that depend on them.
//!
//! Supply lock args are laid out by [`LOCK_ARGS_SUPPLY`]: identity flag,
//! pubkey hash, [`LockFlag::SUPPLY`], then the issuer id. That byte order is
//! part of the on-chain contract.
//!
//! [`LOCK_ARGS_SUPPLY`]: rc_lock_codec::LOCK_ARGS_SUPPLY

use rc_lock_codec::{EncodeResult, LockArgsIdentity, LockArgsSupply};
use rc_lock_types::{Hash, Identity, LockFlag, Script, ScriptTemplate};


/// Encode supply lock args for the identity and issuer id.
pub fn derive_supply_lock_args(
    identity: &Identity,
    issuer_id: &Hash,
) -> EncodeResult<Vec<u8>> {
    LockArgsSupply::new(*identity, *issuer_id).encode()
}

/// Lock args to search for.
///
/// Without an issuer id this is the 22-byte prefix shared by every supply
/// lock of the identity.
pub fn supply_search_args(
    identity: &Identity,
    issuer_id: Option<&Hash>,
) -> EncodeResult<Vec<u8>> {
    match issuer_id {
        Some(issuer_id) => derive_supply_lock_args(identity, issuer_id),
        None => LockArgsIdentity {
            identity: *identity,
            lock_flag: LockFlag::SUPPLY,
        }
        .encode(),
    }
}

/// The supply lock script for the identity and issuer id.
pub fn derive_supply_lock_script(
    rc_lock: &ScriptTemplate,
    identity: &Identity,
    issuer_id: &Hash,
) -> EncodeResult<Script> {
    Ok(rc_lock.with_args(derive_supply_lock_args(identity, issuer_id)?))
}

/// The script whose args are the hash of `lock_script`.
///
/// For an RC supply lock and the sUDT template this is the type script of
/// the tokens issued under that lock.
pub fn derive_dependent_script(template: &ScriptTemplate, lock_script: &Script) -> Script {
    template.with_args(rc_lock_hash::script_hash(lock_script).to_vec())
}
