use super::*;
use crate::DecodeError;
use rc_lock_types::{IdentityFlag, UnknownFlagError};

fn test_supply_args() -> LockArgsSupply {
    LockArgsSupply {
        identity: Identity::new(IdentityFlag::Eth, [0x11; 20]),
        lock_flag: LockFlag::SUPPLY,
        type_id_hash: [0x22; 32],
    }
}

#[test]
fn schema_widths() {
    assert_eq!(LOCK_ARGS_IDENTITY.width(), LockArgsIdentity::SIZE);
    assert_eq!(LOCK_ARGS_SUPPLY.width(), LockArgsSupply::SIZE);
    assert_eq!(LOCK_ARGS_SUPPLY.offset_of(RC_IDENTITY_FLAG), Some(0));
    assert_eq!(LOCK_ARGS_SUPPLY.offset_of(RC_IDENTITY_PUBKEY_HASH), Some(1));
    assert_eq!(LOCK_ARGS_SUPPLY.offset_of(RC_LOCK_FLAG), Some(21));
    assert_eq!(LOCK_ARGS_SUPPLY.offset_of(TYPE_ID_HASH), Some(22));
    assert_eq!(OMNI_SUPPLY_LOCK_ARGS.fields(), LOCK_ARGS_SUPPLY.fields());
}

#[test]
fn encode_supply_args_layout() {
    let encoded = test_supply_args().encode().unwrap();
    let expected = [vec![0x01], vec![0x11; 20], vec![0x08], vec![0x22; 32]].concat();
    assert_eq!(encoded.len(), 54);
    assert_eq!(encoded, expected);
    assert_eq!(LockArgsSupply::decode(&encoded).unwrap(), test_supply_args());
}

#[test]
fn identity_args_prefix_of_supply_args() {
    let supply = test_supply_args();
    let encoded = supply.encode().unwrap();
    let identity = LockArgsIdentity::decode(&encoded).unwrap();
    assert_eq!(identity, LockArgsIdentity::from(supply));
    assert_eq!(identity.encode().unwrap(), encoded[..LockArgsIdentity::SIZE]);
}

#[test]
fn decode_combined_lock_flags() {
    let mut encoded = test_supply_args().encode().unwrap();
    encoded[21] = 0b0000_1111;
    let decoded = LockArgsSupply::decode(&encoded).unwrap();
    assert_eq!(
        decoded.lock_flag,
        LockFlag::ROOT | LockFlag::ACP | LockFlag::SINCE | LockFlag::SUPPLY
    );
    assert_eq!(decoded.encode().unwrap(), encoded);
}

#[test]
fn decode_unknown_flag() {
    let mut encoded = test_supply_args().encode().unwrap();
    for flag in 2..=u8::MAX {
        encoded[0] = flag;
        assert_eq!(
            LockArgsSupply::decode(&encoded),
            Err(DecodeError::UnknownFlag(UnknownFlagError(flag)))
        );
    }
}

#[test]
fn decode_truncated() {
    let encoded = test_supply_args().encode().unwrap();
    for len in 0..LockArgsSupply::SIZE {
        let err = LockArgsSupply::decode(&encoded[..len]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedBuffer {
                required: LockArgsSupply::SIZE,
                available: len,
            }
        );
    }
    // Identity args only need the first 22 bytes.
    assert!(LockArgsIdentity::decode(&encoded[..LockArgsIdentity::SIZE]).is_ok());
}

#[test]
fn new_sets_supply_flag_alone() {
    let args = LockArgsSupply::new(Identity::new(IdentityFlag::Ckb, [3; 20]), [4; 32]);
    assert_eq!(args.lock_flag, LockFlag::SUPPLY);
    assert_eq!(args.encode().unwrap()[21], 0x08);
}
