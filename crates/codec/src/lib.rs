//! Binary layouts for RC lock args and RC supply info cells.
//!
//! ## Layouts
//!
//! All multi-byte integers are little-endian.
//!
//! | Structure | Offset | Field | Width |
//! | --- | --- | --- | --- |
//! | [`LockArgsIdentity`] | 0 | `rc_identity_flag` | 1 |
//! | | 1 | `rc_identity_pubkey_hash` | 20 |
//! | | 21 | `rc_lock_flag` | 1 |
//! | [`LockArgsSupply`] | 22 | `type_id_hash` | 32 |
//! | [`SupplyOutputData`] | 0 | `version` | 1 |
//! | | 1 | `current_supply` | 16 |
//! | | 17 | `max_supply` | 16 |
//! | | 33 | `sudt_script_hash` | 32 |
//! | (trailing) | 65 | [`UdtInfo`] | variable |
//!
//! Each fixed layout is a [`FieldSchema`]: an ordered list of named fields,
//! built once and shared as static data.
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[doc(inline)]
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
#[doc(inline)]
pub use lock_args::{
    LockArgsIdentity, LockArgsSupply, LOCK_ARGS_IDENTITY, LOCK_ARGS_SUPPLY,
    OMNI_IDENTITY_LOCK_ARGS, OMNI_SUPPLY_LOCK_ARGS,
};
pub use rc_lock_types as types;
#[doc(inline)]
pub use schema::{Field, FieldKind, FieldSchema, FieldValue, Record};
#[doc(inline)]
pub use supply::{
    decode_sudt_info, decode_supply_info, encode_supply_info, SupplyOutputData,
    SUPPLY_OUTPUT_DATA,
};
#[doc(inline)]
pub use udt_info::UdtInfo;

pub mod error;
pub mod lock_args;
pub mod schema;
pub mod supply;
pub mod udt_info;
