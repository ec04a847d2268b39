//! Base types for RC lock supply cells.
//!
//! These are the value objects that flow between the lock args codec, the
//! script derivation logic and the paged cell queries. None of them carry
//! identity beyond their field values.
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod fmt;
pub mod identity;
pub mod script;
pub mod serde;
pub mod sudt;

#[doc(inline)]
pub use identity::{validate_flag, Identity, IdentityFlag, LockFlag, UnknownFlagError};
#[doc(inline)]
pub use script::{CellOutput, HashType, OutPoint, ResolvedCell, Script, ScriptTemplate, ScriptType};
#[doc(inline)]
pub use sudt::{SudtInfo, SudtSupplyInfo};

/// A 32-byte hash, e.g. a script hash or an issuer type id hash.
pub type Hash = [u8; 32];

/// The 20-byte hash of a public key used by an [`Identity`].
pub type PubkeyHash = [u8; 20];
