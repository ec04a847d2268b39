//! Derive RC supply lock scripts and list the supply info cells they guard.
//!
//! ## Deriving Scripts
//!
//! An RC supply lock is identified by an [`Identity`] and an issuer id (the
//! type id hash of the info cell). [`derive_supply_lock_args`] lays those out
//! as lock args, and [`derive_dependent_script`] produces the sUDT type
//! script whose args are the hash of that lock script.
//!
//! ## Listing Cells
//!
//! Cells are fetched page by page through a [`PagedQuery`] implementation
//! supplied by the caller. [`collect_pages`] follows the cursor until an
//! empty page is returned. The [`RcSupplyLockHelper`] ties the two halves
//! together behind the deployment's [`HelperConfig`].
//!
//! [`Identity`]: rc_lock_types::Identity
#![deny(missing_docs, unsafe_code)]

#[doc(inline)]
pub use config::{ConfigError, HelperConfig};
#[doc(inline)]
pub use derivation::{
    derive_dependent_script, derive_supply_lock_args, derive_supply_lock_script,
    supply_search_args,
};
#[doc(inline)]
pub use helper::RcSupplyLockHelper;
#[doc(inline)]
pub use query::{collect_pages, Cursor, Page, PagedQuery, QueryError, SearchKey};
pub use rc_lock_codec as codec;
pub use rc_lock_types as types;

pub mod config;
pub mod derivation;
mod helper;
pub mod query;
