//! # RC Supply Info Cell Data
//!
//! | Field | Size (bytes) | Description |
//! | --- | --- | --- |
//! | `version` | 1 | data format version |
//! | `current_supply` | 16 | little-endian `u128`, amount issued so far |
//! | `max_supply` | 16 | little-endian `u128`, issuance cap |
//! | `sudt_script_hash` | 32 | hash of the issued sUDT type script |
//! | UDT metadata | variable | [`UdtInfo`] table |

use crate::{
    error::{DecodeResult, EncodeResult},
    lock_args::LockArgsSupply,
    schema::{FieldKind, FieldSchema, FieldValue, Record},
    udt_info::UdtInfo,
};
use once_cell::sync::Lazy;
use rc_lock_types::{Hash, ResolvedCell, SudtInfo, SudtSupplyInfo};


/// Name of the version field.
pub const VERSION: &str = "version";
/// Name of the current supply field.
pub const CURRENT_SUPPLY: &str = "current_supply";
/// Name of the max supply field.
pub const MAX_SUPPLY: &str = "max_supply";
/// Name of the sUDT script hash field.
pub const SUDT_SCRIPT_HASH: &str = "sudt_script_hash";

/// Layout of the fixed header of supply info cell data.
pub static SUPPLY_OUTPUT_DATA: Lazy<FieldSchema> = Lazy::new(|| {
    FieldSchema::new()
        .field(VERSION, FieldKind::U8)
        .field(CURRENT_SUPPLY, FieldKind::U128Le)
        .field(MAX_SUPPLY, FieldKind::U128Le)
        .field(
            SUDT_SCRIPT_HASH,
            FieldKind::Bytes(core::mem::size_of::<Hash>()),
        )
});

/// The fixed header of supply info cell data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupplyOutputData {
    /// Data format version.
    pub version: u8,
    /// Amount issued so far.
    pub current_supply: u128,
    /// Issuance cap.
    pub max_supply: u128,
    /// Hash of the issued sUDT type script.
    pub sudt_script_hash: Hash,
}

impl SupplyOutputData {
    /// Encoded size in bytes.
    pub const SIZE: usize = 65;

    /// Encode to [`Self::SIZE`] bytes.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        SUPPLY_OUTPUT_DATA.encode(&self.to_record())
    }

    /// Decode from the start of `buf`, ignoring anything after the header.
    pub fn decode(buf: &[u8]) -> DecodeResult<Self> {
        Self::from_record(&SUPPLY_OUTPUT_DATA.decode(buf, 0)?)
    }

    /// The field values of this header.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with(VERSION, FieldValue::U8(self.version))
            .with(CURRENT_SUPPLY, FieldValue::U128(self.current_supply))
            .with(MAX_SUPPLY, FieldValue::U128(self.max_supply))
            .with(
                SUDT_SCRIPT_HASH,
                FieldValue::Bytes(self.sudt_script_hash.to_vec()),
            )
    }

    /// Read the header back out of decoded field values.
    pub fn from_record(record: &Record) -> DecodeResult<Self> {
        Ok(Self {
            version: record.u8(VERSION)?,
            current_supply: record.u128(CURRENT_SUPPLY)?,
            max_supply: record.u128(MAX_SUPPLY)?,
            sudt_script_hash: record.array(SUDT_SCRIPT_HASH)?,
        })
    }
}

/// Decode supply info cell data: the fixed header followed by the metadata
/// table in the remaining bytes.
pub fn decode_supply_info(output_data: &[u8]) -> DecodeResult<SudtSupplyInfo> {
    let header = SupplyOutputData::decode(output_data)?;
    let info = UdtInfo::decode(&output_data[SUPPLY_OUTPUT_DATA.width()..])?;
    Ok(SudtSupplyInfo {
        version: header.version,
        current_supply: header.current_supply,
        max_supply: header.max_supply,
        sudt_script_hash: header.sudt_script_hash,
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        description: info.description,
    })
}

/// Encode supply info cell data. The inverse of [`decode_supply_info`].
pub fn encode_supply_info(supply: &SudtSupplyInfo) -> EncodeResult<Vec<u8>> {
    let header = SupplyOutputData {
        version: supply.version,
        current_supply: supply.current_supply,
        max_supply: supply.max_supply,
        sudt_script_hash: supply.sudt_script_hash,
    };
    let info = UdtInfo {
        name: supply.name.clone(),
        symbol: supply.symbol.clone(),
        decimals: supply.decimals,
        description: supply.description.clone(),
    };
    let mut buf = header.encode()?;
    buf.extend(info.encode()?);
    Ok(buf)
}

/// Decode a supply info cell: the owner and issuer from its lock args, the
/// supply state from its data.
pub fn decode_sudt_info(cell: &ResolvedCell) -> DecodeResult<SudtInfo> {
    let args = LockArgsSupply::decode(&cell.output.lock.args)?;
    let supply = decode_supply_info(&cell.output_data)?;
    Ok(SudtInfo {
        udt_id: args.type_id_hash,
        rc_identity: args.identity,
        supply,
    })
}
