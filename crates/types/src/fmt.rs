//! `core::fmt` implementations and related items.

use crate::{HashType, Identity, IdentityFlag, UnknownFlagError};
use core::{fmt, str};

impl fmt::Display for IdentityFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdentityFlag::Ckb => write!(f, "ckb"),
            IdentityFlag::Eth => write!(f, "eth"),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            HashType::Data => "data",
            HashType::Type => "type",
            HashType::Data1 => "data1",
            HashType::Data2 => "data2",
        };
        f.write_str(s)
    }
}

impl fmt::LowerHex for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{self:x}")
    }
}

/// Failed to parse an [`Identity`] from hex.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseIdentityError {
    /// The string was not 21 bytes of hex.
    #[error("invalid identity hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The leading byte was not a known flag.
    #[error(transparent)]
    Flag(#[from] UnknownFlagError),
}

impl str::FromStr for Identity {
    type Err = ParseIdentityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vec = hex::decode(crate::serde::strip_0x(s))?;
        let bytes: [u8; Identity::SIZE] = vec
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        let flag = IdentityFlag::try_from(bytes[0])?;
        let mut pubkey_hash = [0u8; 20];
        pubkey_hash.copy_from_slice(&bytes[1..]);
        Ok(Identity::new(flag, pubkey_hash))
    }
}
