//! # UDT Metadata
//!
//! The variable length block that follows the fixed supply header is a
//! molecule table:
//!
//! ```text
//! table UdtInfo {
//!     name:        Bytes,
//!     symbol:      Bytes,
//!     decimals:    byte,
//!     description: Bytes,
//! }
//! ```
//!
//! Encoded as
//!
//! | Part | Size (bytes) | Description |
//! | --- | --- | --- |
//! | `total_size` | 4 | size of the whole table, header included |
//! | offsets | 4 * 4 | start of each field from the start of the table |
//! | fields | variable | each `Bytes` is a 4-byte item count then the bytes |
//!
//! All `u32`s are little-endian. Every length and offset is checked against
//! the bytes actually available before it is used.

use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};

#[cfg(test)]
mod tests;

const NUMBER_SIZE: usize = core::mem::size_of::<u32>();
const FIELD_COUNT: usize = 4;
const HEADER_SIZE: usize = NUMBER_SIZE * (1 + FIELD_COUNT);

const TABLE: &str = "udt_info";
const NAME: &str = "name";
const SYMBOL: &str = "symbol";
const DECIMALS: &str = "decimals";
const DESCRIPTION: &str = "description";

/// Token metadata stored after the supply header.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UdtInfo {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Number of decimal places. Any byte value is accepted.
    pub decimals: u8,
    /// Free-form description.
    pub description: String,
}

impl UdtInfo {
    /// Decode a table occupying exactly `buf`.
    pub fn decode(buf: &[u8]) -> DecodeResult<Self> {
        let total_size = read_u32(buf, 0)?;
        if total_size > buf.len() {
            return Err(DecodeError::TruncatedBuffer {
                required: total_size,
                available: buf.len(),
            });
        }
        if total_size < buf.len() {
            return Err(DecodeError::MalformedMetadata(
                "trailing bytes after table",
            ));
        }
        if total_size == NUMBER_SIZE {
            return Err(DecodeError::MalformedMetadata("table has no fields"));
        }

        let first_offset = read_u32(buf, NUMBER_SIZE)?;
        if first_offset % NUMBER_SIZE != 0 || first_offset < NUMBER_SIZE * 2 {
            return Err(DecodeError::MalformedMetadata("invalid first field offset"));
        }
        if first_offset / NUMBER_SIZE - 1 != FIELD_COUNT {
            return Err(DecodeError::MalformedMetadata("expected 4 fields"));
        }
        if total_size < HEADER_SIZE {
            return Err(DecodeError::TruncatedBuffer {
                required: HEADER_SIZE,
                available: total_size,
            });
        }

        let mut bounds = [0usize; FIELD_COUNT + 1];
        for (i, bound) in bounds.iter_mut().take(FIELD_COUNT).enumerate() {
            *bound = read_u32(buf, NUMBER_SIZE * (1 + i))?;
        }
        bounds[FIELD_COUNT] = total_size;
        for pair in bounds.windows(2) {
            if pair[0] > total_size {
                return Err(DecodeError::TruncatedBuffer {
                    required: pair[0],
                    available: total_size,
                });
            }
            if pair[0] > pair[1] {
                return Err(DecodeError::MalformedMetadata("field offsets not ascending"));
            }
        }

        Ok(Self {
            name: decode_string(&buf[bounds[0]..bounds[1]], NAME)?,
            symbol: decode_string(&buf[bounds[1]..bounds[2]], SYMBOL)?,
            decimals: decode_byte(&buf[bounds[2]..bounds[3]])?,
            description: decode_string(&buf[bounds[3]..bounds[4]], DESCRIPTION)?,
        })
    }

    /// Encode as a molecule table.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        let name = encode_bytes(self.name.as_bytes(), NAME)?;
        let symbol = encode_bytes(self.symbol.as_bytes(), SYMBOL)?;
        let decimals = [self.decimals];
        let description = encode_bytes(self.description.as_bytes(), DESCRIPTION)?;
        let fields: [&[u8]; FIELD_COUNT] = [&name, &symbol, &decimals, &description];

        let total_size = HEADER_SIZE + fields.iter().map(|f| f.len()).sum::<usize>();
        let mut buf = Vec::with_capacity(total_size);
        buf.extend(encode_u32(total_size, TABLE)?);
        let mut offset = HEADER_SIZE;
        for field in fields {
            buf.extend(encode_u32(offset, TABLE)?);
            offset += field.len();
        }
        for field in fields {
            buf.extend_from_slice(field);
        }
        Ok(buf)
    }
}

fn read_u32(buf: &[u8], at: usize) -> DecodeResult<usize> {
    let Some(bytes) = buf.get(at..at + NUMBER_SIZE) else {
        return Err(DecodeError::TruncatedBuffer {
            required: at + NUMBER_SIZE,
            available: buf.len(),
        });
    };
    let mut arr = [0u8; NUMBER_SIZE];
    arr.copy_from_slice(bytes);
    Ok(u32::from_le_bytes(arr) as usize)
}

/// A molecule `Bytes` occupying exactly `buf`, as UTF-8.
fn decode_string(buf: &[u8], field: &'static str) -> DecodeResult<String> {
    let item_count = read_u32(buf, 0)?;
    let required = NUMBER_SIZE.saturating_add(item_count);
    if required > buf.len() {
        return Err(DecodeError::TruncatedBuffer {
            required,
            available: buf.len(),
        });
    }
    if required < buf.len() {
        return Err(DecodeError::MalformedMetadata("bytes field size mismatch"));
    }
    String::from_utf8(buf[NUMBER_SIZE..].to_vec()).map_err(|_| DecodeError::InvalidUtf8 { field })
}

fn decode_byte(buf: &[u8]) -> DecodeResult<u8> {
    match buf {
        [byte] => Ok(*byte),
        [] => Err(DecodeError::TruncatedBuffer {
            required: 1,
            available: 0,
        }),
        _ => Err(DecodeError::MalformedMetadata("byte field size mismatch")),
    }
}

fn encode_u32(n: usize, field: &'static str) -> EncodeResult<[u8; NUMBER_SIZE]> {
    u32::try_from(n)
        .map(u32::to_le_bytes)
        .map_err(|_| EncodeError::FieldWidthExceeded {
            field,
            width: u32::MAX as usize,
            len: n,
        })
}

fn encode_bytes(bytes: &[u8], field: &'static str) -> EncodeResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(NUMBER_SIZE + bytes.len());
    buf.extend(encode_u32(bytes.len(), field)?);
    buf.extend_from_slice(bytes);
    Ok(buf)
}
