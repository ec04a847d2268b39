//! # Fixed-Width Field Schemas
//!
//! A [`FieldSchema`] is an ordered list of named fields, each with a fixed
//! byte width. Fields are laid out contiguously in declaration order, so the
//! offset of a field is the sum of the widths declared before it and the
//! width of the schema is the sum of all field widths.
//!
//! Schemas only ever grow at the end: [`FieldSchema::extended`] copies a
//! schema and appends one field after the parent's total width, leaving the
//! parent's fields and offsets untouched.

use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use rc_lock_types::{validate_flag, IdentityFlag};
use std::collections::BTreeMap;


/// How a field's bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single unsigned byte.
    U8,
    /// A 16-byte little-endian unsigned integer.
    U128Le,
    /// An opaque byte string of the given width.
    ///
    /// Shorter values are zero-padded on the right when encoding. Longer
    /// values are rejected.
    Bytes(usize),
    /// A single byte validated as an [`IdentityFlag`].
    IdentityFlag,
}

/// A single decoded or to-be-encoded field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Value of a [`FieldKind::U8`] field.
    U8(u8),
    /// Value of a [`FieldKind::U128Le`] field.
    U128(u128),
    /// Value of a [`FieldKind::Bytes`] field.
    Bytes(Vec<u8>),
    /// Value of a [`FieldKind::IdentityFlag`] field.
    IdentityFlag(IdentityFlag),
}

/// A named field of a [`FieldSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Name used to look the value up in a [`Record`].
    pub name: &'static str,
    /// How the field's bytes are interpreted.
    pub kind: FieldKind,
}

/// An ordered list of fixed-width fields.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct FieldSchema {
    fields: Vec<Field>,
    width: usize,
}

/// Field values keyed by field name.
///
/// Two records are equal when they hold the same values under the same
/// names, whatever order the values were added in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Record(BTreeMap<&'static str, FieldValue>);

impl FieldKind {
    /// Number of bytes the field occupies.
    pub const fn width(&self) -> usize {
        match self {
            FieldKind::U8 | FieldKind::IdentityFlag => 1,
            FieldKind::U128Le => core::mem::size_of::<u128>(),
            FieldKind::Bytes(width) => *width,
        }
    }
}

impl FieldSchema {
    /// An empty schema.
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            width: 0,
        }
    }

    /// Append a field.
    ///
    /// Field names must be unique within a schema.
    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        debug_assert!(
            self.offset_of(name).is_none(),
            "duplicate field name `{name}`"
        );
        self.width += kind.width();
        self.fields.push(Field { name, kind });
        self
    }

    /// A copy of this schema with one more field appended at the end.
    pub fn extended(&self, name: &'static str, kind: FieldKind) -> Self {
        self.clone().field(name, kind)
    }

    /// The fields in layout order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Total width in bytes.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Byte offset of the named field from the start of the layout.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in &self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.kind.width();
        }
        None
    }

    /// Check that `buf` holds the full layout starting at `offset`.
    pub fn check_len(&self, buf: &[u8], offset: usize) -> DecodeResult<()> {
        let available = buf.len().saturating_sub(offset);
        if available < self.width {
            return Err(DecodeError::TruncatedBuffer {
                required: self.width,
                available,
            });
        }
        Ok(())
    }

    /// Decode every field, in order, starting at `offset`.
    ///
    /// Bytes past the end of the layout are ignored. Decoding stops at the
    /// first field that fails, so an invalid identity flag aborts before any
    /// later field is read.
    pub fn decode(&self, buf: &[u8], offset: usize) -> DecodeResult<Record> {
        self.check_len(buf, offset)?;
        let mut values = BTreeMap::new();
        let mut at = offset;
        for field in &self.fields {
            let end = at + field.kind.width();
            let value = decode_field(field.kind, &buf[at..end])?;
            values.insert(field.name, value);
            at = end;
        }
        Ok(Record(values))
    }

    /// Encode the record into a buffer of exactly [`FieldSchema::width`] bytes.
    ///
    /// Values in the record that are not part of the schema are ignored.
    pub fn encode(&self, record: &Record) -> EncodeResult<Vec<u8>> {
        let mut buf = vec![0u8; self.width];
        let mut at = 0;
        for field in &self.fields {
            let end = at + field.kind.width();
            let value = record
                .get(field.name)
                .ok_or(EncodeError::MissingField(field.name))?;
            encode_field(field, value, &mut buf[at..end])?;
            at = end;
        }
        Ok(buf)
    }
}

/// `bytes` is exactly `kind.width()` long.
fn decode_field(kind: FieldKind, bytes: &[u8]) -> DecodeResult<FieldValue> {
    let value = match kind {
        FieldKind::U8 => FieldValue::U8(bytes[0]),
        FieldKind::IdentityFlag => FieldValue::IdentityFlag(validate_flag(bytes[0])?),
        FieldKind::U128Le => {
            let mut arr = [0u8; 16];
            arr.copy_from_slice(bytes);
            FieldValue::U128(u128::from_le_bytes(arr))
        }
        FieldKind::Bytes(_) => FieldValue::Bytes(bytes.to_vec()),
    };
    Ok(value)
}

/// `out` is exactly `field.kind.width()` long and zeroed.
fn encode_field(field: &Field, value: &FieldValue, out: &mut [u8]) -> EncodeResult<()> {
    match (field.kind, value) {
        (FieldKind::U8, FieldValue::U8(v)) => out[0] = *v,
        (FieldKind::IdentityFlag, FieldValue::IdentityFlag(flag)) => out[0] = flag.as_u8(),
        (FieldKind::U128Le, FieldValue::U128(v)) => out.copy_from_slice(&v.to_le_bytes()),
        (FieldKind::Bytes(width), FieldValue::Bytes(bytes)) => {
            if bytes.len() > width {
                return Err(EncodeError::FieldWidthExceeded {
                    field: field.name,
                    width,
                    len: bytes.len(),
                });
            }
            out[..bytes.len()].copy_from_slice(bytes);
        }
        _ => return Err(EncodeError::FieldKindMismatch(field.name)),
    }
    Ok(())
}

impl Record {
    /// An empty record.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the named value, replacing any previous value for that name.
    pub fn with(mut self, name: &'static str, value: FieldValue) -> Self {
        self.0.insert(name, value);
        self
    }

    /// Look up a value by field name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Iterate over `(name, value)` pairs, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.0.iter().map(|(n, v)| (*n, v))
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&self, name: &'static str) -> DecodeResult<&FieldValue> {
        self.get(name).ok_or(DecodeError::MissingField(name))
    }

    /// The named [`FieldValue::U8`].
    pub fn u8(&self, name: &'static str) -> DecodeResult<u8> {
        match self.require(name)? {
            FieldValue::U8(v) => Ok(*v),
            _ => Err(DecodeError::FieldKindMismatch(name)),
        }
    }

    /// The named [`FieldValue::U128`].
    pub fn u128(&self, name: &'static str) -> DecodeResult<u128> {
        match self.require(name)? {
            FieldValue::U128(v) => Ok(*v),
            _ => Err(DecodeError::FieldKindMismatch(name)),
        }
    }

    /// The named [`FieldValue::IdentityFlag`].
    pub fn identity_flag(&self, name: &'static str) -> DecodeResult<IdentityFlag> {
        match self.require(name)? {
            FieldValue::IdentityFlag(flag) => Ok(*flag),
            _ => Err(DecodeError::FieldKindMismatch(name)),
        }
    }

    /// The named [`FieldValue::Bytes`] as an array of exactly `N` bytes.
    pub fn array<const N: usize>(&self, name: &'static str) -> DecodeResult<[u8; N]> {
        match self.require(name)? {
            FieldValue::Bytes(bytes) => bytes
                .as_slice()
                .try_into()
                .map_err(|_| DecodeError::FieldKindMismatch(name)),
            _ => Err(DecodeError::FieldKindMismatch(name)),
        }
    }
}

impl FromIterator<(&'static str, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (&'static str, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
