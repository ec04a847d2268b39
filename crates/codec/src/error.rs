//! The errors that may occur while encoding or decoding RC layouts.

use rc_lock_types::UnknownFlagError;
use thiserror::Error;

/// Shorthand for a `Result` where the error type is a `DecodeError`.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Shorthand for a `Result` where the error type is an `EncodeError`.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Decoding failed. No partial record is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The identity flag byte is not a known [`IdentityFlag`][rc_lock_types::IdentityFlag].
    #[error(transparent)]
    UnknownFlag(#[from] UnknownFlagError),
    /// The buffer is shorter than the layout or a length prefix requires.
    #[error("buffer too small: {required} bytes required, {available} available")]
    TruncatedBuffer {
        /// Bytes the layout needs.
        required: usize,
        /// Bytes actually available.
        available: usize,
    },
    /// The UDT metadata table header is inconsistent.
    #[error("malformed UDT metadata: {0}")]
    MalformedMetadata(&'static str),
    /// A metadata string is not valid UTF-8.
    #[error("UDT metadata field `{field}` is not valid UTF-8")]
    InvalidUtf8 {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A typed view asked for a field the record does not have.
    #[error("record has no field `{0}`")]
    MissingField(&'static str),
    /// A typed view asked for a field as the wrong kind of value.
    #[error("field `{0}` holds a different kind of value")]
    FieldKindMismatch(&'static str),
}

/// Encoding failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A value is wider than its declared field.
    #[error("value for field `{field}` is {len} bytes, wider than its {width} byte field")]
    FieldWidthExceeded {
        /// Name of the field.
        field: &'static str,
        /// Declared width of the field.
        width: usize,
        /// Length of the value.
        len: usize,
    },
    /// The record has no value for a field in the schema.
    #[error("record has no value for field `{0}`")]
    MissingField(&'static str),
    /// The value does not match the kind of its field.
    #[error("value for field `{0}` does not match the field kind")]
    FieldKindMismatch(&'static str),
}
