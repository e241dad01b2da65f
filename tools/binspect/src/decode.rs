//! Layout-driven decoding
//!
//! Walks a `BinaryReader` through the layout's fields in order and stops at
//! the first field that does not fit.

use binstream::{BinaryReader, StreamError, TypedArray, Value};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{FieldKind, FieldSpec, LayoutError};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Field '{name}' at offset {offset}: {source}")]
    Field {
        name: String,
        offset: usize,
        #[source]
        source: StreamError,
    },
}

/// Decoded content of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(Value),
    Array(TypedArray),
    Text(String),
    /// Lowercase hex of the raw bytes
    Bytes(String),
    /// Number of bytes skipped
    Skipped(usize),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Scalar(value) => write!(f, "{}", value),
            FieldValue::Array(array) => write!(f, "{}", array),
            FieldValue::Text(text) => write!(f, "{:?}", text),
            FieldValue::Bytes(hex) => write!(f, "0x{}", hex),
            FieldValue::Skipped(n) => write!(f, "<skipped {} bytes>", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField {
    pub name: String,
    /// Offset of the field's first byte
    pub offset: usize,
    pub kind: String,
    pub value: FieldValue,
}

/// Decode every field in order
pub fn decode_fields(
    reader: &mut BinaryReader<'_>,
    fields: &[FieldSpec],
) -> Result<Vec<DecodedField>, DecodeError> {
    let mut decoded = Vec::with_capacity(fields.len());

    for field in fields {
        let kind = field.resolve()?;
        let offset = reader.offset();
        let value = decode_one(reader, kind).map_err(|source| DecodeError::Field {
            name: field.name.clone(),
            offset,
            source,
        })?;

        debug!(
            field = %field.name,
            offset,
            consumed = reader.offset() - offset,
            "Decoded field"
        );
        decoded.push(DecodedField {
            name: field.name.clone(),
            offset,
            kind: field.kind.clone(),
            value,
        });
    }

    Ok(decoded)
}

fn decode_one(reader: &mut BinaryReader<'_>, kind: FieldKind) -> binstream::Result<FieldValue> {
    Ok(match kind {
        FieldKind::Scalar(data_type) => FieldValue::Scalar(reader.read_value(data_type)?),
        FieldKind::Array(data_type, count) => {
            FieldValue::Array(reader.read_typed_array(data_type, count)?)
        },
        FieldKind::String(length) => FieldValue::Text(reader.read_string(length)?.into_owned()),
        FieldKind::Bytes(length) => FieldValue::Bytes(hex::encode(reader.read_bytes(length)?)),
        FieldKind::Skip(length) => {
            reader.skip(length)?;
            FieldValue::Skipped(length)
        },
    })
}
