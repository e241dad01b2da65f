//! Element type tags for dynamic reads
//!
//! `DataType` names the ten fixed-width element kinds the reader can decode.
//! It lets callers pick the element type at runtime (from a layout file, a
//! header field, a CLI flag) instead of at compile time.

use std::str::FromStr;

use crate::error::UnknownDataType;

/// Fixed-width element kind
///
/// # Naming Convention
/// Short names follow Rust primitive names: `i8`, `u8`, `i16`, `u16`,
/// `i32`, `u32`, `f32`, `f64`, `i64`, `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DataType {
    /// Signed 8-bit integer
    I8,
    /// Unsigned 8-bit integer
    U8,
    /// Signed 16-bit integer, little-endian
    I16,
    /// Unsigned 16-bit integer, little-endian
    U16,
    /// Signed 32-bit integer, little-endian
    I32,
    /// Unsigned 32-bit integer, little-endian
    U32,
    /// IEEE-754 single precision, little-endian
    F32,
    /// IEEE-754 double precision, little-endian
    F64,
    /// Signed 64-bit integer, little-endian
    I64,
    /// Unsigned 64-bit integer, little-endian
    U64,
}

impl DataType {
    /// Every data type, narrowest first
    pub const ALL: [DataType; 10] = [
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::F32,
        Self::F64,
        Self::I64,
        Self::U64,
    ];

    /// Convert from common string representations
    ///
    /// Matching is case-insensitive. Supported forms:
    /// - Rust names: "i8", "u16", "f32", ...
    /// - Typed-array names: "int8", "uint16", "float32", "bigint64", "biguint64"
    /// - C names: "char", "uchar", "short", "ushort", "int", "uint", "float",
    ///   "double", "long", "ulong"
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(&['-', '_'][..], "");
        match normalized.as_str() {
            "i8" | "int8" | "char" => Some(Self::I8),
            "u8" | "uint8" | "uchar" | "byte" => Some(Self::U8),
            "i16" | "int16" | "short" => Some(Self::I16),
            "u16" | "uint16" | "ushort" => Some(Self::U16),
            "i32" | "int32" | "int" => Some(Self::I32),
            "u32" | "uint32" | "uint" => Some(Self::U32),
            "f32" | "float32" | "float" => Some(Self::F32),
            "f64" | "float64" | "double" => Some(Self::F64),
            "i64" | "int64" | "bigint64" | "long" => Some(Self::I64),
            "u64" | "uint64" | "biguint64" | "ulong" => Some(Self::U64),
            _ => None,
        }
    }

    /// Canonical short name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I64 => "i64",
            Self::U64 => "u64",
        }
    }

    /// Encoded width in bytes
    pub fn width(&self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::F64 | Self::I64 | Self::U64 => 8,
        }
    }

    /// Check if this is a signed integer or float type
    pub fn is_signed(&self) -> bool {
        !matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// Check if this is an IEEE-754 float type
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = UnknownDataType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::from_str(s).ok_or_else(|| UnknownDataType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(DataType::from_str("u8"), Some(DataType::U8));
        assert_eq!(DataType::from_str("I16"), Some(DataType::I16));
        assert_eq!(DataType::from_str("uint16"), Some(DataType::U16));
        assert_eq!(DataType::from_str("float"), Some(DataType::F32));
        assert_eq!(DataType::from_str("double"), Some(DataType::F64));
        assert_eq!(DataType::from_str("BigInt64"), Some(DataType::I64));
        assert_eq!(DataType::from_str("big_uint64"), Some(DataType::U64));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(DataType::from_str("u128"), None);
        assert_eq!(DataType::from_str(""), None);
        assert!("string".parse::<DataType>().is_err());
    }

    #[test]
    fn test_as_str_roundtrips_through_parse() {
        for data_type in DataType::ALL {
            assert_eq!(data_type.as_str().parse::<DataType>(), Ok(data_type));
            assert_eq!(data_type.to_string(), data_type.as_str());
        }
    }

    #[test]
    fn test_widths() {
        let widths: Vec<usize> = DataType::ALL.iter().map(DataType::width).collect();
        assert_eq!(widths, vec![1, 1, 2, 2, 4, 4, 4, 8, 8, 8]);
    }

    #[test]
    fn test_properties() {
        assert!(DataType::I8.is_signed());
        assert!(DataType::F32.is_signed());
        assert!(!DataType::U64.is_signed());

        assert!(DataType::F64.is_float());
        assert!(!DataType::I64.is_float());
    }
}
