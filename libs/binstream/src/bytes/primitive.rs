//! Fixed-width element types the reader can decode
//!
//! `Primitive` binds a Rust numeric type to its `DataType` tag, its encoded
//! width, and the typecast that turns exactly `WIDTH` bytes into a value.

use super::typecast::*;
use super::DataType;

/// A numeric type with a fixed little-endian encoding
pub trait Primitive: Copy + Sized + 'static {
    /// Runtime tag for this type
    const DATA_TYPE: DataType;

    /// Encoded size in bytes
    const WIDTH: usize;

    /// Decode from a chunk of exactly `WIDTH` bytes.
    ///
    /// Returns `None` if the chunk length is not `WIDTH`.
    fn from_le_chunk(chunk: &[u8]) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $data_type:ident, $width:literal, $cast:ident;)*) => {
        $(
            impl Primitive for $ty {
                const DATA_TYPE: DataType = DataType::$data_type;
                const WIDTH: usize = $width;

                #[inline]
                fn from_le_chunk(chunk: &[u8]) -> Option<Self> {
                    let bytes: &[u8; $width] = chunk.try_into().ok()?;
                    Some($cast(bytes))
                }
            }
        )*
    };
}

impl_primitive! {
    i8 => I8, 1, bytes_to_i8;
    u8 => U8, 1, bytes_to_u8;
    i16 => I16, 2, bytes_to_i16;
    u16 => U16, 2, bytes_to_u16;
    i32 => I32, 4, bytes_to_i32;
    u32 => U32, 4, bytes_to_u32;
    f32 => F32, 4, bytes_to_f32;
    f64 => F64, 8, bytes_to_f64;
    i64 => I64, 8, bytes_to_i64;
    u64 => U64, 8, bytes_to_u64;
}
