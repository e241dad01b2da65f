//! Binary data processing utilities
//!
//! Pure conversions from raw little-endian bytes to numeric values, plus the
//! type tags used for runtime-selected reads.
//!
//! # Design Principles
//!
//! - **Stateless**: No shared scratch buffers, every cast is `from_le_bytes`
//! - **Width in the type**: Typecasts take `&[u8; N]`, so bounds checking
//!   stays with the reader

pub mod data_type;
pub mod primitive;
pub mod typecast;
pub mod value;

pub use data_type::DataType;
pub use primitive::Primitive;
pub use typecast::*;
pub use value::{TypedArray, Value};
