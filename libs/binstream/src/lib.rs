//! Binary Stream Library
//!
//! Cursor-based decoding of little-endian binary data from a borrowed buffer.
//!
//! # Architecture
//!
//! This library provides:
//! - **Cursor Reader**: `BinaryReader`, sequential bounds-checked reads with
//!   all-or-nothing cursor movement
//! - **Bytes Utilities**: Little-endian typecasts, the `Primitive` trait, and
//!   runtime type tags (`DataType`, `Value`, `TypedArray`)
//! - **Text Decoding**: Lossy UTF-8 decoding used for fixed-length strings
//!
//! Writing/encoding and big-endian data are out of scope.
//!
//! # Features
//!
//! - `serde` - `Serialize` for values and `Serialize`/`Deserialize` for
//!   `DataType` (default)

pub mod bytes;
pub mod error;
pub mod reader;
pub mod text;

// Re-export core types
pub use bytes::{DataType, Primitive, TypedArray, Value};
pub use error::{Result, StreamError, UnknownDataType};
pub use reader::BinaryReader;
