//! Cursor Reader
//!
//! `BinaryReader` walks a borrowed byte buffer front to back, decoding
//! little-endian primitives, typed arrays and fixed-length strings.
//!
//! # Bounds policy
//!
//! Every call checks the remaining capacity before touching the cursor. A
//! failing call returns `StreamError::OutOfBounds` and leaves the reader
//! exactly where it was, so the same call fails the same way again.
//!
//! # Example
//!
//! ```
//! use binstream::BinaryReader;
//!
//! let data = [0x34, 0x12, 0x41, 0x42, 0x00, 0x43];
//! let mut reader = BinaryReader::new(&data);
//!
//! assert_eq!(reader.read_u16()?, 0x1234);
//! assert_eq!(reader.read_string(4)?, "AB");
//! assert!(reader.is_at_end());
//! # Ok::<(), binstream::StreamError>(())
//! ```

use std::borrow::Cow;

use tracing::trace;

use crate::bytes::{DataType, Primitive, TypedArray, Value};
use crate::error::{Result, StreamError};
use crate::text::{decode_utf8, until_nul};

/// Sequential, bounds-checked reader over a borrowed buffer
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader positioned at the start of `buffer`
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Create a reader positioned at `offset`.
    ///
    /// `offset == buffer.len()` is allowed and yields an exhausted reader.
    pub fn with_offset(buffer: &'a [u8], offset: usize) -> Result<Self> {
        let mut reader = Self::new(buffer);
        reader.seek(offset)?;
        Ok(reader)
    }

    /// Current cursor position
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Total buffer length
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the underlying buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Check if every byte has been consumed
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// The whole underlying buffer, independent of the cursor
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    // ========================================================================
    // Positioning
    // ========================================================================

    /// Move the cursor to an absolute position
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.buffer.len() {
            return Err(self.bounds_error(offset));
        }
        self.offset = offset;
        Ok(())
    }

    /// Move the cursor to an absolute position
    #[deprecated(note = "use `seek` instead")]
    pub fn set_offset(&mut self, offset: usize) -> Result<()> {
        self.seek(offset)
    }

    /// Advance the cursor by `bytes` without decoding anything
    pub fn skip(&mut self, bytes: usize) -> Result<()> {
        self.take(bytes).map(|_| ())
    }

    // ========================================================================
    // Raw bytes and text
    // ========================================================================

    /// Borrow the next `length` bytes
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        self.take(length)
    }

    /// Read a fixed-length, NUL-terminated UTF-8 string.
    ///
    /// Exactly `length` bytes are consumed. The returned text stops at the
    /// first `0x00` inside that span; invalid UTF-8 becomes U+FFFD.
    pub fn read_string(&mut self, length: usize) -> Result<Cow<'a, str>> {
        let span = self.take(length)?;
        Ok(decode_utf8(until_nul(span)))
    }

    // ========================================================================
    // Generic reads
    // ========================================================================

    /// Read one little-endian element of type `T`
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        let chunk = self.peek(T::WIDTH)?;
        let value = T::from_le_chunk(chunk).ok_or_else(|| self.bounds_error(T::WIDTH))?;
        self.offset += T::WIDTH;
        Ok(value)
    }

    /// Read `length` contiguous little-endian elements of type `T`
    pub fn read_array<T: Primitive>(&mut self, length: usize) -> Result<Vec<T>> {
        let byte_len = length
            .checked_mul(T::WIDTH)
            .ok_or_else(|| self.bounds_error(usize::MAX))?;
        let span = self.peek(byte_len)?;
        let values = span
            .chunks_exact(T::WIDTH)
            .map(T::from_le_chunk)
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| self.bounds_error(byte_len))?;
        self.offset += byte_len;
        Ok(values)
    }

    /// Read one element whose type is chosen at runtime
    pub fn read_value(&mut self, data_type: DataType) -> Result<Value> {
        match data_type {
            DataType::I8 => self.read().map(Value::I8),
            DataType::U8 => self.read().map(Value::U8),
            DataType::I16 => self.read().map(Value::I16),
            DataType::U16 => self.read().map(Value::U16),
            DataType::I32 => self.read().map(Value::I32),
            DataType::U32 => self.read().map(Value::U32),
            DataType::F32 => self.read().map(Value::F32),
            DataType::F64 => self.read().map(Value::F64),
            DataType::I64 => self.read().map(Value::I64),
            DataType::U64 => self.read().map(Value::U64),
        }
    }

    /// Read `length` elements whose type is chosen at runtime
    pub fn read_typed_array(&mut self, data_type: DataType, length: usize) -> Result<TypedArray> {
        match data_type {
            DataType::I8 => self.read_array(length).map(TypedArray::I8),
            DataType::U8 => self.read_array(length).map(TypedArray::U8),
            DataType::I16 => self.read_array(length).map(TypedArray::I16),
            DataType::U16 => self.read_array(length).map(TypedArray::U16),
            DataType::I32 => self.read_array(length).map(TypedArray::I32),
            DataType::U32 => self.read_array(length).map(TypedArray::U32),
            DataType::F32 => self.read_array(length).map(TypedArray::F32),
            DataType::F64 => self.read_array(length).map(TypedArray::F64),
            DataType::I64 => self.read_array(length).map(TypedArray::I64),
            DataType::U64 => self.read_array(length).map(TypedArray::U64),
        }
    }

    // ========================================================================
    // Scalars
    // ========================================================================

    /// Read a 1-byte i8
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read()
    }

    /// Read a 1-byte u8
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read()
    }

    /// Read a 2-byte little-endian i16
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read()
    }

    /// Read a 2-byte little-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read()
    }

    /// Read a 4-byte little-endian i32
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read()
    }

    /// Read a 4-byte little-endian u32
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read()
    }

    /// Read a 4-byte little-endian f32
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read()
    }

    /// Read an 8-byte little-endian f64
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read()
    }

    /// Read an 8-byte little-endian i64 (full range)
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read()
    }

    /// Read an 8-byte little-endian u64 (full range)
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read()
    }

    // ========================================================================
    // Arrays
    // ========================================================================

    /// Read `length` i8 values, 1 byte each
    pub fn read_i8_array(&mut self, length: usize) -> Result<Vec<i8>> {
        self.read_array(length)
    }

    /// Read `length` u8 values, 1 byte each
    pub fn read_u8_array(&mut self, length: usize) -> Result<Vec<u8>> {
        self.read_array(length)
    }

    /// Read `length` little-endian i16 values, 2 bytes each
    pub fn read_i16_array(&mut self, length: usize) -> Result<Vec<i16>> {
        self.read_array(length)
    }

    /// Read `length` little-endian u16 values, 2 bytes each
    pub fn read_u16_array(&mut self, length: usize) -> Result<Vec<u16>> {
        self.read_array(length)
    }

    /// Read `length` little-endian i32 values, 4 bytes each
    pub fn read_i32_array(&mut self, length: usize) -> Result<Vec<i32>> {
        self.read_array(length)
    }

    /// Read `length` little-endian u32 values, 4 bytes each
    pub fn read_u32_array(&mut self, length: usize) -> Result<Vec<u32>> {
        self.read_array(length)
    }

    /// Read `length` little-endian f32 values, 4 bytes each
    pub fn read_f32_array(&mut self, length: usize) -> Result<Vec<f32>> {
        self.read_array(length)
    }

    /// Read `length` little-endian f64 values, 8 bytes each
    pub fn read_f64_array(&mut self, length: usize) -> Result<Vec<f64>> {
        self.read_array(length)
    }

    /// Read `length` little-endian i64 values, 8 bytes each
    pub fn read_i64_array(&mut self, length: usize) -> Result<Vec<i64>> {
        self.read_array(length)
    }

    /// Read `length` little-endian u64 values, 8 bytes each
    pub fn read_u64_array(&mut self, length: usize) -> Result<Vec<u64>> {
        self.read_array(length)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Borrow the next `length` bytes without moving the cursor
    fn peek(&self, length: usize) -> Result<&'a [u8]> {
        if length > self.remaining() {
            return Err(self.bounds_error(length));
        }
        let buffer = self.buffer;
        Ok(&buffer[self.offset..self.offset + length])
    }

    /// Borrow the next `length` bytes and advance past them
    fn take(&mut self, length: usize) -> Result<&'a [u8]> {
        let span = self.peek(length)?;
        self.offset += length;
        Ok(span)
    }

    fn bounds_error(&self, requested: usize) -> StreamError {
        trace!(
            offset = self.offset,
            requested,
            len = self.buffer.len(),
            "Rejected out of bounds access"
        );
        StreamError::out_of_bounds(self.offset, requested, self.buffer.len())
    }
}

impl<'a> From<&'a [u8]> for BinaryReader<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        BinaryReader::new(buffer)
    }
}
