//! Stream Error Types
//!
//! The decoder has a single failure mode: a read, seek or skip that would
//! leave the buffer.

use thiserror::Error;

/// Result type for binstream operations
pub type Result<T> = std::result::Result<T, StreamError>;

/// Binary stream errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Requested position or span lies outside the buffer
    #[error(
        "Cannot access buffer at out of bound offset: offset {offset}, requested {requested}, buffer length {len}"
    )]
    OutOfBounds {
        /// Cursor position when the call was made
        offset: usize,
        /// Byte count (or absolute target for seeks) that was asked for
        requested: usize,
        /// Total buffer length
        len: usize,
    },
}

impl StreamError {
    /// Create an out-of-bounds error for an access at `offset` asking for `requested` bytes
    pub fn out_of_bounds(offset: usize, requested: usize, len: usize) -> Self {
        StreamError::OutOfBounds {
            offset,
            requested,
            len,
        }
    }
}

/// Error returned when parsing an unknown data type name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown data type: {0}")]
pub struct UnknownDataType(pub String);
