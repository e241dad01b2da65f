//! Little-endian typecasts from fixed-size byte arrays
//!
//! Each function reinterprets exactly `size_of::<T>()` bytes as `T`, with
//! byte 0 as the least significant byte. Signed results are two's complement
//! and floats are a bit-for-bit reinterpretation of the IEEE-754 pattern.
//!
//! There is no bounds checking here: the array length is part of the
//! signature, and the caller is responsible for slicing the input.

// ============================================================================
// 8-bit
// ============================================================================

/// Convert 1 byte to i8
pub fn bytes_to_i8(bytes: &[u8; 1]) -> i8 {
    i8::from_le_bytes(*bytes)
}

/// Convert 1 byte to u8
pub fn bytes_to_u8(bytes: &[u8; 1]) -> u8 {
    bytes[0]
}

// ============================================================================
// 16-bit
// ============================================================================

/// Convert 2 bytes to i16
pub fn bytes_to_i16(bytes: &[u8; 2]) -> i16 {
    i16::from_le_bytes(*bytes)
}

/// Convert 2 bytes to u16
pub fn bytes_to_u16(bytes: &[u8; 2]) -> u16 {
    u16::from_le_bytes(*bytes)
}

// ============================================================================
// 32-bit
// ============================================================================

/// Convert 4 bytes to i32
pub fn bytes_to_i32(bytes: &[u8; 4]) -> i32 {
    i32::from_le_bytes(*bytes)
}

/// Convert 4 bytes to u32
pub fn bytes_to_u32(bytes: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*bytes)
}

/// Convert 4 bytes to f32
pub fn bytes_to_f32(bytes: &[u8; 4]) -> f32 {
    f32::from_le_bytes(*bytes)
}

// ============================================================================
// 64-bit
// ============================================================================

/// Convert 8 bytes to f64
pub fn bytes_to_f64(bytes: &[u8; 8]) -> f64 {
    f64::from_le_bytes(*bytes)
}

/// Convert 8 bytes to i64
pub fn bytes_to_i64(bytes: &[u8; 8]) -> i64 {
    i64::from_le_bytes(*bytes)
}

/// Convert 8 bytes to u64
pub fn bytes_to_u64(bytes: &[u8; 8]) -> u64 {
    u64::from_le_bytes(*bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_i8_twos_complement() {
        assert_eq!(bytes_to_i8(&[0x00]), 0);
        assert_eq!(bytes_to_i8(&[0x7F]), 127);
        assert_eq!(bytes_to_i8(&[0x80]), -128);
        assert_eq!(bytes_to_i8(&[0xFF]), -1);
        assert_eq!(bytes_to_u8(&[0xFF]), 255);
    }

    #[test]
    fn test_bytes_to_16bit() {
        assert_eq!(bytes_to_u16(&[0x34, 0x12]), 0x1234);
        assert_eq!(bytes_to_i16(&[0xFE, 0xFF]), -2);
        assert_eq!(bytes_to_i16(&[0x00, 0x80]), i16::MIN);
    }

    #[test]
    fn test_bytes_to_32bit() {
        assert_eq!(bytes_to_u32(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
        assert_eq!(bytes_to_i32(&[0xFF, 0xFF, 0xFF, 0x7F]), i32::MAX);
        assert_eq!(bytes_to_i32(&[0xFF, 0xFF, 0xFF, 0xFF]), -1);
    }

    #[test]
    fn test_bytes_to_f32() {
        // 1.0 in IEEE 754: 0x3F800000
        assert_eq!(bytes_to_f32(&[0x00, 0x00, 0x80, 0x3F]), 1.0);
        // 25.0 in IEEE 754: 0x41C80000
        assert_eq!(bytes_to_f32(&[0x00, 0x00, 0xC8, 0x41]), 25.0);
        assert_eq!(bytes_to_f32(&[0x00, 0x00, 0x80, 0xFF]), f32::NEG_INFINITY);
        assert!(bytes_to_f32(&[0x00, 0x00, 0xC0, 0x7F]).is_nan());
    }

    #[test]
    fn test_bytes_to_f64() {
        // -2.5 in IEEE 754: 0xC004000000000000
        assert_eq!(
            bytes_to_f64(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0xC0]),
            -2.5
        );
    }

    #[test]
    fn test_bytes_to_64bit_extremes() {
        assert_eq!(bytes_to_u64(&[0x00; 8]), 0);
        assert_eq!(bytes_to_i64(&[0x00; 8]), 0);
        assert_eq!(bytes_to_u64(&[0xFF; 8]), u64::MAX);
        assert_eq!(bytes_to_i64(&[0xFF; 8]), -1);
        assert_eq!(
            bytes_to_u64(&[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]),
            0x0102_0304_0506_0708
        );
    }
}
