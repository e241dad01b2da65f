//! Reader Property Tests
//!
//! Property-based checks over arbitrary buffers and call sequences:
//! - Seek succeeds exactly inside `[0, len]`
//! - Scalars decode to the value that produced their bytes
//! - Consumption is exact across mixed call sequences
//! - Failing calls never move the cursor and fail identically when repeated

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use binstream::{BinaryReader, DataType};
use proptest::prelude::*;

/// One reader call, with the byte count it consumes on success
#[derive(Debug, Clone)]
enum Op {
    Skip(usize),
    Bytes(usize),
    Str(usize),
    Scalar(DataType),
    Array(DataType, usize),
}

impl Op {
    fn width(&self) -> usize {
        match self {
            Op::Skip(n) | Op::Bytes(n) | Op::Str(n) => *n,
            Op::Scalar(data_type) => data_type.width(),
            Op::Array(data_type, n) => data_type.width() * n,
        }
    }

    fn apply(&self, reader: &mut BinaryReader<'_>) -> bool {
        match self {
            Op::Skip(n) => reader.skip(*n).is_ok(),
            Op::Bytes(n) => reader.read_bytes(*n).is_ok(),
            Op::Str(n) => reader.read_string(*n).is_ok(),
            Op::Scalar(data_type) => reader.read_value(*data_type).is_ok(),
            Op::Array(data_type, n) => reader.read_typed_array(*data_type, *n).is_ok(),
        }
    }
}

fn data_type_strategy() -> impl Strategy<Value = DataType> {
    prop::sample::select(DataType::ALL.to_vec())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Skip),
        (0usize..8).prop_map(Op::Bytes),
        (0usize..8).prop_map(Op::Str),
        data_type_strategy().prop_map(Op::Scalar),
        (data_type_strategy(), 0usize..4).prop_map(|(t, n)| Op::Array(t, n)),
    ]
}

proptest! {
    #[test]
    fn prop_seek_inside_buffer(data in prop::collection::vec(any::<u8>(), 0..64), target in 0usize..80) {
        let mut reader = BinaryReader::new(&data);
        let result = reader.seek(target);

        if target <= data.len() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(reader.offset(), target);
            prop_assert_eq!(reader.remaining(), data.len() - target);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(reader.offset(), 0);
            prop_assert!(BinaryReader::with_offset(&data, target).is_err());
        }
    }

    #[test]
    fn prop_integers_decode_exactly(a in any::<i16>(), b in any::<u32>(), c in any::<i64>(), d in any::<u64>()) {
        let mut data = Vec::new();
        data.extend_from_slice(&a.to_le_bytes());
        data.extend_from_slice(&b.to_le_bytes());
        data.extend_from_slice(&c.to_le_bytes());
        data.extend_from_slice(&d.to_le_bytes());

        let mut reader = BinaryReader::new(&data);
        prop_assert_eq!(reader.read_i16().unwrap(), a);
        prop_assert_eq!(reader.read_u32().unwrap(), b);
        prop_assert_eq!(reader.read_i64().unwrap(), c);
        prop_assert_eq!(reader.read_u64().unwrap(), d);
        prop_assert!(reader.is_at_end());
    }

    #[test]
    fn prop_float_bits_preserved(bits32 in any::<u32>(), bits64 in any::<u64>()) {
        let mut data = Vec::new();
        data.extend_from_slice(&bits32.to_le_bytes());
        data.extend_from_slice(&bits64.to_le_bytes());

        let mut reader = BinaryReader::new(&data);
        prop_assert_eq!(reader.read_f32().unwrap().to_bits(), bits32);
        prop_assert_eq!(reader.read_f64().unwrap().to_bits(), bits64);
    }

    #[test]
    fn prop_consumption_is_exact(
        data in prop::collection::vec(any::<u8>(), 0..48),
        ops in prop::collection::vec(op_strategy(), 0..16),
    ) {
        let mut reader = BinaryReader::new(&data);

        for op in &ops {
            let before = reader.offset();
            let remaining = reader.remaining();

            if op.apply(&mut reader) {
                prop_assert!(op.width() <= remaining);
                prop_assert_eq!(reader.offset(), before + op.width());
                prop_assert_eq!(reader.remaining(), remaining - op.width());
            } else {
                prop_assert!(op.width() > remaining);
                prop_assert_eq!(reader.offset(), before);
                prop_assert!(!op.apply(&mut reader), "retry must fail identically");
                prop_assert_eq!(reader.offset(), before);
            }
        }
    }

    #[test]
    fn prop_string_consumes_requested_length(
        prefix in "[a-z]{0,8}",
        tail in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let mut data = prefix.as_bytes().to_vec();
        data.push(0);
        data.extend_from_slice(&tail);

        let mut reader = BinaryReader::new(&data);
        let text = reader.read_string(data.len()).unwrap();
        prop_assert_eq!(text.as_ref(), prefix.as_str());
        prop_assert!(reader.is_at_end());
    }
}
