//! Dynamically typed read results
//!
//! Returned by the reader's `DataType`-driven reads, where the element type
//! is only known at runtime.

use super::DataType;

/// A single decoded scalar
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
    I64(i64),
    U64(u64),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::I8(_) => DataType::I8,
            Value::U8(_) => DataType::U8,
            Value::I16(_) => DataType::I16,
            Value::U16(_) => DataType::U16,
            Value::I32(_) => DataType::I32,
            Value::U32(_) => DataType::U32,
            Value::F32(_) => DataType::F32,
            Value::F64(_) => DataType::F64,
            Value::I64(_) => DataType::I64,
            Value::U64(_) => DataType::U64,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
        }
    }
}

/// A decoded sequence of same-typed elements
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum TypedArray {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    I64(Vec<i64>),
    U64(Vec<u64>),
}

impl TypedArray {
    pub fn data_type(&self) -> DataType {
        match self {
            TypedArray::I8(_) => DataType::I8,
            TypedArray::U8(_) => DataType::U8,
            TypedArray::I16(_) => DataType::I16,
            TypedArray::U16(_) => DataType::U16,
            TypedArray::I32(_) => DataType::I32,
            TypedArray::U32(_) => DataType::U32,
            TypedArray::F32(_) => DataType::F32,
            TypedArray::F64(_) => DataType::F64,
            TypedArray::I64(_) => DataType::I64,
            TypedArray::U64(_) => DataType::U64,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            TypedArray::I8(v) => v.len(),
            TypedArray::U8(v) => v.len(),
            TypedArray::I16(v) => v.len(),
            TypedArray::U16(v) => v.len(),
            TypedArray::I32(v) => v.len(),
            TypedArray::U32(v) => v.len(),
            TypedArray::F32(v) => v.len(),
            TypedArray::F64(v) => v.len(),
            TypedArray::I64(v) => v.len(),
            TypedArray::U64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes the elements occupied in the buffer
    pub fn byte_len(&self) -> usize {
        self.len() * self.data_type().width()
    }
}

/// Write `[a, b, c]` using each element's `Display`
fn write_list<T: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>, items: &[T]) -> std::fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl std::fmt::Display for TypedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedArray::I8(v) => write_list(f, v),
            TypedArray::U8(v) => write_list(f, v),
            TypedArray::I16(v) => write_list(f, v),
            TypedArray::U16(v) => write_list(f, v),
            TypedArray::I32(v) => write_list(f, v),
            TypedArray::U32(v) => write_list(f, v),
            TypedArray::F32(v) => write_list(f, v),
            TypedArray::F64(v) => write_list(f, v),
            TypedArray::I64(v) => write_list(f, v),
            TypedArray::U64(v) => write_list(f, v),
        }
    }
}
