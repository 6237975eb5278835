// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the BSD-style license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

/// Element type of a tensor (the native scalar type enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Float32,
    Float64,
    Int32,
    Int64,
    Bool,
    /// Signed 8-bit affine-quantized values
    QInt8,
    /// Unsigned 8-bit affine-quantized values
    QUInt8,
}

impl DataType {
    /// Size of one element in bytes
    pub fn size_bytes(self) -> usize {
        match self {
            DataType::Float32 | DataType::Int32 => 4,
            DataType::Float64 | DataType::Int64 => 8,
            DataType::Bool | DataType::QInt8 | DataType::QUInt8 => 1,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    pub fn is_int(self) -> bool {
        matches!(self, DataType::Int32 | DataType::Int64)
    }

    pub fn is_quantized(self) -> bool {
        matches!(self, DataType::QInt8 | DataType::QUInt8)
    }

    /// Representable integer range of a quantized type
    pub fn quantized_range(self) -> Option<(i64, i64)> {
        match self {
            DataType::QInt8 => Some((i8::MIN as i64, i8::MAX as i64)),
            DataType::QUInt8 => Some((u8::MIN as i64, u8::MAX as i64)),
            _ => None,
        }
    }

    /// Promoted type for a binary operation between `a` and `b`.
    ///
    /// Bool < integer < floating point, wider wins inside a category. Quantized
    /// types do not promote.
    pub fn result_type(a: DataType, b: DataType) -> Option<DataType> {
        if a.is_quantized() || b.is_quantized() {
            return if a == b { Some(a) } else { None };
        }
        if a == b {
            return Some(a);
        }
        let rank = |dtype: DataType| match dtype {
            DataType::Bool => Some(0),
            DataType::Int32 => Some(1),
            DataType::Int64 => Some(2),
            DataType::Float32 => Some(3),
            DataType::Float64 => Some(4),
            DataType::QInt8 | DataType::QUInt8 => None,
        };
        Some(if rank(a)? >= rank(b)? { a } else { b })
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Float32 => "float32",
            DataType::Float64 => "float64",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::Bool => "bool",
            DataType::QInt8 => "qint8",
            DataType::QUInt8 => "quint8",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
