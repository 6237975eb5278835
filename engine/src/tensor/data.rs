// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the BSD-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::tensor::dtype::DataType;
use std::cmp::Ordering;

/// Typed element storage for a tensor.
///
/// Storage is shared between tensor handles through `Arc<TensorData>`; the
/// `Arc` strong count is the native reference count that wrapping retains.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorData {
    buffer: TensorBuffer,
}

#[derive(Debug, Clone, PartialEq)]
enum TensorBuffer {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    Bool(Vec<bool>),
    QI8(Vec<i8>),
    QU8(Vec<u8>),
}

impl TensorData {
    /// Create new tensor data filled with zeros
    pub fn zeros(numel: usize, dtype: DataType) -> Self {
        let buffer = match dtype {
            DataType::Float32 => TensorBuffer::F32(vec![0.0; numel]),
            DataType::Float64 => TensorBuffer::F64(vec![0.0; numel]),
            DataType::Int32 => TensorBuffer::I32(vec![0; numel]),
            DataType::Int64 => TensorBuffer::I64(vec![0; numel]),
            DataType::Bool => TensorBuffer::Bool(vec![false; numel]),
            DataType::QInt8 => TensorBuffer::QI8(vec![0; numel]),
            DataType::QUInt8 => TensorBuffer::QU8(vec![0; numel]),
        };
        Self { buffer }
    }

    /// Create new tensor data filled with ones
    pub fn ones(numel: usize, dtype: DataType) -> Self {
        let buffer = match dtype {
            DataType::Float32 => TensorBuffer::F32(vec![1.0; numel]),
            DataType::Float64 => TensorBuffer::F64(vec![1.0; numel]),
            DataType::Int32 => TensorBuffer::I32(vec![1; numel]),
            DataType::Int64 => TensorBuffer::I64(vec![1; numel]),
            DataType::Bool => TensorBuffer::Bool(vec![true; numel]),
            DataType::QInt8 => TensorBuffer::QI8(vec![1; numel]),
            DataType::QUInt8 => TensorBuffer::QU8(vec![1; numel]),
        };
        Self { buffer }
    }

    pub fn from_vec_f32(data: Vec<f32>) -> Self {
        Self {
            buffer: TensorBuffer::F32(data),
        }
    }

    pub fn from_vec_f64(data: Vec<f64>) -> Self {
        Self {
            buffer: TensorBuffer::F64(data),
        }
    }

    pub fn from_vec_i32(data: Vec<i32>) -> Self {
        Self {
            buffer: TensorBuffer::I32(data),
        }
    }

    pub fn from_vec_i64(data: Vec<i64>) -> Self {
        Self {
            buffer: TensorBuffer::I64(data),
        }
    }

    pub fn from_vec_bool(data: Vec<bool>) -> Self {
        Self {
            buffer: TensorBuffer::Bool(data),
        }
    }

    pub fn from_vec_qint8(data: Vec<i8>) -> Self {
        Self {
            buffer: TensorBuffer::QI8(data),
        }
    }

    pub fn from_vec_quint8(data: Vec<u8>) -> Self {
        Self {
            buffer: TensorBuffer::QU8(data),
        }
    }

    /// Build storage of `dtype` from f64 values, casting each element
    pub fn from_f64_cast(values: &[f64], dtype: DataType) -> Self {
        let buffer = match dtype {
            DataType::Float32 => TensorBuffer::F32(values.iter().map(|&v| v as f32).collect()),
            DataType::Float64 => TensorBuffer::F64(values.to_vec()),
            DataType::Int32 => TensorBuffer::I32(values.iter().map(|&v| v as i32).collect()),
            DataType::Int64 => TensorBuffer::I64(values.iter().map(|&v| v as i64).collect()),
            DataType::Bool => TensorBuffer::Bool(values.iter().map(|&v| v != 0.0).collect()),
            DataType::QInt8 => TensorBuffer::QI8(values.iter().map(|&v| v as i8).collect()),
            DataType::QUInt8 => TensorBuffer::QU8(values.iter().map(|&v| v as u8).collect()),
        };
        Self { buffer }
    }

    pub fn dtype(&self) -> DataType {
        match &self.buffer {
            TensorBuffer::F32(_) => DataType::Float32,
            TensorBuffer::F64(_) => DataType::Float64,
            TensorBuffer::I32(_) => DataType::Int32,
            TensorBuffer::I64(_) => DataType::Int64,
            TensorBuffer::Bool(_) => DataType::Bool,
            TensorBuffer::QI8(_) => DataType::QInt8,
            TensorBuffer::QU8(_) => DataType::QUInt8,
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        match &self.buffer {
            TensorBuffer::F32(v) => v.len(),
            TensorBuffer::F64(v) => v.len(),
            TensorBuffer::I32(v) => v.len(),
            TensorBuffer::I64(v) => v.len(),
            TensorBuffer::Bool(v) => v.len(),
            TensorBuffer::QI8(v) => v.len(),
            TensorBuffer::QU8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn size_bytes(&self) -> usize {
        self.len() * self.dtype().size_bytes()
    }

    pub fn as_f32_slice(&self) -> Option<&[f32]> {
        match &self.buffer {
            TensorBuffer::F32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64_slice(&self) -> Option<&[f64]> {
        match &self.buffer {
            TensorBuffer::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i32_slice(&self) -> Option<&[i32]> {
        match &self.buffer {
            TensorBuffer::I32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64_slice(&self) -> Option<&[i64]> {
        match &self.buffer {
            TensorBuffer::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool_slice(&self) -> Option<&[bool]> {
        match &self.buffer {
            TensorBuffer::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_qint8_slice(&self) -> Option<&[i8]> {
        match &self.buffer {
            TensorBuffer::QI8(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quint8_slice(&self) -> Option<&[u8]> {
        match &self.buffer {
            TensorBuffer::QU8(v) => Some(v),
            _ => None,
        }
    }

    /// Element at `index` widened to f64
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        match &self.buffer {
            TensorBuffer::F32(v) => v.get(index).map(|&x| x as f64),
            TensorBuffer::F64(v) => v.get(index).copied(),
            TensorBuffer::I32(v) => v.get(index).map(|&x| x as f64),
            TensorBuffer::I64(v) => v.get(index).map(|&x| x as f64),
            TensorBuffer::Bool(v) => v.get(index).map(|&x| if x { 1.0 } else { 0.0 }),
            TensorBuffer::QI8(v) => v.get(index).map(|&x| x as f64),
            TensorBuffer::QU8(v) => v.get(index).map(|&x| x as f64),
        }
    }

    /// All elements widened to f64
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match &self.buffer {
            TensorBuffer::F32(v) => v.iter().map(|&x| x as f64).collect(),
            TensorBuffer::F64(v) => v.clone(),
            TensorBuffer::I32(v) => v.iter().map(|&x| x as f64).collect(),
            TensorBuffer::I64(v) => v.iter().map(|&x| x as f64).collect(),
            TensorBuffer::Bool(v) => v.iter().map(|&x| if x { 1.0 } else { 0.0 }).collect(),
            TensorBuffer::QI8(v) => v.iter().map(|&x| x as f64).collect(),
            TensorBuffer::QU8(v) => v.iter().map(|&x| x as f64).collect(),
        }
    }

    /// Compare two elements in their native type. `None` when either is NaN.
    pub fn compare_at(&self, i: usize, j: usize) -> Option<Ordering> {
        match &self.buffer {
            TensorBuffer::F32(v) => v[i].partial_cmp(&v[j]),
            TensorBuffer::F64(v) => v[i].partial_cmp(&v[j]),
            TensorBuffer::I32(v) => Some(v[i].cmp(&v[j])),
            TensorBuffer::I64(v) => Some(v[i].cmp(&v[j])),
            TensorBuffer::Bool(v) => Some(v[i].cmp(&v[j])),
            TensorBuffer::QI8(v) => Some(v[i].cmp(&v[j])),
            TensorBuffer::QU8(v) => Some(v[i].cmp(&v[j])),
        }
    }

    /// Exact equality of two elements without widening
    pub fn eq_at(&self, i: usize, j: usize) -> bool {
        self.compare_at(i, j) == Some(Ordering::Equal)
    }

    pub fn is_nan_at(&self, index: usize) -> bool {
        match &self.buffer {
            TensorBuffer::F32(v) => v[index].is_nan(),
            TensorBuffer::F64(v) => v[index].is_nan(),
            _ => false,
        }
    }

    /// Copy the elements at `indices` into new storage of the same type
    pub fn gather(&self, indices: &[usize]) -> Self {
        fn pick<T: Copy>(src: &[T], indices: &[usize]) -> Vec<T> {
            indices.iter().map(|&i| src[i]).collect()
        }
        let buffer = match &self.buffer {
            TensorBuffer::F32(v) => TensorBuffer::F32(pick(v, indices)),
            TensorBuffer::F64(v) => TensorBuffer::F64(pick(v, indices)),
            TensorBuffer::I32(v) => TensorBuffer::I32(pick(v, indices)),
            TensorBuffer::I64(v) => TensorBuffer::I64(pick(v, indices)),
            TensorBuffer::Bool(v) => TensorBuffer::Bool(pick(v, indices)),
            TensorBuffer::QI8(v) => TensorBuffer::QI8(pick(v, indices)),
            TensorBuffer::QU8(v) => TensorBuffer::QU8(pick(v, indices)),
        };
        Self { buffer }
    }
}
