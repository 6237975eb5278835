// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

pub use data::TensorData;
pub use dtype::DataType;
pub use shape::Shape;

use crate::{
    device::Device,
    error::{MinitensorError, Result},
    quantization::Quantizer,
    scalar::Scalar,
};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Process-unique identity of a tensor handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(u64);

impl TensorId {
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for TensorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Core tensor handle.
///
/// Cloning a `Tensor` is cheap: the clone shares the same `Arc<TensorData>`
/// storage and bumps its strong count. Storage is released when the last
/// handle, native or host-side, is dropped.
#[derive(Clone)]
pub struct Tensor {
    /// Tensor data storage
    data: Arc<TensorData>,
    /// Tensor shape (dimensions)
    shape: Shape,
    /// Data type of tensor elements
    dtype: DataType,
    /// Device where tensor is stored
    device: Device,
    /// Whether this tensor requires gradient computation
    requires_grad: bool,
    /// Affine quantization parameters for quantized dtypes
    quantizer: Option<Quantizer>,
    /// Unique identifier for this tensor
    tensor_id: TensorId,
}

impl Tensor {
    /// Create a new tensor with the given data, shape, and properties
    #[inline(always)]
    pub fn new(
        data: Arc<TensorData>,
        shape: Shape,
        dtype: DataType,
        device: Device,
        requires_grad: bool,
    ) -> Self {
        Self {
            data,
            shape,
            dtype,
            device,
            requires_grad,
            quantizer: None,
            tensor_id: TensorId::new(),
        }
    }

    /// Create a CPU tensor from storage, checking that the shape fits it
    pub fn from_data(data: TensorData, shape: Shape) -> Result<Self> {
        if data.len() != shape.numel() {
            return Err(MinitensorError::shape_mismatch(
                shape.dims().to_vec(),
                vec![data.len()],
            ));
        }
        let dtype = data.dtype();
        Ok(Self::new(Arc::new(data), shape, dtype, Device::cpu(), false))
    }

    pub fn from_vec_f32(values: Vec<f32>, dims: Vec<usize>) -> Result<Self> {
        Self::from_data(TensorData::from_vec_f32(values), Shape::new(dims))
    }

    pub fn from_vec_f64(values: Vec<f64>, dims: Vec<usize>) -> Result<Self> {
        Self::from_data(TensorData::from_vec_f64(values), Shape::new(dims))
    }

    pub fn from_vec_i64(values: Vec<i64>, dims: Vec<usize>) -> Result<Self> {
        Self::from_data(TensorData::from_vec_i64(values), Shape::new(dims))
    }

    pub fn from_vec_bool(values: Vec<bool>, dims: Vec<usize>) -> Result<Self> {
        Self::from_data(TensorData::from_vec_bool(values), Shape::new(dims))
    }

    /// 0-d tensor holding one value of `dtype`
    pub fn scalar_tensor(value: f64, dtype: DataType) -> Self {
        let data = Arc::new(TensorData::from_f64_cast(&[value], dtype));
        Self::new(data, Shape::scalar(), dtype, Device::cpu(), false)
    }

    /// Create a tensor filled with zeros
    #[inline(always)]
    pub fn zeros(shape: Shape, dtype: DataType, device: Device, requires_grad: bool) -> Self {
        let data = Arc::new(TensorData::zeros(shape.numel(), dtype));
        Self::new(data, shape, dtype, device, requires_grad)
    }

    /// Create a tensor filled with ones
    #[inline(always)]
    pub fn ones(shape: Shape, dtype: DataType, device: Device, requires_grad: bool) -> Self {
        let data = Arc::new(TensorData::ones(shape.numel(), dtype));
        Self::new(data, shape, dtype, device, requires_grad)
    }

    /// Get the tensor's shape
    #[inline(always)]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the tensor's data type
    #[inline(always)]
    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    /// Get the tensor's device
    #[inline(always)]
    pub fn device(&self) -> Device {
        self.device
    }

    /// Check if this tensor requires gradients
    #[inline(always)]
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Get the tensor's unique ID
    #[inline(always)]
    pub fn id(&self) -> TensorId {
        self.tensor_id
    }

    /// Get the number of dimensions
    #[inline(always)]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Get the total number of elements
    #[inline(always)]
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Get the size of a specific dimension
    #[inline(always)]
    pub fn size(&self, dim: usize) -> Result<usize> {
        self.shape.size(dim)
    }

    /// Get a reference to the tensor data
    #[inline(always)]
    pub fn data(&self) -> &Arc<TensorData> {
        &self.data
    }

    pub fn quantizer(&self) -> Option<&Quantizer> {
        self.quantizer.as_ref()
    }

    pub(crate) fn with_quantizer(mut self, quantizer: Quantizer) -> Self {
        self.quantizer = Some(quantizer);
        self
    }

    /// Whether both handles point at the same storage
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Number of live handles referencing this tensor's storage
    pub fn storage_ref_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// Address of the shared storage, stable for the storage's lifetime
    pub fn storage_ptr(&self) -> usize {
        Arc::as_ptr(&self.data) as usize
    }

    pub fn is_floating_point(&self) -> bool {
        self.dtype.is_float()
    }

    pub fn is_quantized(&self) -> bool {
        self.dtype.is_quantized()
    }

    /// Elements in row-major order, widened to f64. Quantized tensors return
    /// their raw integer representation.
    pub fn to_vec_f64(&self) -> Vec<f64> {
        self.data.to_f64_vec()
    }

    /// Extract the only element of a one-element tensor
    pub fn item(&self) -> Result<Scalar> {
        if self.numel() != 1 {
            return Err(MinitensorError::invalid_operation(format!(
                "a Tensor with {} elements cannot be converted to Scalar",
                self.numel()
            )));
        }
        let raw = self
            .data
            .get_f64(0)
            .ok_or_else(|| MinitensorError::internal_error("tensor storage is empty"))?;

        Ok(match self.dtype {
            DataType::Bool => Scalar::Bool(raw != 0.0),
            DataType::Int32 | DataType::Int64 => match self.data.as_i64_slice() {
                Some(values) => Scalar::Int(values[0]),
                None => Scalar::Int(raw as i64),
            },
            DataType::Float32 | DataType::Float64 => Scalar::Float(raw),
            DataType::QInt8 | DataType::QUInt8 => {
                let quantizer = self.quantizer.as_ref().ok_or_else(|| {
                    MinitensorError::internal_error("quantized tensor without quantizer")
                })?;
                Scalar::Float(quantizer.dequantize_value(raw as i64))
            }
        })
    }
}
