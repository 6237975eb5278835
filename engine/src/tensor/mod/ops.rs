// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::{
    operations::{reduction, shape_ops, unique},
    quantization::{self, QScheme},
};

impl Tensor {
    pub fn max_with_indices(&self, dim: isize, keepdim: bool) -> Result<(Tensor, Tensor)> {
        reduction::max_with_indices(self, dim, keepdim)
    }

    pub fn min_with_indices(&self, dim: isize, keepdim: bool) -> Result<(Tensor, Tensor)> {
        reduction::min_with_indices(self, dim, keepdim)
    }

    pub fn std_mean(&self, unbiased: bool) -> Result<(Tensor, Tensor)> {
        reduction::std_mean(self, unbiased)
    }

    pub fn var_mean(&self, unbiased: bool) -> Result<(Tensor, Tensor)> {
        reduction::var_mean(self, unbiased)
    }

    pub fn aminmax(&self) -> Result<(f64, f64)> {
        reduction::aminmax(self)
    }

    pub fn split(&self, split_size: usize, dim: isize) -> Result<Vec<Tensor>> {
        shape_ops::split(self, split_size, dim)
    }

    pub fn chunk(&self, chunks: usize, dim: isize) -> Result<Vec<Tensor>> {
        shape_ops::chunk(self, chunks, dim)
    }

    pub fn unbind(&self, dim: isize) -> Result<Vec<Tensor>> {
        shape_ops::unbind(self, dim)
    }

    pub fn unique_consecutive(&self) -> Result<(Tensor, Tensor, Tensor)> {
        unique::unique_consecutive(self)
    }

    pub fn quantize_per_tensor(&self, scale: f64, zero_point: i64, dtype: DataType) -> Result<Tensor> {
        quantization::quantize_per_tensor(self, scale, zero_point, dtype)
    }

    pub fn dequantize(&self) -> Result<Tensor> {
        quantization::dequantize(self)
    }

    /// Quantization scheme of a quantized tensor
    pub fn qscheme(&self) -> Result<QScheme> {
        Ok(quantization::require_quantizer(self)?.scheme())
    }

    pub fn q_scale(&self) -> Result<f64> {
        Ok(quantization::require_quantizer(self)?.scale())
    }

    pub fn q_zero_point(&self) -> Result<i64> {
        Ok(quantization::require_quantizer(self)?.zero_point())
    }
}
