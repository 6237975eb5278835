// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

//! Per-tensor affine quantization and the quantization scheme enumeration.

use crate::{
    error::{MinitensorError, Result},
    tensor::{DataType, Tensor, TensorData},
};
use log::debug;
use std::{fmt, sync::Arc};

/// How a quantized tensor maps integers back to real values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QScheme {
    PerTensorAffine,
    PerChannelAffine,
    PerTensorSymmetric,
    PerChannelSymmetric,
    PerChannelAffineFloatQParams,
}

impl QScheme {
    pub const ALL: [QScheme; 5] = [
        QScheme::PerTensorAffine,
        QScheme::PerChannelAffine,
        QScheme::PerTensorSymmetric,
        QScheme::PerChannelSymmetric,
        QScheme::PerChannelAffineFloatQParams,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QScheme::PerTensorAffine => "per_tensor_affine",
            QScheme::PerChannelAffine => "per_channel_affine",
            QScheme::PerTensorSymmetric => "per_tensor_symmetric",
            QScheme::PerChannelSymmetric => "per_channel_symmetric",
            QScheme::PerChannelAffineFloatQParams => "per_channel_affine_float_qparams",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.name() == name)
    }
}

impl fmt::Display for QScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quantization parameters attached to a quantized tensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    scheme: QScheme,
    scale: f64,
    zero_point: i64,
}

impl Quantizer {
    pub fn per_tensor_affine(scale: f64, zero_point: i64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MinitensorError::invalid_argument(format!(
                "quantization scale must be a positive finite number, got {scale}"
            )));
        }
        Ok(Self {
            scheme: QScheme::PerTensorAffine,
            scale,
            zero_point,
        })
    }

    pub fn scheme(&self) -> QScheme {
        self.scheme
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn zero_point(&self) -> i64 {
        self.zero_point
    }

    /// Clamped in f64 so infinite or huge inputs saturate at the range ends.
    /// NaN maps to the zero point.
    fn quantize_value(&self, value: f64, min: i64, max: i64) -> i64 {
        if value.is_nan() {
            return self.zero_point;
        }
        let q = (value / self.scale).round() + self.zero_point as f64;
        q.clamp(min as f64, max as f64) as i64
    }

    pub fn dequantize_value(&self, q: i64) -> f64 {
        (q - self.zero_point) as f64 * self.scale
    }
}

/// Quantize a floating point tensor with a single scale and zero point
pub fn quantize_per_tensor(
    tensor: &Tensor,
    scale: f64,
    zero_point: i64,
    dtype: DataType,
) -> Result<Tensor> {
    if !tensor.dtype().is_float() {
        return Err(MinitensorError::type_mismatch(
            "float32 or float64",
            tensor.dtype().name(),
        ));
    }
    let (qmin, qmax) = dtype
        .quantized_range()
        .ok_or_else(|| MinitensorError::type_mismatch("qint8 or quint8", dtype.name()))?;
    if zero_point < qmin || zero_point > qmax {
        return Err(MinitensorError::invalid_argument(format!(
            "zero_point {zero_point} is outside the range of {dtype} [{qmin}, {qmax}]"
        )));
    }

    let quantizer = Quantizer::per_tensor_affine(scale, zero_point)?;
    let values = tensor.to_vec_f64();
    let data = match dtype {
        DataType::QInt8 => TensorData::from_vec_qint8(
            values
                .iter()
                .map(|&v| quantizer.quantize_value(v, qmin, qmax) as i8)
                .collect(),
        ),
        _ => TensorData::from_vec_quint8(
            values
                .iter()
                .map(|&v| quantizer.quantize_value(v, qmin, qmax) as u8)
                .collect(),
        ),
    };

    Ok(Tensor::new(
        Arc::new(data),
        tensor.shape().clone(),
        dtype,
        tensor.device(),
        false,
    )
    .with_quantizer(quantizer))
}

/// Map a quantized tensor back to float32
pub fn dequantize(tensor: &Tensor) -> Result<Tensor> {
    let quantizer = require_quantizer(tensor)?;
    let values: Vec<f32> = tensor
        .to_vec_f64()
        .into_iter()
        .map(|q| quantizer.dequantize_value(q as i64) as f32)
        .collect();
    Ok(Tensor::new(
        Arc::new(TensorData::from_vec_f32(values)),
        tensor.shape().clone(),
        DataType::Float32,
        tensor.device(),
        false,
    ))
}

/// Pick affine parameters covering the tensor's value range (always including
/// zero), quantize with them and return the quantized tensor, its dequantized
/// view, the scale and the zero point.
pub fn choose_qparams(tensor: &Tensor, dtype: DataType) -> Result<(Tensor, Tensor, f64, i64)> {
    let (qmin, qmax) = dtype
        .quantized_range()
        .ok_or_else(|| MinitensorError::type_mismatch("qint8 or quint8", dtype.name()))?;
    if tensor.numel() == 0 {
        return Err(MinitensorError::invalid_argument(
            "cannot choose quantization parameters for an empty tensor",
        ));
    }

    let values = tensor.to_vec_f64();
    let min = values.iter().copied().fold(0.0f64, f64::min);
    let max = values.iter().copied().fold(0.0f64, f64::max);
    let span = max - min;
    let scale = if span > 0.0 {
        span / (qmax - qmin) as f64
    } else {
        1.0
    };
    let zero_point = (qmin as f64 - min / scale).round() as i64;
    let zero_point = zero_point.clamp(qmin, qmax);
    debug!("choose_qparams: range [{min}, {max}] -> scale {scale}, zero_point {zero_point}");

    let quantized = quantize_per_tensor(tensor, scale, zero_point, dtype)?;
    let restored = dequantize(&quantized)?;
    Ok((quantized, restored, scale, zero_point))
}

pub(crate) fn require_quantizer(tensor: &Tensor) -> Result<&Quantizer> {
    tensor.quantizer().ok_or_else(|| {
        MinitensorError::invalid_operation(format!(
            "expected a quantized tensor, got dtype {}",
            tensor.dtype()
        ))
    })
}
