// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::{
    error::{MinitensorError, Result},
    tensor::{DataType, Shape, Tensor, TensorData},
};
use std::{cmp::Ordering, sync::Arc};

/// Maximum values and their indices along specified dimension
pub fn max_with_indices(tensor: &Tensor, dim: isize, keepdim: bool) -> Result<(Tensor, Tensor)> {
    extreme_along_dim(tensor, dim, keepdim, |ord| ord == Ordering::Greater)
}

/// Minimum values and their indices along specified dimension
pub fn min_with_indices(tensor: &Tensor, dim: isize, keepdim: bool) -> Result<(Tensor, Tensor)> {
    extreme_along_dim(tensor, dim, keepdim, |ord| ord == Ordering::Less)
}

/// Standard deviation and mean over all elements, as two 0-d tensors
pub fn std_mean(tensor: &Tensor, unbiased: bool) -> Result<(Tensor, Tensor)> {
    let (var, mean, dtype) = moments(tensor, unbiased, "std_mean")?;
    Ok((
        Tensor::scalar_tensor(var.sqrt(), dtype),
        Tensor::scalar_tensor(mean, dtype),
    ))
}

/// Variance and mean over all elements, as two 0-d tensors
pub fn var_mean(tensor: &Tensor, unbiased: bool) -> Result<(Tensor, Tensor)> {
    let (var, mean, dtype) = moments(tensor, unbiased, "var_mean")?;
    Ok((
        Tensor::scalar_tensor(var, dtype),
        Tensor::scalar_tensor(mean, dtype),
    ))
}

/// Smallest and largest element as plain floats
pub fn aminmax(tensor: &Tensor) -> Result<(f64, f64)> {
    if tensor.is_quantized() {
        return Err(MinitensorError::type_mismatch(
            "a non-quantized tensor",
            tensor.dtype().name(),
        ));
    }
    let values = tensor.to_vec_f64();
    let (first, rest) = values.split_first().ok_or_else(|| {
        MinitensorError::invalid_argument("aminmax(): cannot reduce an empty tensor")
    })?;

    let mut min = *first;
    let mut max = *first;
    for &v in rest {
        if v.is_nan() || min.is_nan() {
            min = f64::NAN;
            max = f64::NAN;
            break;
        }
        min = min.min(v);
        max = max.max(v);
    }
    Ok((min, max))
}

fn moments(tensor: &Tensor, unbiased: bool, op: &str) -> Result<(f64, f64, DataType)> {
    if !tensor.dtype().is_float() {
        return Err(MinitensorError::type_mismatch(
            "float32 or float64",
            tensor.dtype().name(),
        ));
    }
    if tensor.numel() == 0 {
        return Err(MinitensorError::invalid_argument(format!(
            "{op}(): cannot reduce an empty tensor"
        )));
    }

    let values = tensor.to_vec_f64();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sq_dev: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    let denom = if unbiased { n - 1.0 } else { n };
    Ok((sq_dev / denom, mean, tensor.dtype()))
}

fn extreme_along_dim<F>(
    tensor: &Tensor,
    dim: isize,
    keepdim: bool,
    better: F,
) -> Result<(Tensor, Tensor)>
where
    F: Fn(Ordering) -> bool,
{
    if tensor.is_quantized() {
        return Err(MinitensorError::type_mismatch(
            "a non-quantized tensor",
            tensor.dtype().name(),
        ));
    }
    // A 0-d tensor reduces like a one-element vector over dim 0 or -1.
    let view = if tensor.ndim() == 0 {
        Shape::new(vec![1])
    } else {
        tensor.shape().clone()
    };
    let d = view.normalize_dim(dim)?;
    let (outer, extent, inner) = view.split_at_dim(d);
    if extent == 0 {
        return Err(MinitensorError::invalid_argument(format!(
            "cannot reduce over dimension {d} of size 0"
        )));
    }

    let data = tensor.data();
    let mut best_positions = Vec::with_capacity(outer * inner);
    let mut best_indices = Vec::with_capacity(outer * inner);

    for o in 0..outer {
        for i in 0..inner {
            let base = o * extent * inner + i;
            let mut best = base;
            let mut best_idx = 0i64;
            for k in 1..extent {
                if data.is_nan_at(best) {
                    break;
                }
                let candidate = base + k * inner;
                let replace = match data.compare_at(candidate, best) {
                    // best is not NaN here, so the candidate is
                    None => true,
                    Some(ord) => better(ord),
                };
                if replace {
                    best = candidate;
                    best_idx = k as i64;
                }
            }
            best_positions.push(best);
            best_indices.push(best_idx);
        }
    }

    let result_shape = if tensor.ndim() == 0 {
        Shape::scalar()
    } else {
        view.reduced(d, keepdim)
    };
    let values_tensor = Tensor::new(
        Arc::new(data.gather(&best_positions)),
        result_shape.clone(),
        tensor.dtype(),
        tensor.device(),
        false,
    );
    let indices_tensor = Tensor::new(
        Arc::new(TensorData::from_vec_i64(best_indices)),
        result_shape,
        DataType::Int64,
        tensor.device(),
        false,
    );
    Ok((values_tensor, indices_tensor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_along_rows_and_columns() {
        let t = Tensor::from_vec_f32(vec![1.0, 5.0, 3.0, 4.0, 2.0, 6.0], vec![2, 3]).unwrap();

        let (values, indices) = max_with_indices(&t, 1, false).unwrap();
        assert_eq!(values.shape().dims(), &[2]);
        assert_eq!(values.data().as_f32_slice(), Some(&[5.0f32, 6.0][..]));
        assert_eq!(indices.data().as_i64_slice(), Some(&[1i64, 2][..]));

        let (values, indices) = min_with_indices(&t, 0, true).unwrap();
        assert_eq!(values.shape().dims(), &[1, 3]);
        assert_eq!(values.data().as_f32_slice(), Some(&[1.0f32, 2.0, 3.0][..]));
        assert_eq!(indices.data().as_i64_slice(), Some(&[0i64, 1, 0][..]));
    }

    #[test]
    fn max_propagates_nan_and_keeps_int_dtype() {
        let t = Tensor::from_vec_f64(vec![1.0, f64::NAN, 3.0], vec![3]).unwrap();
        let (values, indices) = max_with_indices(&t, 0, false).unwrap();
        assert!(values.to_vec_f64()[0].is_nan());
        assert_eq!(indices.data().as_i64_slice(), Some(&[1i64][..]));

        let ints = Tensor::from_vec_i64(vec![4, -2, 9], vec![3]).unwrap();
        let (values, _) = max_with_indices(&ints, -1, false).unwrap();
        assert_eq!(values.dtype(), DataType::Int64);
        assert_eq!(values.data().as_i64_slice(), Some(&[9i64][..]));
    }

    #[test]
    fn int64_extremes_are_copied_exactly() {
        let big = (1i64 << 53) + 1;
        let t = Tensor::from_vec_i64(vec![0, big, i64::MIN, big - 1], vec![4]).unwrap();

        let (values, indices) = max_with_indices(&t, 0, false).unwrap();
        assert_eq!(values.data().as_i64_slice(), Some(&[big][..]));
        assert_eq!(indices.data().as_i64_slice(), Some(&[1i64][..]));

        let (values, indices) = min_with_indices(&t, 0, false).unwrap();
        assert_eq!(values.data().as_i64_slice(), Some(&[i64::MIN][..]));
        assert_eq!(indices.data().as_i64_slice(), Some(&[2i64][..]));
    }

    #[test]
    fn zero_dim_tensor_reduces_over_dim_zero() {
        let t = Tensor::from_vec_i64(vec![42], vec![]).unwrap();
        for dim in [0, -1] {
            let (values, indices) = max_with_indices(&t, dim, true).unwrap();
            assert_eq!(values.ndim(), 0);
            assert_eq!(values.data().as_i64_slice(), Some(&[42i64][..]));
            assert_eq!(indices.data().as_i64_slice(), Some(&[0i64][..]));
        }
        assert!(matches!(
            min_with_indices(&t, 1, false),
            Err(MinitensorError::IndexError { .. })
        ));
    }

    #[test]
    fn reductions_reject_bad_input() {
        let t = Tensor::from_vec_f32(vec![], vec![0]).unwrap();
        assert!(matches!(
            max_with_indices(&t, 0, false),
            Err(MinitensorError::InvalidArgument { .. })
        ));
        assert!(aminmax(&t).is_err());
        assert!(std_mean(&t, true).is_err());

        let t = Tensor::from_vec_f32(vec![1.0, 2.0], vec![2]).unwrap();
        assert!(matches!(
            max_with_indices(&t, 2, false),
            Err(MinitensorError::IndexError { .. })
        ));

        let ints = Tensor::from_vec_i64(vec![1, 2], vec![2]).unwrap();
        assert!(matches!(
            var_mean(&ints, false),
            Err(MinitensorError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn aminmax_returns_plain_floats() {
        let t = Tensor::from_vec_i64(vec![3, -7, 12], vec![3]).unwrap();
        assert_eq!(aminmax(&t).unwrap(), (-7.0, 12.0));
    }
}
