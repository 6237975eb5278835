// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::{
    error::{MinitensorError, Result},
    tensor::{DataType, Shape, Tensor, TensorData},
};
use std::sync::Arc;

/// Collapse runs of equal consecutive elements of the flattened tensor.
///
/// Returns `(values, inverse, counts)`: the run values, the run index of every
/// input element (shaped like the input), and the length of each run.
pub fn unique_consecutive(tensor: &Tensor) -> Result<(Tensor, Tensor, Tensor)> {
    if tensor.is_quantized() {
        return Err(MinitensorError::type_mismatch(
            "a non-quantized tensor",
            tensor.dtype().name(),
        ));
    }

    let data = tensor.data();
    let n = tensor.numel();
    let mut run_starts: Vec<usize> = Vec::new();
    let mut counts: Vec<i64> = Vec::new();
    let mut inverse: Vec<i64> = Vec::with_capacity(n);

    for i in 0..n {
        // NaN never continues a run
        let continues_run = i > 0 && data.eq_at(i - 1, i);
        if !continues_run {
            run_starts.push(i);
            counts.push(0);
        }
        if let Some(last) = counts.last_mut() {
            *last += 1;
        }
        inverse.push(run_starts.len() as i64 - 1);
    }

    let runs = run_starts.len();
    let unique_values = Tensor::new(
        Arc::new(data.gather(&run_starts)),
        Shape::new(vec![runs]),
        tensor.dtype(),
        tensor.device(),
        false,
    );
    let inverse = Tensor::new(
        Arc::new(TensorData::from_vec_i64(inverse)),
        tensor.shape().clone(),
        DataType::Int64,
        tensor.device(),
        false,
    );
    let counts = Tensor::new(
        Arc::new(TensorData::from_vec_i64(counts)),
        Shape::new(vec![runs]),
        DataType::Int64,
        tensor.device(),
        false,
    );
    Ok((unique_values, inverse, counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs() {
        let t = Tensor::from_vec_i64(vec![1, 1, 2, 2, 3, 1, 1, 2], vec![8]).unwrap();
        let (values, inverse, counts) = unique_consecutive(&t).unwrap();
        assert_eq!(values.data().as_i64_slice(), Some(&[1i64, 2, 3, 1, 2][..]));
        assert_eq!(
            inverse.data().as_i64_slice(),
            Some(&[0i64, 0, 1, 1, 2, 3, 3, 4][..])
        );
        assert_eq!(counts.data().as_i64_slice(), Some(&[2i64, 2, 1, 2, 1][..]));
    }

    #[test]
    fn keeps_input_shape_for_inverse() {
        let t = Tensor::from_vec_f32(vec![0.5, 0.5, 1.5, 1.5], vec![2, 2]).unwrap();
        let (values, inverse, _) = unique_consecutive(&t).unwrap();
        assert_eq!(values.dtype(), DataType::Float32);
        assert_eq!(inverse.shape().dims(), &[2, 2]);
    }

    #[test]
    fn empty_input_gives_empty_outputs() {
        let t = Tensor::from_vec_i64(vec![], vec![0]).unwrap();
        let (values, inverse, counts) = unique_consecutive(&t).unwrap();
        assert_eq!(values.numel(), 0);
        assert_eq!(inverse.numel(), 0);
        assert_eq!(counts.numel(), 0);
    }

    #[test]
    fn large_int64_neighbours_stay_distinct() {
        let big = 1i64 << 53;
        let t = Tensor::from_vec_i64(vec![big, big + 1, big + 1, i64::MAX], vec![4]).unwrap();
        let (values, inverse, counts) = unique_consecutive(&t).unwrap();
        assert_eq!(
            values.data().as_i64_slice(),
            Some(&[big, big + 1, i64::MAX][..])
        );
        assert_eq!(inverse.data().as_i64_slice(), Some(&[0i64, 1, 1, 2][..]));
        assert_eq!(counts.data().as_i64_slice(), Some(&[1i64, 2, 1][..]));
    }

    #[test]
    fn nan_starts_a_new_run() {
        let t = Tensor::from_vec_f64(vec![f64::NAN, f64::NAN, 1.0], vec![3]).unwrap();
        let (_, _, counts) = unique_consecutive(&t).unwrap();
        assert_eq!(counts.data().as_i64_slice(), Some(&[1i64, 1, 1][..]));
    }
}
