// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::{
    error::{MinitensorError, Result},
    tensor::{Shape, Tensor},
};
use std::sync::Arc;

/// Split a tensor into pieces of `split_size` along `dim`. The last piece is
/// smaller when the dimension does not divide evenly.
///
/// A 0-d tensor has no dimension to split and gives an index error.
pub fn split(tensor: &Tensor, split_size: usize, dim: isize) -> Result<Vec<Tensor>> {
    if split_size == 0 {
        return Err(MinitensorError::invalid_argument(
            "split_size must be a positive integer",
        ));
    }
    let d = tensor.shape().normalize_dim(dim)?;
    let extent = tensor.shape().dims()[d];
    if extent == 0 {
        return Ok(vec![narrow_copy(tensor, d, 0, 0)]);
    }

    Ok((0..extent)
        .step_by(split_size)
        .map(|start| narrow_copy(tensor, d, start, split_size.min(extent - start)))
        .collect())
}

/// Split a tensor into at most `chunks` pieces of equal size along `dim`.
/// Rejects 0-d tensors like [`split`].
pub fn chunk(tensor: &Tensor, chunks: usize, dim: isize) -> Result<Vec<Tensor>> {
    if chunks == 0 {
        return Err(MinitensorError::invalid_argument(
            "chunk expects `chunks` to be greater than 0",
        ));
    }
    let d = tensor.shape().normalize_dim(dim)?;
    let extent = tensor.shape().dims()[d];
    let split_size = extent.div_ceil(chunks).max(1);
    split(tensor, split_size, dim)
}

/// Remove `dim`, returning every slice along it. Rejects 0-d tensors.
pub fn unbind(tensor: &Tensor, dim: isize) -> Result<Vec<Tensor>> {
    let d = tensor.shape().normalize_dim(dim)?;
    let extent = tensor.shape().dims()[d];
    let mut dims = tensor.shape().dims().to_vec();
    dims.remove(d);
    let slice_shape = Shape::new(dims);

    Ok((0..extent)
        .map(|index| {
            let slice = narrow_copy(tensor, d, index, 1);
            Tensor::new(
                Arc::clone(slice.data()),
                slice_shape.clone(),
                slice.dtype(),
                slice.device(),
                false,
            )
        })
        .collect())
}

/// Copy `len` entries starting at `start` along dimension `d` into a new tensor
fn narrow_copy(tensor: &Tensor, d: usize, start: usize, len: usize) -> Tensor {
    let (outer, extent, inner) = tensor.shape().split_at_dim(d);
    let mut indices = Vec::with_capacity(outer * len * inner);
    for o in 0..outer {
        for k in start..start + len {
            let base = (o * extent + k) * inner;
            indices.extend(base..base + inner);
        }
    }

    let mut dims = tensor.shape().dims().to_vec();
    dims[d] = len;
    Tensor::new(
        Arc::new(tensor.data().gather(&indices)),
        Shape::new(dims),
        tensor.dtype(),
        tensor.device(),
        false,
    )
}
