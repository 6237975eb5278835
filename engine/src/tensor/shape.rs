// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the BSD-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{MinitensorError, Result};

/// Tensor dimensions, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Shape of a 0-d tensor
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    #[inline(always)]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline(always)]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Number of elements; 1 for a 0-d shape
    #[inline(always)]
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn size(&self, dim: usize) -> Result<usize> {
        self.dims
            .get(dim)
            .copied()
            .ok_or_else(|| MinitensorError::index_error(dim as isize, 0, self.ndim()))
    }

    /// Resolve a possibly negative dimension index
    pub fn normalize_dim(&self, dim: isize) -> Result<usize> {
        let ndim = self.ndim();
        let resolved = if dim < 0 { dim + ndim as isize } else { dim };
        if resolved < 0 || resolved >= ndim as isize {
            Err(MinitensorError::index_error(dim, -(ndim as isize), ndim))
        } else {
            Ok(resolved as usize)
        }
    }

    /// Split the shape around `dim` into (outer, extent, inner) element counts
    pub(crate) fn split_at_dim(&self, dim: usize) -> (usize, usize, usize) {
        let outer = self.dims[..dim].iter().product();
        let inner = self.dims[dim + 1..].iter().product();
        (outer, self.dims[dim], inner)
    }

    /// Copy of this shape with `dim` removed, or set to 1 when `keepdim`
    pub(crate) fn reduced(&self, dim: usize, keepdim: bool) -> Shape {
        let mut dims = self.dims.clone();
        if keepdim {
            dims[dim] = 1;
        } else {
            dims.remove(dim);
        }
        Shape::new(dims)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}
