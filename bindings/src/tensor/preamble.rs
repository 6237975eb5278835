// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::dtype::{self, PyDType};
use crate::error::_convert_error;
use crate::functions;
use crate::scalar::scalar_to_python;
use engine::{DataType, Scalar, Shape, Tensor, TensorData};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyBool, PyList, PyTuple};

/// Python wrapper for Tensor.
///
/// Holds its own handle on the native storage; the storage stays alive for as
/// long as Python keeps this object.
#[pyclass(name = "Tensor", module = "tensorwrap._core")]
#[derive(Clone, Debug)]
pub struct PyTensor {
    inner: Tensor,
}

impl PyTensor {
    /// Get reference to inner tensor
    pub fn tensor(&self) -> &Tensor {
        &self.inner
    }

    /// Create from inner tensor
    pub fn from_tensor(tensor: Tensor) -> Self {
        Self { inner: tensor }
    }
}
