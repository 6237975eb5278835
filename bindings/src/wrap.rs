// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

//! Conversion of native return values into Python objects.
//!
//! Every supported native return shape implements [`WrapOutput`]. Single
//! values become a Python scalar or a wrapped handle; tuples and tensor lists
//! become a new `list` filled left to right. Only the concrete shapes below
//! are implemented, so returning anything else from a binding fails to
//! compile.

use crate::dtype::PyDType;
use crate::error::_convert_error;
use crate::scalar::{PyQScheme, PyScalar};
use crate::tensor::PyTensor;
use engine::{DataType, NativeOutput, QScheme, ReturnKind, Scalar, Tensor};
use pyo3::IntoPyObjectExt;
use pyo3::prelude::*;
use pyo3::types::PyList;

/// A native value that can be handed to Python.
pub trait WrapOutput {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>>;
}

/// Convert a native return value into a Python object.
#[inline]
pub fn wrap<T: WrapOutput>(py: Python<'_>, value: T) -> PyResult<Py<PyAny>> {
    value.wrap(py)
}

impl WrapOutput for () {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(py.None())
    }
}

impl WrapOutput for bool {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.into_py_any(py)
    }
}

impl WrapOutput for i64 {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.into_py_any(py)
    }
}

impl WrapOutput for f64 {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.into_py_any(py)
    }
}

/// The Python handle takes over this reference to the storage and releases it
/// when collected.
impl WrapOutput for Tensor {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(Py::new(py, PyTensor::from_tensor(self))?.into_any())
    }
}

impl WrapOutput for &Tensor {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.clone().wrap(py)
    }
}

impl WrapOutput for Scalar {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(Py::new(py, PyScalar::from(self))?.into_any())
    }
}

impl WrapOutput for DataType {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(Py::new(py, PyDType::from(self))?.into_any())
    }
}

impl WrapOutput for QScheme {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(Py::new(py, PyQScheme::from(self))?.into_any())
    }
}

impl WrapOutput for Vec<Tensor> {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for tensor in self {
            list.append(tensor.wrap(py)?)?;
        }
        Ok(list.into_any().unbind())
    }
}

impl WrapOutput for &[Tensor] {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for tensor in self {
            list.append(tensor.wrap(py)?)?;
        }
        Ok(list.into_any().unbind())
    }
}

macro_rules! wrap_tuple {
    ($($name:ident: $ty:ty),+) => {
        impl WrapOutput for ($($ty,)+) {
            fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
                let ($($name,)+) = self;
                let list = PyList::empty(py);
                $(list.append($name.wrap(py)?)?;)+
                Ok(list.into_any().unbind())
            }
        }
    };
}

wrap_tuple!(a: Tensor, b: Tensor);
wrap_tuple!(a: Tensor, b: Tensor, c: Tensor);
wrap_tuple!(a: Tensor, b: Tensor, c: Tensor, d: Tensor);
wrap_tuple!(a: Tensor, b: Tensor, c: Tensor, d: Tensor, e: Tensor);
wrap_tuple!(a: Tensor, b: Tensor, n: i64);
wrap_tuple!(a: Tensor, b: Tensor, c: Tensor, n: i64);
wrap_tuple!(a: Tensor, b: Tensor, x: f64, n: i64);
wrap_tuple!(a: f64, b: f64);

impl WrapOutput for NativeOutput {
    fn wrap(self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        match self {
            NativeOutput::None => ().wrap(py),
            NativeOutput::Bool(v) => v.wrap(py),
            NativeOutput::Int(v) => v.wrap(py),
            NativeOutput::Float(v) => v.wrap(py),
            NativeOutput::Scalar(v) => v.wrap(py),
            NativeOutput::ScalarType(v) => v.wrap(py),
            NativeOutput::QScheme(v) => v.wrap(py),
            NativeOutput::Tensor(t) => t.wrap(py),
            NativeOutput::TensorList(ts) => ts.wrap(py),
            NativeOutput::Tensors2(a, b) => (a, b).wrap(py),
            NativeOutput::Tensors3(a, b, c) => (a, b, c).wrap(py),
            NativeOutput::Tensors4(a, b, c, d) => (a, b, c, d).wrap(py),
            NativeOutput::Tensors5(a, b, c, d, e) => (a, b, c, d, e).wrap(py),
            NativeOutput::TensorPairInt(a, b, n) => (a, b, n).wrap(py),
            NativeOutput::TensorsAndInt(a, b, c, n) => (a, b, c, n).wrap(py),
            NativeOutput::TensorsFloatInt(a, b, x, n) => (a, b, x, n).wrap(py),
            NativeOutput::FloatPair(a, b) => (a, b).wrap(py),
        }
    }
}

/// Wrap `output` after checking it has the shape the function declared.
pub fn wrap_checked(
    py: Python<'_>,
    declared: ReturnKind,
    output: NativeOutput,
) -> PyResult<Py<PyAny>> {
    output.expect_kind(declared).map_err(_convert_error)?;
    output.wrap(py)
}
