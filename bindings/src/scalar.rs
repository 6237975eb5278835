// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::dtype::PyDType;
use engine::{QScheme, Scalar};
use pyo3::IntoPyObjectExt;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python handle for a native tagged scalar value
#[pyclass(name = "Scalar", module = "tensorwrap._core", frozen, eq)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PyScalar {
    inner: Scalar,
}

impl PyScalar {
    pub fn scalar(&self) -> Scalar {
        self.inner
    }
}

impl From<Scalar> for PyScalar {
    fn from(inner: Scalar) -> Self {
        Self { inner }
    }
}

/// Convert a scalar into the matching Python `bool`, `int` or `float`
pub(crate) fn scalar_to_python(py: Python<'_>, scalar: Scalar) -> PyResult<Py<PyAny>> {
    match scalar {
        Scalar::Bool(b) => b.into_py_any(py),
        Scalar::Int(i) => i.into_py_any(py),
        Scalar::Float(f) => f.into_py_any(py),
    }
}

#[pymethods]
impl PyScalar {
    /// Plain Python number held by this scalar
    fn item(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        scalar_to_python(py, self.inner)
    }

    #[getter]
    fn dtype(&self) -> PyDType {
        PyDType::from(self.inner.dtype())
    }

    #[getter]
    fn is_floating_point(&self) -> bool {
        self.inner.is_floating_point()
    }

    fn __float__(&self) -> f64 {
        self.inner.to_f64()
    }

    fn __int__(&self) -> i64 {
        self.inner.to_i64()
    }

    fn __bool__(&self) -> bool {
        self.inner.to_bool()
    }

    fn __repr__(&self) -> String {
        format!("Scalar({})", self.inner)
    }
}

/// Python handle for a native quantization scheme
#[pyclass(name = "qscheme", module = "tensorwrap._core", frozen, eq, hash)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PyQScheme {
    inner: QScheme,
}

impl PyQScheme {
    pub fn qscheme(&self) -> QScheme {
        self.inner
    }
}

impl From<QScheme> for PyQScheme {
    fn from(inner: QScheme) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyQScheme {
    #[new]
    fn py_new(name: &str) -> PyResult<Self> {
        QScheme::from_name(name).map(Self::from).ok_or_else(|| {
            PyValueError::new_err(format!("Unknown quantization scheme '{name}'"))
        })
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn __repr__(&self) -> String {
        format!("tensorwrap.{}", self.inner.name())
    }
}
