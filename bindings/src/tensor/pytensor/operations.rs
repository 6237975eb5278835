// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

// Method forms of the module-level native functions.
#[pymethods]
impl PyTensor {
    #[pyo3(signature = (dim, keepdim=false))]
    fn max(&self, py: Python<'_>, dim: isize, keepdim: bool) -> PyResult<Py<PyAny>> {
        functions::max_py(py, self, dim, keepdim)
    }

    #[pyo3(signature = (dim, keepdim=false))]
    fn min(&self, py: Python<'_>, dim: isize, keepdim: bool) -> PyResult<Py<PyAny>> {
        functions::min_py(py, self, dim, keepdim)
    }

    #[pyo3(signature = (unbiased=true))]
    fn std_mean(&self, py: Python<'_>, unbiased: bool) -> PyResult<Py<PyAny>> {
        functions::std_mean_py(py, self, unbiased)
    }

    #[pyo3(signature = (unbiased=true))]
    fn var_mean(&self, py: Python<'_>, unbiased: bool) -> PyResult<Py<PyAny>> {
        functions::var_mean_py(py, self, unbiased)
    }

    fn aminmax(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::aminmax_py(py, self)
    }

    #[pyo3(signature = (split_size, dim=0))]
    fn split(&self, py: Python<'_>, split_size: usize, dim: isize) -> PyResult<Py<PyAny>> {
        functions::split_py(py, self, split_size, dim)
    }

    #[pyo3(signature = (chunks, dim=0))]
    fn chunk(&self, py: Python<'_>, chunks: usize, dim: isize) -> PyResult<Py<PyAny>> {
        functions::chunk_py(py, self, chunks, dim)
    }

    #[pyo3(signature = (dim=0))]
    fn unbind(&self, py: Python<'_>, dim: isize) -> PyResult<Py<PyAny>> {
        functions::unbind_py(py, self, dim)
    }

    fn unique_consecutive(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::unique_consecutive_py(py, self)
    }

    fn dequantize(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::dequantize_py(py, self)
    }

    fn qscheme(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::qscheme_py(py, self)
    }

    fn q_scale(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::q_scale_py(py, self)
    }

    fn q_zero_point(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::q_zero_point_py(py, self)
    }
}
