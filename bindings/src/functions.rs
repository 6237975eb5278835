// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use crate::dtype::{self, PyDType};
use crate::error::_convert_error;
use crate::scalar::PyScalar;
use crate::tensor::PyTensor;
use crate::wrap::wrap_checked;
use engine::{DataType, NativeOutput, ReturnKind, operations, quantization};
use log::{trace, warn};
use once_cell::sync::Lazy;
use pyo3::exceptions::{PyRuntimeError, PyTypeError};
use pyo3::prelude::*;
use pyo3::types::PyString;
use std::collections::HashMap;

/// Native functions exposed to Python and the return clause each declares.
pub const NATIVE_FUNCTIONS: &[(&str, &str)] = &[
    ("max", "(Tensor values, Tensor indices)"),
    ("min", "(Tensor values, Tensor indices)"),
    ("std_mean", "(Tensor, Tensor)"),
    ("var_mean", "(Tensor, Tensor)"),
    ("aminmax", "(float min, float max)"),
    ("split", "Tensor(a)[]"),
    ("chunk", "Tensor(a)[]"),
    ("unbind", "Tensor(a)[]"),
    ("unique_consecutive", "(Tensor, Tensor, Tensor)"),
    ("quantize_per_tensor", "Tensor"),
    ("dequantize", "Tensor"),
    ("choose_qparams", "(Tensor, Tensor, float, int)"),
    ("qscheme", "QScheme"),
    ("q_scale", "float"),
    ("q_zero_point", "int"),
    ("item", "Scalar"),
    ("result_type", "ScalarType"),
    ("is_floating_point", "bool"),
];

static RETURN_KINDS: Lazy<HashMap<&'static str, ReturnKind>> = Lazy::new(|| {
    let mut kinds = HashMap::with_capacity(NATIVE_FUNCTIONS.len());
    for &(name, returns) in NATIVE_FUNCTIONS {
        match ReturnKind::parse(returns) {
            Ok(kind) => {
                kinds.insert(name, kind);
            }
            Err(err) => warn!("native function {name} not exposed: {err}"),
        }
    }
    kinds
});

/// Declared return kind of a native function, if it has a valid declaration.
pub fn declared_return(name: &str) -> Option<ReturnKind> {
    RETURN_KINDS.get(name).copied()
}

/// Hand a native result back to Python through the marshaller, checking it
/// against the function's declared return.
pub(crate) fn forward(
    py: Python<'_>,
    name: &str,
    output: impl Into<NativeOutput>,
) -> PyResult<Py<PyAny>> {
    let declared = declared_return(name).ok_or_else(|| {
        PyRuntimeError::new_err(format!("native function '{name}' has no return declaration"))
    })?;
    trace!("{name}: returning {declared}");
    wrap_checked(py, declared, output.into())
}

fn dtype_of(value: &Bound<PyAny>) -> PyResult<DataType> {
    if let Ok(tensor) = value.extract::<PyRef<PyTensor>>() {
        return Ok(tensor.tensor().dtype());
    }
    if let Ok(dtype) = value.extract::<PyRef<PyDType>>() {
        return Ok(dtype.data_type());
    }
    if let Ok(scalar) = value.extract::<PyRef<PyScalar>>() {
        return Ok(scalar.scalar().dtype());
    }
    if let Ok(name) = value.cast::<PyString>() {
        return dtype::parse_dtype(name.to_cow()?.as_ref());
    }
    Err(PyTypeError::new_err(format!(
        "result_type expects tensors, dtypes or dtype names, got '{}'",
        value.get_type().name()?
    )))
}

/// Largest value along `dim` and its index
#[pyfunction]
#[pyo3(name = "max", signature = (input, dim, keepdim=false))]
pub fn max_py(py: Python<'_>, input: &PyTensor, dim: isize, keepdim: bool) -> PyResult<Py<PyAny>> {
    let result = operations::max_with_indices(input.tensor(), dim, keepdim)
        .map_err(_convert_error)?;
    forward(py, "max", result)
}

/// Smallest value along `dim` and its index
#[pyfunction]
#[pyo3(name = "min", signature = (input, dim, keepdim=false))]
pub fn min_py(py: Python<'_>, input: &PyTensor, dim: isize, keepdim: bool) -> PyResult<Py<PyAny>> {
    let result = operations::min_with_indices(input.tensor(), dim, keepdim)
        .map_err(_convert_error)?;
    forward(py, "min", result)
}

#[pyfunction]
#[pyo3(name = "std_mean", signature = (input, unbiased=true))]
pub fn std_mean_py(py: Python<'_>, input: &PyTensor, unbiased: bool) -> PyResult<Py<PyAny>> {
    let result = operations::std_mean(input.tensor(), unbiased).map_err(_convert_error)?;
    forward(py, "std_mean", result)
}

#[pyfunction]
#[pyo3(name = "var_mean", signature = (input, unbiased=true))]
pub fn var_mean_py(py: Python<'_>, input: &PyTensor, unbiased: bool) -> PyResult<Py<PyAny>> {
    let result = operations::var_mean(input.tensor(), unbiased).map_err(_convert_error)?;
    forward(py, "var_mean", result)
}

#[pyfunction]
#[pyo3(name = "aminmax")]
pub fn aminmax_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    let result = operations::aminmax(input.tensor()).map_err(_convert_error)?;
    forward(py, "aminmax", result)
}

#[pyfunction]
#[pyo3(name = "split", signature = (input, split_size, dim=0))]
pub fn split_py(
    py: Python<'_>,
    input: &PyTensor,
    split_size: usize,
    dim: isize,
) -> PyResult<Py<PyAny>> {
    let parts = operations::split(input.tensor(), split_size, dim).map_err(_convert_error)?;
    forward(py, "split", parts)
}

#[pyfunction]
#[pyo3(name = "chunk", signature = (input, chunks, dim=0))]
pub fn chunk_py(py: Python<'_>, input: &PyTensor, chunks: usize, dim: isize) -> PyResult<Py<PyAny>> {
    let parts = operations::chunk(input.tensor(), chunks, dim).map_err(_convert_error)?;
    forward(py, "chunk", parts)
}

#[pyfunction]
#[pyo3(name = "unbind", signature = (input, dim=0))]
pub fn unbind_py(py: Python<'_>, input: &PyTensor, dim: isize) -> PyResult<Py<PyAny>> {
    let parts = operations::unbind(input.tensor(), dim).map_err(_convert_error)?;
    forward(py, "unbind", parts)
}

/// Values, inverse indices and run lengths of consecutive duplicates
#[pyfunction]
#[pyo3(name = "unique_consecutive")]
pub fn unique_consecutive_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    let result = operations::unique_consecutive(input.tensor()).map_err(_convert_error)?;
    forward(py, "unique_consecutive", result)
}

#[pyfunction]
#[pyo3(name = "quantize_per_tensor", signature = (input, scale, zero_point, dtype="quint8"))]
pub fn quantize_per_tensor_py(
    py: Python<'_>,
    input: &PyTensor,
    scale: f64,
    zero_point: i64,
    dtype: &str,
) -> PyResult<Py<PyAny>> {
    let dtype = dtype::parse_dtype(dtype)?;
    let result = quantization::quantize_per_tensor(input.tensor(), scale, zero_point, dtype)
        .map_err(_convert_error)?;
    forward(py, "quantize_per_tensor", result)
}

#[pyfunction]
#[pyo3(name = "dequantize")]
pub fn dequantize_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    let result = quantization::dequantize(input.tensor()).map_err(_convert_error)?;
    forward(py, "dequantize", result)
}

/// Quantize with parameters fitted to the tensor's range
#[pyfunction]
#[pyo3(name = "choose_qparams", signature = (input, dtype="quint8"))]
pub fn choose_qparams_py(py: Python<'_>, input: &PyTensor, dtype: &str) -> PyResult<Py<PyAny>> {
    let dtype = dtype::parse_dtype(dtype)?;
    let result = quantization::choose_qparams(input.tensor(), dtype).map_err(_convert_error)?;
    forward(py, "choose_qparams", result)
}

#[pyfunction]
#[pyo3(name = "qscheme")]
pub fn qscheme_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    let scheme = input.tensor().qscheme().map_err(_convert_error)?;
    forward(py, "qscheme", scheme)
}

#[pyfunction]
#[pyo3(name = "q_scale")]
pub fn q_scale_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    let scale = input.tensor().q_scale().map_err(_convert_error)?;
    forward(py, "q_scale", scale)
}

#[pyfunction]
#[pyo3(name = "q_zero_point")]
pub fn q_zero_point_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    let zero_point = input.tensor().q_zero_point().map_err(_convert_error)?;
    forward(py, "q_zero_point", zero_point)
}

#[pyfunction]
#[pyo3(name = "item")]
pub fn item_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    let value = input.tensor().item().map_err(_convert_error)?;
    forward(py, "item", value)
}

/// Promoted dtype of two tensors, dtypes or dtype names
#[pyfunction]
#[pyo3(name = "result_type")]
pub fn result_type_py(
    py: Python<'_>,
    a: &Bound<PyAny>,
    b: &Bound<PyAny>,
) -> PyResult<Py<PyAny>> {
    let (lhs, rhs) = (dtype_of(a)?, dtype_of(b)?);
    let promoted = DataType::result_type(lhs, rhs).ok_or_else(|| {
        PyTypeError::new_err(format!("no common dtype for {lhs} and {rhs}"))
    })?;
    forward(py, "result_type", promoted)
}

#[pyfunction]
#[pyo3(name = "is_floating_point")]
pub fn is_floating_point_py(py: Python<'_>, input: &PyTensor) -> PyResult<Py<PyAny>> {
    forward(py, "is_floating_point", input.tensor().is_floating_point())
}

/// Add every native function to `m`
pub fn register_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(max_py, m)?)?;
    m.add_function(wrap_pyfunction!(min_py, m)?)?;
    m.add_function(wrap_pyfunction!(std_mean_py, m)?)?;
    m.add_function(wrap_pyfunction!(var_mean_py, m)?)?;
    m.add_function(wrap_pyfunction!(aminmax_py, m)?)?;
    m.add_function(wrap_pyfunction!(split_py, m)?)?;
    m.add_function(wrap_pyfunction!(chunk_py, m)?)?;
    m.add_function(wrap_pyfunction!(unbind_py, m)?)?;
    m.add_function(wrap_pyfunction!(unique_consecutive_py, m)?)?;
    m.add_function(wrap_pyfunction!(quantize_per_tensor_py, m)?)?;
    m.add_function(wrap_pyfunction!(dequantize_py, m)?)?;
    m.add_function(wrap_pyfunction!(choose_qparams_py, m)?)?;
    m.add_function(wrap_pyfunction!(qscheme_py, m)?)?;
    m.add_function(wrap_pyfunction!(q_scale_py, m)?)?;
    m.add_function(wrap_pyfunction!(q_zero_point_py, m)?)?;
    m.add_function(wrap_pyfunction!(item_py, m)?)?;
    m.add_function(wrap_pyfunction!(result_type_py, m)?)?;
    m.add_function(wrap_pyfunction!(is_floating_point_py, m)?)?;
    Ok(())
}
