// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use engine::DataType;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

static DEFAULT_DTYPE: Lazy<RwLock<DataType>> = Lazy::new(|| RwLock::new(DataType::Float32));

fn dtype_from_str(name: &str) -> Option<DataType> {
    match name.to_ascii_lowercase().as_str() {
        "float32" | "f32" => Some(DataType::Float32),
        "float64" | "f64" => Some(DataType::Float64),
        "int32" | "i32" => Some(DataType::Int32),
        "int64" | "i64" => Some(DataType::Int64),
        "bool" | "boolean" => Some(DataType::Bool),
        "qint8" => Some(DataType::QInt8),
        "quint8" => Some(DataType::QUInt8),
        _ => None,
    }
}

pub fn parse_dtype(name: &str) -> PyResult<DataType> {
    dtype_from_str(name).ok_or_else(|| {
        PyValueError::new_err(format!(
            "Unsupported dtype '{name}'. Expected one of float32, float64, int32, int64, bool, qint8, quint8"
        ))
    })
}

pub fn resolve_dtype_arg(arg: Option<&str>) -> PyResult<DataType> {
    match arg {
        Some(name) => parse_dtype(name),
        None => Ok(default_dtype()),
    }
}

pub fn default_dtype() -> DataType {
    *DEFAULT_DTYPE.read()
}

/// Change the dtype used for tensors created without an explicit dtype.
/// Quantized types cannot be the default.
#[pyfunction]
pub fn set_default_dtype(name: &str) -> PyResult<()> {
    let dtype = parse_dtype(name)?;
    if dtype.is_quantized() {
        return Err(PyValueError::new_err(format!(
            "default dtype cannot be a quantized type, got '{name}'"
        )));
    }
    *DEFAULT_DTYPE.write() = dtype;
    Ok(())
}

#[pyfunction]
pub fn get_default_dtype() -> String {
    dtype_to_python_string(default_dtype()).to_string()
}

pub fn dtype_to_python_string(dtype: DataType) -> &'static str {
    dtype.name()
}

/// Python handle for a native scalar type
#[pyclass(name = "dtype", module = "tensorwrap._core", frozen, eq, hash)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PyDType {
    inner: DataType,
}

impl PyDType {
    pub fn data_type(&self) -> DataType {
        self.inner
    }
}

impl From<DataType> for PyDType {
    fn from(inner: DataType) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyDType {
    #[new]
    fn py_new(name: &str) -> PyResult<Self> {
        parse_dtype(name).map(Self::from)
    }

    #[getter]
    fn name(&self) -> &'static str {
        dtype_to_python_string(self.inner)
    }

    #[getter]
    fn itemsize(&self) -> usize {
        self.inner.size_bytes()
    }

    #[getter]
    fn is_floating_point(&self) -> bool {
        self.inner.is_float()
    }

    #[getter]
    fn is_quantized(&self) -> bool {
        self.inner.is_quantized()
    }

    fn __repr__(&self) -> String {
        format!("tensorwrap.{}", self.name())
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_default_dtype_rejects_invalid_name() {
        let err = set_default_dtype("bad_dtype").unwrap_err();
        assert!(err.to_string().contains("Unsupported dtype 'bad_dtype'"));

        let err = set_default_dtype("qint8").unwrap_err();
        assert!(err.to_string().contains("quantized"));
    }

    #[test]
    fn dtype_to_python_string_covers_all_variants() {
        assert_eq!(dtype_to_python_string(DataType::Int64), "int64");
        assert_eq!(dtype_to_python_string(DataType::Bool), "bool");
        assert_eq!(dtype_to_python_string(DataType::QUInt8), "quint8");
    }

    #[test]
    fn parse_and_resolve_dtype_arg_cover_success_and_error_paths() {
        assert_eq!(parse_dtype("f32").unwrap(), DataType::Float32);
        assert_eq!(parse_dtype("FLOAT64").unwrap(), DataType::Float64);
        assert_eq!(parse_dtype("QInt8").unwrap(), DataType::QInt8);
        assert!(parse_dtype("bad_dtype").is_err());

        assert_eq!(resolve_dtype_arg(Some("int64")).unwrap(), DataType::Int64);
    }

    #[test]
    fn default_dtype_round_trip_and_python_string() {
        set_default_dtype("float64").unwrap();
        assert_eq!(default_dtype(), DataType::Float64);
        assert_eq!(get_default_dtype(), "float64");
        assert_eq!(resolve_dtype_arg(None).unwrap(), DataType::Float64);

        set_default_dtype("float32").unwrap();
        assert_eq!(get_default_dtype(), "float32");
    }

    #[test]
    fn dtype_objects_compare_by_value() {
        Python::attach(|py| -> PyResult<()> {
            let a = Py::new(py, PyDType::from(DataType::Int32))?;
            let b = Py::new(py, PyDType::py_new("i32")?)?;
            assert!(a.bind(py).eq(b.bind(py))?);
            assert_eq!(a.bind(py).repr()?.to_string(), "tensorwrap.int32");
            assert_eq!(a.get().itemsize(), 4);
            Ok(())
        })
        .unwrap();
    }
}
