// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

#[pymethods]
impl PyTensor {
    /// Create a new tensor from Python data
    #[new]
    #[pyo3(signature = (data=None, dtype=None))]
    fn new(data: Option<&Bound<PyAny>>, dtype: Option<&str>) -> PyResult<Self> {
        let dtype = dtype::resolve_dtype_arg(dtype)?;

        if let Some(value) = data {
            let tensor = convert_python_data_to_tensor(value, dtype)?;
            Ok(Self::from_tensor(tensor))
        } else {
            if dtype.is_quantized() {
                return Err(PyTypeError::new_err(format!(
                    "cannot create an empty {} tensor",
                    dtype.name()
                )));
            }
            let data = TensorData::zeros(0, dtype);
            let tensor = Tensor::from_data(data, Shape::new(vec![0])).map_err(_convert_error)?;
            Ok(Self::from_tensor(tensor))
        }
    }

    // Properties
    #[getter]
    pub fn shape<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyTuple>> {
        PyTuple::new(py, self.inner.shape().dims())
    }

    pub fn shape_vec(&self) -> Vec<usize> {
        self.inner.shape().dims().to_vec()
    }

    #[getter]
    pub fn dtype(&self) -> PyDType {
        PyDType::from(self.inner.dtype())
    }

    #[getter]
    fn device(&self) -> String {
        self.inner.device().to_string()
    }

    #[getter]
    fn _tensor(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    #[getter]
    pub fn requires_grad(&self) -> bool {
        self.inner.requires_grad()
    }

    #[getter]
    fn is_quantized(&self) -> bool {
        self.inner.is_quantized()
    }

    #[getter]
    fn itemsize(&self) -> usize {
        self.inner.dtype().size_bytes()
    }

    #[getter]
    fn nbytes(&self) -> usize {
        self.inner.numel() * self.itemsize()
    }

    // Basic tensor info methods
    pub fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    fn numel(&self) -> usize {
        self.inner.numel()
    }

    fn is_floating_point(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::is_floating_point_py(py, self)
    }

    /// Address of the native storage; equal for tensors sharing storage
    fn data_ptr(&self) -> usize {
        self.inner.storage_ptr()
    }

    /// Number of live handles on the native storage
    fn _storage_refcount(&self) -> usize {
        self.inner.storage_ref_count()
    }

    fn shares_storage(&self, other: &PyTensor) -> bool {
        self.inner.shares_storage(&other.inner)
    }

    fn tolist(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        tensor_to_nested_list(py, &self.inner)
    }

    /// Value of a one-element tensor as a `Scalar`
    fn item(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        functions::item_py(py, self)
    }
}
