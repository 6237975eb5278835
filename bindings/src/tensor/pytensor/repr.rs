// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

#[pymethods]
impl PyTensor {
    // String representations
    fn __repr__(&self) -> String {
        let mut repr = format!(
            "Tensor(shape={:?}, dtype={}, device={}",
            self.inner.shape().dims(),
            self.inner.dtype(),
            self.device(),
        );
        if let Some(quantizer) = self.inner.quantizer() {
            repr.push_str(&format!(
                ", qscheme={}, scale={}, zero_point={}",
                quantizer.scheme(),
                quantizer.scale(),
                quantizer.zero_point()
            ));
        }
        repr.push(')');
        repr
    }

    fn __str__(&self, py: Python<'_>) -> String {
        if self.inner.numel() <= 100 {
            match self.tolist(py) {
                Ok(data) => format!("tensor({})", data.bind(py)),
                Err(_) => self.__repr__(),
            }
        } else {
            self.__repr__()
        }
    }

    fn __len__(&self) -> PyResult<usize> {
        if self.inner.ndim() == 0 {
            Err(PyTypeError::new_err("len() of a 0-d tensor"))
        } else {
            Ok(self.inner.shape().dims()[0])
        }
    }

    fn __bool__(&self) -> PyResult<bool> {
        if self.inner.numel() != 1 {
            return Err(PyValueError::new_err(
                "The truth value of a tensor with more than one element is ambiguous",
            ));
        }
        Ok(self.inner.item().map_err(_convert_error)?.to_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::types::PyDict;
    use std::ffi::CString;

    fn run_with_tensor<'py>(
        py: Python<'py>,
        tensor: PyTensor,
        code: &str,
    ) -> PyResult<Bound<'py, PyAny>> {
        let globals = PyDict::new(py);
        globals.set_item("t", Py::new(py, tensor)?)?;
        let code = CString::new(code).expect("embedded test code should not contain NUL bytes");
        py.run(code.as_c_str(), Some(&globals), None)?;
        Ok(globals
            .get_item("result")?
            .expect("test code should set result"))
    }

    #[test]
    fn nested_python_data_round_trips_through_tolist() {
        Python::attach(|py| -> PyResult<()> {
            let data = PyList::new(py, [vec![1i64, 2, 3], vec![4, 5, 6]])?;
            let tensor = PyTensor::new(Some(data.as_any()), Some("int64"))?;
            assert_eq!(tensor.shape_vec(), vec![2, 3]);
            assert_eq!(tensor.dtype().data_type(), DataType::Int64);

            let back = tensor.tolist(py)?;
            assert_eq!(back.extract::<Vec<Vec<i64>>>(py)?, vec![vec![1, 2, 3], vec![4, 5, 6]]);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn ragged_or_unsupported_data_is_rejected() {
        Python::attach(|py| {
            let ragged = PyList::new(py, [vec![1i64, 2], vec![3]]).unwrap();
            let err = PyTensor::new(Some(ragged.as_any()), None).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let text = PyList::new(py, ["a", "b"]).unwrap();
            let err = PyTensor::new(Some(text.as_any()), None).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));

            let ones = PyList::new(py, [1.0f64]).unwrap();
            let err = PyTensor::new(Some(ones.as_any()), Some("qint8")).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
        });
    }

    #[test]
    fn scalars_and_empty_tensors() {
        Python::attach(|py| -> PyResult<()> {
            let value = 2.5f64.into_pyobject(py)?;
            let tensor = PyTensor::new(Some(value.as_any()), Some("float64"))?;
            assert_eq!(tensor.ndim(), 0);
            assert!(tensor.__len__().is_err());
            assert_eq!(tensor.tolist(py)?.extract::<f64>(py)?, 2.5);
            assert!(tensor.__bool__()?);

            let empty = PyTensor::new(None, Some("int32"))?;
            assert_eq!(empty.shape_vec(), vec![0]);
            assert_eq!(empty.__len__()?, 0);
            assert!(empty.__bool__().is_err());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn python_side_view_of_wrapped_results() {
        Python::attach(|py| -> PyResult<()> {
            let tensor = PyTensor::from_tensor(
                Tensor::from_vec_f32(vec![3.0, 1.0, 2.0, 5.0], vec![2, 2]).unwrap(),
            );
            let result = run_with_tensor(
                py,
                tensor,
                r#"values, indices = t.max(1)
parts = t.split(1)
result = [values.tolist(), indices.tolist(), len(parts), parts[1].shares_storage(t),
          repr(t.dtype), t.is_floating_point()]
"#,
            )?;
            let result = result.cast::<PyList>()?;
            assert_eq!(result.get_item(0)?.extract::<Vec<f64>>()?, vec![3.0, 5.0]);
            assert_eq!(result.get_item(1)?.extract::<Vec<i64>>()?, vec![0, 1]);
            assert_eq!(result.get_item(2)?.extract::<usize>()?, 2);
            assert!(!result.get_item(3)?.extract::<bool>()?);
            assert_eq!(result.get_item(4)?.extract::<String>()?, "tensorwrap.float32");
            assert!(result.get_item(5)?.extract::<bool>()?);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn storage_handles_are_visible_from_python() {
        Python::attach(|py| -> PyResult<()> {
            let inner = Tensor::from_vec_f64(vec![1.0, 2.0], vec![2]).unwrap();
            let keep = inner.clone();
            let result = run_with_tensor(
                py,
                PyTensor::from_tensor(inner),
                r#"alias = t._tensor
result = [t.data_ptr() == alias.data_ptr(), t._storage_refcount()]
"#,
            )?;
            let result = result.cast::<PyList>()?;
            assert!(result.get_item(0)?.extract::<bool>()?);
            assert_eq!(result.get_item(1)?.extract::<usize>()?, 3);
            assert!(keep.storage_ref_count() >= 2);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn quantized_tensors_describe_their_parameters() {
        let q = Tensor::from_vec_f32(vec![0.5, 1.0], vec![2])
            .unwrap()
            .quantize_per_tensor(0.5, 1, DataType::QUInt8)
            .unwrap();
        let tensor = PyTensor::from_tensor(q);
        let repr = tensor.__repr__();
        assert!(repr.contains("dtype=quint8"));
        assert!(repr.contains("scale=0.5"));
        assert!(repr.contains("zero_point=1"));

        Python::attach(|py| -> PyResult<()> {
            let values = tensor.tolist(py)?.extract::<Vec<f64>>(py)?;
            assert_eq!(values, vec![0.5, 1.0]);
            Ok(())
        })
        .unwrap();
    }
}
