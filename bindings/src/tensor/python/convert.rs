// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

fn convert_python_data_to_tensor(data: &Bound<PyAny>, dtype: DataType) -> PyResult<Tensor> {
    if dtype.is_quantized() {
        return Err(PyTypeError::new_err(format!(
            "cannot create a {} tensor from Python data; use quantize_per_tensor",
            dtype.name()
        )));
    }

    // Handle Python lists and tuples by flattening values into scalar variants
    if let Ok(list) = data.cast::<PyList>() {
        let (shape, flat_data) = flatten_python_data(list)?;
        return tensor_from_flat_scalars(shape, flat_data, dtype);
    }

    if let Ok(tuple) = data.cast::<PyTuple>() {
        let list = tuple.to_list();
        return convert_python_data_to_tensor(list.as_any(), dtype);
    }

    // Handle scalars
    let value = extract_scalar(data)?;
    tensor_from_flat_scalars(Vec::new(), vec![value], dtype)
}

fn extract_scalar(item: &Bound<PyAny>) -> PyResult<Scalar> {
    if item.is_instance_of::<PyBool>() {
        return Ok(Scalar::Bool(item.extract::<bool>()?));
    }

    if let Ok(py_scalar) = item.extract::<PyRef<crate::scalar::PyScalar>>() {
        return Ok(py_scalar.scalar());
    }

    if let Ok(value_int) = item.extract::<i64>() {
        return Ok(Scalar::Int(value_int));
    }

    if let Ok(value_float) = item.extract::<f64>() {
        return Ok(Scalar::Float(value_float));
    }

    Err(PyTypeError::new_err(format!(
        "Unsupported scalar type '{}' in tensor data",
        item.get_type().name()?
    )))
}

fn flatten_python_data(list: &Bound<PyList>) -> PyResult<(Vec<usize>, Vec<Scalar>)> {
    let mut shape = vec![list.len()];
    let mut flat_data = vec![];

    fn process_nested(
        item: &Bound<PyAny>,
        depth: usize,
        shape: &mut Vec<usize>,
        flat_data: &mut Vec<Scalar>,
    ) -> PyResult<()> {
        let nested = if let Ok(nested_list) = item.cast::<PyList>() {
            Some(nested_list.clone())
        } else if let Ok(nested_tuple) = item.cast::<PyTuple>() {
            Some(nested_tuple.to_list())
        } else {
            None
        };

        match nested {
            Some(nested_list) => {
                let length = nested_list.len();
                if depth >= shape.len() {
                    if !flat_data.is_empty() {
                        return Err(PyValueError::new_err("Inconsistent nested sequence depth"));
                    }
                    shape.push(length);
                } else if shape[depth] != length {
                    return Err(PyValueError::new_err(
                        "Inconsistent nested sequence lengths",
                    ));
                }
                for nested_item in nested_list.iter() {
                    process_nested(&nested_item, depth + 1, shape, flat_data)?;
                }
                Ok(())
            }
            None => {
                if depth != shape.len() {
                    return Err(PyValueError::new_err("Inconsistent nested sequence depth"));
                }
                flat_data.push(extract_scalar(item)?);
                Ok(())
            }
        }
    }

    for item in list.iter() {
        process_nested(&item, 1, &mut shape, &mut flat_data)?;
    }

    Ok((shape, flat_data))
}

fn tensor_from_flat_scalars(
    shape: Vec<usize>,
    values: Vec<Scalar>,
    dtype: DataType,
) -> PyResult<Tensor> {
    let data = match dtype {
        DataType::Int32 | DataType::Int64 => {
            let ints: Vec<i64> = values.iter().map(Scalar::to_i64).collect();
            if dtype == DataType::Int64 {
                TensorData::from_vec_i64(ints)
            } else {
                TensorData::from_vec_i32(ints.into_iter().map(|v| v as i32).collect())
            }
        }
        DataType::Bool => TensorData::from_vec_bool(values.iter().map(Scalar::to_bool).collect()),
        _ => {
            let floats: Vec<f64> = values.iter().map(Scalar::to_f64).collect();
            TensorData::from_f64_cast(&floats, dtype)
        }
    };
    Tensor::from_data(data, Shape::new(shape)).map_err(_convert_error)
}

fn tensor_scalars(tensor: &Tensor) -> Vec<Scalar> {
    let data = tensor.data();
    if let Some(values) = data.as_i64_slice() {
        return values.iter().map(|&v| Scalar::Int(v)).collect();
    }
    if let Some(values) = data.as_i32_slice() {
        return values.iter().map(|&v| Scalar::Int(v as i64)).collect();
    }
    if let Some(values) = data.as_bool_slice() {
        return values.iter().map(|&v| Scalar::Bool(v)).collect();
    }
    tensor.to_vec_f64().into_iter().map(Scalar::Float).collect()
}

/// Nested Python lists mirroring the tensor's shape. Quantized tensors are
/// dequantized first so the host sees real values.
fn tensor_to_nested_list(py: Python<'_>, tensor: &Tensor) -> PyResult<Py<PyAny>> {
    let tensor = if tensor.is_quantized() {
        tensor.dequantize().map_err(_convert_error)?
    } else {
        tensor.clone()
    };

    fn build(py: Python<'_>, dims: &[usize], values: &[Scalar]) -> PyResult<Py<PyAny>> {
        let Some((&len, rest)) = dims.split_first() else {
            return match values.first() {
                Some(&value) => scalar_to_python(py, value),
                None => Ok(py.None()),
            };
        };
        let list = PyList::empty(py);
        let stride: usize = rest.iter().product();
        for i in 0..len {
            list.append(build(py, rest, &values[i * stride..(i + 1) * stride])?)?;
        }
        Ok(list.into_any().unbind())
    }

    build(py, tensor.shape().dims(), &tensor_scalars(&tensor))
}
