// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the BSD-style license found in the
// LICENSE file in the root directory of this source tree.

use engine::MinitensorError;
use pyo3::PyErr;
use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyTypeError, PyValueError};

/// Translate a native error into the matching Python exception
pub fn _convert_error(err: MinitensorError) -> PyErr {
    let message = err.detailed_message();
    match err {
        MinitensorError::IndexError { .. } => PyIndexError::new_err(message),
        MinitensorError::InvalidArgument { .. } | MinitensorError::ShapeMismatch { .. } => {
            PyValueError::new_err(message)
        }
        MinitensorError::TypeMismatch { .. } => PyTypeError::new_err(message),
        MinitensorError::InvalidOperation { .. }
        | MinitensorError::UnsupportedReturn { .. }
        | MinitensorError::InternalError { .. } => PyRuntimeError::new_err(message),
    }
}
