// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

//! Python bindings: native tensor values handed to Python through the
//! [`wrap`] marshaller.

pub mod dtype;
pub mod error;
pub mod functions;
pub mod scalar;
pub mod tensor;
pub mod wrap;

use pyo3::prelude::*;

pub use wrap::{WrapOutput, wrap, wrap_checked};

/// Native extension module
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Value types
    m.add_class::<tensor::PyTensor>()?;
    m.add_class::<dtype::PyDType>()?;
    m.add_class::<scalar::PyScalar>()?;
    m.add_class::<scalar::PyQScheme>()?;

    // Configuration
    m.add_function(wrap_pyfunction!(dtype::set_default_dtype, m)?)?;
    m.add_function(wrap_pyfunction!(dtype::get_default_dtype, m)?)?;

    // Native functions
    functions::register_functions(m)?;

    m.add("__version__", engine::VERSION)?;
    Ok(())
}
