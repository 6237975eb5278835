// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, MinitensorError>;

/// Errors raised by native tensor operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MinitensorError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },

    #[error("Index {index} is out of range [{min}, {max})")]
    IndexError { index: isize, min: isize, max: usize },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Unknown return types: {returns}")]
    UnsupportedReturn { returns: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl MinitensorError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    pub fn index_error(index: isize, min: isize, max: usize) -> Self {
        Self::IndexError { index, min, max }
    }

    pub fn shape_mismatch(expected: Vec<usize>, actual: Vec<usize>) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn unsupported_return(returns: impl Into<String>) -> Self {
        Self::UnsupportedReturn {
            returns: returns.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Message with a hint about how to fix the failing call, when one applies
    pub fn detailed_message(&self) -> String {
        match self {
            Self::IndexError { index, max, .. } if *max == 0 => {
                format!("{self} (dimension {index} requested on a 0-d tensor)")
            }
            Self::ShapeMismatch { .. } => {
                format!("{self}. Check that all operands have compatible shapes")
            }
            Self::UnsupportedReturn { .. } => format!(
                "{self}. Supported returns are (), bool, int, float, Scalar, ScalarType, \
                 QScheme, Tensor, Tensor[] and the fixed tensor tuples"
            ),
            _ => self.to_string(),
        }
    }
}
