// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the BSD-style license found in the
// LICENSE file in the root directory of this source tree.

pub mod device;
pub mod error;
pub mod operations;
pub mod quantization;
pub mod scalar;
pub mod schema;
pub mod tensor;

// Re-export core types
pub use device::{Device, DeviceType};
pub use error::{MinitensorError, Result};
pub use quantization::{QScheme, Quantizer};
pub use scalar::Scalar;
pub use schema::{NativeOutput, ReturnKind};
pub use tensor::{DataType, Shape, Tensor, TensorData, TensorId};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
