// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod reduction;
pub mod shape_ops;
pub mod unique;

// Re-export common operations
pub use reduction::*;
pub use shape_ops::*;
pub use unique::*;
