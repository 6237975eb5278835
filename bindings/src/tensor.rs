// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

include!("tensor/preamble.rs");
include!("tensor/pytensor/properties.rs");
include!("tensor/pytensor/operations.rs");
include!("tensor/pytensor/repr.rs");
include!("tensor/python/convert.rs");
