// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the BSD-style license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

/// Kind of device a tensor lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Cpu,
    Cuda,
}

/// Device placement of tensor storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Device {
    device_type: DeviceType,
    index: Option<usize>,
}

impl Device {
    pub fn new(device_type: DeviceType, index: Option<usize>) -> Self {
        Self { device_type, index }
    }

    #[inline(always)]
    pub fn cpu() -> Self {
        Self::new(DeviceType::Cpu, None)
    }

    pub fn cuda(index: Option<usize>) -> Self {
        Self::new(DeviceType::Cuda, index)
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[inline(always)]
    pub fn is_cpu(&self) -> bool {
        self.device_type == DeviceType::Cpu
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::cpu()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.device_type {
            DeviceType::Cpu => "cpu",
            DeviceType::Cuda => "cuda",
        };
        match self.index {
            Some(index) => write!(f, "{name}:{index}"),
            None => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_index() {
        assert_eq!(Device::cpu().to_string(), "cpu");
        assert_eq!(Device::cuda(Some(1)).to_string(), "cuda:1");
        assert!(!Device::cuda(None).is_cpu());
    }
}
