// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

impl std::fmt::Debug for Tensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype)
            .field("device", &self.device)
            .field("requires_grad", &self.requires_grad)
            .field("tensor_id", &self.tensor_id)
            .field("quantizer", &self.quantizer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_creation() {
        let shape = Shape::new(vec![2, 3]);
        let data = Arc::new(TensorData::zeros(shape.numel(), DataType::Float32));
        let tensor = Tensor::new(data, shape.clone(), DataType::Float32, Device::cpu(), false);

        assert_eq!(tensor.shape(), &shape);
        assert_eq!(tensor.dtype(), DataType::Float32);
        assert_eq!(tensor.device(), Device::cpu());
        assert!(!tensor.requires_grad());
        assert_eq!(tensor.ndim(), 2);
        assert_eq!(tensor.numel(), 6);
    }

    #[test]
    fn test_from_vec_checks_shape() {
        assert!(Tensor::from_vec_f32(vec![1.0, 2.0, 3.0], vec![2, 2]).is_err());
        let t = Tensor::from_vec_bool(vec![true, false], vec![2]).unwrap();
        assert_eq!(t.dtype(), DataType::Bool);
    }

    #[test]
    fn test_tensor_zeros_and_ones() {
        let shape = Shape::new(vec![2, 3]);

        let zeros = Tensor::zeros(shape.clone(), DataType::Float32, Device::cpu(), false);
        assert_eq!(zeros.shape(), &shape);
        assert_eq!(zeros.to_vec_f64(), vec![0.0; 6]);

        let ones = Tensor::ones(shape.clone(), DataType::Int64, Device::cpu(), true);
        assert_eq!(ones.dtype(), DataType::Int64);
        assert!(ones.requires_grad());
    }

    #[test]
    fn test_clone_shares_storage() {
        let a = Tensor::from_vec_f64(vec![1.0, 2.0], vec![2]).unwrap();
        assert_eq!(a.storage_ref_count(), 1);

        let b = a.clone();
        assert!(a.shares_storage(&b));
        assert_eq!(a.storage_ptr(), b.storage_ptr());
        assert_eq!(a.storage_ref_count(), 2);

        drop(b);
        assert_eq!(a.storage_ref_count(), 1);

        let c = Tensor::from_vec_f64(vec![1.0, 2.0], vec![2]).unwrap();
        assert!(!a.shares_storage(&c));
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_item_by_dtype() {
        assert_eq!(
            Tensor::from_vec_i64(vec![7], vec![1]).unwrap().item().unwrap(),
            Scalar::Int(7)
        );
        assert_eq!(
            Tensor::scalar_tensor(2.5, DataType::Float32).item().unwrap(),
            Scalar::Float(2.5)
        );
        assert_eq!(
            Tensor::from_vec_bool(vec![true], vec![]).unwrap().item().unwrap(),
            Scalar::Bool(true)
        );
        assert!(
            Tensor::from_vec_f32(vec![1.0, 2.0], vec![2])
                .unwrap()
                .item()
                .is_err()
        );
    }

    #[test]
    fn test_quantized_metadata() {
        let t = Tensor::from_vec_f32(vec![0.0, 1.0], vec![2]).unwrap();
        assert!(t.qscheme().is_err());

        let q = t.quantize_per_tensor(0.25, 3, DataType::QInt8).unwrap();
        assert!(q.is_quantized());
        assert_eq!(q.qscheme().unwrap(), QScheme::PerTensorAffine);
        assert_eq!(q.q_scale().unwrap(), 0.25);
        assert_eq!(q.q_zero_point().unwrap(), 3);

        let single = Tensor::scalar_tensor(1.0, DataType::Float32)
            .quantize_per_tensor(0.25, 3, DataType::QInt8)
            .unwrap();
        assert_eq!(single.item().unwrap(), Scalar::Float(1.0));
    }
}
