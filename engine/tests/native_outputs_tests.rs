// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

use approx::assert_relative_eq;
use engine::{
    DataType, NativeOutput, QScheme, ReturnKind, Tensor,
    operations::{reduction, shape_ops, unique},
    quantization,
};
use proptest::prelude::*;

fn create_test_tensor_f64(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::from_vec_f64(data, shape).unwrap()
}

#[test]
fn test_std_mean_matches_reference_values() {
    let t = create_test_tensor_f64(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], vec![8]);

    let (std, mean) = reduction::std_mean(&t, false).unwrap();
    assert_relative_eq!(std.item().unwrap().to_f64(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(mean.item().unwrap().to_f64(), 5.0, epsilon = 1e-12);

    let (var, _) = reduction::var_mean(&t, true).unwrap();
    assert_relative_eq!(var.item().unwrap().to_f64(), 32.0 / 7.0, epsilon = 1e-12);
    assert_eq!(var.ndim(), 0);
}

#[test]
fn test_unbiased_variance_of_single_element_is_nan() {
    let t = create_test_tensor_f64(vec![3.0], vec![1]);
    let (var, mean) = reduction::var_mean(&t, true).unwrap();
    assert!(var.item().unwrap().to_f64().is_nan());
    assert_relative_eq!(mean.item().unwrap().to_f64(), 3.0);
}

#[test]
fn test_choose_qparams_round_trips_within_one_step() {
    let t = Tensor::from_vec_f32(vec![-1.0, -0.25, 0.0, 0.5, 2.0], vec![5]).unwrap();
    let (quantized, restored, scale, zero_point) =
        quantization::choose_qparams(&t, DataType::QUInt8).unwrap();

    assert_eq!(quantized.qscheme().unwrap(), QScheme::PerTensorAffine);
    assert_relative_eq!(scale, 3.0 / 255.0, epsilon = 1e-12);
    assert_eq!(quantized.q_zero_point().unwrap(), zero_point);
    for (orig, back) in t.to_vec_f64().iter().zip(restored.to_vec_f64()) {
        assert!((orig - back).abs() <= scale, "{orig} vs {back}");
    }
}

#[test]
fn test_quantize_per_tensor_saturates_non_finite_input() {
    let t = create_test_tensor_f64(
        vec![f64::INFINITY, f64::NEG_INFINITY, 1e300, f64::NAN, 1.0],
        vec![5],
    );
    let q = quantization::quantize_per_tensor(&t, 0.5, 10, DataType::QUInt8).unwrap();
    assert_eq!(
        q.data().as_quint8_slice(),
        Some(&[255u8, 0, 255, 10, 12][..])
    );

    let q = t.quantize_per_tensor(0.1, 0, DataType::QInt8).unwrap();
    assert_eq!(q.data().as_qint8_slice(), Some(&[127i8, -128, 127, 0, 10][..]));
}

#[test]
fn test_every_producer_matches_its_declared_kind() {
    let t = create_test_tensor_f64(vec![1.0, 1.0, 2.0, 3.0], vec![2, 2]);
    let cases: Vec<(&str, NativeOutput)> = vec![
        ("(Tensor values, Tensor indices)", t.max_with_indices(0, false).unwrap().into()),
        ("(Tensor, Tensor)", t.std_mean(true).unwrap().into()),
        ("(float, float)", t.aminmax().unwrap().into()),
        ("Tensor[]", t.split(1, 0).unwrap().into()),
        ("(Tensor, Tensor, Tensor)", t.unique_consecutive().unwrap().into()),
        (
            "(Tensor, Tensor, float, int)",
            quantization::choose_qparams(&t, DataType::QInt8).unwrap().into(),
        ),
        ("Scalar", t.unbind(0).unwrap()[0].unbind(0).unwrap()[1].item().unwrap().into()),
        ("bool", t.is_floating_point().into()),
        ("ScalarType", t.dtype().into()),
    ];

    for (clause, output) in cases {
        let declared = ReturnKind::parse(clause).unwrap();
        assert!(output.expect_kind(declared).is_ok(), "{clause}");
    }
}

proptest! {
    #[test]
    fn prop_split_pieces_cover_input_in_order(
        values in prop::collection::vec(-1000i64..1000, 1..40),
        split_size in 1usize..8,
    ) {
        let n = values.len();
        let t = Tensor::from_vec_i64(values.clone(), vec![n]).unwrap();
        let pieces = shape_ops::split(&t, split_size, 0).unwrap();

        prop_assert_eq!(pieces.len(), n.div_ceil(split_size));
        let rejoined: Vec<i64> = pieces
            .iter()
            .flat_map(|p| p.data().as_i64_slice().unwrap().to_vec())
            .collect();
        prop_assert_eq!(rejoined, values);
    }

    #[test]
    fn prop_unique_consecutive_counts_sum_to_numel(
        values in prop::collection::vec(
            prop_oneof![0i64..4, any::<i64>(), (i64::MAX - 3)..=i64::MAX],
            0..50,
        ),
    ) {
        let n = values.len();
        let t = Tensor::from_vec_i64(values.clone(), vec![n]).unwrap();
        let (uniq, inverse, counts) = unique::unique_consecutive(&t).unwrap();

        let counts = counts.data().as_i64_slice().unwrap().to_vec();
        prop_assert_eq!(counts.iter().sum::<i64>() as usize, n);
        let runs = 1 + values.windows(2).filter(|w| w[0] != w[1]).count();
        prop_assert_eq!(counts.len(), if n == 0 { 0 } else { runs });

        let uniq = uniq.data().as_i64_slice().unwrap().to_vec();
        for (i, &run) in inverse.data().as_i64_slice().unwrap().iter().enumerate() {
            prop_assert_eq!(uniq[run as usize], values[i]);
        }
    }

    #[test]
    fn prop_max_indices_point_at_max_values(
        values in prop::collection::vec(
            prop_oneof![any::<i64>(), (i64::MAX - 3)..=i64::MAX],
            1..30,
        ),
    ) {
        let n = values.len();
        let t = Tensor::from_vec_i64(values.clone(), vec![n]).unwrap();
        let (max, idx) = reduction::max_with_indices(&t, 0, false).unwrap();
        let idx = idx.data().as_i64_slice().unwrap()[0] as usize;
        let max = max.data().as_i64_slice().unwrap()[0];
        prop_assert_eq!(values[idx], max);
        prop_assert!(values.iter().all(|&v| v <= max));
    }

    #[test]
    fn prop_min_of_floats_matches_fold(
        values in prop::collection::vec(-100.0f64..100.0, 1..30),
    ) {
        let n = values.len();
        let t = Tensor::from_vec_f64(values.clone(), vec![n]).unwrap();
        let (min, idx) = reduction::min_with_indices(&t, 0, false).unwrap();
        let idx = idx.data().as_i64_slice().unwrap()[0] as usize;
        let expected = values.iter().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(min.item().unwrap().to_f64(), expected);
        prop_assert_eq!(values[idx], expected);
    }
}
