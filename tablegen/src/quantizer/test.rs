use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::generator;

#[test]
fn unsigned_endpoints() {
    for dtype in [DataType::U8, DataType::U16, DataType::U32] {
        assert_eq!(quantize_sample(0.0, dtype), 0);
        assert_eq!(quantize_sample(1.0, dtype), (1i64 << dtype.bits()) - 1);
    }
}

#[test]
fn signed_endpoints() {
    assert_eq!(quantize_sample(0.0, DataType::S8), -128);
    assert_eq!(quantize_sample(1.0, DataType::S8), 127);
    assert_eq!(quantize_sample(0.0, DataType::S16), i16::MIN as i64);
    assert_eq!(quantize_sample(1.0, DataType::S16), i16::MAX as i64);
    assert_eq!(quantize_sample(0.0, DataType::S32), i32::MIN as i64);
    assert_eq!(quantize_sample(1.0, DataType::S32), i32::MAX as i64);
}

#[test]
fn ties_round_to_even() {
    // 0.5 * 255 = 127.5, 0.5 * 65535 = 32767.5
    assert_eq!(quantize_sample(0.5, DataType::U8), 128);
    assert_eq!(quantize_sample(0.5, DataType::U16), 32768);
    assert_eq!(quantize_sample(0.5, DataType::S8), 0);
}

#[test]
fn sine_of_eight_as_u8() {
    let values = quantize(&generator::sine(8), DataType::U8);
    assert_eq!(values, vec![128, 218, 255, 218, 128, 37, 0, 37]);
}

#[test]
fn sine_of_eight_as_s8() {
    let values = quantize(&generator::sine(8), DataType::S8);
    assert_eq!(values, vec![0, 90, 127, 90, 0, -91, -128, -91]);
}

#[test]
fn out_of_range_values_are_kept() {
    let values = quantize(&[-0.5, 0.0, 1.0, 1.5], DataType::U8);

    assert_eq!(values, vec![-128, 0, 255, 382]);
    assert_eq!(out_of_range(&values, DataType::U8), 2);
}

proptest! {
    #[test]
    fn prop_signed_centre_is_zero(value in 0.49999f64..0.50001) {
        for dtype in [DataType::S8, DataType::S16] {
            prop_assert!(quantize_sample(value, dtype).abs() <= 1);
        }
    }

    #[test]
    fn prop_normalized_values_fit(value in 0.0f64..=1.0) {
        for dtype in DataType::ALL {
            let quantized = quantize_sample(value, dtype);
            prop_assert!(quantized >= dtype.min_value() && quantized <= dtype.max_value());
        }
    }

    #[test]
    fn prop_signed_is_shifted_unsigned(value in 0.0f64..=1.0) {
        prop_assert_eq!(
            quantize_sample(value, DataType::S16),
            quantize_sample(value, DataType::U16) - 32768
        );
    }
}
