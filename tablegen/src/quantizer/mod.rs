//! Fixed-point quantization of normalized tables.

#[cfg(test)]
mod test;

use crate::DataType;

/// Scales one normalized sample onto the integer range of `dtype`.
///
/// `0.0` maps to the bottom of the range and `1.0` to the top. Ties round to
/// even. Nothing is clamped, so samples outside `[0, 1]` land outside the
/// range of `dtype`.
pub fn quantize_sample(value: f64, dtype: DataType) -> i64 {
    (value * dtype.full_scale() as f64).round_ties_even() as i64 - dtype.offset()
}

pub fn quantize(table: &[f64], dtype: DataType) -> Vec<i64> {
    table
        .iter()
        .map(|&value| quantize_sample(value, dtype))
        .collect()
}

/// Number of quantized values that do not fit in `dtype`.
pub fn out_of_range(values: &[i64], dtype: DataType) -> usize {
    let range = dtype.min_value()..=dtype.max_value();
    values.iter().filter(|v| !range.contains(v)).count()
}
