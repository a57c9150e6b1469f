//! Sanity summary of a generated table, logged after the header is written.

use tracing::{info, warn};

use crate::{GeneratedTable, quantizer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub length: usize,
    pub first: f64,
    pub center: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    pub min_value: i64,
    pub max_value: i64,
    /// Quantized values that do not fit the table's data type.
    pub out_of_range: usize,
}

impl Summary {
    /// `None` for an empty table.
    pub fn of(table: &GeneratedTable) -> Option<Self> {
        let samples = &table.samples;
        let first = *samples.first()?;
        let last = *samples.last()?;

        Some(Self {
            length: samples.len(),
            first,
            center: samples[samples.len() >> 1],
            last,
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            min_value: table.values.iter().copied().min()?,
            max_value: table.values.iter().copied().max()?,
            out_of_range: quantizer::out_of_range(&table.values, table.dtype),
        })
    }
}

pub fn log_summary(table: &GeneratedTable) {
    let Some(summary) = Summary::of(table) else {
        warn!(name = %table.name, "table is empty");
        return;
    };

    info!(
        name = %table.name,
        length = summary.length,
        first = summary.first,
        center = summary.center,
        last = summary.last,
        "float samples"
    );
    info!(min = summary.min, max = summary.max, "float range");
    info!(
        min = summary.min_value,
        max = summary.max_value,
        dtype = %table.dtype,
        "quantized range"
    );

    if summary.out_of_range > 0 {
        warn!(
            count = summary.out_of_range,
            lower = table.dtype.min_value(),
            upper = table.dtype.max_value(),
            "quantized values outside the range of {}",
            table.dtype.c_type()
        );
    }
}
