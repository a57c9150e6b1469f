//! Closed-form table families.
//!
//! Every generator returns `length` samples of a continuous function
//! evaluated at the integer indices `0..length`. Results are normalized
//! floats, conventionally within `[0, 1]`, ready for the quantizer.


use std::f64::consts::PI;

use clap::ValueEnum;

/// Discretization used to turn an angular frequency into a one-pole
/// low-pass coefficient.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoeffMethod {
    /// Exact pole matching.
    Z,
    /// Backward finite difference.
    Diff,
    /// Impulse invariant transient response.
    Trans,
    /// Topology-preserving transform.
    Tpt,
}

impl CoeffMethod {
    pub const ALL: [CoeffMethod; 4] = [
        CoeffMethod::Z,
        CoeffMethod::Diff,
        CoeffMethod::Trans,
        CoeffMethod::Tpt,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            CoeffMethod::Z => "z",
            CoeffMethod::Diff => "diff",
            CoeffMethod::Trans => "trans",
            CoeffMethod::Tpt => "tpt",
        }
    }

    /// Coefficient for a single normalized angular frequency.
    ///
    /// The four formulas are not interchangeable at finite precision, so the
    /// operation order of each one is kept as written.
    pub fn coefficient(self, omega: f64) -> f64 {
        match self {
            CoeffMethod::Z => {
                let b = 1.0 - omega.cos();
                -b + (b * b + 2.0 * b).sqrt()
            }
            CoeffMethod::Diff => omega / (1.0 + omega),
            CoeffMethod::Trans => 1.0 - (-omega).exp(),
            CoeffMethod::Tpt => {
                let t = (omega / 2.0).tan();
                t / (1.0 + t)
            }
        }
    }
}

/// A table family together with all of its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Family {
    Sine,
    /// Geometric ramp from `1 / ratio` up to `1.0`.
    Exp { ratio: f64 },
    /// Pitch curve equal to `reference` at the table centre, spanning
    /// `octaves` octaves over the whole table.
    Voct { reference: f64, octaves: f64 },
    /// One-pole coefficients over an exponential sweep from `fmin` to `fmax`.
    Coeff {
        method: CoeffMethod,
        fmin: f64,
        fmax: f64,
    },
}

impl Family {
    /// Command name of the family, e.g. `voct`.
    pub fn tag(&self) -> &'static str {
        match self {
            Family::Sine => "sine",
            Family::Exp { .. } => "exp",
            Family::Voct { .. } => "voct",
            Family::Coeff { .. } => "coeff",
        }
    }

    /// Only the sine table straddles the half-range point, so it is the only
    /// family that can be emitted as a signed type.
    pub fn supports_signed(&self) -> bool {
        matches!(self, Family::Sine)
    }

    /// Name prefix of the emitted table.
    pub fn prefix(&self) -> String {
        match self {
            Family::Sine | Family::Voct { .. } => self.tag().to_string(),
            Family::Exp { ratio } => format!("exp{}", ratio.round_ties_even() as i64),
            Family::Coeff { method, .. } => format!("coeff_{}", method.tag()),
        }
    }

    pub fn generate(&self, length: usize) -> Vec<f64> {
        match *self {
            Family::Sine => sine(length),
            Family::Exp { ratio } => exponential(1.0 / ratio, 1.0, length),
            Family::Voct { reference, octaves } => volts_per_octave(reference, octaves, length),
            Family::Coeff { method, fmin, fmax } => {
                coefficients(method, &exponential(fmin, fmax, length))
            }
        }
    }
}

/// One period of a sine wave, offset and scaled into `[0, 1]`.
pub fn sine(length: usize) -> Vec<f64> {
    (0..length)
        .map(|n| 0.5 * (2.0 * PI * n as f64 / length as f64).sin() + 0.5)
        .collect()
}

/// Geometric ramp from `e0` to `e1`, both endpoints included.
pub fn exponential(e0: f64, e1: f64, length: usize) -> Vec<f64> {
    let step = (e1 / e0).powf(1.0 / (length as f64 - 1.0));
    (0..length).map(|n| e0 * step.powf(n as f64)).collect()
}

pub fn volts_per_octave(reference: f64, octaves: f64, length: usize) -> Vec<f64> {
    let div = length as f64 / octaves;
    let center = (length >> 1) as f64;
    (0..length)
        .map(|n| reference * 2.0_f64.powf((n as f64 - center) / div))
        .collect()
}

/// Maps a table of normalized angular frequencies to filter coefficients.
pub fn coefficients(method: CoeffMethod, omega: &[f64]) -> Vec<f64> {
    omega.iter().map(|&w| method.coefficient(w)).collect()
}
