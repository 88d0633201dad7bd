//! Spike time dependent plasticity kernels reconstructed from the learning
//! parameters a run logs in its header.
//!
//! Two families are supported:
//!
//! - hard and soft exponential STDP, where a presynaptic signal arriving `t` ms
//!   after the postsynaptic spike depresses the weight by
//!   `inhibitory_amplitude * exp(-t / inhibitory_period)` and one arriving before it
//!   potentiates the weight by `excitation_amplitude * exp(t / excitation_period)`
//!
//! - alpha STDP, where the learning window is shaped by the alpha function
//!   `t * exp(1 - t)` lifted by a negative baseline and shifted by a zero offset so
//!   the window changes sign exactly at the spike
//!
//! ```rust
//! use spiking_neural_network_logs::stdp::{heaviside, zero_offset};
//!
//! assert_eq!(heaviside(-1.), 0.);
//! assert_eq!(heaviside(0.), 0.5);
//! assert_eq!(heaviside(1.), 1.);
//!
//! assert!(zero_offset(20., -0.5) > zero_offset(10., -0.5));
//! ```

use std::{
    f64::consts::E,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use ndarray::Array1;
use tracing::debug;
use crate::{
    error::LearningError,
    extract::NetworkMetadata,
    schema::{fields, LogSchema, MetadataSection},
};


/// Learning rule a network was simulated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningType {
    StdpSoft,
    StdpHard,
    StdpAlpha,
}

impl FromStr for LearningType {
    type Err = LearningError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "stdp_soft" => Ok(LearningType::StdpSoft),
            "stdp_hard" => Ok(LearningType::StdpHard),
            "stdp_alpha" => Ok(LearningType::StdpAlpha),
            other => Err(LearningError::UnknownLearningType(String::from(other))),
        }
    }
}

impl Display for LearningType {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let name = match self {
            LearningType::StdpSoft => "stdp_soft",
            LearningType::StdpHard => "stdp_hard",
            LearningType::StdpAlpha => "stdp_alpha",
        };

        write!(f, "{}", name)
    }
}

impl LearningType {
    /// Reads `learning_type` from the learning section of the metadata
    pub fn from_metadata(metadata: &NetworkMetadata) -> Result<Self, LearningError> {
        learning_field(metadata, fields::LEARNING_TYPE)?.parse()
    }
}

/// Parameters of the kernel a network learned with
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum STDPKernelParams {
    /// Exponential kernel shared by hard and soft STDP
    HardOrSoft {
        inhib_amplitude: f64,
        inhib_period: f64,
        excite_amplitude: f64,
        excite_period: f64,
    },
    /// Alpha function kernel
    Alpha {
        baseline: f64,
        time_constant: f64,
        learning_rate: f64,
    },
}

fn learning_field<'a>(metadata: &'a NetworkMetadata, field: &str) -> Result<&'a str, LearningError> {
    let learning = metadata.section(MetadataSection::Learning)
        .ok_or(LearningError::MissingSection(MetadataSection::Learning))?;

    learning.get(field)
        .map(|value| value.as_str())
        .ok_or_else(|| LearningError::MissingField { field: String::from(field) })
}

fn learning_number(
    metadata: &NetworkMetadata,
    field: &str,
    schema: Option<&LogSchema>,
) -> Result<f64, LearningError> {
    let value = learning_field(metadata, field)?;
    let stripped = match schema {
        Some(schema) => schema.strip_unit(value),
        None => value.trim(),
    };

    match stripped.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(
            LearningError::NumericParseFailure {
                field: String::from(field),
                value: String::from(value),
            }
        ),
    }
}

impl STDPKernelParams {
    /// Extracts kernel parameters from the learning section, `schema` supplies
    /// the unit suffixes removed from the period fields
    pub fn from_metadata(metadata: &NetworkMetadata, schema: &LogSchema) -> Result<Self, LearningError> {
        let learning_type = LearningType::from_metadata(metadata)?;

        debug!(%learning_type, "reading learning parameters");

        match learning_type {
            LearningType::StdpSoft | LearningType::StdpHard => Ok(
                STDPKernelParams::HardOrSoft {
                    inhib_amplitude: learning_number(metadata, fields::INHIBITORY_AMPLITUDE, None)?,
                    inhib_period: learning_number(metadata, fields::INHIBITORY_PERIOD, Some(schema))?,
                    excite_amplitude: learning_number(metadata, fields::EXCITATION_AMPLITUDE, None)?,
                    excite_period: learning_number(metadata, fields::EXCITATION_PERIOD, Some(schema))?,
                }
            ),
            LearningType::StdpAlpha => Ok(
                STDPKernelParams::Alpha {
                    baseline: learning_number(metadata, fields::BASELINE, None)?,
                    time_constant: learning_number(metadata, fields::TIME_CONSTANT, Some(schema))?,
                    learning_rate: learning_number(metadata, fields::LEARNING_RATE, None)?,
                }
            ),
        }
    }
}

/// Step function that is `0.5` at `0`
pub fn heaviside(x: f64) -> f64 {
    if x < 0. {
        0.
    } else if x == 0. {
        0.5
    } else {
        1.
    }
}

/// Exponential STDP kernel at offset `t` from the postsynaptic spike, depressing
/// for `t > 0` and potentiating for `t <= 0`
pub fn hard_soft_kernel(
    inhib_amplitude: f64,
    inhib_period: f64,
    excite_amplitude: f64,
    excite_period: f64,
    t: f64,
) -> f64 {
    if t > 0. {
        -inhib_amplitude * (-t / inhib_period).exp()
    } else {
        excite_amplitude * (t / excite_period).exp()
    }
}

/// Offset that moves the zero crossing of the baseline lifted alpha function to
/// the spike time, the real root of a depressed cubic solved in closed form
///
/// Defined for `baseline < 0` and `time_constant > 0` where the result is positive
/// and scales linearly with `time_constant`
pub fn zero_offset(time_constant: f64, baseline: f64) -> f64 {
    let gamma = -baseline * (-1_f64).exp() / (1. - baseline);
    let r = (27. * gamma - 7.) / 54.;
    let q: f64 = 2. / 9.;
    // q^3 + r^2 > 0 so only one real root exists
    let lambda = (q.powi(3) + r.powi(2)).sqrt();

    // cbrt keeps the sign of negative arguments
    time_constant * ((r + lambda).cbrt() + (r - lambda).cbrt() + 1. / 3.)
}

/// Alpha STDP kernel with its zero offset computed once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaKernel {
    pub baseline: f64,
    pub time_constant: f64,
    pub learning_rate: f64,
    zero_offset: f64,
}

impl AlphaKernel {
    pub fn new(baseline: f64, time_constant: f64, learning_rate: f64) -> Result<Self, LearningError> {
        // NaN fails both comparisons and is rejected
        if !(baseline < 0. && time_constant > 0.) {
            return Err(LearningError::UnsupportedAlphaParameters { baseline, time_constant });
        }

        Ok(
            AlphaKernel {
                baseline,
                time_constant,
                learning_rate,
                zero_offset: zero_offset(time_constant, baseline),
            }
        )
    }

    pub fn zero_offset(&self) -> f64 {
        self.zero_offset
    }

    /// Kernel value at time `t` since the start of a learning window of length
    /// `time_window`, gated off once `weight` reaches `max_weight`
    pub fn value(&self, t: f64, time_window: f64, weight: f64, max_weight: f64) -> f64 {
        let time_factor = (self.zero_offset - (t - time_window)) / self.time_constant;
        let alpha = E * (1. - self.baseline) * time_factor * (-time_factor).exp() + self.baseline;

        self.learning_rate * heaviside(max_weight - weight) * self.baseline.max(alpha)
    }

    /// Evaluates [`AlphaKernel::value`] over an array of times
    pub fn curve(&self, times: &Array1<f64>, time_window: f64, weight: f64, max_weight: f64) -> Array1<f64> {
        times.mapv(|t| self.value(t, time_window, weight, max_weight))
    }
}

/// Weight state the alpha kernel is evaluated at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningWindow {
    /// Length of the learning time window (ms)
    pub time_window: f64,
    /// Current connection weight
    pub weight: f64,
    /// Weight at which learning stops
    pub max_weight: f64,
}

/// Kernel ready to be evaluated over a time axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum STDPKernel {
    HardOrSoft {
        inhib_amplitude: f64,
        inhib_period: f64,
        excite_amplitude: f64,
        excite_period: f64,
    },
    Alpha(AlphaKernel),
}

impl STDPKernel {
    pub fn new(params: STDPKernelParams) -> Result<Self, LearningError> {
        match params {
            STDPKernelParams::HardOrSoft { inhib_amplitude, inhib_period, excite_amplitude, excite_period } => Ok(
                STDPKernel::HardOrSoft { inhib_amplitude, inhib_period, excite_amplitude, excite_period }
            ),
            STDPKernelParams::Alpha { baseline, time_constant, learning_rate } => Ok(
                STDPKernel::Alpha(AlphaKernel::new(baseline, time_constant, learning_rate)?)
            ),
        }
    }

    /// Builds the kernel straight from network metadata
    pub fn from_metadata(metadata: &NetworkMetadata, schema: &LogSchema) -> Result<Self, LearningError> {
        STDPKernel::new(STDPKernelParams::from_metadata(metadata, schema)?)
    }

    /// Evaluates the kernel at every time, `window` is only used by the alpha kernel
    pub fn curve(&self, times: &Array1<f64>, window: &LearningWindow) -> Array1<f64> {
        match self {
            STDPKernel::HardOrSoft { inhib_amplitude, inhib_period, excite_amplitude, excite_period } => {
                times.mapv(|t| hard_soft_kernel(*inhib_amplitude, *inhib_period, *excite_amplitude, *excite_period, t))
            },
            STDPKernel::Alpha(kernel) => {
                kernel.curve(times, window.time_window, window.weight, window.max_weight)
            },
        }
    }
}

/// Evenly spaced times in `[start, end)`, a negative `step` counts down from
/// `start` and an axis with `start == end` is empty
pub fn time_axis(start: f64, end: f64, step: f64) -> Result<Array1<f64>, LearningError> {
    let finite = start.is_finite() && end.is_finite() && step.is_finite();

    if !finite || step == 0. || (end - start) / step < 0. {
        return Err(LearningError::InvalidTimeAxis { start, end, step });
    }

    Ok(Array1::range(start, end, step))
}
