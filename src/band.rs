//! Log-uniform frequency axis shared by both sliding-window variants.
//!
//! Frequencies are expressed as fractions of the sampling rate. Line `i` of
//! an `n`-line transform sits at
//!
//! ```text
//! f_i = lower * exp(i / n * ln(upper / lower))
//! ```
//!
//! so every line covers the same interval in octaves (equal relative
//! bandwidth) rather than the same interval in Hz.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::error::SlideError;

/// Default lower band limit as a fraction of the sampling rate.
pub const DEFAULT_LOWER_BOUND: f64 = 0.001;

/// Default upper band limit as a fraction of the sampling rate.
pub const DEFAULT_UPPER_BOUND: f64 = 0.2;

const CENTS_PER_OCTAVE: f64 = 1200.0;

/// Band limits of a transform, as fractions of the sampling rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogBand {
    lower: f64,
    upper: f64,
}

impl Default for LogBand {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_BOUND,
            upper: DEFAULT_UPPER_BOUND,
        }
    }
}

impl LogBand {
    /// Both limits must be finite, strictly positive and ascending.
    pub fn new(lower: f64, upper: f64) -> Result<Self, SlideError> {
        let valid = |x: f64| x.is_finite() && x > 0.0;
        if !valid(lower) || !valid(upper) || lower >= upper {
            return Err(SlideError::InvalidBounds);
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Band width in nepers, `ln(upper / lower)`.
    pub fn width_natural(&self) -> f64 {
        libm::log(self.upper / self.lower)
    }

    pub fn width_octaves(&self) -> f64 {
        self.width_natural() / core::f64::consts::LN_2
    }

    /// Characteristic frequency fraction of line `index` out of `size`.
    pub fn fraction(&self, index: usize, size: usize) -> f64 {
        self.lower * libm::exp(index as f64 / size as f64 * self.width_natural())
    }

    /// Characteristic frequency fractions of all `size` lines.
    pub fn fractions(&self, size: usize) -> Vec<f64> {
        (0..size).map(|i| self.fraction(i, size)).collect()
    }

    /// Frequency fractions spanned by line `index`, from its own
    /// characteristic frequency up to the next line's.
    pub fn line_range(&self, index: usize, size: usize) -> Range<f64> {
        self.fraction(index, size)..self.fraction(index + 1, size)
    }

    /// Diagnostic summary of this band for an `size`-line transform run at
    /// `sampling_frequency` Hz.
    pub fn info(&self, size: usize, sampling_frequency: f64) -> BandInfo {
        let octaves = self.width_octaves();
        let cents = octaves * CENTS_PER_OCTAVE;
        BandInfo {
            sampling_frequency,
            lines: size,
            lower_hz: self.lower * sampling_frequency,
            upper_hz: self.upper * sampling_frequency,
            octaves,
            cents,
            cents_per_line: cents / size as f64,
        }
    }
}

/// Human-readable description of a band, see [`LogBand::info`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandInfo {
    pub sampling_frequency: f64,
    pub lines: usize,
    pub lower_hz: f64,
    pub upper_hz: f64,
    pub octaves: f64,
    pub cents: f64,
    pub cents_per_line: f64,
}

impl fmt::Display for BandInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sampling frequency [Hz]: {}", self.sampling_frequency)?;
        writeln!(f, "spectral lines [#]: {}", self.lines)?;
        writeln!(f, "lower frequency limit [Hz]: {}", self.lower_hz)?;
        writeln!(f, "upper frequency limit [Hz]: {}", self.upper_hz)?;
        writeln!(f, "band width [octaves]: {}", self.octaves)?;
        writeln!(f, "band width [cent]: {}", self.cents)?;
        write!(
            f,
            "resolution [cent per spectral line]: {}",
            self.cents_per_line
        )
    }
}
