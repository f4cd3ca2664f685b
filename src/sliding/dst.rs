//! Leaky-integrator sliding transform.
//!
//! Each line is a first-order resonator with complex pole
//! `shift_i = μ0 · e^(-i·2π·f_i)`:
//!
//! ```text
//! window[i] <- window[i] * shift_i + x * (1 - shift_i)
//! ```
//!
//! The `(1 - shift_i)` factor normalises the DC gain of every line to one, so
//! a constant input settles at that constant in every line. No sample history
//! is kept; the effective window decays geometrically with `μ0`.

use alloc::vec;
use alloc::vec::Vec;

use super::{line_constants, reconstruct, SlidingWindowTransform};
use crate::band::LogBand;
use crate::config::WindowConfig;
use crate::error::SlideError;
use crate::num::{Complex64, ComplexRead, MutableComplex};
use crate::transfer::TransferFunction;

#[derive(Clone, Debug)]
pub struct DstSlidingWindow {
    band: LogBand,
    mu0: f64,
    window: Vec<MutableComplex<f64>>,
    shift: Vec<Complex64>,
    staged: Vec<Complex64>,
}

impl DstSlidingWindow {
    /// `size` lines over the default band with the default decay
    /// [`DEFAULT_MU0`](crate::config::DEFAULT_MU0).
    pub fn new(size: usize) -> Result<Self, SlideError> {
        Self::from_config(&WindowConfig::new(size))
    }

    pub fn with_bounds(size: usize, lower: f64, upper: f64) -> Result<Self, SlideError> {
        Self::from_config(&WindowConfig::new(size).bounds(lower, upper))
    }

    pub fn with_decay(
        mu0: f64,
        size: usize,
        lower: f64,
        upper: f64,
    ) -> Result<Self, SlideError> {
        Self::from_config(&WindowConfig::new(size).bounds(lower, upper).decay(mu0))
    }

    pub fn from_config(config: &WindowConfig) -> Result<Self, SlideError> {
        let size = config.checked_size()?;
        let mu0 = config.checked_mu0()?;
        let band = config.band()?;
        let shift = line_constants(&band, size, -1.0, mu0)?;
        debug_log!(
            "dst sliding window: {} lines over {}..{}, mu0 = {}",
            size,
            band.lower(),
            band.upper(),
            mu0
        );
        Ok(Self {
            band,
            mu0,
            window: vec![MutableComplex::zero(); size],
            shift,
            staged: vec![Complex64::zero(); size],
        })
    }

    /// Decay factor applied to every line per step.
    pub fn mu0(&self) -> f64 {
        self.mu0
    }
}

impl SlidingWindowTransform for DstSlidingWindow {
    fn lines(&self) -> &[MutableComplex<f64>] {
        &self.window
    }

    fn band(&self) -> LogBand {
        self.band
    }

    fn put_bin(&mut self, sample: f64) -> Result<(), SlideError> {
        let insert = Complex64::from_cartesian(sample, 0.0)?;
        for ((staged, line), shift) in self
            .staged
            .iter_mut()
            .zip(self.window.iter())
            .zip(self.shift.iter())
        {
            *staged = line
                .value()
                .mul(*shift)?
                .add(insert)?
                .sub(shift.mul(insert)?)?;
        }
        for (line, staged) in self.window.iter_mut().zip(self.staged.iter()) {
            line.copy_from(staged)?;
        }
        Ok(())
    }

    fn reconstructed_sample(
        &self,
        filter: Option<&dyn TransferFunction>,
    ) -> Result<f64, SlideError> {
        reconstruct(&self.window, None, filter)
    }
}
