//! Rectangular-window sliding transform.
//!
//! Every line `i` carries the recursive single-frequency update
//!
//! ```text
//! window[i] <- (window[i] - oldest + newest) * e^(i·2π·f_i)
//! ```
//!
//! where `oldest` is the sample ingested `N` steps earlier. The window length
//! equals the number of lines `N`, so the transform keeps a circular buffer
//! of the last `N` raw samples.
//!
//! # Example
//! ```
//! use slidft::sliding::{DftSlidingWindow, SlidingWindowTransform};
//!
//! let mut dft = DftSlidingWindow::new(64).unwrap();
//! for t in 0..64 {
//!     dft.put_bin((0.1 * t as f64).sin()).unwrap();
//! }
//! assert_eq!(dft.magnitudes().len(), 64);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use super::{line_constants, reconstruct, SlidingWindowTransform};
use crate::band::LogBand;
use crate::config::WindowConfig;
use crate::error::SlideError;
use crate::num::{Complex64, ComplexRead, MutableComplex};
use crate::transfer::TransferFunction;

#[derive(Clone, Debug)]
pub struct DftSlidingWindow {
    band: LogBand,
    window: Vec<MutableComplex<f64>>,
    shift: Vec<Complex64>,
    rev_shift: Vec<Complex64>,
    samples: Vec<f64>,
    slide_pos: usize,
    staged: Vec<Complex64>,
}

impl DftSlidingWindow {
    /// `size` lines over the default band `0.001..0.2` of the sampling rate.
    pub fn new(size: usize) -> Result<Self, SlideError> {
        Self::from_config(&WindowConfig::new(size))
    }

    pub fn with_bounds(size: usize, lower: f64, upper: f64) -> Result<Self, SlideError> {
        Self::from_config(&WindowConfig::new(size).bounds(lower, upper))
    }

    pub fn from_config(config: &WindowConfig) -> Result<Self, SlideError> {
        let size = config.checked_size()?;
        let band = config.band()?;
        let shift = line_constants(&band, size, 1.0, 1.0)?;
        let rev_shift = line_constants(&band, size, -1.0, 1.0)?;
        debug_log!(
            "dft sliding window: {} lines over {}..{}",
            size,
            band.lower(),
            band.upper()
        );
        Ok(Self {
            band,
            window: vec![MutableComplex::zero(); size],
            shift,
            rev_shift,
            samples: vec![0.0; size],
            slide_pos: 0,
            staged: vec![Complex64::zero(); size],
        })
    }
}

impl SlidingWindowTransform for DftSlidingWindow {
    fn lines(&self) -> &[MutableComplex<f64>] {
        &self.window
    }

    fn band(&self) -> LogBand {
        self.band
    }

    fn put_bin(&mut self, sample: f64) -> Result<(), SlideError> {
        let insert = Complex64::from_cartesian(sample, 0.0)?;
        let remove = self.samples[self.slide_pos];
        for ((staged, line), shift) in self
            .staged
            .iter_mut()
            .zip(self.window.iter())
            .zip(self.shift.iter())
        {
            *staged = line.value().sub(remove)?.add(insert)?.mul(*shift)?;
        }
        for (line, staged) in self.window.iter_mut().zip(self.staged.iter()) {
            line.copy_from(staged)?;
        }
        self.samples[self.slide_pos] = sample;
        self.slide_pos = (self.slide_pos + 1) % self.samples.len();
        Ok(())
    }

    /// Undo each line's rotation by one step, weight, sum and scale by `1/N`.
    fn reconstructed_sample(
        &self,
        filter: Option<&dyn TransferFunction>,
    ) -> Result<f64, SlideError> {
        reconstruct(&self.window, Some(&self.rev_shift), filter)
    }
}
