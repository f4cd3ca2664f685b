//! Sliding-window spectral transforms over a log-spaced frequency axis.
//!
//! Two independent realisations share the [`SlidingWindowTransform`]
//! contract:
//!
//! - [`dft::DftSlidingWindow`]: rectangular window. Each step removes the
//!   oldest of the last `N` samples, adds the newest and rotates every line by
//!   its per-sample phase increment.
//! - [`dst::DstSlidingWindow`]: leaky integrator. Each line is a one-pole
//!   recurrence with complex pole of magnitude `μ0 < 1`, so older samples fade
//!   out exponentially instead of leaving a finite window. "DST" names this
//!   recurrence; it is not a discrete sine transform.
//!
//! Both cost O(N) per ingested sample for `N` spectral lines.

use alloc::vec::Vec;

use crate::band::LogBand;
use crate::error::SlideError;
use crate::num::{Complex64, ComplexRead, MutableComplex};
use crate::transfer::TransferFunction;

pub mod dft;
pub mod dst;

pub use dft::DftSlidingWindow;
pub use dst::DstSlidingWindow;

pub trait SlidingWindowTransform {
    /// Current value of every spectral line, in index order.
    fn lines(&self) -> &[MutableComplex<f64>];

    /// Band limits the lines are spread over.
    fn band(&self) -> LogBand;

    /// Ingest the next sample and advance the window by one step.
    ///
    /// A non-finite sample, or any update that would overflow a line, is
    /// rejected before the transform changes.
    fn put_bin(&mut self, sample: f64) -> Result<(), SlideError>;

    /// Normalised sum of the spectrum, optionally weighted by `filter`.
    ///
    /// `filter` must have exactly [`size`](Self::size) entries.
    fn reconstructed_sample(
        &self,
        filter: Option<&dyn TransferFunction>,
    ) -> Result<f64, SlideError>;

    /// Number of spectral lines. Fixed at construction.
    fn size(&self) -> usize {
        self.lines().len()
    }

    /// Spectral line `index` as a read-only value.
    fn line(&self, index: usize) -> Result<Complex64, SlideError> {
        self.lines()
            .get(index)
            .map(ComplexRead::value)
            .ok_or(SlideError::IndexOutOfRange)
    }

    /// Magnitude of every spectral line, in index order.
    fn magnitudes(&self) -> Vec<f64> {
        self.lines().iter().map(ComplexRead::length).collect()
    }

    /// Sum over lines of the squared difference of line magnitudes.
    ///
    /// Lines close to `f64::MAX` can overflow the sum, which is reported as
    /// [`SlideError::NonFinite`].
    fn distance_to(&self, other: &Self) -> Result<f64, SlideError>
    where
        Self: Sized,
    {
        if other.size() != self.size() {
            return Err(SlideError::MismatchedLengths);
        }
        let distance: f64 = self
            .lines()
            .iter()
            .zip(other.lines())
            .map(|(a, b)| {
                let diff = a.length() - b.length();
                diff * diff
            })
            .sum();
        if distance.is_finite() {
            Ok(distance)
        } else {
            Err(SlideError::NonFinite)
        }
    }

    /// Ingest every sample of `samples` in order, stopping at the first
    /// rejected one. Returns the number of samples ingested.
    fn feed<I>(&mut self, samples: I) -> Result<usize, SlideError>
    where
        Self: Sized,
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0;
        for sample in samples {
            self.put_bin(sample)?;
            count += 1;
        }
        Ok(count)
    }
}

/// `Re((1/N) Σ lines[i] · rotation[i] · filter(i))`, shared by both variants.
pub(crate) fn reconstruct(
    lines: &[MutableComplex<f64>],
    rotation: Option<&[Complex64]>,
    filter: Option<&dyn TransferFunction>,
) -> Result<f64, SlideError> {
    let size = lines.len();
    if filter.is_some_and(|f| f.len() != size) {
        return Err(SlideError::MismatchedLengths);
    }
    let mut sample = MutableComplex::<f64>::zero();
    for (i, line) in lines.iter().enumerate() {
        let mut term = line.value();
        if let Some(rotation) = rotation {
            term = term.mul(rotation[i])?;
        }
        if let Some(filter) = filter {
            term = term.mul(filter.transfer_value(i))?;
        }
        sample.add(term)?;
    }
    sample.mul(1.0 / size as f64)?;
    Ok(sample.re())
}

/// Per-line constants `length · e^(±i·2π·f_i)` over `band`.
pub(crate) fn line_constants(
    band: &LogBand,
    size: usize,
    sign: f64,
    length: f64,
) -> Result<Vec<Complex64>, SlideError> {
    band.fractions(size)
        .into_iter()
        .map(|frac| Complex64::from_polar(sign * 2.0 * core::f64::consts::PI * frac, length))
        .collect()
}
