//! Sample sources feeding the transforms.
//!
//! Any `IntoIterator<Item = f64>` can drive
//! [`SlidingWindowTransform::feed`](crate::sliding::SlidingWindowTransform::feed);
//! the [`Wave`] trait adds rewinding on top of that for sources that can
//! restart from their first sample.

use alloc::vec::Vec;

use crate::error::SlideError;

/// A rewindable series of samples, possibly endless.
pub trait Wave {
    /// Next sample, or `None` once a finite wave is exhausted.
    fn next_sample(&mut self) -> Option<f64>;

    /// Restart so the next sample is the first one again.
    fn reset(&mut self);
}

/// Endless sum of unit-amplitude sinusoids.
///
/// ```
/// use slidft::wave::{SineWave, Wave};
///
/// let mut wave = SineWave::new(44100.0, &[440.0, 880.0]);
/// assert_eq!(wave.next_sample(), Some(0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SineWave {
    deltas: Vec<f64>,
    initial: Vec<f64>,
    phases: Vec<f64>,
}

impl SineWave {
    /// Partials at `frequencies` Hz sampled at `sample_rate` Hz, all
    /// starting at phase zero.
    pub fn new(sample_rate: f64, frequencies: &[f64]) -> Self {
        let fractions: Vec<f64> = frequencies.iter().map(|f| f / sample_rate).collect();
        Self::from_fractions(&fractions)
    }

    /// Partials given directly as fractions of the sampling rate.
    pub fn from_fractions(fractions: &[f64]) -> Self {
        let deltas: Vec<f64> = fractions
            .iter()
            .map(|f| 2.0 * core::f64::consts::PI * f)
            .collect();
        let initial = alloc::vec![0.0; deltas.len()];
        Self {
            phases: initial.clone(),
            initial,
            deltas,
        }
    }

    /// Start partial `i` at `phases[i]` radians instead of zero.
    pub fn with_phases(mut self, phases: &[f64]) -> Result<Self, SlideError> {
        if phases.len() != self.deltas.len() {
            return Err(SlideError::MismatchedLengths);
        }
        self.initial = phases.to_vec();
        self.phases = phases.to_vec();
        Ok(self)
    }

    pub fn phase(&self, index: usize) -> Option<f64> {
        self.phases.get(index).copied()
    }
}

impl Wave for SineWave {
    fn next_sample(&mut self) -> Option<f64> {
        let mut sample = 0.0;
        for (phase, delta) in self.phases.iter_mut().zip(&self.deltas) {
            sample += libm::sin(*phase);
            *phase += delta;
        }
        Some(sample)
    }

    fn reset(&mut self) {
        self.phases.copy_from_slice(&self.initial);
    }
}

impl Iterator for SineWave {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.next_sample()
    }
}

/// Finite wave over samples held in memory, e.g. a decoded audio file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    position: usize,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples fetched since the last reset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Skip up to `n` samples without fetching them.
    pub fn advance(&mut self, n: usize) {
        self.position = self.position.saturating_add(n).min(self.samples.len());
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl Wave for SampleBuffer {
    fn next_sample(&mut self) -> Option<f64> {
        let sample = self.samples.get(self.position).copied()?;
        self.position += 1;
        Some(sample)
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}

impl Iterator for SampleBuffer {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.next_sample()
    }
}
