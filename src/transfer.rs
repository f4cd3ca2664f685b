//! Per-line complex weighting applied during reconstruction.
//!
//! A transfer function never touches the running spectrum; it only weights
//! the lines summed by
//! [`SlidingWindowTransform::reconstructed_sample`](crate::sliding::SlidingWindowTransform::reconstructed_sample).

use alloc::vec::Vec;
use core::ops::Range;

use crate::band::LogBand;
use crate::num::{Complex64, ComplexRead};

/// Weights indexed like the spectral lines of a transform.
///
/// `transfer_value` is only called with indices below `len()`.
pub trait TransferFunction {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn transfer_value(&self, index: usize) -> Complex64;
}

impl TransferFunction for [Complex64] {
    fn len(&self) -> usize {
        <[Complex64]>::len(self)
    }

    fn transfer_value(&self, index: usize) -> Complex64 {
        self[index]
    }
}

impl TransferFunction for Vec<Complex64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn transfer_value(&self, index: usize) -> Complex64 {
        self[index]
    }
}

/// Ideal pass-band over a log-spaced axis: unit gain for lines whose
/// characteristic frequency lies in `pass`, zero elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct BandMask {
    gains: Vec<Complex64>,
}

impl BandMask {
    /// Build a mask for an `size`-line transform over `band`, passing the
    /// frequency fractions in `pass`.
    pub fn new(band: &LogBand, size: usize, pass: Range<f64>) -> Self {
        let gains = band
            .fractions(size)
            .into_iter()
            .map(|f| {
                if pass.contains(&f) {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::zero()
                }
            })
            .collect();
        Self { gains }
    }

    /// Number of lines passed by the mask.
    pub fn passed(&self) -> usize {
        self.gains.iter().filter(|g| g.re() != 0.0).count()
    }
}

impl TransferFunction for BandMask {
    fn len(&self) -> usize {
        self.gains.len()
    }

    fn transfer_value(&self, index: usize) -> Complex64 {
        self.gains[index]
    }
}
