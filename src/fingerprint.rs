//! Fixed-length spectral fingerprints for similarity scoring.
//!
//! A [`Fingerprint`] wraps one sliding-window transform and adds a two-state
//! lifecycle: while open it ingests samples, once frozen it can be compared
//! against other frozen fingerprints but no longer changes.
//!
//! ```
//! use slidft::fingerprint::DstFingerprint;
//!
//! let mut a = DstFingerprint::with_resolution(32).unwrap();
//! let mut b = DstFingerprint::with_resolution(32).unwrap();
//! for t in 0..500 {
//!     let x = (0.05 * t as f64).sin();
//!     a.add_sample(x).unwrap();
//!     b.add_sample(x).unwrap();
//! }
//! a.freeze().unwrap();
//! b.freeze().unwrap();
//! assert_eq!(a.distance_to(&b).unwrap(), 0.0);
//! ```

use crate::error::SlideError;
use crate::sliding::{DftSlidingWindow, DstSlidingWindow, SlidingWindowTransform};

/// Lifecycle of a [`Fingerprint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintState {
    Open,
    Frozen,
}

#[derive(Clone, Debug)]
pub struct Fingerprint<W> {
    transform: W,
    state: FingerprintState,
}

pub type DftFingerprint = Fingerprint<DftSlidingWindow>;
pub type DstFingerprint = Fingerprint<DstSlidingWindow>;

impl DftFingerprint {
    /// Rectangular-window fingerprint with `resolution` lines over the
    /// default band.
    pub fn with_resolution(resolution: usize) -> Result<Self, SlideError> {
        Ok(Self::new(DftSlidingWindow::new(resolution)?))
    }
}

impl DstFingerprint {
    /// Leaky-integrator fingerprint with `resolution` lines over the default
    /// band and the default decay.
    pub fn with_resolution(resolution: usize) -> Result<Self, SlideError> {
        Ok(Self::new(DstSlidingWindow::new(resolution)?))
    }
}

impl<W: SlidingWindowTransform> Fingerprint<W> {
    /// Wrap `transform` in an open fingerprint. Its current spectrum is kept.
    pub fn new(transform: W) -> Self {
        Self {
            transform,
            state: FingerprintState::Open,
        }
    }

    pub fn add_sample(&mut self, sample: f64) -> Result<(), SlideError> {
        if self.is_frozen() {
            return Err(SlideError::AlreadyFrozen);
        }
        self.transform.put_bin(sample)
    }

    /// Ingest `samples` in order. Returns the number ingested before the
    /// first rejected sample, if any.
    pub fn add_samples<I>(&mut self, samples: I) -> Result<usize, SlideError>
    where
        I: IntoIterator<Item = f64>,
    {
        if self.is_frozen() {
            return Err(SlideError::AlreadyFrozen);
        }
        self.transform.feed(samples)
    }

    pub fn freeze(&mut self) -> Result<(), SlideError> {
        if self.is_frozen() {
            return Err(SlideError::AlreadyFrozen);
        }
        self.state = FingerprintState::Frozen;
        debug_log!("fingerprint frozen with {} lines", self.transform.size());
        Ok(())
    }

    pub fn is_frozen(&self) -> bool {
        self.state == FingerprintState::Frozen
    }

    pub fn state(&self) -> FingerprintState {
        self.state
    }

    pub fn transform(&self) -> &W {
        &self.transform
    }

    /// Squared magnitude distance between two frozen fingerprints.
    ///
    /// Fails with [`SlideError::NotFrozen`] unless both sides are frozen, and
    /// with [`SlideError::MismatchedLengths`] if their line counts differ.
    pub fn distance_to(&self, other: &Self) -> Result<f64, SlideError> {
        if !self.is_frozen() || !other.is_frozen() {
            return Err(SlideError::NotFrozen);
        }
        self.transform.distance_to(&other.transform)
    }
}

/// Index and distance of the candidate closest to `query`.
///
/// Returns `Ok(None)` for an empty candidate list. Ties keep the earliest
/// candidate.
pub fn nearest<'a, W, I>(query: &Fingerprint<W>, candidates: I) -> Result<Option<(usize, f64)>, SlideError>
where
    W: SlidingWindowTransform + 'a,
    I: IntoIterator<Item = &'a Fingerprint<W>>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = query.distance_to(candidate)?;
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    Ok(best)
}
