//! Construction parameters for the sliding-window transforms.

use crate::band::{LogBand, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
use crate::error::SlideError;

/// Default decay factor of the leaky integrator.
///
/// A sample's weight falls to one third after 150 steps:
/// `DEFAULT_MU0 = (1/3)^(1/150) ≈ 0.992703`.
pub const DEFAULT_MU0: f64 = 0.992_702_673_803_335_1;

/// Parameters shared by [`DftSlidingWindow`](crate::sliding::dft::DftSlidingWindow)
/// and [`DstSlidingWindow`](crate::sliding::dst::DstSlidingWindow).
///
/// `mu0` is ignored by the rectangular variant. Values are validated when a
/// transform is built from the configuration, not here.
///
/// ```
/// use slidft::config::WindowConfig;
/// let cfg = WindowConfig::new(256).bounds(0.01, 0.25).decay(0.99);
/// assert_eq!(cfg.size, 256);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowConfig {
    pub size: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub mu0: f64,
}

impl WindowConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            mu0: DEFAULT_MU0,
        }
    }

    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn decay(mut self, mu0: f64) -> Self {
        self.mu0 = mu0;
        self
    }

    pub(crate) fn checked_size(&self) -> Result<usize, SlideError> {
        if self.size == 0 {
            return Err(SlideError::EmptyWindow);
        }
        Ok(self.size)
    }

    pub(crate) fn band(&self) -> Result<LogBand, SlideError> {
        LogBand::new(self.lower_bound, self.upper_bound)
    }

    pub(crate) fn checked_mu0(&self) -> Result<f64, SlideError> {
        if !(0.0..1.0).contains(&self.mu0) {
            return Err(SlideError::InvalidDecay);
        }
        Ok(self.mu0)
    }
}
