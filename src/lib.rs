//! # slidft - incremental log-spaced spectral analysis
//!
//! Sliding-window spectral transforms that update a logarithmically spaced
//! set of spectral lines with O(N) work per incoming sample, instead of
//! recomputing a full transform for every window position.
//!
//! ## Features
//!
//! - **Two transform variants** behind one [`SlidingWindowTransform`] trait:
//!   a rectangular finite window ([`DftSlidingWindow`]) and a leaky
//!   integrator ([`DstSlidingWindow`])
//! - **Log-uniform frequency axis**: every line covers the same interval in
//!   octaves ([`band::LogBand`])
//! - **Reconstruction** of the current sample, optionally weighted by a
//!   [`transfer::TransferFunction`]
//! - **Fingerprints** of fixed-length slices with a magnitude distance for
//!   similarity search ([`fingerprint`])
//! - **Checked complex arithmetic**: non-finite values are rejected, never
//!   propagated ([`num`])
//! - **`no_std` + `alloc`** core, math via `libm`
//!
//! ## Cargo Features
//!
//! - `std` (default): spectrogram rendering helpers ([`visual`])
//! - `verbose-logging`: `debug!` records through the `log` facade when
//!   transforms are built and fingerprints frozen
//!
//! ## Example
//!
//! ```
//! use slidft::{DstSlidingWindow, SlidingWindowTransform};
//!
//! let mut dst = DstSlidingWindow::new(64).unwrap();
//! dst.feed((0..2000).map(|_| 1.0)).unwrap();
//! let y = dst.reconstructed_sample(None).unwrap();
//! assert!((y - 1.0).abs() < 1e-6);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license (https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// `log::debug!` when `verbose-logging` is enabled, nothing otherwise.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        log::debug!($($arg)*);
    };
}

pub mod error;

/// Float abstraction and checked complex value types.
pub mod num;

/// Log-uniform mapping from line index to frequency.
pub mod band;

pub mod config;

/// Per-line weighting for reconstruction.
pub mod transfer;

/// Sliding-window transforms
///
/// Rectangular and leaky-integrator variants sharing one trait.
pub mod sliding;

pub mod fingerprint;

/// Sample sources
///
/// Synthetic sinusoids and in-memory buffers.
pub mod wave;

#[cfg(feature = "std")]
pub mod visual;

pub use config::{WindowConfig, DEFAULT_MU0};
pub use error::{ErrorKind, SlideError};
pub use fingerprint::{DftFingerprint, DstFingerprint, Fingerprint};
pub use num::{Complex, Complex32, Complex64, ComplexRead, Float, MutableComplex};
pub use sliding::{DftSlidingWindow, DstSlidingWindow, SlidingWindowTransform};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn reexports_cover_the_pipeline() {
        let mut dft = DftSlidingWindow::new(16).unwrap();
        let mut dst = DstSlidingWindow::new(16).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let signal: Vec<f64> = (0..256).map(|_| rng.gen_range(-1.0..1.0)).collect();
        assert_eq!(dft.feed(signal.iter().copied()), Ok(256));
        assert_eq!(dst.feed(signal.iter().copied()), Ok(256));
        assert!(dft.magnitudes().iter().all(|m| m.is_finite()));
        assert!(dst.reconstructed_sample(None).unwrap().is_finite());
    }

    #[test]
    fn feed_stops_at_first_rejected_sample() {
        let mut dst = DstSlidingWindow::new(4).unwrap();
        let res = dst.feed([1.0, 2.0, f64::NAN, 3.0]);
        assert_eq!(res, Err(SlideError::NonFinite));
        assert_eq!(SlideError::NonFinite.kind(), ErrorKind::Numeric);
    }

    #[test]
    fn dst_tracks_random_walk_slowly() {
        // Tiny increments keep the input well below the lowest line's band.
        let mut dst = DstSlidingWindow::new(32).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut x = 0.0;
        for _ in 0..3000 {
            dst.put_bin(x).unwrap();
        }
        let mut worst: f64 = 0.0;
        for _ in 0..500 {
            x += rng.gen_range(-1e-6..1e-6);
            dst.put_bin(x).unwrap();
            worst = worst.max((dst.reconstructed_sample(None).unwrap() - x).abs());
        }
        assert!(worst < 1e-4, "{}", worst);
    }
}
