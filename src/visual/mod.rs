//! Rendering helpers for transform output.

pub mod spectrogram;

pub use spectrogram::{Colormap, Spectrogram};
