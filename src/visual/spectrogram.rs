//! Spectrogram accumulation for the sliding-window transforms.
//!
//! Every ingested sample contributes one row holding the magnitude of each
//! spectral line, so the image grows one pixel row per sample and is as wide
//! as the transform has lines. Rows are mapped onto colours with a gain that
//! scales raw magnitudes into the displayable `0..1` range.

use alloc::vec::Vec;

use crate::error::SlideError;
use crate::sliding::SlidingWindowTransform;

/// Gain suited to the rectangular variant, whose lines grow with the window
/// length.
pub const DFT_GAIN: f64 = 0.003;

/// Gain suited to the leaky-integrator variant, whose lines are normalised
/// to unit DC gain.
pub const DST_GAIN: f64 = 0.05;

/// Maximum value for an 8-bit colour channel.
const U8_MAX: f64 = 255.0;

/// Supported colour palettes for spectrogram rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    /// Hue follows the raw magnitude, brightness the scaled magnitude.
    Hue,
    /// Greyscale gradient.
    Gray,
    /// Viridis perceptually uniform map.
    Viridis,
    /// Inferno perceptually uniform map.
    Inferno,
}

impl Colormap {
    /// Parse a palette name used on the command line.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "gray" | "grey" => Colormap::Gray,
            "viridis" => Colormap::Viridis,
            "inferno" => Colormap::Inferno,
            _ => Colormap::Hue,
        }
    }
}

/// One row of line magnitudes per ingested sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrogram {
    width: usize,
    gain: f64,
    rows: Vec<Vec<f32>>,
}

impl Spectrogram {
    /// Empty spectrogram for a transform with `width` lines.
    pub fn new(width: usize, gain: f64) -> Self {
        Self {
            width,
            gain,
            rows: Vec::new(),
        }
    }

    /// Empty spectrogram sized for `transform`.
    pub fn for_transform<W: SlidingWindowTransform>(transform: &W, gain: f64) -> Self {
        Self::new(transform.size(), gain)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows captured so far.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// Append a row of magnitudes. Its length must match the width.
    pub fn push_row(&mut self, magnitudes: &[f64]) -> Result<(), SlideError> {
        if magnitudes.len() != self.width {
            return Err(SlideError::MismatchedLengths);
        }
        self.rows
            .push(magnitudes.iter().map(|&m| m as f32).collect());
        Ok(())
    }

    /// Append the current line magnitudes of `transform`.
    pub fn capture<W: SlidingWindowTransform>(&mut self, transform: &W) -> Result<(), SlideError> {
        self.push_row(&transform.magnitudes())
    }

    /// Largest magnitude captured so far, `0.0` when empty.
    pub fn max_magnitude(&self) -> f32 {
        self.rows
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(0.0, f32::max)
    }

    /// Colour of the pixel at line `x` of row `y`.
    pub fn pixel(&self, x: usize, y: usize, cmap: Colormap) -> Option<[u8; 3]> {
        let magnitude = *self.rows.get(y)?.get(x)?;
        Some(map_color_u8(magnitude as f64, self.gain, cmap))
    }

    /// Row-major RGB8 buffer of `width * height * 3` bytes.
    pub fn to_rgb8(&self, cmap: Colormap) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.width * self.rows.len() * 3);
        for row in &self.rows {
            for &m in row {
                buf.extend_from_slice(&map_color_u8(m as f64, self.gain, cmap));
            }
        }
        buf
    }
}

/// Map a line magnitude onto an RGB8 colour.
///
/// `gain * magnitude` is clamped to `0..1` and drives the palette position,
/// or the brightness for [`Colormap::Hue`].
pub fn map_color_u8(magnitude: f64, gain: f64, cmap: Colormap) -> [u8; 3] {
    let t = (gain * magnitude).clamp(0.0, 1.0);
    match cmap {
        Colormap::Hue => {
            let hue = (magnitude - 0.5) * 2.0 * core::f64::consts::PI;
            hsv_to_rgb_u8(hue, 1.0, t)
        }
        Colormap::Gray => {
            let g = libm::round(t * U8_MAX) as u8;
            [g, g, g]
        }
        Colormap::Viridis => {
            let c = colorous::VIRIDIS.eval_continuous(t);
            [c.r, c.g, c.b]
        }
        Colormap::Inferno => {
            let c = colorous::INFERNO.eval_continuous(t);
            [c.r, c.g, c.b]
        }
    }
}

/// HSV to RGB8 with `hue` in radians, any real value.
pub fn hsv_to_rgb_u8(hue: f64, saturation: f64, value: f64) -> [u8; 3] {
    let mut h = libm::fmod(hue.to_degrees(), 360.0);
    if h < 0.0 {
        h += 360.0;
    }
    if !(0.0..360.0).contains(&h) {
        h = 0.0;
    }
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    let sector = h / 60.0;
    let index = sector as u32;
    let f = sector - index as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match index % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [channel(r), channel(g), channel(b)]
}

fn channel(x: f64) -> u8 {
    (256.0 * x).clamp(0.0, U8_MAX) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sliding::DstSlidingWindow;

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgb_u8(0.0, 1.0, 1.0), [255, 0, 0]);
        let third = 2.0 * core::f64::consts::PI / 3.0;
        assert_eq!(hsv_to_rgb_u8(third, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb_u8(-third, 1.0, 1.0), [0, 0, 255]);
        assert_eq!(hsv_to_rgb_u8(1.0, 1.0, 0.0), [0, 0, 0]);
        assert_eq!(hsv_to_rgb_u8(1.0, 0.0, 1.0), [255, 255, 255]);
    }

    #[test]
    fn gain_sets_brightness() {
        // Magnitude 0.5 sits at hue zero.
        assert_eq!(map_color_u8(0.5, 1.0, Colormap::Hue), [128, 0, 0]);
        assert_eq!(map_color_u8(0.0, 1.0, Colormap::Gray), [0, 0, 0]);
        assert_eq!(map_color_u8(100.0, 0.05, Colormap::Gray), [255, 255, 255]);
    }

    #[test]
    fn parse_defaults_to_hue() {
        assert_eq!(Colormap::parse("Viridis"), Colormap::Viridis);
        assert_eq!(Colormap::parse("grey"), Colormap::Gray);
        assert_eq!(Colormap::parse("unknown"), Colormap::Hue);
    }

    #[test]
    fn captures_rows_from_transform() {
        let mut dst = DstSlidingWindow::new(8).unwrap();
        let mut gram = Spectrogram::for_transform(&dst, DST_GAIN);
        for t in 0..10 {
            dst.put_bin(t as f64).unwrap();
            gram.capture(&dst).unwrap();
        }
        assert_eq!(gram.width(), 8);
        assert_eq!(gram.height(), 10);
        assert_eq!(gram.to_rgb8(Colormap::Inferno).len(), 8 * 10 * 3);
        assert!(gram.max_magnitude() > 0.0);
        assert!(gram.pixel(7, 9, Colormap::Gray).is_some());
        assert_eq!(gram.pixel(8, 0, Colormap::Gray), None);
        assert_eq!(gram.push_row(&[0.0; 3]), Err(SlideError::MismatchedLengths));
    }
}
