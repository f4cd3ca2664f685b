use clap::ValueEnum;
use hound::{SampleFormat, WavReader};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, Rgb, RgbImage,
};
use slidft::visual::{Colormap, Spectrogram};
use slidft::wave::Wave;
use slidft::{SlideError, SlidingWindowTransform};
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::Path;

/// Full-scale value of a signed 16-bit PCM sample.
const PCM16_RADIUS: f64 = 32768.0;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMap {
    Hue,
    Gray,
    Viridis,
    Inferno,
}

impl From<ColorMap> for Colormap {
    fn from(c: ColorMap) -> Self {
        match c {
            ColorMap::Hue => Colormap::Hue,
            ColorMap::Gray => Colormap::Gray,
            ColorMap::Viridis => Colormap::Viridis,
            ColorMap::Inferno => Colormap::Inferno,
        }
    }
}

/// Read a 16-bit PCM WAV file, averaging all channels into one.
///
/// Samples are scaled into `[-1, 1)`. Returns the samples and the sampling
/// rate in Hz.
pub fn read_wav(path: &Path) -> Result<(Vec<f64>, u32), Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{}: unsupported audio format: sample size in bits must be 16",
                path.display()
            ),
        )));
    }
    let channels = usize::from(spec.channels.max(1));
    let raw: Vec<i16> = reader.samples::<i16>().collect::<Result<_, _>>()?;
    let scale = 1.0 / (PCM16_RADIUS * channels as f64);
    let samples = raw
        .chunks_exact(channels)
        .map(|frame| frame.iter().map(|&v| f64::from(v)).sum::<f64>() * scale)
        .collect();
    Ok((samples, spec.sample_rate))
}

/// Feed up to `rounds` samples of `wave` into `transform`, capturing one
/// spectrogram row after every sample. Stops early when a finite wave ends.
pub fn render<W, S>(
    transform: &mut W,
    wave: &mut S,
    rounds: usize,
    gain: f64,
) -> Result<Spectrogram, SlideError>
where
    W: SlidingWindowTransform,
    S: Wave + ?Sized,
{
    wave.reset();
    let mut spectrogram = Spectrogram::for_transform(transform, gain);
    let step = (rounds / 10).max(1);
    for round in 0..rounds {
        let Some(sample) = wave.next_sample() else {
            log::warn!("input ended after {} of {} samples", round, rounds);
            break;
        };
        transform.put_bin(sample)?;
        spectrogram.capture(transform)?;
        if (round + 1) % step == 0 {
            log::info!(
                "[{} of {} samples ({:3.2}%)]",
                round + 1,
                rounds,
                100.0 * (round + 1) as f64 / rounds as f64
            );
        }
    }
    Ok(spectrogram)
}

/// Image with one pixel column per spectral line and one row per sample.
pub fn to_image(spectrogram: &Spectrogram, cmap: ColorMap) -> Option<RgbImage> {
    let width = u32::try_from(spectrogram.width()).ok()?;
    let height = u32::try_from(spectrogram.height()).ok()?;
    ImageBuffer::from_raw(width, height, spectrogram.to_rgb8(cmap.into()))
}

pub fn save_png(img: &ImageBuffer<Rgb<u8>, Vec<u8>>, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(file, CompressionType::Best, FilterType::Adaptive);
    let (w, h) = (img.width(), img.height());
    encoder.write_image(img.as_raw(), w, h, ColorType::Rgb8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngDecoder;
    use image::ImageDecoder;
    use slidft::visual::spectrogram::DST_GAIN;
    use slidft::wave::{SampleBuffer, SineWave};
    use slidft::DstSlidingWindow;

    #[test]
    fn saves_rgb8_png() {
        let img: RgbImage = ImageBuffer::from_pixel(2, 2, Rgb([0, 255, 128]));
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.png");
        save_png(&img, &path).unwrap();
        let dec = PngDecoder::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(dec.color_type(), ColorType::Rgb8);
        assert_eq!(dec.dimensions(), (2, 2));
    }

    #[test]
    fn render_stops_at_end_of_finite_wave() {
        let mut dst = DstSlidingWindow::new(8).unwrap();
        let mut wave = SampleBuffer::new(vec![0.5; 5]);
        let gram = render(&mut dst, &mut wave, 100, DST_GAIN).unwrap();
        assert_eq!(gram.height(), 5);
        let img = to_image(&gram, ColorMap::Gray).unwrap();
        assert_eq!(img.dimensions(), (8, 5));
    }

    #[test]
    fn render_rewinds_the_wave() {
        let mut wave = SineWave::new(44100.0, &[440.0]);
        let mut a = DstSlidingWindow::new(16).unwrap();
        let mut b = DstSlidingWindow::new(16).unwrap();
        let first = render(&mut a, &mut wave, 64, DST_GAIN).unwrap();
        let second = render(&mut b, &mut wave, 64, DST_GAIN).unwrap();
        assert_eq!(first, second);
    }
}
