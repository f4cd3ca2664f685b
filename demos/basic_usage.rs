//! Basic usage example for slidft
//!
//! Feeds a two-tone signal through both sliding-window variants and prints
//! the strongest spectral lines and the reconstructed sample.

use slidft::band::LogBand;
use slidft::wave::SineWave;
use slidft::{DftSlidingWindow, DstSlidingWindow, SlidingWindowTransform};

const SAMPLE_RATE: f64 = 44100.0;
const LINES: usize = 256;

fn strongest(transform: &impl SlidingWindowTransform, count: usize) -> Vec<(f64, f64)> {
    let band = transform.band();
    let mut lines: Vec<(f64, f64)> = transform
        .magnitudes()
        .into_iter()
        .enumerate()
        .map(|(i, m)| (band.fraction(i, transform.size()) * SAMPLE_RATE, m))
        .collect();
    lines.sort_by(|a, b| b.1.total_cmp(&a.1));
    lines.truncate(count);
    lines
}

fn main() {
    println!("=== slidft Basic Usage Example ===\n");

    println!("{}\n", LogBand::default().info(LINES, SAMPLE_RATE));

    // 1. Rectangular window
    println!("1. Rectangular sliding window");
    let mut dft = DftSlidingWindow::new(LINES).unwrap();
    let mut wave = SineWave::new(SAMPLE_RATE, &[440.0, 880.0]);
    dft.feed(wave.by_ref().take(LINES)).unwrap();
    for (hz, m) in strongest(&dft, 3) {
        println!("   {:8.1} Hz  |w| = {:.3}", hz, m);
    }
    println!(
        "   reconstructed sample: {:.4}",
        dft.reconstructed_sample(None).unwrap()
    );
    println!();

    // 2. Leaky integrator
    println!("2. Leaky-integrator sliding window");
    let mut dst = DstSlidingWindow::new(LINES).unwrap();
    let mut wave = SineWave::new(SAMPLE_RATE, &[440.0, 880.0]);
    dst.feed(wave.by_ref().take(4096)).unwrap();
    for (hz, m) in strongest(&dst, 3) {
        println!("   {:8.1} Hz  |w| = {:.3}", hz, m);
    }
    println!("   line 0: {}", dst.line(0).unwrap());
    println!(
        "   reconstructed sample: {:.4}",
        dst.reconstructed_sample(None).unwrap()
    );
}
