//! Demonstrates enabling verbose logging for slidft.
use slidft::fingerprint::DftFingerprint;
use slidft::{DstSlidingWindow, SlidingWindowTransform};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut dst = DstSlidingWindow::new(32).unwrap();
    dst.feed([1.0, 2.0, 3.0, 4.0]).unwrap();

    let mut fp = DftFingerprint::with_resolution(16).unwrap();
    fp.add_samples([1.0, 0.0, -1.0, 0.0]).unwrap();
    fp.freeze().unwrap();
}
