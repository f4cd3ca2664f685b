use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slidft::num::{Complex64, ComplexRead};
use slidft::sliding::{DftSlidingWindow, SlidingWindowTransform};
use slidft::SlideError;
use std::f64::consts::PI;

fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0
}

/// Four lines over the default band, fed a constant one for a full window.
#[test]
fn four_line_dc_scenario() {
    let mut dft = DftSlidingWindow::new(4).unwrap();
    let fractions = dft.band().fractions(4);
    let expected = [0.001, 0.00376, 0.01414, 0.05318];
    for (f, e) in fractions.iter().zip(expected.iter()) {
        assert!((f - e).abs() < 1e-5, "{} vs {}", f, e);
    }

    assert_eq!(dft.feed([1.0; 4]), Ok(4));
    let closed_form: f64 = fractions
        .iter()
        .map(|f| (0..4).map(|j| (2.0 * PI * f * j as f64).cos()).sum::<f64>())
        .sum::<f64>()
        / 4.0;
    let y = dft.reconstructed_sample(None).unwrap();
    assert!((y - closed_form).abs() < 1e-12, "{} vs {}", y, closed_form);
    assert!((y - 3.802_142_841_824_921_7).abs() < 1e-9);
}

#[test]
fn first_sample_reconstructs_exactly() {
    let mut rng = StdRng::seed_from_u64(3);
    for size in [1, 4, 17, 256] {
        let mut dft = DftSlidingWindow::new(size).unwrap();
        let x = rng.gen_range(-100.0..100.0);
        dft.put_bin(x).unwrap();
        let y = dft.reconstructed_sample(None).unwrap();
        assert!((y - x).abs() < 1e-9 * (1.0 + x.abs()), "{}: {} vs {}", size, y, x);
    }
}

/// A full window of a sinusoid at line `k` peaks at line `k`.
#[test]
fn full_window_selects_tuned_line() {
    let size = 64;
    for k in [16, 24, 32, 40, 48] {
        let mut dft = DftSlidingWindow::with_bounds(size, 0.05, 0.25).unwrap();
        let f = dft.band().fraction(k, size);
        dft.feed((0..size).map(|t| (2.0 * PI * f * t as f64 + 0.3).cos()))
            .unwrap();
        assert_eq!(argmax(&dft.magnitudes()), k);
    }
}

#[test]
fn transform_is_linear() {
    let mut rng = StdRng::seed_from_u64(11);
    let a: Vec<f64> = (0..40).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let b: Vec<f64> = (0..40).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mut wa = DftSlidingWindow::new(16).unwrap();
    let mut wb = DftSlidingWindow::new(16).unwrap();
    let mut wab = DftSlidingWindow::new(16).unwrap();
    wa.feed(a.iter().copied()).unwrap();
    wb.feed(b.iter().copied()).unwrap();
    wab.feed(a.iter().zip(&b).map(|(x, y)| x + y)).unwrap();
    for i in 0..16 {
        let sum = wa.line(i).unwrap().add(wb.line(i).unwrap()).unwrap();
        let got = wab.line(i).unwrap();
        assert!((sum.re() - got.re()).abs() < 1e-9);
        assert!((sum.im() - got.im()).abs() < 1e-9);
    }
}

#[test]
fn unit_filter_matches_unfiltered() {
    let mut dft = DftSlidingWindow::new(8).unwrap();
    dft.feed((0..20).map(|t| (t as f64 * 0.37).sin())).unwrap();
    let ones = vec![Complex64::new(1.0, 0.0); 8];
    let plain = dft.reconstructed_sample(None).unwrap();
    let filtered = dft.reconstructed_sample(Some(&ones)).unwrap();
    assert!((plain - filtered).abs() < 1e-12);
    let zeros = vec![Complex64::zero(); 8];
    assert_eq!(dft.reconstructed_sample(Some(&zeros)), Ok(0.0));
}

#[test]
fn argument_errors() {
    let mut dft = DftSlidingWindow::new(4).unwrap();
    dft.put_bin(1.0).unwrap();
    let filter = vec![Complex64::new(1.0, 0.0); 5];
    assert_eq!(
        dft.reconstructed_sample(Some(&filter)),
        Err(SlideError::MismatchedLengths)
    );
    assert_eq!(dft.line(4), Err(SlideError::IndexOutOfRange));
    assert!(dft.line(3).is_ok());

    let other = DftSlidingWindow::new(8).unwrap();
    assert_eq!(dft.distance_to(&other), Err(SlideError::MismatchedLengths));
    assert_eq!(
        DftSlidingWindow::new(0).unwrap_err(),
        SlideError::EmptyWindow
    );
}

#[test]
fn silence_stays_silent() {
    let mut dft = DftSlidingWindow::new(32).unwrap();
    dft.feed(std::iter::repeat(0.0).take(100)).unwrap();
    assert!(dft.magnitudes().iter().all(|&m| m == 0.0));
    assert_eq!(dft.size(), 32);
}
