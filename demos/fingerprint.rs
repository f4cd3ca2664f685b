//! Nearest-neighbour lookup with spectral fingerprints.

use slidft::fingerprint::{nearest, DstFingerprint};
use slidft::wave::SineWave;

const SAMPLE_RATE: f64 = 8000.0;
const SLICE: usize = 2000;

fn fingerprint(freqs: &[f64]) -> DstFingerprint {
    let mut fp = DstFingerprint::with_resolution(64).unwrap();
    fp.add_samples(SineWave::new(SAMPLE_RATE, freqs).take(SLICE))
        .unwrap();
    fp.freeze().unwrap();
    fp
}

fn main() {
    let chords: [(&str, &[f64]); 3] = [
        ("A minor", &[220.0, 261.63, 329.63]),
        ("C major", &[261.63, 329.63, 392.0]),
        ("E minor", &[164.81, 196.0, 246.94]),
    ];
    let library: Vec<DstFingerprint> = chords.iter().map(|(_, f)| fingerprint(f)).collect();

    let query = fingerprint(&[261.63, 329.63, 392.0]);
    for ((name, _), fp) in chords.iter().zip(&library) {
        println!("{:8} distance {:10.4}", name, query.distance_to(fp).unwrap());
    }
    if let Some((index, distance)) = nearest(&query, &library).unwrap() {
        println!("closest: {} ({:.4})", chords[index].0, distance);
    }
}
