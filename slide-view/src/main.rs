use clap::{ArgGroup, Parser};
use slidft::visual::spectrogram::{DFT_GAIN, DST_GAIN};
use slidft::wave::{SampleBuffer, SineWave, Wave};
use slidft::{DftSlidingWindow, DstSlidingWindow, SlidingWindowTransform, WindowConfig};
use slide_view::{read_wav, render, save_png, to_image, ColorMap};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

const DEFAULT_SAMPLE_RATE: f64 = 44100.0;
const DEFAULT_TONES: [f64; 2] = [440.0, 880.0];

/// Render the log-spaced sliding-window spectrum of a signal as a PNG.
///
/// Without `--input` a 440 Hz + 880 Hz test tone is analysed.
#[derive(Parser)]
#[command(group(ArgGroup::new("variant").required(true).args(["dft", "dst"])))]
struct Args {
    /// Use the rectangular sliding window
    #[arg(long)]
    dft: bool,

    /// Use the leaky-integrator sliding window
    #[arg(long)]
    dst: bool,

    /// Decay factor of the leaky integrator, in [0, 1)
    #[arg(long, requires = "dst")]
    mu0: Option<f64>,

    /// Number of spectral lines (image width)
    #[arg(long, default_value_t = 2048)]
    size: usize,

    /// Number of samples to process (image height)
    #[arg(long, default_value_t = 2048)]
    rounds: usize,

    /// Lower band limit as a fraction of the sampling rate
    #[arg(long, default_value_t = slidft::band::DEFAULT_LOWER_BOUND)]
    lower: f64,

    /// Upper band limit as a fraction of the sampling rate
    #[arg(long, default_value_t = slidft::band::DEFAULT_UPPER_BOUND)]
    upper: f64,

    /// Brightness gain applied to line magnitudes
    #[arg(long)]
    gain: Option<f64>,

    /// 16-bit PCM WAV file to analyse
    #[arg(long)]
    input: Option<PathBuf>,

    /// Sampling rate of the synthetic test tone
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: f64,

    /// Output PNG path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Color map for the output PNG
    #[arg(long, value_enum, default_value_t = ColorMap::Hue)]
    colormap: ColorMap,
}

fn run<W: SlidingWindowTransform>(
    mut transform: W,
    wave: &mut dyn Wave,
    args: &Args,
    sample_rate: f64,
    gain: f64,
    out: PathBuf,
) -> Result<(), Box<dyn Error>> {
    println!("{}", transform.band().info(transform.size(), sample_rate));
    println!("[writing spectrum image to file '{}']", out.display());
    let spectrogram = render(&mut transform, wave, args.rounds, gain)?;
    let img = to_image(&spectrogram, args.colormap).ok_or("spectrogram too large for an image")?;
    save_png(&img, &out)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (mut wave, sample_rate): (Box<dyn Wave>, f64) = match &args.input {
        Some(path) => {
            let (samples, rate) = read_wav(path)?;
            log::info!("read {} samples at {} Hz from {}", samples.len(), rate, path.display());
            (Box::new(SampleBuffer::new(samples)), f64::from(rate))
        }
        None => (
            Box::new(SineWave::new(args.sample_rate, &DEFAULT_TONES)),
            args.sample_rate,
        ),
    };

    let mut config = WindowConfig::new(args.size).bounds(args.lower, args.upper);
    if let Some(mu0) = args.mu0 {
        config = config.decay(mu0);
    }

    let start = Instant::now();
    if args.dft {
        println!("[creating DFT]");
        let out = args.out.clone().unwrap_or_else(|| "spectrum_dft.png".into());
        let gain = args.gain.unwrap_or(DFT_GAIN);
        run(DftSlidingWindow::from_config(&config)?, wave.as_mut(), &args, sample_rate, gain, out)?;
    } else {
        println!("[creating DST]");
        let out = args.out.clone().unwrap_or_else(|| "spectrum_dst.png".into());
        let gain = args.gain.unwrap_or(DST_GAIN);
        run(DstSlidingWindow::from_config(&config)?, wave.as_mut(), &args, sample_rate, gain, out)?;
    }
    println!("[elapsed time: {:5.3} seconds]", start.elapsed().as_secs_f64());
    Ok(())
}
