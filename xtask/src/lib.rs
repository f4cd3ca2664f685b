use anyhow::{bail, Result};
use std::env;
use std::process::{Command, ExitStatus};

/// Cargo features requested for build and test runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Read extra features from `SLIDFT_FEATURES`.
pub fn detect_config() -> BuildConfig {
    compute_config(&env::var("SLIDFT_FEATURES").unwrap_or_default())
}

pub fn compute_config(extra: &str) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();
    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }
    BuildConfig { features }
}

fn cargo_with_features(subcommand: &str, cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args([subcommand, "--workspace"]);
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("build", cfg)
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("test", cfg)
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--workspace", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "-p", "slidft-bench"]);
    cmd
}

/// Render the default test tone with both variants.
pub fn view_commands(out_dir: &str) -> Vec<Command> {
    ["dft", "dst"]
        .iter()
        .map(|variant| {
            let mut cmd = Command::new("cargo");
            cmd.args(["run", "-r", "-p", "slide-view", "--"])
                .arg(format!("--{}", variant))
                .arg("--out")
                .arg(format!("{}/spectrum_{}.png", out_dir, variant));
            cmd
        })
        .collect()
}

/// Run `cmd`, failing if it exits unsuccessfully.
pub fn run(mut cmd: Command) -> Result<ExitStatus> {
    let status = cmd.status()?;
    if !status.success() {
        bail!("{:?} failed with {}", cmd, status);
    }
    Ok(status)
}
