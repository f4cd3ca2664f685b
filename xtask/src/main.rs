#[cfg(not(test))]
use anyhow::Result;
use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for slidft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    /// Run fmt, then clippy
    Analyze,
    /// Run the criterion benchmarks
    Bench,
    /// Render DFT and DST spectrograms of the default test tone
    View {
        /// Directory for the output PNG files
        #[arg(default_value = ".")]
        out_dir: String,
    },
}

#[cfg(not(test))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    match cli.command {
        Commands::Build => run(build_command(&cfg))?,
        Commands::Test => run(test_command(&cfg))?,
        Commands::Clippy => run(clippy_command())?,
        Commands::Fmt => run(fmt_command())?,
        Commands::Analyze => {
            run(fmt_command())?;
            run(clippy_command())?
        }
        Commands::Bench => run(bench_command())?,
        Commands::View { out_dir } => {
            for cmd in view_commands(&out_dir) {
                run(cmd)?;
            }
            return Ok(());
        }
    };
    Ok(())
}
