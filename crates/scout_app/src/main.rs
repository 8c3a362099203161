use std::path::PathBuf;

use clap::Parser;

mod platform;

/// Turn a resume into a grounded job search from the terminal.
#[derive(Debug, Parser)]
#[command(name = "jobscout", version, about)]
pub struct Cli {
    /// RON configuration file. Defaults to ./jobscout.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Resume to analyze right away instead of prompting for one.
    #[arg(long, value_name = "PATH")]
    pub resume: Option<PathBuf>,

    /// Directory for saved jobs, the theme and the log file.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    platform::run_app(Cli::parse())
}
