use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use torchbridge::{ConsoleReport, SampleTrip, SolutionSink, TextTrip, Trip};

/// Minimum time for a party of hikers with a single torch to cross a series of bridges
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// text file with one `H <speed>` or `B <length> [speeds...]` record per line
    #[arg(required_unless_present = "sample")]
    file: Option<PathBuf>,

    /// use the built-in sample trip instead of reading a file
    #[arg(long, conflicts_with = "file")]
    sample: bool,

    /// treat times as minutes and also print them as readable durations
    #[arg(long)]
    humanize: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let solution = match &cli.file {
        Some(path) => TextTrip::from_path(path)
            .with_context(|| format!("could not load trip from {}", path.display()))?
            .solve(),
        None => SampleTrip::default().solve(),
    };

    let mut report = ConsoleReport::stdout();
    if cli.humanize {
        report = report.humanized();
    }
    report
        .present(&solution)
        .context("failed to write crossing report")?;

    Ok(())
}
