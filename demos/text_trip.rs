// Usage: cargo run --example text-trip [path_to_trip]
//
// Defaults to demos/hikers.txt

use std::env;

use anyhow::Context;
use torchbridge::{ConsoleReport, SolutionSink, TextTrip, Trip};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/hikers.txt").to_string());

    let trip = TextTrip::from_path(&path).with_context(|| format!("loading {path}"))?;
    let solution = trip.solve();

    println!("{solution}");
    ConsoleReport::stdout().present(&solution)?;

    Ok(())
}
