// Usage: cargo run --example sample

use torchbridge::{ConsoleReport, SampleTrip, SolutionSink, Trip};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let trip = SampleTrip::default();
    println!("hikers: {:?}", trip.hikers());
    for (i, bridge) in trip.bridges().iter().enumerate() {
        println!(
            "bridge {i}: {} long, joined by {:?}",
            bridge.length, bridge.joiners
        );
    }
    println!();

    let solution = trip.solve();
    ConsoleReport::stdout().humanized().present(&solution)?;

    Ok(())
}
