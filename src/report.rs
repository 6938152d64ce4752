use std::io::{self, Write};
use std::time::Duration;

use humantime::format_duration;

use crate::{Solution, Time};

/// Anything that can take a finished [`Solution`] off our hands
pub trait SolutionSink {
    type Error;

    fn present(&mut self, solution: &Solution) -> Result<(), Self::Error>;
}

/// Writes one line per bridge followed by the total.
///
/// ```text
/// Time to cross bridge (0): 19
/// Time to cross bridge (1): 150
/// Total time for all crossings: 169
/// ```
pub struct ConsoleReport<W> {
    out: W,
    humanize: bool,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            humanize: false,
        }
    }

    /// Read times as minutes and follow each one with a readable duration, e.g. `150 (2h 30m)`.
    pub fn humanized(mut self) -> Self {
        self.humanize = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn time(&self, time: Time) -> String {
        if !self.humanize {
            return time.to_string();
        }

        // sub-second noise from float division only clutters the output
        let secs = (time * 60.0).round().max(0.0) as u64;
        format!("{time} ({})", format_duration(Duration::from_secs(secs)))
    }
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SolutionSink for ConsoleReport<W> {
    type Error = io::Error;

    fn present(&mut self, solution: &Solution) -> io::Result<()> {
        for (i, &time) in solution.crossing_times.iter().enumerate() {
            let time = self.time(time);
            writeln!(self.out, "Time to cross bridge ({i}): {time}")?;
        }

        let total = self.time(solution.total);
        writeln!(self.out, "Total time for all crossings: {total}")?;
        self.out.flush()
    }
}
