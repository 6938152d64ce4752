use std::fmt::{self, Display};

use log::{debug, info};
use smallvec::SmallVec;

pub mod report;
pub mod text;

pub use report::{ConsoleReport, SolutionSink};
pub use text::{SampleTrip, TextTrip, TripError};

/// Speed of a single hiker, in distance per unit of time
pub type Speed = f64;
pub type Length = f64;
pub type Time = f64;

/// Two solutions are considered equal when every time differs by no more than this
pub const TOLERANCE: Time = 0.001;

// typical parties fit inline without touching the heap
type Group = SmallVec<[Speed; 8]>;

#[derive(Clone, Debug, PartialEq)]
pub struct Bridge {
    pub length: Length,
    /// hikers that join the party for this bridge only
    pub joiners: Vec<Speed>,
}

impl Bridge {
    pub fn new(length: Length) -> Self {
        Self {
            length,
            joiners: Vec::new(),
        }
    }

    pub fn with_joiners(length: Length, joiners: impl Into<Vec<Speed>>) -> Self {
        Self {
            length,
            joiners: joiners.into(),
        }
    }
}

/// Crossing times for each bridge, in the order the bridges were crossed, plus their sum
#[derive(Clone, Debug, Default)]
pub struct Solution {
    pub crossing_times: Vec<Time>,
    pub total: Time,
}

impl Solution {
    /// Compares two solutions time by time within [`TOLERANCE`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        let close = |a: Time, b: Time| (a - b).abs() <= TOLERANCE;

        self.crossing_times.len() == other.crossing_times.len()
            && close(self.total, other.total)
            && self
                .crossing_times
                .iter()
                .zip(&other.crossing_times)
                .all(|(&a, &b)| close(a, b))
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for time in &self.crossing_times {
            write!(f, "{time} ")?;
        }
        write!(f, "}}, {}", self.total)
    }
}

/// Minimum time for `group` to cross a bridge of `length` with a single torch.
///
/// The fastest hiker acts as the guide: they cross once with every other hiker, moving at
/// that hiker's pace, and walk the torch back after every crossing except the last one.
/// Only the guide's speed is spent on return trips, which is what makes this optimal.
///
/// For hikers `[100, 50, 20, 10]` on a 100 unit bridge:
///
/// ```text
/// guide + 50 cross   2
/// guide returns      1
/// guide + 20 cross   5
/// guide returns      1
/// guide + 10 cross  10
///                   --
///                   19
/// ```
///
/// `group` must be non-empty and sorted fastest first, and `length` must be positive.
pub fn crossing_time(group: &[Speed], length: Length) -> Time {
    debug_assert!(!group.is_empty(), "cannot cross with an empty group");
    debug_assert!(length > 0.0, "bridge length must be positive, got {length}");
    debug_assert!(
        group.windows(2).all(|pair| pair[0] >= pair[1]),
        "group must be sorted fastest first: {group:?}"
    );

    let guide = group[0];
    if group.len() == 1 {
        return length / guide;
    }

    let escorts: Time = group[1..].iter().map(|&speed| length / speed).sum();

    // two hikers finish in a single crossing, no one needs to bring the torch back
    let returns = match group.len() {
        2 => 0.0,
        n => length / guide * (n - 2) as Time,
    };

    escorts + returns
}

/// Crosses every bridge in order and collects the time spent on each.
///
/// `hikers` are present at every bridge. A bridge's joiners only cross that bridge and do
/// not carry over to the ones after it.
pub fn solve(hikers: &[Speed], bridges: &[Bridge]) -> Solution {
    let mut solution = Solution {
        crossing_times: Vec::with_capacity(bridges.len()),
        total: 0.0,
    };

    for (i, bridge) in bridges.iter().enumerate() {
        let mut group: Group = hikers.iter().chain(&bridge.joiners).copied().collect();
        group.sort_unstable_by(|a, b| b.total_cmp(a));

        let time = crossing_time(&group, bridge.length);
        debug!(
            "bridge {i}: {} hikers over {} took {time}",
            group.len(),
            bridge.length
        );

        solution.crossing_times.push(time);
        solution.total += time;
    }

    info!(
        "crossed {} bridges in {}",
        solution.crossing_times.len(),
        solution.total
    );
    solution
}

/// A trip models the hikers setting out together and the bridges they meet on the way
pub trait Trip {
    /// hikers that cross every bridge of the trip
    fn hikers(&self) -> &[Speed];

    fn bridges(&self) -> &[Bridge];

    fn solve(&self) -> Solution {
        solve(self.hikers(), self.bridges())
    }
}
