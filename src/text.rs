use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, trace};

use crate::{Bridge, Length, Speed, Trip};

#[derive(thiserror::Error, Debug)]
pub enum TripError {
    #[error("failed to read trip from '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: '{record}' record is missing its {what}")]
    MissingValue {
        line: usize,
        record: &'static str,
        what: &'static str,
    },
    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: {what} must be positive, got {value}")]
    NonPositive {
        line: usize,
        what: &'static str,
        value: f64,
    },
    #[error("bridge {bridge} has no hikers to cross it")]
    EmptyGroup { bridge: usize },
}

/// Trip read from a line oriented text file.
///
/// Each line is one record, tagged by its first token:
///
/// ```text
/// H 100
/// H 50
/// B 100
/// B 250 2.5
/// B 150 25 15
/// ```
///
/// `H` records add a hiker by speed. `B` records add a bridge by length, and any numbers
/// after the length are the speeds of hikers joining for that bridge. Other lines are ignored.
#[derive(Clone, Debug, Default)]
pub struct TextTrip {
    hikers: Vec<Speed>,
    bridges: Vec<Bridge>,
}

impl TextTrip {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TripError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| TripError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let trip: Self = contents.parse()?;
        info!(
            "loaded {} hikers and {} bridges from {}",
            trip.hikers.len(),
            trip.bridges.len(),
            path.display()
        );
        Ok(trip)
    }

    fn push_hiker<'a>(
        &mut self,
        line: usize,
        mut tokens: impl Iterator<Item = &'a str>,
    ) -> Result<(), TripError> {
        let token = tokens.next().ok_or(TripError::MissingValue {
            line,
            record: "H",
            what: "speed",
        })?;
        let speed = parse_positive(line, "speed", token)?;

        trace!("line {line}: hiker at {speed}");
        self.hikers.push(speed);
        Ok(())
    }

    fn push_bridge<'a>(
        &mut self,
        line: usize,
        mut tokens: impl Iterator<Item = &'a str>,
    ) -> Result<(), TripError> {
        let token = tokens.next().ok_or(TripError::MissingValue {
            line,
            record: "B",
            what: "length",
        })?;
        let length: Length = parse_positive(line, "length", token)?;
        let joiners = tokens
            .map(|token| parse_positive(line, "speed", token))
            .collect::<Result<Vec<_>, _>>()?;

        trace!("line {line}: bridge of {length} joined by {joiners:?}");
        self.bridges.push(Bridge { length, joiners });
        Ok(())
    }

    // every bridge needs someone to carry the torch across
    fn check_groups(&self) -> Result<(), TripError> {
        if !self.hikers.is_empty() {
            return Ok(());
        }

        match self.bridges.iter().position(|b| b.joiners.is_empty()) {
            Some(bridge) => Err(TripError::EmptyGroup { bridge }),
            None => Ok(()),
        }
    }
}

impl FromStr for TextTrip {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut trip = Self::default();

        for (idx, text) in s.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = text.split_whitespace();

            match tokens.next() {
                Some("H") => trip.push_hiker(line, tokens)?,
                Some("B") => trip.push_bridge(line, tokens)?,
                _ => {}
            }
        }

        trip.check_groups()?;
        Ok(trip)
    }
}

impl Trip for TextTrip {
    fn hikers(&self) -> &[Speed] {
        &self.hikers
    }

    fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }
}

fn parse_positive(line: usize, what: &'static str, token: &str) -> Result<f64, TripError> {
    let value: f64 = token.parse().map_err(|_| TripError::InvalidNumber {
        line,
        token: token.to_string(),
    })?;

    // NaN fails this too
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TripError::NonPositive { line, what, value })
    }
}

/// Hard coded trip, handy for trying things out without writing a file
#[derive(Clone, Debug)]
pub struct SampleTrip {
    hikers: Vec<Speed>,
    bridges: Vec<Bridge>,
}

impl Default for SampleTrip {
    fn default() -> Self {
        Self {
            hikers: vec![100.0, 50.0, 20.0, 10.0],
            bridges: vec![
                Bridge::new(100.0),
                Bridge::with_joiners(250.0, [2.5]),
                Bridge::with_joiners(150.0, [25.0, 15.0]),
            ],
        }
    }
}

impl Trip for SampleTrip {
    fn hikers(&self) -> &[Speed] {
        &self.hikers
    }

    fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_records_in_order() {
        let trip: TextTrip = "H 100\nH 50\nB 100\nB 250 2.5\n\nB 150 25 15\n".parse().unwrap();

        assert_eq!(trip.hikers(), &[100.0, 50.0]);
        assert_eq!(
            trip.bridges(),
            &[
                Bridge::new(100.0),
                Bridge::with_joiners(250.0, [2.5]),
                Bridge::with_joiners(150.0, [25.0, 15.0]),
            ]
        );
    }

    #[test]
    fn skips_untagged_lines() {
        let trip: TextTrip = "# party of one\nH 5\nX 7\n  B   100  \n".parse().unwrap();

        assert_eq!(trip.hikers(), &[5.0]);
        assert_eq!(trip.bridges(), &[Bridge::new(100.0)]);
    }

    #[test]
    fn bridges_after_hikers_is_not_required() {
        let trip: TextTrip = "B 100\nH 5\n".parse().unwrap();
        assert_eq!(trip.solve().total, 20.0);
    }

    #[test]
    fn missing_values_are_reported() {
        let err = "H 5\nH\n".parse::<TextTrip>().unwrap_err();
        assert!(matches!(
            err,
            TripError::MissingValue {
                line: 2,
                what: "speed",
                ..
            }
        ));

        let err = "H 5\nB\n".parse::<TextTrip>().unwrap_err();
        assert!(matches!(
            err,
            TripError::MissingValue {
                line: 2,
                what: "length",
                ..
            }
        ));
    }

    #[test]
    fn garbage_numbers_are_reported() {
        let err = "H 5\nB 100 fast\n".parse::<TextTrip>().unwrap_err();
        match err {
            TripError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "fast");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_positive_values_are_reported() {
        for input in ["H 0\nB 10\n", "H -3\nB 10\n", "H 5\nB 0\n", "H 5\nB 10 -1\n", "H NaN\n"] {
            let err = input.parse::<TextTrip>().unwrap_err();
            assert!(
                matches!(err, TripError::NonPositive { .. }),
                "{input:?} gave {err}"
            );
        }
    }

    #[test]
    fn bridge_without_anyone_is_rejected() {
        let err = "B 100 5\nB 200\n".parse::<TextTrip>().unwrap_err();
        assert!(matches!(err, TripError::EmptyGroup { bridge: 1 }));

        // joiners alone are enough to carry the torch
        let trip: TextTrip = "B 100 5\n".parse().unwrap();
        assert_eq!(trip.solve().crossing_times, vec![20.0]);
    }

    #[test]
    fn error_messages_name_the_line() {
        let err = "H 5\nB ten\n".parse::<TextTrip>().unwrap_err();
        assert_eq!(err.to_string(), "line 2: 'ten' is not a number");
    }

    #[test]
    fn sample_trip() {
        let solution = SampleTrip::default().solve();
        assert_eq!(solution.crossing_times, vec![19.0, 150.0, 47.5]);
        assert_eq!(solution.total, 216.5);
    }
}
