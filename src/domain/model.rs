use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One match result, both sides already split into name and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatch {
    pub team_a: String,
    pub score_a: u32,
    pub team_b: String,
    pub score_b: u32,
}

/// Accumulated league points per team. A team never leaves the table once seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPoints {
    points: HashMap<String, u64>,
}

impl TeamPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `points` to `team`, registering it at 0 first if it is new.
    pub fn award(&mut self, team: &str, points: u64) {
        match self.points.get_mut(team) {
            Some(total) => *total += points,
            None => {
                self.points.insert(team.to_string(), points);
            }
        }
    }

    pub fn get(&self, team: &str) -> Option<u64> {
        self.points.get(team).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.points.iter().map(|(name, points)| (name.as_str(), *points))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for TeamPoints {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(|(name, points)| (name.into(), points)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub points: u64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, points: u64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// A ranked entry carrying the competition rank it is printed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub team: String,
    pub points: u64,
}

/// A line dropped under [`ErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub error: ParseError,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub standings: Vec<Standing>,
    pub skipped: Vec<SkippedLine>,
}

/// What the aggregator does with a line it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fail the whole run on the first malformed line.
    #[default]
    Abort,
    /// Log the malformed line, record it and keep going.
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
