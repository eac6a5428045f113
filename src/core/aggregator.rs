use crate::core::parser::parse_line;
use crate::domain::model::{ErrorPolicy, ParsedMatch, SkippedLine, TeamPoints};
use crate::utils::error::{LeagueError, Result};

const WIN_POINTS: u64 = 3;
const DRAW_POINTS: u64 = 1;
const LOSS_POINTS: u64 = 0;

#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub points: TeamPoints,
    pub skipped: Vec<SkippedLine>,
}

/// Owns the league table while match lines are folded into it.
#[derive(Debug, Default)]
pub struct ScoreAggregator {
    policy: ErrorPolicy,
    points: TeamPoints,
    skipped: Vec<SkippedLine>,
}

impl ScoreAggregator {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: &ParsedMatch) {
        let (a, b) = match result.score_a.cmp(&result.score_b) {
            std::cmp::Ordering::Greater => (WIN_POINTS, LOSS_POINTS),
            std::cmp::Ordering::Less => (LOSS_POINTS, WIN_POINTS),
            std::cmp::Ordering::Equal => (DRAW_POINTS, DRAW_POINTS),
        };
        self.points.award(&result.team_a, a);
        self.points.award(&result.team_b, b);
    }

    /// Feeds one raw line. `line_number` is 1-based and only used for diagnostics.
    pub fn ingest(&mut self, line_number: usize, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match parse_line(line) {
            Ok(parsed) => {
                self.record(&parsed);
                Ok(())
            }
            Err(error) => match self.policy {
                ErrorPolicy::Abort => Err(LeagueError::Parse {
                    line_number,
                    source: error,
                }),
                ErrorPolicy::Skip => {
                    tracing::warn!("Skipping line {}: {}", line_number, error);
                    self.skipped.push(SkippedLine { line_number, error });
                    Ok(())
                }
            },
        }
    }

    pub fn finish(self) -> Aggregation {
        Aggregation {
            points: self.points,
            skipped: self.skipped,
        }
    }
}

pub fn aggregate<I, S>(lines: I, policy: ErrorPolicy) -> Result<Aggregation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = ScoreAggregator::new(policy);
    for (index, line) in lines.into_iter().enumerate() {
        aggregator.ingest(index + 1, line.as_ref())?;
    }
    Ok(aggregator.finish())
}
