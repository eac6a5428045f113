use crate::core::Pipeline;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub teams_ranked: usize,
    pub lines_skipped: usize,
}

pub struct LeagueEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LeagueEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load. Nothing reaches `out` unless the
    /// whole input aggregated successfully.
    pub fn run(&self, out: &mut dyn Write) -> Result<RunSummary> {
        tracing::info!("Building league table");

        let lines = self.pipeline.extract()?;
        let lines_read = lines.len();
        tracing::info!("Read {} lines", lines_read);

        let result = self.pipeline.transform(lines)?;
        if !result.skipped.is_empty() {
            tracing::warn!("{} malformed lines were skipped", result.skipped.len());
        }
        tracing::info!("Ranked {} teams", result.standings.len());

        self.pipeline.load(&result, out)?;

        Ok(RunSummary {
            lines_read,
            teams_ranked: result.standings.len(),
            lines_skipped: result.skipped.len(),
        })
    }
}
