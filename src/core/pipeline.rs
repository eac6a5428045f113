use crate::core::aggregator::aggregate;
use crate::core::ranker::rank;
use crate::core::renderer::{assign_ranks, render_standings};
use crate::core::{ConfigProvider, LineSource, Pipeline, TransformResult};
use crate::utils::error::Result;
use std::io::Write;

pub struct StandingsPipeline<S: LineSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: LineSource, C: ConfigProvider> StandingsPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: LineSource, C: ConfigProvider> Pipeline for StandingsPipeline<S, C> {
    fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!(
            "Reading match results from {}",
            self.config.input_path().display()
        );
        self.source.read_lines()
    }

    fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let aggregation = aggregate(&lines, self.config.error_policy())?;
        tracing::debug!(
            "Aggregated {} teams ({} lines skipped)",
            aggregation.points.len(),
            aggregation.skipped.len()
        );

        let ordered = rank(&aggregation.points);
        Ok(TransformResult {
            standings: assign_ranks(&ordered),
            skipped: aggregation.skipped,
        })
    }

    fn load(&self, result: &TransformResult, out: &mut dyn Write) -> Result<()> {
        let rendered = render_standings(&result.standings, self.config.output_format())?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
