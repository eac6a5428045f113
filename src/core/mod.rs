pub mod aggregator;
pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod ranker;
pub mod renderer;

pub use crate::domain::model::{
    ErrorPolicy, OutputFormat, ParsedMatch, RankedEntry, SkippedLine, Standing, TeamPoints,
    TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, LineSource, Pipeline};
pub use crate::utils::error::Result;
