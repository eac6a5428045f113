//! Builds a league standings table from a log of match results.
//!
//! Each line reads `"<Team A> <score>, <Team B> <score>"`. A win is worth 3
//! points, a draw 1 point to each side. Teams are ordered by points and then
//! by name, and tied teams share a competition rank.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::FileSource;
pub use crate::core::{engine::LeagueEngine, engine::RunSummary, pipeline::StandingsPipeline};
pub use crate::utils::error::{LeagueError, ParseError, Result};
