use crate::core::{ConfigProvider, ErrorPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "league-table", version)]
#[command(about = "Ranks a league from a file of match results")]
pub struct CliConfig {
    #[arg(
        value_name = "INPUT",
        help = "File with one \"<Team A> <score>, <Team B> <score>\" per line"
    )]
    pub input: PathBuf,

    #[arg(
        long,
        value_enum,
        default_value_t = ErrorPolicy::Abort,
        help = "What to do with a malformed line"
    )]
    pub on_error: ErrorPolicy,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.on_error
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input.to_string_lossy())
    }
}
