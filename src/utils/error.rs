use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to split a single match line into two team/score pairs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed line: {line:?}")]
    MalformedLine { line: String },

    #[error("malformed score in {half:?}: {source}")]
    MalformedScore {
        half: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Input unavailable at {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line_number}: {source}")]
    Parse {
        line_number: usize,
        #[source]
        source: ParseError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LeagueError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LeagueError::InputUnavailable { path, .. } => {
                format!("Cannot read match results from {}", path.display())
            }
            LeagueError::Parse {
                line_number,
                source: ParseError::MalformedLine { line },
            } => format!(
                "Line {} is not of the form \"<Team A> <score>, <Team B> <score>\": {:?}",
                line_number, line
            ),
            LeagueError::Parse {
                line_number,
                source: ParseError::MalformedScore { half, .. },
            } => format!("Line {} has an invalid score in {:?}", line_number, half),
            LeagueError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            LeagueError::Parse { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
