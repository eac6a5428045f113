use crate::core::LineSource;
use crate::utils::error::{LeagueError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Reads match lines from a UTF-8 file. The handle is dropped before returning.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn unavailable(&self, source: std::io::Error) -> LeagueError {
        LeagueError::InputUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|e| self.unavailable(e))
    }
}
