use crate::domain::model::{ErrorPolicy, OutputFormat, TransformResult};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Where raw match lines come from.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn error_policy(&self) -> ErrorPolicy;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, lines: Vec<String>) -> Result<TransformResult>;
    fn load(&self, result: &TransformResult, out: &mut dyn Write) -> Result<()>;
}
