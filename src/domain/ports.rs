use crate::domain::model::{CodeRules, MatchOutcome, SourceCodes};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::{Read, Write};

pub trait Storage: Send + Sync {
    /// Opens a source for streaming; the returned reader yields raw (compressed) bytes.
    fn open_read(&self, path: &str) -> Result<Box<dyn Read + Send>>;
    /// Creates or truncates `path` and returns an unbuffered writer to it.
    fn open_write(&self, path: &str) -> Result<Box<dyn Write + Send>>;
}

pub trait ConfigProvider: Send + Sync {
    fn source_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn code_rules(&self) -> CodeRules;
    fn progress_interval(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceCodes>>;
    async fn transform(&self, sources: Vec<SourceCodes>) -> Result<MatchOutcome>;
    async fn load(&self, outcome: MatchOutcome) -> Result<String>;
}
