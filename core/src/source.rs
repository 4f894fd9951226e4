//! Line sources feeding the loaders.
//!
//! A source is read completely before anything is parsed, so every address is
//! always compared against the full network list.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{LookupError, Result};

/// Something that yields text lines, one token per line.
#[async_trait]
pub trait LineSource: Send + Sync {
    /// Human readable name used in error messages (usually the file path).
    fn origin(&self) -> String;

    /// Reads every line. Line terminators (`\n` or `\r\n`) are stripped.
    async fn read_lines(&self) -> Result<Vec<String>>;
}

/// Lines of a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LineSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_lines(&self) -> Result<Vec<String>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LookupError::Unreadable {
                origin: self.origin(),
                source,
            })?;

        let text = String::from_utf8_lossy(&bytes);
        Ok(text.lines().map(str::to_string).collect())
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    origin: String,
    lines: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(origin: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origin: origin.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl LineSource for StaticSource {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    async fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}
