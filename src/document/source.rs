//! Content sources
//!
//! Reading raw note text is the corpus collaborator's job. The scanner only
//! needs an async way to fetch the text of one note, and it calls it at most
//! once per note.

use super::Document;
use async_trait::async_trait;
use std::collections::HashMap;

/// Fetches the raw text of a note
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Read the full content of `document`
    async fn read(&self, document: &Document) -> Result<String, SourceError>;
}

/// Errors that can occur while reading note content
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Read error: {0}")]
    Read(String),
}

/// In-memory content keyed by note path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    contents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the content of a note
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.contents.insert(path.into(), content.into());
    }

    /// Builder form of [`MemorySource::insert`]
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn read(&self, document: &Document) -> Result<String, SourceError> {
        self.contents
            .get(&document.path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(document.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_memory_source_read() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let source = MemorySource::new().with("2024-01-01.md", "#mood:7");

        let found = Document::new("2024-01-01.md", date);
        assert_eq!(source.read(&found).await.unwrap(), "#mood:7");

        let missing = Document::new("2024-01-02.md", date);
        let err = source.read(&missing).await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert_eq!(err.to_string(), "Note not found: 2024-01-02.md");
    }
}
