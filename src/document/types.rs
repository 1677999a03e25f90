//! Note types
//!
//! A [`Document`] is one dated note as handed over by the corpus enumerator:
//! its path, its resolved day, and the structured metadata the enumerator
//! already parsed. Raw content is fetched separately through a
//! [`ContentSource`](super::ContentSource).

use crate::date::DateFormat;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Front-matter key reserved for the structured tag list
pub const TAGS_FIELD: &str = "tags";

/// Structured side-data of a note
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoteMetadata {
    /// Front-matter key/value pairs
    #[serde(default)]
    pub frontmatter: Map<String, Value>,
    /// Tags, possibly nested (`exercise/running`), without the leading `#`
    #[serde(default)]
    pub tags: Vec<String>,
    /// Outbound wiki link targets, one entry per occurrence
    #[serde(default)]
    pub links: Vec<String>,
}

/// A single note of the corpus
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Corpus-relative path, used as the content key
    pub path: String,
    /// Day the note belongs to; `None` for notes whose name is not a date
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub metadata: NoteMetadata,
}

impl Document {
    /// Create a note for a known day
    pub fn new(path: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            path: path.into(),
            date: Some(date),
            metadata: NoteMetadata::default(),
        }
    }

    /// Create a note whose day is parsed from its file name
    ///
    /// Notes whose name does not parse keep `date == None` and are skipped by
    /// the scanner.
    pub fn dated_by_name(path: impl Into<String>, format: &DateFormat) -> Self {
        let path = path.into();
        let date = format.parse_path(&path);
        Self {
            path,
            date,
            metadata: NoteMetadata::default(),
        }
    }

    /// Builder: add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.metadata.tags.push(tag.into());
        self
    }

    /// Builder: add an outbound link
    pub fn link(mut self, target: impl Into<String>) -> Self {
        self.metadata.links.push(target.into());
        self
    }

    /// Builder: set a front-matter field
    ///
    /// Setting the reserved `tags` field also feeds the structured tag list.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == TAGS_FIELD {
            self.metadata.tags.extend(tags_from_value(&value));
        }
        self.metadata.frontmatter.insert(key, value);
        self
    }

    /// Builder: replace all metadata
    pub fn metadata(mut self, metadata: NoteMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}

/// Tags listed in a front-matter `tags` value (single string or list)
pub fn tags_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.trim_start_matches('#').to_string()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim_start_matches('#').to_string())
            .collect(),
        _ => Vec::new(),
    }
}
