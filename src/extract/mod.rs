//! Daybook Extractors
//!
//! One pure function per query kind turns a single note into a nullable
//! contribution:
//!
//! - **tag**: structured tag list + `#tag[:value]` in the content
//! - **frontmatter**: scalar or `/`-segmented front-matter field
//! - **wikilink**: outbound link occurrences
//! - **text**: regular expression matches, optionally valued
//!
//! `None` means "no evidence in this note"; `Some(0.0)` means "matched, but
//! the measure is zero".
//!
//! [`ExtractorSet`] compiles every query's patterns once per scan and
//! dispatches to the right extractor.

pub mod frontmatter;
pub mod tag;
pub mod text;
pub mod value;
pub mod wikilink;

pub use value::{parse_float, parse_segment};

use crate::config::DEFAULT_TEXT_MATCH_LIMIT;
use crate::document::Document;
use crate::query::{QueryEntry, QueryKind, QuerySet};
use regex::Regex;

/// A query with its patterns compiled
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    pub entry: QueryEntry,
    /// Content pattern for tag and text queries; `None` if it failed to compile
    pattern: Option<Regex>,
}

impl CompiledQuery {
    fn compile(entry: &QueryEntry) -> Self {
        let query = &entry.query;
        let compiled = match query.kind() {
            QueryKind::Tag => Some(tag::content_pattern(query)),
            QueryKind::Text => Some(text::compile(query.target())),
            QueryKind::Frontmatter | QueryKind::WikiLink => None,
        };

        let pattern = match compiled {
            Some(Ok(regex)) => Some(regex),
            Some(Err(e)) => {
                tracing::warn!(
                    query_id = query.id(),
                    target = %query.target(),
                    error = %e,
                    "Invalid pattern, query will not match"
                );
                None
            }
            None => None,
        };

        Self {
            entry: entry.clone(),
            pattern,
        }
    }

    /// Whether the pattern compiled (always true for kinds without one)
    pub fn is_valid(&self) -> bool {
        !self.entry.query.kind().needs_content() || self.pattern.is_some()
    }

    /// Extract the contribution of `document` for this query
    ///
    /// `content` is the note's text snapshot, or `None` if it was not read.
    pub fn extract(&self, document: &Document, content: Option<&str>, text_match_limit: usize) -> Option<f64> {
        let query = &self.entry.query;
        let options = &self.entry.options;
        let metadata = &document.metadata;

        match query.kind() {
            QueryKind::Tag => tag::extract(
                query,
                options,
                &metadata.tags,
                content,
                self.pattern.as_ref(),
            ),
            QueryKind::Frontmatter => frontmatter::extract(query, &metadata.frontmatter),
            QueryKind::WikiLink => wikilink::extract(query, options, &metadata.links),
            QueryKind::Text => {
                let pattern = self.pattern.as_ref()?;
                text::extract(pattern, options, content?, text_match_limit)
            }
        }
    }
}

/// Compiled extractors for every query of a run
#[derive(Debug, Clone)]
pub struct ExtractorSet {
    queries: Vec<CompiledQuery>,
    text_match_limit: usize,
}

impl ExtractorSet {
    /// Compile all queries with the default text match limit
    pub fn new(queries: &QuerySet) -> Self {
        Self::with_limit(queries, DEFAULT_TEXT_MATCH_LIMIT)
    }

    /// Compile all queries with a custom text match limit
    pub fn with_limit(queries: &QuerySet, text_match_limit: usize) -> Self {
        Self {
            queries: queries.iter().map(CompiledQuery::compile).collect(),
            text_match_limit,
        }
    }

    /// Whether any query needs the raw note content
    pub fn needs_content(&self) -> bool {
        self.queries
            .iter()
            .any(|q| q.entry.query.kind().needs_content() && q.pattern.is_some())
    }

    pub fn text_match_limit(&self) -> usize {
        self.text_match_limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledQuery> {
        self.queries.iter()
    }

    /// Run every query against one note, in query order
    pub fn extract_all<'a>(
        &'a self,
        document: &'a Document,
        content: Option<&'a str>,
    ) -> impl Iterator<Item = (&'a CompiledQuery, Option<f64>)> + 'a {
        self.queries
            .iter()
            .map(move |q| (q, q.extract(document, content, self.text_match_limit)))
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
