//! Corpus scanner
//!
//! Single sequential pass over the notes. For each dated note it widens the
//! observed range, fetches the content at most once (only when a tag or text
//! query needs it) and records every query's contribution.

use super::collector::Collector;
use super::range::RangeResolver;
use crate::config::ScanConfig;
use crate::date::DateFormat;
use crate::document::{ContentSource, Document};
use crate::extract::ExtractorSet;
use crate::query::QuerySet;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Counters for one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub documents_scanned: usize,
    pub documents_skipped: usize,
    pub content_reads: usize,
    pub content_failures: usize,
    pub contributions: usize,
    pub elapsed_ms: u64,
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} notes scanned, {} skipped, {} content reads ({} failed), {} contributions in {}ms",
            self.documents_scanned,
            self.documents_skipped,
            self.content_reads,
            self.content_failures,
            self.contributions,
            self.elapsed_ms
        )
    }
}

/// Accumulates contributions and observed dates across a scan
pub struct Scanner {
    extractors: ExtractorSet,
    collector: Collector,
    range: RangeResolver,
    stats: ScanStats,
    started: Instant,
}

impl Scanner {
    pub fn new(queries: &QuerySet, config: &ScanConfig) -> Self {
        Self {
            extractors: ExtractorSet::with_limit(queries, config.text_match_limit),
            collector: Collector::new(),
            range: RangeResolver::new(DateFormat::from_config(config)),
            stats: ScanStats::default(),
            started: Instant::now(),
        }
    }

    /// Scan one note
    pub async fn scan_document(&mut self, document: &Document, source: &dyn ContentSource) {
        let Some(date) = document.date else {
            tracing::trace!(path = %document.path, "Skipping undated note");
            self.stats.documents_skipped += 1;
            return;
        };

        self.stats.documents_scanned += 1;
        self.range.observe(date);

        let content = if self.extractors.needs_content() {
            self.stats.content_reads += 1;
            match source.read(document).await {
                Ok(content) => Some(content),
                Err(e) => {
                    tracing::warn!(
                        path = %document.path,
                        error = %e,
                        "Failed to read note content"
                    );
                    self.stats.content_failures += 1;
                    None
                }
            }
        } else {
            None
        };

        for (compiled, value) in self.extractors.extract_all(document, content.as_deref()) {
            if self.collector.record(date, &compiled.entry.query, value) {
                self.stats.contributions += 1;
            }
        }
    }

    /// Scan every note in order
    pub async fn scan_all(&mut self, documents: &[Document], source: &dyn ContentSource) {
        for document in documents {
            self.scan_document(document, source).await;
        }
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    pub fn range(&self) -> &RangeResolver {
        &self.range
    }

    /// Close the scan, handing back its parts
    pub fn finish(mut self) -> (Collector, RangeResolver, ScanStats) {
        self.stats.elapsed_ms = self.started.elapsed().as_millis() as u64;
        tracing::debug!(stats = %self.stats, "Scan complete");
        (self.collector, self.range, self.stats)
    }
}
