//! Tracker
//!
//! Runs a full tracking pass over a corpus of daily notes:
//!
//! # Pipeline
//!
//! ```text
//! Notes → Scan (extract + collect) → Resolve range → Reshape → Transforms
//! ```
//!
//! Either a complete [`DatasetCollection`] comes back or a single
//! [`TrackerError`]; never a partial result.

use crate::collect::{DateBounds, ScanStats, Scanner};
use crate::config::{Config, ScanConfig};
use crate::dataset::DatasetCollection;
use crate::date::DateFormat;
use crate::document::{ContentSource, Document};
use crate::error::TrackerResult;
use crate::query::QuerySet;
use std::path::Path;

/// Turns notes and queries into daily datasets
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    config: ScanConfig,
    format: DateFormat,
}

impl Tracker {
    pub fn new(config: ScanConfig) -> Self {
        let format = DateFormat::from_config(&config);
        Self { config, format }
    }

    /// Build from the scan section of a full configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.scan.clone())
    }

    /// Load a configuration file (with env overrides) and build from it
    pub fn from_config_file(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let config = Config::load_with_env(path.as_ref())?;
        Ok(Self::from_config(&config))
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Date format used to name and label days
    pub fn date_format(&self) -> &DateFormat {
        &self.format
    }

    /// Scan, resolve and reshape without applying per-query transforms
    pub async fn collect(
        &self,
        documents: &[Document],
        source: &dyn ContentSource,
        queries: &QuerySet,
        bounds: DateBounds,
    ) -> TrackerResult<(DatasetCollection, ScanStats)> {
        tracing::debug!(
            documents = documents.len(),
            queries = queries.len(),
            "Starting tracking scan"
        );

        let mut scanner = Scanner::new(queries, &self.config);
        scanner.scan_all(documents, source).await;
        let (collector, range, stats) = scanner.finish();

        let axis = range.resolve(&bounds)?;
        tracing::debug!(
            start = ?axis.start(),
            end = ?axis.end(),
            days = axis.len(),
            "Resolved date axis"
        );

        Ok((DatasetCollection::reshape(axis, queries, &collector), stats))
    }

    /// Full run: collect, then apply gap values and accumulation
    pub async fn run(
        &self,
        documents: &[Document],
        source: &dyn ContentSource,
        queries: &QuerySet,
        bounds: DateBounds,
    ) -> TrackerResult<DatasetCollection> {
        let (collection, _) = self.run_with_stats(documents, source, queries, bounds).await?;
        Ok(collection)
    }

    /// Full run, also returning the scan counters
    pub async fn run_with_stats(
        &self,
        documents: &[Document],
        source: &dyn ContentSource,
        queries: &QuerySet,
        bounds: DateBounds,
    ) -> TrackerResult<(DatasetCollection, ScanStats)> {
        let (mut collection, stats) = self.collect(documents, source, queries, bounds).await?;
        collection.apply_options(queries);
        Ok((collection, stats))
    }
}
