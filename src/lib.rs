//! # Daybook
//!
//! Daily-note time series - turn a corpus of dated notes into aligned,
//! per-day numeric series ready for charting.
//!
//! ## Features
//!
//! - **Four query kinds**: tags (with attached and multi-value readings),
//!   front-matter fields, wiki links and regular-expression text patterns
//! - **Single pass**: each note is scanned once, its content read at most once
//! - **Shared axis**: every series is aligned to one gap-free daily axis
//! - **Transforms**: gap substitution and running accumulation per query
//!
//! ## Modules
//!
//! - [`query`]: Query model, targets and per-query options
//! - [`document`]: Notes, their metadata and content sources
//! - [`extract`]: One extractor per query kind
//! - [`collect`]: Contribution collector, range resolution and the scanner
//! - [`dataset`]: Date axis, datasets and the dataset collection
//! - [`tracker`]: End-to-end tracking runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use daybook::collect::DateBounds;
//! use daybook::date::DateFormat;
//! use daybook::document::{Document, MemorySource};
//! use daybook::query::{QueryKind, QueryOptions, QuerySet};
//! use daybook::Tracker;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tracker = Tracker::default();
//!
//!     // Notes as handed over by the corpus enumerator
//!     let notes = vec![
//!         Document::dated_by_name("2024-01-01.md", tracker.date_format()).field("weight", 72.5),
//!         Document::dated_by_name("2024-01-03.md", tracker.date_format()).tag("exercise"),
//!     ];
//!     let source = MemorySource::new()
//!         .with("2024-01-01.md", "#mood:7")
//!         .with("2024-01-03.md", "#mood:5 after the gym");
//!
//!     let queries = QuerySet::new()
//!         .with(QueryKind::Tag, "mood", QueryOptions::new().name("Mood"))
//!         .with(QueryKind::Frontmatter, "weight", QueryOptions::new().gap_value(0.0));
//!
//!     let collection = tracker.run(&notes, &source, &queries, DateBounds::new()).await?;
//!
//!     let labels = collection.axis().labels(&DateFormat::default());
//!     for dataset in collection.iter() {
//!         println!("{}: {:?} over {:?}", dataset.name(), dataset.values(), labels);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod collect;
pub mod config;
pub mod dataset;
pub mod date;
pub mod document;
pub mod error;
pub mod extract;
pub mod logging;
pub mod query;
pub mod tracker;

// Re-export top-level types for convenience
pub use collect::{Collector, Contribution, DateBounds, RangeResolver, ScanStats, Scanner};

pub use config::{Config, ConfigError, LoggingConfig, ScanConfig};

pub use dataset::{DataPoint, Dataset, DatasetCollection, DateAxis};

pub use date::DateFormat;

pub use document::{ContentSource, Document, MemorySource, NoteMetadata, SourceError};

pub use error::{TrackerError, TrackerResult};

pub use extract::ExtractorSet;

pub use query::{Query, QueryKind, QueryOptions, QuerySet, QuerySpec};

pub use tracker::Tracker;
