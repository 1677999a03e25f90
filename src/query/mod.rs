//! Daybook Query Model
//!
//! Declarative measurements over the note corpus:
//!
//! - **Query**: kind + target, with an optional `[n]` sub-index
//! - **QueryOptions**: weight, attached-value handling, transforms
//! - **QuerySet**: the ordered queries of one tracking run
//!
//! # Query kinds
//!
//! ```text
//! tag          #exercise, #mood:7, tags: [exercise/running]
//! frontmatter  weight: 72.5, bp: 120/80 (with target "bp[0]")
//! wiki         [[Gym]]
//! text         regular expression, optional (?<value>...) group
//! ```
//!
//! # Example
//!
//! ```rust
//! use daybook::query::{QueryKind, QueryOptions, QuerySet};
//!
//! let queries = QuerySet::new()
//!     .with(QueryKind::Tag, "exercise", QueryOptions::default())
//!     .with(QueryKind::Frontmatter, "bp[0]", QueryOptions::new().name("systolic"));
//!
//! assert_eq!(queries.len(), 2);
//! ```

mod model;

pub use model::{Query, QueryEntry, QueryKind, QueryOptions, QuerySet, QuerySpec, UnknownQueryKind};
