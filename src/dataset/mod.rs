//! Daybook Datasets
//!
//! The result side of a tracking run:
//!
//! - **axis**: the shared, gap-free daily axis
//! - **series**: one query's nullable values with running y bounds
//! - **collection**: all datasets of a run, reshape and transforms

mod axis;
mod collection;
mod series;

pub use axis::DateAxis;
pub use collection::DatasetCollection;
pub use series::{DataPoint, Dataset};
