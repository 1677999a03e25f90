//! Daybook Collection
//!
//! Everything that happens during the pass over the corpus:
//!
//! - **collector**: day → contributions map
//! - **range**: observed date bounds and axis resolution
//! - **scanner**: drives extraction over the notes

mod collector;
mod range;
mod scanner;

pub use collector::{Collector, Contribution};
pub use range::{DateBounds, RangeResolver};
pub use scanner::{ScanStats, Scanner};
