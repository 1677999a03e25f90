//! Contribution collector
//!
//! Maps each calendar day to the contributions observed on it, in scan
//! order. Several notes may share a day; their contributions are appended,
//! never overwritten. Merging happens later, during reshape.

use crate::query::Query;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One note's numeric evidence for one query
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub query: Query,
    pub value: f64,
}

/// Day → contributions accumulator
#[derive(Debug, Clone, Default)]
pub struct Collector {
    days: BTreeMap<NaiveDate, Vec<Contribution>>,
    contributions: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an extractor result; `None` results are not stored
    ///
    /// Returns whether a contribution was added.
    pub fn record(&mut self, date: NaiveDate, query: &Query, value: Option<f64>) -> bool {
        let Some(value) = value else {
            return false;
        };

        self.days.entry(date).or_default().push(Contribution {
            query: query.clone(),
            value,
        });
        self.contributions += 1;
        true
    }

    /// Contributions recorded for `date`, in scan order
    pub fn get(&self, date: NaiveDate) -> Option<&[Contribution]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Sum of every contribution to `query` on `date`
    ///
    /// `None` if the day holds no contribution equal to `query`.
    pub fn merged(&self, date: NaiveDate, query: &Query) -> Option<f64> {
        let mut matched = self
            .get(date)?
            .iter()
            .filter(|c| c.query.equal_to(query))
            .map(|c| c.value)
            .peekable();

        matched.peek()?;
        Some(matched.sum())
    }

    /// Days holding at least one contribution, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Number of days with contributions
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of stored contributions
    pub fn contribution_count(&self) -> usize {
        self.contributions
    }
}
