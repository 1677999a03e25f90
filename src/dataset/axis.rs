//! Daily date axis

use crate::date::DateFormat;
use chrono::NaiveDate;
use serde::Serialize;

/// Strictly increasing, gap-free sequence of calendar days
///
/// Index lookups are computed from the start date, not searched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateAxis {
    dates: Vec<NaiveDate>,
}

impl DateAxis {
    /// One entry per day from `start` to `end` inclusive; empty if
    /// `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let dates = start.iter_days().take_while(|d| *d <= end).collect();
        Self { dates }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Slot index of `date`, or `None` if it is off the axis
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.offset_index(date, 0)
    }

    /// Slot index of `date` shifted by `offset` days
    pub fn offset_index(&self, date: NaiveDate, offset: i64) -> Option<usize> {
        let start = self.start()?;
        let index = (date - start).num_days().checked_add(offset)?;
        usize::try_from(index).ok().filter(|i| *i < self.len())
    }

    /// Axis dates rendered with `format`
    pub fn labels(&self, format: &DateFormat) -> Vec<String> {
        self.iter().map(|d| format.format(d)).collect()
    }
}
