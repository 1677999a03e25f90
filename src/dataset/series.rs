//! One query's daily series

use super::axis::DateAxis;
use crate::query::Query;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

const DEFAULT_NAME: &str = "untitled";

/// A single day of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Materialized series for one query, one slot per axis day
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    id: usize,
    name: String,
    query: Query,
    values: Vec<Option<f64>>,
    y_min: Option<f64>,
    y_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<Value>,
}

impl Dataset {
    /// All-null dataset of `len` slots
    pub fn new(query: Query, len: usize) -> Self {
        Self {
            id: query.id(),
            name: DEFAULT_NAME.to_string(),
            query,
            values: vec![None; len],
            y_min: None,
            y_max: None,
            display: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Attach caller-supplied rendering metadata; passed through untouched
    pub fn set_display(&mut self, display: Value) {
        self.display = Some(display);
    }

    /// Write a slot and widen the y bounds; out-of-range indexes are ignored
    pub fn set_value(&mut self, index: usize, value: f64) {
        let Some(slot) = self.values.get_mut(index) else {
            tracing::trace!(index, len = self.values.len(), "Dropped out-of-range write");
            return;
        };
        *slot = Some(value);
        self.widen(value);
    }

    /// Value at `date + offset` days, `None` if off the axis or empty
    pub fn value(&self, axis: &DateAxis, date: NaiveDate, offset: i64) -> Option<f64> {
        let index = axis.offset_index(date, offset)?;
        self.values.get(index).copied().flatten()
    }

    /// Pair every slot with its axis day
    pub fn points<'a>(&'a self, axis: &'a DateAxis) -> impl Iterator<Item = DataPoint> + 'a {
        axis.iter()
            .zip(self.values.iter())
            .map(|(date, value)| DataPoint { date, value: *value })
    }

    /// Replace every empty slot with `gap`
    ///
    /// The bounds always include `gap` afterwards, even if nothing was
    /// replaced.
    pub fn apply_gap_value(&mut self, gap: f64) {
        for slot in self.values.iter_mut().filter(|v| v.is_none()) {
            *slot = Some(gap);
        }
        self.widen(gap);
    }

    /// Turn the series into its running sum, empty slots counting as zero
    pub fn accumulate(&mut self) {
        let mut running = 0.0;
        let mut sums = Vec::with_capacity(self.values.len());
        for slot in self.values.iter_mut() {
            running += slot.unwrap_or(0.0);
            *slot = Some(running);
            sums.push(running);
        }
        for sum in sums {
            self.widen(sum);
        }
    }

    fn widen(&mut self, value: f64) {
        self.y_min = Some(self.y_min.map_or(value, |min| min.min(value)));
        self.y_max = Some(self.y_max.map_or(value, |max| max.max(value)));
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn display(&self) -> Option<&Value> {
        self.display.as_ref()
    }

    pub fn y_min(&self) -> Option<f64> {
        self.y_min
    }

    pub fn y_max(&self) -> Option<f64> {
        self.y_max
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of slots holding a value
    pub fn len_not_null(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
