//! Dataset collection
//!
//! Owns the shared axis and one dataset per query. Built once from the
//! collector after the scan, then optionally transformed in place.

use super::axis::DateAxis;
use super::series::Dataset;
use crate::collect::Collector;
use crate::query::{Query, QueryEntry, QuerySet};
use chrono::NaiveDate;
use serde::Serialize;

/// Every query's series over one shared date axis
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetCollection {
    axis: DateAxis,
    datasets: Vec<Dataset>,
}

impl DatasetCollection {
    /// Empty collection over `axis`
    pub fn new(axis: DateAxis) -> Self {
        Self {
            axis,
            datasets: Vec::new(),
        }
    }

    /// Append an all-null dataset for `entry`, named from its options
    pub fn create_dataset(&mut self, entry: &QueryEntry) -> &mut Dataset {
        let mut dataset = Dataset::new(entry.query.clone(), self.axis.len());
        if let Some(name) = &entry.options.name {
            dataset.set_name(name.clone());
        }
        let index = self.datasets.len();
        self.datasets.push(dataset);
        &mut self.datasets[index]
    }

    /// Reshape collected contributions into one dataset per query
    ///
    /// Each slot holds the sum of that day's contributions equal to the
    /// query, or stays empty if there are none.
    pub fn reshape(axis: DateAxis, queries: &QuerySet, collector: &Collector) -> Self {
        let dates = axis.dates().to_vec();
        let mut collection = Self::new(axis);

        for entry in queries.iter() {
            let dataset = collection.create_dataset(entry);

            for (index, date) in dates.iter().copied().enumerate() {
                if let Some(value) = collector.merged(date, &entry.query) {
                    dataset.set_value(index, value);
                }
            }

            tracing::debug!(
                query_id = entry.query.id(),
                kind = %entry.query.kind(),
                target = %entry.query.target(),
                filled = dataset.len_not_null(),
                "Reshaped dataset"
            );
        }

        collection
    }

    /// Apply each query's configured transforms: gap value, then accumulate
    pub fn apply_options(&mut self, queries: &QuerySet) {
        for dataset in self.datasets.iter_mut() {
            let Some(options) = queries.options(dataset.id()) else {
                continue;
            };
            if let Some(gap) = options.gap_value {
                dataset.apply_gap_value(gap);
            }
            if options.accumulate {
                dataset.accumulate();
            }
        }
    }

    pub fn axis(&self) -> &DateAxis {
        &self.axis
    }

    pub fn dates(&self) -> &[NaiveDate] {
        self.axis.dates()
    }

    pub fn dataset_by_id(&self, id: usize) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id() == id)
    }

    pub fn dataset_by_id_mut(&mut self, id: usize) -> Option<&mut Dataset> {
        self.datasets.iter_mut().find(|d| d.id() == id)
    }

    /// First dataset whose query equals `query` (same kind and target)
    pub fn dataset_by_query(&self, query: &Query) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.query().equal_to(query))
    }

    /// Value of dataset `id` at `date + offset` days
    pub fn value(&self, id: usize, date: NaiveDate, offset: i64) -> Option<f64> {
        self.dataset_by_id(id)?.value(&self.axis, date, offset)
    }

    pub fn names(&self) -> Vec<&str> {
        self.datasets.iter().map(Dataset::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
