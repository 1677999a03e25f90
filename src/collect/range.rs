//! Date range resolution
//!
//! Tracks the earliest and latest note dates seen during the scan, then
//! combines them with the caller's optional bounds into the daily axis.
//!
//! # Rules (first match wins)
//!
//! ```text
//! no dated notes               → error
//! no bounds                    → [min, max]
//! start only, start < max      → [start, max]
//! end only,   end > min        → [min, end]
//! both, overlapping [min, max] → [start, end] as given
//! anything else                → error
//! ```

use crate::dataset::DateAxis;
use crate::date::DateFormat;
use crate::error::{TrackerError, TrackerResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-supplied axis bounds (inclusive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl DateBounds {
    /// No bounds: use the observed range
    pub fn new() -> Self {
        Self::default()
    }

    /// Both bounds set
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Builder: set the start bound
    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Builder: set the end bound
    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }
}

/// Observes note dates and resolves the axis
#[derive(Debug, Clone, Default)]
pub struct RangeResolver {
    format: DateFormat,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl RangeResolver {
    pub fn new(format: DateFormat) -> Self {
        Self {
            format,
            min: None,
            max: None,
        }
    }

    /// Widen the observed range to include `date`
    pub fn observe(&mut self, date: NaiveDate) {
        self.min = Some(self.min.map_or(date, |min| min.min(date)));
        self.max = Some(self.max.map_or(date, |max| max.max(date)));
    }

    /// Earliest and latest observed dates
    pub fn observed(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.min.zip(self.max)
    }

    /// Resolve the inclusive axis bounds
    pub fn resolve_bounds(&self, bounds: &DateBounds) -> TrackerResult<(NaiveDate, NaiveDate)> {
        let (min, max) = self
            .observed()
            .ok_or_else(|| TrackerError::InvalidDateRange("no dated notes found".to_string()))?;

        match (bounds.start, bounds.end) {
            (None, None) => Ok((min, max)),
            (Some(start), None) => {
                if start < max {
                    Ok((start, max))
                } else {
                    Err(self.invalid(format!(
                        "start {} is not before the last note ({})",
                        self.format.format(start),
                        self.format.format(max)
                    )))
                }
            }
            (None, Some(end)) => {
                if end > min {
                    Ok((min, end))
                } else {
                    Err(self.invalid(format!(
                        "end {} is not after the first note ({})",
                        self.format.format(end),
                        self.format.format(min)
                    )))
                }
            }
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(self.invalid(format!(
                        "start {} is after end {}",
                        self.format.format(start),
                        self.format.format(end)
                    )));
                }
                if end < min || start > max {
                    return Err(self.invalid(format!(
                        "{} to {} does not overlap the notes ({} to {})",
                        self.format.format(start),
                        self.format.format(end),
                        self.format.format(min),
                        self.format.format(max)
                    )));
                }
                Ok((start, end))
            }
        }
    }

    /// Resolve and materialize the daily axis
    pub fn resolve(&self, bounds: &DateBounds) -> TrackerResult<DateAxis> {
        let (start, end) = self.resolve_bounds(bounds)?;
        Ok(self.format.axis(start, end))
    }

    fn invalid(&self, reason: String) -> TrackerError {
        TrackerError::InvalidDateRange(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn january() -> RangeResolver {
        let mut resolver = RangeResolver::default();
        resolver.observe(day(1, 15));
        resolver.observe(day(1, 1));
        resolver.observe(day(1, 31));
        resolver.observe(day(1, 10));
        resolver
    }

    #[test]
    fn test_observe_tracks_min_max() {
        assert_eq!(january().observed(), Some((day(1, 1), day(1, 31))));
        assert_eq!(RangeResolver::default().observed(), None);
    }

    #[test]
    fn test_no_dates_is_error() {
        let resolver = RangeResolver::default();
        let err = resolver.resolve(&DateBounds::new()).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDateRange(_)));
    }

    #[test]
    fn test_no_bounds_uses_observed() {
        let axis = january().resolve(&DateBounds::new()).unwrap();

        assert_eq!(axis.start(), Some(day(1, 1)));
        assert_eq!(axis.end(), Some(day(1, 31)));
        assert_eq!(axis.len(), 31);
    }

    #[test]
    fn test_start_only() {
        let resolver = january();

        let bounds = resolver.resolve_bounds(&DateBounds::new().start(day(1, 20))).unwrap();
        assert_eq!(bounds, (day(1, 20), day(1, 31)));

        let bounds = resolver.resolve_bounds(&DateBounds::new().start(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap())).unwrap();
        assert_eq!(bounds.1, day(1, 31));

        assert!(resolver.resolve(&DateBounds::new().start(day(2, 1))).is_err());
        assert!(resolver.resolve(&DateBounds::new().start(day(1, 31))).is_err());
    }

    #[test]
    fn test_end_only() {
        let resolver = january();

        let bounds = resolver.resolve_bounds(&DateBounds::new().end(day(1, 10))).unwrap();
        assert_eq!(bounds, (day(1, 1), day(1, 10)));

        let bounds = resolver.resolve_bounds(&DateBounds::new().end(day(3, 1))).unwrap();
        assert_eq!(bounds, (day(1, 1), day(3, 1)));

        assert!(resolver.resolve(&DateBounds::new().end(day(1, 1))).is_err());
    }

    #[test]
    fn test_both_bounds() {
        let resolver = january();

        // Partial overlap is kept as given
        let bounds = resolver.resolve_bounds(&DateBounds::between(day(1, 20), day(2, 10))).unwrap();
        assert_eq!(bounds, (day(1, 20), day(2, 10)));

        let bounds = resolver.resolve_bounds(&DateBounds::between(day(1, 31), day(1, 31))).unwrap();
        assert_eq!(bounds, (day(1, 31), day(1, 31)));

        assert!(resolver.resolve(&DateBounds::between(day(2, 1), day(2, 28))).is_err());
        assert!(resolver
            .resolve(&DateBounds::between(
                NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
            ))
            .is_err());
        assert!(resolver.resolve(&DateBounds::between(day(1, 20), day(1, 10))).is_err());
    }

    #[test]
    fn test_error_message_uses_format() {
        let mut resolver = RangeResolver::new(DateFormat::new("%d.%m.%Y"));
        resolver.observe(day(1, 31));

        let err = resolver.resolve(&DateBounds::new().start(day(2, 1))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date range: start 01.02.2024 is not before the last note (31.01.2024)"
        );
    }
}
