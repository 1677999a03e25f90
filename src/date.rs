//! Date utility
//!
//! Daily notes are dated by their file name. `DateFormat` bundles the chrono
//! format string with the optional name prefix/suffix, and is passed to the
//! code that needs day parsing, formatting or arithmetic.

use crate::config::ScanConfig;
use crate::dataset::DateAxis;
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::Path;

/// Default format for daily note names
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses, formats and steps over calendar days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    format: String,
    prefix: String,
    suffix: String,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl DateFormat {
    /// Create a date format from a chrono format string
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Build from scan configuration
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(&config.date_format)
            .with_prefix(&config.date_prefix)
            .with_suffix(&config.date_suffix)
    }

    /// Set the prefix stripped from note names before parsing
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Set the suffix stripped from note names before parsing
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    pub fn format_str(&self) -> &str {
        &self.format
    }

    /// Parse a bare date string with the configured format
    pub fn parse(&self, s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), &self.format).ok()
    }

    /// Parse a note base name (`journal-2024-01-15`), stripping the prefix and
    /// suffix when present
    pub fn parse_basename(&self, basename: &str) -> Option<NaiveDate> {
        let mut name = basename;
        if !self.prefix.is_empty() {
            name = name.strip_prefix(self.prefix.as_str()).unwrap_or(name);
        }
        if !self.suffix.is_empty() {
            name = name.strip_suffix(self.suffix.as_str()).unwrap_or(name);
        }
        self.parse(name)
    }

    /// Parse the date of a note from its path's file stem
    pub fn parse_path(&self, path: &str) -> Option<NaiveDate> {
        let stem = Path::new(path).file_stem()?.to_str()?;
        self.parse_basename(stem)
    }

    /// Format a day with the configured format (no prefix/suffix)
    ///
    /// Formats that cannot render a plain date (time fields such as `%H`, or
    /// unknown specifiers) fall back to `%Y-%m-%d`.
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.format)).is_err() {
            tracing::trace!(format = %self.format, "Date format cannot render a day, using default");
            return date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        out
    }

    /// Signed number of days from `start` to `end`
    pub fn days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        (end - start).num_days()
    }

    /// Materialize the inclusive daily axis from `start` to `end`
    pub fn axis(&self, start: NaiveDate, end: NaiveDate) -> DateAxis {
        DateAxis::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_default_format() {
        let format = DateFormat::default();

        assert_eq!(format.parse("2024-01-15"), Some(day(2024, 1, 15)));
        assert_eq!(format.parse("2024-02-30"), None);
        assert_eq!(format.parse("Meeting notes"), None);
    }

    #[test]
    fn test_parse_basename_with_affixes() {
        let format = DateFormat::new("%Y%m%d")
            .with_prefix("journal-")
            .with_suffix("-daily");

        assert_eq!(format.parse_basename("journal-20240115-daily"), Some(day(2024, 1, 15)));
        assert_eq!(format.parse_basename("20240115"), Some(day(2024, 1, 15)));
        assert_eq!(format.parse_basename("journal-notes"), None);
    }

    #[test]
    fn test_parse_path_uses_file_stem() {
        let format = DateFormat::default();

        assert_eq!(format.parse_path("diary/2024/2024-03-01.md"), Some(day(2024, 3, 1)));
        assert_eq!(format.parse_path("diary/ideas.md"), None);
    }

    #[test]
    fn test_format_and_day_arithmetic() {
        let format = DateFormat::new("%d/%m/%Y");

        assert_eq!(format.format(day(2024, 1, 5)), "05/01/2024");
        assert_eq!(format.days_between(day(2024, 1, 30), day(2024, 3, 1)), 31);
        assert_eq!(format.days_between(day(2024, 3, 1), day(2024, 1, 30)), -31);
    }

    #[test]
    fn test_format_falls_back_for_unrenderable_formats() {
        let date = day(2024, 2, 1);

        assert_eq!(DateFormat::new("%Y-%m-%d %H").format(date), "2024-02-01");
        assert_eq!(DateFormat::new("%Q").format(date), "2024-02-01");
        assert_eq!(DateFormat::new("%Y/%m").format(date), "2024/02");
    }

    #[test]
    fn test_from_config() {
        let config = ScanConfig {
            date_format: "%Y_%m_%d".to_string(),
            date_prefix: "day ".to_string(),
            ..ScanConfig::default()
        };
        let format = DateFormat::from_config(&config);

        assert_eq!(format.format_str(), "%Y_%m_%d");
        assert_eq!(format.parse_basename("day 2024_06_30"), Some(day(2024, 6, 30)));
    }
}
