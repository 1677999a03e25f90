//! Text pattern extractor
//!
//! Runs a caller-supplied regular expression over the whole note. A pattern
//! with named groups is valued: each match contributes its `value` group, or
//! nothing if that group is absent. Without named groups every match adds the
//! query weight. Matching stops after `limit` matches so degenerate
//! patterns cannot run away on large notes.

use super::value::{parse_float, Measure};
use crate::query::QueryOptions;
use regex::Regex;

/// Name of the capture group holding an attached value
pub const VALUE_GROUP: &str = "value";

/// Compile a text query target in multi-line mode
pub fn compile(target: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?m){}", target))
}

/// Extract one note's contribution for a text query
pub fn extract(
    pattern: &Regex,
    options: &QueryOptions,
    content: &str,
    limit: usize,
) -> Option<f64> {
    let use_values =
        !options.ignore_attached_value && pattern.capture_names().flatten().next().is_some();

    let mut measure = Measure::default();
    let mut matches = 0;

    for caps in pattern.captures_iter(content).take(limit) {
        matches += 1;

        if !use_values {
            measure.add(options.weight);
            continue;
        }

        let Some(raw) = caps.name(VALUE_GROUP) else {
            continue;
        };
        match parse_float(raw.as_str()) {
            Some(value) if options.ignore_zero_value && value == 0.0 => {}
            Some(value) => measure.add(value),
            None => tracing::trace!(value = raw.as_str(), "Dropped unparseable text value"),
        }
    }

    if matches == limit {
        tracing::debug!(limit, pattern = %pattern, "Text match limit reached");
    }

    measure.finish()
}
