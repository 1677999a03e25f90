//! Tag extractor
//!
//! Counts a tag in the note's structured tag list and as `#tag` in the
//! content. Content occurrences may carry a value (`#mood:7`) or several
//! `/`-separated values (`#bp:120/80`) addressed by the query's sub-index.

use super::value::{parse_float, parse_segment, Measure};
use crate::query::{Query, QueryOptions};
use regex::Regex;

/// Build the content pattern for a tag query
///
/// Uses the parent target when the query is sub-indexed (`bp[0]` searches
/// for `#bp`).
pub fn content_pattern(query: &Query) -> Result<Regex, regex::Error> {
    let name = query.parent_target().unwrap_or(query.target());
    Regex::new(&format!(
        r"(?m)(^|\s)#{}(/[\w-]+)*(:(?P<values>[\d./-]*)[a-zA-Z]*)?([.!,?;~-]*)?(\s|$)",
        regex::escape(name)
    ))
}

/// Whether `tag` is `target` or nested below it
fn tag_matches(tag: &str, target: &str) -> bool {
    tag.strip_prefix(target)
        .map(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(false)
}

/// Extract one note's contribution for a tag query
pub fn extract(
    query: &Query,
    options: &QueryOptions,
    tags: &[String],
    content: Option<&str>,
    pattern: Option<&Regex>,
) -> Option<f64> {
    let mut measure = Measure::default();

    for tag in tags {
        if tag_matches(tag, query.target()) {
            measure.add(options.weight);
        }
    }

    if let (Some(content), Some(pattern)) = (content, pattern) {
        for caps in pattern.captures_iter(content) {
            let attached = caps
                .name("values")
                .filter(|_| !options.ignore_attached_value);

            let Some(values) = attached else {
                measure.add(options.weight);
                continue;
            };

            let values = values.as_str();
            if values.contains('/') {
                match parse_segment(values, query.sub_index()) {
                    Some(value) => measure.add(value),
                    None => tracing::trace!(tag = %query.target(), values, "Dropped multi-value tag"),
                }
            } else {
                match parse_float(values) {
                    Some(value) if options.ignore_zero_value && value == 0.0 => {}
                    Some(value) => measure.add(value),
                    None => tracing::trace!(tag = %query.target(), values, "Dropped unparseable tag value"),
                }
            }
        }
    }

    measure.finish()
}
