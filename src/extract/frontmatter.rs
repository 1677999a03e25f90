//! Front-matter extractor
//!
//! Reads a numeric field directly (`weight: 72.5`), or one segment of a
//! `/`-separated string field (`bp: 120/80` with target `bp[1]`).

use super::value::{parse_float, parse_segment};
use crate::document::TAGS_FIELD;
use crate::query::Query;
use serde_json::{Map, Value};

/// Extract one note's contribution for a front-matter query
///
/// The value is contributed as-is; the query weight does not apply.
pub fn extract(query: &Query, frontmatter: &Map<String, Value>) -> Option<f64> {
    if query.target() == TAGS_FIELD {
        return None;
    }

    match frontmatter.get(query.target()) {
        Some(Value::Null) | None => {}
        Some(value) => return scalar(value),
    }

    let parent = query.parent_target()?;
    match frontmatter.get(parent) {
        Some(Value::String(values)) if values.contains('/') => {
            parse_segment(values, query.sub_index())
        }
        _ => None,
    }
}

fn scalar(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryKind;
    use serde_json::json;

    fn frontmatter(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn query(target: &str) -> Query {
        Query::new(0, QueryKind::Frontmatter, target)
    }

    #[test]
    fn test_scalar_fields() {
        let fm = frontmatter(json!({
            "weight": 72.5,
            "steps": "8000",
            "mood": "7/10",
            "note": "great day",
            "done": true,
            "zero": 0
        }));

        assert_eq!(extract(&query("weight"), &fm), Some(72.5));
        assert_eq!(extract(&query("steps"), &fm), Some(8000.0));
        assert_eq!(extract(&query("mood"), &fm), Some(7.0));
        assert_eq!(extract(&query("note"), &fm), None);
        assert_eq!(extract(&query("done"), &fm), None);
        assert_eq!(extract(&query("zero"), &fm), Some(0.0));
        assert_eq!(extract(&query("missing"), &fm), None);
    }

    #[test]
    fn test_multi_value_field() {
        let fm = frontmatter(json!({ "scores": "10/20/30" }));

        assert_eq!(extract(&query("scores[0]"), &fm), Some(10.0));
        assert_eq!(extract(&query("scores[1]"), &fm), Some(20.0));
        assert_eq!(extract(&query("scores[3]"), &fm), None);
    }

    #[test]
    fn test_multi_value_requires_string_with_separator() {
        let fm = frontmatter(json!({ "single": "10", "list": [10, 20] }));

        assert_eq!(extract(&query("single[0]"), &fm), None);
        assert_eq!(extract(&query("list[1]"), &fm), None);
    }

    #[test]
    fn test_tags_field_reserved() {
        let fm = frontmatter(json!({ "tags": "5" }));
        assert_eq!(extract(&query("tags"), &fm), None);
    }
}
