//! Wiki link extractor

use super::value::Measure;
use crate::query::{Query, QueryOptions};

/// Extract one note's contribution for a wiki link query
///
/// Every link whose target equals the query target adds the query weight.
pub fn extract(query: &Query, options: &QueryOptions, links: &[String]) -> Option<f64> {
    let mut measure = Measure::default();
    for link in links.iter().filter(|link| link.as_str() == query.target()) {
        tracing::trace!(link = %link, "Matched wiki link");
        measure.add(options.weight);
    }
    measure.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryKind;

    #[test]
    fn test_counts_each_occurrence() {
        let query = Query::new(0, QueryKind::WikiLink, "Gym");
        let links = vec!["Gym".to_string(), "Work".to_string(), "Gym".to_string()];

        assert_eq!(extract(&query, &QueryOptions::default(), &links), Some(2.0));
        assert_eq!(extract(&query, &QueryOptions::new().weight(0.5), &links), Some(1.0));
    }

    #[test]
    fn test_exact_match_only() {
        let query = Query::new(0, QueryKind::WikiLink, "Gym");
        let links = vec!["gym".to_string(), "Gym/Legs".to_string()];

        assert_eq!(extract(&query, &QueryOptions::default(), &links), None);
        assert_eq!(extract(&query, &QueryOptions::default(), &[]), None);
    }
}
