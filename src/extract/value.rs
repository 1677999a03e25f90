//! Numeric value parsing shared by the extractors

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("numeric prefix pattern is valid")
});

/// Parse the leading number of `raw`, ignoring trailing text
///
/// `"7"`, `" 7.5kg"` and `"1.2.3"` parse (to 7, 7.5 and 1.2); `""`, `"-"`
/// and `"abc"` do not.
pub fn parse_float(raw: &str) -> Option<f64> {
    let m = NUMERIC_PREFIX.find(raw.trim())?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse segment `sub_index` of a `/`-separated multi-value string
pub fn parse_segment(raw: &str, sub_index: Option<usize>) -> Option<f64> {
    let index = sub_index?;
    raw.split('/').nth(index).and_then(parse_float)
}

/// Running total of one note's matches for one query
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Measure {
    total: f64,
    matched: bool,
}

impl Measure {
    pub(crate) fn add(&mut self, value: f64) {
        self.total += value;
        self.matched = true;
    }

    /// `None` when nothing matched, even if the total is zero
    pub(crate) fn finish(self) -> Option<f64> {
        self.matched.then_some(self.total)
    }
}
