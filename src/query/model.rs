//! Query model
//!
//! A [`Query`] is one declarative measurement over the note corpus: a kind
//! (tag, front-matter field, wiki link, text pattern) and a target. Queries
//! are compared by `(kind, target)` only; the numeric id is an opaque handle.
//!
//! # Sub-indexed targets
//!
//! ```text
//! scores[1]   →  parent_target = "scores", sub_index = 1
//! weight      →  parent_target = None,     sub_index = None
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

static SUB_INDEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?P<value>[0-9]+)\]").expect("sub-index pattern is valid"));

/// Where a query looks for evidence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Structured tag list plus `#tag` occurrences in the content
    #[serde(rename = "tag")]
    Tag,
    /// A key of the front-matter map
    #[serde(rename = "frontmatter")]
    Frontmatter,
    /// Outbound wiki links
    #[serde(rename = "wiki")]
    WikiLink,
    /// A regular expression run against the content
    #[serde(rename = "text")]
    Text,
}

/// Unrecognized query kind name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown query kind: {0}")]
pub struct UnknownQueryKind(pub String);

impl std::str::FromStr for QueryKind {
    type Err = UnknownQueryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tag" => Ok(Self::Tag),
            "frontmatter" => Ok(Self::Frontmatter),
            "wiki" | "wikilink" => Ok(Self::WikiLink),
            "text" => Ok(Self::Text),
            _ => Err(UnknownQueryKind(s.to_string())),
        }
    }
}

impl QueryKind {
    /// Parse from the textual names used in tracker configuration
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Whether extraction for this kind needs the raw document content
    pub fn needs_content(&self) -> bool {
        matches!(self, Self::Tag | Self::Text)
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag => write!(f, "tag"),
            Self::Frontmatter => write!(f, "frontmatter"),
            Self::WikiLink => write!(f, "wiki"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// An immutable measurement description
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    id: usize,
    kind: QueryKind,
    target: String,
    parent_target: Option<String>,
    sub_index: Option<usize>,
}

impl Query {
    /// Create a query, deriving the parent target and sub-index from a
    /// bracketed index in `target` if one is present
    pub fn new(id: usize, kind: QueryKind, target: impl Into<String>) -> Self {
        let target = target.into();

        let sub_index = SUB_INDEX_PATTERN
            .captures(&target)
            .and_then(|caps| caps.name("value"))
            .and_then(|m| m.as_str().parse::<usize>().ok());

        let parent_target =
            sub_index.map(|_| SUB_INDEX_PATTERN.replace_all(&target, "").into_owned());

        Self {
            id,
            kind,
            target,
            parent_target,
            sub_index,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Target with the bracket expression removed, if it had one
    pub fn parent_target(&self) -> Option<&str> {
        self.parent_target.as_deref()
    }

    pub fn sub_index(&self) -> Option<usize> {
        self.sub_index
    }

    /// Identity comparison on `(kind, target)`; ids are ignored
    pub fn equal_to(&self, other: &Query) -> bool {
        self.kind == other.kind && self.target == other.target
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Query {}

impl Hash for Query {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.target.hash(state);
    }
}

fn default_weight() -> f64 {
    1.0
}

/// Per-query extraction and transform options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryOptions {
    /// Value contributed per match when no attached value is used
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Count `#tag:7` as a plain match instead of reading `7`
    #[serde(default)]
    pub ignore_attached_value: bool,

    /// Drop attached values equal to zero
    #[serde(default)]
    pub ignore_zero_value: bool,

    /// Substitute this value into days without data
    #[serde(default)]
    pub gap_value: Option<f64>,

    /// Turn the series into its running sum
    #[serde(default)]
    pub accumulate: bool,

    /// Dataset name handed to the renderer
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            ignore_attached_value: false,
            ignore_zero_value: false,
            gap_value: None,
            accumulate: false,
            name: None,
        }
    }
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the per-match weight
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn ignore_attached_value(mut self, ignore: bool) -> Self {
        self.ignore_attached_value = ignore;
        self
    }

    pub fn ignore_zero_value(mut self, ignore: bool) -> Self {
        self.ignore_zero_value = ignore;
        self
    }

    /// Builder: fill days without data with `value`
    pub fn gap_value(mut self, value: f64) -> Self {
        self.gap_value = Some(value);
        self
    }

    pub fn accumulate(mut self, accumulate: bool) -> Self {
        self.accumulate = accumulate;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Declarative query description, as a caller would deserialize it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuerySpec {
    pub kind: QueryKind,
    pub target: String,
    #[serde(flatten)]
    pub options: QueryOptions,
}

impl QuerySpec {
    pub fn new(kind: QueryKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            options: QueryOptions::default(),
        }
    }

    /// Builder: replace the options
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}

/// A query together with its options
#[derive(Debug, Clone)]
pub struct QueryEntry {
    pub query: Query,
    pub options: QueryOptions,
}

/// The ordered set of queries for one tracking run
///
/// Ids are assigned in insertion order, starting at zero.
#[derive(Debug, Clone, Default)]
pub struct QuerySet {
    entries: Vec<QueryEntry>,
}

impl QuerySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from specs, assigning ids in list order
    pub fn from_specs(specs: impl IntoIterator<Item = QuerySpec>) -> Self {
        let mut set = Self::new();
        for spec in specs {
            set.push(spec.kind, spec.target, spec.options);
        }
        set
    }

    /// Add a query and return its id
    pub fn push(
        &mut self,
        kind: QueryKind,
        target: impl Into<String>,
        options: QueryOptions,
    ) -> usize {
        let id = self.entries.len();
        self.entries.push(QueryEntry {
            query: Query::new(id, kind, target),
            options,
        });
        id
    }

    /// Builder form of [`QuerySet::push`]
    pub fn with(mut self, kind: QueryKind, target: impl Into<String>, options: QueryOptions) -> Self {
        self.push(kind, target, options);
        self
    }

    pub fn get(&self, id: usize) -> Option<&QueryEntry> {
        self.entries.iter().find(|e| e.query.id() == id)
    }

    pub fn options(&self, id: usize) -> Option<&QueryOptions> {
        self.get(id).map(|e| &e.options)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_target_has_no_sub_index() {
        let query = Query::new(0, QueryKind::Frontmatter, "weight");

        assert_eq!(query.target(), "weight");
        assert_eq!(query.parent_target(), None);
        assert_eq!(query.sub_index(), None);
    }

    #[test]
    fn test_bracket_index_parsed() {
        let query = Query::new(3, QueryKind::Frontmatter, "expenses[1]");

        assert_eq!(query.id(), 3);
        assert_eq!(query.sub_index(), Some(1));
        assert_eq!(query.parent_target(), Some("expenses"));
        assert_eq!(query.target(), "expenses[1]");
    }

    #[test]
    fn test_first_bracket_wins() {
        let query = Query::new(0, QueryKind::Tag, "bp[2][0]");

        assert_eq!(query.sub_index(), Some(2));
        assert_eq!(query.parent_target(), Some("bp"));
    }

    #[test]
    fn test_malformed_bracket_ignored() {
        for target in ["score[]", "score[-1]", "score[a]", "score[99999999999999999999999]"] {
            let query = Query::new(0, QueryKind::Frontmatter, target);
            assert_eq!(query.sub_index(), None, "target {}", target);
            assert_eq!(query.parent_target(), None, "target {}", target);
        }
    }

    #[test]
    fn test_equality_ignores_id() {
        let a = Query::new(0, QueryKind::Tag, "mood");
        let b = Query::new(7, QueryKind::Tag, "mood");
        let c = Query::new(0, QueryKind::Text, "mood");
        let d = Query::new(0, QueryKind::Tag, "sleep");

        assert!(a.equal_to(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!(QueryKind::parse("tag"), Some(QueryKind::Tag));
        assert_eq!(QueryKind::parse("Frontmatter"), Some(QueryKind::Frontmatter));
        assert_eq!(QueryKind::parse("wiki"), Some(QueryKind::WikiLink));
        assert_eq!(QueryKind::parse(" text "), Some(QueryKind::Text));
        assert_eq!(QueryKind::parse("dvField"), None);

        assert_eq!("WikiLink".parse::<QueryKind>(), Ok(QueryKind::WikiLink));
        let err = "dvField".parse::<QueryKind>().unwrap_err();
        assert_eq!(err, UnknownQueryKind("dvField".to_string()));
        assert_eq!(err.to_string(), "Unknown query kind: dvField");

        assert_eq!(QueryKind::WikiLink.to_string(), "wiki");
        assert!(QueryKind::Tag.needs_content());
        assert!(!QueryKind::Frontmatter.needs_content());
    }

    #[test]
    fn test_query_set_assigns_ids() {
        let set = QuerySet::new()
            .with(QueryKind::Tag, "mood", QueryOptions::default())
            .with(QueryKind::WikiLink, "Gym", QueryOptions::new().weight(2.0));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().query.target(), "Gym");
        assert_eq!(set.options(1).unwrap().weight, 2.0);
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_spec_deserialization_defaults() {
        let json = r#"[
            {"kind": "tag", "target": "exercise"},
            {"kind": "frontmatter", "target": "scores[1]", "gap_value": 0.0, "accumulate": true}
        ]"#;
        let specs: Vec<QuerySpec> = serde_json::from_str(json).unwrap();
        let set = QuerySet::from_specs(specs);

        let first = set.get(0).unwrap();
        assert_eq!(first.options.weight, 1.0);
        assert!(!first.options.ignore_attached_value);

        let second = set.get(1).unwrap();
        assert_eq!(second.query.sub_index(), Some(1));
        assert_eq!(second.options.gap_value, Some(0.0));
        assert!(second.options.accumulate);
    }
}
