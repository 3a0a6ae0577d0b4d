// Split value objects: the caller-owned configuration the engine resolves.

use serde::{Deserialize, Serialize};

/// Sort direction for a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ascending")]
    Ascending,
    #[serde(rename = "descending")]
    Descending,
}

/// A sort directive: which expression to order by, and in which direction.
///
/// Equality is structural; normalization steps compare proposed vs. current
/// sort to decide whether anything actually changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub by: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(by: impl Into<String>, direction: SortDirection) -> Self {
        SortSpec {
            by: by.into(),
            direction,
        }
    }

    /// Ascending sort on the given expression.
    pub fn ascending(by: impl Into<String>) -> Self {
        SortSpec::new(by, SortDirection::Ascending)
    }

    /// Descending sort on the given expression.
    pub fn descending(by: impl Into<String>) -> Self {
        SortSpec::new(by, SortDirection::Descending)
    }
}

/// A continuous-range grouping transform applied to a split.
///
/// A split carrying one of these is "bucketed": its groups are ranges
/// (time intervals, numeric bins) rather than discrete category values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Bucket {
    /// Time bucketing at a named granularity (e.g. "PT1H", "P1D").
    Time(String),
    /// Numeric binning with a fixed bin size.
    Number(f64),
}

/// Grouping by one dimension's values, with optional sort and top-N limit.
///
/// Immutable: the `with_*` methods return a new value and leave `self`
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Reference to the dimension expression this split groups by.
    pub expression: String,
    pub sort: Option<SortSpec>,
    pub limit: Option<u32>,
    pub bucket: Option<Bucket>,
}

impl Split {
    /// An unbucketed, unsorted, unlimited split on the given expression.
    pub fn from_expression(expression: impl Into<String>) -> Self {
        Split {
            expression: expression.into(),
            sort: None,
            limit: None,
            bucket: None,
        }
    }

    pub fn with_bucket(mut self, bucket: Bucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn without_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    /// True if a grouping transform (time bucketing, numeric binning) applies.
    pub fn is_bucketed(&self) -> bool {
        self.bucket.is_some()
    }
}

/// An ordered sequence of splits. Order encodes nesting precedence and is
/// significant to the rendering layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitSet(Vec<Split>);

impl SplitSet {
    pub fn empty() -> Self {
        SplitSet(Vec::new())
    }

    /// A set with exactly one split.
    pub fn of(split: Split) -> Self {
        SplitSet(vec![split])
    }

    pub fn from_vec(splits: Vec<Split>) -> Self {
        SplitSet(splits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Split> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&Split> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Split> {
        self.0.iter()
    }

    /// True if any split in the set is bucketed.
    pub fn has_bucketed(&self) -> bool {
        self.0.iter().any(|s| s.is_bucketed())
    }

    /// The first bucketed split, if any.
    pub fn first_bucketed(&self) -> Option<&Split> {
        self.0.iter().find(|s| s.is_bucketed())
    }
}
