// Read-only dimension metadata consumed by the resolution rules.

use serde::{Deserialize, Serialize};

use crate::split::{SortSpec, Split};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionKind {
    #[serde(rename = "categorical")]
    Categorical,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "time")]
    Time,
}

/// Metadata for one queryable dimension of a data cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub title: String,
    /// The expression splits reference to group by this dimension.
    pub expression: String,
    pub kind: DimensionKind,
    /// True if this dimension gets a bucketing transform when split on
    /// without further configuration (time and binned-numeric dimensions).
    pub default_bucketing: bool,
    /// Preferred sort expression, or None/"self" to sort by own value.
    pub sort_strategy: Option<String>,
}

impl Dimension {
    /// A categorical dimension whose expression is `$name`.
    pub fn categorical(name: impl Into<String>, title: impl Into<String>) -> Self {
        let name = name.into();
        Dimension {
            expression: format!("${}", name),
            name,
            title: title.into(),
            kind: DimensionKind::Categorical,
            default_bucketing: false,
            sort_strategy: None,
        }
    }

    /// A time dimension, bucketable by default.
    pub fn time(name: impl Into<String>, title: impl Into<String>) -> Self {
        let name = name.into();
        Dimension {
            expression: format!("${}", name),
            name,
            title: title.into(),
            kind: DimensionKind::Time,
            default_bucketing: true,
            sort_strategy: None,
        }
    }

    /// A numeric dimension; `bucketable` marks binned-by-default metrics.
    pub fn numeric(name: impl Into<String>, title: impl Into<String>, bucketable: bool) -> Self {
        let name = name.into();
        Dimension {
            expression: format!("${}", name),
            name,
            title: title.into(),
            kind: DimensionKind::Numeric,
            default_bucketing: bucketable,
            sort_strategy: None,
        }
    }

    pub fn with_sort_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.sort_strategy = Some(strategy.into());
        self
    }

    pub fn can_bucket_by_default(&self) -> bool {
        self.default_bucketing
    }

    pub fn is_time(&self) -> bool {
        self.kind == DimensionKind::Time
    }
}

/// The capability surface the engine reads: an ordered dimension list plus a
/// cube-wide default sort. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCube {
    pub name: String,
    pub dimensions: Vec<Dimension>,
    pub default_sort: SortSpec,
}

impl DataCube {
    pub fn new(name: impl Into<String>, dimensions: Vec<Dimension>, default_sort: SortSpec) -> Self {
        DataCube {
            name: name.into(),
            dimensions,
            default_sort,
        }
    }

    pub fn dimension_by_expression(&self, expression: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.expression == expression)
    }

    /// Dimensions that get a bucketing transform by default, in cube order.
    pub fn bucketable_dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter().filter(|d| d.can_bucket_by_default())
    }

    pub fn default_sort_spec(&self) -> SortSpec {
        self.default_sort.clone()
    }

    /// The dimension a split references.
    ///
    /// Callers must validate splits against the cube before resolution; a
    /// split referencing an unknown expression is a contract violation.
    ///
    /// # Panics
    ///
    /// Panics if the split's expression is not a dimension of this cube.
    pub fn expect_dimension(&self, split: &Split) -> &Dimension {
        self.dimension_by_expression(&split.expression)
            .unwrap_or_else(|| {
                panic!(
                    "split references expression '{}' which is not a dimension of cube '{}'",
                    split.expression, self.name
                )
            })
    }
}
