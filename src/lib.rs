//! Configuration-resolution engine for visualizations.
//!
//! Given the splits a user has configured, the dimension metadata of the data
//! cube they are exploring, an optional color encoding, and whether the
//! visualization is currently on screen, the engine decides whether a
//! visualization type can render the configuration as-is ([`Verdict::Ready`]),
//! after automatic normalization ([`Verdict::Automatic`]), only after manual
//! fixes ([`Verdict::Manual`]), or not at all ([`Verdict::Never`]).
//!
//! Resolution is a pure function: immutable inputs in, a fresh verdict out,
//! no I/O, safe to call concurrently.

pub mod cube;
pub mod line_chart;
pub mod manifest;
pub mod normalize;
pub mod rules;
pub mod split;
pub mod verdict;

pub use cube::{DataCube, Dimension, DimensionKind};
pub use line_chart::{line_chart_rules, line_chart_rules_with, ScoreWeights};
pub use manifest::Manifest;
pub use rules::{RuleTable, RuleTableBuilder};
pub use split::{Bucket, SortDirection, SortSpec, Split, SplitSet};
pub use verdict::{Adjustment, ColorEncoding, Suggestion, Verdict};
