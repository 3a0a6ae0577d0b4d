//! Shared normalization steps used by visualization resolvers.
//!
//! Every step is a pure function returning the (possibly replaced) value plus
//! an explicit `changed` flag. Resolvers OR the flags together to decide
//! between a `Ready` and an `Automatic` verdict, so each step's contribution
//! is auditable on its own.

use crate::cube::{DataCube, Dimension};
use crate::split::{SortSpec, Split};
use crate::verdict::ColorEncoding;

/// The sort a continuous dimension prefers: its declared sort strategy when
/// present and not "self", else its own value. Always ascending.
pub fn preferred_sort(dimension: &Dimension) -> SortSpec {
    match dimension.sort_strategy.as_deref() {
        Some(strategy) if strategy != "self" => SortSpec::ascending(strategy),
        _ => SortSpec::ascending(&dimension.name),
    }
}

/// Replace the split's sort if it differs from `sort`.
pub fn apply_sort(split: &Split, sort: SortSpec) -> (Split, bool) {
    if split.sort.as_ref() == Some(&sort) {
        (split.clone(), false)
    } else {
        (split.clone().with_sort(sort), true)
    }
}

/// Drop the split's limit when its dimension is time-kind. Time buckets are
/// enumerated exhaustively; a top-N cap over them is meaningless.
pub fn clear_time_limit(split: &Split, dimension: &Dimension) -> (Split, bool) {
    if split.limit.is_some() && dimension.is_time() {
        (split.clone().without_limit(), true)
    } else {
        (split.clone(), false)
    }
}

/// Give an unsorted split the cube's default sort.
pub fn ensure_default_sort(split: &Split, cube: &DataCube) -> (Split, bool) {
    if split.sort.is_none() {
        (split.clone().with_sort(cube.default_sort_spec()), true)
    } else {
        (split.clone(), false)
    }
}

/// Recompute the color encoding when it is absent or points at a different
/// dimension than the color split does.
pub fn ensure_color_encoding(
    current: Option<&ColorEncoding>,
    color_dimension: &Dimension,
    limit: u32,
) -> (ColorEncoding, bool) {
    match current {
        Some(colors) if colors.dimension == color_dimension.name => (colors.clone(), false),
        _ => (
            ColorEncoding::from_limit(&color_dimension.name, limit),
            true,
        ),
    }
}

/// Choose the primary (axis) split and the color split from a two-split set.
///
/// Exactly one bucketed split makes it the primary. When both are bucketed
/// the time-kind one wins the tie-break; otherwise the first keeps its spot.
pub fn pick_primary<'a>(
    first: &'a Split,
    second: &'a Split,
    cube: &DataCube,
) -> (&'a Split, &'a Split) {
    match (first.is_bucketed(), second.is_bucketed()) {
        (true, false) => (first, second),
        (false, true) => (second, first),
        _ => {
            if !cube.expect_dimension(first).is_time() && cube.expect_dimension(second).is_time() {
                (second, first)
            } else {
                (first, second)
            }
        }
    }
}
