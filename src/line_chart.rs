//! Line-chart resolution rules.
//!
//! The line chart draws one series per color value along a continuous
//! (bucketed) axis, so its rules revolve around finding exactly one bucketed
//! split to serve as that axis:
//!
//! 1. No bucketable dimension in the cube at all -> `Never`.
//! 2. No splits -> `Manual`, suggest a split per bucketable dimension.
//! 3. One bucketed split -> normalize sort/limit, score it.
//! 4. Two splits with a bucketed one -> pick primary vs. color, normalize both.
//! 5. Bucketed split in any other shape -> `Manual`, suggest dropping extras.
//! 6. Fallback (splits but none bucketed) -> `Manual`, suggest re-splitting.
//!
//! Rule order is load-bearing: each resolver assumes every earlier predicate
//! returned false.

use anyhow::Result;

use crate::cube::DataCube;
use crate::normalize::{
    apply_sort, clear_time_limit, ensure_color_encoding, ensure_default_sort, pick_primary,
    preferred_sort,
};
use crate::rules::RuleTable;
use crate::split::{SortSpec, Split, SplitSet};
use crate::verdict::{Adjustment, ColorEncoding, Suggestion, Verdict};

/// Scoring constants for the line-chart rules.
///
/// These are tuning parameters, not invariants: adjusting them reorders how
/// visualizations rank against each other without touching the rule logic.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Score attached to every `Manual` verdict.
    pub manual: u32,
    pub single_base: u32,
    pub single_bucketable_bonus: u32,
    pub single_time_bonus: u32,
    /// Score a currently-rendering single-split configuration is forced to.
    pub active: u32,
    pub pair_base: u32,
    pub pair_bucketable_bonus: u32,
    pub pair_time_bonus: u32,
    pub pair_unchanged_bonus: u32,
    /// Top-K cap assigned when a color encoding is recomputed.
    pub color_limit: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            manual: 3,
            single_base: 5,
            single_bucketable_bonus: 2,
            single_time_bonus: 3,
            active: 10,
            pair_base: 4,
            pair_bucketable_bonus: 2,
            pair_time_bonus: 2,
            pair_unchanged_bonus: 2,
            color_limit: 5,
        }
    }
}

/// Build the line-chart rule table with default scoring.
pub fn line_chart_rules() -> Result<RuleTable> {
    line_chart_rules_with(ScoreWeights::default())
}

/// Build the line-chart rule table with the given scoring weights.
pub fn line_chart_rules_with(weights: ScoreWeights) -> Result<RuleTable> {
    RuleTable::builder()
        .when(|_, cube| cube.bucketable_dimensions().next().is_none())
        .then(|_, _, _, _| Verdict::Never)
        .when(|splits, _| splits.is_empty())
        .then(move |_, cube, _, _| {
            Verdict::manual(
                weights.manual,
                "This visualization requires a continuous dimension split",
                cube.bucketable_dimensions()
                    .map(|dimension| {
                        Suggestion::new(
                            format!("Add a split on {}", dimension.title),
                            Adjustment::splits_only(SplitSet::of(Split::from_expression(
                                &dimension.expression,
                            ))),
                        )
                    })
                    .collect(),
            )
        })
        .when(|splits, _| splits.len() == 1 && splits.first().is_some_and(|s| s.is_bucketed()))
        .then(move |splits, cube, colors, is_active| {
            resolve_single_split(splits, cube, colors, is_active, weights)
        })
        .when(|splits, _| splits.len() == 2 && splits.has_bucketed())
        .then(move |splits, cube, colors, _| resolve_two_splits(splits, cube, colors, weights))
        .when(|splits, _| splits.has_bucketed())
        .then(move |splits, _, _, _| {
            let first_bucketed = splits
                .first_bucketed()
                .expect("too-many-splits rule requires a bucketed split");
            Verdict::manual(
                weights.manual,
                "Too many splits on the line chart",
                vec![Suggestion::new(
                    "Remove all but the first bucketed split",
                    Adjustment::splits_only(SplitSet::of(first_bucketed.clone())),
                )],
            )
        })
        .otherwise(move |_, cube, _, _| {
            Verdict::manual(
                weights.manual,
                "The line chart needs one bucketed split",
                cube.bucketable_dimensions()
                    .map(|dimension| {
                        Suggestion::new(
                            format!("Split on {} instead", dimension.title),
                            Adjustment::splits_only(SplitSet::of(Split::from_expression(
                                &dimension.expression,
                            ))),
                        )
                    })
                    .collect(),
            )
        })
        .build()
}

fn resolve_single_split(
    splits: &SplitSet,
    cube: &DataCube,
    colors: Option<&ColorEncoding>,
    is_active: bool,
    weights: ScoreWeights,
) -> Verdict {
    let split = splits
        .first()
        .expect("single-split rule requires one split");
    let dimension = cube.expect_dimension(split);

    let (split, sort_changed) = apply_sort(split, preferred_sort(dimension));
    let (split, limit_changed) = clear_time_limit(&split, dimension);
    // A lone-split line chart has no color series; an encoding on the way in
    // is itself a change (it gets dropped).
    let changed = sort_changed || limit_changed || colors.is_some();

    let mut score = weights.single_base;
    if dimension.can_bucket_by_default() {
        score += weights.single_bucketable_bonus;
    }
    if dimension.is_time() {
        score += weights.single_time_bonus;
    }
    if is_active {
        score = weights.active;
    }

    if !changed {
        Verdict::ready(score)
    } else {
        Verdict::automatic(score, Adjustment::splits_only(SplitSet::of(split)))
    }
}

fn resolve_two_splits(
    splits: &SplitSet,
    cube: &DataCube,
    colors: Option<&ColorEncoding>,
    weights: ScoreWeights,
) -> Verdict {
    let first = splits.get(0).expect("two-split rule requires two splits");
    let second = splits.get(1).expect("two-split rule requires two splits");
    let (primary, color_split) = pick_primary(first, second, cube);
    let primary_dimension = cube.expect_dimension(primary);

    let (primary, sort_changed) = apply_sort(primary, SortSpec::ascending(&primary_dimension.name));
    let (primary, limit_changed) = clear_time_limit(&primary, primary_dimension);
    let (color_split, color_sort_changed) = ensure_default_sort(color_split, cube);
    let color_dimension = cube.expect_dimension(&color_split);
    let (colors, colors_changed) =
        ensure_color_encoding(colors, color_dimension, weights.color_limit);
    let changed = sort_changed || limit_changed || color_sort_changed || colors_changed;

    let mut score = weights.pair_base;
    if primary_dimension.can_bucket_by_default() {
        score += weights.pair_bucketable_bonus;
    }
    if primary_dimension.is_time() {
        score += weights.pair_time_bonus;
    }
    if !changed {
        return Verdict::ready(score + weights.pair_unchanged_bonus);
    }

    // Color split first, primary split second: the rendering layer relies on
    // this ordering.
    Verdict::automatic(
        score,
        Adjustment::with_colors(SplitSet::from_vec(vec![color_split, primary]), colors),
    )
}
