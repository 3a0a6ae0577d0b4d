// End-to-end resolution scenarios over the public API, plus the engine's
// structural guarantees: totality, determinism, and idempotent normalization.

use vizresolve::{
    Bucket, ColorEncoding, DataCube, Dimension, Manifest, SortSpec, Split, SplitSet, Verdict,
};

fn wiki_cube() -> DataCube {
    DataCube::new(
        "wiki",
        vec![
            Dimension::time("time", "Time"),
            Dimension::categorical("channel", "Channel"),
            Dimension::categorical("page", "Page"),
            Dimension::numeric("delta", "Delta", true),
        ],
        SortSpec::descending("count"),
    )
}

fn flat_cube() -> DataCube {
    DataCube::new(
        "flat",
        vec![
            Dimension::categorical("channel", "Channel"),
            Dimension::categorical("page", "Page"),
        ],
        SortSpec::descending("count"),
    )
}

fn time_split() -> Split {
    Split::from_expression("$time").with_bucket(Bucket::Time("P1D".into()))
}

#[test]
fn test_empty_cube_is_never() {
    let manifest = Manifest::line_chart().unwrap();
    let verdict = manifest.evaluate(&SplitSet::empty(), &flat_cube(), None, false);
    assert_eq!(verdict, Verdict::Never);
}

#[test]
fn test_zero_splits_suggests_bucketable_dimensions() {
    let manifest = Manifest::line_chart().unwrap();
    let verdict = manifest.evaluate(&SplitSet::empty(), &wiki_cube(), None, false);
    let Verdict::Manual {
        score, suggestions, ..
    } = verdict
    else {
        panic!("expected manual verdict, got {:?}", verdict);
    };
    assert_eq!(score, 3);
    // One suggestion per bucketable dimension, in cube order.
    assert_eq!(suggestions.len(), 2);
    assert_eq!(
        suggestions[0].adjustment.splits,
        SplitSet::of(Split::from_expression("$time"))
    );
    assert_eq!(
        suggestions[1].adjustment.splits,
        SplitSet::of(Split::from_expression("$delta"))
    );
}

#[test]
fn test_descending_limited_time_split_auto_normalizes() {
    let manifest = Manifest::line_chart().unwrap();
    let splits = SplitSet::of(
        time_split()
            .with_sort(SortSpec::descending("time"))
            .with_limit(10),
    );
    let verdict = manifest.evaluate(&splits, &wiki_cube(), None, false);
    let Verdict::Automatic { score, adjustment } = verdict else {
        panic!("expected automatic verdict, got {:?}", verdict);
    };
    assert_eq!(score, 10);
    assert_eq!(adjustment.splits.len(), 1);
    let fixed = adjustment.splits.first().unwrap();
    assert_eq!(fixed.sort, Some(SortSpec::ascending("time")));
    assert_eq!(fixed.limit, None);
}

#[test]
fn test_active_normalized_time_split_is_ready() {
    let manifest = Manifest::line_chart().unwrap();
    let splits = SplitSet::of(time_split().with_sort(SortSpec::ascending("time")));
    let verdict = manifest.evaluate(&splits, &wiki_cube(), None, true);
    assert_eq!(verdict, Verdict::ready(10));
}

#[test]
fn test_category_plus_time_becomes_colored_line_chart() {
    let manifest = Manifest::line_chart().unwrap();
    let splits = SplitSet::from_vec(vec![Split::from_expression("$channel"), time_split()]);
    let verdict = manifest.evaluate(&splits, &wiki_cube(), None, false);
    let Verdict::Automatic { score, adjustment } = verdict else {
        panic!("expected automatic verdict, got {:?}", verdict);
    };
    assert!(score >= 8);
    // Color split first, primary second.
    assert_eq!(adjustment.splits.get(0).unwrap().expression, "$channel");
    assert_eq!(adjustment.splits.get(1).unwrap().expression, "$time");
    assert_eq!(
        adjustment.colors,
        Some(ColorEncoding::from_limit("channel", 5))
    );
}

#[test]
fn test_three_bucketed_splits_suggest_keeping_first() {
    let manifest = Manifest::line_chart().unwrap();
    let splits = SplitSet::from_vec(vec![
        time_split(),
        Split::from_expression("$delta").with_bucket(Bucket::Number(10.0)),
        Split::from_expression("$delta").with_bucket(Bucket::Number(100.0)),
    ]);
    let verdict = manifest.evaluate(&splits, &wiki_cube(), None, false);
    let Verdict::Manual {
        score,
        message,
        suggestions,
    } = verdict
    else {
        panic!("expected manual verdict, got {:?}", verdict);
    };
    assert_eq!(score, 3);
    assert!(message.contains("Too many splits"));
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].adjustment.splits, SplitSet::of(time_split()));
}

// Every shape of input gets exactly one verdict; nothing panics for
// well-formed splits.
#[test]
fn test_totality_over_configuration_shapes() {
    let manifest = Manifest::line_chart().unwrap();
    let cube = wiki_cube();
    let colors = ColorEncoding::from_limit("channel", 5);

    let splits_of_interest: Vec<Split> = vec![
        Split::from_expression("$channel"),
        Split::from_expression("$page").with_limit(50),
        time_split(),
        time_split().with_sort(SortSpec::descending("time")).with_limit(5),
        Split::from_expression("$delta").with_bucket(Bucket::Number(10.0)),
    ];

    let mut shapes: Vec<SplitSet> = vec![SplitSet::empty()];
    for a in &splits_of_interest {
        shapes.push(SplitSet::of(a.clone()));
        for b in &splits_of_interest {
            shapes.push(SplitSet::from_vec(vec![a.clone(), b.clone()]));
            shapes.push(SplitSet::from_vec(vec![a.clone(), b.clone(), a.clone()]));
        }
    }

    for splits in &shapes {
        for colors in [None, Some(&colors)] {
            for is_active in [false, true] {
                // Must not panic; any verdict counts.
                let _ = manifest.evaluate(splits, &cube, colors, is_active);
            }
        }
    }
}

#[test]
fn test_determinism() {
    let manifest = Manifest::line_chart().unwrap();
    let cube = wiki_cube();
    let splits = SplitSet::from_vec(vec![Split::from_expression("$channel"), time_split()]);
    let colors = ColorEncoding::from_limit("page", 7);

    let first = manifest.evaluate(&splits, &cube, Some(&colors), false);
    let second = manifest.evaluate(&splits, &cube, Some(&colors), false);
    assert_eq!(first, second);
}

// Applying an Automatic verdict's adjustment and re-resolving must land on
// Ready with an equal or higher score: normalized configs stay normalized.
#[test]
fn test_normalization_is_idempotent() {
    let manifest = Manifest::line_chart().unwrap();
    let cube = wiki_cube();

    let starting_points = vec![
        (
            SplitSet::of(time_split().with_sort(SortSpec::descending("time")).with_limit(10)),
            None,
        ),
        (
            SplitSet::from_vec(vec![Split::from_expression("$channel"), time_split()]),
            None,
        ),
        (
            SplitSet::from_vec(vec![time_split(), Split::from_expression("$page")]),
            Some(ColorEncoding::from_limit("channel", 5)),
        ),
    ];

    for (splits, colors) in starting_points {
        let verdict = manifest.evaluate(&splits, &cube, colors.as_ref(), false);
        let Verdict::Automatic { score, adjustment } = verdict else {
            panic!("expected automatic verdict for {:?}", splits);
        };
        let revisited =
            manifest.evaluate(&adjustment.splits, &cube, adjustment.colors.as_ref(), false);
        match revisited {
            Verdict::Ready { score: rescore } => assert!(rescore >= score),
            other => panic!("expected ready after applying adjustment, got {:?}", other),
        }
    }
}

// A bucketed time split in any renderable output carries no limit and an
// ascending sort.
#[test]
fn test_time_splits_in_output_have_no_limit_and_ascend() {
    let manifest = Manifest::line_chart().unwrap();
    let cube = wiki_cube();
    let inputs = vec![
        SplitSet::of(time_split().with_limit(3)),
        SplitSet::from_vec(vec![
            Split::from_expression("$channel").with_limit(20),
            time_split().with_sort(SortSpec::descending("time")).with_limit(3),
        ]),
    ];

    for splits in inputs {
        let verdict = manifest.evaluate(&splits, &cube, None, false);
        let Verdict::Automatic { adjustment, .. } = verdict else {
            panic!("expected automatic verdict");
        };
        for split in adjustment.splits.iter() {
            let dimension = cube.dimension_by_expression(&split.expression).unwrap();
            if split.is_bucketed() && dimension.is_time() {
                assert_eq!(split.limit, None);
                assert_eq!(split.sort, Some(SortSpec::ascending(&dimension.name)));
            }
        }
    }
}
