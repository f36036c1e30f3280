//! Tests for the public sorting API.
//!
//! These tests exercise the fluent builder and the one-shot free functions
//! through the prelude only:
//! - Builder defaults, duplicate detection, and parameter validation
//! - Sorting contract: permutation, non-decreasing output, idempotence
//! - Documented tie-break (right-side precedence on equality)
//! - Error paths: incomparable elements, recursion limit

use algonotes::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Assert `output` is a sorted permutation of `input`.
fn assert_sorted_permutation(input: &[i32], output: &[i32]) {
    assert_eq!(input.len(), output.len());
    assert!(output.windows(2).all(|w| w[0] <= w[1]), "not non-decreasing");

    let mut expected = input.to_vec();
    expected.sort_unstable();
    let mut got = output.to_vec();
    got.sort_unstable();
    assert_eq!(expected, got, "not a permutation");
}

fn both_sorters() -> Vec<Sorter> {
    vec![
        MergeSort::new().strategy(TopDown).build().unwrap(),
        MergeSort::new().strategy(BottomUp).build().unwrap(),
    ]
}

// ============================================================================
// Sorting Contract
// ============================================================================

#[test]
fn test_empty_input() {
    for sorter in both_sorters() {
        let report = sorter.sort::<i32>(&[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.values, Vec::<i32>::new());
    }
}

#[test]
fn test_single_element() {
    for sorter in both_sorters() {
        let report = sorter.sort(&[42]).unwrap();
        assert_eq!(report.values, vec![42]);
    }
}

#[test]
fn test_already_sorted_is_value_noop() {
    for sorter in both_sorters() {
        let report = sorter.sort(&[1, 2, 3]).unwrap();
        assert_eq!(report.values, vec![1, 2, 3]);
    }
}

#[test]
fn test_reverse_sorted() {
    for sorter in both_sorters() {
        let report = sorter.sort(&[3, 2, 1]).unwrap();
        assert_eq!(report.values, vec![1, 2, 3]);
    }
}

#[test]
fn test_duplicates_preserved_with_correct_count() {
    for sorter in both_sorters() {
        let report = sorter.sort(&[2, 1, 2, 1]).unwrap();
        assert_eq!(report.values, vec![1, 1, 2, 2]);
    }
}

#[test]
fn test_permutation_and_order_on_mixed_inputs() {
    let inputs: Vec<Vec<i32>> = vec![
        vec![],
        vec![7],
        vec![5, 5, 5, 5],
        vec![3, -1, 4, -1, 5, 9, -2, 6],
        (0..100).rev().collect(),
        vec![1, 3, 2, 3, 1, 2, 1, 3, 2],
    ];

    for sorter in both_sorters() {
        for input in &inputs {
            let report = sorter.sort(input).unwrap();
            assert_sorted_permutation(input, &report.values);
        }
    }
}

#[test]
fn test_idempotence() {
    for sorter in both_sorters() {
        let once = sorter.sort(&[4, 2, 7, 2, 9]).unwrap().into_values();
        let twice = sorter.sort(&once).unwrap().into_values();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_input_is_not_mutated() {
    let input = vec![3, 1, 2];
    let sorter = MergeSort::new().build().unwrap();
    let _ = sorter.sort(&input).unwrap();
    assert_eq!(input, vec![3, 1, 2]);
}

#[test]
fn test_strategies_agree_exactly() {
    let records = [(2, 'x'), (1, 'y'), (2, 'z'), (1, 'w'), (1, 'v')];
    let top = MergeSort::new().strategy(TopDown).build().unwrap();
    let bottom = MergeSort::new().strategy(BottomUp).build().unwrap();

    let by_key = |l: &(i32, char), r: &(i32, char)| l.0.cmp(&r.0);
    let a = top.sort_by(&records, by_key).unwrap().into_values();
    let b = bottom.sort_by(&records, by_key).unwrap().into_values();
    assert_eq!(a, b);
}

// ============================================================================
// Tie-Break
// ============================================================================

/// Right-side precedence on equality: equal keys come out in reverse of
/// their input order.
#[test]
fn test_tie_break_right_precedence() {
    let records = [(1, "a"), (1, "b")];
    for strategy in [TopDown, BottomUp] {
        let sorter = MergeSort::new().strategy(strategy).build().unwrap();
        let report = sorter.sort_by(&records, |l, r| l.0.cmp(&r.0)).unwrap();
        assert_eq!(report.values, vec![(1, "b"), (1, "a")]);
    }
}

#[test]
fn test_tie_break_full_reversal_within_groups() {
    let records = [(2, 'x'), (1, 'y'), (2, 'z'), (1, 'w')];
    let sorter = MergeSort::new().build().unwrap();
    let report = sorter.sort_by(&records, |l, r| l.0.cmp(&r.0)).unwrap();
    assert_eq!(
        report.values,
        vec![(1, 'w'), (1, 'y'), (2, 'z'), (2, 'x')]
    );
}

// ============================================================================
// One-Shot Functions
// ============================================================================

#[test]
fn test_sort_free_function() {
    assert_eq!(sort(&[3, 1, 2]), vec![1, 2, 3]);
    assert_eq!(sort::<i32>(&[]), Vec::<i32>::new());
}

#[test]
fn test_sort_partial_floats() {
    let values = [2.5, -1.0, 0.0, 2.5, 1.5];
    assert_eq!(sort_partial(&values).unwrap(), vec![-1.0, 0.0, 1.5, 2.5, 2.5]);
}

#[test]
fn test_sort_partial_rejects_nan() {
    let values = [1.0, f64::NAN, 2.0];
    assert_eq!(
        sort_partial(&values),
        Err(AlgoError::Incomparable { index: 1 })
    );
}

// ============================================================================
// Builder Validation
// ============================================================================

#[test]
fn test_builder_defaults() {
    let sorter = MergeSort::new().build().unwrap();
    assert_eq!(sorter.strategy, TopDown);
    assert!(!sorter.return_stats);
}

#[test]
fn test_duplicate_parameter_rejected() {
    let err = MergeSort::new()
        .strategy(TopDown)
        .strategy(BottomUp)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        AlgoError::DuplicateParameter {
            parameter: "strategy"
        }
    );
}

#[test]
fn test_zero_depth_limit_rejected() {
    let err = MergeSort::new().depth_limit(0).build().unwrap_err();
    assert_eq!(err, AlgoError::InvalidDepthLimit(0));
}

#[test]
fn test_recursion_limit_exceeded() {
    let data: Vec<i32> = (0..8).rev().collect();
    let sorter = MergeSort::new().depth_limit(2).build().unwrap();
    assert_eq!(
        sorter.sort(&data),
        Err(AlgoError::RecursionLimit { depth: 3, limit: 2 })
    );
}

#[test]
fn test_bottom_up_ignores_depth_limit() {
    // The iterative driver has no recursion to guard.
    let data: Vec<i32> = (0..1000).rev().collect();
    let sorter = MergeSort::new()
        .strategy(BottomUp)
        .depth_limit(1)
        .build()
        .unwrap();
    let report = sorter.sort(&data).unwrap();
    assert_eq!(report.values[0], 0);
    assert_eq!(report.values[999], 999);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_stats_absent_by_default() {
    let report = MergeSort::new().build().unwrap().sort(&[2, 1]).unwrap();
    assert_eq!(report.comparisons, None);
    assert_eq!(report.levels, None);
}

#[test]
fn test_stats_present_when_requested() {
    let report = MergeSort::new()
        .return_stats()
        .build()
        .unwrap()
        .sort(&[3, 1, 2])
        .unwrap();
    assert!(report.comparisons.is_some());
    assert!(report.levels.is_some());
    assert!(report.comparisons.unwrap() > 0);
}

#[test]
fn test_report_display_mentions_strategy() {
    let report = MergeSort::new()
        .strategy(BottomUp)
        .return_stats()
        .build()
        .unwrap()
        .sort(&[2, 1])
        .unwrap();
    let rendered = format!("{report}");
    assert!(rendered.contains("bottom-up"));
    assert!(rendered.contains("Elements: 2"));
}
