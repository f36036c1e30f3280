#![cfg(feature = "dev")]
//! Tests for the recursive (top-down) merge sort driver.
//!
//! These tests verify:
//! - Depth accounting and the recursion guard
//! - The strictly-ascending fast path
//! - Agreement with the bottom-up driver on every input shape

use core::cmp::Ordering;

use algonotes::internals::primitives::errors::AlgoError;
use algonotes::internals::sorting::{bottom_up, top_down};

fn ord(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

#[test]
fn test_two_elements() {
    let (values, stats) = top_down::sort_by(&[2, 1], 64, &mut ord).unwrap();
    assert_eq!(values, vec![1, 2]);
    // Fast-path scan (1) + one merge comparison.
    assert_eq!(stats.comparisons, 2);
    // Root plus the two singleton leaves.
    assert_eq!(stats.levels, 2);
}

#[test]
fn test_levels_for_power_of_two() {
    let (_, stats) = top_down::sort_by(&[4, 3, 2, 1], 64, &mut ord).unwrap();
    assert_eq!(stats.levels, 3);
}

#[test]
fn test_fast_path_on_sorted_input() {
    let (values, stats) = top_down::sort_by(&[1, 2, 3, 4], 64, &mut ord).unwrap();
    assert_eq!(values, vec![1, 2, 3, 4]);
    assert_eq!(stats.comparisons, 3);
    assert_eq!(stats.levels, 0);
}

#[test]
fn test_fast_path_skipped_for_equal_neighbours() {
    // Equal neighbours must run the full merge so the right-precedence
    // tie-break stays observable.
    let (_, stats) = top_down::sort_by(&[1, 1, 2], 64, &mut ord).unwrap();
    assert!(stats.levels > 0);
}

#[test]
fn test_recursion_guard() {
    let err = top_down::sort_by(&[3, 2, 1], 1, &mut ord).unwrap_err();
    assert_eq!(err, AlgoError::RecursionLimit { depth: 2, limit: 1 });
}

#[test]
fn test_depth_limit_exactly_sufficient() {
    // n = 4 needs three levels; a limit of 3 must succeed.
    let (values, _) = top_down::sort_by(&[4, 3, 2, 1], 3, &mut ord).unwrap();
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[test]
fn test_agrees_with_bottom_up() {
    let inputs: Vec<Vec<i32>> = vec![
        vec![],
        vec![1],
        vec![2, 1],
        vec![5, 5, 5],
        vec![9, 1, 8, 2, 7, 3, 6, 4, 5],
        (0..67).map(|i| (i * 31) % 17).collect(),
    ];

    for input in inputs {
        let (top, _) = top_down::sort_by(&input, 64, &mut ord).unwrap();
        let (bottom, _) = bottom_up::sort_by(&input, &mut ord);
        assert_eq!(top, bottom, "drivers disagree on {input:?}");
    }
}

#[test]
fn test_agrees_with_bottom_up_on_ties() {
    // With keys only compared, equal-key order is part of the contract.
    let records: Vec<(i32, usize)> = vec![(1, 0), (2, 1), (1, 2), (2, 3), (1, 4)];
    let mut by_key = |l: &(i32, usize), r: &(i32, usize)| l.0.cmp(&r.0);

    let (top, _) = top_down::sort_by(&records, 64, &mut by_key).unwrap();
    let (bottom, _) = bottom_up::sort_by(&records, &mut by_key);
    assert_eq!(top, bottom);

    // Equal keys in reverse input order.
    assert_eq!(top, vec![(1, 4), (1, 2), (1, 0), (2, 3), (2, 1)]);
}
