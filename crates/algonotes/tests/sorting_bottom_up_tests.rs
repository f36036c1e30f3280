#![cfg(feature = "dev")]
//! Tests for the iterative (bottom-up) merge sort driver.
//!
//! These tests verify:
//! - Pass accounting (one level per width doubling)
//! - The strictly-ascending fast path
//! - Correct handling of non-power-of-two lengths and stray tail runs

use core::cmp::Ordering;

use algonotes::internals::sorting::bottom_up;

fn ord(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

#[test]
fn test_empty_and_singleton() {
    let (values, stats) = bottom_up::sort_by::<i32, _>(&[], &mut ord);
    assert!(values.is_empty());
    assert_eq!(stats.levels, 0);

    let (values, stats) = bottom_up::sort_by(&[7], &mut ord);
    assert_eq!(values, vec![7]);
    assert_eq!(stats.levels, 0);
    assert_eq!(stats.comparisons, 0);
}

#[test]
fn test_pass_count_doubles_width() {
    // n = 4 needs two passes (widths 1 and 2).
    let (_, stats) = bottom_up::sort_by(&[4, 3, 2, 1], &mut ord);
    assert_eq!(stats.levels, 2);

    // n = 5 needs three (widths 1, 2, 4).
    let (_, stats) = bottom_up::sort_by(&[5, 4, 3, 2, 1], &mut ord);
    assert_eq!(stats.levels, 3);
}

#[test]
fn test_fast_path_on_sorted_input() {
    let (values, stats) = bottom_up::sort_by(&[1, 2, 3], &mut ord);
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(stats.comparisons, 2);
    assert_eq!(stats.levels, 0);
}

#[test]
fn test_odd_length_tail_run() {
    // The final run of width < 2w must survive each pass untouched.
    let (values, _) = bottom_up::sort_by(&[9, 7, 5, 3, 1, 8, 6], &mut ord);
    assert_eq!(values, vec![1, 3, 5, 6, 7, 8, 9]);
}

#[test]
fn test_large_reverse_input() {
    let input: Vec<i32> = (0..500).rev().collect();
    let (values, stats) = bottom_up::sort_by(&input, &mut ord);
    let expected: Vec<i32> = (0..500).collect();
    assert_eq!(values, expected);
    // ceil(log2 500) = 9 passes.
    assert_eq!(stats.levels, 9);
}
