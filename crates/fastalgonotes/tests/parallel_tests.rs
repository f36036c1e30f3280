//! Tests for the parallel merge sorter.
//!
//! The contract under test: parallel execution is an optimization, never a
//! semantic change. Every output must match the sequential `algonotes`
//! sorter element for element, including tie-break order.

use approx::assert_relative_eq;

use fastalgonotes::prelude::*;

fn par(cutoff: usize) -> ParSorter {
    ParMergeSort::new()
        .sequential_cutoff(cutoff)
        .build()
        .unwrap()
}

// ============================================================================
// Agreement With the Sequential Sorter
// ============================================================================

#[test]
fn test_matches_sequential_across_sizes_and_cutoffs() {
    let sizes = [0usize, 1, 2, 3, 10, 100, 1000];
    let cutoffs = [1usize, 2, 16, 4096];

    for &n in &sizes {
        // Deterministic scrambled input.
        let input: Vec<i64> = (0..n as i64).map(|i| (i * 37) % 101).collect();
        let expected = sort(&input);

        for &cutoff in &cutoffs {
            let got = par(cutoff).sort(&input).unwrap();
            assert_eq!(got, expected, "n={n}, cutoff={cutoff}");
        }
    }
}

#[test]
fn test_tie_break_preserved_under_parallelism() {
    let records: Vec<(i32, usize)> = (0..64).map(|i| ((i % 4) as i32, i)).collect();
    let by_key = |l: &(i32, usize), r: &(i32, usize)| l.0.cmp(&r.0);

    let sequential = MergeSort::new()
        .build()
        .unwrap()
        .sort_by(&records, by_key)
        .unwrap()
        .into_values();

    for cutoff in [1, 3, 8, 128] {
        let parallel = par(cutoff).sort_by(&records, by_key).unwrap();
        assert_eq!(parallel, sequential, "cutoff={cutoff}");
    }
}

#[test]
fn test_deterministic_across_runs() {
    let input: Vec<i32> = (0..512).map(|i| (i * 13) % 64).collect();
    let sorter = par(4);
    let first = sorter.sort(&input).unwrap();
    let second = sorter.sort(&input).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Cutoff Behavior
// ============================================================================

#[test]
fn test_cutoff_larger_than_input_is_fully_sequential() {
    let input = vec![5, 1, 4, 2, 3];
    let got = par(1000).sort(&input).unwrap();
    assert_eq!(got, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_minimum_cutoff_splits_to_singletons() {
    let input: Vec<i32> = (0..33).rev().collect();
    let got = par(1).sort(&input).unwrap();
    let expected: Vec<i32> = (0..33).collect();
    assert_eq!(got, expected);
}

// ============================================================================
// Partial Orders
// ============================================================================

#[test]
fn test_sort_partial_floats() {
    let input = vec![2.5, -1.0, 0.5, 2.5];
    let got = par(2).sort_partial(&input).unwrap();
    assert_eq!(got.len(), 4);
    assert_relative_eq!(got[0], -1.0);
    assert_relative_eq!(got[3], 2.5);
}

#[test]
fn test_sort_partial_rejects_nan_before_spawning() {
    let input = vec![1.0, 2.0, f64::NAN];
    assert_eq!(
        par(2).sort_partial(&input),
        Err(AlgoError::Incomparable { index: 2 })
    );
}
