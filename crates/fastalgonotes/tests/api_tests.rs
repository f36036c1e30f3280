//! Tests for the parallel sorter builder.

use fastalgonotes::prelude::*;

#[test]
fn test_builder_defaults() {
    let sorter = ParMergeSort::new().build().unwrap();
    assert_eq!(sorter.sequential_cutoff, DEFAULT_SEQUENTIAL_CUTOFF);
}

#[test]
fn test_zero_cutoff_rejected() {
    let err = ParMergeSort::new().sequential_cutoff(0).build().unwrap_err();
    assert_eq!(err, AlgoError::InvalidCutoff(0));
}

#[test]
fn test_duplicate_cutoff_rejected() {
    let err = ParMergeSort::new()
        .sequential_cutoff(8)
        .sequential_cutoff(16)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        AlgoError::DuplicateParameter {
            parameter: "sequential_cutoff"
        }
    );
}

#[test]
fn test_core_prelude_is_reexported() {
    // One import serves both crates: the sequential API rides along.
    let report = MergeSort::new().build().unwrap().sort(&[2, 1]).unwrap();
    assert_eq!(report.values, vec![1, 2]);
    assert_eq!(sort(&[9, 8, 7]), vec![7, 8, 9]);
}
