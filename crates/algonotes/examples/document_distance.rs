//! Document Distance, End to End
//!
//! This example chains the study utilities into the classic document
//! distance pipeline:
//! - Tokenize two documents with an explicit translation table
//! - Count word frequencies into key-sorted vectors
//! - Take the sorted-order inner product to measure similarity
//!
//! It also demonstrates the configured sorter with diagnostics and the
//! memoized Fibonacci.

use algonotes::prelude::*;

fn main() -> Result<(), AlgoError> {
    println!("{}", "=".repeat(72));
    println!("algonotes - Study Algorithms in Action");
    println!("{}", "=".repeat(72));
    println!();

    example_1_sorting_with_stats()?;
    example_2_document_distance()?;
    example_3_memoized_fibonacci()?;

    Ok(())
}

/// Example 1: Configured sorting with diagnostics.
fn example_1_sorting_with_stats() -> Result<(), AlgoError> {
    println!("Example 1: Sorting with diagnostics");
    println!("{}", "-".repeat(72));

    let data = vec![9, 3, 7, 1, 8, 2, 6, 4, 5];

    let sorter = MergeSort::new()
        .strategy(TopDown)
        .return_stats()
        .build()?;

    let report = sorter.sort(&data)?;
    println!("{}", report);
    println!("Sorted: {:?}", report.values);
    println!();

    Ok(())
}

/// Example 2: Document distance via frequency vectors.
fn example_2_document_distance() -> Result<(), AlgoError> {
    println!("Example 2: Document distance");
    println!("{}", "-".repeat(72));

    let doc_a = "The quick brown fox jumps over the lazy dog.";
    let doc_b = "The dog barks; the fox runs.";

    // Tokenize with the default punctuation/case table.
    let words_a = tokenize(doc_a);
    let words_b = tokenize(doc_b);

    // Key-sorted frequency vectors, ready for the two-pointer walk.
    let vec_a = frequency_vector(words_a);
    let vec_b = frequency_vector(words_b);

    let dot = sorted_inner_product(&vec_a, &vec_b)? as f64;
    let norm_a = (sorted_inner_product(&vec_a, &vec_a)? as f64).sqrt();
    let norm_b = (sorted_inner_product(&vec_b, &vec_b)? as f64).sqrt();
    let angle = (dot / (norm_a * norm_b)).acos();

    println!("Doc A vector: {:?}", vec_a);
    println!("Doc B vector: {:?}", vec_b);
    println!("Inner product: {dot}");
    println!("Vector angle:  {angle:.4} rad");
    println!();

    Ok(())
}

/// Example 3: Memoized Fibonacci with explicit, call-local state.
fn example_3_memoized_fibonacci() -> Result<(), AlgoError> {
    println!("Example 3: Memoized Fibonacci");
    println!("{}", "-".repeat(72));

    // O(n) with the memo table; utterly hopeless without it.
    println!("F(40)  = {}", fibonacci(40)?);
    println!("F(90)  = {}", fibonacci(90)?);
    println!("F(186) = {}", fibonacci(186)?);

    // The ceiling is explicit, not a silent overflow.
    match fibonacci(187) {
        Err(AlgoError::ArgumentTooLarge { got, max }) => {
            println!("F({got}) rejected: maximum supported argument is {max}");
        }
        other => println!("unexpected: {other:?}"),
    }
    println!();

    Ok(())
}
