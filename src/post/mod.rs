//! Post-processing of a winning alignment
//!
//! Scoring runs against concrete substituted bases; only the displayed
//! guide strand gets its ambiguity symbols back. The threshold filter is
//! part of the result contract, not an error path.

use rustc_hash::FxHashSet;

use crate::sequence::{AMBIGUOUS, GAP};

/// Re-annotate an aligned guide strand with `N` at the original ambiguous
/// positions.
///
/// `n_positions` indexes into the pre-alignment ungapped guide. Gap
/// columns are left untouched and do not advance the ungapped counter.
/// Restoration affects display only; mismatch and bulge counts were
/// already fixed by the winning concrete variant.
pub fn restore_ambiguity(aligned_guide: &str, n_positions: &FxHashSet<usize>) -> String {
    let mut consumed = 0usize;
    aligned_guide
        .chars()
        .map(|c| {
            if c == GAP {
                GAP
            } else {
                let out = if n_positions.contains(&consumed) {
                    AMBIGUOUS
                } else {
                    c
                };
                consumed += 1;
                out
            }
        })
        .collect()
}

/// Inclusive maximum-score filter
pub fn passes_threshold(score: i32, max_score: i32) -> bool {
    score <= max_score
}
