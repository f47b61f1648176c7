//! High-level scoring entry point
//!
//! This is the boundary the batch driver calls: one guide / candidate
//! pair in, an optional scored alignment out. Empty inputs and
//! over-threshold scores are expected data-quality outcomes and both map
//! to `None`; nothing in here can fail.

use crate::align::{global_align, GlobalAlignment};
use crate::post::{passes_threshold, restore_ambiguity};
use crate::sequence::{ambiguity_positions, guide_variants, normalize};

/// Scored global alignment of a guide against an off-target candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffTargetAlignment {
    /// Aligned off-target strand
    pub target_aligned: String,
    /// Aligned guide strand, with `N` restored at ambiguous positions
    pub guide_aligned: String,
    /// Mismatched columns (counted against the concrete substituted guide)
    pub mismatches: usize,
    /// Gap columns in either strand
    pub bulges: usize,
    /// Composite score: mismatches + 3 * bulges
    pub score: i32,
}

/// Score one guide / candidate pair under the fixed alignment scheme.
///
/// An ambiguous guide is expanded into four concrete variants (every `N`
/// replaced uniformly with the same base, in the order A, C, G, T); each
/// variant is aligned and the strictly lowest composite score wins, so
/// ties keep the earliest variant. Returns `None` when either normalized
/// sequence is empty or when the winning score exceeds `max_score`.
pub fn score(guide: &str, target: &str, max_score: i32) -> Option<OffTargetAlignment> {
    let guide = normalize(Some(guide));
    let target = normalize(Some(target));
    if guide.is_empty() || target.is_empty() {
        return None;
    }

    let mut best: Option<GlobalAlignment> = None;
    for variant in guide_variants(&guide) {
        let aln = global_align(variant.as_bytes(), target.as_bytes());
        let better = best
            .as_ref()
            .is_none_or(|b| aln.weighted_score() < b.weighted_score());
        if better {
            best = Some(aln);
        }
    }
    let best = best?;

    let composite = best.weighted_score();
    if !passes_threshold(composite, max_score) {
        return None;
    }

    let n_positions = ambiguity_positions(&guide);
    let guide_aligned = restore_ambiguity(&best.aligned_guide, &n_positions);

    Some(OffTargetAlignment {
        target_aligned: best.aligned_target,
        guide_aligned,
        mismatches: best.mismatches,
        bulges: best.gap_columns,
        score: composite,
    })
}
