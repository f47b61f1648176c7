/// Weight of a mismatched column in the composite score
pub const MISMATCH_WEIGHT: i32 = 1;
/// Weight of a gap (bulge) column in the composite score
pub const BULGE_WEIGHT: i32 = 3;

/// Edit operation for one alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Identical bases in both strands
    Match,
    /// Both strands non-gap, bases differ
    Mismatch,
    /// Guide base unpaired (gap in target strand)
    Ins,
    /// Target base unpaired (gap in guide strand)
    Del,
}

/// Result of a global alignment of a concrete guide variant against a target
///
/// Invariants: both aligned strands have the same length, and no column is
/// a gap in both strands at once.
#[derive(Debug, Clone)]
pub struct GlobalAlignment {
    /// Aligned guide strand, with `-` at gap columns
    pub aligned_guide: String,
    /// Aligned target (off-target candidate) strand, with `-` at gap columns
    pub aligned_target: String,
    /// Raw DP score under the fixed scheme
    pub score: i32,
    /// Number of mismatched columns
    pub mismatches: usize,
    /// Number of gap columns in either strand
    pub gap_columns: usize,
    /// Total alignment length (number of columns including gaps)
    pub alignment_len: usize,
    /// Edit script for the alignment path
    pub edit_script: Vec<EditOp>,
}

impl GlobalAlignment {
    /// Build a result from aligned strands and their edit script
    pub fn from_edit_script(
        aligned_guide: String,
        aligned_target: String,
        score: i32,
        edit_script: Vec<EditOp>,
    ) -> Self {
        let stats = compute_stats_from_edit_script(&edit_script);
        Self {
            aligned_guide,
            aligned_target,
            score,
            mismatches: stats.mismatches,
            gap_columns: stats.gap_columns,
            alignment_len: stats.alignment_len,
            edit_script,
        }
    }

    /// Composite score: mismatches weighted 1, gap columns weighted 3.
    ///
    /// Under the fixed scheme (match 0, mismatch -1, linear gap -3) this
    /// equals the negated raw DP score.
    pub fn weighted_score(&self) -> i32 {
        self.mismatches as i32 * MISMATCH_WEIGHT + self.gap_columns as i32 * BULGE_WEIGHT
    }
}

/// Statistics computed from an edit script
struct EditStats {
    mismatches: usize,
    gap_columns: usize,
    alignment_len: usize,
}

fn compute_stats_from_edit_script(edit_script: &[EditOp]) -> EditStats {
    let mut mismatches = 0;
    let mut gap_columns = 0;

    for &op in edit_script {
        match op {
            EditOp::Match => {}
            EditOp::Mismatch => mismatches += 1,
            EditOp::Ins | EditOp::Del => gap_columns += 1,
        }
    }

    EditStats {
        mismatches,
        gap_columns,
        alignment_len: edit_script.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_script_stats() {
        let script = vec![
            EditOp::Match,
            EditOp::Match,
            EditOp::Mismatch,
            EditOp::Ins,
            EditOp::Ins,
            EditOp::Match,
            EditOp::Del,
        ];

        let aln = GlobalAlignment::from_edit_script(
            "ACGTT-A".to_string(),
            "ACC--GA".to_string(),
            -10,
            script,
        );
        assert_eq!(aln.mismatches, 1);
        assert_eq!(aln.gap_columns, 3);
        assert_eq!(aln.alignment_len, 7);
        assert_eq!(aln.weighted_score(), 1 + 3 * 3);
    }

    #[test]
    fn test_weighted_score_negates_dp_score() {
        let script = vec![EditOp::Match, EditOp::Mismatch, EditOp::Del];
        let aln = GlobalAlignment::from_edit_script(
            "AC-".to_string(),
            "ATG".to_string(),
            -4,
            script,
        );
        assert_eq!(aln.weighted_score(), -aln.score);
    }
}
