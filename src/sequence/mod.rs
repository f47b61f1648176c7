//! Sequence normalization and guide ambiguity bookkeeping
//!
//! Guides and off-target candidates arrive from tabular input with gap
//! characters, stray whitespace, and mixed case. Everything downstream of
//! this module works on normalized uppercase sequences over {A, C, G, T, N}.

use rustc_hash::FxHashSet;

/// Gap character used in raw input and in aligned strands
pub const GAP: char = '-';

/// Ambiguity symbol allowed in guide sequences
pub const AMBIGUOUS: char = 'N';

/// Normalize a raw sequence value into an ungapped uppercase sequence.
///
/// Absent values become the empty sequence. Gap characters are removed
/// before trimming so that gaps adjacent to the sequence ends do not
/// shield whitespace from the trim.
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(s) => {
            let ungapped: String = s.chars().filter(|&c| c != GAP).collect();
            ungapped.trim().to_ascii_uppercase()
        }
    }
}

/// Zero-based positions of `N` in a normalized, ungapped guide.
///
/// Derived once per guide and used only to re-annotate the displayed
/// aligned guide strand; scoring never sees these positions.
pub fn ambiguity_positions(guide: &str) -> FxHashSet<usize> {
    guide
        .char_indices()
        .filter(|&(_, c)| c == AMBIGUOUS)
        .map(|(i, _)| i)
        .collect()
}

/// Concrete guide variants to align in place of an ambiguous guide.
///
/// A guide without `N` yields exactly itself. Otherwise every `N` is
/// substituted uniformly with the same base, producing four variants in
/// the fixed order A, C, G, T. The uniform substitution (rather than
/// per-position enumeration) and the variant order are part of the
/// scoring contract: ties between variants keep the earlier one.
pub fn guide_variants(guide: &str) -> Vec<String> {
    if !guide.contains(AMBIGUOUS) {
        return vec![guide.to_string()];
    }
    ["A", "C", "G", "T"]
        .iter()
        .map(|base| guide.replace(AMBIGUOUS, base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absent_value() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn test_normalize_strips_gaps_whitespace_and_case() {
        assert_eq!(normalize(Some(" -acg-t- ")), "ACGT");
        assert_eq!(normalize(Some("- ACGT")), "ACGT");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [" -acg-t- ", "ACGT", "", "  ", "a-N-g"] {
            let once = normalize(Some(raw));
            assert_eq!(normalize(Some(&once)), once);
        }
    }

    #[test]
    fn test_ambiguity_positions() {
        let pos = ambiguity_positions("ANGTN");
        assert_eq!(pos.len(), 2);
        assert!(pos.contains(&1));
        assert!(pos.contains(&4));
    }

    #[test]
    fn test_guide_variants_without_ambiguity() {
        assert_eq!(guide_variants("ACGT"), vec!["ACGT".to_string()]);
    }

    #[test]
    fn test_guide_variants_substitute_all_ns_uniformly() {
        let variants = guide_variants("NAGN");
        assert_eq!(variants, vec!["AAGA", "CAGC", "GAGG", "TAGT"]);
    }
}
