//! Needleman-Wunsch global alignment with linear gap penalties
//!
//! The scoring scheme is fixed by design: match = 0, mismatch = -1,
//! gap open = gap extend = -3. With equal open/extend penalties a single
//! DP matrix suffices; no Gotoh-style gap matrices are needed.

use super::result::{EditOp, GlobalAlignment};

/// Score for two identical bases
pub const MATCH_SCORE: i32 = 0;
/// Score for two differing bases
pub const MISMATCH_SCORE: i32 = -1;
/// Score for a gap column (open and extend are the same)
pub const GAP_SCORE: i32 = -3;

const GAP_BYTE: u8 = b'-';

/// Direction for traceback in the DP matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TracebackDir {
    /// Diagonal (match/mismatch)
    Diag,
    /// Up (consume guide base, gap in target)
    Up,
    /// Left (consume target base, gap in guide)
    Left,
    /// Stop (origin cell)
    Stop,
}

/// Traceback matrix storing the alignment path, flat row-major
struct TracebackMatrix {
    data: Vec<TracebackDir>,
    cols: usize,
}

impl TracebackMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![TracebackDir::Stop; rows * cols],
            cols,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> TracebackDir {
        self.data[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, dir: TracebackDir) {
        self.data[row * self.cols + col] = dir;
    }
}

/// Compute the best end-to-end alignment of `guide` against `target`.
///
/// Both ends of both sequences are covered; there are no free end gaps.
/// When several paths reach a cell with equal score the tie resolves
/// Diag, then Up, then Left, so repeated calls with identical inputs
/// always produce the identical alignment. The tie-break affects which
/// optimal alignment is displayed, never its score.
pub fn global_align(guide: &[u8], target: &[u8]) -> GlobalAlignment {
    let rows = guide.len() + 1;
    let cols = target.len() + 1;

    let mut dp = vec![0i32; rows * cols];
    let mut tb = TracebackMatrix::new(rows, cols);

    for i in 1..rows {
        dp[i * cols] = i as i32 * GAP_SCORE;
        tb.set(i, 0, TracebackDir::Up);
    }
    for j in 1..cols {
        dp[j] = j as i32 * GAP_SCORE;
        tb.set(0, j, TracebackDir::Left);
    }

    for i in 1..rows {
        for j in 1..cols {
            let sub = if guide[i - 1] == target[j - 1] {
                MATCH_SCORE
            } else {
                MISMATCH_SCORE
            };
            let diag = dp[(i - 1) * cols + (j - 1)] + sub;
            let up = dp[(i - 1) * cols + j] + GAP_SCORE;
            let left = dp[i * cols + (j - 1)] + GAP_SCORE;

            let (best, dir) = if diag >= up && diag >= left {
                (diag, TracebackDir::Diag)
            } else if up >= left {
                (up, TracebackDir::Up)
            } else {
                (left, TracebackDir::Left)
            };
            dp[i * cols + j] = best;
            tb.set(i, j, dir);
        }
    }

    // Traceback from the bottom-right corner to the origin
    let mut aligned_guide = Vec::with_capacity(rows + cols);
    let mut aligned_target = Vec::with_capacity(rows + cols);
    let mut edit_script = Vec::with_capacity(rows + cols);

    let mut i = rows - 1;
    let mut j = cols - 1;
    while i > 0 || j > 0 {
        match tb.get(i, j) {
            TracebackDir::Diag => {
                aligned_guide.push(guide[i - 1]);
                aligned_target.push(target[j - 1]);
                edit_script.push(if guide[i - 1] == target[j - 1] {
                    EditOp::Match
                } else {
                    EditOp::Mismatch
                });
                i -= 1;
                j -= 1;
            }
            TracebackDir::Up => {
                aligned_guide.push(guide[i - 1]);
                aligned_target.push(GAP_BYTE);
                edit_script.push(EditOp::Ins);
                i -= 1;
            }
            TracebackDir::Left => {
                aligned_guide.push(GAP_BYTE);
                aligned_target.push(target[j - 1]);
                edit_script.push(EditOp::Del);
                j -= 1;
            }
            TracebackDir::Stop => break,
        }
    }

    aligned_guide.reverse();
    aligned_target.reverse();
    edit_script.reverse();

    GlobalAlignment::from_edit_script(
        String::from_utf8_lossy(&aligned_guide).into_owned(),
        String::from_utf8_lossy(&aligned_target).into_owned(),
        dp[rows * cols - 1],
        edit_script,
    )
}
