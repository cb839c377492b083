//! Public diff entry points
//!
//! Both functions normalize the two texts into lines, build the LCS table and
//! backtrack it into a forward-ordered edit script. They are pure: nothing is
//! cached between calls and no input is mutated.

use crate::domain::error::DiffError;
use crate::domain::lcs::{DiffAlgorithm, LcsDiff, LcsTable};
use crate::domain::line::{line_count, normalize};
use crate::domain::operation::DiffOperation;

/// Compare `left` and `right` line by line.
///
/// Never fails; memory and time grow with the product of both line counts.
///
/// ```
/// use linecmp::diff_lines;
///
/// let script = diff_lines("x\ny", "y");
/// assert_eq!(script.len(), 2);
/// assert_eq!(script[0].left_line(), Some(1));
/// assert_eq!(script[0].right_line(), None);
/// ```
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffOperation> {
    let a = normalize(left);
    let b = normalize(right);

    LcsDiff::new(&a, &b).diff()
}

/// Same as [`diff_lines`], but refuses inputs whose LCS table would need more
/// than `max_cells` cells.
pub fn diff_lines_bounded(
    left: &str,
    right: &str,
    max_cells: usize,
) -> Result<Vec<DiffOperation>, DiffError> {
    let (left_lines, right_lines) = (line_count(left), line_count(right));
    let cells = LcsTable::cells(left_lines, right_lines);

    match cells {
        Some(cells) if cells <= max_cells => Ok(diff_lines(left, right)),
        _ => {
            log::warn!(
                "refusing to diff {left_lines} x {right_lines} lines, table limit is {max_cells} cells"
            );
            Err(DiffError::InputTooLarge {
                left_lines,
                right_lines,
                cells,
                limit: max_cells,
            })
        }
    }
}
