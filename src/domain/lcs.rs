//! Longest common subsequence diff
//!
//! The diff runs in two passes over the inputs `a` (left) and `b` (right):
//!
//! 1. `compute_table` fills an `(N+1) x (M+1)` table where cell `(i, j)` holds the
//!    LCS length of `a[..i]` and `b[..j]`. Row 0 and column 0 stay zero.
//! 2. `backtrack` walks from `(N, M)` back to `(0, 0)`, classifying one line per step:
//!    a diagonal move over equal lines keeps the line, a move left adds `b[j-1]`
//!    and a move up removes `a[i-1]`.
//!
//! ## Tie-break
//!
//! When both a left and an up move keep the LCS length, i.e.
//! `table[i][j-1] >= table[i-1][j]`, the walk moves left and emits an addition.
//! Since the script is built back to front, a replacement run ends up as all of
//! its removals followed by all of its additions. Changing the comparison to `>`
//! interleaves them differently, so it must stay `>=`.
//!
//! ## Cost
//!
//! Time and memory are both `O(N * M)`. Callers that accept untrusted input should
//! check `LcsTable::cells` first (see `diff_lines_bounded`).

use crate::domain::operation::DiffOperation;
use derive_new::new;
use std::num::NonZeroUsize;

/// Debug tracing of single backtracking steps, compiled in with `debug_backtrack`
macro_rules! trace_step {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_backtrack")]
        {
            log::trace!($($arg)*);
        }
    };
}

/// Dense LCS length table, stored row-major with `m + 1` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let cols = b.len() + 1;
        let mut cells = vec![0; (a.len() + 1) * cols];

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        LcsTable { cols, cells }
    }

    /// Number of cells a table for `n` by `m` lines needs, or `None` on overflow.
    pub fn cells(n: usize, m: usize) -> Option<usize> {
        n.checked_add(1)?.checked_mul(m.checked_add(1)?)
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of the complete inputs.
    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or_default()
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Table;
    type EditScript;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&self, table: &Self::Table) -> Self::EditScript;

    fn diff(&self) -> Self::EditScript {
        let table = self.compute_table();
        self.backtrack(&table)
    }

    fn format_diff(&self) -> String
    where
        Self::EditScript: AsRef<[DiffOperation]>,
    {
        self.diff()
            .as_ref()
            .iter()
            .map(|operation| operation.as_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T> DiffAlgorithm<'d, T> for LcsDiff<'d, T>
where
    T: PartialEq + AsRef<str>,
{
    type Table = LcsTable;
    type EditScript = Vec<DiffOperation>;

    fn compute_table(&self) -> Self::Table {
        log::debug!(
            "building LCS table for {} x {} lines",
            self.a.len(),
            self.b.len()
        );

        LcsTable::build(self.a, self.b)
    }

    fn backtrack(&self, table: &Self::Table) -> Self::EditScript {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut script = Vec::with_capacity(i + j - table.lcs_len());

        // (i, j) only decrease, so both line numbers below are at least 1
        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] {
                trace_step!("({i}, {j}): equal");
                script.push(DiffOperation::equal(
                    self.a[i - 1].as_ref(),
                    line_number(i),
                    line_number(j),
                ));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                trace_step!("({i}, {j}): added");
                script.push(DiffOperation::added(self.b[j - 1].as_ref(), line_number(j)));
                j -= 1;
            } else {
                trace_step!("({i}, {j}): removed");
                script.push(DiffOperation::removed(self.a[i - 1].as_ref(), line_number(i)));
                i -= 1;
            }
        }

        script.reverse();
        script
    }
}

fn line_number(index: usize) -> NonZeroUsize {
    NonZeroUsize::new(index).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::{DiffAlgorithm, LcsDiff, LcsTable};
    use crate::domain::operation::{DiffKind, DiffOperation};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::num::NonZeroUsize;

    fn n(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("line numbers are 1-based")
    }

    #[fixture]
    fn file_inputs() -> (Vec<&'static str>, Vec<&'static str>) {
        (
            vec!["line1", "line2", "line3", "line4"],
            vec!["line2", "line3_modified", "line4", "line5"],
        )
    }

    #[test]
    fn test_table_follows_recurrence() {
        let a = ["a", "b", "c", "a"];
        let b = ["b", "a", "c"];
        let table = LcsTable::build(&a, &b);

        let rows = (0..table.rows())
            .map(|i| (0..table.cols()).map(|j| table.get(i, j)).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(
            rows,
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 1, 1],
                vec![0, 1, 1, 1],
                vec![0, 1, 1, 2],
                vec![0, 1, 2, 2],
            ]
        );
        assert_eq!(table.lcs_len(), 2);
    }

    #[test]
    fn test_table_for_empty_side_is_all_zero() {
        let a: [&str; 0] = [];
        let table = LcsTable::build(&a, &["x", "y"]);

        assert_eq!(table.rows(), 1);
        assert_eq!(table.cols(), 3);
        assert_eq!(table.lcs_len(), 0);
    }

    #[rstest]
    #[case(0, 0, Some(1))]
    #[case(2, 3, Some(12))]
    #[case(usize::MAX, 0, None)]
    #[case(usize::MAX / 2, 3, None)]
    fn test_cells(#[case] n: usize, #[case] m: usize, #[case] expected: Option<usize>) {
        assert_eq!(LcsTable::cells(n, m), expected);
    }

    #[rstest]
    fn test_diff_files(file_inputs: (Vec<&'static str>, Vec<&'static str>)) {
        let (a, b) = file_inputs;
        let result = LcsDiff::new(&a, &b).diff();
        let expected = vec![
            DiffOperation::removed("line1", n(1)),
            DiffOperation::equal("line2", n(2), n(1)),
            DiffOperation::removed("line3", n(3)),
            DiffOperation::added("line3_modified", n(2)),
            DiffOperation::equal("line4", n(4), n(3)),
            DiffOperation::added("line5", n(4)),
        ];

        assert_eq!(result, expected);
    }

    #[test]
    fn test_replacement_run_lists_removals_before_additions() {
        let a = ["keep", "old1", "old2", "tail"];
        let b = ["keep", "new1", "new2", "tail"];
        let kinds = LcsDiff::new(&a, &b)
            .diff()
            .iter()
            .map(|operation| operation.kind())
            .collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![
                DiffKind::Equal,
                DiffKind::Removed,
                DiffKind::Removed,
                DiffKind::Added,
                DiffKind::Added,
                DiffKind::Equal,
            ]
        );
    }

    #[test]
    fn test_tie_break_prefers_addition_while_walking_back() {
        // both "a" and "b" could be kept; walking back from the end the
        // addition of "a" is taken first, which keeps "b"
        let a = ["a", "b"];
        let b = ["b", "a"];
        let result = LcsDiff::new(&a, &b).diff();

        assert_eq!(
            result,
            vec![
                DiffOperation::removed("a", n(1)),
                DiffOperation::equal("b", n(2), n(1)),
                DiffOperation::added("a", n(2)),
            ]
        );
    }

    #[rstest]
    fn test_format_diff(file_inputs: (Vec<&'static str>, Vec<&'static str>)) {
        let (a, b) = file_inputs;
        let formatted = LcsDiff::new(&a, &b).format_diff();

        assert_eq!(
            formatted,
            "-line1\n line2\n-line3\n+line3_modified\n line4\n+line5"
        );
    }
}
