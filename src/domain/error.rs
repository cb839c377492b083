use thiserror::Error;

/// Errors raised by the size-guarded diff entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// The LCS table for the inputs would exceed the configured cell limit.
    /// `cells` is `None` when the count does not even fit in `usize`.
    #[error(
        "input too large: {left_lines} x {right_lines} lines need {} table cells, limit is {limit}",
        .cells.map_or_else(|| "more than usize::MAX".to_string(), |cells| cells.to_string())
    )]
    InputTooLarge {
        left_lines: usize,
        right_lines: usize,
        cells: Option<usize>,
        limit: usize,
    },
}
