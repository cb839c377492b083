//! Line-by-line text comparison
//!
//! `linecmp` computes a minimal line edit script between two texts using a
//! longest-common-subsequence table, and renders it as numbered rows, summary
//! counts or JSON.
//!
//! ```
//! use linecmp::{DiffKind, DiffStats, diff_lines};
//!
//! let script = diff_lines("a\nb\nc", "a\nc\nd");
//! let stats = script.iter().collect::<DiffStats>();
//!
//! assert_eq!(script[1].kind(), DiffKind::Removed);
//! assert_eq!(stats.to_string(), "2 equal, 1 removed, 1 added");
//! ```

use clap::ValueEnum;

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod domain;

pub use domain::engine::{diff_lines, diff_lines_bounded};
pub use domain::error::DiffError;
pub use domain::operation::{DiffKind, DiffOperation};
pub use domain::stats::DiffStats;

/// Default upper bound on LCS table cells for the command line
pub const DEFAULT_MAX_CELLS: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered rows with +/- markers
    Rows,
    /// A JSON document with stats and operations
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply the mode to the global `colored` switch and report whether rows get colored.
    pub fn apply(&self) -> bool {
        use is_terminal::IsTerminal;

        match self {
            ColorMode::Always => {
                colored::control::set_override(true);
                true
            }
            ColorMode::Never => {
                colored::control::set_override(false);
                false
            }
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
