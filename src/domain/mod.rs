//! Line diff engine
//!
//! - `line`: splits texts into lines
//! - `lcs`: LCS table and backtracking (`DiffAlgorithm`, `LcsDiff`)
//! - `operation`: the `DiffOperation` edit script entries
//! - `engine`: `diff_lines` and its size-guarded variant
//! - `stats`: per-kind counts of an edit script
//! - `error`: errors of the size-guarded entry point

pub mod engine;
pub mod error;
pub mod lcs;
pub mod line;
pub mod operation;
pub mod stats;
