//! Command implementations
//!
//! `compare` drives both user-facing commands: `diff` prints the edit script and
//! `stat` prints its summary counts.

pub mod compare;
