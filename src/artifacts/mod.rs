//! Presentation of edit scripts
//!
//! - `core`: output sink (stdout or pager)
//! - `json`: JSON pre-formatting of inputs
//! - `render`: numbered row rendering

pub mod core;
pub mod json;
pub mod render;
