//! Row rendering for edit scripts
//!
//! Each operation becomes one text row: a gutter with the left and right line
//! numbers, a two-character marker and the line content.
//!
//! ```text
//!    1    1   kept
//!    2      - removed
//!         2 + added
//! ```

use crate::domain::operation::{DiffKind, DiffOperation};
use bitflags::bitflags;
use colored::Colorize;
use derive_new::new;

const GUTTER_WIDTH: usize = 4;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        const LINE_NUMBERS = 0b001;
        const MARKERS = 0b010;
        const COLOR = 0b100;
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self::LINE_NUMBERS | Self::MARKERS
    }
}

#[derive(Debug, Clone, Copy, Default, new)]
pub struct RowRenderer {
    flags: RenderFlags,
}

impl RowRenderer {
    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    pub fn render(&self, operation: &DiffOperation) -> String {
        let mut row = String::new();

        if self.flags.contains(RenderFlags::LINE_NUMBERS) {
            row.push_str(&gutter(operation.left_line()));
            row.push(' ');
            row.push_str(&gutter(operation.right_line()));
            row.push(' ');
        }

        if self.flags.contains(RenderFlags::MARKERS) {
            row.push(operation.kind().marker());
            row.push(' ');
        }

        row.push_str(operation.content());

        if !self.flags.contains(RenderFlags::COLOR) {
            return row;
        }

        match operation.kind() {
            DiffKind::Added => row.green().to_string(),
            DiffKind::Removed => row.red().to_string(),
            DiffKind::Equal => row,
        }
    }

    pub fn render_all(&self, operations: &[DiffOperation]) -> Vec<String> {
        operations.iter().map(|op| self.render(op)).collect()
    }
}

fn gutter(line: Option<usize>) -> String {
    match line {
        Some(line) => format!("{line:>GUTTER_WIDTH$}"),
        None => " ".repeat(GUTTER_WIDTH),
    }
}
