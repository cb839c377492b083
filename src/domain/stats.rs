use crate::domain::operation::{DiffKind, DiffOperation};
use serde::Serialize;
use std::fmt::Display;

/// Per-kind line counts of an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub equal: usize,
    pub removed: usize,
    pub added: usize,
}

impl DiffStats {
    pub fn record(&mut self, kind: DiffKind) {
        match kind {
            DiffKind::Equal => self.equal += 1,
            DiffKind::Removed => self.removed += 1,
            DiffKind::Added => self.added += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.equal + self.removed + self.added
    }

    pub fn is_identical(&self) -> bool {
        self.removed == 0 && self.added == 0
    }
}

impl<'a> FromIterator<&'a DiffOperation> for DiffStats {
    fn from_iter<I: IntoIterator<Item = &'a DiffOperation>>(iter: I) -> Self {
        iter.into_iter().fold(DiffStats::default(), |mut stats, op| {
            stats.record(op.kind());
            stats
        })
    }
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} equal, {} removed, {} added",
            self.equal, self.removed, self.added
        )
    }
}
