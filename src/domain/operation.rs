use serde::Serialize;
use std::fmt::Display;
use std::num::NonZeroUsize;

/// Classification of a diffed line, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Equal,
    Removed,
    Added,
}

impl DiffKind {
    pub fn marker(&self) -> char {
        match self {
            DiffKind::Equal => ' ',
            DiffKind::Removed => '-',
            DiffKind::Added => '+',
        }
    }
}

/// One line of an edit script.
///
/// Each variant carries only the line numbers that exist for its kind: a kept
/// line is numbered on both sides, a removed line only on the left and an
/// added line only on the right. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum DiffOperation {
    Equal {
        content: String,
        left_line: NonZeroUsize,
        right_line: NonZeroUsize,
    },
    Removed {
        content: String,
        left_line: NonZeroUsize,
    },
    Added {
        content: String,
        right_line: NonZeroUsize,
    },
}

impl DiffOperation {
    pub fn equal(content: impl Into<String>, left_line: NonZeroUsize, right_line: NonZeroUsize) -> Self {
        DiffOperation::Equal {
            content: content.into(),
            left_line,
            right_line,
        }
    }

    pub fn removed(content: impl Into<String>, left_line: NonZeroUsize) -> Self {
        DiffOperation::Removed {
            content: content.into(),
            left_line,
        }
    }

    pub fn added(content: impl Into<String>, right_line: NonZeroUsize) -> Self {
        DiffOperation::Added {
            content: content.into(),
            right_line,
        }
    }

    pub fn kind(&self) -> DiffKind {
        match self {
            DiffOperation::Equal { .. } => DiffKind::Equal,
            DiffOperation::Removed { .. } => DiffKind::Removed,
            DiffOperation::Added { .. } => DiffKind::Added,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            DiffOperation::Equal { content, .. }
            | DiffOperation::Removed { content, .. }
            | DiffOperation::Added { content, .. } => content,
        }
    }

    /// Position in the left text, for kept and removed lines.
    pub fn left_line(&self) -> Option<usize> {
        match self {
            DiffOperation::Equal { left_line, .. } | DiffOperation::Removed { left_line, .. } => {
                Some(left_line.get())
            }
            DiffOperation::Added { .. } => None,
        }
    }

    /// Position in the right text, for kept and added lines.
    pub fn right_line(&self) -> Option<usize> {
        match self {
            DiffOperation::Equal { right_line, .. } | DiffOperation::Added { right_line, .. } => {
                Some(right_line.get())
            }
            DiffOperation::Removed { .. } => None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, DiffOperation::Equal { .. })
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.kind().marker(), self.content())
    }
}

impl Display for DiffOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
