use std::fmt;

use crate::types::CodePoint;

/// Errors that can occur when building an interval table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Table has no intervals
    Empty,
    /// Interval whose low bound exceeds its high bound
    Inverted {
        index: usize,
        lo: CodePoint,
        hi: CodePoint,
    },
    /// Interval that starts at or before the end of its predecessor
    Unsorted {
        index: usize,
        prev_hi: CodePoint,
        lo: CodePoint,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "Empty interval table"),
            TableError::Inverted { index, lo, hi } => write!(
                f,
                "Interval {}: low bound U+{:04X} is above high bound U+{:04X}",
                index, lo, hi
            ),
            TableError::Unsorted { index, prev_hi, lo } => write!(
                f,
                "Interval {}: U+{:04X} overlaps or precedes previous high bound U+{:04X}",
                index, lo, prev_hi
            ),
        }
    }
}

impl std::error::Error for TableError {}
