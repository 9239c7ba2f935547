//! Sorted interval tables and binary search over them

use std::slice;

use crate::error::TableError;
use crate::tables::{ambiguous, combining};
use crate::types::{AmbiguousTable, CodePoint, Interval};

/// Sorted, non-overlapping list of closed code point intervals
///
/// Tables are read-only `'static` data, so copies are cheap and sharing
/// across threads needs no synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTable {
    intervals: &'static [Interval],
}

impl IntervalTable {
    /// Build a table, checking it is non-empty, sorted and non-overlapping
    pub fn new(intervals: &'static [Interval]) -> Result<Self, TableError> {
        validate(intervals).inspect_err(|err| {
            tracing::debug!(%err, len = intervals.len(), "rejected interval table");
        })?;
        Ok(Self { intervals })
    }

    /// Wrap bundled data that is known to be valid
    fn from_static(intervals: &'static [Interval]) -> Self {
        Self { intervals }
    }

    /// East Asian Ambiguous set for the given snapshot
    pub fn ambiguous(which: AmbiguousTable) -> Self {
        match which {
            AmbiguousTable::Legacy => Self::from_static(ambiguous::LEGACY),
            AmbiguousTable::Updated => Self::from_static(ambiguous::UPDATED),
        }
    }

    /// Combining marks: categories Mn and Me plus nonzero combining class
    pub fn combining() -> Self {
        Self::from_static(combining::MARKS)
    }

    pub fn intervals(&self) -> &'static [Interval] {
        self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn first(&self) -> Option<&'static Interval> {
        self.intervals.first()
    }

    pub fn last(&self) -> Option<&'static Interval> {
        self.intervals.last()
    }

    pub fn iter(&self) -> slice::Iter<'static, Interval> {
        self.intervals.iter()
    }

    /// Check if `cp` falls inside any interval of the table
    ///
    /// Code points outside the table's overall span are rejected without
    /// searching.
    pub fn contains(&self, cp: CodePoint) -> bool {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return false;
        };
        if cp < first.lo || cp > last.hi {
            return false;
        }

        // Half-open [lbound, ubound) so the bounds never underflow
        let mut lbound = 0;
        let mut ubound = self.intervals.len();
        while lbound < ubound {
            let mid = (lbound + ubound) / 2;
            let iv = &self.intervals[mid];
            if cp > iv.hi {
                lbound = mid + 1;
            } else if cp < iv.lo {
                ubound = mid;
            } else {
                return true;
            }
        }
        false
    }
}

impl IntoIterator for IntervalTable {
    type Item = &'static Interval;
    type IntoIter = slice::Iter<'static, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Check if `cp` falls inside any interval of `table`
pub fn contains(table: &IntervalTable, cp: CodePoint) -> bool {
    table.contains(cp)
}

fn validate(intervals: &[Interval]) -> Result<(), TableError> {
    if intervals.is_empty() {
        return Err(TableError::Empty);
    }
    let mut prev_hi: Option<CodePoint> = None;
    for (index, iv) in intervals.iter().enumerate() {
        if iv.lo > iv.hi {
            return Err(TableError::Inverted {
                index,
                lo: iv.lo,
                hi: iv.hi,
            });
        }
        if let Some(prev_hi) = prev_hi {
            if iv.lo <= prev_hi {
                return Err(TableError::Unsorted {
                    index,
                    prev_hi,
                    lo: iv.lo,
                });
            }
        }
        prev_hi = Some(iv.hi);
    }
    Ok(())
}
