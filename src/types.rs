use std::fmt;

/// A Unicode scalar value, as supplied by the caller.
///
/// Any `u32` is accepted; values outside the Unicode range fall through
/// the numeric rules like any other code point.
pub type CodePoint = u32;

/// Column width of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Width {
    /// Control character or isolated combining mark
    NonPrintable = -1,
    /// NUL
    Zero = 0,
    /// One cell
    Narrow = 1,
    /// Two cells
    Wide = 2,
}

impl Width {
    /// The classic `wcwidth` integer: -1, 0, 1 or 2
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Number of cells, or `None` for non-printable characters
    pub fn columns(self) -> Option<usize> {
        match self {
            Width::NonPrintable => None,
            Width::Zero => Some(0),
            Width::Narrow => Some(1),
            Width::Wide => Some(2),
        }
    }

    pub fn is_printable(self) -> bool {
        self != Width::NonPrintable
    }
}

impl From<Width> for i8 {
    fn from(w: Width) -> i8 {
        w.as_i8()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Closed range of code points `lo..=hi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub lo: CodePoint,
    pub hi: CodePoint,
}

impl Interval {
    pub const fn new(lo: CodePoint, hi: CodePoint) -> Self {
        Self { lo, hi }
    }

    /// Check if `cp` lies inside the interval (both ends inclusive)
    pub fn contains_point(&self, cp: CodePoint) -> bool {
        self.lo <= cp && cp <= self.hi
    }

    /// Number of code points covered, 1 for an inverted interval
    pub fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo) as usize + 1
    }

    /// Always false: an interval covers at least one code point
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}..U+{:04X}", self.lo, self.hi)
    }
}

/// Which pinned East Asian Ambiguous snapshot to widen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguousTable {
    /// The set the legacy CJK functions use
    #[default]
    Legacy,
    /// The set from a later Unicode revision
    Updated,
}

/// Options for width classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidthOptions {
    /// Treat East Asian Ambiguous characters as two cells wide
    pub cjk: bool,
    /// Ambiguous set consulted when `cjk` is on
    pub table: AmbiguousTable,
}

impl WidthOptions {
    /// Options for legacy CJK terminals
    pub fn cjk() -> Self {
        Self {
            cjk: true,
            table: AmbiguousTable::Legacy,
        }
    }

    pub fn with_table(mut self, table: AmbiguousTable) -> Self {
        self.table = table;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_integers() {
        assert_eq!(Width::NonPrintable.as_i8(), -1);
        assert_eq!(Width::Zero.as_i8(), 0);
        assert_eq!(i8::from(Width::Narrow), 1);
        assert_eq!(i8::from(Width::Wide), 2);
        assert_eq!(Width::Wide.to_string(), "2");
    }

    #[test]
    fn test_width_columns() {
        assert_eq!(Width::NonPrintable.columns(), None);
        assert_eq!(Width::Zero.columns(), Some(0));
        assert_eq!(Width::Wide.columns(), Some(2));
        assert!(!Width::NonPrintable.is_printable());
        assert!(Width::Zero.is_printable());
    }

    #[test]
    fn test_interval_bounds() {
        let iv = Interval::new(0x00B0, 0x00B4);
        assert!(iv.contains_point(0x00B0));
        assert!(iv.contains_point(0x00B4));
        assert!(!iv.contains_point(0x00AF));
        assert!(!iv.contains_point(0x00B5));
        assert_eq!(iv.len(), 5);
        assert_eq!(Interval::new(0x41, 0x41).len(), 1);
        assert_eq!(iv.to_string(), "U+00B0..U+00B4");
    }

    #[test]
    fn test_inverted_interval_len() {
        let iv = Interval::new(0x30, 0x20);
        assert_eq!(iv.len(), 1);
        assert!(!iv.contains_point(0x25));
    }


    #[test]
    fn test_options_default() {
        let opts = WidthOptions::default();
        assert!(!opts.cjk);
        assert_eq!(opts.table, AmbiguousTable::Legacy);

        let opts = WidthOptions::cjk().with_table(AmbiguousTable::Updated);
        assert!(opts.cjk);
        assert_eq!(opts.table, AmbiguousTable::Updated);
    }
}
