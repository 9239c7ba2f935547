//! Column width rules for single code points and sequences
//!
//! # Rules
//!
//! First match wins:
//!
//! | Code point | Width |
//! |------------|-------|
//! | `U+0000` | 0 |
//! | C0 controls, `U+007F..U+009F` | -1 |
//! | Combining marks (Mn, Me, or nonzero combining class) | -1 |
//! | East Asian Wide and Fullwidth blocks (see [`is_wide`]) | 2 |
//! | Everything else | 1 |
//!
//! The CJK variants check the East Asian Ambiguous table before any of
//! these rules and return 2 on a hit.

use crate::table::IntervalTable;
use crate::types::{AmbiguousTable, CodePoint, Width, WidthOptions};

/// Check if `cp` is a combining mark
///
/// Covers general categories Mn and Me and every code point with a nonzero
/// canonical combining class, including a few spacing marks such as the
/// Hangul tone marks and musical stems.
pub fn is_combining(cp: CodePoint) -> bool {
    IntervalTable::combining().contains(cp)
}

/// Check if `cp` lies in one of the hardcoded double-width blocks
///
/// Combining marks inside these blocks are filtered out earlier by
/// [`width`].
pub fn is_wide(cp: CodePoint) -> bool {
    cp >= 0x1100
        && (cp <= 0x115F // Hangul Jamo initial consonants
            || cp == 0x2329
            || cp == 0x232A
            || ((0x2E80..=0xA4CF).contains(&cp) // CJK radicals .. Yi
                && cp != 0x303F // half-fill space
                && !(0x4DC0..=0x4DFF).contains(&cp)) // hexagram symbols
            || (0xAC00..=0xD7A3).contains(&cp) // Hangul syllables
            || (0xF900..=0xFAFF).contains(&cp) // CJK compatibility ideographs
            || (0xFE10..=0xFE19).contains(&cp) // vertical forms
            || (0xFE30..=0xFE6F).contains(&cp) // CJK compatibility forms
            || (0xFF00..=0xFF60).contains(&cp) // fullwidth forms
            || (0xFFE0..=0xFFE6).contains(&cp)
            || (0x20000..=0x2FFFD).contains(&cp)
            || (0x30000..=0x3FFFD).contains(&cp))
}

/// Column width of a single code point
///
/// ```
/// use cellwidth::{width, Width};
///
/// assert_eq!(width(0x41), Width::Narrow);
/// assert_eq!(width(0x4E00), Width::Wide);
/// assert_eq!(width(0x1B), Width::NonPrintable);
/// ```
pub fn width(cp: CodePoint) -> Width {
    if cp == 0 {
        return Width::Zero;
    }
    if cp < 32 || (0x7F..0xA0).contains(&cp) {
        return Width::NonPrintable;
    }
    // Marks only make sense joined to a base character
    if is_combining(cp) {
        return Width::NonPrintable;
    }
    if is_wide(cp) {
        Width::Wide
    } else {
        Width::Narrow
    }
}

/// As [`width`], but East Asian Ambiguous characters are two cells wide
///
/// Uses the [`AmbiguousTable::Legacy`] snapshot.
pub fn width_cjk(cp: CodePoint) -> Width {
    width_with_table(cp, AmbiguousTable::Legacy)
}

fn width_with_table(cp: CodePoint, table: AmbiguousTable) -> Width {
    if IntervalTable::ambiguous(table).contains(cp) {
        return Width::Wide;
    }
    width(cp)
}

/// Total width of a sequence of code points
///
/// Looks at no more than `limit` code points when given. Returns `None` as
/// soon as any code point is non-printable; there is no partial total.
///
/// ```
/// use cellwidth::sequence_width;
///
/// assert_eq!(sequence_width([0x41, 0x4E00], None), Some(3));
/// assert_eq!(sequence_width([0x41, 0x4E00], Some(1)), Some(1));
/// assert_eq!(sequence_width([0x41, 0x07], None), None);
/// ```
pub fn sequence_width<I>(cps: I, limit: Option<usize>) -> Option<usize>
where
    I: IntoIterator<Item = CodePoint>,
{
    accumulate_widths(cps, limit, width)
}

/// As [`sequence_width`], but using [`width_cjk`] for every code point
pub fn sequence_width_cjk<I>(cps: I) -> Option<usize>
where
    I: IntoIterator<Item = CodePoint>,
{
    accumulate_widths(cps, None, width_cjk)
}

/// Sum widths, failing fast on the first non-printable code point
fn accumulate_widths<I, F>(cps: I, limit: Option<usize>, classify: F) -> Option<usize>
where
    I: IntoIterator<Item = CodePoint>,
    F: Fn(CodePoint) -> Width,
{
    let mut total = 0;
    let cps = cps.into_iter().take(limit.unwrap_or(usize::MAX));
    for (pos, cp) in cps.enumerate() {
        match classify(cp).columns() {
            Some(w) => total += w,
            None => {
                tracing::trace!(pos, cp, "non-printable code point");
                return None;
            }
        }
    }
    Some(total)
}

/// Width classifier bound to a set of [`WidthOptions`]
///
/// ```
/// use cellwidth::{Classifier, Width, WidthOptions};
///
/// let plain = Classifier::default();
/// let cjk = Classifier::new(WidthOptions::cjk());
///
/// assert_eq!(plain.width(0xA1), Width::Narrow);
/// assert_eq!(cjk.width(0xA1), Width::Wide);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    options: WidthOptions,
}

impl Classifier {
    pub fn new(options: WidthOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> WidthOptions {
        self.options
    }

    /// Column width of a single code point
    pub fn width(&self, cp: CodePoint) -> Width {
        if self.options.cjk {
            width_with_table(cp, self.options.table)
        } else {
            width(cp)
        }
    }

    /// Total width of up to `limit` code points, `None` if any is non-printable
    pub fn sequence_width<I>(&self, cps: I, limit: Option<usize>) -> Option<usize>
    where
        I: IntoIterator<Item = CodePoint>,
    {
        accumulate_widths(cps, limit, |cp| self.width(cp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_is_zero_width() {
        assert_eq!(width(0), Width::Zero);
    }

    #[test]
    fn test_c0_controls() {
        for cp in 1..32 {
            assert_eq!(width(cp), Width::NonPrintable, "U+{:04X}", cp);
        }
        assert_eq!(width(0x20), Width::Narrow);
    }

    #[test]
    fn test_del_and_c1_controls() {
        for cp in 0x7F..0xA0 {
            assert_eq!(width(cp), Width::NonPrintable, "U+{:04X}", cp);
        }
        assert_eq!(width(0x7E), Width::Narrow);
        assert_eq!(width(0xA0), Width::Narrow);
    }

    #[test]
    fn test_combining_marks() {
        // Mn
        assert_eq!(width(0x0300), Width::NonPrintable);
        assert_eq!(width(0x036F), Width::NonPrintable);
        assert_eq!(width(0x0E31), Width::NonPrintable);
        assert_eq!(width(0xFE00), Width::NonPrintable);
        assert_eq!(width(0xE0100), Width::NonPrintable);
        // Me
        assert_eq!(width(0x0488), Width::NonPrintable);
        assert_eq!(width(0x20DD), Width::NonPrintable);
    }

    #[test]
    fn test_spacing_marks_are_not_combining() {
        // Mc
        assert!(!is_combining(0x0903));
        assert_eq!(width(0x0903), Width::Narrow);
        assert_eq!(width(0x093F), Width::Narrow);
    }

    #[test]
    fn test_spacing_marks_with_combining_class() {
        for cp in [0x1B44, 0xA9C0, 0x16FF0, 0x1D165, 0x1D166, 0x1D16D, 0x1D172] {
            assert!(is_combining(cp), "U+{:04X}", cp);
            assert_eq!(width(cp), Width::NonPrintable, "U+{:04X}", cp);
        }
        // Class 0, but still Mn
        assert!(is_combining(0x034F));
        assert!(!is_combining(0x1D16C));
    }

    #[test]
    fn test_hangul_tone_marks() {
        assert!(is_wide(0x302E));
        assert_eq!(width(0x302E), Width::NonPrintable);
        assert_eq!(width(0x302F), Width::NonPrintable);
        assert_eq!(width_cjk(0x302E), Width::NonPrintable);
        assert_eq!(width(0x3030), Width::Wide);
    }

    #[test]
    fn test_marks_inside_wide_blocks() {
        assert!(is_wide(0x302A));
        assert_eq!(width(0x302A), Width::NonPrintable);
        assert_eq!(width(0x3099), Width::NonPrintable);
    }

    #[test]
    fn test_format_characters_are_narrow() {
        assert_eq!(width(0x00AD), Width::Narrow);
        assert_eq!(width(0x200B), Width::Narrow);
    }

    #[test]
    fn test_wide_block_edges() {
        let edges = [
            (0x1100, 0x115F),
            (0x2329, 0x232A),
            (0xAC00, 0xD7A3),
            (0xF900, 0xFAFF),
            (0xFE10, 0xFE19),
            (0xFE30, 0xFE6F),
            (0xFF00, 0xFF60),
            (0xFFE0, 0xFFE6),
            (0x20000, 0x2FFFD),
            (0x30000, 0x3FFFD),
        ];
        for (lo, hi) in edges {
            assert!(is_wide(lo), "U+{:04X}", lo);
            assert!(is_wide(hi), "U+{:04X}", hi);
            assert!(!is_wide(lo - 1), "U+{:04X}", lo - 1);
            assert!(!is_wide(hi + 1), "U+{:04X}", hi + 1);
        }
    }

    #[test]
    fn test_cjk_block_exclusions() {
        assert!(is_wide(0x2E80));
        assert!(is_wide(0xA4CF));
        assert!(!is_wide(0xA4D0));
        assert!(!is_wide(0x303F));
        assert!(is_wide(0x303E));
        assert!(is_wide(0x3040));
        assert!(!is_wide(0x4DC0));
        assert!(!is_wide(0x4DFF));
        assert!(is_wide(0x4DBF));
        assert!(is_wide(0x4E00));
    }

    #[test]
    fn test_wide_and_narrow() {
        assert_eq!(width(0x4E00), Width::Wide);
        assert_eq!(width(0xAC00), Width::Wide);
        assert_eq!(width(0xFF21), Width::Wide);
        assert_eq!(width(0x41), Width::Narrow);
        assert_eq!(width(0x4DC0), Width::Narrow);
        assert_eq!(width(0x1F600), Width::Narrow);
    }

    #[test]
    fn test_out_of_range_falls_through() {
        assert_eq!(width(0xD800), Width::Narrow);
        assert_eq!(width(0x110000), Width::Narrow);
        assert_eq!(width(u32::MAX), Width::Narrow);
    }

    #[test]
    fn test_width_cjk_widens_ambiguous() {
        assert_eq!(width(0xA1), Width::Narrow);
        assert_eq!(width_cjk(0xA1), Width::Wide);
        assert_eq!(width_cjk(0x0391), Width::Wide);
        assert_eq!(width_cjk(0xE000), Width::Wide);
        assert_eq!(width_cjk(0x10FFFD), Width::Wide);
    }

    #[test]
    fn test_width_cjk_falls_back() {
        assert_eq!(width_cjk(0), Width::Zero);
        assert_eq!(width_cjk(0x07), Width::NonPrintable);
        assert_eq!(width_cjk(0x0300), Width::NonPrintable);
        assert_eq!(width_cjk(0x41), Width::Narrow);
        assert_eq!(width_cjk(0x4E00), Width::Wide);
    }

    #[test]
    fn test_sequence_width_sums() {
        assert_eq!(sequence_width([0x41, 0x42, 0x43], None), Some(3));
        assert_eq!(sequence_width([0x4E00, 0x41, 0], None), Some(3));
        assert_eq!(sequence_width(Vec::new(), None), Some(0));
    }

    #[test]
    fn test_sequence_width_fails_fast() {
        assert_eq!(sequence_width([0x07, 0x41], None), None);
        assert_eq!(sequence_width([0x41, 0x4E00, 0x0300], None), None);
    }

    #[test]
    fn test_sequence_width_limit() {
        let cps = [0x4E00, 0x41, 0x07];
        assert_eq!(sequence_width(cps, Some(0)), Some(0));
        assert_eq!(sequence_width(cps, Some(2)), Some(3));
        assert_eq!(sequence_width(cps, Some(3)), None);
        assert_eq!(sequence_width(cps, Some(10)), None);
    }

    #[test]
    fn test_sequence_width_cjk() {
        assert_eq!(sequence_width_cjk([0xA1, 0x41]), Some(3));
        assert_eq!(sequence_width_cjk([0xA1, 0x1B]), None);
        assert_eq!(sequence_width_cjk([]), Some(0));
    }

    #[test]
    fn test_classifier_plain() {
        let c = Classifier::default();
        assert_eq!(c.width(0xA1), Width::Narrow);
        assert_eq!(c.sequence_width([0xA1, 0x41], None), Some(2));
    }

    #[test]
    fn test_classifier_tables_differ() {
        // U+2189 and U+1F100 are only in the updated snapshot
        let legacy = Classifier::new(WidthOptions::cjk());
        let updated = Classifier::new(WidthOptions::cjk().with_table(AmbiguousTable::Updated));
        assert_eq!(legacy.width(0x2189), Width::Narrow);
        assert_eq!(updated.width(0x2189), Width::Wide);
        assert_eq!(legacy.width(0x1F100), Width::Narrow);
        assert_eq!(updated.width(0x1F100), Width::Wide);
        assert_eq!(legacy.width(0xA1), Width::Wide);
        assert_eq!(updated.width(0xA1), Width::Wide);
    }

    #[test]
    fn test_classifier_matches_free_functions() {
        let c = Classifier::new(WidthOptions::cjk());
        for cp in [0, 0x07, 0x41, 0xA1, 0x0300, 0x4E00, 0xE000, 0xFFFD] {
            assert_eq!(c.width(cp), width_cjk(cp));
        }
    }
}
