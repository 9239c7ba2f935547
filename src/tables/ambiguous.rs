//! East Asian Ambiguous (A) intervals, minus Mn, Me and Cf.
//!
//! Two pinned snapshots are kept side by side. Do not merge or edit them
//! by hand: regenerate from the Unicode Character Database and keep each
//! list sorted and non-overlapping.

use crate::types::Interval as I;

/// Ambiguous-width set used by the legacy CJK classifier.
///
/// Generated with `uniset +WIDTH-A -cat=Me -cat=Mn -cat=Cf c`.
#[rustfmt::skip]
pub(crate) static LEGACY: &[I] = &[
    I::new(0x00A1, 0x00A1), I::new(0x00A4, 0x00A4), I::new(0x00A7, 0x00A8),
    I::new(0x00AA, 0x00AA), I::new(0x00AE, 0x00AE), I::new(0x00B0, 0x00B4),
    I::new(0x00B6, 0x00BA), I::new(0x00BC, 0x00BF), I::new(0x00C6, 0x00C6),
    I::new(0x00D0, 0x00D0), I::new(0x00D7, 0x00D8), I::new(0x00DE, 0x00E1),
    I::new(0x00E6, 0x00E6), I::new(0x00E8, 0x00EA), I::new(0x00EC, 0x00ED),
    I::new(0x00F0, 0x00F0), I::new(0x00F2, 0x00F3), I::new(0x00F7, 0x00FA),
    I::new(0x00FC, 0x00FC), I::new(0x00FE, 0x00FE), I::new(0x0101, 0x0101),
    I::new(0x0111, 0x0111), I::new(0x0113, 0x0113), I::new(0x011B, 0x011B),
    I::new(0x0126, 0x0127), I::new(0x012B, 0x012B), I::new(0x0131, 0x0133),
    I::new(0x0138, 0x0138), I::new(0x013F, 0x0142), I::new(0x0144, 0x0144),
    I::new(0x0148, 0x014B), I::new(0x014D, 0x014D), I::new(0x0152, 0x0153),
    I::new(0x0166, 0x0167), I::new(0x016B, 0x016B), I::new(0x01CE, 0x01CE),
    I::new(0x01D0, 0x01D0), I::new(0x01D2, 0x01D2), I::new(0x01D4, 0x01D4),
    I::new(0x01D6, 0x01D6), I::new(0x01D8, 0x01D8), I::new(0x01DA, 0x01DA),
    I::new(0x01DC, 0x01DC), I::new(0x0251, 0x0251), I::new(0x0261, 0x0261),
    I::new(0x02C4, 0x02C4), I::new(0x02C7, 0x02C7), I::new(0x02C9, 0x02CB),
    I::new(0x02CD, 0x02CD), I::new(0x02D0, 0x02D0), I::new(0x02D8, 0x02DB),
    I::new(0x02DD, 0x02DD), I::new(0x02DF, 0x02DF), I::new(0x0391, 0x03A1),
    I::new(0x03A3, 0x03A9), I::new(0x03B1, 0x03C1), I::new(0x03C3, 0x03C9),
    I::new(0x0401, 0x0401), I::new(0x0410, 0x044F), I::new(0x0451, 0x0451),
    I::new(0x2010, 0x2010), I::new(0x2013, 0x2016), I::new(0x2018, 0x2019),
    I::new(0x201C, 0x201D), I::new(0x2020, 0x2022), I::new(0x2024, 0x2027),
    I::new(0x2030, 0x2030), I::new(0x2032, 0x2033), I::new(0x2035, 0x2035),
    I::new(0x203B, 0x203B), I::new(0x203E, 0x203E), I::new(0x2074, 0x2074),
    I::new(0x207F, 0x207F), I::new(0x2081, 0x2084), I::new(0x20AC, 0x20AC),
    I::new(0x2103, 0x2103), I::new(0x2105, 0x2105), I::new(0x2109, 0x2109),
    I::new(0x2113, 0x2113), I::new(0x2116, 0x2116), I::new(0x2121, 0x2122),
    I::new(0x2126, 0x2126), I::new(0x212B, 0x212B), I::new(0x2153, 0x2154),
    I::new(0x215B, 0x215E), I::new(0x2160, 0x216B), I::new(0x2170, 0x2179),
    I::new(0x2190, 0x2199), I::new(0x21B8, 0x21B9), I::new(0x21D2, 0x21D2),
    I::new(0x21D4, 0x21D4), I::new(0x21E7, 0x21E7), I::new(0x2200, 0x2200),
    I::new(0x2202, 0x2203), I::new(0x2207, 0x2208), I::new(0x220B, 0x220B),
    I::new(0x220F, 0x220F), I::new(0x2211, 0x2211), I::new(0x2215, 0x2215),
    I::new(0x221A, 0x221A), I::new(0x221D, 0x2220), I::new(0x2223, 0x2223),
    I::new(0x2225, 0x2225), I::new(0x2227, 0x222C), I::new(0x222E, 0x222E),
    I::new(0x2234, 0x2237), I::new(0x223C, 0x223D), I::new(0x2248, 0x2248),
    I::new(0x224C, 0x224C), I::new(0x2252, 0x2252), I::new(0x2260, 0x2261),
    I::new(0x2264, 0x2267), I::new(0x226A, 0x226B), I::new(0x226E, 0x226F),
    I::new(0x2282, 0x2283), I::new(0x2286, 0x2287), I::new(0x2295, 0x2295),
    I::new(0x2299, 0x2299), I::new(0x22A5, 0x22A5), I::new(0x22BF, 0x22BF),
    I::new(0x2312, 0x2312), I::new(0x2460, 0x24E9), I::new(0x24EB, 0x254B),
    I::new(0x2550, 0x2573), I::new(0x2580, 0x258F), I::new(0x2592, 0x2595),
    I::new(0x25A0, 0x25A1), I::new(0x25A3, 0x25A9), I::new(0x25B2, 0x25B3),
    I::new(0x25B6, 0x25B7), I::new(0x25BC, 0x25BD), I::new(0x25C0, 0x25C1),
    I::new(0x25C6, 0x25C8), I::new(0x25CB, 0x25CB), I::new(0x25CE, 0x25D1),
    I::new(0x25E2, 0x25E5), I::new(0x25EF, 0x25EF), I::new(0x2605, 0x2606),
    I::new(0x2609, 0x2609), I::new(0x260E, 0x260F), I::new(0x2614, 0x2615),
    I::new(0x261C, 0x261C), I::new(0x261E, 0x261E), I::new(0x2640, 0x2640),
    I::new(0x2642, 0x2642), I::new(0x2660, 0x2661), I::new(0x2663, 0x2665),
    I::new(0x2667, 0x266A), I::new(0x266C, 0x266D), I::new(0x266F, 0x266F),
    I::new(0x273D, 0x273D), I::new(0x2776, 0x277F), I::new(0xE000, 0xF8FF),
    I::new(0xFFFD, 0xFFFD), I::new(0xF0000, 0xFFFFD), I::new(0x100000, 0x10FFFD),
];

/// Ambiguous-width set from a later Unicode revision.
///
/// Generated with `uniset eaw:A - cat:Me,Mn,Cf`.
#[rustfmt::skip]
pub(crate) static UPDATED: &[I] = &[
    I::new(0x00A1, 0x00A1), I::new(0x00A4, 0x00A4), I::new(0x00A7, 0x00A8),
    I::new(0x00AA, 0x00AA), I::new(0x00AE, 0x00AE), I::new(0x00B0, 0x00B4),
    I::new(0x00B6, 0x00BA), I::new(0x00BC, 0x00BF), I::new(0x00C6, 0x00C6),
    I::new(0x00D0, 0x00D0), I::new(0x00D7, 0x00D8), I::new(0x00DE, 0x00E1),
    I::new(0x00E6, 0x00E6), I::new(0x00E8, 0x00EA), I::new(0x00EC, 0x00ED),
    I::new(0x00F0, 0x00F0), I::new(0x00F2, 0x00F3), I::new(0x00F7, 0x00FA),
    I::new(0x00FC, 0x00FC), I::new(0x00FE, 0x00FE), I::new(0x0101, 0x0101),
    I::new(0x0111, 0x0111), I::new(0x0113, 0x0113), I::new(0x011B, 0x011B),
    I::new(0x0126, 0x0127), I::new(0x012B, 0x012B), I::new(0x0131, 0x0133),
    I::new(0x0138, 0x0138), I::new(0x013F, 0x0142), I::new(0x0144, 0x0144),
    I::new(0x0148, 0x014B), I::new(0x014D, 0x014D), I::new(0x0152, 0x0153),
    I::new(0x0166, 0x0167), I::new(0x016B, 0x016B), I::new(0x01CE, 0x01CE),
    I::new(0x01D0, 0x01D0), I::new(0x01D2, 0x01D2), I::new(0x01D4, 0x01D4),
    I::new(0x01D6, 0x01D6), I::new(0x01D8, 0x01D8), I::new(0x01DA, 0x01DA),
    I::new(0x01DC, 0x01DC), I::new(0x0251, 0x0251), I::new(0x0261, 0x0261),
    I::new(0x02C4, 0x02C4), I::new(0x02C7, 0x02C7), I::new(0x02C9, 0x02CB),
    I::new(0x02CD, 0x02CD), I::new(0x02D0, 0x02D0), I::new(0x02D8, 0x02DB),
    I::new(0x02DD, 0x02DD), I::new(0x02DF, 0x02DF), I::new(0x0391, 0x03A1),
    I::new(0x03A3, 0x03A9), I::new(0x03B1, 0x03C1), I::new(0x03C3, 0x03C9),
    I::new(0x0401, 0x0401), I::new(0x0410, 0x044F), I::new(0x0451, 0x0451),
    I::new(0x2010, 0x2010), I::new(0x2013, 0x2016), I::new(0x2018, 0x2019),
    I::new(0x201C, 0x201D), I::new(0x2020, 0x2022), I::new(0x2024, 0x2027),
    I::new(0x2030, 0x2030), I::new(0x2032, 0x2033), I::new(0x2035, 0x2035),
    I::new(0x203B, 0x203B), I::new(0x203E, 0x203E), I::new(0x2074, 0x2074),
    I::new(0x207F, 0x207F), I::new(0x2081, 0x2084), I::new(0x20AC, 0x20AC),
    I::new(0x2103, 0x2103), I::new(0x2105, 0x2105), I::new(0x2109, 0x2109),
    I::new(0x2113, 0x2113), I::new(0x2116, 0x2116), I::new(0x2121, 0x2122),
    I::new(0x2126, 0x2126), I::new(0x212B, 0x212B), I::new(0x2153, 0x2154),
    I::new(0x215B, 0x215E), I::new(0x2160, 0x216B), I::new(0x2170, 0x2179),
    I::new(0x2189, 0x2189), I::new(0x2190, 0x2199), I::new(0x21B8, 0x21B9),
    I::new(0x21D2, 0x21D2), I::new(0x21D4, 0x21D4), I::new(0x21E7, 0x21E7),
    I::new(0x2200, 0x2200), I::new(0x2202, 0x2203), I::new(0x2207, 0x2208),
    I::new(0x220B, 0x220B), I::new(0x220F, 0x220F), I::new(0x2211, 0x2211),
    I::new(0x2215, 0x2215), I::new(0x221A, 0x221A), I::new(0x221D, 0x2220),
    I::new(0x2223, 0x2223), I::new(0x2225, 0x2225), I::new(0x2227, 0x222C),
    I::new(0x222E, 0x222E), I::new(0x2234, 0x2237), I::new(0x223C, 0x223D),
    I::new(0x2248, 0x2248), I::new(0x224C, 0x224C), I::new(0x2252, 0x2252),
    I::new(0x2260, 0x2261), I::new(0x2264, 0x2267), I::new(0x226A, 0x226B),
    I::new(0x226E, 0x226F), I::new(0x2282, 0x2283), I::new(0x2286, 0x2287),
    I::new(0x2295, 0x2295), I::new(0x2299, 0x2299), I::new(0x22A5, 0x22A5),
    I::new(0x22BF, 0x22BF), I::new(0x2312, 0x2312), I::new(0x2460, 0x24E9),
    I::new(0x24EB, 0x254B), I::new(0x2550, 0x2573), I::new(0x2580, 0x258F),
    I::new(0x2592, 0x2595), I::new(0x25A0, 0x25A1), I::new(0x25A3, 0x25A9),
    I::new(0x25B2, 0x25B3), I::new(0x25B6, 0x25B7), I::new(0x25BC, 0x25BD),
    I::new(0x25C0, 0x25C1), I::new(0x25C6, 0x25C8), I::new(0x25CB, 0x25CB),
    I::new(0x25CE, 0x25D1), I::new(0x25E2, 0x25E5), I::new(0x25EF, 0x25EF),
    I::new(0x2605, 0x2606), I::new(0x2609, 0x2609), I::new(0x260E, 0x260F),
    I::new(0x2614, 0x2615), I::new(0x261C, 0x261C), I::new(0x261E, 0x261E),
    I::new(0x2640, 0x2640), I::new(0x2642, 0x2642), I::new(0x2660, 0x2661),
    I::new(0x2663, 0x2665), I::new(0x2667, 0x266A), I::new(0x266C, 0x266D),
    I::new(0x266F, 0x266F), I::new(0x269E, 0x269F), I::new(0x26BE, 0x26BF),
    I::new(0x26C4, 0x26CD), I::new(0x26CF, 0x26E1), I::new(0x26E3, 0x26E3),
    I::new(0x26E8, 0x26FF), I::new(0x273D, 0x273D), I::new(0x2757, 0x2757),
    I::new(0x2776, 0x277F), I::new(0x2B55, 0x2B59), I::new(0x3248, 0x324F),
    I::new(0xE000, 0xF8FF), I::new(0xFFFD, 0xFFFD), I::new(0x1F100, 0x1F10A),
    I::new(0x1F110, 0x1F12D), I::new(0x1F130, 0x1F169), I::new(0x1F170, 0x1F19A),
    I::new(0xF0000, 0xFFFFD), I::new(0x100000, 0x10FFFD),
];
