//! Combining marks, Unicode 14.0.0: general category Mn or Me, plus any
//! code point with a nonzero canonical combining class.

use crate::types::Interval as I;

#[rustfmt::skip]
pub(crate) static MARKS: &[I] = &[
    I::new(0x0300, 0x036F), I::new(0x0483, 0x0489), I::new(0x0591, 0x05BD),
    I::new(0x05BF, 0x05BF), I::new(0x05C1, 0x05C2), I::new(0x05C4, 0x05C5),
    I::new(0x05C7, 0x05C7), I::new(0x0610, 0x061A), I::new(0x064B, 0x065F),
    I::new(0x0670, 0x0670), I::new(0x06D6, 0x06DC), I::new(0x06DF, 0x06E4),
    I::new(0x06E7, 0x06E8), I::new(0x06EA, 0x06ED), I::new(0x0711, 0x0711),
    I::new(0x0730, 0x074A), I::new(0x07A6, 0x07B0), I::new(0x07EB, 0x07F3),
    I::new(0x07FD, 0x07FD), I::new(0x0816, 0x0819), I::new(0x081B, 0x0823),
    I::new(0x0825, 0x0827), I::new(0x0829, 0x082D), I::new(0x0859, 0x085B),
    I::new(0x0898, 0x089F), I::new(0x08CA, 0x08E1), I::new(0x08E3, 0x0902),
    I::new(0x093A, 0x093A), I::new(0x093C, 0x093C), I::new(0x0941, 0x0948),
    I::new(0x094D, 0x094D), I::new(0x0951, 0x0957), I::new(0x0962, 0x0963),
    I::new(0x0981, 0x0981), I::new(0x09BC, 0x09BC), I::new(0x09C1, 0x09C4),
    I::new(0x09CD, 0x09CD), I::new(0x09E2, 0x09E3), I::new(0x09FE, 0x09FE),
    I::new(0x0A01, 0x0A02), I::new(0x0A3C, 0x0A3C), I::new(0x0A41, 0x0A42),
    I::new(0x0A47, 0x0A48), I::new(0x0A4B, 0x0A4D), I::new(0x0A51, 0x0A51),
    I::new(0x0A70, 0x0A71), I::new(0x0A75, 0x0A75), I::new(0x0A81, 0x0A82),
    I::new(0x0ABC, 0x0ABC), I::new(0x0AC1, 0x0AC5), I::new(0x0AC7, 0x0AC8),
    I::new(0x0ACD, 0x0ACD), I::new(0x0AE2, 0x0AE3), I::new(0x0AFA, 0x0AFF),
    I::new(0x0B01, 0x0B01), I::new(0x0B3C, 0x0B3C), I::new(0x0B3F, 0x0B3F),
    I::new(0x0B41, 0x0B44), I::new(0x0B4D, 0x0B4D), I::new(0x0B55, 0x0B56),
    I::new(0x0B62, 0x0B63), I::new(0x0B82, 0x0B82), I::new(0x0BC0, 0x0BC0),
    I::new(0x0BCD, 0x0BCD), I::new(0x0C00, 0x0C00), I::new(0x0C04, 0x0C04),
    I::new(0x0C3C, 0x0C3C), I::new(0x0C3E, 0x0C40), I::new(0x0C46, 0x0C48),
    I::new(0x0C4A, 0x0C4D), I::new(0x0C55, 0x0C56), I::new(0x0C62, 0x0C63),
    I::new(0x0C81, 0x0C81), I::new(0x0CBC, 0x0CBC), I::new(0x0CBF, 0x0CBF),
    I::new(0x0CC6, 0x0CC6), I::new(0x0CCC, 0x0CCD), I::new(0x0CE2, 0x0CE3),
    I::new(0x0D00, 0x0D01), I::new(0x0D3B, 0x0D3C), I::new(0x0D41, 0x0D44),
    I::new(0x0D4D, 0x0D4D), I::new(0x0D62, 0x0D63), I::new(0x0D81, 0x0D81),
    I::new(0x0DCA, 0x0DCA), I::new(0x0DD2, 0x0DD4), I::new(0x0DD6, 0x0DD6),
    I::new(0x0E31, 0x0E31), I::new(0x0E34, 0x0E3A), I::new(0x0E47, 0x0E4E),
    I::new(0x0EB1, 0x0EB1), I::new(0x0EB4, 0x0EBC), I::new(0x0EC8, 0x0ECD),
    I::new(0x0F18, 0x0F19), I::new(0x0F35, 0x0F35), I::new(0x0F37, 0x0F37),
    I::new(0x0F39, 0x0F39), I::new(0x0F71, 0x0F7E), I::new(0x0F80, 0x0F84),
    I::new(0x0F86, 0x0F87), I::new(0x0F8D, 0x0F97), I::new(0x0F99, 0x0FBC),
    I::new(0x0FC6, 0x0FC6), I::new(0x102D, 0x1030), I::new(0x1032, 0x1037),
    I::new(0x1039, 0x103A), I::new(0x103D, 0x103E), I::new(0x1058, 0x1059),
    I::new(0x105E, 0x1060), I::new(0x1071, 0x1074), I::new(0x1082, 0x1082),
    I::new(0x1085, 0x1086), I::new(0x108D, 0x108D), I::new(0x109D, 0x109D),
    I::new(0x135D, 0x135F), I::new(0x1712, 0x1715), I::new(0x1732, 0x1734),
    I::new(0x1752, 0x1753), I::new(0x1772, 0x1773), I::new(0x17B4, 0x17B5),
    I::new(0x17B7, 0x17BD), I::new(0x17C6, 0x17C6), I::new(0x17C9, 0x17D3),
    I::new(0x17DD, 0x17DD), I::new(0x180B, 0x180D), I::new(0x180F, 0x180F),
    I::new(0x1885, 0x1886), I::new(0x18A9, 0x18A9), I::new(0x1920, 0x1922),
    I::new(0x1927, 0x1928), I::new(0x1932, 0x1932), I::new(0x1939, 0x193B),
    I::new(0x1A17, 0x1A18), I::new(0x1A1B, 0x1A1B), I::new(0x1A56, 0x1A56),
    I::new(0x1A58, 0x1A5E), I::new(0x1A60, 0x1A60), I::new(0x1A62, 0x1A62),
    I::new(0x1A65, 0x1A6C), I::new(0x1A73, 0x1A7C), I::new(0x1A7F, 0x1A7F),
    I::new(0x1AB0, 0x1ACE), I::new(0x1B00, 0x1B03), I::new(0x1B34, 0x1B34),
    I::new(0x1B36, 0x1B3A), I::new(0x1B3C, 0x1B3C), I::new(0x1B42, 0x1B42),
    I::new(0x1B44, 0x1B44), I::new(0x1B6B, 0x1B73), I::new(0x1B80, 0x1B81),
    I::new(0x1BA2, 0x1BA5), I::new(0x1BA8, 0x1BAD), I::new(0x1BE6, 0x1BE6),
    I::new(0x1BE8, 0x1BE9), I::new(0x1BED, 0x1BED), I::new(0x1BEF, 0x1BF3),
    I::new(0x1C2C, 0x1C33), I::new(0x1C36, 0x1C37), I::new(0x1CD0, 0x1CD2),
    I::new(0x1CD4, 0x1CE0), I::new(0x1CE2, 0x1CE8), I::new(0x1CED, 0x1CED),
    I::new(0x1CF4, 0x1CF4), I::new(0x1CF8, 0x1CF9), I::new(0x1DC0, 0x1DFF),
    I::new(0x20D0, 0x20F0), I::new(0x2CEF, 0x2CF1), I::new(0x2D7F, 0x2D7F),
    I::new(0x2DE0, 0x2DFF), I::new(0x302A, 0x302F), I::new(0x3099, 0x309A),
    I::new(0xA66F, 0xA672), I::new(0xA674, 0xA67D), I::new(0xA69E, 0xA69F),
    I::new(0xA6F0, 0xA6F1), I::new(0xA802, 0xA802), I::new(0xA806, 0xA806),
    I::new(0xA80B, 0xA80B), I::new(0xA825, 0xA826), I::new(0xA82C, 0xA82C),
    I::new(0xA8C4, 0xA8C5), I::new(0xA8E0, 0xA8F1), I::new(0xA8FF, 0xA8FF),
    I::new(0xA926, 0xA92D), I::new(0xA947, 0xA951), I::new(0xA953, 0xA953),
    I::new(0xA980, 0xA982), I::new(0xA9B3, 0xA9B3), I::new(0xA9B6, 0xA9B9),
    I::new(0xA9BC, 0xA9BD), I::new(0xA9C0, 0xA9C0), I::new(0xA9E5, 0xA9E5),
    I::new(0xAA29, 0xAA2E), I::new(0xAA31, 0xAA32), I::new(0xAA35, 0xAA36),
    I::new(0xAA43, 0xAA43), I::new(0xAA4C, 0xAA4C), I::new(0xAA7C, 0xAA7C),
    I::new(0xAAB0, 0xAAB0), I::new(0xAAB2, 0xAAB4), I::new(0xAAB7, 0xAAB8),
    I::new(0xAABE, 0xAABF), I::new(0xAAC1, 0xAAC1), I::new(0xAAEC, 0xAAED),
    I::new(0xAAF6, 0xAAF6), I::new(0xABE5, 0xABE5), I::new(0xABE8, 0xABE8),
    I::new(0xABED, 0xABED), I::new(0xFB1E, 0xFB1E), I::new(0xFE00, 0xFE0F),
    I::new(0xFE20, 0xFE2F), I::new(0x101FD, 0x101FD), I::new(0x102E0, 0x102E0),
    I::new(0x10376, 0x1037A), I::new(0x10A01, 0x10A03), I::new(0x10A05, 0x10A06),
    I::new(0x10A0C, 0x10A0F), I::new(0x10A38, 0x10A3A), I::new(0x10A3F, 0x10A3F),
    I::new(0x10AE5, 0x10AE6), I::new(0x10D24, 0x10D27), I::new(0x10EAB, 0x10EAC),
    I::new(0x10F46, 0x10F50), I::new(0x10F82, 0x10F85), I::new(0x11001, 0x11001),
    I::new(0x11038, 0x11046), I::new(0x11070, 0x11070), I::new(0x11073, 0x11074),
    I::new(0x1107F, 0x11081), I::new(0x110B3, 0x110B6), I::new(0x110B9, 0x110BA),
    I::new(0x110C2, 0x110C2), I::new(0x11100, 0x11102), I::new(0x11127, 0x1112B),
    I::new(0x1112D, 0x11134), I::new(0x11173, 0x11173), I::new(0x11180, 0x11181),
    I::new(0x111B6, 0x111BE), I::new(0x111C0, 0x111C0), I::new(0x111C9, 0x111CC),
    I::new(0x111CF, 0x111CF), I::new(0x1122F, 0x11231), I::new(0x11234, 0x11237),
    I::new(0x1123E, 0x1123E), I::new(0x112DF, 0x112DF), I::new(0x112E3, 0x112EA),
    I::new(0x11300, 0x11301), I::new(0x1133B, 0x1133C), I::new(0x11340, 0x11340),
    I::new(0x1134D, 0x1134D), I::new(0x11366, 0x1136C), I::new(0x11370, 0x11374),
    I::new(0x11438, 0x1143F), I::new(0x11442, 0x11444), I::new(0x11446, 0x11446),
    I::new(0x1145E, 0x1145E), I::new(0x114B3, 0x114B8), I::new(0x114BA, 0x114BA),
    I::new(0x114BF, 0x114C0), I::new(0x114C2, 0x114C3), I::new(0x115B2, 0x115B5),
    I::new(0x115BC, 0x115BD), I::new(0x115BF, 0x115C0), I::new(0x115DC, 0x115DD),
    I::new(0x11633, 0x1163A), I::new(0x1163D, 0x1163D), I::new(0x1163F, 0x11640),
    I::new(0x116AB, 0x116AB), I::new(0x116AD, 0x116AD), I::new(0x116B0, 0x116B7),
    I::new(0x1171D, 0x1171F), I::new(0x11722, 0x11725), I::new(0x11727, 0x1172B),
    I::new(0x1182F, 0x11837), I::new(0x11839, 0x1183A), I::new(0x1193B, 0x1193E),
    I::new(0x11943, 0x11943), I::new(0x119D4, 0x119D7), I::new(0x119DA, 0x119DB),
    I::new(0x119E0, 0x119E0), I::new(0x11A01, 0x11A0A), I::new(0x11A33, 0x11A38),
    I::new(0x11A3B, 0x11A3E), I::new(0x11A47, 0x11A47), I::new(0x11A51, 0x11A56),
    I::new(0x11A59, 0x11A5B), I::new(0x11A8A, 0x11A96), I::new(0x11A98, 0x11A99),
    I::new(0x11C30, 0x11C36), I::new(0x11C38, 0x11C3D), I::new(0x11C3F, 0x11C3F),
    I::new(0x11C92, 0x11CA7), I::new(0x11CAA, 0x11CB0), I::new(0x11CB2, 0x11CB3),
    I::new(0x11CB5, 0x11CB6), I::new(0x11D31, 0x11D36), I::new(0x11D3A, 0x11D3A),
    I::new(0x11D3C, 0x11D3D), I::new(0x11D3F, 0x11D45), I::new(0x11D47, 0x11D47),
    I::new(0x11D90, 0x11D91), I::new(0x11D95, 0x11D95), I::new(0x11D97, 0x11D97),
    I::new(0x11EF3, 0x11EF4), I::new(0x16AF0, 0x16AF4), I::new(0x16B30, 0x16B36),
    I::new(0x16F4F, 0x16F4F), I::new(0x16F8F, 0x16F92), I::new(0x16FE4, 0x16FE4),
    I::new(0x16FF0, 0x16FF1), I::new(0x1BC9D, 0x1BC9E), I::new(0x1CF00, 0x1CF2D),
    I::new(0x1CF30, 0x1CF46), I::new(0x1D165, 0x1D169), I::new(0x1D16D, 0x1D172),
    I::new(0x1D17B, 0x1D182), I::new(0x1D185, 0x1D18B), I::new(0x1D1AA, 0x1D1AD),
    I::new(0x1D242, 0x1D244), I::new(0x1DA00, 0x1DA36), I::new(0x1DA3B, 0x1DA6C),
    I::new(0x1DA75, 0x1DA75), I::new(0x1DA84, 0x1DA84), I::new(0x1DA9B, 0x1DA9F),
    I::new(0x1DAA1, 0x1DAAF), I::new(0x1E000, 0x1E006), I::new(0x1E008, 0x1E018),
    I::new(0x1E01B, 0x1E021), I::new(0x1E023, 0x1E024), I::new(0x1E026, 0x1E02A),
    I::new(0x1E130, 0x1E136), I::new(0x1E2AE, 0x1E2AE), I::new(0x1E2EC, 0x1E2EF),
    I::new(0x1E8D0, 0x1E8D6), I::new(0x1E944, 0x1E94A), I::new(0xE0100, 0xE01EF),
];
