use cellwidth::{
    char_width, contains, display_width, display_width_cjk, is_combining, sequence_width,
    sequence_width_cjk, truncate_to_width, width, width_cjk, AmbiguousTable, Classifier,
    Interval, IntervalTable, TableError, Width, WidthOptions,
};
use unicode_width::UnicodeWidthChar;

fn width_report(cps: &[u32]) -> String {
    cps.iter()
        .map(|&cp| {
            format!(
                "U+{:04X} {:>2} {:>2}",
                cp,
                width(cp).as_i8(),
                width_cjk(cp).as_i8()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_width_report() {
    let cps = [
        0x0000, 0x0007, 0x0041, 0x00A1, 0x0301, 0x0391, 0x2189, 0x303F, 0x4DC0, 0x4E00, 0xE000,
        0xFF21, 0x1F600,
    ];
    insta::assert_snapshot!(width_report(&cps), @r"
    U+0000  0  0
    U+0007 -1 -1
    U+0041  1  1
    U+00A1  1  2
    U+0301 -1 -1
    U+0391  1  2
    U+2189  1  1
    U+303F  1  1
    U+4DC0  1  1
    U+4E00  2  2
    U+E000  1  2
    U+FF21  2  2
    U+1F600  1  1
    ");
}

#[test]
fn test_spacing_combining_marks_fail_sequence() {
    assert_eq!(width(0x302E), Width::NonPrintable);
    assert_eq!(width(0x1D165), Width::NonPrintable);
    assert_eq!(sequence_width([0x4E00, 0x302E], None), None);
    assert_eq!(display_width("\u{1D158}\u{1D165}"), None);
}

#[test]
fn test_end_to_end_cjk_sequence() {
    assert_eq!(sequence_width_cjk([0x00A1, 0x0041]), Some(3));
    assert_eq!(sequence_width([0x00A1, 0x0041], None), Some(2));
}

#[test]
fn test_empty_sequence() {
    assert_eq!(sequence_width(std::iter::empty(), None), Some(0));
    assert_eq!(sequence_width_cjk(std::iter::empty()), Some(0));
    assert_eq!(display_width(""), Some(0));
}

#[test]
fn test_failure_position_does_not_matter() {
    let bad = 0x1B;
    assert_eq!(sequence_width([bad, 0x41, 0x42], None), None);
    assert_eq!(sequence_width([0x41, bad, 0x42], None), None);
    assert_eq!(sequence_width([0x41, 0x42, bad], None), None);
}

#[test]
fn test_limit_stops_before_failure() {
    let cps = [0x41, 0x4E00, 0x0301];
    assert_eq!(sequence_width(cps, Some(2)), Some(3));
    assert_eq!(sequence_width(cps, None), None);
}

#[test]
fn test_mixed_script_string() {
    assert_eq!(display_width("Hello, 世界!"), Some(12));
    assert_eq!(display_width("한국어"), Some(6));
    assert_eq!(display_width("ＡＢＣ"), Some(6));
    assert_eq!(display_width("ΑΒΓ"), Some(3));
    assert_eq!(display_width_cjk("ΑΒΓ"), Some(6));
}

#[test]
fn test_classifier_options() {
    let plain = Classifier::new(WidthOptions::default());
    let legacy = Classifier::new(WidthOptions::cjk());
    let updated = Classifier::new(WidthOptions::cjk().with_table(AmbiguousTable::Updated));

    assert_eq!(plain.sequence_width([0x1F100], None), Some(1));
    assert_eq!(legacy.sequence_width([0x1F100], None), Some(1));
    assert_eq!(updated.sequence_width([0x1F100], None), Some(2));
    assert_eq!(updated.options().table, AmbiguousTable::Updated);
}

#[test]
fn test_updated_snapshot_is_superset() {
    let legacy = IntervalTable::ambiguous(AmbiguousTable::Legacy);
    let updated = IntervalTable::ambiguous(AmbiguousTable::Updated);
    for iv in legacy.iter() {
        for cp in iv.lo..=iv.hi {
            assert!(updated.contains(cp), "U+{:04X}", cp);
        }
    }
}

#[test]
fn test_ambiguous_tables_exclude_marks() {
    for which in [AmbiguousTable::Legacy, AmbiguousTable::Updated] {
        for iv in IntervalTable::ambiguous(which) {
            for cp in iv.lo..=iv.hi {
                assert!(!is_combining(cp), "U+{:04X}", cp);
            }
        }
    }
}

#[test]
fn test_custom_table() {
    static BOX_DRAWING: &[Interval] = &[Interval::new(0x2500, 0x257F)];
    let table = IntervalTable::new(BOX_DRAWING).unwrap();
    assert!(contains(&table, 0x2500));
    assert!(contains(&table, 0x257F));
    assert!(!contains(&table, 0x24FF));
    assert!(!contains(&table, 0x2580));
}

#[test]
fn test_custom_table_rejected() {
    static OVERLAPPING: &[Interval] = &[Interval::new(0x10, 0x20), Interval::new(0x18, 0x30)];
    let err = IntervalTable::new(OVERLAPPING).unwrap_err();
    assert!(matches!(err, TableError::Unsorted { index: 1, .. }));
}

#[test]
fn test_truncate_mixed() {
    assert_eq!(truncate_to_width("ab中文cd", 4), Some("ab中"));
    assert_eq!(truncate_to_width("ab中文cd", 3), Some("ab"));
}

#[test]
fn test_agrees_with_unicode_width_on_cjk() {
    for cp in (0x4E00..=0x9FFF).chain(0xAC00..=0xD7A3) {
        let c = char::from_u32(cp).unwrap();
        assert_eq!(UnicodeWidthChar::width(c), Some(2), "U+{:04X}", cp);
        assert_eq!(char_width(c), Width::Wide, "U+{:04X}", cp);
    }
}

#[test]
fn test_agrees_with_unicode_width_on_ascii() {
    for c in ' '..='~' {
        assert_eq!(UnicodeWidthChar::width(c), Some(1));
        assert_eq!(char_width(c), Width::Narrow);
    }
}
