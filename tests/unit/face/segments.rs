use super::*;

#[test]
fn glyph_eight_lights_everything() {
    let m = SegmentMask::for_glyph('8').unwrap();
    assert_eq!(m.len(), SEGMENT_COUNT);
    assert_eq!(m.lit().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn glyph_one_and_zero() {
    assert_eq!(
        SegmentMask::for_glyph('1').unwrap().lit().collect::<Vec<_>>(),
        vec![3, 4]
    );
    assert_eq!(
        SegmentMask::for_glyph('0').unwrap().lit().collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn remaining_glyphs_match_the_table() {
    let expect: [&[usize]; 8] = [
        &[0, 2, 3, 5, 6],
        &[0, 2, 3, 4, 5],
        &[0, 1, 3, 4],
        &[0, 1, 2, 4, 5],
        &[0, 1, 2, 4, 5, 6],
        &[2, 3, 4],
        &[0, 1, 2, 3, 4, 5, 6],
        &[0, 1, 2, 3, 4, 5],
    ];
    for (d, lit) in (2..=9).zip(expect) {
        let m = SegmentMask::for_digit(d).unwrap();
        assert_eq!(m.lit().collect::<Vec<_>>(), lit, "digit {d}");
    }
}

#[test]
fn non_digits_have_no_glyph() {
    assert_eq!(SegmentMask::for_glyph('a'), None);
    assert_eq!(SegmentMask::for_digit(10), None);
    assert!(SegmentMask::NONE.is_empty());
    assert!(!SegmentMask::NONE.contains(0));
}

#[test]
fn styles_toggle_display() {
    assert_eq!(segment_style(true), "display: unset;");
    assert_eq!(segment_style(false), "display: none;");
}

#[test]
fn segments_are_hexagons_inside_the_cell() {
    let (x, y, w, h) = (80.0, 240.0, 80.0, 120.0);
    for seg in digit_segments(x, y, w, h) {
        assert_eq!(seg.len(), 6);
        for p in seg {
            assert!(p.x >= x && p.x <= x + w, "{p:?}");
            assert!(p.y >= y && p.y <= y + h, "{p:?}");
        }
    }
}

#[test]
fn middle_bar_is_centered_vertically() {
    let seg = &digit_segments(0.0, 0.0, 80.0, 200.0)[0];
    assert_eq!(seg[0], Point::new(15.0, 100.0));
    assert_eq!(seg[3], Point::new(65.0, 100.0));
}

#[test]
fn diamond_has_four_corners_in_its_square() {
    let d = diamond(10.0, 20.0, 4.0);
    assert_eq!(
        d,
        vec![
            Point::new(12.0, 20.0),
            Point::new(14.0, 22.0),
            Point::new(12.0, 24.0),
            Point::new(10.0, 22.0),
        ]
    );
}
