//! Seven-segment glyph table and segment geometry.
//!
//! ```text
//!     2
//!   1   3
//!     0
//!   6   4
//!     5
//! ```

use crate::foundation::core::Point;

/// Set of lit segments, bit `i` for segment `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegmentMask(u8);

pub const SEGMENT_COUNT: usize = 7;

const fn mask(segments: &[usize]) -> SegmentMask {
    let mut bits = 0u8;
    let mut i = 0;
    while i < segments.len() {
        bits |= 1 << segments[i];
        i += 1;
    }
    SegmentMask(bits)
}

const GLYPHS: [SegmentMask; 10] = [
    mask(&[1, 2, 3, 4, 5, 6]),
    mask(&[3, 4]),
    mask(&[2, 3, 0, 6, 5]),
    mask(&[2, 3, 0, 4, 5]),
    mask(&[1, 0, 3, 4]),
    mask(&[2, 1, 0, 4, 5]),
    mask(&[2, 1, 0, 4, 5, 6]),
    mask(&[2, 3, 4]),
    mask(&[0, 1, 2, 3, 4, 5, 6]),
    mask(&[0, 1, 2, 3, 4, 5]),
];

impl SegmentMask {
    pub const NONE: SegmentMask = SegmentMask(0);

    /// Segments of a decimal digit glyph; `None` for anything else.
    pub fn for_glyph(c: char) -> Option<Self> {
        let d = c.to_digit(10)?;
        Some(GLYPHS[d as usize])
    }

    pub fn for_digit(d: u32) -> Option<Self> {
        GLYPHS.get(usize::try_from(d).ok()?).copied()
    }

    pub fn contains(self, segment: usize) -> bool {
        segment < SEGMENT_COUNT && self.0 & (1 << segment) != 0
    }

    pub fn lit(self) -> impl Iterator<Item = usize> {
        (0..SEGMENT_COUNT).filter(move |&s| self.contains(s))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Inline style toggling one segment's visibility.
pub fn segment_style(lit: bool) -> &'static str {
    if lit { "display: unset;" } else { "display: none;" }
}

/// Hexagonal outlines of the seven segments of a digit cell at `(x, y)` sized `w` x `h`.
pub fn digit_segments(x: f64, y: f64, w: f64, h: f64) -> [Vec<Point>; SEGMENT_COUNT] {
    // Fractions of the cell: x in eighths, y in twentieths.
    let p = |fx: f64, fy: f64| Point::new(x + w * fx / 8.0, y + h * fy / 20.0);
    let horizontal = |mid: f64| {
        vec![
            p(1.5, mid),
            p(2.0, mid + 1.0),
            p(6.0, mid + 1.0),
            p(6.5, mid),
            p(6.0, mid - 1.0),
            p(2.0, mid - 1.0),
        ]
    };
    let vertical = |cx: f64, top: f64, bottom: f64, upper: bool| {
        let (tip_a, edge_a, edge_b, tip_b) = if upper {
            (bottom, bottom - 1.0, top + 1.0, top)
        } else {
            (top, top + 1.0, bottom - 1.0, bottom)
        };
        vec![
            p(cx, tip_a),
            p(cx - 0.5, edge_a),
            p(cx - 0.5, edge_b),
            p(cx, tip_b),
            p(cx + 0.5, edge_b),
            p(cx + 0.5, edge_a),
        ]
    };
    [
        horizontal(10.0),
        vertical(1.4, 1.5, 9.5, true),
        horizontal(1.0),
        vertical(6.6, 1.5, 9.5, true),
        vertical(6.6, 10.5, 18.5, false),
        horizontal(19.0),
        vertical(1.4, 10.5, 18.5, false),
    ]
}

/// Diamond inscribed in the square at `(x, y)` with side `side`.
pub fn diamond(x: f64, y: f64, side: f64) -> Vec<Point> {
    vec![
        Point::new(x + side / 2.0, y),
        Point::new(x + side, y + side / 2.0),
        Point::new(x + side / 2.0, y + side),
        Point::new(x, y + side / 2.0),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/face/segments.rs"]
mod tests;
