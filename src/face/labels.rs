//! Label content and placement shared by the analog face and its relabel handlers.

use std::sync::LazyLock;

use crate::{
    config::form::{LabelStyle, LabelToggles},
    foundation::core::{Canvas, Point},
    foundation::geometry::rotate_around,
};

/// Largest value covered by the Roman numeral table.
pub const ROMAN_MAX: u32 = 3600;

const ROMAN_PAIRS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// `ROMAN[i]` is the numeral for `i + 1`.
static ROMAN: LazyLock<Vec<String>> = LazyLock::new(|| (1..=ROMAN_MAX).map(to_roman).collect());

/// Subtractive-pair Roman numeral; empty for zero.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for (sym, v) in ROMAN_PAIRS {
        for _ in 0..n / v {
            out.push_str(sym);
        }
        n %= v;
    }
    out
}

/// Precomputed numeral for `n` in `1..=ROMAN_MAX`.
pub fn roman(n: u32) -> Option<&'static str> {
    let idx = usize::try_from(n.checked_sub(1)?).ok()?;
    ROMAN.get(idx).map(String::as_str)
}

/// Content of label `index` (0-based, shown as `index + 1`).
pub fn label_text(style: LabelStyle, index: usize) -> String {
    match style {
        LabelStyle::Arabic => (index + 1).to_string(),
        LabelStyle::Roman => ROMAN.get(index).cloned().unwrap_or_default(),
        LabelStyle::None => String::new(),
    }
}

/// Label classes drawn around the analog face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelRing {
    Hours,
    Minutes,
    Seconds,
}

impl LabelRing {
    pub const ALL: [LabelRing; 3] = [LabelRing::Hours, LabelRing::Minutes, LabelRing::Seconds];

    pub fn count(self) -> usize {
        match self {
            LabelRing::Hours => 12,
            LabelRing::Minutes | LabelRing::Seconds => 60,
        }
    }

    /// Id of the group holding this ring's text nodes.
    pub fn group_id(self) -> &'static str {
        match self {
            LabelRing::Hours => "hour-labels",
            LabelRing::Minutes => "minute-labels",
            LabelRing::Seconds => "second-labels",
        }
    }

    pub fn label_id(self, index: usize) -> String {
        match self {
            LabelRing::Hours => format!("hour-label-{index}"),
            LabelRing::Minutes => format!("minute-label-{index}"),
            LabelRing::Seconds => format!("second-label-{index}"),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LabelRing::Hours => "center-text",
            LabelRing::Minutes => "small-text center-text",
            LabelRing::Seconds => "smaller-text center-text",
        }
    }

    /// Whether label `index` of this ring shows content under `toggles`.
    pub fn shows(self, toggles: LabelToggles, index: usize) -> bool {
        match self {
            LabelRing::Hours => toggles.hours,
            LabelRing::Minutes => {
                toggles.minutes && (!toggles.minutes_every_5 || (index + 1) % 5 == 0)
            }
            LabelRing::Seconds => toggles.seconds,
        }
    }

    /// Gated label content.
    pub fn text(self, style: LabelStyle, toggles: LabelToggles, index: usize) -> String {
        if self.shows(toggles, index) {
            label_text(style, index)
        } else {
            String::new()
        }
    }

    /// Anchor of label `index`, rotated `(index + 1)` steps from twelve o'clock.
    pub fn position(self, canvas: Canvas, inner: bool, index: usize) -> Point {
        let (w, h) = (canvas.w(), canvas.h());
        let step = (index + 1) as f64;
        match self {
            LabelRing::Hours => {
                let center = Point::new(w * 11.0 / 22.0, h * 11.2 / 22.0);
                let ty = if inner { h * 6.0 / 22.0 } else { h * 0.75 / 11.0 };
                rotate_around(Point::new(w * 11.0 / 22.0, ty), center, step * 30.0)
            }
            LabelRing::Minutes | LabelRing::Seconds => {
                let center = Point::new(w * 11.0 / 22.0, h * 11.1 / 22.0);
                rotate_around(Point::new(w * 11.0 / 22.0, h * 0.90 / 11.0), center, step * 6.0)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/labels.rs"]
mod tests;
