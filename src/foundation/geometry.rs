//! Angular placement helpers.

use crate::foundation::core::{Affine, Point};

/// Rotate `point` around `center` by `degrees` (positive is clockwise in SVG's y-down space).
#[inline]
pub fn rotate_around(point: Point, center: Point, degrees: f64) -> Point {
    Affine::rotate_about(degrees.to_radians(), center) * point
}

/// SVG `rotate(a cx,cy)` transform string, as consumed by the hand and label nodes.
pub fn rotate_attr(degrees: f64, center: Point) -> String {
    format!("rotate({degrees} {},{})", center.x, center.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
