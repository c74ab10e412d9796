use crate::foundation::error::{ClockError, ClockResult};

pub use kurbo::{Affine, Point};

/// Size of the host drawing surface in user units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 880,
            height: 880,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ClockResult<Self> {
        if width == 0 || height == 0 {
            return Err(ClockError::config("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Geometric center of the surface.
    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
