use serde::{Deserialize, Serialize};

use crate::error::{CrafterError, CrafterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> CrafterResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CrafterError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One sample of a curve in domain units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in figure pixel space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left + self.width * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.top + self.height * 0.5
    }

    /// Shrinks the rectangle by the given insets, clamping to zero size.
    #[must_use]
    pub fn inset(self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: self.left + left,
            top: self.top + top,
            width: (self.width - left - right).max(0.0),
            height: (self.height - top - bottom).max(0.0),
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelRect, Viewport};

    #[test]
    fn zero_sized_viewport_is_rejected() {
        assert!(Viewport::new(0, 10).ensure_valid().is_err());
        assert!(Viewport::new(10, 10).ensure_valid().is_ok());
    }

    #[test]
    fn inset_clamps_to_empty_rect() {
        let rect = PixelRect::new(10.0, 20.0, 30.0, 40.0).inset(20.0, 0.0, 20.0, 0.0);
        assert_eq!(rect.width, 0.0);
        assert!(rect.is_degenerate());
        assert_eq!(rect.left, 30.0);
    }
}
