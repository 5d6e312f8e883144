use serde::{Deserialize, Serialize};

use crate::error::{CrafterError, CrafterResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// CSS/X11 "green", which is the darker 0x008000.
    pub const GREEN: Self = Self::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const GRID_GRAY: Self = Self::rgb(0.69, 0.69, 0.69);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f64 / 255.0,
            ((rgb >> 8) & 0xff) as f64 / 255.0,
            (rgb & 0xff) as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> CrafterResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CrafterError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStrokeStyle {
    /// On/off dash lengths in pixels for a stroke of the given width.
    #[must_use]
    pub fn dash_pattern(self, stroke_width: f64) -> Vec<f64> {
        let unit = stroke_width.max(1.0);
        match self {
            Self::Solid => Vec::new(),
            Self::Dashed => vec![3.7 * unit, 1.6 * unit],
            Self::Dotted => vec![unit, 1.65 * unit],
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> CrafterResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(CrafterError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(CrafterError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled (optionally bordered) rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> CrafterResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(CrafterError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(CrafterError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(CrafterError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(CrafterError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextRotation {
    #[default]
    Horizontal,
    /// Reads bottom to top, as vertical axis labels do.
    CounterClockwise90,
}

/// Draw command for one label in pixel space.
///
/// Alignment applies to the rotated text box, so a vertical label with
/// `Center`/`Middle` is centered on `(x, y)` either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation: TextRotation,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align: TextVAlign::Top,
            rotation: TextRotation::Horizontal,
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: TextRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> CrafterResult<()> {
        if self.text.is_empty() {
            return Err(CrafterError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(CrafterError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(CrafterError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, LineStrokeStyle, RectPrimitive};

    #[test]
    fn hex_colors_decode_channels() {
        let color = Color::from_hex(0x1f77b4);
        assert_eq!(color.red, 31.0 / 255.0);
        assert_eq!(color.green, 119.0 / 255.0);
        assert_eq!(color.blue, 180.0 / 255.0);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn out_of_range_alpha_fails_validation() {
        assert!(Color::RED.with_alpha(1.5).validate().is_err());
        assert!(Color::GREEN.with_alpha(0.15).validate().is_ok());
    }

    #[test]
    fn dash_patterns_scale_with_stroke_width() {
        assert!(LineStrokeStyle::Solid.dash_pattern(4.0).is_empty());
        assert_eq!(LineStrokeStyle::Dashed.dash_pattern(0.5), vec![3.7, 1.6]);
        assert_eq!(LineStrokeStyle::Dashed.dash_pattern(2.0), vec![7.4, 3.2]);
    }

    #[test]
    fn negative_rect_size_is_rejected() {
        let rect = RectPrimitive::new(0.0, 0.0, -1.0, 10.0, Color::WHITE);
        assert!(rect.validate().is_err());
        let line = LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, Color::BLACK);
        assert!(line.validate().is_err());
    }
}
