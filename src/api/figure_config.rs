use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{CrafterError, CrafterResult};

/// Space reserved inside each grid cell around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelInsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for PanelInsets {
    fn default() -> Self {
        Self {
            left: 64.0,
            top: 34.0,
            right: 64.0,
            bottom: 50.0,
        }
    }
}

/// Figure-level appearance and geometry.
///
/// Serializable so a host can keep a tuned layout next to its outputs; the
/// sweep binary only ever uses the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_byline")]
    pub byline: String,
    #[serde(default = "default_title_font_px")]
    pub title_font_px: f64,
    #[serde(default = "default_panel_title_font_px")]
    pub panel_title_font_px: f64,
    #[serde(default = "default_axis_label_font_px")]
    pub axis_label_font_px: f64,
    #[serde(default = "default_tick_font_px")]
    pub tick_font_px: f64,
    #[serde(default = "default_legend_font_px")]
    pub legend_font_px: f64,
    /// Height of the band holding the title and byline.
    #[serde(default = "default_header_height_px")]
    pub header_height_px: f64,
    /// Horizontal margin on each side of the grid, where legends live.
    #[serde(default = "default_legend_gutter_px")]
    pub legend_gutter_px: f64,
    #[serde(default = "default_footer_height_px")]
    pub footer_height_px: f64,
    #[serde(default)]
    pub panel_insets: PanelInsets,
    /// Legend anchor distance from the plot edge, as a fraction of plot width.
    #[serde(default = "default_legend_anchor_offset_ratio")]
    pub legend_anchor_offset_ratio: f64,
    /// Average glyph advance as a fraction of font size, used to size legends.
    #[serde(default = "default_char_width_ratio")]
    pub char_width_ratio: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            title: default_title(),
            byline: default_byline(),
            title_font_px: default_title_font_px(),
            panel_title_font_px: default_panel_title_font_px(),
            axis_label_font_px: default_axis_label_font_px(),
            tick_font_px: default_tick_font_px(),
            legend_font_px: default_legend_font_px(),
            header_height_px: default_header_height_px(),
            legend_gutter_px: default_legend_gutter_px(),
            footer_height_px: default_footer_height_px(),
            panel_insets: PanelInsets::default(),
            legend_anchor_offset_ratio: default_legend_anchor_offset_ratio(),
            char_width_ratio: default_char_width_ratio(),
        }
    }
}

impl FigureConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_legend_gutter_px(mut self, legend_gutter_px: f64) -> Self {
        self.legend_gutter_px = legend_gutter_px;
        self
    }

    pub fn validate(&self) -> CrafterResult<()> {
        self.viewport.ensure_valid()?;

        for (name, value) in [
            ("title_font_px", self.title_font_px),
            ("panel_title_font_px", self.panel_title_font_px),
            ("axis_label_font_px", self.axis_label_font_px),
            ("tick_font_px", self.tick_font_px),
            ("legend_font_px", self.legend_font_px),
            ("char_width_ratio", self.char_width_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CrafterError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("header_height_px", self.header_height_px),
            ("legend_gutter_px", self.legend_gutter_px),
            ("footer_height_px", self.footer_height_px),
            ("legend_anchor_offset_ratio", self.legend_anchor_offset_ratio),
            ("panel_insets.left", self.panel_insets.left),
            ("panel_insets.top", self.panel_insets.top),
            ("panel_insets.right", self.panel_insets.right),
            ("panel_insets.bottom", self.panel_insets.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CrafterError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }

    /// Rough rendered width of `text` at `font_px`.
    #[must_use]
    pub fn estimate_text_width(&self, text: &str, font_px: f64) -> f64 {
        text.chars().count() as f64 * font_px * self.char_width_ratio
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(2560, 1440)
}

fn default_title() -> String {
    "Input / Output analysis of the crafter".to_owned()
}

fn default_byline() -> String {
    "By Meltwin - 2023".to_owned()
}

fn default_title_font_px() -> f64 {
    34.0
}

fn default_panel_title_font_px() -> f64 {
    14.0
}

fn default_axis_label_font_px() -> f64 {
    13.0
}

fn default_tick_font_px() -> f64 {
    11.0
}

fn default_legend_font_px() -> f64 {
    12.0
}

fn default_header_height_px() -> f64 {
    110.0
}

fn default_legend_gutter_px() -> f64 {
    230.0
}

fn default_footer_height_px() -> f64 {
    12.0
}

fn default_legend_anchor_offset_ratio() -> f64 {
    0.2
}

fn default_char_width_ratio() -> f64 {
    0.58
}

#[cfg(test)]
mod tests {
    use super::FigureConfig;
    use crate::core::Viewport;

    #[test]
    fn defaults_are_valid() {
        FigureConfig::default().validate().expect("valid defaults");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: FigureConfig =
            serde_json::from_str(r#"{"viewport":{"width":800,"height":600}}"#).expect("parse");
        assert_eq!(config.viewport, Viewport::new(800, 600));
        assert_eq!(config.title_font_px, 34.0);
        assert_eq!(config.byline, "By Meltwin - 2023");
    }

    #[test]
    fn negative_gutter_is_rejected() {
        let config = FigureConfig::default().with_legend_gutter_px(-1.0);
        assert!(config.validate().is_err());
    }
}
