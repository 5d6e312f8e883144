use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::error::{CrafterError, CrafterResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextRotation, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

const CLEAR_COLOR: Color = Color::WHITE;
const FONT_FAMILY: &str = "Sans";

/// Cairo + Pango renderer drawing into an offscreen ARGB image surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> CrafterResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(CrafterError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface content as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> CrafterResult<()> {
        let path = path.as_ref();
        self.surface.flush();
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            CrafterError::InvalidData(format!(
                "failed to encode png `{}`: {err}",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> CrafterResult<()> {
        frame.validate()?;

        apply_color(context, CLEAR_COLOR);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in frame.layers() {
            for rect in &layer.rects {
                draw_rect(context, *rect)?;
                stats.rects_drawn += 1;
            }
            for line in &layer.lines {
                draw_line(context, *line)?;
                stats.lines_drawn += 1;
            }
            for text in &layer.texts {
                draw_text(context, text)?;
                stats.texts_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> CrafterResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn draw_line(context: &Context, line: LinePrimitive) -> CrafterResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_dash(&line.stroke_style.dash_pattern(line.stroke_width), 0.0);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> CrafterResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context.set_dash(&[], 0.0);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> CrafterResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description =
        FontDescription::from_string(&format!("{FONT_FAMILY} {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let (width, height) = (f64::from(width), f64::from(height));
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -width / 2.0,
        TextHAlign::Right => -width,
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -height / 2.0,
        TextVAlign::Bottom => -height,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    apply_color(context, text.color);
    context.translate(text.x, text.y);
    if text.rotation == TextRotation::CounterClockwise90 {
        context.rotate(-FRAC_PI_2);
    }
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> CrafterError {
    CrafterError::InvalidData(format!("{prefix}: {err}"))
}
