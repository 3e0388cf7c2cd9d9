//! Icon painters: the glyph painter and the trait custom painters implement.

use awesome_icons_core::logging::{PerfSpan, span_names, targets};
use awesome_icons_render::text::{Font, FontBackend};
use awesome_icons_render::{Color, Painter, Rect, Size};

use crate::options::{IconMode, IconState, OptionSet, OptionValue, keys, resolve_for_state};
use crate::registry::FontRegistry;
use crate::style::IconStyle;
use crate::theme::DUOTONE_OPACITY;

/// Bit that selects the secondary layer of a duotone glyph.
pub const DUOTONE_SECONDARY_BIT: u32 = 0x10_0000;

/// Fraction of the target rect a shrunk glyph may occupy.
pub const FIT_MARGIN: f32 = 0.95;

/// What painters get to work with besides the drawing surface.
pub struct PaintContext<'a> {
    registry: &'a FontRegistry,
    backend: &'a mut dyn FontBackend,
}

impl<'a> PaintContext<'a> {
    pub fn new(registry: &'a FontRegistry, backend: &'a mut dyn FontBackend) -> Self {
        Self { registry, backend }
    }

    /// The icon font of `style` at a pixel size, if the style is loaded.
    pub fn font(&self, style: IconStyle, pixel_size: f32) -> Option<Font> {
        self.registry.font(style, pixel_size)
    }

    pub fn font_family(&self, style: IconStyle) -> &str {
        self.registry.font_family(style)
    }

    /// Bounding size of `text` drawn with `font`.
    pub fn measure_text(&mut self, text: &str, font: &Font) -> Size {
        self.backend.measure_text(text, font)
    }

    pub fn backend(&mut self) -> &mut dyn FontBackend {
        &mut *self.backend
    }
}

/// Draws an icon into a rectangle.
///
/// The built-in [`GlyphPainter`] draws font glyphs. Implement this trait to
/// add procedurally drawn icons and register them with
/// [`Awesome::give`](crate::Awesome::give):
///
/// ```
/// use awesome_icons::{IconMode, IconPainter, IconState, OptionSet, PaintContext};
/// use awesome_icons::{Color, Painter, Rect};
///
/// struct Frame;
///
/// impl IconPainter for Frame {
///     fn paint(
///         &self,
///         _ctx: &mut PaintContext<'_>,
///         painter: &mut dyn Painter,
///         rect: Rect,
///         _mode: IconMode,
///         _state: IconState,
///         options: &OptionSet,
///     ) {
///         let color = options.color("color").unwrap_or(Color::BLACK);
///         painter.stroke_rect(rect, color, 1.0);
///     }
/// }
/// ```
pub trait IconPainter: Send + Sync {
    fn paint(
        &self,
        ctx: &mut PaintContext<'_>,
        painter: &mut dyn Painter,
        rect: Rect,
        mode: IconMode,
        state: IconState,
        options: &OptionSet,
    );
}

/// Paints the `text` option as a glyph of the `style` option's font.
///
/// - color and text are looked up for the mode and state
/// - the glyph is sized to `rect.height * scale-factor`, then shrunk to fit
/// - duotone glyphs get a second layer in `duotone-color`
/// - an `anim` option rotates the glyph
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphPainter;

impl GlyphPainter {
    pub const DEFAULT_SCALE_FACTOR: f32 = 0.9;
}

impl IconPainter for GlyphPainter {
    fn paint(
        &self,
        ctx: &mut PaintContext<'_>,
        painter: &mut dyn Painter,
        rect: Rect,
        mode: IconMode,
        state: IconState,
        options: &OptionSet,
    ) {
        let _span = PerfSpan::new(span_names::PAINT);

        let color = resolve_for_state(keys::COLOR, mode, state, options)
            .and_then(OptionValue::as_color);
        let text = resolve_for_state(keys::TEXT, mode, state, options)
            .map(OptionValue::to_display_string)
            .unwrap_or_default();

        let color = match color {
            Some(color) if color.is_valid() && !text.is_empty() => color,
            _ => {
                debug_assert!(false, "icon has no text or no valid color: {options:?}");
                tracing::warn!(
                    target: targets::PAINT,
                    ?mode,
                    ?state,
                    "icon has no text or no valid color, nothing drawn"
                );
                return;
            }
        };

        let style = options
            .get(keys::STYLE)
            .and_then(OptionValue::as_style)
            .unwrap_or_default();
        let scale = options
            .get(keys::SCALE_FACTOR)
            .and_then(OptionValue::as_f32)
            .unwrap_or(Self::DEFAULT_SCALE_FACTOR);

        let initial = (rect.height() * scale).round();
        let Some(font) = ctx.font(style, initial) else {
            tracing::warn!(target: targets::PAINT, %style, "icon font not loaded, nothing drawn");
            return;
        };
        let font = fit_font(ctx, font, &text, rect);

        tracing::trace!(
            target: targets::PAINT,
            %style,
            pixel_size = font.pixel_size(),
            "painting glyph"
        );

        painter.save();
        if let Some(anim) = options.get(keys::ANIM).and_then(OptionValue::as_animation) {
            anim.setup(painter, rect);
        }
        painter.draw_text(rect, &text, &font, color);

        if style.is_duotone() {
            let secondary = resolve_for_state(keys::DUOTONE_COLOR, mode, state, options)
                .and_then(OptionValue::as_color)
                .unwrap_or_else(|| default_secondary_color(color));
            painter.draw_text(rect, &duotone_secondary_text(&text), &font, secondary);
        }
        painter.restore();
    }
}

/// Shrinks `font` until `text` fits in `rect` with a 5% margin.
///
/// Fonts whose text already fits are returned unchanged.
pub fn fit_font(ctx: &mut PaintContext<'_>, font: Font, text: &str, rect: Rect) -> Font {
    let measured = ctx.measure_text(text, &font);
    match shrunk_pixel_size(font.pixel_size(), measured, rect) {
        Some(size) => font.with_pixel_size(size),
        None => font,
    }
}

/// The pixel size that makes a `measured` box fit `rect`, or `None` if it
/// already fits.
pub fn shrunk_pixel_size(pixel_size: f32, measured: Size, rect: Rect) -> Option<f32> {
    if measured.width <= rect.width() && measured.height <= rect.height() {
        return None;
    }
    let factor = (FIT_MARGIN * rect.width() / measured.width)
        .min(FIT_MARGIN * rect.height() / measured.height);
    Some((pixel_size * factor).floor())
}

/// Codepoint of the secondary layer of a duotone glyph.
pub const fn duotone_secondary(codepoint: u32) -> u32 {
    codepoint | DUOTONE_SECONDARY_BIT
}

/// `text` with every glyph replaced by its secondary duotone layer.
pub fn duotone_secondary_text(text: &str) -> String {
    text.chars()
        .map(|ch| char::from_u32(duotone_secondary(ch as u32)).unwrap_or(ch))
        .collect()
}

/// The single-glyph string for a codepoint, if it is a Unicode scalar.
pub fn glyph_text(codepoint: u32) -> Option<String> {
    char::from_u32(codepoint).map(String::from)
}

/// UTF-16 encoding of a codepoint, a surrogate pair above the BMP.
///
/// For hosts whose text APIs take UTF-16; Rust strings carry the scalar
/// directly.
pub fn encode_utf16(codepoint: u32) -> Option<Vec<u16>> {
    let ch = char::from_u32(codepoint)?;
    let mut buf = [0u16; 2];
    Some(ch.encode_utf16(&mut buf).to_vec())
}

/// Color used when the secondary layer has no explicit color.
pub fn default_secondary_color(primary: Color) -> Color {
    primary.with_alpha(primary.a * DUOTONE_OPACITY)
}
