//! The drawing-surface trait icons paint into.

use crate::text::Font;
use crate::types::{Color, Rect};

/// A 2D drawing surface.
///
/// Hosts implement this over their own canvas; [`DisplayList`] records the
/// calls instead of rasterizing them.
///
/// The surface keeps a save/restore stack of transforms:
///
/// ```ignore
/// painter.save();
/// painter.translate(8.0, 8.0);
/// painter.rotate(std::f32::consts::FRAC_PI_2);
/// painter.translate(-8.0, -8.0);
/// painter.draw_text(rect, "\u{f013}", &font, Color::BLACK);
/// painter.restore();
/// ```
///
/// [`DisplayList`]: crate::DisplayList
pub trait Painter {
    /// Pushes the current transform.
    fn save(&mut self);

    /// Pops back to the transform of the matching [`save`](Self::save).
    fn restore(&mut self);

    fn translate(&mut self, tx: f32, ty: f32);

    /// Rotates by `angle` radians, clockwise in y-down coordinates.
    fn rotate(&mut self, angle: f32);

    /// Draws `text` centered in `rect`.
    fn draw_text(&mut self, rect: Rect, text: &str, font: &Font, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);
}
