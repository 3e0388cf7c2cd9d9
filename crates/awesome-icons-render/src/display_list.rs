//! A recording painter.

use crate::painter::Painter;
use crate::text::Font;
use crate::transform::{Transform2D, TransformStack};
use crate::types::{Color, Rect, Size};

/// One recorded drawing call, with the transform active when it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        rect: Rect,
        text: String,
        font: Font,
        color: Color,
        transform: Transform2D,
    },
    FillRect {
        rect: Rect,
        color: Color,
        transform: Transform2D,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
        transform: Transform2D,
    },
}

impl DrawCommand {
    /// The transform that was current when the command was recorded.
    pub fn transform(&self) -> &Transform2D {
        match self {
            DrawCommand::Text { transform, .. }
            | DrawCommand::FillRect { transform, .. }
            | DrawCommand::StrokeRect { transform, .. } => transform,
        }
    }
}

/// A transparent offscreen surface that records drawing commands.
///
/// Icons render into a `DisplayList` when asked for a pixmap; the host
/// replays the commands onto its own canvas or rasterizer.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    size: Size,
    commands: Vec<DrawCommand>,
    transforms: TransformStack,
}

impl DisplayList {
    /// Create an empty, fully transparent surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            transforms: TransformStack::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The area covered by the surface.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over recorded text draws as `(text, font, color)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &Font, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text {
                text, font, color, ..
            } => Some((text.as_str(), font, *color)),
            _ => None,
        })
    }

    /// Number of `save` calls not yet balanced by `restore`.
    pub fn save_depth(&self) -> usize {
        self.transforms.depth()
    }

    /// Drop all recorded commands and reset the transform.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transforms = TransformStack::new();
    }

    fn current_transform(&self) -> Transform2D {
        *self.transforms.current()
    }
}

impl Painter for DisplayList {
    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) {
        self.transforms.restore();
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.transforms.translate(tx, ty);
    }

    fn rotate(&mut self, angle: f32) {
        self.transforms.rotate(angle);
    }

    fn draw_text(&mut self, rect: Rect, text: &str, font: &Font, color: Color) {
        let transform = self.current_transform();
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.to_string(),
            font: font.clone(),
            color,
            transform,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let transform = self.current_transform();
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            transform,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let transform = self.current_transform();
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            width,
            transform,
        });
    }
}
