//! Resolved icons.

use std::fmt;
use std::sync::Arc;

use awesome_icons_render::{DisplayList, Painter, Rect, Size};

use crate::options::{IconMode, IconState, OptionSet, OptionValue, keys};
use crate::painter::{IconPainter, PaintContext};
use crate::style::IconStyle;

/// A renderable icon: a painter plus the options it paints with.
///
/// Icons are cheap to clone and immutable; the options were merged when
/// the icon was resolved. A null icon (see [`Icon::is_null`]) is what
/// resolution returns for names it does not know.
#[derive(Clone, Default)]
pub struct Icon {
    painter: Option<Arc<dyn IconPainter>>,
    options: OptionSet,
}

impl Icon {
    pub fn new(painter: Arc<dyn IconPainter>, options: OptionSet) -> Self {
        Self {
            painter: Some(painter),
            options,
        }
    }

    /// The empty icon.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.painter.is_none()
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    pub fn painter(&self) -> Option<&Arc<dyn IconPainter>> {
        self.painter.as_ref()
    }

    /// The `style` option.
    pub fn style(&self) -> Option<IconStyle> {
        self.option(keys::STYLE).and_then(OptionValue::as_style)
    }

    /// The `text` option.
    pub fn text(&self) -> Option<&str> {
        self.option(keys::TEXT).and_then(OptionValue::as_text)
    }

    /// Paints the icon into `rect`. Null icons draw nothing.
    pub fn paint(
        &self,
        ctx: &mut PaintContext<'_>,
        painter: &mut dyn Painter,
        rect: Rect,
        mode: IconMode,
        state: IconState,
    ) {
        if let Some(icon_painter) = &self.painter {
            icon_painter.paint(ctx, painter, rect, mode, state, &self.options);
        }
    }

    /// Paints the icon onto a transparent surface of `size`.
    pub fn pixmap(
        &self,
        ctx: &mut PaintContext<'_>,
        size: Size,
        mode: IconMode,
        state: IconState,
    ) -> DisplayList {
        let mut surface = DisplayList::new(size);
        let rect = surface.bounds();
        self.paint(ctx, &mut surface, rect, mode, state);
        surface
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("null", &self.is_null())
            .field("options", &self.options)
            .finish()
    }
}
