//! Font description.

use super::types::{FontFamily, FontWeight};

/// A family at a pixel size and weight.
///
/// `Font` carries no font data; a [`FontBackend`] resolves it when measuring
/// and the host resolves it when drawing.
///
/// ```
/// use awesome_icons_render::text::{Font, FontFamily, FontWeight};
///
/// let font = Font::new(FontFamily::name("Font Awesome 6 Free"), 14.0)
///     .with_weight(FontWeight::BLACK);
/// assert_eq!(font.pixel_size(), 14.0);
/// ```
///
/// [`FontBackend`]: super::FontBackend
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    pixel_size: f32,
    weight: FontWeight,
}

impl Font {
    pub fn new(family: FontFamily, pixel_size: f32) -> Self {
        Self {
            family,
            pixel_size,
            weight: FontWeight::NORMAL,
        }
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The same font at another size.
    pub fn with_pixel_size(&self, pixel_size: f32) -> Self {
        Self {
            pixel_size,
            ..self.clone()
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub(crate) fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        cosmic_text::Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 16.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_pixel_size_keeps_other_fields() {
        let font = Font::new(FontFamily::name("Icons"), 20.0).with_weight(FontWeight::BLACK);
        let smaller = font.with_pixel_size(12.0);
        assert_eq!(smaller.pixel_size(), 12.0);
        assert_eq!(smaller.weight(), FontWeight::BLACK);
        assert_eq!(smaller.family(), &FontFamily::name("Icons"));
        assert_eq!(font.pixel_size(), 20.0);
    }
}
