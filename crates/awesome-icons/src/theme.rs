//! Color schemes and the default icon palettes derived from them.

use awesome_icons_render::Color;

use crate::options::{OptionSet, OptionValue, keys};

/// Whether the desktop prefers light or dark surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    Light,
    Dark,
    /// No preference could be read; icons use the light palette.
    #[default]
    Unknown,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// Asks the desktop for its current preference.
    #[cfg(feature = "system-theme")]
    pub fn detect() -> ColorScheme {
        let scheme = match dark_light::detect() {
            dark_light::Mode::Dark => ColorScheme::Dark,
            dark_light::Mode::Light => ColorScheme::Light,
            dark_light::Mode::Default => ColorScheme::Unknown,
        };
        tracing::debug!(target: awesome_icons_core::logging::targets::THEME, ?scheme, "detected color scheme");
        scheme
    }

    /// Always [`ColorScheme::Unknown`] without the `system-theme` feature.
    #[cfg(not(feature = "system-theme"))]
    pub fn detect() -> ColorScheme {
        ColorScheme::Unknown
    }
}

/// Default icon colors for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPalette {
    pub color: Color,
    pub disabled: Color,
    pub active: Color,
    pub selected: Color,
}

impl IconPalette {
    /// Dark glyphs for light backgrounds.
    pub fn light() -> Self {
        Self {
            color: Color::from_rgb8(50, 50, 50),
            disabled: Color::from_rgba8(70, 70, 70, 60),
            active: Color::from_rgb8(10, 10, 10),
            selected: Color::from_rgb8(10, 10, 10),
        }
    }

    /// Light glyphs for dark backgrounds.
    pub fn dark() -> Self {
        Self {
            color: Color::from_rgb8(220, 220, 220),
            disabled: Color::from_rgba8(200, 200, 200, 60),
            active: Color::from_rgb8(245, 245, 245),
            selected: Color::from_rgb8(245, 245, 245),
        }
    }

    /// The palette for a scheme; unknown schemes get the light palette.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light | ColorScheme::Unknown => Self::light(),
        }
    }

    /// The full default option set: palette colors, their duotone
    /// counterparts at 40% opacity, the scale factor and empty text
    /// variants.
    pub fn default_options(&self, scale_factor: f32) -> OptionSet {
        let secondary = |color: Color| color.with_alpha(color.a * DUOTONE_OPACITY);
        OptionSet::new()
            .with(keys::COLOR, self.color)
            .with(keys::COLOR_DISABLED, self.disabled)
            .with(keys::COLOR_ACTIVE, self.active)
            .with(keys::COLOR_SELECTED, self.selected)
            .with(keys::DUOTONE_COLOR, secondary(self.color))
            .with(keys::DUOTONE_COLOR_DISABLED, secondary(self.disabled))
            .with(keys::DUOTONE_COLOR_ACTIVE, secondary(self.active))
            .with(keys::DUOTONE_COLOR_SELECTED, secondary(self.selected))
            .with(keys::SCALE_FACTOR, scale_factor)
            .with(keys::TEXT, OptionValue::Null)
            .with(keys::TEXT_DISABLED, OptionValue::Null)
            .with(keys::TEXT_ACTIVE, OptionValue::Null)
            .with(keys::TEXT_SELECTED, OptionValue::Null)
    }
}

impl Default for IconPalette {
    fn default() -> Self {
        Self::light()
    }
}

/// Opacity of the secondary duotone layer relative to the primary.
pub const DUOTONE_OPACITY: f32 = 0.4;
