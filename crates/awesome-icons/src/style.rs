//! Icon styles and their prefixes.

use std::fmt;
use std::str::FromStr;

use awesome_icons_render::text::FontWeight;
use serde::{Deserialize, Serialize};

use crate::config::Edition;

/// A Font Awesome style: one weight/variant of the glyph set, backed by its
/// own font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    Solid,
    Regular,
    Brands,
    Light,
    Thin,
    Duotone,
    SharpSolid,
    SharpRegular,
    SharpLight,
    SharpThin,
}

impl IconStyle {
    /// Every style, in registration order.
    pub const ALL: [IconStyle; 10] = [
        IconStyle::Solid,
        IconStyle::Regular,
        IconStyle::Brands,
        IconStyle::Light,
        IconStyle::Thin,
        IconStyle::Duotone,
        IconStyle::SharpSolid,
        IconStyle::SharpRegular,
        IconStyle::SharpLight,
        IconStyle::SharpThin,
    ];

    /// The styles shipped with the free edition.
    pub const FREE: [IconStyle; 3] = [IconStyle::Solid, IconStyle::Regular, IconStyle::Brands];

    /// The long prefix used in composite names, e.g. `"sharp-solid"`.
    pub const fn prefix(self) -> &'static str {
        match self {
            IconStyle::Solid => "solid",
            IconStyle::Regular => "regular",
            IconStyle::Brands => "brands",
            IconStyle::Light => "light",
            IconStyle::Thin => "thin",
            IconStyle::Duotone => "duotone",
            IconStyle::SharpSolid => "sharp-solid",
            IconStyle::SharpRegular => "sharp-regular",
            IconStyle::SharpLight => "sharp-light",
            IconStyle::SharpThin => "sharp-thin",
        }
    }

    /// The abbreviated prefix, e.g. `"fas"` for solid.
    pub const fn short_prefix(self) -> &'static str {
        match self {
            IconStyle::Solid => "fas",
            IconStyle::Regular => "far",
            IconStyle::Brands => "fab",
            IconStyle::Light => "fal",
            IconStyle::Thin => "fat",
            IconStyle::Duotone => "fad",
            IconStyle::SharpSolid => "fass",
            IconStyle::SharpRegular => "fasr",
            IconStyle::SharpLight => "fasl",
            IconStyle::SharpThin => "fast",
        }
    }

    /// Parses a style prefix.
    ///
    /// Accepts the long form with or without the `fa-` marker
    /// (`"solid"`, `"fa-solid"`) and the short form (`"fas"`).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let stripped = strip_marker(prefix);
        Self::ALL
            .into_iter()
            .find(|style| style.prefix() == stripped || style.short_prefix() == prefix)
    }

    /// Whether the style is only available in the Pro edition.
    pub const fn is_pro(self) -> bool {
        !matches!(
            self,
            IconStyle::Solid | IconStyle::Regular | IconStyle::Brands
        )
    }

    /// Whether glyphs of this style are painted as two layers.
    pub const fn is_duotone(self) -> bool {
        matches!(self, IconStyle::Duotone)
    }

    /// The weight of the style's font file.
    pub const fn default_weight(self) -> FontWeight {
        match self {
            IconStyle::Solid | IconStyle::Duotone | IconStyle::SharpSolid => FontWeight::BLACK,
            IconStyle::Regular | IconStyle::Brands | IconStyle::SharpRegular => {
                FontWeight::NORMAL
            }
            IconStyle::Light | IconStyle::SharpLight => FontWeight::LIGHT,
            IconStyle::Thin | IconStyle::SharpThin => FontWeight::THIN,
        }
    }

    /// The font file name backing this style in the given edition.
    pub const fn font_file(self, edition: Edition) -> &'static str {
        match (edition, self) {
            (_, IconStyle::Brands) => "Font Awesome 6 Brands-Regular-400.otf",
            (Edition::Free, IconStyle::Regular) => "Font Awesome 6 Free-Regular-400.otf",
            (Edition::Free, _) => "Font Awesome 6 Free-Solid-900.otf",
            (Edition::Pro, IconStyle::Solid) => "Font Awesome 6 Pro-Solid-900.otf",
            (Edition::Pro, IconStyle::Regular) => "Font Awesome 6 Pro-Regular-400.otf",
            (Edition::Pro, IconStyle::Light) => "Font Awesome 6 Pro-Light-300.otf",
            (Edition::Pro, IconStyle::Thin) => "Font Awesome 6 Pro-Thin-100.otf",
            (Edition::Pro, IconStyle::Duotone) => "Font Awesome 6 Duotone-Solid-900.otf",
            (Edition::Pro, IconStyle::SharpSolid) => "Font Awesome 6 Sharp-Solid-900.otf",
            (Edition::Pro, IconStyle::SharpRegular) => "Font Awesome 6 Sharp-Regular-400.otf",
            (Edition::Pro, IconStyle::SharpLight) => "Font Awesome 6 Sharp-Light-300.otf",
            (Edition::Pro, IconStyle::SharpThin) => "Font Awesome 6 Sharp-Thin-100.otf",
        }
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle::Solid
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Error returned when a string names no style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for IconStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_prefix(s).ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Removes a leading `fa-` marker, if present.
pub(crate) fn strip_marker(s: &str) -> &str {
    s.strip_prefix("fa-").unwrap_or(s)
}
