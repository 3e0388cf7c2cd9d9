//! Weights, families and handles.

use std::fmt;

/// A CSS-style font weight in `100..=900`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const BLACK: Self = Self(900);

    /// Clamps `weight` into the valid range.
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(Self::THIN.0, Self::BLACK.0))
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub(crate) fn to_fontdb(self) -> fontdb::Weight {
        fontdb::Weight(self.0)
    }

    pub(crate) fn to_cosmic(self) -> cosmic_text::Weight {
        cosmic_text::Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<u16> for FontWeight {
    fn from(weight: u16) -> Self {
        Self::new(weight)
    }
}

impl From<fontdb::Weight> for FontWeight {
    fn from(weight: fontdb::Weight) -> Self {
        Self::new(weight.0)
    }
}

/// The family a [`Font`](super::Font) asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    Name(String),
    #[default]
    SansSerif,
}

impl FontFamily {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub(crate) fn to_fontdb(&self) -> fontdb::Family<'_> {
        match self {
            FontFamily::Name(name) => fontdb::Family::Name(name),
            FontFamily::SansSerif => fontdb::Family::SansSerif,
        }
    }

    pub(crate) fn to_cosmic(&self) -> cosmic_text::Family<'_> {
        match self {
            FontFamily::Name(name) => cosmic_text::Family::Name(name),
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Name(name) => f.write_str(name),
            FontFamily::SansSerif => f.write_str("sans-serif"),
        }
    }
}

/// Identifies font data registered with a [`FontBackend`]. A collection
/// registers several faces under one handle.
///
/// [`FontBackend`]: super::FontBackend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontHandle(pub u32);

impl fmt::Display for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font#{}", self.0)
    }
}
