//! The seam between icon painting and the host text subsystem.

use super::font::Font;
use super::types::FontHandle;
use crate::types::Size;

/// Font data a backend could not register.
#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("invalid font data: {0}")]
    InvalidFormat(String),
}

/// Font registration and text measurement, as provided by the host.
///
/// [`FontSystem`](super::FontSystem) implements this on top of cosmic-text.
/// Toolkits with their own text stack implement it to route icon fonts into
/// that stack instead.
pub trait FontBackend {
    /// Registers raw TTF/OTF data and returns a handle covering the faces it
    /// contained.
    fn register_font_data(&mut self, data: Vec<u8>) -> Result<FontHandle, FontLoadError>;

    /// Removes every face registered under `handle`.
    ///
    /// Returns `false` if the handle is unknown.
    fn unregister_font(&mut self, handle: FontHandle) -> bool;

    /// Family names of the faces registered under `handle`, in face order.
    ///
    /// Empty for unknown handles.
    fn font_families(&self, handle: FontHandle) -> Vec<String>;

    /// Whether any loaded face belongs to `family`.
    fn has_family(&self, family: &str) -> bool;

    /// Whether a face registered under `handle` maps `ch` to a glyph.
    fn has_glyph(&self, handle: FontHandle, ch: char) -> bool;

    /// Bounding size of `text` laid out on a single line with `font`.
    fn measure_text(&mut self, text: &str, font: &Font) -> Size;
}
