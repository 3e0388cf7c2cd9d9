//! Font loading and text measurement for icon glyphs.
//!
//! Icon fonts are registered through the [`FontBackend`] trait, which hands
//! back a [`FontHandle`] and the family names found in the data. The
//! [`FontSystem`] implementation is built on cosmic-text and fontdb:
//!
//! ```no_run
//! use awesome_icons_render::text::{Font, FontBackend, FontFamily, FontSystem, FontSystemConfig};
//!
//! let mut fonts = FontSystem::with_config(FontSystemConfig::new().load_system_fonts(false));
//! let handle = fonts.register_font_data(std::fs::read("fa-solid-900.otf").unwrap()).unwrap();
//! let family = fonts.font_families(handle).remove(0);
//!
//! let size = fonts.measure_text("\u{f013}", &Font::new(FontFamily::Name(family), 16.0));
//! println!("gear glyph is {}x{}", size.width, size.height);
//! ```

mod backend;
mod font;
mod font_system;
mod types;

pub use backend::{FontBackend, FontLoadError};
pub use font::Font;
pub use font_system::{FontMetrics, FontSystem, FontSystemConfig};
pub use types::{FontFamily, FontHandle, FontWeight};
