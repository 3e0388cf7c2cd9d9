//! Font Awesome icons for Rust GUI toolkits.
//!
//! [`Awesome`] loads the icon fonts of every style, keeps the name tables and
//! turns names such as `"fa-solid beer"` into [`Icon`]s. Icons paint through
//! the [`Painter`] trait, so they work with any canvas that can draw text.
//!
//! # Example
//!
//! ```no_run
//! use awesome_icons::{Awesome, Color, IconMode, IconState, OptionSet, keys};
//! use awesome_icons::render::{DisplayList, Rect, Size};
//! use awesome_icons::render::text::{FontSystem, FontSystemConfig};
//!
//! let fonts = FontSystem::with_config(FontSystemConfig::new().load_system_fonts(false));
//! let mut awesome = Awesome::new(fonts);
//! awesome.resources().register_filesystem_root("", "assets");
//! awesome.initialize();
//!
//! // a checkbox: checked shows a check mark, unchecked an empty red square
//! let checkbox = awesome.icon(
//!     "fa-solid square-check",
//!     &OptionSet::new()
//!         .with(keys::COLOR, Color::GREEN)
//!         .with("text-off", "\u{f0c8}")
//!         .with("color-off", Color::RED),
//! );
//!
//! let mut surface = DisplayList::new(Size::new(24.0, 24.0));
//! awesome.paint(&checkbox, &mut surface, Rect::new(0.0, 0.0, 24.0, 24.0), IconMode::Normal, IconState::Off);
//! ```
//!
//! # Features
//!
//! - `bundled-fonts`: embed the files in `resources/fonts` and serve them
//!   under `:/fonts/`
//! - `system-theme`: detect the system light/dark preference for
//!   [`Awesome::sync_system_theme`]

mod animation;
#[cfg(feature = "bundled-fonts")]
mod bundled;
mod catalog;
mod config;
mod error;
mod icon;
pub mod names;
pub mod options;
mod painter;
mod provider;
mod registry;
mod style;
mod theme;

pub use animation::SpinAnimation;
pub use catalog::Catalog;
pub use config::{AwesomeConfig, Edition, FontSpec};
pub use error::{AwesomeError, AwesomeResult, ConfigError, ConfigResult, FontError, InitError};
pub use icon::Icon;
pub use options::{IconMode, IconState, OptionSet, OptionValue, keys};
pub use painter::{
    DUOTONE_SECONDARY_BIT, FIT_MARGIN, GlyphPainter, IconPainter, PaintContext,
    default_secondary_color, duotone_secondary, duotone_secondary_text, encode_utf16, fit_font,
    glyph_text, shrunk_pixel_size,
};
pub use provider::Awesome;
pub use registry::{FontRecord, FontRegistry};
pub use style::{IconStyle, UnknownStyle};
pub use theme::{ColorScheme, DUOTONE_OPACITY, IconPalette};

pub use awesome_icons_core::{ConnectionId, ResourceError, ResourceManager, Signal};
pub use awesome_icons_render::{Color, Painter, Rect, Size};

/// Drawing and font types.
pub mod render {
    pub use awesome_icons_render::*;
}
