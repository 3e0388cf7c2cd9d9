//! Logging facilities for awesome-icons.
//!
//! All crates in the workspace log through the `tracing` crate. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("awesome_icons=debug")
//!     .init();
//! ```

/// Span names used for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Font loading during provider initialization.
    pub const LOAD_FONTS: &str = "awesome_icons::load_fonts";
    /// Painting of a single icon.
    pub const PAINT: &str = "awesome_icons::paint";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal emission.
    pub const SIGNAL: &str = "awesome_icons_core::signal";
    /// Resource lookups.
    pub const RESOURCE: &str = "awesome_icons_core::resource";
    /// Font system and text measurement.
    pub const FONT: &str = "awesome_icons_render::font";
    /// Font registry and initialization.
    pub const REGISTRY: &str = "awesome_icons::registry";
    /// Icon resolution.
    pub const RESOLVER: &str = "awesome_icons::resolver";
    /// Glyph painting.
    pub const PAINT: &str = "awesome_icons::paint";
    /// Theme and default option changes.
    pub const THEME: &str = "awesome_icons::theme";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a span for `name`, usually one of [`span_names`].
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "awesome_icons::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
