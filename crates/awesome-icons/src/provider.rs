//! The icon provider.

use std::collections::HashMap;
use std::sync::Arc;

use awesome_icons_core::logging::targets;
use awesome_icons_core::{ResourceManager, Signal};
use awesome_icons_render::text::{Font, FontBackend, FontWeight};
use awesome_icons_render::{DisplayList, Painter, Rect, Size};

use crate::catalog::Catalog;
use crate::config::{AwesomeConfig, Edition};
use crate::error::{FontError, InitError};
use crate::icon::Icon;
use crate::names;
use crate::options::{IconMode, IconState, OptionSet, OptionValue, keys, merge};
use crate::painter::{GlyphPainter, IconPainter, PaintContext, glyph_text};
use crate::registry::FontRegistry;
use crate::style::{IconStyle, strip_marker};
use crate::theme::{ColorScheme, IconPalette};

/// Loads icon fonts and turns names into [`Icon`]s.
///
/// ```no_run
/// use awesome_icons::{Awesome, IconMode, IconState, OptionSet};
/// use awesome_icons::render::Size;
/// use awesome_icons::render::text::{FontSystem, FontSystemConfig};
///
/// let fonts = FontSystem::with_config(FontSystemConfig::new().load_system_fonts(false));
/// let mut awesome = Awesome::new(fonts);
/// awesome.resources().register_filesystem_root("", "/usr/share/myapp");
/// if !awesome.initialize() {
///     eprintln!("some icon fonts are missing");
/// }
///
/// let beer = awesome.icon("fa-solid beer", &OptionSet::new());
/// let pixmap = awesome.pixmap(&beer, Size::new(16.0, 16.0), IconMode::Normal, IconState::On);
/// ```
pub struct Awesome {
    config: AwesomeConfig,
    resources: Arc<ResourceManager>,
    backend: Box<dyn FontBackend + Send>,
    registry: FontRegistry,
    catalog: Catalog,
    catalog_ready: bool,
    defaults: OptionSet,
    scheme: ColorScheme,
    painters: HashMap<String, Arc<dyn IconPainter>>,
    glyph_painter: Arc<dyn IconPainter>,
    defaults_reset: Signal<ColorScheme>,
}

impl Awesome {
    /// Creates a free-edition provider on top of `backend`.
    pub fn new(backend: impl FontBackend + Send + 'static) -> Self {
        Self::with_config(AwesomeConfig::default(), backend)
    }

    /// Creates a provider.
    ///
    /// Nothing is loaded until [`initialize`](Self::initialize).
    pub fn with_config(config: AwesomeConfig, backend: impl FontBackend + Send + 'static) -> Self {
        let resources = ResourceManager::new();
        #[cfg(feature = "bundled-fonts")]
        crate::bundled::register(&resources);

        let scheme = ColorScheme::Unknown;
        Self {
            registry: FontRegistry::from_config(&config),
            defaults: IconPalette::for_scheme(scheme).default_options(config.scale_factor),
            config,
            resources: Arc::new(resources),
            backend: Box::new(backend),
            catalog: Catalog::new(),
            catalog_ready: false,
            scheme,
            painters: HashMap::new(),
            glyph_painter: Arc::new(GlyphPainter),
            defaults_reset: Signal::new(),
        }
    }

    /// Replaces the resource set fonts are read from.
    pub fn with_resources(mut self, resources: Arc<ResourceManager>) -> Self {
        self.resources = resources;
        self
    }

    pub fn config(&self) -> &AwesomeConfig {
        &self.config
    }

    pub fn resources(&self) -> &Arc<ResourceManager> {
        &self.resources
    }

    pub fn backend(&self) -> &dyn FontBackend {
        &*self.backend
    }

    pub fn backend_mut(&mut self) -> &mut dyn FontBackend {
        &mut *self.backend
    }

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Fills the name tables and loads every font.
    ///
    /// Returns `false` if any style failed; the others remain usable. Calling
    /// it again only retries the failed styles.
    pub fn initialize(&mut self) -> bool {
        self.try_initialize().is_ok()
    }

    /// Like [`initialize`](Self::initialize), reporting what failed.
    pub fn try_initialize(&mut self) -> Result<(), InitError> {
        if !self.catalog_ready {
            self.populate_catalog();
            self.catalog_ready = true;
        }
        self.registry
            .load_fonts(&self.resources, &mut *self.backend)
    }

    fn populate_catalog(&mut self) {
        let catalog = &mut self.catalog;
        catalog.populate(IconStyle::Solid, names::SOLID.iter().copied());
        catalog.populate(IconStyle::Brands, names::BRANDS.iter().copied());
        match self.config.edition {
            Edition::Free => {
                catalog.populate(IconStyle::Regular, names::REGULAR.iter().copied());
            }
            Edition::Pro => {
                catalog.populate(IconStyle::Solid, names::PRO_EXTRA.iter().copied());
                for style in IconStyle::ALL {
                    if style != IconStyle::Solid && style != IconStyle::Brands {
                        catalog.alias_style(style, IconStyle::Solid);
                    }
                }
            }
        }
        tracing::debug!(
            target: targets::REGISTRY,
            edition = ?self.config.edition,
            solid = catalog.len(IconStyle::Solid),
            tables = catalog.table_count(),
            "name tables populated"
        );
    }

    /// Draws `style` with a family the backend already has loaded instead of
    /// the bundled font file.
    ///
    /// The style's name table is kept; use
    /// [`add_named_codepoint`](Self::add_named_codepoint) for fonts with
    /// other glyphs.
    pub fn use_font_family(
        &mut self,
        style: IconStyle,
        family: &str,
        weight: Option<FontWeight>,
    ) -> Result<(), FontError> {
        self.registry
            .use_font_family(style, family, weight, &mut *self.backend)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Adds or replaces a name in a style's table.
    pub fn add_named_codepoint(&mut self, style: IconStyle, name: impl Into<String>, codepoint: u32) {
        self.catalog.insert(style, name, codepoint);
    }

    /// Every `(name, codepoint)` of a style.
    pub fn named_codepoints(&self, style: IconStyle) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.catalog.entries(style)
    }

    /// Every `(name, codepoint)` of a style, sorted by name.
    pub fn list_names(&self, style: IconStyle) -> Vec<(String, u32)> {
        self.catalog.sorted_entries(style)
    }

    pub fn lookup(&self, style: IconStyle, name: &str) -> Option<u32> {
        self.catalog.lookup(style, name)
    }

    // =========================================================================
    // Default options
    // =========================================================================

    pub fn set_default_option(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.defaults.insert(key, value);
    }

    pub fn default_option(&self, key: &str) -> Option<&OptionValue> {
        self.defaults.get(key)
    }

    pub fn default_options(&self) -> &OptionSet {
        &self.defaults
    }

    /// The scheme the defaults were last reset for.
    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Emitted after the defaults were reset for a new color scheme.
    pub fn defaults_reset(&self) -> &Signal<ColorScheme> {
        &self.defaults_reset
    }

    /// Replaces every default option with the palette of `scheme`.
    ///
    /// Options set through [`set_default_option`](Self::set_default_option)
    /// are discarded. Icons resolved earlier keep their options; hosts
    /// re-resolve them when [`defaults_reset`](Self::defaults_reset) fires.
    pub fn handle_color_scheme_change(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
        self.defaults = IconPalette::for_scheme(scheme).default_options(self.config.scale_factor);
        tracing::debug!(target: targets::THEME, ?scheme, "default icon options reset");
        self.defaults_reset.emit(scheme);
    }

    /// Resets the defaults for the color scheme the system reports.
    pub fn sync_system_theme(&mut self) {
        self.handle_color_scheme_change(ColorScheme::detect());
    }

    // =========================================================================
    // Icons
    // =========================================================================

    /// A glyph icon for a raw codepoint.
    ///
    /// Returns a null icon if `codepoint` is not a Unicode scalar value.
    pub fn icon_for_codepoint(&self, style: IconStyle, codepoint: u32, overrides: &OptionSet) -> Icon {
        let Some(text) = glyph_text(codepoint) else {
            tracing::warn!(target: targets::RESOLVER, codepoint, "not a valid codepoint");
            return Icon::null();
        };
        let mut options = merge(&self.defaults, overrides);
        options.insert(keys::TEXT, text);
        options.insert(keys::STYLE, style);
        Icon::new(self.glyph_painter.clone(), options)
    }

    /// Resolves a name.
    ///
    /// `name` is either `"<style> <icon>"` (`"fa-solid beer"`, `"fab github"`)
    /// or a bare icon name looked up under solid. The `fa-` marker is
    /// optional on both parts. Unknown style prefixes, and pro prefixes in the
    /// free edition, fall back to solid.
    /// Names missing from the tables are looked up among painters registered
    /// with [`give`](Self::give). Anything else yields a null icon.
    pub fn icon(&self, name: &str, overrides: &OptionSet) -> Icon {
        let (style, glyph) = split_name(name, self.config.edition);
        if let Some(codepoint) = self.catalog.lookup(style, glyph) {
            return self.icon_for_codepoint(style, codepoint, overrides);
        }

        match self.painters.get(name) {
            Some(painter) => {
                let mut options = merge(&self.defaults, overrides);
                options.insert(keys::STYLE, style);
                Icon::new(painter.clone(), options)
            }
            None => {
                tracing::trace!(target: targets::RESOLVER, name, "no icon by that name");
                Icon::null()
            }
        }
    }

    /// An icon drawn by `painter` with exactly `options`.
    ///
    /// The defaults are not merged in; the painter stays shared with the
    /// caller.
    pub fn icon_with_painter(&self, painter: Arc<dyn IconPainter>, options: &OptionSet) -> Icon {
        Icon::new(painter, options.clone())
    }

    /// Registers a painter under `name`, dropping any painter registered
    /// under the same name before.
    pub fn give(&mut self, name: impl Into<String>, painter: impl IconPainter + 'static) {
        let name = name.into();
        if self.painters.insert(name.clone(), Arc::new(painter)).is_some() {
            tracing::debug!(target: targets::RESOLVER, name, "replaced icon painter");
        }
    }

    /// The painter registered under `name`.
    pub fn painter(&self, name: &str) -> Option<&Arc<dyn IconPainter>> {
        self.painters.get(name)
    }

    // =========================================================================
    // Fonts and painting
    // =========================================================================

    /// The icon font of `style` at a pixel size, for labels that show glyphs
    /// directly.
    pub fn font(&self, style: IconStyle, pixel_size: f32) -> Option<Font> {
        self.registry.font(style, pixel_size)
    }

    /// The family name of a style, or `""` if it is not loaded.
    pub fn font_family(&self, style: IconStyle) -> &str {
        self.registry.font_family(style)
    }

    /// Whether the loaded font of `style` has a glyph for `codepoint`.
    pub fn has_glyph(&self, style: IconStyle, codepoint: u32) -> bool {
        self.registry.has_glyph(style, codepoint, &*self.backend)
    }

    /// The context painters need, for hosts that drive painting themselves.
    pub fn paint_context(&mut self) -> PaintContext<'_> {
        PaintContext::new(&self.registry, &mut *self.backend)
    }

    /// Paints `icon` into `rect`.
    pub fn paint(
        &mut self,
        icon: &Icon,
        painter: &mut dyn Painter,
        rect: Rect,
        mode: IconMode,
        state: IconState,
    ) {
        icon.paint(&mut self.paint_context(), painter, rect, mode, state);
    }

    /// Paints `icon` onto a transparent surface of `size`.
    pub fn pixmap(&mut self, icon: &Icon, size: Size, mode: IconMode, state: IconState) -> DisplayList {
        icon.pixmap(&mut self.paint_context(), size, mode, state)
    }
}

impl std::fmt::Debug for Awesome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Awesome")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("scheme", &self.scheme)
            .field("painters", &self.painters.len())
            .finish_non_exhaustive()
    }
}

/// Splits `"<style> <icon>"` at the first space.
///
/// Prefixes of styles the edition does not carry count as unrecognized and
/// fall back to solid.
pub(crate) fn split_name(name: &str, edition: Edition) -> (IconStyle, &str) {
    match name.split_once(' ') {
        Some((prefix, glyph)) => {
            let style = IconStyle::from_prefix(prefix)
                .filter(|style| edition.styles().contains(style))
                .unwrap_or_default();
            (style, strip_marker(glyph))
        }
        None => (IconStyle::Solid, strip_marker(name)),
    }
}
