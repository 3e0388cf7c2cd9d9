//! Per-style icon fonts and their registration with the font backend.

use std::collections::BTreeMap;

use awesome_icons_core::ResourceManager;
use awesome_icons_core::logging::{PerfSpan, span_names, targets};
use awesome_icons_render::text::{Font, FontBackend, FontFamily, FontHandle, FontWeight};

use crate::config::AwesomeConfig;
use crate::error::{FontError, InitError};
use crate::style::IconStyle;

/// The font backing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    style: IconStyle,
    path: String,
    weight: FontWeight,
    family: Option<String>,
    handle: Option<FontHandle>,
}

impl FontRecord {
    pub fn new(style: IconStyle, path: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            style,
            path: path.into(),
            weight,
            family: None,
            handle: None,
        }
    }

    pub fn style(&self) -> IconStyle {
        self.style
    }

    /// Resource path of the font file.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The registered family name, or `""` before registration.
    pub fn family(&self) -> &str {
        self.family.as_deref().unwrap_or("")
    }

    /// The backend handle of font data this record registered.
    ///
    /// `None` before loading and for records pointed at an existing family
    /// through [`FontRegistry::use_font_family`].
    pub fn handle(&self) -> Option<FontHandle> {
        self.handle
    }

    /// Whether glyphs of this style can be drawn.
    pub fn is_usable(&self) -> bool {
        self.family.is_some()
    }
}

/// The fonts of every configured style.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    records: BTreeMap<IconStyle, FontRecord>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one record per style of the configured edition.
    pub fn from_config(config: &AwesomeConfig) -> Self {
        let mut registry = Self::new();
        for style in config.edition.styles() {
            registry.insert(FontRecord::new(
                *style,
                config.font_path(*style),
                config.font_weight(*style),
            ));
        }
        registry
    }

    /// Adds or replaces a record.
    pub fn insert(&mut self, record: FontRecord) {
        self.records.insert(record.style, record);
    }

    pub fn record(&self, style: IconStyle) -> Option<&FontRecord> {
        self.records.get(&style)
    }

    pub fn records(&self) -> impl Iterator<Item = &FontRecord> {
        self.records.values()
    }

    /// Styles with a record, usable or not.
    pub fn styles(&self) -> impl Iterator<Item = IconStyle> + '_ {
        self.records.keys().copied()
    }

    /// Loads the font of every style that is not usable yet.
    ///
    /// A failing style does not stop the others; all failures are collected
    /// into the returned error. Usable styles are skipped, so calling this
    /// again only retries what failed.
    pub fn load_fonts(
        &mut self,
        resources: &ResourceManager,
        backend: &mut dyn FontBackend,
    ) -> Result<(), InitError> {
        let _span = PerfSpan::new(span_names::LOAD_FONTS);
        let mut failures = Vec::new();

        for record in self.records.values_mut() {
            if record.is_usable() {
                continue;
            }
            match load_record(record, resources, backend) {
                Ok(()) => tracing::debug!(
                    target: targets::REGISTRY,
                    style = %record.style,
                    family = record.family(),
                    "icon font loaded"
                ),
                Err(err) => {
                    tracing::warn!(target: targets::REGISTRY, style = %record.style, "{err}");
                    failures.push(err);
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(InitError { failures })
        }
    }

    /// Points a style at a family the backend already knows, instead of
    /// loading the style's font file.
    ///
    /// Any data this record registered before is unregistered.
    pub fn use_font_family(
        &mut self,
        style: IconStyle,
        family: &str,
        weight: Option<FontWeight>,
        backend: &mut dyn FontBackend,
    ) -> Result<(), FontError> {
        if !backend.has_family(family) {
            return Err(FontError::UnknownFamily {
                style,
                family: family.to_string(),
            });
        }

        let record = self
            .records
            .entry(style)
            .or_insert_with(|| FontRecord::new(style, "", style.default_weight()));
        if let Some(handle) = record.handle.take() {
            backend.unregister_font(handle);
        }
        record.family = Some(family.to_string());
        if let Some(weight) = weight {
            record.weight = weight;
        }
        tracing::debug!(target: targets::REGISTRY, %style, family, "using custom font family");
        Ok(())
    }

    /// The family name of a style, or `""` if it is unknown or not loaded.
    pub fn font_family(&self, style: IconStyle) -> &str {
        self.record(style).map_or("", FontRecord::family)
    }

    /// Whether the style's font data is registered with the backend.
    pub fn font_handle_valid(&self, style: IconStyle) -> bool {
        self.record(style).is_some_and(|r| r.handle.is_some())
    }

    /// Whether glyphs of the style can be drawn.
    pub fn is_usable(&self, style: IconStyle) -> bool {
        self.record(style).is_some_and(FontRecord::is_usable)
    }

    /// The style's font at a pixel size.
    pub fn font(&self, style: IconStyle, pixel_size: f32) -> Option<Font> {
        let record = self.record(style)?;
        let family = record.family.as_ref()?;
        Some(Font::new(FontFamily::name(family.clone()), pixel_size).with_weight(record.weight))
    }

    /// Whether the style's registered font maps `codepoint` to a glyph.
    pub fn has_glyph(&self, style: IconStyle, codepoint: u32, backend: &dyn FontBackend) -> bool {
        let Some(ch) = char::from_u32(codepoint) else {
            return false;
        };
        self.record(style)
            .and_then(FontRecord::handle)
            .is_some_and(|handle| backend.has_glyph(handle, ch))
    }

    /// Unregisters every font this registry loaded.
    pub fn unload(&mut self, backend: &mut dyn FontBackend) {
        for record in self.records.values_mut() {
            if let Some(handle) = record.handle.take() {
                backend.unregister_font(handle);
                record.family = None;
            }
        }
    }
}

fn load_record(
    record: &mut FontRecord,
    resources: &ResourceManager,
    backend: &mut dyn FontBackend,
) -> Result<(), FontError> {
    let style = record.style;
    let data = resources
        .load_sync(&record.path)
        .map_err(|source| FontError::Resource { style, source })?;

    let handle = backend
        .register_font_data(data)
        .map_err(|source| FontError::Register { style, source })?;

    let families = backend.font_families(handle);
    match families.into_iter().next() {
        Some(family) => {
            record.handle = Some(handle);
            record.family = Some(family);
            Ok(())
        }
        None => {
            backend.unregister_font(handle);
            record.handle = None;
            Err(FontError::NoFamilies { style })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use awesome_icons_render::Size;
    use awesome_icons_render::text::FontLoadError;

    use super::*;

    /// Treats font data as UTF-8 text: the family name, or empty for a font
    /// without families.
    #[derive(Default)]
    struct FakeBackend {
        fonts: HashMap<FontHandle, String>,
        next: u32,
        registrations: usize,
    }

    impl FontBackend for FakeBackend {
        fn register_font_data(&mut self, data: Vec<u8>) -> Result<FontHandle, FontLoadError> {
            let family = String::from_utf8(data)
                .map_err(|e| FontLoadError::InvalidFormat(e.to_string()))?;
            let handle = FontHandle(self.next);
            self.next += 1;
            self.registrations += 1;
            self.fonts.insert(handle, family);
            Ok(handle)
        }

        fn unregister_font(&mut self, handle: FontHandle) -> bool {
            self.fonts.remove(&handle).is_some()
        }

        fn font_families(&self, handle: FontHandle) -> Vec<String> {
            self.fonts
                .get(&handle)
                .filter(|family| !family.is_empty())
                .cloned()
                .into_iter()
                .collect()
        }

        fn has_family(&self, family: &str) -> bool {
            family == "System Icons" || self.fonts.values().any(|f| f == family)
        }

        fn has_glyph(&self, handle: FontHandle, ch: char) -> bool {
            self.fonts.contains_key(&handle) && ch == '\u{f013}'
        }

        fn measure_text(&mut self, _text: &str, font: &Font) -> Size {
            Size::new(font.pixel_size(), font.pixel_size())
        }
    }

    fn resources(files: &[(&str, &[u8])]) -> (tempfile::TempDir, ResourceManager) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("fonts")).unwrap();
        for (name, data) in files {
            std::fs::write(dir.path().join("fonts").join(name), data).unwrap();
        }
        let manager = ResourceManager::new();
        manager.register_filesystem_root("", dir.path());
        (dir, manager)
    }

    fn free_registry() -> FontRegistry {
        FontRegistry::from_config(&AwesomeConfig::default())
    }

    #[test]
    fn test_load_all_free_fonts() {
        let (_dir, res) = resources(&[
            ("Font Awesome 6 Free-Solid-900.otf", b"Font Awesome 6 Free"),
            ("Font Awesome 6 Free-Regular-400.otf", b"Font Awesome 6 Free"),
            ("Font Awesome 6 Brands-Regular-400.otf", b"Font Awesome 6 Brands"),
        ]);
        let mut backend = FakeBackend::default();
        let mut registry = free_registry();

        registry.load_fonts(&res, &mut backend).unwrap();
        assert_eq!(registry.font_family(IconStyle::Brands), "Font Awesome 6 Brands");
        assert!(registry.font_handle_valid(IconStyle::Solid));
        assert_eq!(backend.registrations, 3);

        registry.load_fonts(&res, &mut backend).unwrap();
        assert_eq!(backend.registrations, 3);
    }

    #[test]
    fn test_failures_are_per_style() {
        let (_dir, res) = resources(&[
            ("Font Awesome 6 Free-Solid-900.otf", b"Font Awesome 6 Free"),
            ("Font Awesome 6 Free-Regular-400.otf", b""),
        ]);
        let mut backend = FakeBackend::default();
        let mut registry = free_registry();

        let err = registry.load_fonts(&res, &mut backend).unwrap_err();
        let mut failed = err.failed_styles();
        failed.sort();
        assert_eq!(failed, vec![IconStyle::Regular, IconStyle::Brands]);

        assert!(registry.is_usable(IconStyle::Solid));
        assert!(!registry.font_handle_valid(IconStyle::Regular));
        assert_eq!(registry.font_family(IconStyle::Regular), "");
        // the family-less registration was rolled back
        assert_eq!(backend.fonts.len(), 1);
    }

    #[test]
    fn test_retry_after_fix() {
        let (dir, res) = resources(&[("Font Awesome 6 Free-Solid-900.otf", b"Font Awesome 6 Free")]);
        let mut backend = FakeBackend::default();
        let mut registry = free_registry();
        assert!(registry.load_fonts(&res, &mut backend).is_err());

        for (name, family) in [
            ("Font Awesome 6 Free-Regular-400.otf", "Font Awesome 6 Free"),
            ("Font Awesome 6 Brands-Regular-400.otf", "Font Awesome 6 Brands"),
        ] {
            std::fs::write(dir.path().join("fonts").join(name), family).unwrap();
        }
        registry.load_fonts(&res, &mut backend).unwrap();
        assert_eq!(backend.registrations, 3);
    }

    #[test]
    fn test_use_font_family() {
        let mut backend = FakeBackend::default();
        let mut registry = free_registry();

        let err = registry
            .use_font_family(IconStyle::Solid, "Missing", None, &mut backend)
            .unwrap_err();
        assert!(matches!(err, FontError::UnknownFamily { .. }));

        registry
            .use_font_family(IconStyle::Solid, "System Icons", Some(FontWeight::NORMAL), &mut backend)
            .unwrap();
        assert!(registry.is_usable(IconStyle::Solid));
        assert!(!registry.font_handle_valid(IconStyle::Solid));

        let font = registry.font(IconStyle::Solid, 12.0).unwrap();
        assert_eq!(font.family(), &FontFamily::name("System Icons"));
        assert_eq!(font.weight(), FontWeight::NORMAL);
    }

    #[test]
    fn test_font_and_glyphs() {
        let (_dir, res) = resources(&[("Font Awesome 6 Free-Solid-900.otf", b"Font Awesome 6 Free")]);
        let mut backend = FakeBackend::default();
        let mut registry = free_registry();
        let _ = registry.load_fonts(&res, &mut backend);

        let font = registry.font(IconStyle::Solid, 16.0).unwrap();
        assert_eq!(font.weight(), FontWeight::BLACK);
        assert!(registry.font(IconStyle::Regular, 16.0).is_none());
        assert!(registry.has_glyph(IconStyle::Solid, 0xf013, &backend));
        assert!(!registry.has_glyph(IconStyle::Solid, 0xf0fc, &backend));
        assert!(!registry.has_glyph(IconStyle::Solid, 0xd800, &backend));

        registry.unload(&mut backend);
        assert!(backend.fonts.is_empty());
        assert!(!registry.is_usable(IconStyle::Solid));
    }
}
