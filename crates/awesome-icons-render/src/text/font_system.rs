//! A [`FontBackend`] on cosmic-text and fontdb.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use awesome_icons_core::logging::targets;
use cosmic_text::{Buffer, Metrics, Shaping};
use fontdb::ID as FaceId;

use super::backend::{FontBackend, FontLoadError};
use super::font::Font;
use super::types::FontHandle;
use crate::types::Size;

/// Settings for [`FontSystem::with_config`].
#[derive(Debug, Clone)]
pub struct FontSystemConfig {
    /// Load the fonts installed on the system. Icon fonts are registered
    /// explicitly, so this only matters when the same system lays out
    /// ordinary text.
    pub load_system_fonts: bool,
    /// Shaping locale, e.g. `"en-US"`.
    pub locale: String,
}

impl Default for FontSystemConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            locale: sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string()),
        }
    }
}

impl FontSystemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// Vertical metrics of a face, in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascent: i16,
    /// Usually negative.
    pub descent: i16,
}

impl FontMetrics {
    /// Ascent to descent at `pixel_size`.
    pub fn height_px(&self, pixel_size: f32) -> f32 {
        match self.units_per_em {
            0 => pixel_size,
            upem => f32::from(self.ascent - self.descent) * pixel_size / f32::from(upem),
        }
    }
}

/// Owns a font database and measures text with cosmic-text shaping.
///
/// Data registered through [`FontBackend::register_font_data`] is tracked
/// per [`FontHandle`] so it can be queried and removed as a unit. Not
/// `Sync`; put it behind a lock to share it.
///
/// ```no_run
/// use awesome_icons_render::text::{FontBackend, FontSystem, FontSystemConfig};
///
/// let mut fonts = FontSystem::with_config(FontSystemConfig::new().load_system_fonts(false));
/// let data = std::fs::read("fa-solid-900.otf").unwrap();
/// let handle = fonts.register_font_data(data).unwrap();
/// println!("{:?}", fonts.font_families(handle));
/// ```
pub struct FontSystem {
    inner: cosmic_text::FontSystem,
    handles: HashMap<FontHandle, Vec<FaceId>>,
    next_handle: u32,
}

impl FontSystem {
    /// A font system with the system fonts loaded, which can take a moment.
    pub fn new() -> Self {
        Self::with_config(FontSystemConfig::default())
    }

    pub fn with_config(config: FontSystemConfig) -> Self {
        let mut db = fontdb::Database::new();
        if config.load_system_fonts {
            db.load_system_fonts();
        }
        Self {
            inner: cosmic_text::FontSystem::new_with_locale_and_db(config.locale, db),
            handles: HashMap::new(),
            next_handle: 0,
        }
    }

    pub fn face_count(&self) -> usize {
        self.inner.db().len()
    }

    /// Parses the face's `hhea` metrics.
    pub fn face_metrics(&self, face: FaceId) -> Option<FontMetrics> {
        self.with_face(face, |face| FontMetrics {
            units_per_em: face.units_per_em(),
            ascent: face.ascender(),
            descent: face.descender(),
        })
    }

    fn with_face<T>(&self, id: FaceId, f: impl FnOnce(&ttf_parser::Face<'_>) -> T) -> Option<T> {
        self.inner
            .db()
            .with_face_data(id, |data, index| {
                ttf_parser::Face::parse(data, index).ok().map(|face| f(&face))
            })
            .flatten()
    }

    fn faces(&self, handle: FontHandle) -> &[FaceId] {
        self.handles.get(&handle).map_or(&[], Vec::as_slice)
    }

    fn line_height(&self, font: &Font) -> f32 {
        let families = [font.family().to_fontdb()];
        let query = fontdb::Query {
            families: &families,
            weight: font.weight().to_fontdb(),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        self.inner
            .db()
            .query(&query)
            .and_then(|id| self.face_metrics(id))
            .map_or(font.pixel_size(), |m| m.height_px(font.pixel_size()))
    }
}

impl FontBackend for FontSystem {
    fn register_font_data(&mut self, data: Vec<u8>) -> Result<FontHandle, FontLoadError> {
        let known: HashSet<FaceId> = self.inner.db().faces().map(|face| face.id).collect();
        self.inner
            .db_mut()
            .load_font_source(fontdb::Source::Binary(Arc::new(data)));

        let added: Vec<FaceId> = self
            .inner
            .db()
            .faces()
            .map(|face| face.id)
            .filter(|id| !known.contains(id))
            .collect();
        if added.is_empty() {
            return Err(FontLoadError::InvalidFormat(
                "data contains no usable font faces".to_string(),
            ));
        }

        let handle = FontHandle(self.next_handle);
        self.next_handle += 1;
        tracing::debug!(target: targets::FONT, %handle, faces = added.len(), "registered font data");
        self.handles.insert(handle, added);
        Ok(handle)
    }

    fn unregister_font(&mut self, handle: FontHandle) -> bool {
        let Some(faces) = self.handles.remove(&handle) else {
            return false;
        };
        let db = self.inner.db_mut();
        for id in faces {
            db.remove_face(id);
        }
        tracing::debug!(target: targets::FONT, %handle, "unregistered font data");
        true
    }

    fn font_families(&self, handle: FontHandle) -> Vec<String> {
        let db = self.inner.db();
        let mut names = Vec::new();
        let families = self
            .faces(handle)
            .iter()
            .filter_map(|id| db.face(*id))
            .flat_map(|face| face.families.iter().map(|(name, _)| name));
        for name in families {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    fn has_family(&self, family: &str) -> bool {
        self.inner
            .db()
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == family))
    }

    fn has_glyph(&self, handle: FontHandle, ch: char) -> bool {
        self.faces(handle).iter().any(|id| {
            self.with_face(*id, |face| face.glyph_index(ch).is_some())
                .unwrap_or(false)
        })
    }

    fn measure_text(&mut self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let line_height = self.line_height(font);
        let metrics = Metrics::new(font.pixel_size(), line_height.max(1.0));
        let mut buffer = Buffer::new(&mut self.inner, metrics);
        buffer.set_size(&mut self.inner, None, None);
        buffer.set_text(&mut self.inner, text, font.to_attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.inner, false);

        let (width, lines) = buffer
            .layout_runs()
            .fold((0.0f32, 0usize), |(w, n), run| (w.max(run.line_w), n + 1));
        Size::new(width, line_height * lines.max(1) as f32)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSystem")
            .field("faces", &self.face_count())
            .field("handles", &self.handles.len())
            .finish()
    }
}
