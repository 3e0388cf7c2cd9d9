//! Shared fixtures: a font backend that needs no real font files.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use awesome_icons::render::text::{Font, FontBackend, FontHandle, FontLoadError};
use awesome_icons::{Awesome, AwesomeConfig, Edition, IconStyle, Size};
use parking_lot::Mutex;
use tempfile::TempDir;

/// State shared between a [`FakeFonts`] and the test that created it.
#[derive(Debug, Default)]
pub struct FakeState {
    pub fonts: HashMap<FontHandle, String>,
    pub registrations: usize,
    pub unregistrations: usize,
    /// Glyph advance relative to the pixel size.
    pub advance: f32,
    pub measured: Vec<(String, f32)>,
}

/// Treats font data as the UTF-8 family name; empty data registers a font
/// without families. Text measures `advance * pixel_size` per char wide
/// and `pixel_size` tall.
#[derive(Clone)]
pub struct FakeFonts {
    pub state: Arc<Mutex<FakeState>>,
    next: u32,
}

impl FakeFonts {
    pub fn new() -> Self {
        Self::with_advance(1.0)
    }

    pub fn with_advance(advance: f32) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                advance,
                ..FakeState::default()
            })),
            next: 0,
        }
    }
}

impl FontBackend for FakeFonts {
    fn register_font_data(&mut self, data: Vec<u8>) -> Result<FontHandle, FontLoadError> {
        let family =
            String::from_utf8(data).map_err(|e| FontLoadError::InvalidFormat(e.to_string()))?;
        let handle = FontHandle(self.next);
        self.next += 1;
        let mut state = self.state.lock();
        state.registrations += 1;
        state.fonts.insert(handle, family);
        Ok(handle)
    }

    fn unregister_font(&mut self, handle: FontHandle) -> bool {
        let mut state = self.state.lock();
        state.unregistrations += 1;
        state.fonts.remove(&handle).is_some()
    }

    fn font_families(&self, handle: FontHandle) -> Vec<String> {
        self.state
            .lock()
            .fonts
            .get(&handle)
            .filter(|family| !family.is_empty())
            .cloned()
            .into_iter()
            .collect()
    }

    fn has_family(&self, family: &str) -> bool {
        self.state.lock().fonts.values().any(|f| f == family)
    }

    fn has_glyph(&self, handle: FontHandle, ch: char) -> bool {
        self.state.lock().fonts.contains_key(&handle) && ('\u{e000}'..='\u{f8ff}').contains(&ch)
    }

    fn measure_text(&mut self, text: &str, font: &Font) -> Size {
        let mut state = self.state.lock();
        state.measured.push((text.to_string(), font.pixel_size()));
        let chars = text.chars().count() as f32;
        Size::new(chars * state.advance * font.pixel_size(), font.pixel_size())
    }
}

/// A directory laid out as `<root>/fonts/<file>`, registered as the `:/`
/// resource root.
pub struct FontDir {
    pub dir: TempDir,
}

impl FontDir {
    /// Writes the font files of every style of `edition`.
    pub fn for_edition(edition: Edition) -> Self {
        let font_dir = Self::empty();
        for style in edition.styles() {
            font_dir.write(style.font_file(edition), family_for(*style, edition));
        }
        font_dir
    }

    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("fonts")).unwrap();
        Self { dir }
    }

    pub fn write(&self, file: &str, family: &str) {
        std::fs::write(self.dir.path().join("fonts").join(file), family).unwrap();
    }

    pub fn remove(&self, file: &str) {
        std::fs::remove_file(self.dir.path().join("fonts").join(file)).unwrap();
    }

    pub fn attach(&self, awesome: &Awesome) {
        awesome
            .resources()
            .register_filesystem_root("", self.dir.path());
    }
}

pub fn family_for(style: IconStyle, edition: Edition) -> &'static str {
    match (style, edition) {
        (IconStyle::Brands, _) => "Font Awesome 6 Brands",
        (_, Edition::Free) => "Font Awesome 6 Free",
        (IconStyle::Duotone, Edition::Pro) => "Font Awesome 6 Duotone",
        (
            IconStyle::SharpSolid
            | IconStyle::SharpRegular
            | IconStyle::SharpLight
            | IconStyle::SharpThin,
            Edition::Pro,
        ) => "Font Awesome 6 Sharp",
        (_, Edition::Pro) => "Font Awesome 6 Pro",
    }
}

/// An initialized provider for `edition`, with its backend state and font
/// directory.
pub fn provider(edition: Edition) -> (Awesome, Arc<Mutex<FakeState>>, FontDir) {
    provider_with(AwesomeConfig::new().edition(edition), FakeFonts::new())
}

pub fn provider_with(
    config: AwesomeConfig,
    fonts: FakeFonts,
) -> (Awesome, Arc<Mutex<FakeState>>, FontDir) {
    let state = fonts.state.clone();
    let font_dir = FontDir::for_edition(config.edition);
    let mut awesome = Awesome::with_config(config, fonts);
    font_dir.attach(&awesome);
    assert!(awesome.initialize());
    (awesome, state, font_dir)
}

pub fn glyph(codepoint: u32) -> String {
    char::from_u32(codepoint).unwrap().to_string()
}
