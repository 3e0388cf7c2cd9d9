//! Provider configuration.
//!
//! The configuration can be built in code or read from TOML:
//!
//! ```
//! use awesome_icons::{AwesomeConfig, Edition, IconStyle};
//!
//! let config = AwesomeConfig::from_toml_str(r#"
//!     edition = "pro"
//!     font-prefix = "assets:/fonts/"
//!     scale-factor = 0.8
//!
//!     [fonts.light]
//!     file = "custom-light.otf"
//!     weight = 300
//! "#).unwrap();
//!
//! assert_eq!(config.edition, Edition::Pro);
//! assert_eq!(config.font_path(IconStyle::Light), "assets:/fonts/custom-light.otf");
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use awesome_icons_render::text::FontWeight;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::style::IconStyle;

/// Which Font Awesome distribution the font files come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edition {
    #[default]
    Free,
    Pro,
}

impl Edition {
    /// The styles this edition registers fonts for.
    pub fn styles(self) -> &'static [IconStyle] {
        match self {
            Edition::Free => &IconStyle::FREE,
            Edition::Pro => &IconStyle::ALL,
        }
    }
}

/// Per-style font override.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FontSpec {
    /// File name relative to the font prefix.
    pub file: Option<String>,
    /// Font weight, 100..=900.
    pub weight: Option<u16>,
}

impl FontSpec {
    pub fn file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Configuration for an [`Awesome`](crate::Awesome) provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AwesomeConfig {
    pub edition: Edition,
    /// Resource path prepended to every font file name.
    pub font_prefix: String,
    /// Default glyph size relative to the target rect height.
    pub scale_factor: f32,
    /// Font overrides keyed by style.
    #[serde(with = "style_keyed")]
    pub fonts: BTreeMap<IconStyle, FontSpec>,
}

impl Default for AwesomeConfig {
    fn default() -> Self {
        Self {
            edition: Edition::Free,
            font_prefix: Self::DEFAULT_FONT_PREFIX.to_string(),
            scale_factor: Self::DEFAULT_SCALE_FACTOR,
            fonts: BTreeMap::new(),
        }
    }
}

impl AwesomeConfig {
    pub const DEFAULT_FONT_PREFIX: &'static str = ":/fonts/";
    pub const DEFAULT_SCALE_FACTOR: f32 = 0.9;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn edition(mut self, edition: Edition) -> Self {
        self.edition = edition;
        self
    }

    pub fn font_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.font_prefix = prefix.into();
        self
    }

    pub fn scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn font(mut self, style: IconStyle, spec: FontSpec) -> Self {
        self.fonts.insert(style, spec);
        self
    }

    /// Parses a TOML document and validates it.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.scale_factor > 0.0 && self.scale_factor.is_finite()) {
            return Err(ConfigError::InvalidScaleFactor(self.scale_factor));
        }
        for (style, spec) in &self.fonts {
            if let Some(weight) = spec.weight
                && !(100..=900).contains(&weight)
            {
                return Err(ConfigError::InvalidWeight {
                    style: *style,
                    weight,
                });
            }
        }
        Ok(())
    }

    /// Font file name for a style, honoring overrides.
    pub fn font_file(&self, style: IconStyle) -> String {
        self.fonts
            .get(&style)
            .and_then(|spec| spec.file.clone())
            .unwrap_or_else(|| style.font_file(self.edition).to_string())
    }

    /// Full resource path of a style's font.
    pub fn font_path(&self, style: IconStyle) -> String {
        format!("{}{}", self.font_prefix, self.font_file(style))
    }

    /// Font weight for a style, honoring overrides.
    pub fn font_weight(&self, style: IconStyle) -> FontWeight {
        self.fonts
            .get(&style)
            .and_then(|spec| spec.weight)
            .map(FontWeight::new)
            .unwrap_or_else(|| style.default_weight())
    }
}

/// Serializes style-keyed maps through their prefix strings, so TOML tables
/// read `[fonts.sharp-solid]`.
mod style_keyed {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FontSpec;
    use crate::style::IconStyle;

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<IconStyle, FontSpec>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        map.iter()
            .map(|(style, spec)| (style.prefix(), spec))
            .collect::<BTreeMap<_, _>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<IconStyle, FontSpec>, D::Error> {
        BTreeMap::<String, FontSpec>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, spec)| {
                key.parse::<IconStyle>()
                    .map(|style| (style, spec))
                    .map_err(D::Error::custom)
            })
            .collect()
    }
}
