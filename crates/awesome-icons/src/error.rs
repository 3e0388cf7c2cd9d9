//! Error types for the icon provider.

use std::path::PathBuf;

use awesome_icons_core::ResourceError;
use awesome_icons_render::text::FontLoadError;
use thiserror::Error;

use crate::style::IconStyle;

/// Why a single style's font could not be made available.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font bytes could not be read from the resource set.
    #[error("cannot read font for {style}: {source}")]
    Resource {
        style: IconStyle,
        #[source]
        source: ResourceError,
    },

    /// The font backend rejected the data.
    #[error("cannot register font for {style}: {source}")]
    Register {
        style: IconStyle,
        #[source]
        source: FontLoadError,
    },

    /// Registration succeeded but produced no font family.
    #[error("font for {style} registered no font family")]
    NoFamilies { style: IconStyle },

    /// A custom family name is not known to the backend.
    #[error("font family {family:?} for {style} is not loaded")]
    UnknownFamily { style: IconStyle, family: String },
}

impl FontError {
    /// The style the error belongs to.
    pub fn style(&self) -> IconStyle {
        match self {
            FontError::Resource { style, .. }
            | FontError::Register { style, .. }
            | FontError::NoFamilies { style }
            | FontError::UnknownFamily { style, .. } => *style,
        }
    }
}

/// Initialization failed for one or more styles.
///
/// Styles not listed loaded successfully and are usable.
#[derive(Debug, Error)]
#[error("{} icon font(s) failed to load{}", .failures.len(), joined(.failures))]
pub struct InitError {
    pub failures: Vec<FontError>,
}

impl InitError {
    /// Styles whose fonts failed to load.
    pub fn failed_styles(&self) -> Vec<IconStyle> {
        self.failures.iter().map(FontError::style).collect()
    }
}

fn joined(failures: &[FontError]) -> String {
    failures.iter().map(|failure| format!("; {failure}")).collect()
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("scale factor must be a positive number, got {0}")]
    InvalidScaleFactor(f32),

    #[error("font weight {weight} for {style} is outside 100..=900")]
    InvalidWeight { style: IconStyle, weight: u16 },
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum AwesomeError {
    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type AwesomeResult<T> = Result<T, AwesomeError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
