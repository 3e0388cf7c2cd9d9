//! Resource lookup for bundled font files.
//!
//! Icon fonts are addressed through resource paths:
//! - `:/fonts/name.otf` - default prefix
//! - `prefix:/fonts/name.otf` - a registered prefix
//! - `/absolute/path` or `relative/path` - plain filesystem access
//!
//! A prefix can be backed by a directory embedded at compile time with
//! `include_dir!`, by a filesystem root, or by both. Embedded data is checked
//! first.
//!
//! ```ignore
//! use include_dir::{include_dir, Dir};
//! use awesome_icons_core::{EmbeddedDir, ResourceManager};
//!
//! static FONTS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/fonts");
//!
//! let resources = ResourceManager::new();
//! resources.register_embedded("", EmbeddedDir::new(&FONTS));
//! let bytes = resources.load_sync(":/fa-solid-900.otf")?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use include_dir::Dir;
use parking_lot::RwLock;

use crate::error::{ResourceError, ResourceResult};
use crate::logging::targets;

pub use include_dir::Dir as IncludeDir;

/// A directory tree compiled into the binary by `include_dir!`.
#[derive(Clone, Copy)]
pub struct EmbeddedDir {
    dir: &'static Dir<'static>,
}

impl EmbeddedDir {
    pub const fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }

    /// Contents of the file at `path`, relative to the embedded root.
    pub fn get_file(&self, path: &str) -> Option<&'static [u8]> {
        self.dir.get_file(path).map(|file| file.contents())
    }
}

impl std::fmt::Debug for EmbeddedDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedDir")
            .field("path", &self.dir.path())
            .finish()
    }
}

/// A path split into its resource prefix and the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath<'a> {
    /// `"icons"` for `"icons:/a.otf"`, empty for `":/a.otf"` and plain paths.
    pub prefix: &'a str,
    pub path: &'a str,
    /// Whether the input used the `prefix:/` form.
    pub is_resource: bool,
}

impl<'a> ResourcePath<'a> {
    /// - `":/fonts/a.otf"` -> prefix `""`, path `"fonts/a.otf"`
    /// - `"icons:/a.otf"` -> prefix `"icons"`, path `"a.otf"`
    /// - `"/abs/a.otf"` -> a plain filesystem path
    pub fn parse(input: &'a str) -> Self {
        match input.split_once(":/") {
            Some((prefix, path)) => Self {
                prefix,
                path,
                is_resource: true,
            },
            None => Self {
                prefix: "",
                path: input,
                is_resource: false,
            },
        }
    }
}

/// Routes resource paths to embedded directories and filesystem roots.
#[derive(Default)]
pub struct ResourceManager {
    embedded: RwLock<HashMap<String, EmbeddedDir>>,
    roots: RwLock<HashMap<String, PathBuf>>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `dir` under `prefix`; the empty prefix is the `:/` form.
    pub fn register_embedded(&self, prefix: &str, dir: EmbeddedDir) {
        self.embedded.write().insert(prefix.to_string(), dir);
    }

    /// Maps a prefix to a filesystem directory.
    ///
    /// After `register_filesystem_root("", "/usr/share/app")`, the path
    /// `":/fonts/a.otf"` reads `/usr/share/app/fonts/a.otf`.
    pub fn register_filesystem_root(&self, prefix: &str, root: impl Into<PathBuf>) {
        self.roots.write().insert(prefix.to_string(), root.into());
    }

    pub fn unregister_filesystem_root(&self, prefix: &str) -> bool {
        self.roots.write().remove(prefix).is_some()
    }

    /// Bytes of an embedded resource. Filesystem roots are not consulted.
    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        let parsed = ResourcePath::parse(path);
        if !parsed.is_resource {
            return None;
        }
        self.embedded.read().get(parsed.prefix)?.get_file(parsed.path)
    }

    fn root_path(&self, parsed: &ResourcePath<'_>) -> Option<PathBuf> {
        self.roots
            .read()
            .get(parsed.prefix)
            .map(|root| root.join(parsed.path))
    }

    pub fn exists(&self, path: &str) -> bool {
        let parsed = ResourcePath::parse(path);
        if !parsed.is_resource {
            return Path::new(parsed.path).exists();
        }
        self.get(path).is_some() || self.root_path(&parsed).is_some_and(|p| p.exists())
    }

    /// Reads a resource into memory, embedded data first.
    pub fn load_sync(&self, path: &str) -> ResourceResult<Vec<u8>> {
        let parsed = ResourcePath::parse(path);
        if !parsed.is_resource {
            return std::fs::read(parsed.path).map_err(|e| ResourceError::from_io(e, parsed.path));
        }

        if let Some(data) = self.get(path) {
            tracing::trace!(target: targets::RESOURCE, path, "embedded resource");
            return Ok(data.to_vec());
        }

        let Some(full_path) = self.root_path(&parsed) else {
            return Err(ResourceError::NotFound(path.to_string()));
        };
        tracing::trace!(
            target: targets::RESOURCE,
            path = %full_path.display(),
            "filesystem resource"
        );
        std::fs::read(&full_path).map_err(|e| ResourceError::from_io(e, full_path))
    }
}

impl std::fmt::Debug for ResourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceManager")
            .field("embedded", &self.embedded.read().keys().collect::<Vec<_>>())
            .field("roots", &self.roots.read().keys().collect::<Vec<_>>())
            .finish()
    }
}
