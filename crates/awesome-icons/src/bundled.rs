//! Font files embedded at build time.

use awesome_icons_core::{EmbeddedDir, IncludeDir, ResourceManager};

static RESOURCES: IncludeDir<'static> = include_dir::include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Serves the embedded `resources/` directory under the `:/` prefix, so the
/// default font prefix `:/fonts/` finds the bundled files.
pub fn register(resources: &ResourceManager) {
    resources.register_embedded("", EmbeddedDir::new(&RESOURCES));
}
