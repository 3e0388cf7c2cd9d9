//! Static name -> codepoint tables.
//!
//! Names are the Font Awesome 6 identifiers without the `fa-` marker.
//! Frequently used version 4/5 names are kept as aliases pointing at the
//! same codepoint.

mod brands;
mod pro;
mod regular;
mod solid;

pub use brands::BRANDS;
pub use pro::PRO_EXTRA;
pub use regular::REGULAR;
pub use solid::SOLID;

/// A table entry: icon name and glyph codepoint.
pub type NamedCodepoint = (&'static str, u32);
