use super::NamedCodepoint;

/// Glyphs that only exist in the Pro edition.
///
/// Pro styles share one table, so these are added on top of [`SOLID`].
///
/// [`SOLID`]: super::SOLID
pub static PRO_EXTRA: &[NamedCodepoint] = &[
    ("abacus", 0xf640),
    ("acorn", 0xf6ae),
    ("alarm-clock", 0xf34e),
    ("album", 0xf89f),
    ("alicorn", 0xf6b0),
    ("axe", 0xf6b2),
    ("hexagon", 0xf312),
    ("sparkles", 0xf890),
];
