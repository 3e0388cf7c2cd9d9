//! Drawing and font abstractions for awesome-icons.
//!
//! - [`types`]: points, sizes, rectangles and premultiplied colors
//! - [`Painter`]: the drawing surface icons paint into
//! - [`DisplayList`]: a `Painter` that records commands for later replay
//! - [`text`]: fonts, the [`FontBackend`](text::FontBackend) seam and the
//!   cosmic-text based [`FontSystem`](text::FontSystem)

mod display_list;
mod painter;
pub mod text;
mod transform;
pub mod types;

pub use display_list::{DisplayList, DrawCommand};
pub use painter::Painter;
pub use transform::{Transform2D, TransformStack};
pub use types::{Color, Point, Rect, Size};
