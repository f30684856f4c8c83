//! Styling primitives.
//!
//! Colors, dash patterns, markers, and the line, marker, fill, text and
//! arrow styles the SVG backend draws with.

pub mod arrow;
pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;

pub use arrow::{ArrowHead, ArrowStyle};
pub use color::Color;
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, LineStyle};
pub use marker::{Marker, MarkerSpec, MarkerStyle, PolygonKind};
pub use text_style::{TextAnchor, TextStyle};
