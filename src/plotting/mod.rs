//! Minimal plotting primitives the generated styles are drawn with.
//! Provides typed styles and an SVG backend.

pub mod backend;
pub mod style;

pub use backend::SvgBackend;
pub use style::{
    ArrowHead, ArrowStyle, Color, DashPattern, FillStyle, LineStyle, Marker, MarkerSpec,
    MarkerStyle, PolygonKind, TextStyle,
};
