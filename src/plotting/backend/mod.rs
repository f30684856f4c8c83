//! Rendering backends.

mod svg;

pub use svg::{escape_xml, sketch_filter, SvgBackend};
