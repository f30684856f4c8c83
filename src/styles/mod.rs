//! Generation of named style records.

pub mod broadcast;
pub mod generate;
pub mod record;
pub mod registry;

pub use broadcast::{style_count, Broadcast, StyleNames};
pub use generate::{
    make_arrow_style, make_fill_styles, make_line_point_styles, make_line_styles,
    make_point_styles, plot_styles, FillSpec, LineSpec, PlotStyleParams, PointSpec,
};
pub use record::{attr, AttrValue, StyleRecord};
pub use registry::StyleRegistry;
