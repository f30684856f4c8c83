//! Style profiles: palettes, rendering settings and the composer that
//! turns a [`ProfileParams`] table into a registry of styles.

pub mod palette;
pub mod rc;

use log::info;

use crate::config::ProfileParams;
use crate::error::StyleResult;
use crate::plotting::style::{ArrowHead, ArrowStyle, Color, DashPattern};
use crate::styles::registry::LINE;
use crate::styles::{
    attr, make_arrow_style, make_line_styles, plot_styles, Broadcast, LineSpec, PlotStyleParams,
    StyleNames, StyleRegistry,
};
use palette::{Palette, PaletteName, PaletteSpec};
use rc::{color_cycler, plot_params, PlotParams, RcParams};

/// The built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Profile {
    /// Vivid colors and heavy lines for viewing on screen
    #[default]
    Screen,
    /// Muted colors and thin lines for print
    Paper,
    /// Hand-drawn look with large fonts
    Sketch,
}

impl Profile {
    pub fn params(&self) -> ProfileParams {
        match self {
            Profile::Screen => ProfileParams::default(),
            Profile::Paper => ProfileParams {
                name: "paper".to_string(),
                palette: PaletteSpec::Named(PaletteName::Muted),
                lw_thick: 1.7,
                lw_thin: 0.8,
                lw_spines: 0.8,
                marker_large: 6.5,
                marker_small: 4.0,
                edge_width: 0.8,
                tick_size: 2.5,
                fig_color: "none".to_string(),
                axes_color: "none".to_string(),
                save_format: "pdf".to_string(),
                ..ProfileParams::default()
            },
            Profile::Sketch => ProfileParams {
                name: "sketch".to_string(),
                lw_thick: 3.0,
                lw_thin: 1.8,
                lw_spines: 1.8,
                marker_large: 6.5,
                marker_small: 4.0,
                edge_width: 0.8,
                font_size: 14.0,
                font_family: None,
                label_size: "medium".into(),
                legend_size: "medium".into(),
                tick_size: 6.0,
                fig_color: "white".to_string(),
                axes_color: "none".to_string(),
                save_format: "pdf".to_string(),
                sketch: true,
                ..ProfileParams::default()
            },
        }
    }
}

/// A palette color by name, or any other color string such as `none`.
pub fn resolve_color(palette: &Palette, color: &str) -> Color {
    palette
        .get(color)
        .cloned()
        .unwrap_or_else(|| Color::from(color))
}

/// Generate all styles of a profile into `registry` and write its
/// rendering settings into `rc`.
///
/// `rc` is reset to its defaults first, so applying a profile twice gives
/// the same result as applying it once.
pub fn apply_profile(
    params: &ProfileParams,
    registry: &mut StyleRegistry,
    rc: &mut RcParams,
) -> StyleResult<()> {
    let palette = params.palette.resolve();

    // semantic styles
    let names: Vec<String> = params.styles.iter().map(|s| s.name.clone()).collect();
    let colors = params
        .styles
        .iter()
        .map(|s| palette::color(&palette, &s.color))
        .collect::<StyleResult<Vec<Color>>>()?;
    let dashes = params.styles.iter().map(|s| s.dash.clone()).collect();
    let markers = params.styles.iter().map(|s| s.marker.clone()).collect();
    let style_params = PlotStyleParams {
        lw_thick: params.lw_thick,
        lw_thin: params.lw_thin,
        marker_large: params.marker_large,
        marker_small: params.marker_small,
        edge_factor: params.edge_factor,
        edge_width: params.edge_width,
        fill_alpha: params.fill_alpha,
    };
    plot_styles(
        registry,
        &StyleNames::List(names),
        Broadcast::PerStyle(colors),
        Broadcast::PerStyle(dashes),
        Broadcast::PerStyle(markers),
        &style_params,
    )?;

    // singleton line styles
    let black = palette::color(&palette, "black")?;
    let gray = palette::color(&palette, "gray")?;
    let spine = LineSpec::new(Broadcast::Scalar(black.clone()))
        .width(params.lw_spines)
        .extra(attr::CLIP_ON, false);
    make_line_styles(registry, LINE, &"Spine".into(), "", &spine)?;
    let grid = LineSpec::new(Broadcast::Scalar(gray))
        .dash(DashPattern::Dashed)
        .width(params.lw_thin);
    make_line_styles(registry, LINE, &"Grid".into(), "", &grid)?;
    let marker = LineSpec::new(Broadcast::Scalar(black.clone()))
        .width(params.lw_thick)
        .extra(attr::CLIP_ON, false);
    make_line_styles(registry, LINE, &"Marker".into(), "", &marker)?;

    // arrows
    let line_arrow = ArrowStyle {
        head: ArrowHead::Line,
        color: black,
        width: 0.8,
        head_length: 5.0,
        head_width: 5.0,
        dist: 3.0,
        shrink: 0.0,
    };
    make_arrow_style(registry, "Line", &line_arrow);
    let filled_arrow = ArrowStyle {
        head: ArrowHead::Filled,
        width: 1.0,
        head_length: 10.0,
        head_width: 6.0,
        ..line_arrow
    };
    make_arrow_style(registry, "Filled", &filled_arrow);

    // rendering settings
    rc.reset();
    if params.sketch {
        rc.xkcd()?;
    }
    let plot = PlotParams {
        font_size: params.font_size,
        font_family: params.font_family.clone(),
        label_size: params.label_size.clone(),
        tick_dir: params.tick_dir,
        tick_size: params.tick_size,
        legend_size: params.legend_size.clone(),
        latex: params.latex,
        preamble: params.preamble.clone(),
        fig_color: resolve_color(&palette, &params.fig_color),
        axes_color: resolve_color(&palette, &params.axes_color),
    };
    plot_params(rc, registry, &plot)?;
    rc.set("savefig.format", params.save_format.as_str())?;
    color_cycler(rc, &palette, &params.cycle_colors)?;

    info!(
        "Applied profile '{}': {} styles in {} categories",
        params.name,
        registry.len(),
        registry.categories().count()
    );
    Ok(())
}

/// Build a fresh registry and configuration for a built-in profile.
pub fn load_profile(profile: Profile) -> StyleResult<(StyleRegistry, RcParams)> {
    let mut registry = StyleRegistry::new();
    let mut rc = RcParams::new();
    apply_profile(&profile.params(), &mut registry, &mut rc)?;
    Ok((registry, rc))
}
