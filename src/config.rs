//! Profile configuration.
//!
//! A profile is the parameter table the composer in [`crate::profile`]
//! turns into style records and rendering settings. The built-in
//! profiles are constructed in code; custom ones are loaded from JSON,
//! with every missing field taken from the screen profile.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::StyleResult;
use crate::plotting::style::{DashPattern, Marker, MarkerSpec, PolygonKind};
use crate::profile::palette::{PaletteName, PaletteSpec};
use crate::profile::rc::{FontSize, TickDirection};

// ============================================================================
// Semantic styles
// ============================================================================

/// One entry of the semantic style table, e.g. `A1` drawn in red circles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SemanticStyle {
    pub name: String,
    /// Palette color name
    pub color: String,
    #[serde(default)]
    pub dash: DashPattern,
    #[serde(default = "MarkerSpec::circle")]
    pub marker: MarkerSpec,
}

impl SemanticStyle {
    fn new(name: &str, color: &str, marker: Marker, scale: f64) -> Self {
        SemanticStyle {
            name: name.to_string(),
            color: color.to_string(),
            dash: DashPattern::Solid,
            marker: MarkerSpec::new(marker, scale),
        }
    }
}

fn triangle(angle: f64) -> Marker {
    Marker::regular(3, PolygonKind::Star, angle)
}

/// The 13 semantic styles shared by all built-in profiles.
pub fn default_styles() -> Vec<SemanticStyle> {
    vec![
        SemanticStyle::new("A1", "red", Marker::Circle, 1.0),
        SemanticStyle::new("A2", "orange", Marker::Pentagon, 1.1),
        SemanticStyle::new("A3", "yellow", Marker::Hexagon, 1.1),
        SemanticStyle::new("B1", "blue", triangle(60.0), 1.25),
        SemanticStyle::new("B2", "purple", triangle(0.0), 1.25),
        SemanticStyle::new("B3", "magenta", triangle(90.0), 1.25),
        SemanticStyle::new("B4", "lightblue", triangle(30.0), 1.25),
        SemanticStyle::new("C1", "lightgreen", Marker::Square, 0.9),
        SemanticStyle::new("C2", "green", Marker::Diamond, 0.85),
        SemanticStyle::new("C3", "darkgreen", Marker::Star, 1.6),
        SemanticStyle::new("C4", "cyan", Marker::regular(4, PolygonKind::Star, 45.0), 1.4),
        SemanticStyle::new("Male", "blue", Marker::Circle, 1.0),
        SemanticStyle::new("Female", "pink", Marker::Circle, 1.0),
    ]
}

// ============================================================================
// Profile parameters
// ============================================================================

/// Everything a profile sets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileParams {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_palette")]
    pub palette: PaletteSpec,
    #[serde(default = "default_styles")]
    pub styles: Vec<SemanticStyle>,

    // line widths
    #[serde(default = "default_lw_thick")]
    pub lw_thick: f64,
    #[serde(default = "default_lw_thin")]
    pub lw_thin: f64,
    #[serde(default = "default_lw_spines")]
    pub lw_spines: f64,

    // markers and fills
    #[serde(default = "default_marker_large")]
    pub marker_large: f64,
    #[serde(default = "default_marker_small")]
    pub marker_small: f64,
    /// Lightening factor of marker and fill edges
    #[serde(default)]
    pub edge_factor: f64,
    #[serde(default = "default_edge_width")]
    pub edge_width: f64,
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,

    // text and ticks
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// `None` keeps the family of the rendering defaults
    #[serde(default = "default_font_family")]
    pub font_family: Option<String>,
    #[serde(default = "default_label_size")]
    pub label_size: FontSize,
    #[serde(default = "default_legend_size")]
    pub legend_size: FontSize,
    #[serde(default)]
    pub tick_dir: TickDirection,
    #[serde(default = "default_tick_size")]
    pub tick_size: f64,
    #[serde(default)]
    pub latex: bool,
    #[serde(default)]
    pub preamble: Option<Vec<String>>,

    // output
    #[serde(default = "default_fig_color")]
    pub fig_color: String,
    #[serde(default = "default_axes_color")]
    pub axes_color: String,
    #[serde(default = "default_save_format")]
    pub save_format: String,
    /// Hand-drawn rendering
    #[serde(default)]
    pub sketch: bool,
    #[serde(default = "default_cycle_colors")]
    pub cycle_colors: Vec<String>,
}

fn default_name() -> String { "screen".to_string() }
fn default_palette() -> PaletteSpec { PaletteSpec::Named(PaletteName::Vivid) }
fn default_lw_thick() -> f64 { 2.5 }
fn default_lw_thin() -> f64 { 1.5 }
fn default_lw_spines() -> f64 { 1.0 }
fn default_marker_large() -> f64 { 10.0 }
fn default_marker_small() -> f64 { 6.5 }
fn default_edge_width() -> f64 { 1.5 }
fn default_fill_alpha() -> f64 { 0.4 }
fn default_font_size() -> f64 { 10.0 }
fn default_font_family() -> Option<String> { Some("sans-serif".to_string()) }
fn default_label_size() -> FontSize { "small".into() }
fn default_legend_size() -> FontSize { "x-small".into() }
fn default_tick_size() -> f64 { 4.0 }
fn default_fig_color() -> String { "gray".to_string() }
fn default_axes_color() -> String { "white".to_string() }
fn default_save_format() -> String { "png".to_string() }

fn default_cycle_colors() -> Vec<String> {
    ["blue", "red", "orange", "lightgreen", "magenta", "yellow", "cyan", "pink"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for ProfileParams {
    fn default() -> Self {
        ProfileParams {
            name: default_name(),
            palette: default_palette(),
            styles: default_styles(),
            lw_thick: default_lw_thick(),
            lw_thin: default_lw_thin(),
            lw_spines: default_lw_spines(),
            marker_large: default_marker_large(),
            marker_small: default_marker_small(),
            edge_factor: 0.0,
            edge_width: default_edge_width(),
            fill_alpha: default_fill_alpha(),
            font_size: default_font_size(),
            font_family: default_font_family(),
            label_size: default_label_size(),
            legend_size: default_legend_size(),
            tick_dir: TickDirection::Out,
            tick_size: default_tick_size(),
            latex: false,
            preamble: None,
            fig_color: default_fig_color(),
            axes_color: default_axes_color(),
            save_format: default_save_format(),
            sketch: false,
            cycle_colors: default_cycle_colors(),
        }
    }
}

impl ProfileParams {
    /// Load profile parameters from a JSON file
    pub fn load(path: impl AsRef<Path>) -> StyleResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let params: ProfileParams = serde_json::from_reader(reader)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_screen_profile() {
        let params: ProfileParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, ProfileParams::default());
        assert_eq!(params.styles.len(), 13);
        assert_eq!(params.styles[3].marker.marker, triangle(60.0));
        assert_eq!(params.styles[3].marker.scale, 1.25);
    }

    #[test]
    fn test_load_partial_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "poster",
                "palette": "muted",
                "lw_thick": 4.0,
                "tick_dir": "inout",
                "label_size": 12,
                "styles": [{{"name": "WT", "color": "gray", "dash": "--", "marker": {{"marker": "s", "scale": 0.9}}}}]
            }}"#
        )
        .unwrap();

        let params = ProfileParams::load(file.path()).unwrap();
        assert_eq!(params.name, "poster");
        assert_eq!(params.palette, PaletteSpec::Named(PaletteName::Muted));
        assert_eq!(params.lw_thick, 4.0);
        assert_eq!(params.lw_thin, 1.5);
        assert_eq!(params.tick_dir, TickDirection::InOut);
        assert_eq!(params.label_size, FontSize::Points(12.0));
        assert_eq!(params.styles.len(), 1);
        assert_eq!(params.styles[0].dash, DashPattern::Dashed);
        assert_eq!(params.styles[0].marker, MarkerSpec::new(Marker::Square, 0.9));
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            ProfileParams::load("/nonexistent/profile.json"),
            Err(crate::error::StyleError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"styles": [{{"name": "X", "color": "red", "dash": "~~"}}]}}"#).unwrap();
        assert!(matches!(
            ProfileParams::load(file.path()),
            Err(crate::error::StyleError::Json(_))
        ));
    }
}
