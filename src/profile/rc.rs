//! Global rendering configuration and the helpers that fill it.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::palette::Palette;
use crate::error::{StyleError, StyleResult};
use crate::plotting::style::Color;
use crate::styles::{attr, StyleRegistry};

/// A rendering parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RcValue {
    Bool(bool),
    Number(f64),
    Color(Color),
    Text(String),
    Colors(Vec<Color>),
    Texts(Vec<String>),
    Numbers(Vec<f64>),
}

impl From<bool> for RcValue {
    fn from(v: bool) -> Self {
        RcValue::Bool(v)
    }
}

impl From<f64> for RcValue {
    fn from(v: f64) -> Self {
        RcValue::Number(v)
    }
}

impl From<Color> for RcValue {
    fn from(v: Color) -> Self {
        RcValue::Color(v)
    }
}

impl From<&str> for RcValue {
    fn from(v: &str) -> Self {
        RcValue::Text(v.to_string())
    }
}

impl From<FontSize> for RcValue {
    fn from(v: FontSize) -> Self {
        match v {
            FontSize::Points(points) => RcValue::Number(points),
            FontSize::Named(name) => RcValue::Text(name),
        }
    }
}

/// A font size in points or relative to the base size (`small`, `x-large`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Points(f64),
    Named(String),
}

impl FontSize {
    /// Size in points for a base font size of `base`.
    pub fn points(&self, base: f64) -> f64 {
        let scale = match self {
            FontSize::Points(points) => return *points,
            FontSize::Named(name) => match name.as_str() {
                "xx-small" => 0.579,
                "x-small" => 0.694,
                "small" => 0.833,
                "large" => 1.2,
                "x-large" => 1.44,
                "xx-large" => 1.728,
                _ => 1.0,
            },
        };
        base * scale
    }
}

impl From<&str> for FontSize {
    fn from(name: &str) -> Self {
        FontSize::Named(name.to_string())
    }
}

/// Direction of tick marks relative to the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    In,
    #[default]
    Out,
    InOut,
}

impl fmt::Display for TickDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TickDirection::In => "in",
            TickDirection::Out => "out",
            TickDirection::InOut => "inout",
        })
    }
}

/// Which color cycle parameter the configuration understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclerApi {
    /// `axes.prop_cycle`
    #[default]
    Modern,
    /// `axes.color_cycle`
    Legacy,
}

const PROP_CYCLE: &str = "axes.prop_cycle";
const COLOR_CYCLE: &str = "axes.color_cycle";

/// Keys every configuration knows, besides the color cycle key.
const KNOWN_KEYS: &[&str] = &[
    "figure.facecolor",
    "font.family",
    "font.size",
    "xtick.labelsize",
    "ytick.labelsize",
    "xtick.direction",
    "ytick.direction",
    "xtick.major.size",
    "ytick.major.size",
    "xtick.minor.size",
    "ytick.minor.size",
    "legend.fontsize",
    "grid.color",
    "grid.linestyle",
    "grid.linewidth",
    "axes.facecolor",
    "axes.edgecolor",
    "axes.linewidth",
    "lines.linewidth",
    "text.usetex",
    "text.latex.unicode",
    "text.latex.preamble",
    "path.sketch",
    "savefig.format",
];

/// The global rendering configuration.
///
/// Only known keys can be set; the color cycle key depends on the
/// [`CyclerApi`] the configuration was created for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RcParams {
    #[serde(flatten)]
    values: IndexMap<String, RcValue>,
    #[serde(skip)]
    api: CyclerApi,
}

impl Default for RcParams {
    fn default() -> Self {
        RcParams::new()
    }
}

impl RcParams {
    /// Default configuration with the modern color cycle.
    pub fn new() -> Self {
        RcParams::with_api(CyclerApi::Modern)
    }

    /// Default configuration that only knows `axes.color_cycle`.
    pub fn legacy() -> Self {
        RcParams::with_api(CyclerApi::Legacy)
    }

    fn with_api(api: CyclerApi) -> Self {
        RcParams {
            values: defaults(api),
            api,
        }
    }

    /// Restore all defaults.
    pub fn reset(&mut self) {
        self.values = defaults(self.api);
    }

    pub fn api(&self) -> CyclerApi {
        self.api
    }

    /// Whether `key` is a parameter of this configuration.
    pub fn supports(&self, key: &str) -> bool {
        match key {
            PROP_CYCLE => self.api == CyclerApi::Modern,
            COLOR_CYCLE => self.api == CyclerApi::Legacy,
            other => KNOWN_KEYS.contains(&other),
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<RcValue>) -> StyleResult<()> {
        if !self.supports(key) {
            return Err(StyleError::UnknownRcKey(key.to_string()));
        }
        self.values.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.values.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(RcValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn color(&self, key: &str) -> Option<&Color> {
        match self.values.get(key) {
            Some(RcValue::Color(c)) => Some(c),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(RcValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(RcValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// The first font family, if several are given.
    pub fn font_family(&self) -> Option<&str> {
        match self.values.get("font.family") {
            Some(RcValue::Text(family)) => Some(family),
            Some(RcValue::Texts(families)) => families.first().map(String::as_str),
            _ => None,
        }
    }

    /// Scale, length and randomness of hand-drawn lines, if enabled.
    pub fn sketch(&self) -> Option<(f64, f64, f64)> {
        match self.values.get("path.sketch") {
            Some(RcValue::Numbers(v)) if v.len() == 3 => Some((v[0], v[1], v[2])),
            _ => None,
        }
    }

    /// Colors of the active color cycle.
    pub fn color_cycle(&self) -> &[Color] {
        let key = match self.api {
            CyclerApi::Modern => PROP_CYCLE,
            CyclerApi::Legacy => COLOR_CYCLE,
        };
        match self.values.get(key) {
            Some(RcValue::Colors(colors)) => colors,
            _ => &[],
        }
    }

    /// Switch to hand-drawn rendering: wobbly lines and a comic font.
    pub fn xkcd(&mut self) -> StyleResult<()> {
        self.set("path.sketch", RcValue::Numbers(vec![1.0, 100.0, 2.0]))?;
        self.set(
            "font.family",
            RcValue::Texts(vec![
                "xkcd".to_string(),
                "Humor Sans".to_string(),
                "Comic Sans MS".to_string(),
            ]),
        )?;
        self.set("font.size", 14.0)?;
        self.set("axes.linewidth", 1.5)?;
        self.set("lines.linewidth", 2.0)?;
        self.set("grid.linewidth", 0.0)?;
        self.set("figure.facecolor", Color::WHITE)?;
        self.set("axes.edgecolor", Color::BLACK)?;
        self.set("xtick.major.size", 8.0)?;
        self.set("ytick.major.size", 8.0)
    }
}

fn defaults(api: CyclerApi) -> IndexMap<String, RcValue> {
    let cycle: Vec<Color> = (0..10).map(|i| Color::from(format!("C{}", i))).collect();
    let cycle_key = match api {
        CyclerApi::Modern => PROP_CYCLE,
        CyclerApi::Legacy => COLOR_CYCLE,
    };
    let entries: Vec<(&str, RcValue)> = vec![
        ("figure.facecolor", Color::WHITE.into()),
        ("font.family", "sans-serif".into()),
        ("font.size", 10.0.into()),
        ("xtick.labelsize", "medium".into()),
        ("ytick.labelsize", "medium".into()),
        ("xtick.direction", "out".into()),
        ("ytick.direction", "out".into()),
        ("xtick.major.size", 3.5.into()),
        ("ytick.major.size", 3.5.into()),
        ("xtick.minor.size", 2.0.into()),
        ("ytick.minor.size", 2.0.into()),
        ("legend.fontsize", "medium".into()),
        ("grid.color", Color::from("#B0B0B0").into()),
        ("grid.linestyle", "-".into()),
        ("grid.linewidth", 0.8.into()),
        ("axes.facecolor", Color::WHITE.into()),
        ("axes.edgecolor", Color::BLACK.into()),
        ("axes.linewidth", 0.8.into()),
        ("lines.linewidth", 1.5.into()),
        ("text.usetex", false.into()),
        ("text.latex.unicode", false.into()),
        ("text.latex.preamble", RcValue::Texts(Vec::new())),
        ("savefig.format", "png".into()),
        (cycle_key, RcValue::Colors(cycle)),
    ];
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Arguments of [`plot_params`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotParams {
    pub font_size: f64,
    /// `None` keeps the current family
    pub font_family: Option<String>,
    pub label_size: FontSize,
    pub tick_dir: TickDirection,
    /// Major tick length in points; minor ticks get 60 percent
    pub tick_size: f64,
    pub legend_size: FontSize,
    pub latex: bool,
    /// LaTeX preamble lines; `p:pkg` becomes `\usepackage{pkg}`
    pub preamble: Option<Vec<String>>,
    pub fig_color: Color,
    pub axes_color: Color,
}

impl Default for PlotParams {
    fn default() -> Self {
        PlotParams {
            font_size: 10.0,
            font_family: Some("sans-serif".to_string()),
            label_size: "small".into(),
            tick_dir: TickDirection::Out,
            tick_size: 2.5,
            legend_size: "x-small".into(),
            latex: false,
            preamble: None,
            fig_color: Color::none(),
            axes_color: Color::none(),
        }
    }
}

/// Write fonts, ticks, legend, backgrounds and LaTeX settings into `rc`.
///
/// Grid settings are taken from the `Grid` line style and the axes spine
/// settings from the `Spine` line style when `registry` has them.
pub fn plot_params(rc: &mut RcParams, registry: &StyleRegistry, params: &PlotParams) -> StyleResult<()> {
    rc.set("figure.facecolor", params.fig_color.clone())?;
    if let Some(family) = &params.font_family {
        rc.set("font.family", family.as_str())?;
    }
    rc.set("font.size", params.font_size)?;
    rc.set("xtick.labelsize", params.label_size.clone())?;
    rc.set("ytick.labelsize", params.label_size.clone())?;
    let direction = params.tick_dir.to_string();
    rc.set("xtick.direction", direction.as_str())?;
    rc.set("ytick.direction", direction.as_str())?;
    rc.set("xtick.major.size", params.tick_size)?;
    rc.set("ytick.major.size", params.tick_size)?;
    rc.set("xtick.minor.size", 0.6 * params.tick_size)?;
    rc.set("ytick.minor.size", 0.6 * params.tick_size)?;
    rc.set("legend.fontsize", params.legend_size.clone())?;
    if let Some(grid) = registry.get("lsGrid") {
        if let Some(color) = grid.color(attr::COLOR) {
            rc.set("grid.color", color.clone())?;
        }
        if let Some(dash) = grid.dash() {
            rc.set("grid.linestyle", dash.to_format_str().as_str())?;
        }
        if let Some(width) = grid.number(attr::LINEWIDTH) {
            rc.set("grid.linewidth", width)?;
        }
    }
    rc.set("axes.facecolor", params.axes_color.clone())?;
    if let Some(spine) = registry.get("lsSpine") {
        if let Some(color) = spine.color(attr::COLOR) {
            rc.set("axes.edgecolor", color.clone())?;
        }
        if let Some(width) = spine.number(attr::LINEWIDTH) {
            rc.set("axes.linewidth", width)?;
        }
    }
    rc.set("text.usetex", params.latex)?;
    if params.latex {
        rc.set("text.latex.unicode", true)?;
        if let Some(preamble) = &params.preamble {
            rc.set("text.latex.preamble", RcValue::Texts(latex_preamble(preamble)))?;
        }
    }
    debug!("Applied plot parameters, font size {}", params.font_size);
    Ok(())
}

/// Translate `p:pkg` lines into `\usepackage{pkg}`, keep others as they are.
pub fn latex_preamble(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| match line.strip_prefix("p:") {
            Some(package) => format!("\\usepackage{{{}}}", package),
            None => line.clone(),
        })
        .collect()
}

/// Set the color cycle to the palette colors named in `names`.
///
/// Names missing from the palette are skipped.
pub fn color_cycler(rc: &mut RcParams, palette: &Palette, names: &[String]) -> StyleResult<()> {
    let mut cycle = Vec::with_capacity(names.len());
    for name in names {
        match palette.get(name) {
            Some(color) => cycle.push(color.clone()),
            None => warn!("Color '{}' is not in the palette, skipped in color cycle", name),
        }
    }
    let key = if rc.supports(PROP_CYCLE) {
        PROP_CYCLE
    } else {
        COLOR_CYCLE
    };
    rc.set(key, RcValue::Colors(cycle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::DashPattern;
    use crate::styles::{make_line_styles, Broadcast, LineSpec};

    #[test]
    fn test_unknown_key_rejected() {
        let mut rc = RcParams::new();
        assert!(rc.set("font.size", 12.0).is_ok());
        assert!(matches!(
            rc.set("font.sizes", 12.0),
            Err(StyleError::UnknownRcKey(_))
        ));
        assert!(rc.set(COLOR_CYCLE, RcValue::Colors(Vec::new())).is_err());
        assert!(RcParams::legacy().set(PROP_CYCLE, RcValue::Colors(Vec::new())).is_err());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut rc = RcParams::new();
        rc.xkcd().unwrap();
        assert_eq!(rc.sketch(), Some((1.0, 100.0, 2.0)));
        assert_eq!(rc.font_family(), Some("xkcd"));
        rc.reset();
        assert_eq!(rc, RcParams::new());
        assert_eq!(rc.sketch(), None);
    }

    #[test]
    fn test_plot_params_reads_grid_and_spine() {
        let mut registry = StyleRegistry::new();
        let grid = LineSpec::new(Broadcast::Scalar(Color::from("#A7A7A7")))
            .dash(DashPattern::Dashed)
            .width(1.5);
        make_line_styles(&mut registry, "ls", &"Grid".into(), "", &grid).unwrap();
        let spine = LineSpec::new(Broadcast::Scalar(Color::BLACK)).width(1.0);
        make_line_styles(&mut registry, "ls", &"Spine".into(), "", &spine).unwrap();

        let mut rc = RcParams::new();
        let params = PlotParams {
            tick_size: 4.0,
            ..PlotParams::default()
        };
        plot_params(&mut rc, &registry, &params).unwrap();

        assert_eq!(rc.color("grid.color"), Some(&Color::rgb(0xA7, 0xA7, 0xA7)));
        assert_eq!(rc.text("grid.linestyle"), Some("--"));
        assert_eq!(rc.number("grid.linewidth"), Some(1.5));
        assert_eq!(rc.number("axes.linewidth"), Some(1.0));
        assert_eq!(rc.number("xtick.major.size"), Some(4.0));
        assert!((rc.number("ytick.minor.size").unwrap() - 2.4).abs() < 1e-12);
        assert_eq!(rc.text("legend.fontsize"), Some("x-small"));
        assert_eq!(rc.flag("text.usetex"), Some(false));
    }

    #[test]
    fn test_plot_params_without_registry_styles_keeps_defaults() {
        let mut rc = RcParams::new();
        plot_params(&mut rc, &StyleRegistry::new(), &PlotParams::default()).unwrap();
        assert_eq!(rc.number("grid.linewidth"), Some(0.8));
        assert_eq!(rc.color("figure.facecolor"), Some(&Color::none()));
    }

    #[test]
    fn test_latex_preamble() {
        let mut rc = RcParams::new();
        let params = PlotParams {
            latex: true,
            preamble: Some(vec!["p:siunitx".to_string(), "\\sisetup{}".to_string()]),
            ..PlotParams::default()
        };
        plot_params(&mut rc, &StyleRegistry::new(), &params).unwrap();
        assert_eq!(rc.flag("text.latex.unicode"), Some(true));
        assert_eq!(
            rc.get("text.latex.preamble"),
            Some(&RcValue::Texts(vec![
                "\\usepackage{siunitx}".to_string(),
                "\\sisetup{}".to_string()
            ]))
        );
    }

    #[test]
    fn test_color_cycler_by_api() {
        let palette = crate::profile::palette::vivid();
        let names = vec!["blue".to_string(), "nope".to_string(), "red".to_string()];

        let mut modern = RcParams::new();
        color_cycler(&mut modern, &palette, &names).unwrap();
        assert_eq!(modern.color_cycle(), &[palette["blue"].clone(), palette["red"].clone()]);
        assert!(modern.get(COLOR_CYCLE).is_none());

        let mut legacy = RcParams::legacy();
        color_cycler(&mut legacy, &palette, &names).unwrap();
        assert_eq!(legacy.color_cycle().len(), 2);
        assert!(legacy.get(PROP_CYCLE).is_none());
    }

    #[test]
    fn test_font_size_points() {
        assert_eq!(FontSize::Points(9.0).points(10.0), 9.0);
        assert_eq!(FontSize::from("medium").points(10.0), 10.0);
        assert!((FontSize::from("small").points(12.0) - 9.996).abs() < 1e-9);
    }
}
