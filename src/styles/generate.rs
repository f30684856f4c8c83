//! Expansion of attribute tables into line, point, line-point, fill and
//! arrow style records.
//!
//! Every generator computes the number of styles `n` from its sequence
//! arguments, validates all of them against `n` and only then writes into
//! the registry, so a failing call leaves the registry as it was.

use log::debug;

use super::broadcast::{style_count, Broadcast, StyleNames};
use super::record::{attr, AttrValue, StyleRecord};
use super::registry::{StyleRegistry, ARROW, FILL, LINE, LINE_POINT, POINT};
use crate::error::StyleResult;
use crate::plotting::style::{ArrowStyle, Color, DashPattern, MarkerSpec};

/// Attributes of line styles.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub colors: Broadcast<Color>,
    pub dashes: Broadcast<DashPattern>,
    pub widths: Broadcast<f64>,
    /// Further attributes appended to every record, e.g. alpha or zorder
    pub extra: StyleRecord,
}

impl LineSpec {
    /// Solid lines of width 1 in the given colors.
    pub fn new(colors: Broadcast<Color>) -> Self {
        LineSpec {
            colors,
            dashes: Broadcast::Scalar(DashPattern::Solid),
            widths: Broadcast::Scalar(1.0),
            extra: StyleRecord::new(),
        }
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dashes = Broadcast::Scalar(dash);
        self
    }

    pub fn dashes(mut self, dashes: Vec<DashPattern>) -> Self {
        self.dashes = Broadcast::PerStyle(dashes);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.widths = Broadcast::Scalar(width);
        self
    }

    pub fn widths(mut self, widths: Vec<f64>) -> Self {
        self.widths = Broadcast::PerStyle(widths);
        self
    }

    pub fn extra(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.extra = self.extra.with(key, value);
        self
    }

    fn lengths(&self) -> [Option<usize>; 3] {
        [self.colors.len(), self.dashes.len(), self.widths.len()]
    }

    fn check(&self, n: usize) -> StyleResult<()> {
        self.colors.check("colors", n, false)?;
        self.dashes.check("dashes", n, false)?;
        self.widths.check("widths", n, false)
    }

    fn record(&self, k: usize) -> StyleRecord {
        StyleRecord::new()
            .with(attr::COLOR, self.colors.get(k).clone())
            .with(attr::LINESTYLE, self.dashes.get(k).clone())
            .with(attr::LINEWIDTH, *self.widths.get(k))
    }
}

/// Attributes of point and line-point styles.
///
/// The line part gives color, dash and width of the connecting line.
/// Edge colors are lightening factors applied to the face color.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSpec {
    pub line: LineSpec,
    /// Marker shapes; a single marker applies to every style
    pub markers: Broadcast<MarkerSpec>,
    pub marker_sizes: Broadcast<f64>,
    pub edge_factors: Broadcast<f64>,
    pub edge_widths: Broadcast<f64>,
}

impl PointSpec {
    /// Unconnected circles of size 5 with white edges.
    pub fn new(colors: Broadcast<Color>) -> Self {
        PointSpec {
            line: LineSpec::new(colors).dash(DashPattern::None).width(0.0),
            markers: Broadcast::Scalar(MarkerSpec::circle()),
            marker_sizes: Broadcast::Scalar(5.0),
            edge_factors: Broadcast::Scalar(0.0),
            edge_widths: Broadcast::Scalar(1.0),
        }
    }

    /// Use `line` for color, dash, width and extra attributes.
    pub fn with_line(mut self, line: LineSpec) -> Self {
        self.line = line;
        self
    }

    pub fn marker(mut self, marker: MarkerSpec) -> Self {
        self.markers = Broadcast::Scalar(marker);
        self
    }

    pub fn markers(mut self, markers: Vec<MarkerSpec>) -> Self {
        self.markers = Broadcast::PerStyle(markers);
        self
    }

    pub fn marker_size(mut self, size: f64) -> Self {
        self.marker_sizes = Broadcast::Scalar(size);
        self
    }

    pub fn marker_sizes(mut self, sizes: Vec<f64>) -> Self {
        self.marker_sizes = Broadcast::PerStyle(sizes);
        self
    }

    pub fn edge_factor(mut self, factor: f64) -> Self {
        self.edge_factors = Broadcast::Scalar(factor);
        self
    }

    pub fn edge_factors(mut self, factors: Vec<f64>) -> Self {
        self.edge_factors = Broadcast::PerStyle(factors);
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_widths = Broadcast::Scalar(width);
        self
    }

    pub fn edge_widths(mut self, widths: Vec<f64>) -> Self {
        self.edge_widths = Broadcast::PerStyle(widths);
        self
    }

    fn lengths(&self) -> Vec<Option<usize>> {
        let mut lengths = self.line.lengths().to_vec();
        lengths.extend([
            self.markers.len(),
            self.marker_sizes.len(),
            self.edge_factors.len(),
            self.edge_widths.len(),
        ]);
        lengths
    }

    fn check(&self, n: usize) -> StyleResult<()> {
        self.line.check(n)?;
        self.markers.check("markers", n, true)?;
        self.marker_sizes.check("marker_sizes", n, false)?;
        self.edge_factors.check("edge_factors", n, false)?;
        self.edge_widths.check("edge_widths", n, false)
    }

    fn record(&self, k: usize) -> StyleRecord {
        let color = self.line.colors.get(k);
        let marker = self.markers.get(k);
        self.line
            .record(k)
            .with(attr::MARKER, marker.marker.clone())
            .with(attr::MARKERSIZE, marker.scale * self.marker_sizes.get(k))
            .with(attr::MARKEREDGECOLOR, color.lighter(*self.edge_factors.get(k)))
            .with(attr::MARKEREDGEWIDTH, *self.edge_widths.get(k))
    }
}

/// Attributes of fill styles.
#[derive(Debug, Clone, PartialEq)]
pub struct FillSpec {
    pub colors: Broadcast<Color>,
    /// Lightening factors for the edge of the first variant
    pub edge_factors: Broadcast<f64>,
    /// Edge widths of the first variant
    pub edge_widths: Broadcast<f64>,
    /// Opacity of the transparent variant
    pub alphas: Broadcast<f64>,
    pub extra: StyleRecord,
}

impl FillSpec {
    pub fn new(colors: Broadcast<Color>) -> Self {
        FillSpec {
            colors,
            edge_factors: Broadcast::Scalar(2.0),
            edge_widths: Broadcast::Scalar(0.5),
            alphas: Broadcast::Scalar(0.4),
            extra: StyleRecord::new(),
        }
    }

    pub fn edge_factor(mut self, factor: f64) -> Self {
        self.edge_factors = Broadcast::Scalar(factor);
        self
    }

    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_widths = Broadcast::Scalar(width);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alphas = Broadcast::Scalar(alpha);
        self
    }

    pub fn alphas(mut self, alphas: Vec<f64>) -> Self {
        self.alphas = Broadcast::PerStyle(alphas);
        self
    }

    pub fn extra(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.extra = self.extra.with(key, value);
        self
    }
}

/// Resolve all style names up front so template errors surface before
/// anything is written.
fn resolve_names(names: &StyleNames, n: usize) -> StyleResult<Vec<String>> {
    names.check(n)?;
    (0..n).map(|k| names.name(k)).collect()
}

/// Generate line styles `prefix + name + suffix`.
///
/// `make_line_styles(&mut reg, "ls", &"Male".into(), "", &LineSpec::new(...).width(2.0))`
/// stores `{color, linestyle, linewidth}` as `lsMale` and under `Male` in
/// category `ls`.
pub fn make_line_styles(
    registry: &mut StyleRegistry,
    prefix: &str,
    names: &StyleNames,
    suffix: &str,
    spec: &LineSpec,
) -> StyleResult<()> {
    let mut lengths = spec.lengths().to_vec();
    lengths.push(names.len());
    let n = style_count(lengths);
    spec.check(n)?;
    let resolved = resolve_names(names, n)?;

    registry.ensure_category(&format!("{}{}", prefix, suffix));
    for (k, name) in resolved.iter().enumerate() {
        let record = spec.record(k).merged(&spec.extra);
        registry.insert(prefix, name, suffix, record);
    }
    debug!("Generated {} line styles {}*{}", n, prefix, suffix);
    Ok(())
}

/// Generate point styles: line attributes plus marker, marker size,
/// marker edge color and marker edge width.
///
/// The stored marker size is the marker's scale times the marker size.
pub fn make_point_styles(
    registry: &mut StyleRegistry,
    prefix: &str,
    names: &StyleNames,
    suffix: &str,
    spec: &PointSpec,
) -> StyleResult<()> {
    let mut lengths = spec.lengths();
    lengths.push(names.len());
    let n = style_count(lengths);
    spec.check(n)?;
    let resolved = resolve_names(names, n)?;

    registry.ensure_category(&format!("{}{}", prefix, suffix));
    for (k, name) in resolved.iter().enumerate() {
        let record = spec.record(k).merged(&spec.line.extra);
        registry.insert(prefix, name, suffix, record);
    }
    debug!("Generated {} point styles {}*{}", n, prefix, suffix);
    Ok(())
}

/// Generate line, point and line-point styles from one table.
///
/// `prefixes` name the line-only styles, the markers-only styles (dash
/// `none`, width 0) and the markers-with-line styles. `None` skips that
/// kind.
pub fn make_line_point_styles(
    registry: &mut StyleRegistry,
    prefixes: [Option<&str>; 3],
    names: &StyleNames,
    suffix: &str,
    spec: &PointSpec,
) -> StyleResult<()> {
    // validate once so no kind is written when another would fail
    let mut lengths = spec.lengths();
    lengths.push(names.len());
    let n = style_count(lengths);
    spec.check(n)?;
    resolve_names(names, n)?;

    if let Some(prefix) = prefixes[0] {
        make_line_styles(registry, prefix, names, suffix, &spec.line)?;
    }
    if let Some(prefix) = prefixes[1] {
        let mut points = spec.clone();
        points.line = points.line.dash(DashPattern::None).width(0.0);
        make_point_styles(registry, prefix, names, suffix, &points)?;
    }
    if let Some(prefix) = prefixes[2] {
        make_point_styles(registry, prefix, names, suffix, spec)?;
    }
    Ok(())
}

/// Generate fill styles with up to three variants, selected by `suffixes`:
/// with an edge of lightened face color, solid without edge, and
/// transparent without edge.
pub fn make_fill_styles(
    registry: &mut StyleRegistry,
    prefix: &str,
    names: &StyleNames,
    suffixes: [Option<&str>; 3],
    spec: &FillSpec,
) -> StyleResult<()> {
    let n = style_count([
        names.len(),
        spec.colors.len(),
        spec.edge_factors.len(),
        spec.edge_widths.len(),
        spec.alphas.len(),
    ]);
    spec.colors.check("colors", n, false)?;
    spec.edge_factors.check("edge_factors", n, false)?;
    spec.edge_widths.check("edge_widths", n, false)?;
    spec.alphas.check("alphas", n, false)?;
    let resolved = resolve_names(names, n)?;

    for suffix in suffixes.iter().flatten() {
        registry.ensure_category(&format!("{}{}", prefix, suffix));
    }
    for (k, name) in resolved.iter().enumerate() {
        registry.add_name(name);
        let face = spec.colors.get(k);
        for (variant, suffix) in suffixes.iter().enumerate() {
            let Some(suffix) = suffix else {
                continue;
            };
            let record = StyleRecord::new().with(attr::FACECOLOR, face.clone());
            let record = match variant {
                0 => record
                    .with(attr::EDGECOLOR, face.lighter(*spec.edge_factors.get(k)))
                    .with(attr::LINEWIDTH, *spec.edge_widths.get(k)),
                1 => record.with(attr::EDGECOLOR, Color::none()),
                _ => record
                    .with(attr::EDGECOLOR, Color::none())
                    .with(attr::ALPHA, *spec.alphas.get(k)),
            };
            registry.insert(prefix, name, suffix, record.merged(&spec.extra));
        }
    }
    debug!("Generated {} fill styles {}*", n, prefix);
    Ok(())
}

/// Widths, sizes and edge settings shared by all styles of [`plot_styles`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyleParams {
    pub lw_thick: f64,
    pub lw_thin: f64,
    pub marker_large: f64,
    pub marker_small: f64,
    /// Lightening factor of marker and fill edges
    pub edge_factor: f64,
    /// Width of marker and fill edges
    pub edge_width: f64,
    pub fill_alpha: f64,
}

impl Default for PlotStyleParams {
    fn default() -> Self {
        PlotStyleParams {
            lw_thick: 2.0,
            lw_thin: 1.0,
            marker_large: 7.5,
            marker_small: 5.5,
            edge_factor: 0.5,
            edge_width: 1.0,
            fill_alpha: 0.4,
        }
    }
}

/// Generate the full family of styles for a semantic palette.
///
/// For every name this produces the major styles `ls`, `ps`, `lps`, the
/// circular variants `psc`, `lpsc`, the minor styles `lsm`, `psm`, `lpsm`
/// and the fill styles `fs`, `fss`, `fsa`.
pub fn plot_styles(
    registry: &mut StyleRegistry,
    names: &StyleNames,
    colors: Broadcast<Color>,
    dashes: Broadcast<DashPattern>,
    markers: Broadcast<MarkerSpec>,
    params: &PlotStyleParams,
) -> StyleResult<()> {
    let thick = LineSpec {
        colors: colors.clone(),
        dashes: dashes.clone(),
        widths: Broadcast::Scalar(params.lw_thick),
        extra: StyleRecord::new(),
    };
    let thin = LineSpec {
        widths: Broadcast::Scalar(params.lw_thin),
        ..thick.clone()
    };
    let major = PointSpec {
        line: thick,
        markers,
        marker_sizes: Broadcast::Scalar(params.marker_large),
        edge_factors: Broadcast::Scalar(params.edge_factor),
        edge_widths: Broadcast::Scalar(params.edge_width),
    };
    let circular = major.clone().marker(MarkerSpec::circle());
    let minor = circular
        .clone()
        .with_line(thin)
        .marker_size(params.marker_small);
    let fill = FillSpec::new(colors)
        .edge_factor(params.edge_factor)
        .edge_width(params.edge_width)
        .alpha(params.fill_alpha);

    // check every table before the first write
    let n = style_count(major.lengths().into_iter().chain([names.len()]));
    major.check(n)?;
    fill.colors.check("colors", n, false)?;
    resolve_names(names, n)?;

    let kinds = [Some(LINE), Some(POINT), Some(LINE_POINT)];
    make_line_point_styles(registry, kinds, names, "", &major)?;
    make_line_point_styles(registry, [None, Some(POINT), Some(LINE_POINT)], names, "c", &circular)?;
    make_line_point_styles(registry, kinds, names, "m", &minor)?;
    make_fill_styles(registry, FILL, names, [Some(""), Some("s"), Some("a")], &fill)
}

/// Register an arrow style under `name` in category `as`.
pub fn make_arrow_style(registry: &mut StyleRegistry, name: &str, style: &ArrowStyle) {
    let record = StyleRecord::new()
        .with(attr::ARROWSTYLE, style.head.to_string().as_str())
        .with(attr::DIST, style.dist)
        .with(attr::SHRINK, style.shrink)
        .with(attr::LINEWIDTH, style.width)
        .with(attr::COLOR, style.color.clone())
        .with(attr::HEAD_LENGTH, style.head_length)
        .with(attr::HEAD_WIDTH, style.head_width);
    registry.insert(ARROW, name, "", record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::plotting::style::{ArrowHead, Marker};

    fn blue() -> Broadcast<Color> {
        Broadcast::Scalar(Color::from("blue"))
    }

    #[test]
    fn test_male_line_style_end_to_end() {
        let mut registry = StyleRegistry::new();
        let spec = LineSpec::new(blue()).dash(DashPattern::Solid).width(2.0);
        make_line_styles(&mut registry, "ls", &"Male".into(), "", &spec).unwrap();
        make_point_styles(&mut registry, "ps", &"Male".into(), "", &PointSpec::new(blue()))
            .unwrap();

        let expected = StyleRecord::new()
            .with(attr::COLOR, Color::from("blue"))
            .with(attr::LINESTYLE, DashPattern::Solid)
            .with(attr::LINEWIDTH, 2.0);
        assert_eq!(registry.get("lsMale"), Some(&expected));
        assert_eq!(registry.lookup("ls", "Male"), Some(&expected));
        assert_eq!(registry.style_names().collect::<Vec<_>>(), vec!["Male"]);
        assert!(registry.get("psMale").is_some());
    }

    #[test]
    fn test_scalars_generate_one_record() {
        let mut registry = StyleRegistry::new();
        let spec = PointSpec::new(blue()).marker_size(6.0);
        make_point_styles(&mut registry, "ps", &"X".into(), "", &spec).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_sequence_sets_style_count() {
        let mut registry = StyleRegistry::new();
        let spec = LineSpec::new(blue())
            .widths(vec![1.0, 2.0, 3.0])
            .extra(attr::ZORDER, 5.0);
        make_line_styles(&mut registry, "ls", &"Reds%d".into(), "", &spec).unwrap();

        assert_eq!(
            registry.style_names().collect::<Vec<_>>(),
            vec!["Reds1", "Reds2", "Reds3"]
        );
        for (k, name) in ["lsReds1", "lsReds2", "lsReds3"].iter().enumerate() {
            let record = registry.get(name).unwrap();
            assert_eq!(record.color(attr::COLOR), Some(&Color::from("blue")));
            assert_eq!(record.number(attr::LINEWIDTH), Some(k as f64 + 1.0));
            assert_eq!(record.number(attr::ZORDER), Some(5.0));
        }
    }

    #[test]
    fn test_edge_factor_bounds() {
        let face = Color::rgb(32, 96, 168);
        let edge = |factor: f64| {
            let mut registry = StyleRegistry::new();
            let spec = PointSpec::new(Broadcast::Scalar(face.clone())).edge_factor(factor);
            make_point_styles(&mut registry, "ps", &"E".into(), "", &spec).unwrap();
            registry
                .get("psE")
                .and_then(|r| r.color(attr::MARKEREDGECOLOR).cloned())
                .unwrap()
        };
        assert_eq!(edge(0.0), face.lighter(0.0));
        assert_eq!(edge(0.0), Color::WHITE);
        assert_eq!(edge(1.0), face);
        assert_eq!(edge(2.0), face.darker(0.0));
        assert_eq!(edge(2.0), Color::BLACK);
    }

    #[test]
    fn test_single_marker_applies_to_all_styles() {
        let mut registry = StyleRegistry::new();
        let spec = PointSpec::new(Broadcast::PerStyle(vec![Color::RED, Color::BLUE]))
            .markers(vec![MarkerSpec::new(Marker::Square, 2.0)])
            .marker_size(4.0);
        make_point_styles(&mut registry, "ps", &vec!["R", "B"].into(), "", &spec).unwrap();
        for name in ["psR", "psB"] {
            let record = registry.get(name).unwrap();
            assert_eq!(record.marker(), Some(&Marker::Square));
            assert_eq!(record.number(attr::MARKERSIZE), Some(8.0));
        }
    }

    #[test]
    fn test_length_mismatch_leaves_registry_untouched() {
        let mut registry = StyleRegistry::new();
        let spec = LineSpec::new(Broadcast::PerStyle(vec![Color::RED, Color::BLUE]))
            .widths(vec![1.0, 2.0, 3.0]);
        let err = make_line_styles(&mut registry, "ls", &"L%d".into(), "", &spec).unwrap_err();
        assert!(matches!(
            err,
            StyleError::LengthMismatch {
                attribute: "colors",
                expected: 3,
                found: 2
            }
        ));
        assert!(registry.is_empty());
        assert_eq!(registry.style_names().count(), 0);
        assert_eq!(registry.categories().count(), 0);
    }

    #[test]
    fn test_invalid_template_rejected() {
        let mut registry = StyleRegistry::new();
        let spec = LineSpec::new(blue());
        let err = make_line_styles(&mut registry, "ls", &"L%q".into(), "", &spec).unwrap_err();
        assert!(matches!(err, StyleError::InvalidTemplate(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_line_point_variants() {
        let mut registry = StyleRegistry::new();
        let spec = PointSpec::new(blue())
            .with_line(LineSpec::new(blue()).dash(DashPattern::Dashed).width(2.0))
            .marker(MarkerSpec::new(Marker::Diamond, 1.0));
        make_line_point_styles(
            &mut registry,
            [None, Some("ps"), Some("lps")],
            &"D".into(),
            "c",
            &spec,
        )
        .unwrap();

        assert!(registry.category("ls").is_none());
        let points = registry.get("psDc").unwrap();
        assert_eq!(points.dash(), Some(&DashPattern::None));
        assert_eq!(points.number(attr::LINEWIDTH), Some(0.0));
        let connected = registry.get("lpsDc").unwrap();
        assert_eq!(connected.dash(), Some(&DashPattern::Dashed));
        assert_eq!(connected.number(attr::LINEWIDTH), Some(2.0));
        assert_eq!(connected.marker(), Some(&Marker::Diamond));
    }

    #[test]
    fn test_fill_variants_differ_only_in_edge() {
        let mut registry = StyleRegistry::new();
        let spec = FillSpec::new(blue()).edge_factor(2.0).edge_width(0.5).alpha(0.4);
        make_fill_styles(
            &mut registry,
            "fs",
            &"PSD".into(),
            [Some(""), Some("s"), Some("a")],
            &spec,
        )
        .unwrap();

        let edged = registry.get("fsPSD").unwrap();
        let solid = registry.get("fsPSDs").unwrap();
        let transparent = registry.get("fsPSDa").unwrap();
        for record in [edged, solid, transparent] {
            assert_eq!(record.color(attr::FACECOLOR), Some(&Color::from("blue")));
            assert!(record.marker().is_none());
            assert!(record.dash().is_none());
        }
        assert_eq!(edged.color(attr::EDGECOLOR), Some(&Color::BLACK));
        assert_eq!(edged.number(attr::LINEWIDTH), Some(0.5));
        assert!(edged.number(attr::ALPHA).is_none());
        assert_eq!(solid.color(attr::EDGECOLOR), Some(&Color::none()));
        assert_eq!(solid.len(), 2);
        assert_eq!(transparent.color(attr::EDGECOLOR), Some(&Color::none()));
        assert_eq!(transparent.number(attr::ALPHA), Some(0.4));
        assert_eq!(registry.style_names().collect::<Vec<_>>(), vec!["PSD"]);
    }

    #[test]
    fn test_fill_without_variants_still_names_styles() {
        let mut registry = StyleRegistry::new();
        let spec = FillSpec::new(Broadcast::PerStyle(vec![Color::RED, Color::BLUE]));
        make_fill_styles(&mut registry, "fs", &"F%d".into(), [None, None, None], &spec).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.style_names().collect::<Vec<_>>(), vec!["F1", "F2"]);
        assert_eq!(registry.categories().count(), 0);
    }

    #[test]
    fn test_plot_styles_categories() {
        let mut registry = StyleRegistry::new();
        plot_styles(
            &mut registry,
            &vec!["A1", "B1"].into(),
            Broadcast::PerStyle(vec![Color::RED, Color::BLUE]),
            Broadcast::Scalar(DashPattern::Solid),
            Broadcast::PerStyle(vec![
                MarkerSpec::new(Marker::Square, 0.9),
                MarkerSpec::new(Marker::Star, 1.6),
            ]),
            &PlotStyleParams::default(),
        )
        .unwrap();

        let categories: Vec<&str> = registry.categories().collect();
        assert_eq!(
            categories,
            vec!["ls", "ps", "lps", "psc", "lpsc", "lsm", "psm", "lpsm", "fs", "fss", "fsa"]
        );
        assert_eq!(registry.len(), 22);
        assert_eq!(registry.get("psB1").and_then(|r| r.marker()), Some(&Marker::Star));
        assert_eq!(registry.get("psB1c").and_then(|r| r.marker()), Some(&Marker::Circle));
        let minor = registry.get("lpsA1m").unwrap();
        assert_eq!(minor.number(attr::LINEWIDTH), Some(1.0));
        assert_eq!(minor.number(attr::MARKERSIZE), Some(5.5));
    }

    #[test]
    fn test_arrow_style_record() {
        let mut registry = StyleRegistry::new();
        let style = ArrowStyle {
            head: ArrowHead::Filled,
            head_length: 10.0,
            head_width: 6.0,
            ..ArrowStyle::default()
        };
        make_arrow_style(&mut registry, "Filled", &style);
        let record = registry.get("asFilled").unwrap();
        assert_eq!(record.text(attr::ARROWSTYLE), Some(">>"));
        assert_eq!(record.to_arrow_style(), Some(style));
    }
}
