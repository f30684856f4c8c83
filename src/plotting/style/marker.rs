//! Marker shapes and the styles used to draw them.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::StyleError;

/// How a [`Marker::Regular`] shape is drawn from its vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonKind {
    /// Filled regular polygon
    Polygon,
    /// Star with `sides` points
    Star,
    /// Spokes from the center, no fill
    Asterisk,
}

impl PolygonKind {
    fn code(self) -> u32 {
        match self {
            PolygonKind::Polygon => 0,
            PolygonKind::Star => 1,
            PolygonKind::Asterisk => 2,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(PolygonKind::Polygon),
            1 => Some(PolygonKind::Star),
            2 => Some(PolygonKind::Asterisk),
            _ => None,
        }
    }
}

/// Marker shapes for data points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "MarkerRepr", into = "MarkerRepr")]
pub enum Marker {
    /// No marker
    #[default]
    None,
    /// Circle marker (`o`)
    Circle,
    /// Square marker (`s`)
    Square,
    /// Upward-pointing triangle (`^`)
    Triangle,
    /// Downward-pointing triangle (`v`)
    TriangleDown,
    /// Diamond marker (`D`)
    Diamond,
    /// Plus sign (`+`)
    Plus,
    /// X/Cross marker (`x`)
    Cross,
    /// Five pointed star (`*`)
    Star,
    /// Pentagon marker (`p`)
    Pentagon,
    /// Hexagon marker (`h`)
    Hexagon,
    /// Regular shape given as (number of sides, kind, rotation in degrees)
    Regular {
        sides: u32,
        kind: PolygonKind,
        angle: f64,
    },
}

impl Marker {
    /// Parse from a single-character marker symbol.
    pub fn from_format_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::Triangle),
            'v' => Some(Marker::TriangleDown),
            'D' | 'd' => Some(Marker::Diamond),
            '+' => Some(Marker::Plus),
            'x' | 'X' => Some(Marker::Cross),
            '*' => Some(Marker::Star),
            'p' => Some(Marker::Pentagon),
            'h' | 'H' => Some(Marker::Hexagon),
            _ => None,
        }
    }

    /// Parse a marker symbol string; `none` and the empty string mean no marker.
    pub fn from_symbol(s: &str) -> Result<Self, StyleError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Marker::None),
            (Some(c), None) => {
                Marker::from_format_char(c).ok_or_else(|| StyleError::InvalidMarker(s.to_string()))
            }
            _ if s.eq_ignore_ascii_case("none") => Ok(Marker::None),
            _ => Err(StyleError::InvalidMarker(s.to_string())),
        }
    }

    /// Regular polygon, star or asterisk marker.
    pub fn regular(sides: u32, kind: PolygonKind, angle: f64) -> Self {
        Marker::Regular { sides, kind, angle }
    }

    /// Generate SVG path data for the marker centered at origin.
    /// The size parameter is the radius (half the marker size).
    pub fn to_svg_path(&self, size: f64) -> Option<String> {
        match self {
            Marker::None => None,
            Marker::Circle => None, // Use <circle> element instead
            Marker::Square => {
                let s = size * 0.8;
                Some(format!("M{},{} L{},{} L{},{} L{},{} Z", -s, -s, s, -s, s, s, -s, s))
            }
            Marker::Triangle => Some(closed_path(&ring(3, size, 0.0))),
            Marker::TriangleDown => Some(closed_path(&ring(3, size, PI))),
            Marker::Diamond => {
                let s = size;
                Some(format!("M0,{} L{},0 L0,{} L{},0 Z", -s, s * 0.7, s, -s * 0.7))
            }
            Marker::Plus => {
                let s = size;
                Some(format!("M{},0 L{},0 M0,{} L0,{}", -s, s, -s, s))
            }
            Marker::Cross => {
                let s = size * 0.707; // 1/sqrt(2)
                Some(format!(
                    "M{:.2},{:.2} L{:.2},{:.2} M{:.2},{:.2} L{:.2},{:.2}",
                    -s, -s, s, s, -s, s, s, -s
                ))
            }
            Marker::Star => Some(closed_path(&star(5, size, 0.381966, 0.0))),
            Marker::Pentagon => Some(closed_path(&ring(5, size, 0.0))),
            Marker::Hexagon => Some(closed_path(&ring(6, size, 0.0))),
            Marker::Regular { sides, kind, angle } => {
                let sides = (*sides).max(2);
                // rotation is counterclockwise, SVG y points down
                let offset = -angle.to_radians();
                match kind {
                    PolygonKind::Polygon => Some(closed_path(&ring(sides, size, offset))),
                    PolygonKind::Star => Some(closed_path(&star(sides, size, 0.381966, offset))),
                    PolygonKind::Asterisk => {
                        let spokes = ring(sides, size, offset)
                            .iter()
                            .map(|(x, y)| format!("M0,0 L{:.2},{:.2}", x, y))
                            .collect::<Vec<_>>();
                        Some(spokes.join(" "))
                    }
                }
            }
        }
    }

    /// Check if this marker should be rendered as a circle element.
    pub fn is_circle(&self) -> bool {
        matches!(self, Marker::Circle)
    }

    /// Markers drawn as strokes only; their face color is not filled.
    pub fn is_unfilled(&self) -> bool {
        matches!(
            self,
            Marker::Plus
                | Marker::Cross
                | Marker::Regular {
                    kind: PolygonKind::Asterisk,
                    ..
                }
        )
    }

    fn symbol(&self) -> Option<&'static str> {
        match self {
            Marker::None => Some("none"),
            Marker::Circle => Some("o"),
            Marker::Square => Some("s"),
            Marker::Triangle => Some("^"),
            Marker::TriangleDown => Some("v"),
            Marker::Diamond => Some("D"),
            Marker::Plus => Some("+"),
            Marker::Cross => Some("x"),
            Marker::Star => Some("*"),
            Marker::Pentagon => Some("p"),
            Marker::Hexagon => Some("h"),
            Marker::Regular { .. } => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Regular { sides, kind, angle } => {
                write!(f, "({}, {}, {})", sides, kind.code(), angle)
            }
            other => f.write_str(other.symbol().unwrap_or_default()),
        }
    }
}

/// Vertices of a regular polygon with the first vertex pointing up.
fn ring(n: u32, r: f64, offset: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * (i as f64) / (n as f64) - FRAC_PI_2 + offset;
            (r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Vertices of a star alternating between outer and inner radius.
fn star(n: u32, r: f64, inner: f64, offset: f64) -> Vec<(f64, f64)> {
    (0..2 * n)
        .map(|i| {
            let radius = if i % 2 == 0 { r } else { r * inner };
            let angle = PI * (i as f64) / (n as f64) - FRAC_PI_2 + offset;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn closed_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            path.push_str(&format!("M{:.2},{:.2}", x, y));
        } else {
            path.push_str(&format!(" L{:.2},{:.2}", x, y));
        }
    }
    path.push_str(" Z");
    path
}

/// Serialized form of a marker: a symbol string or a `[sides, kind, angle]` triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum MarkerRepr {
    Symbol(String),
    Regular(u32, u32, f64),
}

impl TryFrom<MarkerRepr> for Marker {
    type Error = StyleError;

    fn try_from(repr: MarkerRepr) -> Result<Self, Self::Error> {
        match repr {
            MarkerRepr::Symbol(s) => Marker::from_symbol(&s),
            MarkerRepr::Regular(sides, code, angle) => {
                let kind = PolygonKind::from_code(code).ok_or_else(|| {
                    StyleError::InvalidMarker(format!("({}, {}, {})", sides, code, angle))
                })?;
                Ok(Marker::Regular { sides, kind, angle })
            }
        }
    }
}

impl From<Marker> for MarkerRepr {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Regular { sides, kind, angle } => MarkerRepr::Regular(sides, kind.code(), angle),
            other => MarkerRepr::Symbol(other.symbol().unwrap_or_default().to_string()),
        }
    }
}

/// A marker shape together with the factor its size is scaled by.
///
/// Shapes with little area (stars, triangles) get factors above 1 so all
/// markers of a style table look equally heavy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub marker: Marker,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl MarkerSpec {
    pub fn new(marker: Marker, scale: f64) -> Self {
        MarkerSpec { marker, scale }
    }

    /// Plain circle with scale 1, used for circular and minor variants.
    pub fn circle() -> Self {
        MarkerSpec::new(Marker::Circle, 1.0)
    }
}

/// Style configuration for markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    /// The marker shape
    pub marker: Marker,
    /// Marker size (diameter in points)
    pub size: f64,
    /// Fill color
    pub fill: Color,
    /// Edge/stroke color
    pub edge_color: Color,
    /// Edge/stroke width
    pub edge_width: f64,
    /// Fill opacity
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Create a new marker style.
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    /// Set the marker size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the fill color.
    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = color.into();
        self
    }

    /// Set the edge color.
    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = color.into();
        self
    }

    /// Set the edge width.
    pub fn edge_width(mut self, width: f64) -> Self {
        self.edge_width = width;
        self
    }

    /// Set the fill opacity.
    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let fill = if self.marker.is_unfilled() {
            "none".to_string()
        } else {
            self.fill.to_svg_string()
        };
        // unfilled markers are drawn in their face color
        let stroke = if self.marker.is_unfilled() {
            &self.fill
        } else {
            &self.edge_color
        };
        let mut attrs = vec![
            format!("fill=\"{}\"", fill),
            format!("stroke=\"{}\"", stroke.to_svg_string()),
            format!("stroke-width=\"{}\"", self.edge_width),
        ];

        if self.fill_opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.fill_opacity));
            attrs.push(format!("stroke-opacity=\"{}\"", self.fill_opacity));
        }

        attrs.join(" ")
    }

    /// Render the marker at a specific position, returning SVG elements.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let style = self.to_svg_style();
        let radius = self.size / 2.0;

        if self.marker.is_circle() {
            format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
                x, y, radius, style
            )
        } else if let Some(path) = self.marker.to_svg_path(radius) {
            format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>",
                path, x, y, style
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
            fill_opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_symbols() {
        assert_eq!(Marker::from_symbol("o").unwrap(), Marker::Circle);
        assert_eq!(Marker::from_symbol("D").unwrap(), Marker::Diamond);
        assert_eq!(Marker::from_symbol("none").unwrap(), Marker::None);
        assert!(Marker::from_symbol("Q").is_err());
        assert!(Marker::from_symbol("oo").is_err());
    }

    #[test]
    fn test_marker_spec_from_json() {
        let specs: Vec<MarkerSpec> = serde_json::from_str(
            r#"[{"marker": "p", "scale": 1.1}, {"marker": [3, 1, 60], "scale": 1.25}, {"marker": "o"}]"#,
        )
        .unwrap();
        assert_eq!(specs[0], MarkerSpec::new(Marker::Pentagon, 1.1));
        assert_eq!(
            specs[1].marker,
            Marker::regular(3, PolygonKind::Star, 60.0)
        );
        assert_eq!(specs[2], MarkerSpec::circle());

        let bad: Result<Marker, _> = serde_json::from_str("[4, 7, 0]");
        assert!(bad.is_err());
    }

    #[test]
    fn test_regular_star_path() {
        let marker = Marker::regular(4, PolygonKind::Star, 45.0);
        let path = marker.to_svg_path(5.0).unwrap();
        // 8 vertices, closed
        assert_eq!(path.matches('L').count(), 7);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_render_circle_and_path() {
        let circle = MarkerStyle::new(Marker::Circle).size(10.0).fill("red");
        assert!(circle.render_at(1.0, 2.0).starts_with("<circle"));
        assert!(circle.render_at(1.0, 2.0).contains("r=\"5.00\""));

        let hexagon = MarkerStyle::new(Marker::Hexagon);
        assert!(hexagon.render_at(0.0, 0.0).starts_with("<path"));
        assert!(MarkerStyle::new(Marker::None).render_at(0.0, 0.0).is_empty());
    }
}
