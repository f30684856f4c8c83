//! Arrow styles for annotating plots.

use std::fmt;
use std::str::FromStr;

use super::color::Color;
use crate::error::StyleError;

/// Shape of the arrow head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowHead {
    /// Plain line without a head (`-`)
    None,
    /// Open head drawn with two strokes (`>`)
    #[default]
    Line,
    /// Filled triangular head (`>>`)
    Filled,
}

impl FromStr for ArrowHead {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(ArrowHead::None),
            ">" | "->" => Ok(ArrowHead::Line),
            ">>" | "-|>" => Ok(ArrowHead::Filled),
            other => Err(StyleError::InvalidArrow(other.to_string())),
        }
    }
}

impl fmt::Display for ArrowHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArrowHead::None => "-",
            ArrowHead::Line => ">",
            ArrowHead::Filled => ">>",
        })
    }
}

/// Style configuration for arrows.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    /// Head shape
    pub head: ArrowHead,
    /// Arrow color, used for shaft and head
    pub color: Color,
    /// Shaft line width
    pub width: f64,
    /// Length of the head in points
    pub head_length: f64,
    /// Width of the head in points
    pub head_width: f64,
    /// Distance in points kept between the arrow and the annotated object
    pub dist: f64,
    /// Fraction of the arrow length removed at both ends
    pub shrink: f64,
}

impl ArrowStyle {
    /// SVG elements for an arrow from `(x0, y0)` to `(x1, y1)` in pixels.
    pub fn render(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> String {
        let (dx, dy) = (x1 - x0, y1 - y0);
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            return String::new();
        }
        let (ux, uy) = (dx / length, dy / length);
        let cut = (self.shrink * length).max(0.0) + self.dist;
        let (sx, sy) = (x0 + ux * cut, y0 + uy * cut);
        let (tx, ty) = (x1 - ux * cut, y1 - uy * cut);

        // base of the head and its two corners
        let (bx, by) = (tx - ux * self.head_length, ty - uy * self.head_length);
        let half = self.head_width / 2.0;
        let (lx, ly) = (bx - uy * half, by + ux * half);
        let (rx, ry) = (bx + uy * half, by - ux * half);

        let stroke = format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            self.color.to_svg_string(),
            self.width
        );
        match self.head {
            ArrowHead::None => format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
                sx, sy, tx, ty, stroke
            ),
            ArrowHead::Line => format!(
                "<path d=\"M{:.2},{:.2} L{:.2},{:.2} M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2}\" fill=\"none\" {}/>",
                sx, sy, tx, ty, lx, ly, tx, ty, rx, ry, stroke
            ),
            ArrowHead::Filled => format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/><path d=\"M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} Z\" fill=\"{}\" stroke=\"none\"/>",
                sx, sy, bx, by, stroke, tx, ty, lx, ly, rx, ry,
                self.color.to_svg_string()
            ),
        }
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle {
            head: ArrowHead::Line,
            color: Color::BLACK,
            width: 1.0,
            head_length: 8.0,
            head_width: 8.0,
            dist: 3.0,
            shrink: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_head_parse() {
        assert_eq!(">".parse::<ArrowHead>().unwrap(), ArrowHead::Line);
        assert_eq!(">>".parse::<ArrowHead>().unwrap(), ArrowHead::Filled);
        assert_eq!("-".parse::<ArrowHead>().unwrap(), ArrowHead::None);
        assert!("<>".parse::<ArrowHead>().is_err());
        assert_eq!(ArrowHead::Filled.to_string(), ">>");
    }

    #[test]
    fn test_render_filled_arrow() {
        let arrow = ArrowStyle {
            head: ArrowHead::Filled,
            dist: 0.0,
            ..Default::default()
        };
        let svg = arrow.render(0.0, 0.0, 100.0, 0.0);
        assert!(svg.contains("<line"));
        assert!(svg.contains(" Z\""));
        assert!(arrow.render(5.0, 5.0, 5.0, 5.0).is_empty());
    }
}
