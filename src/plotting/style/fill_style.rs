//! Fill styling options for shapes.

use super::color::Color;

/// Style configuration for filled shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    /// Fill color
    pub color: Color,
    /// Fill opacity (0.0 - 1.0)
    pub opacity: f64,
    /// Stroke/border color (None for no stroke)
    pub stroke: Option<Color>,
    /// Stroke width
    pub stroke_width: f64,
}

impl FillStyle {
    /// Create a new fill style with the given color.
    pub fn new(color: impl Into<Color>) -> Self {
        FillStyle {
            color: color.into(),
            ..Default::default()
        }
    }

    /// Set the fill opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the stroke color; `none` removes the stroke.
    pub fn stroke(mut self, color: impl Into<Color>) -> Self {
        let color = color.into();
        self.stroke = if color.is_none() { None } else { Some(color) };
        self
    }

    /// Set the stroke width.
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![format!("fill=\"{}\"", self.color.to_svg_string())];

        if self.opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.opacity));
        }

        match self.stroke {
            Some(ref stroke) if self.stroke_width > 0.0 => {
                attrs.push(format!("stroke=\"{}\"", stroke.to_svg_string()));
                attrs.push(format!("stroke-width=\"{}\"", self.stroke_width));
                if self.opacity < 1.0 {
                    attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
                }
            }
            _ => attrs.push("stroke=\"none\"".to_string()),
        }

        attrs.join(" ")
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle {
            color: Color::default(),
            opacity: 1.0,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_with_and_without_stroke() {
        let edged = FillStyle::new("#00FF00").stroke("black").stroke_width(0.5);
        let svg = edged.to_svg_style();
        assert!(svg.contains("stroke=\"#000000\""));
        assert!(svg.contains("stroke-width=\"0.5\""));

        let solid = FillStyle::new("#00FF00").stroke("none");
        assert!(solid.stroke.is_none());
        assert!(solid.to_svg_style().contains("stroke=\"none\""));

        let alpha = FillStyle::new("#00FF00").opacity(0.4);
        assert!(alpha.to_svg_style().contains("fill-opacity=\"0.4\""));
    }
}
