//! SVG rendering backend.

use crate::plotting::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle};

/// SVG rendering backend.
#[derive(Debug)]
pub struct SvgBackend {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    /// SVG content accumulated during rendering
    content: Vec<String>,
    /// SVG defs section (filters)
    defs: Vec<String>,
    /// Whether to include XML declaration
    include_declaration: bool,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            defs: Vec::new(),
            include_declaration: true,
        }
    }

    /// Set whether to include XML declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Add raw SVG content.
    pub fn add_content(&mut self, content: String) {
        if !content.is_empty() {
            self.content.push(content);
        }
    }

    /// Add content to the defs section.
    pub fn add_def(&mut self, def: String) {
        self.defs.push(def);
    }

    /// Fill the whole canvas, skipped for `none`.
    pub fn draw_background(&mut self, color: &Color) {
        if color.is_none() {
            return;
        }
        self.content.push(format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            color.to_svg_string()
        ));
    }

    /// Draw a polyline; invisible styles draw nothing.
    pub fn draw_polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        if points.is_empty() || !style.is_visible() {
            return;
        }

        self.content.push(format!(
            "<polyline points=\"{}\" {}/>",
            points_attr(points),
            style.to_svg_style()
        ));
    }

    /// Draw a closed, filled polygon.
    pub fn draw_polygon(&mut self, points: &[(f64, f64)], style: &FillStyle) {
        if points.len() < 3 {
            return;
        }

        self.content.push(format!(
            "<polygon points=\"{}\" {}/>",
            points_attr(points),
            style.to_svg_style()
        ));
    }

    /// Draw a marker at every point.
    pub fn draw_markers(&mut self, points: &[(f64, f64)], style: &MarkerStyle) {
        for (x, y) in points {
            self.add_content(style.render_at(*x, *y));
        }
    }

    /// Draw a rectangle.
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &FillStyle) {
        self.content.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            x,
            y,
            width,
            height,
            style.to_svg_style()
        ));
    }

    /// Draw text.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        self.content.push(format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}>{}</text>",
            x,
            y,
            style.to_svg_attrs(),
            escape_xml(text)
        ));
    }

    /// Start a group with optional attributes.
    pub fn start_group(&mut self, attrs: &str) {
        if attrs.is_empty() {
            self.content.push("<g>".to_string());
        } else {
            self.content.push(format!("<g {}>", attrs));
        }
    }

    /// End the current group.
    pub fn end_group(&mut self) {
        self.content.push("</g>".to_string());
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        let declaration = if self.include_declaration {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        } else {
            ""
        };

        let defs_section = if self.defs.is_empty() {
            String::new()
        } else {
            format!("  <defs>\n    {}\n  </defs>\n", self.defs.join("\n    "))
        };

        format!(
            r#"{}<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
{}  {}
</svg>"#,
            declaration,
            self.width,
            self.height,
            self.width,
            self.height,
            defs_section,
            self.content.join("\n  ")
        )
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filter definition that makes strokes look hand drawn.
///
/// `scale` is the wiggle amplitude, `length` the wiggle wavelength and
/// `randomness` the noise seed, mirroring the three sketch parameters.
pub fn sketch_filter(id: &str, scale: f64, length: f64, randomness: f64) -> String {
    let frequency = if length > 0.0 { 1.0 / length } else { 0.0 };
    format!(
        "<filter id=\"{}\"><feTurbulence type=\"fractalNoise\" baseFrequency=\"{:.4}\" numOctaves=\"2\" seed=\"{}\" result=\"noise\"/><feDisplacementMap in=\"SourceGraphic\" in2=\"noise\" scale=\"{}\"/></filter>",
        id,
        frequency,
        randomness.round(),
        scale * 2.0
    )
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_defs() {
        let mut backend = SvgBackend::new(100.0, 50.0).include_declaration(false);
        backend.add_def(sketch_filter("sketch", 1.0, 100.0, 2.0));
        backend.draw_background(&Color::WHITE);
        backend.draw_text(1.0, 2.0, "a<b", &TextStyle::default());
        let svg = backend.render();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<filter id=\"sketch\">"));
        assert!(svg.contains("a&lt;b"));
    }

    #[test]
    fn test_skips_invisible_elements() {
        let mut backend = SvgBackend::default();
        backend.draw_background(&Color::none());
        backend.draw_polyline(&[(0.0, 0.0), (1.0, 1.0)], &LineStyle::new().width(0.0));
        backend.draw_polygon(&[(0.0, 0.0), (1.0, 1.0)], &FillStyle::default());
        assert!(backend.content.is_empty());
    }
}
