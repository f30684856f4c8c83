//! Text appearance of labels and titles.

use super::color::Color;
use crate::plotting::backend::escape_xml;

/// Which point of the text its position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Font and placement of a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: String,
    /// Font size in points
    pub size: f64,
    pub color: Color,
    pub anchor: TextAnchor,
}

impl TextStyle {
    /// Black, start-anchored text.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        TextStyle {
            family: family.into(),
            size,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
        }
    }

    /// The same font at `factor` times the size.
    pub fn scaled(&self, factor: f64) -> Self {
        TextStyle {
            size: self.size * factor,
            ..self.clone()
        }
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn to_svg_attrs(&self) -> String {
        format!(
            "font-family=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
            escape_xml(&self.family),
            self.size,
            self.color.to_svg_string(),
            self.anchor.as_str()
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::new("sans-serif", 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_title() {
        let label = TextStyle::new("xkcd", 14.0);
        let title = label.scaled(1.5).anchor(TextAnchor::Middle);
        assert_eq!(title.size, 21.0);
        assert_eq!(title.family, "xkcd");
        assert_eq!(
            title.to_svg_attrs(),
            "font-family=\"xkcd\" font-size=\"21\" fill=\"rgb(0,0,0)\" text-anchor=\"middle\""
        );
    }

    #[test]
    fn test_family_is_escaped() {
        let attrs = TextStyle::new("Comic \"Neue\" & co", 10.0).to_svg_attrs();
        assert!(attrs.starts_with("font-family=\"Comic &quot;Neue&quot; &amp; co\" "));
    }
}
