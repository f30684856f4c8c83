//! Line styling options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::StyleError;

/// Dash pattern for lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DashPattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line (default dash length)
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash-dot pattern
    DashDot,
    /// No line at all, used for markers without connecting lines
    None,
    /// Custom dash array [dash_length, gap_length, ...]
    Custom(Vec<f64>),
}

impl DashPattern {
    /// Convert to SVG stroke-dasharray value.
    pub fn to_svg_dasharray(&self) -> Option<String> {
        match self {
            DashPattern::Solid | DashPattern::None => None,
            DashPattern::Dashed => Some("8,4".to_string()),
            DashPattern::Dotted => Some("2,2".to_string()),
            DashPattern::DashDot => Some("8,4,2,4".to_string()),
            DashPattern::Custom(arr) => {
                if arr.is_empty() {
                    None
                } else {
                    Some(
                        arr.iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(","),
                    )
                }
            }
        }
    }

    /// Whether a line drawn with this pattern is visible.
    pub fn is_visible(&self) -> bool {
        !matches!(self, DashPattern::None)
    }

    /// The linestyle string understood by the plotting vocabulary.
    pub fn to_format_str(&self) -> String {
        match self {
            DashPattern::Solid => "-".to_string(),
            DashPattern::Dashed => "--".to_string(),
            DashPattern::Dotted => ":".to_string(),
            DashPattern::DashDot => "-.".to_string(),
            DashPattern::None => "none".to_string(),
            DashPattern::Custom(arr) => arr
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl FromStr for DashPattern {
    type Err = StyleError;

    /// Parse a linestyle string: `-`, `--`, `-.`, `:`, their long names,
    /// `none`, or a comma separated custom dash array like `4,2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" | "solid" => Ok(DashPattern::Solid),
            "--" | "dashed" => Ok(DashPattern::Dashed),
            ":" | "dotted" => Ok(DashPattern::Dotted),
            "-." | "dashdot" => Ok(DashPattern::DashDot),
            "" | "none" | "None" => Ok(DashPattern::None),
            other => {
                let arr = other
                    .split(',')
                    .map(|v| v.trim().parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| StyleError::InvalidDash(s.to_string()))?;
                Ok(DashPattern::Custom(arr))
            }
        }
    }
}

impl TryFrom<String> for DashPattern {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DashPattern> for String {
    fn from(dash: DashPattern) -> Self {
        dash.to_format_str()
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_format_str())
    }
}

/// Style configuration for lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width in points
    pub width: f64,
    /// Dash pattern
    pub dash: DashPattern,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// Create a new line style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the line width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Whether anything is drawn for this style.
    pub fn is_visible(&self) -> bool {
        self.dash.is_visible() && self.width > 0.0 && !self.color.is_none()
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        if !self.is_visible() {
            return "stroke=\"none\" fill=\"none\"".to_string();
        }

        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
            "stroke-linecap=\"butt\"".to_string(),
            "stroke-linejoin=\"round\"".to_string(),
            "fill=\"none\"".to_string(),
        ];

        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }

        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }

        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linestyles() {
        assert_eq!("-".parse::<DashPattern>().unwrap(), DashPattern::Solid);
        assert_eq!("--".parse::<DashPattern>().unwrap(), DashPattern::Dashed);
        assert_eq!("-.".parse::<DashPattern>().unwrap(), DashPattern::DashDot);
        assert_eq!(":".parse::<DashPattern>().unwrap(), DashPattern::Dotted);
        assert_eq!("none".parse::<DashPattern>().unwrap(), DashPattern::None);
        assert_eq!(
            "4, 2".parse::<DashPattern>().unwrap(),
            DashPattern::Custom(vec![4.0, 2.0])
        );
        assert!("~~".parse::<DashPattern>().is_err());
    }

    #[test]
    fn test_invisible_line_has_no_stroke() {
        let style = LineStyle::new().dash(DashPattern::None).width(2.0);
        assert!(!style.is_visible());
        assert!(style.to_svg_style().contains("stroke=\"none\""));

        let dashed = LineStyle::new().dash(DashPattern::Dashed);
        assert!(dashed.to_svg_style().contains("stroke-dasharray=\"8,4\""));
    }
}
