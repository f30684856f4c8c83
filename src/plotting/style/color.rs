//! Color definitions and utilities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a color for plotting elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "k", "none")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// The "no color" value used for invisible edges and backgrounds.
    pub fn none() -> Self {
        Color::Named("none".to_string())
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Color::Rgba(r, g, b, a as f64 / 255.0))
        } else {
            None
        }
    }

    /// Whether this is the transparent "none" color.
    pub fn is_none(&self) -> bool {
        matches!(self, Color::Named(name) if name.eq_ignore_ascii_case("none"))
    }

    /// Convert the color to an SVG-compatible string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => resolve_named_color(name).unwrap_or_else(|| name.clone()),
        }
    }

    /// Upper-case hex notation, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// Named colors that cannot be resolved keep their name.
    pub fn to_hex(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
            Color::Rgba(r, g, b, a) => format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                r,
                g,
                b,
                (a * 255.0).round() as u8
            ),
            Color::Named(name) => name.clone(),
        }
    }

    /// Get the alpha value (opacity) of the color.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgb(_, _, _) => 1.0,
            Color::Rgba(_, _, _, a) => *a,
            Color::Named(_) if self.is_none() => 0.0,
            Color::Named(_) => 1.0,
        }
    }

    /// Convert to RGB tuple, resolving named colors.
    ///
    /// Returns `None` for "none" and for names that are not known.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb(r, g, b) => Some((*r, *g, *b)),
            Color::Rgba(r, g, b, _) => Some((*r, *g, *b)),
            Color::Named(name) => resolve_named_color(name)
                .and_then(|hex| Color::from_hex(&hex))
                .and_then(|color| color.to_rgb()),
        }
    }

    /// Mix the color towards white.
    ///
    /// A `lightness` of 1 returns the color unchanged, 0 returns white.
    /// Values above 1 darken via [`Color::darker`] with `2 - lightness`,
    /// so 2 returns black. Colors without RGB components are returned as is.
    pub fn lighter(&self, lightness: f64) -> Color {
        let lightness = lightness.min(2.0);
        if lightness == 1.0 {
            return self.clone();
        }
        if lightness > 1.0 {
            return self.darker(2.0 - lightness);
        }
        let lightness = lightness.max(0.0);
        self.map_rgb(|c| c + (1.0 - lightness) * (1.0 - c))
    }

    /// Mix the color towards black.
    ///
    /// A `saturation` of 1 returns the color unchanged, 0 returns black.
    /// Values above 1 lighten via [`Color::lighter`] with `2 - saturation`,
    /// so 2 returns white.
    pub fn darker(&self, saturation: f64) -> Color {
        let saturation = saturation.min(2.0);
        if saturation == 1.0 {
            return self.clone();
        }
        if saturation > 1.0 {
            return self.lighter(2.0 - saturation);
        }
        let saturation = saturation.max(0.0);
        self.map_rgb(|c| c * saturation)
    }

    fn map_rgb(&self, f: impl Fn(f64) -> f64) -> Color {
        let Some((r, g, b)) = self.to_rgb() else {
            return self.clone();
        };
        let channel = |v: u8| (f(v as f64 / 255.0).clamp(0.0, 1.0) * 255.0).round() as u8;
        match self {
            Color::Rgba(_, _, _, a) => Color::Rgba(channel(r), channel(g), channel(b), *a),
            _ => Color::Rgb(channel(r), channel(g), channel(b)),
        }
    }

    // Predefined colors
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') || s.chars().all(|c| c.is_ascii_hexdigit()) && s.len() >= 6 {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Resolve a named color to its hex value.
fn resolve_named_color(name: &str) -> Option<String> {
    let hex = match name.to_lowercase().as_str() {
        "black" | "k" => "#000000",
        "white" | "w" => "#FFFFFF",
        "red" | "r" => "#FF0000",
        "green" | "g" => "#008000",
        "blue" | "b" => "#0000FF",
        "yellow" | "y" => "#FFFF00",
        "cyan" | "aqua" | "c" => "#00FFFF",
        "magenta" | "fuchsia" | "m" => "#FF00FF",
        "orange" => "#FFA500",
        "purple" => "#800080",
        "gray" | "grey" => "#808080",
        "lightgray" | "lightgrey" => "#D3D3D3",
        "pink" => "#FFC0CB",
        "navy" => "#000080",

        // tab10 cycle colors (C0-C9)
        "c0" => "#1F77B4",
        "c1" => "#FF7F0E",
        "c2" => "#2CA02C",
        "c3" => "#D62728",
        "c4" => "#9467BD",
        "c5" => "#8C564B",
        "c6" => "#E377C2",
        "c7" => "#7F7F7F",
        "c8" => "#BCBD22",
        "c9" => "#17BECF",

        "none" => return Some("none".to_string()),
        _ => return None,
    };
    Some(hex.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighter_bounds() {
        let c = Color::from("#D71000");
        assert_eq!(c.lighter(0.0), Color::WHITE);
        assert_eq!(c.lighter(1.0), c);
        assert_eq!(c.lighter(2.0), Color::BLACK);
        // clamped outside [0, 2]
        assert_eq!(c.lighter(-1.0), Color::WHITE);
        assert_eq!(c.lighter(3.0), Color::BLACK);
    }

    #[test]
    fn test_lighter_darker_symmetry() {
        let c = Color::rgb(32, 96, 168);
        assert_eq!(c.lighter(2.0), c.darker(0.0));
        assert_eq!(c.darker(2.0), c.lighter(0.0));
        assert_eq!(c.lighter(1.5), c.darker(0.5));
        assert_eq!(c.darker(0.5), Color::rgb(16, 48, 84));
    }

    #[test]
    fn test_lighter_half() {
        let c = Color::rgb(0, 0, 0);
        assert_eq!(c.lighter(0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_named_colors_resolve() {
        assert_eq!(Color::from("blue").to_rgb(), Some((0, 0, 255)));
        assert_eq!(Color::from("k").lighter(0.0), Color::WHITE);
        assert!(Color::from("none").is_none());
        assert_eq!(Color::none().lighter(0.0), Color::none());
    }

    #[test]
    fn test_hex_round_trip_through_serde() {
        let c: Color = serde_json::from_str("\"#b0ff00\"").unwrap();
        assert_eq!(c, Color::rgb(0xB0, 0xFF, 0x00));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#B0FF00\"");
    }
}
