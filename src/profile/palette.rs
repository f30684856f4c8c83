//! Named color palettes the semantic styles draw from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};
use crate::plotting::style::Color;

/// An ordered mapping from color name to color.
pub type Palette = IndexMap<String, Color>;

/// Built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    /// Saturated colors for screens and sketches
    Vivid,
    /// Darker, less saturated colors for print
    Muted,
}

impl PaletteName {
    pub fn palette(&self) -> Palette {
        match self {
            PaletteName::Vivid => vivid(),
            PaletteName::Muted => muted(),
        }
    }
}

/// A built-in palette by name or an explicit color table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Named(PaletteName),
    Custom(Palette),
}

impl PaletteSpec {
    pub fn resolve(&self) -> Palette {
        match self {
            PaletteSpec::Named(name) => name.palette(),
            PaletteSpec::Custom(colors) => colors.clone(),
        }
    }
}

fn build(entries: &[(&str, &str)]) -> Palette {
    entries
        .iter()
        .map(|(name, hex)| (name.to_string(), Color::from(*hex)))
        .collect()
}

pub fn vivid() -> Palette {
    build(&[
        ("red", "#D71000"),
        ("orange", "#FF9000"),
        ("yellow", "#FFF700"),
        ("lightgreen", "#B0FF00"),
        ("green", "#30D700"),
        ("darkgreen", "#208A00"),
        ("cyan", "#00F0B0"),
        ("lightblue", "#00B6FF"),
        ("blue", "#0020FF"),
        ("purple", "#B000FF"),
        ("magenta", "#F000FF"),
        ("pink", "#FF00B0"),
        ("white", "#FFFFFF"),
        ("gray", "#A7A7A7"),
        ("black", "#000000"),
    ])
}

pub fn muted() -> Palette {
    build(&[
        ("red", "#C02717"),
        ("orange", "#F78017"),
        ("yellow", "#F0D730"),
        ("lightgreen", "#AAB71B"),
        ("green", "#408020"),
        ("darkgreen", "#007030"),
        ("cyan", "#40A787"),
        ("lightblue", "#008797"),
        ("blue", "#2060A7"),
        ("purple", "#53379B"),
        ("magenta", "#873770"),
        ("pink", "#D03050"),
        ("white", "#FFFFFF"),
        ("gray", "#A0A0A0"),
        ("black", "#000000"),
    ])
}

/// Look up `name` in `palette`.
pub fn color(palette: &Palette, name: &str) -> StyleResult<Color> {
    palette
        .get(name)
        .cloned()
        .ok_or_else(|| StyleError::UnknownColor(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_share_names() {
        let vivid: Vec<String> = vivid().keys().cloned().collect();
        let muted: Vec<String> = muted().keys().cloned().collect();
        assert_eq!(vivid, muted);
        assert_eq!(vivid.len(), 15);
    }

    #[test]
    fn test_palette_spec_from_json() {
        let named: PaletteSpec = serde_json::from_str("\"muted\"").unwrap();
        assert_eq!(named.resolve()["blue"], Color::rgb(0x20, 0x60, 0xA7));

        let custom: PaletteSpec = serde_json::from_str(r##"{"ink": "#102030"}"##).unwrap();
        assert_eq!(color(&custom.resolve(), "ink").unwrap(), Color::rgb(0x10, 0x20, 0x30));
        assert!(matches!(
            color(&custom.resolve(), "blue"),
            Err(StyleError::UnknownColor(_))
        ));
    }
}
