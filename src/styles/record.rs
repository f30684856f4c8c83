//! Style records: named bundles of rendering attributes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::plotting::style::{
    ArrowHead, ArrowStyle, Color, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle,
};

/// Attribute names used in generated records.
pub mod attr {
    pub const COLOR: &str = "color";
    pub const LINESTYLE: &str = "linestyle";
    pub const LINEWIDTH: &str = "linewidth";
    pub const MARKER: &str = "marker";
    pub const MARKERSIZE: &str = "markersize";
    pub const MARKEREDGECOLOR: &str = "markeredgecolor";
    pub const MARKEREDGEWIDTH: &str = "markeredgewidth";
    pub const FACECOLOR: &str = "facecolor";
    pub const EDGECOLOR: &str = "edgecolor";
    pub const ALPHA: &str = "alpha";
    pub const ZORDER: &str = "zorder";
    pub const CLIP_ON: &str = "clip_on";
    pub const ARROWSTYLE: &str = "arrowstyle";
    pub const DIST: &str = "dist";
    pub const SHRINK: &str = "shrink";
    pub const HEAD_LENGTH: &str = "head_length";
    pub const HEAD_WIDTH: &str = "head_width";
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Color(Color),
    Dash(DashPattern),
    Marker(Marker),
    Number(f64),
    Flag(bool),
    Text(String),
}

impl From<Color> for AttrValue {
    fn from(v: Color) -> Self {
        AttrValue::Color(v)
    }
}

impl From<DashPattern> for AttrValue {
    fn from(v: DashPattern) -> Self {
        AttrValue::Dash(v)
    }
}

impl From<Marker> for AttrValue {
    fn from(v: Marker) -> Self {
        AttrValue::Marker(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Number(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Flag(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

/// An ordered mapping from attribute name to value, handed to draw calls.
///
/// Records are built once with [`StyleRecord::with`] and never changed
/// afterwards; the registry replaces whole records.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleRecord {
    attrs: IndexMap<String, AttrValue>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute, returning the extended record.
    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    /// Append all attributes of `extra`, overriding existing keys.
    pub fn merged(mut self, extra: &StyleRecord) -> Self {
        for (key, value) in &extra.attrs {
            self.attrs.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Attribute names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn color(&self, key: &str) -> Option<&Color> {
        match self.attrs.get(key) {
            Some(AttrValue::Color(c)) => Some(c),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.attrs.get(key) {
            Some(AttrValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.attrs.get(key) {
            Some(AttrValue::Flag(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.attrs.get(key) {
            Some(AttrValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    pub fn dash(&self) -> Option<&DashPattern> {
        match self.attrs.get(attr::LINESTYLE) {
            Some(AttrValue::Dash(d)) => Some(d),
            _ => None,
        }
    }

    pub fn marker(&self) -> Option<&Marker> {
        match self.attrs.get(attr::MARKER) {
            Some(AttrValue::Marker(m)) => Some(m),
            _ => None,
        }
    }

    /// Line part of a line or point record.
    pub fn to_line_style(&self) -> Option<LineStyle> {
        let color = self.color(attr::COLOR)?;
        let mut style = LineStyle::new().color(color.clone());
        if let Some(width) = self.number(attr::LINEWIDTH) {
            style = style.width(width);
        }
        if let Some(dash) = self.dash() {
            style = style.dash(dash.clone());
        }
        if let Some(alpha) = self.number(attr::ALPHA) {
            style = style.opacity(alpha);
        }
        Some(style)
    }

    /// Marker part of a point record, `None` for records without a marker.
    pub fn to_marker_style(&self) -> Option<MarkerStyle> {
        let marker = self.marker()?.clone();
        let color = self.color(attr::COLOR)?;
        let mut style = MarkerStyle::new(marker).fill(color.clone()).edge_color(
            self.color(attr::MARKEREDGECOLOR)
                .cloned()
                .unwrap_or_else(|| color.clone()),
        );
        if let Some(size) = self.number(attr::MARKERSIZE) {
            style = style.size(size);
        }
        if let Some(width) = self.number(attr::MARKEREDGEWIDTH) {
            style = style.edge_width(width);
        }
        if let Some(alpha) = self.number(attr::ALPHA) {
            style = style.fill_opacity(alpha);
        }
        Some(style)
    }

    /// Fill style of a fill record.
    pub fn to_fill_style(&self) -> Option<FillStyle> {
        let face = self.color(attr::FACECOLOR)?;
        let mut style = FillStyle::new(face.clone());
        if let Some(edge) = self.color(attr::EDGECOLOR) {
            style = style.stroke(edge.clone());
        }
        if let Some(width) = self.number(attr::LINEWIDTH) {
            style = style.stroke_width(width);
        }
        if let Some(alpha) = self.number(attr::ALPHA) {
            style = style.opacity(alpha);
        }
        Some(style)
    }

    /// Arrow style of an arrow record.
    pub fn to_arrow_style(&self) -> Option<ArrowStyle> {
        let head: ArrowHead = self.text(attr::ARROWSTYLE)?.parse().ok()?;
        let defaults = ArrowStyle::default();
        Some(ArrowStyle {
            head,
            color: self.color(attr::COLOR).cloned().unwrap_or(defaults.color),
            width: self.number(attr::LINEWIDTH).unwrap_or(defaults.width),
            head_length: self.number(attr::HEAD_LENGTH).unwrap_or(defaults.head_length),
            head_width: self.number(attr::HEAD_WIDTH).unwrap_or(defaults.head_width),
            dist: self.number(attr::DIST).unwrap_or(defaults.dist),
            shrink: self.number(attr::SHRINK).unwrap_or(defaults.shrink),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_insertion_order() {
        let record = StyleRecord::new()
            .with(attr::COLOR, Color::from("blue"))
            .with(attr::LINESTYLE, DashPattern::Solid)
            .with(attr::LINEWIDTH, 2.0);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["color", "linestyle", "linewidth"]);
    }

    #[test]
    fn test_merged_overrides_and_appends() {
        let extra = StyleRecord::new().with(attr::LINEWIDTH, 3.0).with(attr::CLIP_ON, false);
        let record = StyleRecord::new()
            .with(attr::COLOR, Color::BLACK)
            .with(attr::LINEWIDTH, 1.0)
            .merged(&extra);
        assert_eq!(record.number(attr::LINEWIDTH), Some(3.0));
        assert_eq!(record.flag(attr::CLIP_ON), Some(false));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_serialize_as_flat_map() {
        let record = StyleRecord::new()
            .with(attr::COLOR, Color::from("blue"))
            .with(attr::LINESTYLE, DashPattern::Solid)
            .with(attr::LINEWIDTH, 2.0)
            .with(attr::MARKER, Marker::Circle)
            .with(attr::CLIP_ON, false);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "color": "blue",
                "linestyle": "-",
                "linewidth": 2.0,
                "marker": "o",
                "clip_on": false
            })
        );
    }

    #[test]
    fn test_to_marker_style_defaults_edge_to_face() {
        let record = StyleRecord::new()
            .with(attr::COLOR, Color::RED)
            .with(attr::MARKER, Marker::Square)
            .with(attr::MARKERSIZE, 8.0);
        let style = record.to_marker_style().unwrap();
        assert_eq!(style.edge_color, Color::RED);
        assert_eq!(style.size, 8.0);
        assert!(StyleRecord::new().with(attr::COLOR, Color::RED).to_marker_style().is_none());
    }
}
