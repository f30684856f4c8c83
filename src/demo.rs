//! Demo sheets showing every generated style of one kind.

use log::{debug, warn};

use crate::plotting::backend::{sketch_filter, SvgBackend};
use crate::plotting::style::{Color, FillStyle, TextAnchor, TextStyle};
use crate::profile::rc::RcParams;
use crate::styles::registry::{ARROW, FILL};
use crate::styles::{StyleRecord, StyleRegistry};

/// Usage line printed for unknown modes.
pub const USAGE: &str = "possible options are: line, point, linep(oint), fill, arrow";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

/// What a demo sheet shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    Line,
    Point,
    LinePoint,
    Fill,
    Arrow,
}

impl DemoMode {
    /// Match `mode` by substring: `linep` is tested before `line`, so
    /// `linepoint` selects line-point styles.
    pub fn parse(mode: &str) -> Option<Self> {
        if mode.contains("linep") {
            Some(DemoMode::LinePoint)
        } else if mode.contains("line") {
            Some(DemoMode::Line)
        } else if mode.contains("point") {
            Some(DemoMode::Point)
        } else if mode.contains("fill") {
            Some(DemoMode::Fill)
        } else if mode.contains("arrow") {
            Some(DemoMode::Arrow)
        } else {
            None
        }
    }

    fn title(&self) -> &'static str {
        match self {
            DemoMode::Line => "line styles",
            DemoMode::Point => "point styles",
            DemoMode::LinePoint => "linepoint styles",
            DemoMode::Fill => "fill styles",
            DemoMode::Arrow => "arrow styles",
        }
    }
}

/// A single axes in data coordinates drawn onto an SVG canvas.
struct Sheet {
    backend: SvgBackend,
    x_lim: (f64, f64),
    y_lim: (f64, f64),
    // plot area in pixels: left, top, right, bottom
    area: (f64, f64, f64, f64),
    text: TextStyle,
}

impl Sheet {
    fn new(rc: &RcParams, title: &str, x_lim: (f64, f64), y_lim: (f64, f64)) -> Self {
        let mut backend = SvgBackend::new(WIDTH, HEIGHT);
        let area = (0.08 * WIDTH, 0.1 * HEIGHT, 0.95 * WIDTH, 0.92 * HEIGHT);
        let font_size = rc.number("font.size").unwrap_or(10.0);
        let text = TextStyle::new(rc.font_family().unwrap_or("sans-serif"), font_size);

        if let Some(face) = rc.color("figure.facecolor") {
            backend.draw_background(face);
        }
        if let Some(face) = rc.color("axes.facecolor") {
            if !face.is_none() {
                let (left, top, right, bottom) = area;
                backend.draw_rect(left, top, right - left, bottom - top, &FillStyle::new(face.clone()));
            }
        }
        backend.draw_text(
            (area.0 + area.2) / 2.0,
            area.1 - font_size,
            title,
            &text.scaled(1.2).anchor(TextAnchor::Middle),
        );
        if let Some((scale, length, randomness)) = rc.sketch() {
            backend.add_def(sketch_filter("sketch", scale, length, randomness));
            backend.start_group("filter=\"url(#sketch)\"");
        }

        Sheet {
            backend,
            x_lim,
            y_lim,
            area,
            text,
        }
    }

    fn px(&self, x: f64, y: f64) -> (f64, f64) {
        let (left, top, right, bottom) = self.area;
        let fx = (x - self.x_lim.0) / (self.x_lim.1 - self.x_lim.0);
        let fy = (y - self.y_lim.0) / (self.y_lim.1 - self.y_lim.0);
        (left + fx * (right - left), bottom - fy * (bottom - top))
    }

    fn label(&mut self, x: f64, y: f64, label: &str) {
        let (px, py) = self.px(x, y);
        self.backend.draw_text(px, py, label, &self.text);
    }

    /// Line and markers of a line, point or line-point record.
    fn plot(&mut self, xs: &[f64], ys: &[f64], record: &StyleRecord) {
        let points: Vec<(f64, f64)> = xs.iter().zip(ys).map(|(x, y)| self.px(*x, *y)).collect();
        if let Some(line) = record.to_line_style() {
            self.backend.draw_polyline(&points, &line);
        }
        if let Some(marker) = record.to_marker_style() {
            self.backend.draw_markers(&points, &marker);
        }
    }

    /// Area between `lower` and `upper`.
    fn fill_between(&mut self, xs: &[f64], lower: &[f64], upper: &[f64], record: &StyleRecord) {
        let Some(style) = record.to_fill_style() else {
            return;
        };
        let mut points: Vec<(f64, f64)> = xs.iter().zip(lower).map(|(x, y)| self.px(*x, *y)).collect();
        points.extend(xs.iter().zip(upper).rev().map(|(x, y)| self.px(*x, *y)));
        self.backend.draw_polygon(&points, &style);
    }

    fn arrow(&mut self, from: (f64, f64), to: (f64, f64), record: &StyleRecord) {
        let Some(style) = record.to_arrow_style() else {
            warn!("Skipping arrow record without a valid head");
            return;
        };
        let (x0, y0) = self.px(from.0, from.1);
        let (x1, y1) = self.px(to.0, to.1);
        self.backend.add_content(style.render(x0, y0, x1, y1));
    }

    fn finish(mut self, rc: &RcParams) -> String {
        if rc.sketch().is_some() {
            self.backend.end_group();
        }
        let (left, top, right, bottom) = self.area;
        let edge = rc.color("axes.edgecolor").cloned().unwrap_or(Color::BLACK);
        let frame = FillStyle::new(Color::none())
            .stroke(edge)
            .stroke_width(rc.number("axes.linewidth").unwrap_or(0.8));
        self.backend.draw_rect(left, top, right - left, bottom - top, &frame);
        self.backend.render()
    }
}

/// Style names that have a record in any of `categories`.
fn names_in<'a>(registry: &'a StyleRegistry, categories: &[&str]) -> Vec<&'a str> {
    registry
        .style_names()
        .filter(|name| {
            categories
                .iter()
                .any(|category| registry.lookup(category, name).is_some())
        })
        .collect()
}

/// Render the styles of one kind into an SVG document.
///
/// Backgrounds, fonts, the axes frame and hand-drawn rendering follow `rc`.
pub fn render_sheet(registry: &StyleRegistry, rc: &RcParams, mode: DemoMode) -> String {
    let svg = match mode {
        DemoMode::Line => line_sheet(registry, rc),
        DemoMode::Point => point_sheet(registry, rc),
        DemoMode::LinePoint => line_point_sheet(registry, rc),
        DemoMode::Fill => fill_sheet(registry, rc),
        DemoMode::Arrow => arrow_sheet(registry, rc),
    };
    debug!("Rendered {} sheet, {} bytes", mode.title(), svg.len());
    svg
}

fn line_sheet(registry: &StyleRegistry, rc: &RcParams) -> String {
    let names = names_in(registry, &["ls", "lsm"]);
    let k = names.len() as f64;
    let mut sheet = Sheet::new(rc, DemoMode::Line.title(), (-0.2, k + 2.8), (-0.15, 1.9));
    for (k, name) in names.iter().enumerate() {
        let x = k as f64;
        if let Some(record) = registry.lookup("ls", name) {
            sheet.label(x, 0.9, &format!("ls{}", name));
            sheet.plot(&[x, x + 3.5], &[1.0, 1.8], record);
        }
        if let Some(record) = registry.lookup("lsm", name) {
            sheet.label(x, -0.1, &format!("ls{}m", name));
            sheet.plot(&[x, x + 3.5], &[0.0, 0.8], record);
        }
    }
    sheet.finish(rc)
}

fn point_sheet(registry: &StyleRegistry, rc: &RcParams) -> String {
    let dy = 0.2;
    let mut names = names_in(registry, &["ps", "psc", "psm"]);
    names.reverse();
    let mut sheet = Sheet::new(rc, DemoMode::Point.title(), (0.0, 3.0), (-1.0, names.len() as f64));
    for (k, name) in names.iter().enumerate() {
        let y = k as f64;
        for (column, suffix) in ["", "c", "m"].iter().enumerate() {
            if let Some(record) = registry.lookup(&format!("ps{}", suffix), name) {
                let x = column as f64;
                sheet.label(x + 0.1, y, &format!("ps{}{}", name, suffix));
                sheet.plot(&[x + 0.6], &[y + dy], record);
            }
        }
    }
    sheet.finish(rc)
}

fn line_point_sheet(registry: &StyleRegistry, rc: &RcParams) -> String {
    let dy = 0.2;
    let mut names = names_in(registry, &["lps", "lpsc", "lpsm"]);
    names.reverse();
    let mut sheet = Sheet::new(
        rc,
        DemoMode::LinePoint.title(),
        (0.0, 6.0),
        (-1.0, names.len() as f64),
    );
    for (k, name) in names.iter().enumerate() {
        let y = k as f64;
        for (column, suffix) in ["", "c", "m"].iter().enumerate() {
            if let Some(record) = registry.lookup(&format!("lps{}", suffix), name) {
                let x = 2.0 * column as f64;
                sheet.label(x + 0.1, y - dy, &format!("lps{}{}", name, suffix));
                sheet.plot(&[x + 0.8, x + 1.1, x + 1.4], &[y, y, y], record);
            }
        }
    }
    sheet.finish(rc)
}

/// The two outlines every fill style is drawn with: a hump and a step.
fn fill_curves() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..50).map(|i| 0.8 * i as f64 / 49.0).collect();
    let hump = xs
        .iter()
        .map(|x| (-x * (x - 0.6) * 0.6 / 0.3 / 0.3).max(0.0))
        .collect();
    let step = xs.iter().map(|&x| if x > 0.3 { 0.7 } else { 0.0 }).collect();
    (xs, hump, step)
}

fn fill_sheet(registry: &StyleRegistry, rc: &RcParams) -> String {
    let categories = ["fs", "fss", "fsa"];
    let names = names_in(registry, &categories);
    let mut sheet = Sheet::new(rc, DemoMode::Fill.title(), (-0.2, names.len() as f64), (-0.15, 2.9));
    let (xs, hump, step) = fill_curves();
    for (row, label) in ["plain", "solid", "alpha"].iter().enumerate() {
        sheet.label(0.0, 2.75 - row as f64, label);
    }
    for (k, name) in names.iter().enumerate() {
        let xk: Vec<f64> = xs.iter().map(|x| x + k as f64).collect();
        for (row, suffix) in ["", "s", "a"].iter().enumerate() {
            let Some(record) = registry.lookup(&format!("{}{}", FILL, suffix), name) else {
                continue;
            };
            let base = 2.0 - row as f64;
            let lower = vec![base; xs.len()];
            let upper_step: Vec<f64> = step.iter().map(|y| y + base).collect();
            let upper_hump: Vec<f64> = hump.iter().map(|y| y + base).collect();
            sheet.label(k as f64, base - 0.1, &format!("fs{}{}", name, suffix));
            sheet.fill_between(&xk, &lower, &upper_step, record);
            sheet.fill_between(&xk, &lower, &upper_hump, record);
        }
    }
    sheet.finish(rc)
}

fn arrow_sheet(registry: &StyleRegistry, rc: &RcParams) -> String {
    let arrows: Vec<(&String, &StyleRecord)> = registry
        .category(ARROW)
        .map(|category| category.iter().rev().collect())
        .unwrap_or_default();
    let mut sheet = Sheet::new(rc, DemoMode::Arrow.title(), (0.0, 3.0), (-1.0, arrows.len() as f64));
    for (k, (name, record)) in arrows.iter().enumerate() {
        let y = k as f64;
        sheet.label(0.1, y, &format!("as{}", name));
        sheet.arrow((1.0, y), (2.8, y), record);
    }
    sheet.finish(rc)
}
