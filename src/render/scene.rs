//! Page layout for the choropleth: every primitive positioned in pixel space.
//!
//! The scene is backend-neutral; the PNG and SVG writers only draw what is laid out here.

use anyhow::{anyhow, Result};
use geo::{Coord, CoordsIter, LineString, MultiPolygon, Rect};

use crate::{classify::ColorClass, config::RenderConfig, geom, join::JoinedState};

use super::Rgb;

/// Horizontal anchoring of a text item. Text is always vertically centred on `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Font size in pixels.
    pub size: f64,
    pub color: Rgb,
    pub bold: bool,
    pub anchor: Anchor,
}

/// A ring in pixel coordinates.
pub type Ring = Vec<(f64, f64)>;

/// One state's filled outline. Each polygon is `[exterior, holes...]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub name: String,
    pub class: ColorClass,
    pub polygons: Vec<Vec<Ring>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Frame as (x, y, width, height).
    pub frame: (f64, f64, f64, f64),
    pub title: TextItem,
    pub entries: Vec<(Swatch, TextItem)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub font_family: String,
    pub stroke_width: f64,
    pub features: Vec<Feature>,
    pub labels: Vec<TextItem>,
    pub title: TextItem,
    pub subtitle: TextItem,
    pub caption: TextItem,
    pub legend: Legend,
}

const TITLE_PT: f64 = 18.0;
const SUBTITLE_PT: f64 = 14.0;
const BODY_PT: f64 = 10.0;
const EDGE_PT: f64 = 0.8;

/// Rough advance width of a glyph relative to the font size, used to size the legend box.
const GLYPH_WIDTH: f64 = 0.6;

/// Lay out the map page for the given joined states.
pub fn build_scene(states: &[JoinedState], config: &RenderConfig) -> Result<Scene> {
    config.validate()?;
    let (width, height) = config.canvas_px();
    let (w, h) = (width as f64, height as f64);
    let margin = 0.03 * h;
    let pad = config.pt_to_px(6.0);

    let title_px = config.pt_to_px(TITLE_PT);
    let subtitle_px = config.pt_to_px(SUBTITLE_PT);
    let body_px = config.pt_to_px(BODY_PT);

    let title = TextItem {
        text: config.title.clone(),
        x: w / 2.0,
        y: margin + title_px / 2.0,
        size: title_px,
        color: Rgb::DARK_GRAY,
        bold: true,
        anchor: Anchor::Middle,
    };
    let subtitle = TextItem {
        text: config.subtitle.clone(),
        x: w / 2.0,
        y: title.y + title_px / 2.0 + pad + subtitle_px / 2.0,
        size: subtitle_px,
        color: Rgb::GRAY,
        bold: false,
        anchor: Anchor::Middle,
    };
    let caption = TextItem {
        text: config.caption.clone(),
        x: 0.1 * w,
        y: h - margin - body_px / 2.0,
        size: body_px,
        color: Rgb::GRAY,
        bold: false,
        anchor: Anchor::Start,
    };

    // Map area between the subtitle and the caption.
    let area = Rect::new(
        Coord { x: margin, y: subtitle.y + subtitle_px / 2.0 + 2.0 * pad },
        Coord { x: w - margin, y: caption.y - body_px / 2.0 - 2.0 * pad },
    );

    let bounds = geom::bounds(states.iter().map(|state| &state.display))
        .ok_or_else(|| anyhow!("[render::scene] Could not determine bounds; nothing to draw."))?;
    let project = fit_projection(bounds, area);

    let features = states.iter()
        .map(|state| Feature {
            name: state.name.clone(),
            class: state.class,
            polygons: project_shape(&state.display, &project),
        })
        .collect();

    let labels = states.iter()
        .filter_map(|state| {
            let label = state.label?;
            let point = geom::centroid(&state.display)?;
            let (x, y) = project(&Coord { x: point.x(), y: point.y() });
            Some(TextItem { text: label.to_string(), x, y, size: body_px, color: Rgb::BLACK, bold: true, anchor: Anchor::Middle })
        })
        .collect();

    Ok(Scene {
        width,
        height,
        background: config.background.parse()?,
        font_family: config.font_family.clone(),
        stroke_width: config.pt_to_px(EDGE_PT),
        features,
        labels,
        title,
        subtitle,
        caption,
        legend: build_legend(config, area, body_px, pad),
    })
}

/// lon/lat -> pixel coords, preserving aspect ratio and centring `bounds` inside `area` (Y down).
fn fit_projection(bounds: Rect<f64>, area: Rect<f64>) -> impl Fn(&Coord<f64>) -> (f64, f64) {
    let span_x = if bounds.width() > 0.0 { bounds.width() } else { 1.0 };
    let span_y = if bounds.height() > 0.0 { bounds.height() } else { 1.0 };
    let scale = (area.width() / span_x).min(area.height() / span_y);

    let offset_x = area.min().x + (area.width() - bounds.width() * scale) / 2.0;
    let offset_y = area.min().y + (area.height() - bounds.height() * scale) / 2.0;

    move |coord: &Coord<f64>| -> (f64, f64) {
        let x = offset_x + (coord.x - bounds.min().x) * scale;
        let y = offset_y + (bounds.max().y - coord.y) * scale; // invert vertically
        (x, y)
    }
}

fn project_shape(shape: &MultiPolygon<f64>, project: &impl Fn(&Coord<f64>) -> (f64, f64)) -> Vec<Vec<Ring>> {
    shape.0.iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| project_ring(ring, project))
                .collect()
        })
        .collect()
}

fn project_ring(ring: &LineString<f64>, project: &impl Fn(&Coord<f64>) -> (f64, f64)) -> Ring {
    ring.coords_iter().map(|coord| project(&coord)).collect()
}

/// Legend box anchored to the lower-right corner of the map area.
fn build_legend(config: &RenderConfig, area: Rect<f64>, body_px: f64, pad: f64) -> Legend {
    let swatch_px = body_px;
    let row = body_px * 1.6;

    let longest = ColorClass::LEGEND.iter()
        .map(|class| class.description().chars().count())
        .max()
        .unwrap_or(0);
    let entries_width = swatch_px + pad + longest as f64 * GLYPH_WIDTH * body_px;
    let title_width = config.legend_title.chars().count() as f64 * GLYPH_WIDTH * body_px;

    let frame_w = entries_width.max(title_width) + 2.0 * pad;
    let frame_h = row * (ColorClass::LEGEND.len() + 1) as f64 + 2.0 * pad;
    let frame_x = area.max().x - frame_w;
    let frame_y = area.max().y - frame_h;

    let title = TextItem {
        text: config.legend_title.clone(),
        x: frame_x + frame_w / 2.0,
        y: frame_y + pad + row / 2.0,
        size: body_px,
        color: Rgb::BLACK,
        bold: false,
        anchor: Anchor::Middle,
    };

    let entries = ColorClass::LEGEND.iter()
        .enumerate()
        .map(|(i, class)| {
            let center_y = frame_y + pad + row * (i as f64 + 1.5);
            let swatch = Swatch { x: frame_x + pad, y: center_y - swatch_px / 2.0, size: swatch_px, fill: class.fill() };
            let text = TextItem {
                text: class.description().to_string(),
                x: swatch.x + swatch.size + pad,
                y: center_y,
                size: body_px,
                color: Rgb::BLACK,
                bold: false,
                anchor: Anchor::Start,
            };
            (swatch, text)
        })
        .collect();

    Legend { frame: (frame_x, frame_y, frame_w, frame_h), title, entries }
}
