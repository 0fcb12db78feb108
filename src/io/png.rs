//! Raster output of a laid-out map scene.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::{
    prelude::*,
    style::{FontStyle, text_anchor::{HPos, Pos, VPos}},
};

use crate::render::{Anchor, Rgb, Ring, Scene, TextItem};

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

impl From<Rgb> for RGBColor {
    fn from(color: Rgb) -> Self { RGBColor(color.r, color.g, color.b) }
}

#[inline]
fn px((x, y): (f64, f64)) -> (i32, i32) { (x.round() as i32, y.round() as i32) }

fn ring_px(ring: &Ring) -> Vec<(i32, i32)> { ring.iter().copied().map(px).collect() }

/// Bounding-box area of a polygon's exterior ring.
fn extent(rings: &[Ring]) -> f64 {
    let Some(exterior) = rings.first() else { return 0.0 };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in exterior {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if min_x > max_x { 0.0 } else { (max_x - min_x) * (max_y - min_y) }
}

/// Write `scene` as a PNG image.
pub(crate) fn write_scene_png(scene: &Scene, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (scene.width, scene.height)).into_drawing_area();
    draw_shapes(&root, scene)
        .and_then(|_| draw_labels(&root, scene))
        .map_err(|e| anyhow!("[io::png] Failed to draw {}: {e}", path.display()))?;
    root.present()
        .map_err(|e| anyhow!("[io::png] Failed to write {}: {e}", path.display()))?;
    Ok(())
}

/// Background, state fills and outlines, and the legend boxes. Draws no text.
fn draw_shapes<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>, scene: &Scene) -> DrawResult<DB> {
    let background = RGBColor::from(scene.background);
    root.fill(&background)?;

    // Largest first: a polygon sitting in another's hole is filled after that hole is cleared.
    let mut polygons = scene.features.iter()
        .flat_map(|feature| {
            let fill = RGBColor::from(feature.class.fill());
            feature.polygons.iter().map(move |rings| (rings.as_slice(), fill))
        })
        .collect::<Vec<_>>();
    polygons.sort_by(|a, b| extent(b.0).total_cmp(&extent(a.0)));

    for (rings, fill) in &polygons {
        let Some((exterior, holes)) = rings.split_first() else { continue };
        root.draw(&Polygon::new(ring_px(exterior), fill.filled()))?;
        for hole in holes {
            root.draw(&Polygon::new(ring_px(hole), background.filled()))?;
        }
    }

    let stroke = BLACK.stroke_width(scene.stroke_width.round().max(1.0) as u32);
    for ring in scene.features.iter().flat_map(|feature| feature.polygons.iter().flatten()) {
        root.draw(&PathElement::new(ring_px(ring), stroke))?;
    }

    let (x, y, w, h) = scene.legend.frame;
    let frame = [px((x, y)), px((x + w, y + h))];
    root.draw(&Rectangle::new(frame, WHITE.mix(0.8).filled()))?;
    root.draw(&Rectangle::new(frame, RGBColor(0xcc, 0xcc, 0xcc).stroke_width(1)))?;
    for (swatch, _) in &scene.legend.entries {
        let corners = [px((swatch.x, swatch.y)), px((swatch.x + swatch.size, swatch.y + swatch.size))];
        root.draw(&Rectangle::new(corners, RGBColor::from(swatch.fill).filled()))?;
    }
    Ok(())
}

/// State labels, titles, legend text and caption.
fn draw_labels<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>, scene: &Scene) -> DrawResult<DB> {
    let family = scene.font_family.as_str();
    for label in &scene.labels {
        draw_text(root, label, family)?;
    }
    draw_text(root, &scene.title, family)?;
    draw_text(root, &scene.subtitle, family)?;
    draw_text(root, &scene.legend.title, family)?;
    for (_, text) in &scene.legend.entries {
        draw_text(root, text, family)?;
    }
    draw_text(root, &scene.caption, family)
}

fn draw_text<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>, text: &TextItem, family: &str) -> DrawResult<DB> {
    let hpos = match text.anchor {
        Anchor::Start => HPos::Left,
        Anchor::Middle => HPos::Center,
    };
    let font = FontDesc::new(FontFamily::Name(family), text.size, if text.bold { FontStyle::Bold } else { FontStyle::Normal });
    let color = RGBColor::from(text.color);
    let style = TextStyle::from(font)
        .color(&color)
        .pos(Pos::new(hpos, VPos::Center));
    root.draw(&Text::new(text.text.clone(), px((text.x, text.y)), style))
}
