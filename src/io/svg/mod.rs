//! SVG output of a laid-out map scene.

mod writer;

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use crate::render::{Anchor, Ring, Scene, TextItem};

pub(crate) use writer::*;

/// Write `scene` as an SVG file.
pub(crate) fn write_scene_svg(scene: &Scene, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;
    let mut writer = SvgWriter::new(BufWriter::new(file));
    draw_scene(&mut writer, scene)?;
    writer.into_inner().into_inner()
        .with_context(|| format!("[io::svg] Failed to flush {}", path.display()))?;
    Ok(())
}

fn draw_scene<W: Write>(writer: &mut SvgWriter<W>, scene: &Scene) -> Result<()> {
    writer.write_header(scene.width, scene.height, &scene.background.to_string())?;
    writer.write_styles(&scene.font_family, scene.stroke_width)?;

    for feature in &scene.features {
        writeln!(
            writer,
            r#"<path class="state" data-name="{name}" style="fill:{fill}" d="{d}"/>"#,
            name = escape(&feature.name),
            fill = feature.class.fill(),
            d = polygons_to_path(&feature.polygons),
        )?;
    }

    for label in &scene.labels {
        draw_text(writer, label)?;
    }

    draw_text(writer, &scene.title)?;
    draw_text(writer, &scene.subtitle)?;

    let (x, y, w, h) = scene.legend.frame;
    writeln!(writer, r##"<rect x="{x:.3}" y="{y:.3}" width="{w:.3}" height="{h:.3}" rx="4" fill="#ffffff" fill-opacity="0.8" stroke="#cccccc"/>"##)?;
    draw_text(writer, &scene.legend.title)?;
    for (swatch, text) in &scene.legend.entries {
        writeln!(
            writer,
            r#"<rect x="{:.3}" y="{:.3}" width="{s:.3}" height="{s:.3}" fill="{}"/>"#,
            swatch.x, swatch.y, swatch.fill, s = swatch.size,
        )?;
        draw_text(writer, text)?;
    }

    draw_text(writer, &scene.caption)?;
    writer.write_footer()
}

fn draw_text<W: Write>(writer: &mut SvgWriter<W>, text: &TextItem) -> Result<()> {
    let anchor = match text.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
    };
    let class = if text.bold { r#" class="bold""# } else { "" };
    writeln!(
        writer,
        r#"<text x="{:.3}" y="{:.3}" font-size="{:.3}" fill="{}" text-anchor="{anchor}"{class}>{}</text>"#,
        text.x, text.y, text.size, text.color, escape(&text.text),
    )?;
    Ok(())
}

/// Build a compact SVG path string for a set of polygons (exteriors + holes).
fn polygons_to_path(polygons: &[Vec<Ring>]) -> String {
    let mut out = String::new();

    for ring in polygons.iter().flatten() {
        let mut coords = ring.iter();
        if let Some((x, y)) = coords.next() {
            out.push_str(&format!(" M{x:.3},{y:.3}"));
            for (x, y) in coords {
                out.push_str(&format!(" L{x:.3},{y:.3}"));
            }
            out.push('Z');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_closes_every_ring() {
        let path = polygons_to_path(&[vec![
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
            vec![(0.2, 0.2), (0.4, 0.2), (0.4, 0.4)],
        ]]);
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('Z').count(), 2);
        assert!(path.starts_with(" M0.000,0.000 L1.000,0.000"));
    }

    #[test]
    fn empty_rings_are_skipped() {
        assert_eq!(polygons_to_path(&[vec![vec![]]]), "");
    }
}
