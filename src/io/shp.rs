//! Shapefile boundary reading.

use std::path::Path;

use anyhow::{Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use shapefile::{dbase::{FieldValue, Record}, Reader, Shape};
use tracing::warn;

use crate::boundary::BoundaryRecord;

/// Read state boundaries from a `.shp` file and its `.dbf` attribute table.
pub(crate) fn read_shapefile_boundaries(path: &Path, name_field: &str) -> Result<Vec<BoundaryRecord>> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("[io::shp] Failed to open shapefile: {}", path.display()))?;

    let mut records = Vec::with_capacity(reader.shape_count()?);
    for (idx, result) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = result.context("[io::shp] Error reading shape+record")?;

        let Some(name) = record_name(record, name_field) else {
            warn!(shape = idx, field = name_field, "[io::shp] shape has no name; skipped");
            continue;
        };

        match shape {
            Shape::Polygon(polygon) => records.push(BoundaryRecord::new(name, shp_to_geo(&polygon))),
            other => warn!(shape = idx, name, kind = ?other.shapetype(), "[io::shp] shape is not a 2D polygon; skipped"),
        }
    }
    Ok(records)
}

/// Text value of an attribute, matching the field name case-insensitively.
fn record_name(record: Record, field: &str) -> Option<String> {
    record.into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(field))
        .and_then(|(_, value)| match value {
            FieldValue::Character(Some(text)) => Some(text),
            FieldValue::Memo(text) => Some(text),
            _ => None,
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Convert shapefile::Polygon to geo::MultiPolygon<f64>.
/// Clockwise rings are exteriors; each is followed by its counter-clockwise holes.
pub(crate) fn shp_to_geo(p: &shapefile::Polygon) -> MultiPolygon<f64> {
    let mut polys: Vec<Polygon<f64>> = Vec::new();
    let mut current_exterior: Option<LineString<f64>> = None;
    let mut current_holes: Vec<LineString<f64>> = Vec::new();

    for ring in p.rings() {
        let mut coords: Vec<Coord<f64>> = ring.points().iter().map(|pt| Coord { x: pt.x, y: pt.y }).collect();
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last { coords.push(first) }
        }

        if signed_area(&coords) < 0.0 {
            // flush previous polygon
            if let Some(ext) = current_exterior.take() {
                polys.push(Polygon::new(ext, std::mem::take(&mut current_holes)));
            }
            current_exterior = Some(LineString(coords));
        } else {
            current_holes.push(LineString(coords));
        }
    }
    if let Some(ext) = current_exterior {
        polys.push(Polygon::new(ext, current_holes));
    }

    MultiPolygon(polys)
}

/// Shoelace signed area (negative for clockwise rings).
fn signed_area(pts: &[Coord<f64>]) -> f64 {
    pts.windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum::<f64>() / 2.0
}
