//! GeoJSON boundary reading.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Map, Value};
use tracing::warn;

use crate::boundary::BoundaryRecord;

/// Read state boundaries from a GeoJSON FeatureCollection file.
pub(crate) fn read_geojson_boundaries(path: &Path, name_property: &str) -> Result<Vec<BoundaryRecord>> {
    let bytes = fs::read(path)
        .with_context(|| format!("[io::geojson] Failed to read GeoJSON file: {}", path.display()))?;
    read_geojson_bytes(&bytes, name_property)
        .with_context(|| format!("[io::geojson] Failed to parse {}", path.display()))
}

/// Read state boundaries from GeoJSON bytes.
/// Features without a name or without polygonal geometry are skipped.
pub(crate) fn read_geojson_bytes(bytes: &[u8], name_property: &str) -> Result<Vec<BoundaryRecord>> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Invalid JSON")?;
    if value["type"].as_str() != Some("FeatureCollection") {
        bail!("[io::geojson] Expected a FeatureCollection");
    }
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson] FeatureCollection has no features array"))?;

    let mut records = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let Some(name) = feature["properties"].as_object().and_then(|props| property_str(props, name_property)) else {
            warn!(feature = idx, property = name_property, "[io::geojson] feature has no name; skipped");
            continue;
        };

        match parse_geometry(&feature["geometry"]).with_context(|| format!("[io::geojson] Bad geometry for {name:?}"))? {
            Some(geometry) => records.push(BoundaryRecord::new(name, geometry)),
            None => warn!(feature = idx, name, "[io::geojson] feature is not polygonal; skipped"),
        }
    }
    Ok(records)
}

/// Look up a string property, falling back to a case-insensitive key match.
fn property_str<'a>(props: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    props.get(key)
        .or_else(|| props.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)).map(|(_, v)| v))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Convert a Polygon or MultiPolygon geometry; other geometry types yield `None`.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let coords = &geometry["coordinates"];
    match geometry["type"].as_str() {
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon(coords)?]))),
        Some("MultiPolygon") => {
            let polygons = coords.as_array()
                .ok_or_else(|| anyhow!("MultiPolygon coordinates must be an array"))?
                .iter()
                .map(parse_polygon)
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

/// Parse `[exterior, hole, hole, ...]` ring arrays into a polygon.
fn parse_polygon(rings: &Value) -> Result<Polygon<f64>> {
    let rings = rings.as_array()
        .ok_or_else(|| anyhow!("Polygon coordinates must be an array of rings"))?;
    let (exterior, interiors) = rings.split_first()
        .ok_or_else(|| anyhow!("Polygon has no exterior ring"))?;

    Ok(Polygon::new(
        parse_ring(exterior)?,
        interiors.iter().map(parse_ring).collect::<Result<Vec<_>>>()?,
    ))
}

/// Parse a ring `[[x, y], ...]`, closing it if needed.
fn parse_ring(ring: &Value) -> Result<LineString<f64>> {
    let positions = ring.as_array()
        .ok_or_else(|| anyhow!("Ring must be an array of positions"))?;

    let mut points = positions.iter()
        .map(|position| {
            let x = position[0].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
            let y = position[1].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    // Ensure ring is closed (first point == last point)
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}
