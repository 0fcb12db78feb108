//! State boundary polygons keyed by full state name.

use std::path::Path;

use anyhow::{bail, Result};
use geo::MultiPolygon;

use crate::io;

/// One state polygon from the boundary dataset. Geometry is canonical and never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryRecord {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

impl BoundaryRecord {
    pub fn new(name: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self { name: name.into(), geometry }
    }
}

/// Boundary file formats understood by [`read_boundaries`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryFormat {
    GeoJson,
    Shapefile,
}

impl BoundaryFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" | "geojson" => Ok(Self::GeoJson),
            "shp" => Ok(Self::Shapefile),
            _ => bail!("[boundary] Unsupported boundary file {}; expected .geojson, .json or .shp", path.display()),
        }
    }
}

/// Read boundary records from a GeoJSON or Shapefile, taking the state name from `name_property`.
pub fn read_boundaries(path: &Path, name_property: &str) -> Result<Vec<BoundaryRecord>> {
    match BoundaryFormat::from_path(path)? {
        BoundaryFormat::GeoJson => io::read_geojson_boundaries(path, name_property),
        BoundaryFormat::Shapefile => io::read_shapefile_boundaries(path, name_property),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(BoundaryFormat::from_path(Path::new("us-states.json")).unwrap(), BoundaryFormat::GeoJson);
        assert_eq!(BoundaryFormat::from_path(Path::new("a/b.GeoJSON")).unwrap(), BoundaryFormat::GeoJson);
        assert_eq!(BoundaryFormat::from_path(Path::new("cb_2018_us_state_20m.shp")).unwrap(), BoundaryFormat::Shapefile);
        assert!(BoundaryFormat::from_path(Path::new("states.kml")).is_err());
        assert!(BoundaryFormat::from_path(Path::new("states")).is_err());
    }
}
