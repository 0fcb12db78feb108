//! IO module for format-specific reading and writing operations.
//!
//! Each format module handles reading and/or writing for a specific file format.
//!
//! # Format Modules
//!
//! - `csv` - station datasets in, state summaries in and out
//! - `geojson` - state boundaries from GeoJSON FeatureCollections
//! - `shp` - state boundaries from ESRI Shapefiles
//! - `svg` - vector map output
//! - `png` - raster map output

mod csv;
mod geojson;
mod png;
mod shp;
mod svg;

pub(crate) use csv::*;
pub(crate) use geojson::*;
pub(crate) use png::*;
pub(crate) use shp::*;
pub(crate) use svg::*;
