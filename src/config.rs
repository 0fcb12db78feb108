//! Run configuration for both stages.
//!
//! Every field has a default that reproduces the published 2024 map, so a config file only
//! needs to name what differs. Command-line flags are applied on top by the caller.

use std::{fs, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Top-level configuration file layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub aggregate: AggregateConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Load a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("[config] Failed to parse config file: {}", path.display()))
    }
}

/// Names of the input columns the aggregator reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub state: String,
    pub level1: String,
    pub level2: String,
    pub dc_fast: String,
    pub notes: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            state: "State".into(),
            level1: "EV Level1 EVSE Num".into(),
            level2: "EV Level2 EVSE Num".into(),
            dc_fast: "EV DC Fast Count".into(),
            notes: "EV Other Info".into(),
        }
    }
}

impl ColumnMap {
    /// All required columns, in a fixed order.
    pub fn required(&self) -> [&str; 5] {
        [&self.state, &self.level1, &self.level2, &self.dc_fast, &self.notes]
    }
}

/// How charger counts are pulled out of the free-text notes column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesMode {
    /// Sum every digit run in the row's notes.
    #[default]
    Scan,
    /// Always zero. Matches totals published before notes were scanned.
    Legacy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregateConfig {
    pub columns: ColumnMap,
    pub delimiter: char,
    pub notes: NotesMode,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self { columns: ColumnMap::default(), delimiter: ',', notes: NotesMode::Scan }
    }
}

/// Display-only repositioning of one state: scale about its centroid, then translate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Inset {
    pub state: String,
    pub scale: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Inset {
    pub fn new(state: &str, scale: f64, dx: f64, dy: f64) -> Self {
        Self { state: state.into(), scale, dx, dy }
    }
}

/// Output image encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// Guess the format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

/// Largest canvas side accepted, in pixels.
const MAX_CANVAS_PX: f64 = 32_768.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Summary column holding the state name.
    pub state_column: String,
    /// Summary column holding the value to classify.
    pub value_column: String,
    /// Boundary attribute holding the state name.
    pub name_property: String,
    pub title: String,
    pub subtitle: String,
    pub legend_title: String,
    pub caption: String,
    pub font_family: String,
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub background: String,
    pub insets: Vec<Inset>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            state_column: "State".into(),
            value_column: "Total EVSEs".into(),
            name_property: "name".into(),
            title: "Public EV Charger Station Density in the U.S. (2024)".into(),
            subtitle: "(Stations per 100 miles of public road lanes)".into(),
            legend_title: "Public EV Charger Density".into(),
            caption: "Source: U.S. Department of Energy & Department of Transportation".into(),
            font_family: "sans-serif".into(),
            width_in: 15.0,
            height_in: 10.0,
            dpi: 300,
            background: "#f7f7f7".into(),
            insets: vec![
                Inset::new("Alaska", 0.35, 20.0, -20.0),
                Inset::new("Hawaii", 1.5, 30.0, 10.0),
            ],
        }
    }
}

impl RenderConfig {
    /// Reject page sizes that cannot produce a drawable canvas.
    pub fn validate(&self) -> Result<()> {
        for (field, inches) in [("width_in", self.width_in), ("height_in", self.height_in)] {
            ensure!(inches.is_finite() && inches > 0.0, "[config] {field} must be a positive number of inches, got {inches}");
        }
        ensure!(self.dpi > 0, "[config] dpi must be positive");

        let (width, height) = (self.width_in * self.dpi as f64, self.height_in * self.dpi as f64);
        ensure!(
            width.round() >= 1.0 && height.round() >= 1.0 && width <= MAX_CANVAS_PX && height <= MAX_CANVAS_PX,
            "[config] {}x{} in at {} dpi gives a {width:.0}x{height:.0} px canvas; each side must be 1..={MAX_CANVAS_PX} px",
            self.width_in, self.height_in, self.dpi,
        );
        Ok(())
    }

    /// Canvas size in pixels.
    pub fn canvas_px(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        ((self.width_in * dpi).round() as u32, (self.height_in * dpi).round() as u32)
    }

    /// Convert a typographic point size to pixels at the configured resolution.
    #[inline]
    pub fn pt_to_px(&self, pt: f64) -> f64 { pt * self.dpi as f64 / 72.0 }
}
