//! Stage B: join boundaries with state values and draw the choropleth.

mod color;
mod scene;

pub use color::Rgb;
pub use scene::{build_scene, Anchor, Feature, Legend, Ring, Scene, Swatch, TextItem};

use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    boundary::read_boundaries,
    classify::ColorClass,
    config::{ImageFormat, RenderConfig},
    io,
    join::{join, JoinedState, StateValues},
};

/// Counts from a render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub features: usize,
    pub matched: usize,
    pub labels: usize,
    pub classes: BTreeMap<ColorClass, usize>,
}

impl RenderReport {
    fn new(states: &[JoinedState], scene: &Scene) -> Self {
        let mut classes = BTreeMap::new();
        for state in states {
            *classes.entry(state.class).or_default() += 1;
        }
        Self {
            features: states.len(),
            matched: states.iter().filter(|state| state.value.is_some()).count(),
            labels: scene.labels.len(),
            classes,
        }
    }
}

/// Read a summary file back as per-state values, using the configured columns.
pub fn read_state_values(path: &Path, config: &RenderConfig) -> Result<StateValues> {
    io::read_state_values(path, &config.state_column, &config.value_column)
}

/// Write a laid-out scene in the requested format.
pub fn write_scene(scene: &Scene, path: &Path, format: ImageFormat) -> Result<()> {
    match format {
        ImageFormat::Png => io::write_scene_png(scene, path),
        ImageFormat::Svg => io::write_scene_svg(scene, path),
    }
}

/// Read the summary and boundaries, join and classify them, and write the map image.
pub fn run(summary: &Path, boundaries: &Path, output: &Path, format: ImageFormat, config: &RenderConfig) -> Result<RenderReport> {
    info!(path = %summary.display(), column = %config.value_column, "[render] reading state values");
    let values = read_state_values(summary, config)?;

    info!(path = %boundaries.display(), "[render] reading boundaries");
    let records = read_boundaries(boundaries, &config.name_property)?;
    debug!(states = values.len(), boundaries = records.len(), "[render] joining");

    let states = join(records, &values, &config.insets);
    let scene = build_scene(&states, config)?;

    info!(path = %output.display(), format = ?format, width = scene.width, height = scene.height, "[render] writing map");
    write_scene(&scene, output, format)?;
    Ok(RenderReport::new(&states, &scene))
}
