//! Left join of boundary polygons against per-state values.

use std::collections::BTreeMap;

use geo::MultiPolygon;
use tracing::{debug, warn};

use crate::{boundary::BoundaryRecord, classify::ColorClass, config::Inset, geom, states};

/// Per-state values read back from a summary file. A `None` value is present but unusable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateValues {
    values: BTreeMap<String, Option<f64>>,
}

impl StateValues {
    pub fn new() -> Self { Self::default() }

    /// Insert a value, keeping the first occurrence of a state. Returns false for duplicates.
    pub fn insert(&mut self, state: impl Into<String>, value: Option<f64>) -> bool {
        let state = state.into();
        if self.values.contains_key(&state) { return false }
        self.values.insert(state, value);
        true
    }

    /// Value for a state; `None` when the state is absent or its value is unusable.
    pub fn get(&self, state: &str) -> Option<f64> {
        self.values.get(state).copied().flatten()
    }

    #[inline] pub fn len(&self) -> usize { self.values.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn states(&self) -> impl Iterator<Item = &str> { self.values.keys().map(String::as_str) }
}

impl FromIterator<(String, Option<f64>)> for StateValues {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (state, value) in iter { values.insert(state, value); }
        values
    }
}

/// A boundary joined with its value. `geometry` is canonical; `display` may carry an inset.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinedState {
    pub name: String,
    pub label: Option<&'static str>,
    pub value: Option<f64>,
    pub class: ColorClass,
    pub geometry: MultiPolygon<f64>,
    pub display: MultiPolygon<f64>,
}

/// Join every boundary record to its value (if any), classify it and build its display geometry.
pub fn join(boundaries: Vec<BoundaryRecord>, values: &StateValues, insets: &[Inset]) -> Vec<JoinedState> {
    for state in values.states() {
        if !boundaries.iter().any(|record| record.name == state) {
            warn!(state, "[join] summary state has no boundary; it will not be drawn");
        }
    }
    for inset in insets {
        if !boundaries.iter().any(|record| record.name == inset.state) {
            debug!(state = %inset.state, "[join] inset state not present in boundaries");
        }
    }

    boundaries.into_iter()
        .map(|BoundaryRecord { name, geometry }| {
            let value = values.get(&name);
            let display = match insets.iter().find(|inset| inset.state == name) {
                Some(inset) => geom::apply_inset(&geometry, inset),
                None => geometry.clone(),
            };
            JoinedState {
                label: states::map_label(&name),
                class: ColorClass::of(value),
                value,
                name,
                geometry,
                display,
            }
        })
        .collect()
}
