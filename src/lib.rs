#![doc = "EVSE Atlas public API"]
pub mod aggregate;
pub mod boundary;
pub mod classify;
pub mod config;
mod geom;
mod io;
pub mod join;
pub mod render;
pub mod states;
pub mod station;

#[doc(inline)]
pub use aggregate::{aggregate, AggregateReport, StateAggregate, Summary};

#[doc(inline)]
pub use boundary::{read_boundaries, BoundaryRecord};

#[doc(inline)]
pub use classify::ColorClass;

#[doc(inline)]
pub use config::{AggregateConfig, ColumnMap, Config, ImageFormat, Inset, NotesMode, RenderConfig};

#[doc(inline)]
pub use geom::apply_inset;

#[doc(inline)]
pub use join::{join, JoinedState, StateValues};

#[doc(inline)]
pub use render::{build_scene, RenderReport, Scene};

#[doc(inline)]
pub use station::StationRecord;
