//! Launch azimuth and delta-v budget for a rotating spherical body.
//!
//! Given a body from the catalog and a target inclination, altitude, and launch latitude,
//! [`mission::compute`] returns the compass heading to fly and how much orbital speed the
//! body's rotation provides for free. Keeping this logic in a library crate lets the CLI
//! and tests share it.

pub mod body;
pub mod mission;
pub mod report;

pub use launch_config as config;
pub use launch_core as primitives;
pub use launch_export as export;
pub use launch_geometry as geometry;
pub use launch_orbits as orbits;

pub use body::{BodyError, BodyModel, Catalog};
pub use mission::{ComputationResult, LaunchError, MissionParameters, compute};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
