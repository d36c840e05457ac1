//! Celestial bodies: validated physical parameters plus a named catalog.
//!
//! A `BodyModel` is built once per run and passed by reference into every
//! calculation; nothing here is mutated after construction.

use launch_config::BodyConfig;
use launch_core::constants::GRAVITATIONAL_CONSTANT;
use launch_core::units::deg_to_rad;
use launch_orbits::{
    circular_period, circular_speed, equatorial_rotation_speed, surface_rotation_speed,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    #[error("body '{body}': {field} must be positive and finite, got {value}")]
    InvalidParameter {
        body: String,
        field: &'static str,
        value: f64,
    },
    #[error("body '{0}' not found in catalog")]
    NotFound(String),
}

/// Physical constants of a spherical, uniformly rotating body plus its mission defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyModel {
    name: String,
    mass_kg: f64,
    radius_m: f64,
    gravitational_constant: f64,
    rotation_period_s: f64,
    default_altitude_m: f64,
    default_latitude_deg: f64,
}

impl BodyModel {
    pub fn new(
        name: impl Into<String>,
        mass_kg: f64,
        radius_m: f64,
        gravitational_constant: f64,
        rotation_period_s: f64,
        default_altitude_m: f64,
        default_latitude_deg: f64,
    ) -> Result<Self, BodyError> {
        let name = name.into();
        for (field, value) in [
            ("mass_kg", mass_kg),
            ("radius_m", radius_m),
            ("gravitational_constant", gravitational_constant),
            ("rotation_period_s", rotation_period_s),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BodyError::InvalidParameter {
                    body: name,
                    field,
                    value,
                });
            }
        }
        Ok(Self {
            name,
            mass_kg,
            radius_m,
            gravitational_constant,
            rotation_period_s,
            default_altitude_m,
            default_latitude_deg,
        })
    }

    pub fn earth() -> Self {
        Self::builtin("Earth", 5.972e24, 6.371e6, 86_164.0, 300_000.0, 28.5)
    }

    /// Kerbal Space Program's home world.
    pub fn kerbin() -> Self {
        Self::builtin("Kerbin", 5.2916e22, 6.0e5, 21_600.0, 85_000.0, 0.0)
    }

    /// Kerbin rescaled to 6.4x radius with a 24-hour day.
    pub fn kerbin64() -> Self {
        Self::builtin("Kerbin64", 2.1675e24, 3.84e6, 86_400.0, 100_000.0, 0.1)
    }

    fn builtin(
        name: &'static str,
        mass_kg: f64,
        radius_m: f64,
        rotation_period_s: f64,
        default_altitude_m: f64,
        default_latitude_deg: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            mass_kg,
            radius_m,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            rotation_period_s,
            default_altitude_m,
            default_latitude_deg,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn rotation_period_s(&self) -> f64 {
        self.rotation_period_s
    }

    pub fn default_altitude_m(&self) -> f64 {
        self.default_altitude_m
    }

    pub fn default_latitude_deg(&self) -> f64 {
        self.default_latitude_deg
    }

    /// Standard gravitational parameter (m³/s²).
    pub fn mu(&self) -> f64 {
        self.mass_kg * self.gravitational_constant
    }

    /// Circular orbit speed at `altitude_m` above the mean surface.
    pub fn orbital_speed(&self, altitude_m: f64) -> f64 {
        circular_speed(self.mu(), self.radius_m + altitude_m)
    }

    pub fn orbital_period(&self, altitude_m: f64) -> f64 {
        circular_period(self.mu(), self.radius_m + altitude_m)
    }

    /// Surface speed at the equator due to sidereal rotation.
    pub fn equatorial_rotational_speed(&self) -> f64 {
        equatorial_rotation_speed(self.radius_m, self.rotation_period_s)
    }

    /// Eastward speed of a launch site at `latitude_deg`.
    pub fn surface_rotational_speed(&self, latitude_deg: f64) -> f64 {
        surface_rotation_speed(self.radius_m, self.rotation_period_s, deg_to_rad(latitude_deg))
    }
}

impl TryFrom<&BodyConfig> for BodyModel {
    type Error = BodyError;

    fn try_from(config: &BodyConfig) -> Result<Self, Self::Error> {
        BodyModel::new(
            config.name.clone(),
            config.mass_kg,
            config.radius_m,
            config.gravitational_constant,
            config.rotation_period_s,
            config.default_altitude_m,
            config.default_latitude_deg,
        )
    }
}

/// Ordered, name-addressable set of bodies.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<BodyModel>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            bodies: vec![BodyModel::earth(), BodyModel::kerbin(), BodyModel::kerbin64()],
        }
    }

    /// Add bodies loaded from disk. An entry whose name matches an existing body replaces it.
    /// Nothing is merged unless every entry is valid.
    pub fn extend_from_configs(&mut self, configs: &[BodyConfig]) -> Result<(), BodyError> {
        let bodies = configs
            .iter()
            .map(BodyModel::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        for body in bodies {
            match self.position(body.name()) {
                Some(index) => {
                    warn!(body = body.name(), "catalog entry overrides existing body");
                    self.bodies[index] = body;
                }
                None => self.bodies.push(body),
            }
        }
        Ok(())
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Result<&BodyModel, BodyError> {
        self.position(name)
            .map(|index| &self.bodies[index])
            .ok_or_else(|| BodyError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(BodyModel::name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let upper = name.to_uppercase();
        self.bodies
            .iter()
            .position(|body| body.name.to_uppercase() == upper)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
