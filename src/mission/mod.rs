//! Launch solution pipeline: validate the mission, then derive orbital speed, site rotation,
//! inertial azimuth, and the heading flown relative to the rotating surface.

mod validation;

use launch_core::constants::{DEFAULT_INCLINATION_DEG, FULL_CIRCLE_DEG, HEADING_TOLERANCE_DEG};
use launch_core::units::deg_to_rad;
use launch_geometry::{
    GeometryError, complementary_azimuth, inertial_azimuth, rotating_frame_solution,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::body::BodyModel;

/// Errors that stop a launch computation. None of them leave a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaunchError {
    #[error("targeted orbital altitude must be above sea level, got {altitude_m} m")]
    InvalidAltitude { altitude_m: f64 },
    #[error(
        "orbital inclination {inclination_deg}° cannot be reached directly from launch latitude {latitude_deg}°"
    )]
    InvalidInclinationLatitude {
        inclination_deg: f64,
        latitude_deg: f64,
    },
    #[error(transparent)]
    Domain(#[from] GeometryError),
}

/// Target orbit and launch site, in degrees and metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionParameters {
    pub inclination_deg: f64,
    pub altitude_m: f64,
    pub latitude_deg: f64,
}

impl MissionParameters {
    /// Fill any missing value from the body's mission defaults (and the standard inclination).
    pub fn with_defaults(
        body: &BodyModel,
        inclination_deg: Option<f64>,
        altitude_m: Option<f64>,
        latitude_deg: Option<f64>,
    ) -> Self {
        Self {
            inclination_deg: inclination_deg.unwrap_or(DEFAULT_INCLINATION_DEG),
            altitude_m: altitude_m.unwrap_or(body.default_altitude_m()),
            latitude_deg: latitude_deg.unwrap_or(body.default_latitude_deg()),
        }
    }

    pub fn validate(&self) -> Result<(), LaunchError> {
        validation::check_altitude(self.altitude_m)?;
        validation::check_inclination_latitude(self.inclination_deg, self.latitude_deg)
    }
}

/// Everything derived from one body and one set of mission parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    pub body: String,
    /// Circular orbit speed at the target altitude (m/s).
    pub orbital_speed: f64,
    /// Equatorial surface speed from rotation (m/s).
    pub rotational_speed: f64,
    pub inertial_azimuth_rad: f64,
    /// Compass heading in `[0, 360)`.
    pub heading_deg: f64,
    /// Heading for the other node crossing, when it differs from `heading_deg`.
    pub alternate_heading_deg: Option<f64>,
    /// Speed the vehicle must supply, before gravity and drag losses (m/s).
    pub boost_speed: f64,
    /// Speed credited by the body's rotation (m/s).
    pub delta_v: f64,
    pub east_m_s: f64,
    pub north_m_s: f64,
    pub orbital_period_s: f64,
}

/// Compute the launch heading and delta-v budget for `params` around `body`.
pub fn compute(
    body: &BodyModel,
    params: &MissionParameters,
) -> Result<ComputationResult, LaunchError> {
    params.validate()?;

    let inclination = deg_to_rad(params.inclination_deg);
    let latitude = deg_to_rad(params.latitude_deg);

    let orbital_speed = body.orbital_speed(params.altitude_m);
    let rotational_speed = body.equatorial_rotational_speed();
    debug!(orbital_speed, rotational_speed, "body speeds");

    let beta = inertial_azimuth(inclination, latitude)?;
    debug!(inertial_azimuth_rad = beta, "inertial azimuth");

    let primary = rotating_frame_solution(latitude, beta, orbital_speed, rotational_speed);
    let heading_deg = primary.heading_deg();

    let alternate = rotating_frame_solution(
        latitude,
        complementary_azimuth(beta),
        orbital_speed,
        rotational_speed,
    )
    .heading_deg();
    let alternate_heading_deg =
        (angular_separation_deg(heading_deg, alternate) > HEADING_TOLERANCE_DEG).then_some(alternate);

    let result = ComputationResult {
        body: body.name().to_string(),
        orbital_speed,
        rotational_speed,
        inertial_azimuth_rad: beta,
        heading_deg,
        alternate_heading_deg,
        boost_speed: primary.boost_m_s,
        delta_v: orbital_speed - primary.boost_m_s,
        east_m_s: primary.east_m_s,
        north_m_s: primary.north_m_s,
        orbital_period_s: body.orbital_period(params.altitude_m),
    };
    info!(
        body = %result.body,
        heading_deg = result.heading_deg,
        delta_v = result.delta_v,
        "launch solution computed"
    );
    Ok(result)
}

fn angular_separation_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % FULL_CIRCLE_DEG;
    diff.min(FULL_CIRCLE_DEG - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth_defaults() -> MissionParameters {
        MissionParameters::with_defaults(&BodyModel::earth(), None, None, None)
    }

    #[test]
    fn defaults_come_from_body_and_standard_inclination() {
        let params = earth_defaults();
        assert_eq!(params.inclination_deg, 51.6);
        assert_eq!(params.altitude_m, 300_000.0);
        assert_eq!(params.latitude_deg, 28.5);

        let kerbin = MissionParameters::with_defaults(&BodyModel::kerbin(), Some(6.0), None, None);
        assert_eq!(kerbin.altitude_m, 85_000.0);
        assert_eq!(kerbin.latitude_deg, 0.0);
    }

    #[test]
    fn boost_and_savings_add_up_to_orbital_speed() {
        let result = compute(&BodyModel::earth(), &earth_defaults()).unwrap();
        assert!((result.boost_speed + result.delta_v - result.orbital_speed).abs() < 1e-9);
        let boost = result.east_m_s.hypot(result.north_m_s);
        assert!((boost - result.boost_speed).abs() < 1e-9);
    }

    #[test]
    fn separation_wraps_across_north() {
        assert!((angular_separation_deg(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((angular_separation_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((angular_separation_deg(-10.0, 710.0) - 0.0).abs() < 1e-12);
        assert!((angular_separation_deg(90.0, 90.000_000_000_000_01)).abs() < 1e-9);
    }

    #[test]
    fn domain_errors_surface_distinctly() {
        let params = MissionParameters {
            inclination_deg: 98.0,
            altitude_m: 300_000.0,
            latitude_deg: 85.0,
        };
        assert!(matches!(
            compute(&BodyModel::earth(), &params),
            Err(LaunchError::Domain(GeometryError::Domain { .. }))
        ));
    }
}
