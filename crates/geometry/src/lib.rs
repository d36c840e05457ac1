//! Launch azimuth geometry.
//!
//! The inertial azimuth comes from the spherical-triangle relation
//! `sin β = cos i / cos φ`. The rotating-frame heading is found by removing the
//! launch site's eastward velocity from the target orbital velocity.
use std::f64::consts::PI;

use launch_core::constants::FULL_CIRCLE_DEG;
use launch_core::units::rad_to_deg;
use launch_core::vector::{self, Vector2};
use launch_orbits::site_velocity;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// `cos i / cos φ` fell outside `[-1, 1]`, so no launch azimuth reaches the inclination.
    #[error("no launch azimuth reaches this inclination: sin(azimuth) would be {sine}")]
    Domain { sine: f64 },
}

/// Inertial flight-path azimuth (radians from north, in `[-π/2, π/2]`).
pub fn inertial_azimuth(inclination_rad: f64, latitude_rad: f64) -> Result<f64, GeometryError> {
    let sine = inclination_rad.cos() / latitude_rad.cos();
    if !sine.is_finite() || sine.abs() > 1.0 {
        return Err(GeometryError::Domain { sine });
    }
    Ok(sine.asin())
}

/// The other node crossing that reaches the same inclination.
pub fn complementary_azimuth(inertial_azimuth_rad: f64) -> f64 {
    PI - inertial_azimuth_rad
}

/// Target orbital velocity seen from the rotating launch site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingFrameSolution {
    /// Compass heading in radians, `(-π, π]`.
    pub heading_rad: f64,
    pub east_m_s: f64,
    pub north_m_s: f64,
    /// Speed the vehicle must supply itself.
    pub boost_m_s: f64,
}

impl RotatingFrameSolution {
    pub fn heading_deg(&self) -> f64 {
        normalize_heading_deg(rad_to_deg(self.heading_rad))
    }
}

/// Subtract the site's rotational velocity from the inertial target velocity.
pub fn rotating_frame_solution(
    latitude_rad: f64,
    inertial_azimuth_rad: f64,
    orbital_speed: f64,
    equatorial_rotational_speed: f64,
) -> RotatingFrameSolution {
    let target: Vector2 = vector::from_azimuth(orbital_speed, inertial_azimuth_rad);
    let relative = vector::sub(&target, &site_velocity(equatorial_rotational_speed, latitude_rad));
    RotatingFrameSolution {
        heading_rad: vector::azimuth(&relative),
        east_m_s: relative[0],
        north_m_s: relative[1],
        boost_m_s: vector::norm(&relative),
    }
}

/// Fold a heading in degrees into `[0, 360)`.
pub fn normalize_heading_deg(heading_deg: f64) -> f64 {
    let wrapped = if heading_deg < 0.0 {
        heading_deg + FULL_CIRCLE_DEG
    } else {
        heading_deg
    };
    if (0.0..FULL_CIRCLE_DEG).contains(&wrapped) {
        wrapped
    } else {
        // Tiny negatives round up to exactly 360 above.
        let folded = wrapped.rem_euclid(FULL_CIRCLE_DEG);
        if folded >= FULL_CIRCLE_DEG { 0.0 } else { folded }
    }
}
