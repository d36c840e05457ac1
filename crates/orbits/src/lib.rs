//! Circular-orbit and surface-rotation helpers for a spherical, uniformly rotating body.
//!
//! All inputs are SI: metres, seconds, and `mu` in m³/s². Spacecraft mass is neglected.
use std::f64::consts::TAU;

use launch_core::vector::{self, Vector2};

/// Speed of a circular orbit of radius `radius_m` about a body with parameter `mu_m3_s2`.
pub fn circular_speed(mu_m3_s2: f64, radius_m: f64) -> f64 {
    (mu_m3_s2 / radius_m).sqrt()
}

/// Period of a circular orbit of radius `radius_m` (seconds).
pub fn circular_period(mu_m3_s2: f64, radius_m: f64) -> f64 {
    TAU * (radius_m.powi(3) / mu_m3_s2).sqrt()
}

/// Tangential speed of a point fixed on the equator.
pub fn equatorial_rotation_speed(radius_m: f64, rotation_period_s: f64) -> f64 {
    TAU * radius_m / rotation_period_s
}

/// Eastward speed of a launch site at `latitude_rad`.
pub fn surface_rotation_speed(radius_m: f64, rotation_period_s: f64, latitude_rad: f64) -> f64 {
    let [east, _] = site_velocity(
        equatorial_rotation_speed(radius_m, rotation_period_s),
        latitude_rad,
    );
    east
}

/// Site velocity as a local `[east, north]` vector; rotation carries no northward part.
pub fn site_velocity(equatorial_speed: f64, latitude_rad: f64) -> Vector2 {
    vector::scale(&[1.0, 0.0], equatorial_speed * latitude_rad.cos())
}
