//! Core units, constants, and shared primitives for the launch azimuth workspace.

/// Physical and mission constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const GRAVITATIONAL_CONSTANT: f64 = 6.673_84e-11;
    /// Target inclination used when none is supplied (degrees); ISS from the Cape.
    pub const DEFAULT_INCLINATION_DEG: f64 = 51.6;
    /// Two headings closer than this (degrees) are reported as one solution.
    pub const HEADING_TOLERANCE_DEG: f64 = 1e-9;
    /// Degrees in a full compass circle.
    pub const FULL_CIRCLE_DEG: f64 = 360.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }
}

/// Local horizontal velocity helpers, stored as `[east, north]` in m/s.
pub mod vector {
    /// Alias for a local-horizontal vector (east, north).
    pub type Vector2 = [f64; 2];

    /// Build a horizontal vector from a speed and an azimuth measured clockwise from north.
    #[inline]
    pub fn from_azimuth(speed: f64, azimuth_rad: f64) -> Vector2 {
        [speed * azimuth_rad.sin(), speed * azimuth_rad.cos()]
    }

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        v[0].hypot(v[1])
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector2, s: f64) -> Vector2 {
        [v[0] * s, v[1] * s]
    }

    /// Compass azimuth of a vector (radians clockwise from north, in `(-π, π]`).
    #[inline]
    pub fn azimuth(v: &Vector2) -> f64 {
        v[0].atan2(v[1])
    }
}
