//! Input checks that run before any trigonometry.

use super::LaunchError;

pub(super) fn check_altitude(altitude_m: f64) -> Result<(), LaunchError> {
    // NaN fails this comparison as well.
    if altitude_m >= 0.0 && altitude_m.is_finite() {
        Ok(())
    } else {
        Err(LaunchError::InvalidAltitude { altitude_m })
    }
}

pub(super) fn check_inclination_latitude(
    inclination_deg: f64,
    latitude_deg: f64,
) -> Result<(), LaunchError> {
    if inclination_deg.is_finite()
        && latitude_deg.is_finite()
        && inclination_deg.abs() >= latitude_deg.abs()
    {
        Ok(())
    } else {
        Err(LaunchError::InvalidInclinationLatitude {
            inclination_deg,
            latitude_deg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_below_surface_is_rejected() {
        assert_eq!(
            check_altitude(-1.0),
            Err(LaunchError::InvalidAltitude { altitude_m: -1.0 })
        );
        assert!(check_altitude(f64::NAN).is_err());
        assert!(check_altitude(f64::INFINITY).is_err());
        assert!(check_altitude(0.0).is_ok());
    }

    #[test]
    fn inclination_must_not_be_below_latitude() {
        assert!(check_inclination_latitude(10.0, 50.0).is_err());
        assert!(check_inclination_latitude(-10.0, 10.0).is_ok());
        assert!(check_inclination_latitude(28.5, -28.5).is_ok());
        assert!(check_inclination_latitude(51.6, 28.5).is_ok());
        assert!(check_inclination_latitude(f64::NAN, 0.0).is_err());
    }
}
