use super::core::Angle;
use crate::constants::HALF_PI;
use crate::{MathErrorKind, UniverseError};

/// Checks that right ascension lies in `[0h, 24h)`.
///
/// Unlike a general longitude, catalog RA is not wrapped: a value of `25:00:00`
/// signals a corrupt row, so it is rejected.
pub fn validate_right_ascension(angle: Angle) -> Result<Angle, UniverseError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(UniverseError::math_error(
            "validate_right_ascension",
            MathErrorKind::NotFinite,
            "RA not finite",
        ));
    }

    if (0.0..24.0).contains(&angle.hours()) {
        return Ok(angle);
    }

    Err(UniverseError::math_error(
        "validate_right_ascension",
        MathErrorKind::OutOfRange,
        &format!("RA {:.4}h out of range [0h, 24h)", angle.hours()),
    ))
}

/// Checks that declination lies in `[-90°, +90°]`.
pub fn validate_declination(angle: Angle) -> Result<Angle, UniverseError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(UniverseError::math_error(
            "validate_declination",
            MathErrorKind::NotFinite,
            "Dec not finite",
        ));
    }

    // Tolerate the rounding that DEG_TO_RAD introduces at exactly ±90°.
    if rad.abs() <= HALF_PI + 1e-12 {
        return Ok(angle);
    }

    Err(UniverseError::math_error(
        "validate_declination",
        MathErrorKind::OutOfRange,
        &format!("Dec {:.2}° out of range [-90°, +90°]", angle.degrees()),
    ))
}
