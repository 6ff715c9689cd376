use crate::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, HALF_PI, RAD_TO_DEG};

/// An angular measurement stored as radians.
///
/// ```
/// use universe_core::Angle;
///
/// let ra = Angle::from_hours(6.0);
/// assert!((ra.degrees() - 90.0).abs() < 1e-10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// One hour of right ascension is 15 degrees.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * DEGREES_PER_HOUR)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_radians(self.rad.abs())
    }
}

impl std::ops::Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.rad + rhs.rad)
    }
}

impl std::ops::Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.rad - rhs.rad)
    }
}

impl std::ops::Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.rad)
    }
}

impl std::ops::Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.rad * rhs)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_unit_conversions() {
        let a = Angle::from_degrees(45.0);
        assert!((a.radians() - std::f64::consts::FRAC_PI_4).abs() < EPSILON);
        assert!((a.hours() - 3.0).abs() < EPSILON);
        assert!((Angle::from_hours(24.0).degrees() - 360.0).abs() < EPSILON);
        assert_eq!(Angle::from_radians(1.5).radians(), 1.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Angle::from_degrees(30.0);
        let b = Angle::from_degrees(15.0);
        assert!(((a + b).degrees() - 45.0).abs() < EPSILON);
        assert!(((a - b).degrees() - 15.0).abs() < EPSILON);
        assert!(((a * 2.0).degrees() - 60.0).abs() < EPSILON);
        assert!(((-a).degrees() + 30.0).abs() < EPSILON);
        assert!(((-a).abs().degrees() - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.1}", Angle::from_degrees(12.25)), "12.2°");
        assert_eq!(format!("{}", Angle::ZERO), "0°");
    }
}
