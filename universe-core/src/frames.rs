//! Catalog coordinate conventions mapped into simulation space.
//!
//! Simulation space is Sun-centered Cartesian, measured in light-years. Two
//! catalog conventions feed it:
//!
//! - [`EquatorialPosition`]: RA/Dec plus a distance, converted with the
//!   standard spherical-to-Cartesian identity.
//! - [`GalacticPosition`]: heliocentric galactic Cartesian in parsecs, scaled
//!   by the parsec factor and used directly.
//!
//! The two frames are not rotated into each other. Catalogs are expected to
//! use one convention each.

use crate::angle::{validate_declination, validate_right_ascension, Angle};
use crate::units::parsecs_to_ly;
use crate::{UniverseResult, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialPosition {
    ra: Angle,
    dec: Angle,
}

impl EquatorialPosition {
    pub fn new(ra: Angle, dec: Angle) -> UniverseResult<Self> {
        let ra = validate_right_ascension(ra)?;
        let dec = validate_declination(dec)?;
        Ok(Self { ra, dec })
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// Places the direction at `distance_ly` from the origin.
    ///
    /// ```
    /// use universe_core::{Angle, EquatorialPosition};
    ///
    /// let pos = EquatorialPosition::new(Angle::from_hours(6.0), Angle::ZERO).unwrap();
    /// let v = pos.to_cartesian(10.0);
    /// assert!(v.x.abs() < 1e-12 && (v.y - 10.0).abs() < 1e-12);
    /// ```
    pub fn to_cartesian(&self, distance_ly: f64) -> Vector3 {
        Vector3::from_spherical(self.ra.radians(), self.dec.radians()) * distance_ly
    }
}

/// Heliocentric galactic Cartesian coordinates in parsecs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalacticPosition {
    pub x_pc: f64,
    pub y_pc: f64,
    pub z_pc: f64,
}

impl GalacticPosition {
    pub fn new(x_pc: f64, y_pc: f64, z_pc: f64) -> Self {
        Self { x_pc, y_pc, z_pc }
    }

    pub fn distance_pc(&self) -> f64 {
        libm::sqrt(self.x_pc * self.x_pc + self.y_pc * self.y_pc + self.z_pc * self.z_pc)
    }

    /// Converts each axis from parsecs to light-years.
    pub fn to_simulation(&self) -> Vector3 {
        Vector3::new(
            parsecs_to_ly(self.x_pc),
            parsecs_to_ly(self.y_pc),
            parsecs_to_ly(self.z_pc),
        )
    }
}
