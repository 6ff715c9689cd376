//! Celestial bodies: stars and planets as one tagged type.
//!
//! Every body shares a name, a position in light-years, a mass in kilograms
//! and a radius in kilometers. The per-kind payload lives in [`BodyKind`]:
//! [`StarInfo`] for catalog stars and [`PlanetInfo`] for planets, which refer
//! to their host through a [`BodyId`] rather than a pointer.
//!
//! Construction derives everything that the catalog row does not state:
//!
//! - stars get mass and radius from their [`SpectralClassification`] and a
//!   position from either galactic or equatorial coordinates ([`star`]);
//! - planets convert Earth units and sit on the host's +X axis ([`planet`]).

pub mod planet;
pub mod spectral;
pub mod star;

use std::fmt;

use universe_core::Vector3;

pub use planet::PlanetRow;
pub use spectral::{LuminosityClass, Rgb, SpectralClassification, MAX_RADIUS_SOLAR};
pub use star::{is_sun, CatalogFormat, CurrentStarRow, LegacyStarRow, PositionFallback};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable index of a body inside a [`Catalog`](crate::Catalog).
///
/// Ids are never reused: removing a body leaves a hole in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CelestialBody {
    pub name: String,
    /// Sun-centered position in light-years.
    pub position: Vector3,
    pub mass_kg: f64,
    pub radius_km: f64,
    pub kind: BodyKind,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyKind {
    Star(StarInfo),
    Planet(PlanetInfo),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarInfo {
    /// Hipparcos number, 0 when the row had none.
    pub hip_id: u32,
    pub habitable: bool,
    /// Class string as it appeared in the catalog, trimmed.
    pub spectral_class: String,
    pub classification: SpectralClassification,
    pub distance_pc: f64,
    pub distance_ly: f64,
    /// Source galactic coordinates, present for current-format rows only.
    pub galactic: Option<universe_core::GalacticPosition>,
    pub absolute_magnitude: f64,
    /// System name of a legacy row.
    pub system: Option<String>,
    pub format: CatalogFormat,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetInfo {
    pub host: BodyId,
    pub distance_au: f64,
    pub has_rings: bool,
}

impl CelestialBody {
    pub fn as_star(&self) -> Option<&StarInfo> {
        match &self.kind {
            BodyKind::Star(info) => Some(info),
            BodyKind::Planet(_) => None,
        }
    }

    pub fn as_planet(&self) -> Option<&PlanetInfo> {
        match &self.kind {
            BodyKind::Planet(info) => Some(info),
            BodyKind::Star(_) => None,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star(_))
    }

    /// Radius in light-years, the unit positions are measured in.
    pub fn radius_ly(&self) -> f64 {
        universe_core::units::km_to_ly(self.radius_km)
    }

    pub fn distance_to(&self, point: &Vector3) -> f64 {
        self.position.distance_to(point)
    }

    /// Render color. Planets are drawn white.
    pub fn color(&self) -> Rgb {
        match &self.kind {
            BodyKind::Star(info) => info.classification.color(),
            BodyKind::Planet(_) => Rgb::WHITE,
        }
    }
}

/// Formats a value as `m.mm×10^e`, the notation used for masses in kilograms.
///
/// ```
/// use universe_catalog::body::format_scientific;
///
/// assert_eq!(format_scientific(1.989e30), "1.99×10^30");
/// assert_eq!(format_scientific(0.0), "0");
/// ```
pub fn format_scientific(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let mut exp = libm::floor(libm::log10(value.abs())) as i32;
    let mut mantissa = libm::round(value / libm::pow(10.0, exp as f64) * 100.0) / 100.0;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }
    format!("{:.2}×10^{}", mantissa, exp)
}
