//! Star construction from the two catalog row layouts.
//!
//! A [`CurrentStarRow`] carries heliocentric galactic coordinates in parsecs;
//! a [`LegacyStarRow`] carries a distance in light-years plus sexagesimal
//! RA/Dec. Both produce a [`CelestialBody`] with [`BodyKind::Star`], deriving
//! mass and radius from the spectral class when the row leaves them out.
//!
//! A star named "Sun" (any case) is pinned to the origin with exactly one
//! solar radius no matter what the row says.

use universe_core::angle::{parse_declination, parse_right_ascension};
use universe_core::constants::{SOLAR_RADIUS_KM, SUN_ABSOLUTE_MAGNITUDE};
use universe_core::units::{ly_to_parsecs, parsecs_to_ly, solar_masses_to_kg, solar_radii_to_km};
use universe_core::{EquatorialPosition, GalacticPosition, UniverseError, Vector3};

use super::{BodyKind, CelestialBody, SpectralClassification, StarInfo};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row grammar a star was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CatalogFormat {
    /// `hip, habitable, name, class, dist_pc, xg, yg, zg, [absmag]`
    Current,
    /// `system, name, class, dist_ly, ra, dec, mass, absmag`
    Legacy,
}

impl std::fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFormat::Current => write!(f, "current"),
            CatalogFormat::Legacy => write!(f, "legacy"),
        }
    }
}

pub fn is_sun(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case("sun")
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentStarRow {
    pub hip_id: u32,
    pub habitable: bool,
    pub name: String,
    pub spectral_class: String,
    pub distance_pc: f64,
    pub galactic: GalacticPosition,
    pub absolute_magnitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyStarRow {
    pub system: String,
    pub name: String,
    pub spectral_class: String,
    pub distance_ly: f64,
    pub ra: String,
    pub dec: String,
    /// `None` or non-positive means "estimate from the spectral class".
    pub mass_solar: Option<f64>,
    pub absolute_magnitude: Option<f64>,
}

/// Why a legacy star was placed at the origin instead of its coordinates.
#[derive(Debug)]
pub enum PositionFallback {
    /// RA or Dec was empty or `0`, or the distance was zero.
    MissingCoordinates,
    /// RA or Dec did not parse or was out of range.
    Invalid(UniverseError),
}

impl std::fmt::Display for PositionFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionFallback::MissingCoordinates => write!(f, "missing coordinate data"),
            PositionFallback::Invalid(e) => write!(f, "{}", e),
        }
    }
}

fn default_magnitude(name: &str) -> f64 {
    if is_sun(name) {
        SUN_ABSOLUTE_MAGNITUDE
    } else {
        0.0
    }
}

fn estimate_mass_solar(name: &str, classification: &SpectralClassification) -> f64 {
    if is_sun(name) {
        1.0
    } else {
        classification.estimate_mass_solar()
    }
}

fn radius_km(name: &str, classification: &SpectralClassification, mass_solar: f64) -> f64 {
    if is_sun(name) {
        SOLAR_RADIUS_KM
    } else {
        solar_radii_to_km(classification.estimate_radius_solar(mass_solar))
    }
}

fn legacy_position(row: &LegacyStarRow) -> Result<Vector3, PositionFallback> {
    let missing = |s: &str| s.is_empty() || s == "0";
    if missing(&row.ra) || missing(&row.dec) || row.distance_ly == 0.0 {
        return Err(PositionFallback::MissingCoordinates);
    }

    let ra = parse_right_ascension(&row.ra).map_err(PositionFallback::Invalid)?;
    let dec = parse_declination(&row.dec).map_err(PositionFallback::Invalid)?;
    let equatorial = EquatorialPosition::new(ra, dec).map_err(PositionFallback::Invalid)?;
    Ok(equatorial.to_cartesian(row.distance_ly))
}

impl CelestialBody {
    /// Builds a star from a current-format row.
    ///
    /// Mass is always estimated (the layout has no mass column); the galactic
    /// coordinates, scaled to light-years, become the position.
    ///
    /// ```
    /// use universe_catalog::body::{CelestialBody, CurrentStarRow};
    /// use universe_core::GalacticPosition;
    ///
    /// let star = CelestialBody::from_current_row(CurrentStarRow {
    ///     hip_id: 71683,
    ///     habitable: false,
    ///     name: "Alpha Centauri".into(),
    ///     spectral_class: "G2V".into(),
    ///     distance_pc: 4.3,
    ///     galactic: GalacticPosition::new(4.3, 0.0, 0.0),
    ///     absolute_magnitude: Some(4.38),
    /// });
    /// assert!((star.position.x - 14.024708).abs() < 1e-9);
    /// assert!((star.as_star().unwrap().distance_ly - 14.024708).abs() < 1e-9);
    /// ```
    pub fn from_current_row(row: CurrentStarRow) -> Self {
        let spectral_class = row.spectral_class.trim().to_string();
        let classification = SpectralClassification::parse(&spectral_class);
        let mass_solar = estimate_mass_solar(&row.name, &classification);

        let position = if is_sun(&row.name) {
            Vector3::zeros()
        } else {
            row.galactic.to_simulation()
        };

        let info = StarInfo {
            hip_id: row.hip_id,
            habitable: row.habitable,
            classification,
            distance_pc: row.distance_pc,
            distance_ly: parsecs_to_ly(row.distance_pc),
            galactic: Some(row.galactic),
            absolute_magnitude: row
                .absolute_magnitude
                .unwrap_or_else(|| default_magnitude(&row.name)),
            system: None,
            format: CatalogFormat::Current,
            spectral_class,
        };

        Self {
            radius_km: radius_km(&row.name, &classification, mass_solar),
            mass_kg: solar_masses_to_kg(mass_solar),
            position,
            name: row.name,
            kind: BodyKind::Star(info),
        }
    }

    /// Builds a star from a legacy row.
    ///
    /// Coordinates that are missing, malformed or out of range place the star
    /// at the origin; the reason is returned alongside so the caller can
    /// report it. The row itself is never rejected here.
    pub fn from_legacy_row(row: LegacyStarRow) -> (Self, Option<PositionFallback>) {
        let spectral_class = row.spectral_class.trim().to_string();
        let classification = SpectralClassification::parse(&spectral_class);
        let mass_solar = match row.mass_solar {
            Some(m) if m > 0.0 && m.is_finite() => m,
            _ => estimate_mass_solar(&row.name, &classification),
        };

        let (position, fallback) = if is_sun(&row.name) {
            (Vector3::zeros(), None)
        } else {
            match legacy_position(&row) {
                Ok(p) => (p, None),
                Err(reason) => (Vector3::zeros(), Some(reason)),
            }
        };

        let info = StarInfo {
            hip_id: 0,
            habitable: false,
            classification,
            distance_pc: ly_to_parsecs(row.distance_ly),
            distance_ly: row.distance_ly,
            galactic: None,
            absolute_magnitude: row
                .absolute_magnitude
                .unwrap_or_else(|| default_magnitude(&row.name)),
            system: Some(row.system),
            format: CatalogFormat::Legacy,
            spectral_class,
        };

        let body = Self {
            radius_km: radius_km(&row.name, &classification, mass_solar),
            mass_kg: solar_masses_to_kg(mass_solar),
            position,
            name: row.name,
            kind: BodyKind::Star(info),
        };
        (body, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use universe_core::constants::SOLAR_MASS_KG;

    const EPSILON: f64 = 1e-9;

    fn current(name: &str, class: &str, pc: f64, g: (f64, f64, f64)) -> CurrentStarRow {
        CurrentStarRow {
            hip_id: 0,
            habitable: false,
            name: name.to_string(),
            spectral_class: class.to_string(),
            distance_pc: pc,
            galactic: GalacticPosition::new(g.0, g.1, g.2),
            absolute_magnitude: None,
        }
    }

    fn legacy(name: &str, class: &str, ly: f64, ra: &str, dec: &str) -> LegacyStarRow {
        LegacyStarRow {
            system: "Test".to_string(),
            name: name.to_string(),
            spectral_class: class.to_string(),
            distance_ly: ly,
            ra: ra.to_string(),
            dec: dec.to_string(),
            mass_solar: None,
            absolute_magnitude: None,
        }
    }

    #[test]
    fn test_current_distance_invariant() {
        for pc in [0.0, 1.0, 4.3, 12.5, 250.0] {
            let star = CelestialBody::from_current_row(current("X", "K1V", pc, (pc, 0.0, 0.0)));
            let info = star.as_star().unwrap();
            assert!((info.distance_ly - info.distance_pc * 3.26156).abs() < EPSILON);
        }
    }

    #[test]
    fn test_sun_override_current() {
        let star = CelestialBody::from_current_row(current("sUN", "B0 I", 9.0, (5.0, 5.0, 5.0)));
        assert_eq!(star.position, Vector3::zeros());
        assert_eq!(star.radius_km, SOLAR_RADIUS_KM);
        assert!((star.mass_kg - SOLAR_MASS_KG).abs() < 1.0);
        assert_eq!(star.as_star().unwrap().absolute_magnitude, 4.85);
    }

    #[test]
    fn test_sun_override_legacy() {
        let mut row = legacy("Sun", "G2V", 0.0, "0", "0");
        row.mass_solar = Some(1.0);
        let (star, fallback) = CelestialBody::from_legacy_row(row);
        assert!(fallback.is_none());
        assert_eq!(star.position, Vector3::zeros());
        assert_eq!(star.radius_km, SOLAR_RADIUS_KM);
        assert_eq!(star.as_star().unwrap().absolute_magnitude, 4.85);
    }

    #[test]
    fn test_m0_mass_estimate() {
        let star = CelestialBody::from_current_row(current("Lacaille", "M0", 3.0, (1.0, 1.0, 1.0)));
        assert!((star.mass_kg / SOLAR_MASS_KG - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_legacy_equatorial_position() {
        let (star, fallback) =
            CelestialBody::from_legacy_row(legacy("Vega", "A0V", 25.0, "06:00:00", "+00:00:00"));
        assert!(fallback.is_none());
        assert!(star.position.x.abs() < EPSILON);
        assert!((star.position.y - 25.0).abs() < EPSILON);
        assert!(star.position.z.abs() < EPSILON);

        let info = star.as_star().unwrap();
        assert!((info.distance_pc - 25.0 / 3.26156).abs() < EPSILON);
        assert_eq!(info.format, CatalogFormat::Legacy);
        assert_eq!(info.galactic, None);
    }

    #[test]
    fn test_legacy_missing_coordinates_fall_back() {
        let (star, fallback) = CelestialBody::from_legacy_row(legacy("A", "G", 5.0, "0", "+10:00:00"));
        assert_eq!(star.position, Vector3::zeros());
        assert!(matches!(fallback, Some(PositionFallback::MissingCoordinates)));

        let (_, fallback) = CelestialBody::from_legacy_row(legacy("B", "G", 0.0, "01:00:00", "+10:00:00"));
        assert!(matches!(fallback, Some(PositionFallback::MissingCoordinates)));
    }

    #[test]
    fn test_legacy_invalid_coordinates_fall_back() {
        let (star, fallback) =
            CelestialBody::from_legacy_row(legacy("C", "G", 5.0, "25:00:00", "+10:00:00"));
        assert_eq!(star.position, Vector3::zeros());
        assert!(matches!(fallback, Some(PositionFallback::Invalid(_))));

        let (_, fallback) = CelestialBody::from_legacy_row(legacy("D", "G", 5.0, "01:00:00", "+95:00:00"));
        assert!(matches!(fallback, Some(PositionFallback::Invalid(_))));

        let (_, fallback) = CelestialBody::from_legacy_row(legacy("E", "G", 5.0, "1h2m", "+10:00:00"));
        assert!(matches!(fallback, Some(PositionFallback::Invalid(_))));
    }

    #[test]
    fn test_legacy_explicit_mass_drives_radius() {
        let mut row = legacy("Proxima", "M5.5Ve", 4.24, "14:29:43", "-62:40:46");
        row.mass_solar = Some(0.12);
        let (star, _) = CelestialBody::from_legacy_row(row);
        assert!((star.mass_kg / SOLAR_MASS_KG - 0.12).abs() < EPSILON);
        let expected = libm::pow(0.12, 0.8) * SOLAR_RADIUS_KM;
        assert!((star.radius_km - expected).abs() < 1e-6);
    }

    #[test]
    fn test_legacy_non_positive_mass_is_estimated() {
        let mut row = legacy("Ghost", "K0V", 10.0, "01:00:00", "+10:00:00");
        row.mass_solar = Some(0.0);
        let (star, _) = CelestialBody::from_legacy_row(row);
        assert!((star.mass_kg / SOLAR_MASS_KG - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_legacy_non_finite_mass_is_estimated() {
        for mass in [f64::NAN, f64::INFINITY] {
            let mut row = legacy("Ghost", "K0V", 10.0, "01:00:00", "+10:00:00");
            row.mass_solar = Some(mass);
            let (star, _) = CelestialBody::from_legacy_row(row);
            assert!(star.mass_kg.is_finite());
            assert!((star.mass_kg / SOLAR_MASS_KG - 0.8).abs() < EPSILON);
        }
    }

    #[test]
    fn test_mass_and_radius_positive() {
        for class in ["", "O", "B9", "A5 III", "M9", "L", "T5", "D", "Q", "X", "??"] {
            let star = CelestialBody::from_current_row(current("S", class, 1.0, (1.0, 0.0, 0.0)));
            assert!(star.mass_kg > 0.0, "{}", class);
            assert!(star.radius_km > 0.0, "{}", class);
        }
    }
}
