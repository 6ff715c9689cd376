use universe_core::units::{au_to_ly, earth_masses_to_kg, earth_radii_to_km};
use universe_core::Vector3;

use super::{BodyId, BodyKind, CelestialBody, PlanetInfo};
use crate::error::RowError;

/// A parsed planet row: `name, star, dfs_au, mass_earth, radius_earth, rings`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRow {
    pub name: String,
    pub star: String,
    pub distance_au: f64,
    pub mass_earth: f64,
    pub radius_earth: f64,
    pub has_rings: bool,
}

/// Offset from the host along the global +X axis. Not an orbit model.
pub fn planet_offset(distance_au: f64) -> Vector3 {
    Vector3::new(au_to_ly(distance_au), 0.0, 0.0)
}

fn positive(field: &'static str, value: f64) -> Result<(), RowError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(RowError::NonPositive { field, value })
    }
}

impl CelestialBody {
    /// Builds a planet around `host`, located at `host_position`.
    ///
    /// Rows with a non-positive mass or radius are rejected so that every
    /// body keeps positive physical extents.
    pub fn planet(row: PlanetRow, host: BodyId, host_position: Vector3) -> Result<Self, RowError> {
        positive("mass", row.mass_earth)?;
        positive("radius", row.radius_earth)?;

        Ok(Self {
            name: row.name,
            position: host_position + planet_offset(row.distance_au),
            mass_kg: earth_masses_to_kg(row.mass_earth),
            radius_km: earth_radii_to_km(row.radius_earth),
            kind: BodyKind::Planet(PlanetInfo {
                host,
                distance_au: row.distance_au,
                has_rings: row.has_rings,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use universe_core::constants::AU_LY;

    fn row(au: f64, mass: f64, radius: f64) -> PlanetRow {
        PlanetRow {
            name: "Saturn".into(),
            star: "Sun".into(),
            distance_au: au,
            mass_earth: mass,
            radius_earth: radius,
            has_rings: true,
        }
    }

    #[test]
    fn test_position_offset_along_x() {
        let host = Vector3::new(1.0, -2.0, 3.0);
        let planet = CelestialBody::planet(row(9.5, 95.2, 9.45), BodyId(0), host).unwrap();
        assert_eq!(planet.position, Vector3::new(1.0 + 9.5 * AU_LY, -2.0, 3.0));
        assert_eq!(planet.mass_kg, 95.2 * 5.972e24);
        assert_eq!(planet.radius_km, 9.45 * 6371.0);

        let info = planet.as_planet().unwrap();
        assert_eq!(info.host, BodyId(0));
        assert!(info.has_rings);
        assert!(!planet.is_star());
    }

    #[test]
    fn test_rejects_non_positive_extents() {
        let err = CelestialBody::planet(row(1.0, 0.0, 1.0), BodyId(0), Vector3::zeros()).unwrap_err();
        assert_eq!(
            err,
            RowError::NonPositive {
                field: "mass",
                value: 0.0
            }
        );
        assert!(CelestialBody::planet(row(1.0, 1.0, -1.0), BodyId(0), Vector3::zeros()).is_err());
    }

    #[test]
    fn test_rejects_non_finite_extents() {
        let extents = [
            (f64::NAN, 1.0),
            (1.0, f64::NAN),
            (f64::INFINITY, 1.0),
            (1.0, f64::INFINITY),
        ];
        for (mass, radius) in extents {
            let result = CelestialBody::planet(row(1.0, mass, radius), BodyId(0), Vector3::zeros());
            assert!(matches!(result, Err(RowError::NonPositive { .. })));
        }
    }
}
