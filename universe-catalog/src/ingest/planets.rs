//! Planet file reader: `name, star, dfs_au, mass_earth, radius_earth, rings`.
//!
//! Planets are read after the star set is final. The host column is resolved
//! with [`Catalog::lookup`], so it may name a star by display name, legacy
//! compound key or `hip<N>`.

use std::io::BufRead;

use tracing::debug;

use super::{is_blank_record, parse_number, split_fields, DiagnosticKind, IngestReport};
use crate::body::{CelestialBody, PlanetRow};
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult, RowError};

const SOURCE: &str = "planet";
const MIN_FIELDS: usize = 6;
const HEADER_PREFIX: &str = "name,star,dfs";

fn rings_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("yes")
}

/// Parses one trimmed, non-blank planet record.
///
/// ```
/// use universe_catalog::ingest::parse_planet_line;
///
/// let row = parse_planet_line("Saturn,Sun,9.58,95.2,9.45,yes").unwrap();
/// assert_eq!(row.star, "Sun");
/// assert!(row.has_rings);
/// ```
pub fn parse_planet_line(line: &str) -> Result<PlanetRow, RowError> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return Err(RowError::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }
    if fields[0].is_empty() {
        return Err(RowError::EmptyField { field: "name" });
    }
    if fields[1].is_empty() {
        return Err(RowError::EmptyField { field: "star" });
    }

    Ok(PlanetRow {
        name: fields[0].to_string(),
        star: fields[1].to_string(),
        distance_au: parse_number("distance", fields[2])?,
        mass_earth: parse_number("mass", fields[3])?,
        radius_earth: parse_number("radius", fields[4])?,
        has_rings: rings_flag(fields[5]),
    })
}

fn attach(row: PlanetRow, catalog: &mut Catalog) -> Result<(), RowError> {
    let host = catalog
        .lookup(&row.star)
        .ok_or_else(|| RowError::UnknownHost(row.star.clone()))?;
    let host_position = catalog
        .star(host)
        .map(|(body, _)| body.position)
        .ok_or_else(|| RowError::UnknownHost(row.star.clone()))?;

    let planet = CelestialBody::planet(row, host, host_position)?;
    debug!("planet {} orbits {}", planet.name, host);
    catalog.insert_planet(planet)?;
    Ok(())
}

/// Reads a planet file against the stars already in `catalog`.
pub fn read_planets<R: BufRead>(
    reader: R,
    catalog: &mut Catalog,
    report: &mut IngestReport,
) -> CatalogResult<()> {
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| CatalogError::Read {
            kind: SOURCE,
            line: line_no,
            source,
        })?;

        if line_no == 1 {
            if !line.trim().to_lowercase().starts_with(HEADER_PREFIX) {
                report.record(
                    SOURCE,
                    1,
                    DiagnosticKind::UnexpectedHeader,
                    format!("unexpected header in planet file: '{}'", line),
                );
            }
            continue;
        }

        let record = line.trim();
        if is_blank_record(record) {
            continue;
        }

        match parse_planet_line(record).and_then(|row| attach(row, catalog)) {
            Ok(()) => report.planets_loaded += 1,
            Err(err) => {
                report.planets_skipped += 1;
                report.skip(SOURCE, line_no, record, &err);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_stars;
    use std::io::Cursor;
    use universe_core::constants::AU_LY;

    const STARS: &str = "hip,hab,display_name,spectral_class,dist,xg,yg,zg\n\
                         0,0,Sun,G2V,0,0,0,0\n\
                         70890,0,Proxima Centauri,M5.5Ve,1.3,1.3,0,0\n";

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let mut report = IngestReport::default();
        read_stars(Cursor::new(STARS), &mut catalog, &mut report).unwrap();
        catalog
    }

    fn read(catalog: &mut Catalog, text: &str) -> IngestReport {
        let mut report = IngestReport::default();
        read_planets(Cursor::new(text), catalog, &mut report).unwrap();
        report
    }

    #[test]
    fn test_rings_flag() {
        assert!(rings_flag("1"));
        assert!(rings_flag("YES"));
        assert!(!rings_flag("0"));
        assert!(!rings_flag("true"));
        assert!(!rings_flag(""));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_planet_line("Earth,Sun,1"),
            Err(RowError::TooFewFields { expected: 6, found: 3 })
        ));
        assert_eq!(
            parse_planet_line(",Sun,1,1,1,0"),
            Err(RowError::EmptyField { field: "name" })
        );
        assert!(matches!(
            parse_planet_line("Earth,Sun,1,heavy,1,0"),
            Err(RowError::InvalidNumber { field: "mass", .. })
        ));
    }

    #[test]
    fn test_planets_attach_to_hosts() {
        let mut catalog = catalog();
        let report = read(
            &mut catalog,
            "name,star,dfs,mass,radius,rings\nEarth,Sun,1,1,1,0\nProxima b,hip70890,0.05,1.07,1.1,0\n",
        );
        assert_eq!(report.planets_loaded, 2);
        assert!(report.diagnostics.is_empty());
        assert_eq!(catalog.planet_count(), 2);

        let proxima = catalog.find_key("proxima centauri").unwrap();
        let host_pos = catalog.get(proxima).unwrap().position;
        let (_, b, info) = catalog.planets_of(proxima).next().unwrap();
        assert_eq!(b.name, "Proxima b");
        assert_eq!(info.host, proxima);
        assert_eq!(b.position.x, host_pos.x + 0.05 * AU_LY);
        assert_eq!(b.position.y, host_pos.y);
    }

    #[test]
    fn test_unknown_host_is_skipped() {
        let mut catalog = catalog();
        let report = read(&mut catalog, "name,star,dfs\nVulcan,40 Eridani,0.5,1,1,0\n");
        assert_eq!(report.planets_loaded, 0);
        assert_eq!(report.planets_skipped, 1);
        assert_eq!(catalog.planet_count(), 0);
        assert!(report.diagnostics[0].text.contains("40 Eridani"));
    }

    #[test]
    fn test_non_positive_planet_is_skipped() {
        let mut catalog = catalog();
        let report = read(&mut catalog, "name,star,dfs\nGhost,Sun,1,0,1,0\n");
        assert_eq!(report.planets_skipped, 1);
        assert_eq!(catalog.planet_count(), 0);
    }

    #[test]
    fn test_non_finite_planet_is_skipped() {
        assert!(matches!(
            parse_planet_line("NanWorld,Sun,1,NaN,1,0"),
            Err(RowError::InvalidNumber { field: "mass", .. })
        ));
        assert!(matches!(
            parse_planet_line("Huge,Sun,1,1,inf,0"),
            Err(RowError::InvalidNumber { field: "radius", .. })
        ));

        let mut catalog = catalog();
        let report = read(
            &mut catalog,
            "name,star,dfs\nNanWorld,Sun,1,NaN,1,0\nHuge,Sun,1,1,inf,0\n",
        );
        assert_eq!(report.planets_loaded, 0);
        assert_eq!(report.planets_skipped, 2);
        assert_eq!(catalog.planet_count(), 0);
    }

    #[test]
    fn test_unexpected_planet_header() {
        let mut catalog = catalog();
        let report = read(&mut catalog, "planet,host\nEarth,Sun,1,1,1,0\n");
        assert_eq!(report.planets_loaded, 1);
        assert_eq!(report.diagnostics_of(DiagnosticKind::UnexpectedHeader).count(), 1);
    }
}
