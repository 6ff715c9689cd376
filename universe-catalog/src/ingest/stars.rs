//! Star file reader.
//!
//! The first line is a header and only sniffed. Every following record is
//! classified on its own: at least eight fields with an unsigned integer in
//! the first one is a current-format row, otherwise at least seven fields is a
//! legacy row, otherwise the row is skipped.

use std::io::BufRead;

use tracing::{debug, info};

use super::{is_blank_record, parse_number, parse_optional, split_fields, DiagnosticKind, IngestReport};
use crate::body::{CatalogFormat, CelestialBody, CurrentStarRow, LegacyStarRow};
use crate::catalog::{compound_key, Catalog, IndexKey, KeyPolicy};
use crate::error::{CatalogError, CatalogResult, RowError};
use universe_core::GalacticPosition;

const SOURCE: &str = "star";
const CURRENT_MIN_FIELDS: usize = 8;
const LEGACY_MIN_FIELDS: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub enum StarRow {
    Current(CurrentStarRow),
    Legacy(LegacyStarRow),
}

impl StarRow {
    pub fn format(&self) -> CatalogFormat {
        match self {
            StarRow::Current(_) => CatalogFormat::Current,
            StarRow::Legacy(_) => CatalogFormat::Legacy,
        }
    }
}

/// Empty numeric fields read as zero in the current layout.
fn number_or_zero(field: &'static str, value: &str) -> Result<f64, RowError> {
    Ok(parse_optional(field, value)?.unwrap_or(0.0))
}

fn parse_current(fields: &[&str], hip_id: u32) -> Result<CurrentStarRow, RowError> {
    let name = fields[2];
    if name.is_empty() {
        return Err(RowError::EmptyField { field: "name" });
    }
    let habitable = !fields[1].is_empty() && fields[1] != "0";

    Ok(CurrentStarRow {
        hip_id,
        habitable,
        name: name.to_string(),
        spectral_class: fields[3].to_string(),
        distance_pc: number_or_zero("distance", fields[4])?,
        galactic: GalacticPosition::new(
            number_or_zero("x_galactic", fields[5])?,
            number_or_zero("y_galactic", fields[6])?,
            number_or_zero("z_galactic", fields[7])?,
        ),
        absolute_magnitude: match fields.get(8) {
            Some(v) => parse_optional("absolute_magnitude", v)?,
            None => None,
        },
    })
}

fn parse_legacy(fields: &[&str]) -> Result<LegacyStarRow, RowError> {
    let name = fields[1];
    if name.is_empty() {
        return Err(RowError::EmptyField { field: "name" });
    }

    Ok(LegacyStarRow {
        system: fields[0].to_string(),
        name: name.to_string(),
        spectral_class: fields[2].to_string(),
        distance_ly: parse_number("distance", fields[3])?,
        ra: fields[4].to_string(),
        dec: fields[5].to_string(),
        mass_solar: Some(parse_number("mass", fields[6])?),
        absolute_magnitude: match fields.get(7) {
            Some(v) => parse_optional("absolute_magnitude", v)?,
            None => None,
        },
    })
}

/// Parses one trimmed, non-blank star record.
///
/// ```
/// use universe_catalog::ingest::{parse_star_line, StarRow};
///
/// let row = parse_star_line("71683,0,Alpha Centauri,G2V,1.34,0.95,-0.93,-0.02,4.38").unwrap();
/// assert!(matches!(row, StarRow::Current(_)));
///
/// let row = parse_star_line("Sol,Sun,G2V,0,0,0,1.0,4.83").unwrap();
/// assert!(matches!(row, StarRow::Legacy(_)));
///
/// assert!(parse_star_line("too,few,fields").is_err());
/// ```
pub fn parse_star_line(line: &str) -> Result<StarRow, RowError> {
    let fields = split_fields(line);

    if fields.len() >= CURRENT_MIN_FIELDS {
        if let Ok(hip_id) = fields[0].parse::<u32>() {
            return parse_current(&fields, hip_id).map(StarRow::Current);
        }
    }
    if fields.len() >= LEGACY_MIN_FIELDS {
        return parse_legacy(&fields).map(StarRow::Legacy);
    }

    Err(RowError::TooFewFields {
        expected: LEGACY_MIN_FIELDS,
        found: fields.len(),
    })
}

fn sniff_header(header: &str, report: &mut IngestReport) {
    let lower = header.to_lowercase();
    if lower.contains("hip") && lower.contains("hab") {
        info!("Detected current star format with Hipparcos ids and galactic coordinates");
        report.header_format = Some(CatalogFormat::Current);
    } else if lower.contains("system") || lower.contains("name") {
        report.header_format = Some(CatalogFormat::Legacy);
    } else {
        report.record(
            SOURCE,
            1,
            DiagnosticKind::UnexpectedHeader,
            format!("unexpected header in star file: '{}'", header),
        );
    }
}

fn index_keys(row: &StarRow) -> Vec<IndexKey> {
    match row {
        StarRow::Current(r) => {
            let mut keys = vec![IndexKey::Name(r.name.to_lowercase(), KeyPolicy::Overwrite)];
            if r.hip_id > 0 {
                keys.push(IndexKey::Hip(r.hip_id));
            }
            keys
        }
        StarRow::Legacy(r) => vec![
            IndexKey::Name(compound_key(&r.system, &r.name), KeyPolicy::Overwrite),
            IndexKey::Name(r.name.to_lowercase(), KeyPolicy::KeepFirst),
        ],
    }
}

fn insert_row(row: StarRow, line: usize, catalog: &mut Catalog, report: &mut IngestReport) {
    let keys = index_keys(&row);
    let body = match row {
        StarRow::Current(r) => {
            report.current_rows += 1;
            CelestialBody::from_current_row(r)
        }
        StarRow::Legacy(r) => {
            report.legacy_rows += 1;
            let (body, fallback) = CelestialBody::from_legacy_row(r);
            if let Some(reason) = fallback {
                report.record(
                    SOURCE,
                    line,
                    DiagnosticKind::DegradedPosition,
                    format!("using origin for star '{}': {}", body.name, reason),
                );
            }
            body
        }
    };

    debug!("star line {}: {} at {:.4}", line, body.name, body.position);
    let outcome = catalog.insert_star(body, &keys);
    for lost in outcome.displaced {
        report.stars_displaced += 1;
        report.record(
            SOURCE,
            line,
            DiagnosticKind::DisplacedStar,
            format!("star '{}' replaced by a later row with the same key", lost.name),
        );
    }
}

/// Reads a star file into `catalog`. Only I/O failures are errors.
pub fn read_stars<R: BufRead>(
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
            sniff_header(&line, report);
            continue;
        }

        let record = line.trim();
        if is_blank_record(record) {
            continue;
        }

        match parse_star_line(record) {
            Ok(row) => insert_row(row, line_no, catalog, report),
            Err(err) => {
                report.stars_skipped += 1;
                report.skip(SOURCE, line_no, record, &err);
            }
        }
    }
    Ok(())
}
