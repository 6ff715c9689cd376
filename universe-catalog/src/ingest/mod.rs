//! Catalog ingestion: text files in, [`Catalog`] and [`IngestReport`] out.
//!
//! Loading is one blocking batch:
//!
//! 1. read the star file, choosing the row grammar per line ([`stars`]);
//! 2. optionally drop stars that physically overlap ([`crate::overlap`]);
//! 3. read the planet file against the finished star set ([`planets`]).
//!
//! A missing or unreadable file aborts with [`CatalogError`]. Everything that
//! goes wrong inside a single row is recorded as a [`Diagnostic`], logged with
//! `tracing::warn!`, and the load continues.

pub mod planets;
pub mod stars;

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::body::CatalogFormat;
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult, RowError};
use crate::overlap::{resolve_overlaps, OverlapReport};

pub use planets::{parse_planet_line, read_planets};
pub use stars::{parse_star_line, read_stars, StarRow};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input files and switches for [`load`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadConfig {
    pub stars: PathBuf,
    pub planets: Option<PathBuf>,
    /// Run the overlap pass between the star and planet files.
    pub resolve_overlaps: bool,
}

impl LoadConfig {
    pub fn new(stars: impl Into<PathBuf>) -> Self {
        Self {
            stars: stars.into(),
            planets: None,
            resolve_overlaps: true,
        }
    }

    pub fn with_planets(mut self, planets: impl Into<PathBuf>) -> Self {
        self.planets = Some(planets.into());
        self
    }

    pub fn resolve_overlaps(mut self, enabled: bool) -> Self {
        self.resolve_overlaps = enabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    /// Header row did not look like either known layout.
    UnexpectedHeader,
    /// Row dropped; see the text for the [`RowError`].
    SkippedRow,
    /// Legacy star placed at the origin because its coordinates were unusable.
    DegradedPosition,
    /// Star lost its last index key to a later row and was dropped.
    DisplacedStar,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::UnexpectedHeader => "unexpected header",
            DiagnosticKind::SkippedRow => "skipped row",
            DiagnosticKind::DegradedPosition => "degraded position",
            DiagnosticKind::DisplacedStar => "displaced star",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostic {
    /// Which file the line belongs to.
    pub source: &'static str,
    /// 1-based line number, header included.
    pub line: usize,
    pub kind: DiagnosticKind,
    pub text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line {}: {}: {}",
            self.source, self.line, self.kind, self.text
        )
    }
}

/// Everything a load did besides producing the catalog.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IngestReport {
    /// Layout announced by the star header, if it was recognisable.
    pub header_format: Option<CatalogFormat>,
    pub current_rows: usize,
    pub legacy_rows: usize,
    pub stars_skipped: usize,
    pub stars_displaced: usize,
    pub planets_loaded: usize,
    pub planets_skipped: usize,
    pub overlap: Option<OverlapReport>,
    pub diagnostics: Vec<Diagnostic>,
}

impl IngestReport {
    pub(crate) fn record(
        &mut self,
        source: &'static str,
        line: usize,
        kind: DiagnosticKind,
        text: String,
    ) {
        warn!("{} line {}: {}", source, line, text);
        self.diagnostics.push(Diagnostic {
            source,
            line,
            kind,
            text,
        });
    }

    pub(crate) fn skip(&mut self, source: &'static str, line: usize, raw: &str, err: &RowError) {
        self.record(
            source,
            line,
            DiagnosticKind::SkippedRow,
            format!("skipping '{}': {}", raw, err),
        );
    }

    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    pub fn stars_removed_by_overlap(&self) -> usize {
        self.overlap.as_ref().map_or(0, |o| o.removed.len())
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self
            .header_format
            .map_or_else(|| "unrecognised".to_string(), |h| h.to_string());
        writeln!(f, "Star header: {}", header)?;
        writeln!(f, "Current-format rows: {}", self.current_rows)?;
        writeln!(f, "Legacy-format rows: {}", self.legacy_rows)?;
        writeln!(f, "Star rows skipped: {}", self.stars_skipped)?;
        writeln!(f, "Stars displaced by duplicate keys: {}", self.stars_displaced)?;
        writeln!(f, "Stars removed as overlaps: {}", self.stars_removed_by_overlap())?;
        writeln!(f, "Planets loaded: {}", self.planets_loaded)?;
        writeln!(f, "Planet rows skipped: {}", self.planets_skipped)?;
        write!(f, "Diagnostics: {}", self.diagnostics.len())
    }
}

/// True for lines that carry no record: blank, `#` comments, or only commas.
pub(crate) fn is_blank_record(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.chars().all(|c| c == ',')
}

pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parses a finite number; `NaN` and the infinities are rejected.
pub(crate) fn parse_number(field: &'static str, value: &str) -> Result<f64, RowError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RowError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

/// Empty text is `None`; anything else must parse.
pub(crate) fn parse_optional(field: &'static str, value: &str) -> Result<Option<f64>, RowError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_number(field, value).map(Some)
    }
}

/// Loads the star file, resolves overlaps, then loads the planet file.
pub fn load(config: &LoadConfig) -> CatalogResult<(Catalog, IngestReport)> {
    let mut catalog = Catalog::new();
    let mut report = IngestReport::default();

    let file =
        File::open(&config.stars).map_err(|e| CatalogError::io("star", &config.stars, e))?;
    read_stars(BufReader::new(file), &mut catalog, &mut report)?;
    info!(
        "Loaded {} stars from {:?} ({} skipped)",
        catalog.star_count(),
        config.stars,
        report.stars_skipped
    );

    if config.resolve_overlaps {
        report.overlap = Some(resolve_overlaps(&mut catalog));
    }

    if let Some(path) = &config.planets {
        let file = File::open(path).map_err(|e| CatalogError::io("planet", path, e))?;
        read_planets(BufReader::new(file), &mut catalog, &mut report)?;
        info!(
            "Loaded {} planets from {:?} ({} skipped)",
            report.planets_loaded, path, report.planets_skipped
        );
    }

    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_records() {
        assert!(is_blank_record(""));
        assert!(is_blank_record("# comment"));
        assert!(is_blank_record(",,,,"));
        assert!(!is_blank_record("1,0,Sun"));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_number("d", "4.3"), Ok(4.3));
        assert_eq!(parse_number("d", "1e3"), Ok(1000.0));
        assert!(parse_number("d", "four").is_err());
        for text in ["NaN", "nan", "inf", "-inf", "infinity"] {
            assert_eq!(
                parse_number("d", text),
                Err(RowError::InvalidNumber {
                    field: "d",
                    value: text.to_string()
                })
            );
        }
        assert!(parse_optional("m", "NaN").is_err());
        assert_eq!(parse_optional("m", ""), Ok(None));
        assert_eq!(parse_optional("m", "2"), Ok(Some(2.0)));
    }

    #[test]
    fn test_split_fields_keeps_empties() {
        assert_eq!(split_fields(" a , ,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_load_config_builder() {
        let config = LoadConfig::new("stars.csv")
            .with_planets("planets.csv")
            .resolve_overlaps(false);
        assert_eq!(config.stars, PathBuf::from("stars.csv"));
        assert_eq!(config.planets, Some(PathBuf::from("planets.csv")));
        assert!(!config.resolve_overlaps);
        assert!(LoadConfig::new("x").resolve_overlaps);
    }

    #[test]
    fn test_missing_star_file_is_fatal() {
        let err = load(&LoadConfig::new("/nonexistent/stars.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { kind: "star", .. }));
    }
}
