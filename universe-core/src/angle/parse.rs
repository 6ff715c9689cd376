//! Colon-separated sexagesimal parsing.
//!
//! Catalog coordinates use exactly one notation: `HH:MM:SS[.s]` for right
//! ascension and `[+-]DD:MM:SS[.s]` for declination. Signs are only valid at
//! the beginning: `-12:34:56` works, `12:-34:56` does not.
//!
//! ```
//! use universe_core::angle::{parse_declination, parse_right_ascension};
//!
//! let ra = parse_right_ascension("14:39:36.5").unwrap();
//! let dec = parse_declination("-60:50:02").unwrap();
//! assert!((ra.hours() - 14.660139).abs() < 1e-6);
//! assert!(dec.degrees() < -60.0);
//!
//! assert!(parse_right_ascension("24:00:00").is_err());
//! assert!(parse_declination("+91:00:00").is_err());
//! ```

use super::validate::validate_declination;
use super::Angle;
use crate::{MathErrorKind, UniverseError};
use once_cell::sync::Lazy;
use regex::Regex;

static COLON_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*([+-])?(\d{1,4}):(\d{1,3}):(\d{1,3}(?:\.\d+)?)\s*$"#).unwrap());

/// Splits `[+-]A:B:C` into a signed decimal `A + B/60 + C/3600`.
fn parse_sexagesimal(field: &str, s: &str) -> Result<f64, UniverseError> {
    let caps = COLON_REGEX
        .captures(s)
        .ok_or_else(|| UniverseError::parse_error(field, s, "expected [+-]NN:NN:NN.n"))?;

    let sign = caps
        .get(1)
        .map_or(1.0, |m| if m.as_str() == "-" { -1.0 } else { 1.0 });
    let component = |i: usize| -> Result<f64, UniverseError> {
        caps[i]
            .parse::<f64>()
            .map_err(|e| UniverseError::parse_error(field, s, &e.to_string()))
    };
    let whole = component(2)?;
    let minutes = component(3)?;
    let seconds = component(4)?;

    Ok(sign * (whole + minutes / 60.0 + seconds / 3600.0))
}

/// Parses `HH:MM:SS` into an hour angle. No range check.
pub fn parse_hms(s: &str) -> Result<Angle, UniverseError> {
    parse_sexagesimal("hms", s).map(Angle::from_hours)
}

/// Parses `±DD:MM:SS` into a degree angle. No range check.
pub fn parse_dms(s: &str) -> Result<Angle, UniverseError> {
    parse_sexagesimal("dms", s).map(Angle::from_degrees)
}

/// Parses catalog right ascension and requires `0h <= RA < 24h`.
///
/// The range check runs on the decimal hour value before conversion, so the
/// half-open upper bound is exact.
pub fn parse_right_ascension(s: &str) -> Result<Angle, UniverseError> {
    let hours = parse_sexagesimal("ra", s)?;
    if !(0.0..24.0).contains(&hours) {
        return Err(UniverseError::math_error(
            "parse_right_ascension",
            MathErrorKind::OutOfRange,
            &format!("RA {:.4}h out of range [0h, 24h)", hours),
        ));
    }
    Ok(Angle::from_hours(hours))
}

/// Parses catalog declination and requires `-90° <= Dec <= +90°`.
pub fn parse_declination(s: &str) -> Result<Angle, UniverseError> {
    let degrees = parse_sexagesimal("dec", s)?;
    if !(-90.0..=90.0).contains(&degrees) {
        return Err(UniverseError::math_error(
            "parse_declination",
            MathErrorKind::OutOfRange,
            &format!("Dec {:.2}° out of range [-90°, +90°]", degrees),
        ));
    }
    validate_declination(Angle::from_degrees(degrees))
}
