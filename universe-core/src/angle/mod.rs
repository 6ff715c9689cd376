//! Angular measurements and sexagesimal parsing.
//!
//! Legacy catalog rows carry right ascension as `HH:MM:SS` and declination as
//! `±DD:MM:SS`. This module turns those strings into a typed [`Angle`] and
//! checks them against their astronomical domains before any trigonometry
//! happens.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Angle`] | Radian-backed angle with degree/hour accessors |
//! | [`parse_hms`], [`parse_dms`] | Colon-separated sexagesimal text |
//! | [`parse_right_ascension`], [`parse_declination`] | Parse and range-check in one step |
//! | [`validate_right_ascension`], [`validate_declination`] | Domain checks |

mod core;
mod parse;
mod validate;

pub use self::core::Angle;
pub use parse::{parse_declination, parse_dms, parse_hms, parse_right_ascension};
pub use validate::{validate_declination, validate_right_ascension};
