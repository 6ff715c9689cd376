//! Foundation types for the universe catalog and navigation crates.
//!
//! Everything here is pure: constants, unit conversions, vectors, angles and
//! the two catalog coordinate conventions. Higher crates build the star and
//! planet model on top of it.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Physical constants (AU, light-year, parsec, Earth and solar scales) |
//! | [`units`] | Conversion functions between those scales |
//! | [`vector3`] | [`Vector3`], positions and directions in light-years |
//! | [`angle`] | [`Angle`] and `HH:MM:SS` / `±DD:MM:SS` parsing |
//! | [`frames`] | Equatorial and galactic coordinates → simulation Cartesian |
//! | [`errors`] | [`UniverseError`] and [`UniverseResult`] |
//!
//! # Quick Start
//!
//! ```
//! use universe_core::angle::{parse_declination, parse_right_ascension};
//! use universe_core::{units, EquatorialPosition};
//!
//! let ra = parse_right_ascension("06:45:08.9").unwrap();
//! let dec = parse_declination("-16:42:58").unwrap();
//! let sirius = EquatorialPosition::new(ra, dec).unwrap().to_cartesian(8.6);
//! assert!((sirius.magnitude() - 8.6).abs() < 1e-9);
//!
//! assert!((units::parsecs_to_ly(1.0) - 3.26156).abs() < 1e-12);
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod frames;
pub mod units;
pub mod vector3;

pub use angle::Angle;
pub use errors::{MathErrorKind, UniverseError, UniverseResult};
pub use frames::{EquatorialPosition, GalacticPosition};
pub use vector3::Vector3;
