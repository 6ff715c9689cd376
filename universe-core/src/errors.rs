//! Error types shared by the universe crates.
//!
//! [`UniverseError`] covers the failures that can happen below the catalog
//! layer: malformed sexagesimal text and angles outside their domain.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`ParseError`](UniverseError::ParseError) | Text that is not `HH:MM:SS` / `±DD:MM:SS` |
//! | [`MathError`](UniverseError::MathError) | Out-of-range or non-finite angles |
//!
//! The catalog layer treats both as record-scoped: the star is degraded to
//! the origin and loading continues.
//!
//! ```
//! use universe_core::angle::parse_declination;
//! use universe_core::{MathErrorKind, UniverseError};
//!
//! match parse_declination("+95:00:00") {
//!     Err(UniverseError::MathError { kind, .. }) => assert_eq!(kind, MathErrorKind::OutOfRange),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., declination > 90°).
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum UniverseError {
    /// Text that could not be interpreted in the expected notation.
    #[error("Parse error in {field}: cannot read '{input}' ({message})")]
    ParseError {
        field: String,
        input: String,
        message: String,
    },

    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, UniverseError>`.
pub type UniverseResult<T> = Result<T, UniverseError>;

impl UniverseError {
    pub fn parse_error(field: &str, input: &str, reason: &str) -> Self {
        Self::ParseError {
            field: field.to_string(),
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}
