use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a catalog load.
///
/// Everything record-scoped is a [`RowError`] instead and never stops
/// ingestion.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot read {kind} catalog {path:?}: {source}")]
    Io {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read {kind} catalog at line {line}: {source}")]
    Read {
        kind: &'static str,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn io(kind: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            kind,
            path: path.into(),
            source,
        }
    }
}

/// Why a single catalog row was skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("expected at least {expected} fields, got {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("{field} is empty")]
    EmptyField { field: &'static str },

    #[error("cannot parse {field} '{value}' as a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("host star '{0}' not found")]
    UnknownHost(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_messages() {
        let err = RowError::TooFewFields {
            expected: 7,
            found: 3,
        };
        assert_eq!(err.to_string(), "expected at least 7 fields, got 3");

        let err = RowError::InvalidNumber {
            field: "distance",
            value: "far".into(),
        };
        assert_eq!(err.to_string(), "cannot parse distance 'far' as a number");

        assert_eq!(
            RowError::UnknownHost("Vulcan".into()).to_string(),
            "host star 'Vulcan' not found"
        );
    }

    #[test]
    fn test_catalog_error_keeps_source() {
        use std::error::Error as _;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CatalogError::io("star", "stars.csv", io);
        assert!(err.to_string().contains("stars.csv"));
        assert!(err.to_string().starts_with("Cannot read star catalog"));
        assert!(err.source().is_some());
    }
}
