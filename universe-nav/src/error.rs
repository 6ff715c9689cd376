use thiserror::Error;
use universe_catalog::CatalogError;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("no star matches '{0}'")]
    StarNotFound(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, NavError>;
