//! Star and planet catalog: ingestion, deduplication and view queries.
//!
//! Loads comma-separated star and planet catalogs into an arena of
//! [`CelestialBody`] values, derives the physical attributes the rows leave
//! out, removes physically overlapping duplicates, and answers the two
//! per-frame questions a viewer asks: what is visible (in paint order) and
//! what is the viewer looking at.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`body`] | [`CelestialBody`], spectral classification, star and planet construction |
//! | [`catalog`] | [`Catalog`] arena with name, compound-key and HIP indices |
//! | [`ingest`] | Format-sniffing, error-tolerant file readers and [`load`] |
//! | [`overlap`] | Spatial-hash overlap pass |
//! | [`query`] | Visible set with render hints, and target selection |
//! | [`error`] | [`CatalogError`] (fatal) and [`RowError`] (per record) |
//!
//! # Quick Start
//!
//! ```no_run
//! use universe_catalog::query::{visible_stars, CameraPose, VisibleParams};
//! use universe_catalog::{load, LoadConfig};
//! use universe_core::Vector3;
//!
//! let config = LoadConfig::new("data/stars.csv").with_planets("data/planets.csv");
//! let (catalog, report) = load(&config)?;
//! println!("{}", report);
//!
//! let pose = CameraPose::new(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0));
//! for star in visible_stars(&catalog, &pose, &VisibleParams::default()) {
//!     let body = catalog.get(star.id).unwrap();
//!     println!("{} at {:.2} ly", body.name, star.distance_ly);
//! }
//! # Ok::<(), universe_catalog::CatalogError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on the model, parameters and reports
//! - `cli`: builds the `query-catalog` binary

pub mod body;
pub mod catalog;
pub mod error;
pub mod ingest;
pub mod overlap;
pub mod query;

pub use body::{BodyId, BodyKind, CelestialBody, PlanetInfo, StarInfo};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult, RowError};
pub use ingest::{load, Diagnostic, DiagnosticKind, IngestReport, LoadConfig};
pub use overlap::{resolve_overlaps, OverlapReport};
