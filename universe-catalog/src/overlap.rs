//! One-shot removal of stars whose physical extents overlap.
//!
//! Stars are hashed into unit-light-year buckets by truncating each
//! coordinate toward zero, and only stars sharing a bucket are compared. Two
//! stars overlap when their separation is below either radius. The larger of
//! the pair is marked; marked stars are skipped for further comparisons and
//! removed together at the end, along with any planets they host.
//!
//! Pairs that straddle a bucket boundary are never compared. Catalog
//! duplicates sit at almost the same coordinates, so this only misses
//! overlaps that happen to cross an integer light-year plane.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};
use universe_core::units::km_to_ly;
use universe_core::Vector3;

use crate::body::BodyId;
use crate::catalog::Catalog;

#[cfg(feature = "serde")]
use serde::Serialize;

type BucketKey = (i64, i64, i64);

fn bucket_key(p: &Vector3) -> BucketKey {
    (p.x as i64, p.y as i64, p.z as i64)
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RemovedStar {
    pub id: BodyId,
    pub name: String,
    pub radius_km: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OverlapReport {
    /// Stars examined.
    pub candidates: usize,
    /// Non-empty buckets.
    pub buckets: usize,
    /// Pairwise distance checks performed.
    pub comparisons: usize,
    pub removed: Vec<RemovedStar>,
    /// Planets removed with their hosts.
    pub planets_removed: usize,
}

/// Marks overlapping stars without touching the catalog.
pub fn find_overlaps(catalog: &Catalog) -> OverlapReport {
    let mut buckets: BTreeMap<BucketKey, Vec<(BodyId, Vector3, f64)>> = BTreeMap::new();
    let mut report = OverlapReport::default();

    for (id, body, _) in catalog.stars() {
        report.candidates += 1;
        buckets
            .entry(bucket_key(&body.position))
            .or_default()
            .push((id, body.position, body.radius_km));
    }
    report.buckets = buckets.len();

    let mut marked: BTreeSet<BodyId> = BTreeSet::new();
    for members in buckets.values() {
        for (i, (id_i, pos_i, radius_i)) in members.iter().enumerate() {
            if marked.contains(id_i) {
                continue;
            }
            for (id_j, pos_j, radius_j) in &members[i + 1..] {
                if marked.contains(id_j) {
                    continue;
                }
                report.comparisons += 1;

                let separation = pos_i.distance_to(pos_j);
                if separation >= km_to_ly(*radius_i) && separation >= km_to_ly(*radius_j) {
                    continue;
                }
                if radius_i > radius_j {
                    debug!("{} overlaps {} at {:.3e} ly, dropping {}", id_i, id_j, separation, id_i);
                    marked.insert(*id_i);
                    break;
                }
                debug!("{} overlaps {} at {:.3e} ly, dropping {}", id_i, id_j, separation, id_j);
                marked.insert(*id_j);
            }
        }
    }

    report.removed = marked
        .into_iter()
        .filter_map(|id| {
            catalog.get(id).map(|body| RemovedStar {
                id,
                name: body.name.clone(),
                radius_km: body.radius_km,
            })
        })
        .collect();
    report
}

/// Finds overlapping stars and removes them, with their planets, in one pass.
pub fn resolve_overlaps(catalog: &mut Catalog) -> OverlapReport {
    let mut report = find_overlaps(catalog);
    let ids: Vec<BodyId> = report.removed.iter().map(|r| r.id).collect();
    let summary = catalog.remove_stars(&ids);
    report.planets_removed = summary.planets;

    info!(
        "Overlap pass: {} stars in {} buckets, {} comparisons, removed {} stars and {} planets",
        report.candidates,
        report.buckets,
        report.comparisons,
        summary.stars,
        summary.planets
    );
    report
}
