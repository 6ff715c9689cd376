//! Closest-to-view-center star selection.
//!
//! Candidates are stars inside a narrow cone and distance limit, ordered by
//! distance. Only the nearest `max_candidates` are examined; those within
//! `score_cutoff_ly` are scored and the lowest score wins:
//!
//! ```text
//! score = 0.7 * angle / half_angle + 0.3 * min(distance / 10, 1)
//! ```
//!
//! halved for stars closer than `near_boost_ly`. If no examined candidate was
//! scored, the nearest candidate is returned instead.

use universe_core::constants::RAD_TO_DEG;

use super::CameraPose;
use crate::body::BodyId;
use crate::catalog::Catalog;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ANGLE_WEIGHT: f64 = 0.7;
const DISTANCE_WEIGHT: f64 = 0.3;
const DISTANCE_SCALE_LY: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetParams {
    pub max_distance_ly: f64,
    /// Candidates must be strictly inside this half-angle, in degrees.
    pub half_angle_deg: f64,
    pub max_candidates: usize,
    /// Examined candidates beyond this distance are not scored.
    pub score_cutoff_ly: f64,
    pub near_boost_ly: f64,
}

impl Default for TargetParams {
    fn default() -> Self {
        Self {
            max_distance_ly: 500.0,
            half_angle_deg: 15.0,
            max_candidates: 10,
            score_cutoff_ly: 100.0,
            near_boost_ly: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetReason {
    Scored,
    NearestFallback,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetSelection {
    pub id: BodyId,
    pub distance_ly: f64,
    /// Angle between the view direction and the star, in degrees.
    pub angle_deg: f64,
    /// `None` when chosen by fallback.
    pub score: Option<f64>,
    pub reason: TargetReason,
}

struct Candidate {
    id: BodyId,
    distance: f64,
    angle_deg: f64,
}

fn score(candidate: &Candidate, params: &TargetParams) -> f64 {
    let s = ANGLE_WEIGHT * (candidate.angle_deg / params.half_angle_deg)
        + DISTANCE_WEIGHT * (candidate.distance / DISTANCE_SCALE_LY).min(1.0);
    if candidate.distance < params.near_boost_ly {
        s * 0.5
    } else {
        s
    }
}

/// Picks the star the viewer is most likely looking at, or `None` when the
/// cone holds no star.
pub fn select_target(
    catalog: &Catalog,
    pose: &CameraPose,
    params: &TargetParams,
) -> Option<TargetSelection> {
    let mut candidates: Vec<Candidate> = catalog
        .stars()
        .filter_map(|(id, body, _)| {
            let (distance, direction) = pose.sight_line(&body.position);
            if distance > params.max_distance_ly || distance == 0.0 {
                return None;
            }
            let angle_deg = direction.angle_to(&pose.forward) * RAD_TO_DEG;
            (angle_deg < params.half_angle_deg).then_some(Candidate {
                id,
                distance,
                angle_deg,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });

    let mut best: Option<(&Candidate, f64)> = None;
    for candidate in candidates.iter().take(params.max_candidates) {
        if candidate.distance > params.score_cutoff_ly {
            continue;
        }
        let s = score(candidate, params);
        if best.map_or(true, |(_, best_score)| s < best_score) {
            best = Some((candidate, s));
        }
    }

    match best {
        Some((c, s)) => Some(TargetSelection {
            id: c.id,
            distance_ly: c.distance,
            angle_deg: c.angle_deg,
            score: Some(s),
            reason: TargetReason::Scored,
        }),
        None => candidates.first().map(|c| TargetSelection {
            id: c.id,
            distance_ly: c.distance,
            angle_deg: c.angle_deg,
            score: None,
            reason: TargetReason::NearestFallback,
        }),
    }
}
