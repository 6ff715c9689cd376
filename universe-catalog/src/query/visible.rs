//! Visible-set query with back-to-front paint order.

use universe_core::constants::DEG_TO_RAD;

use super::CameraPose;
use crate::body::{BodyId, Rgb};
use crate::catalog::Catalog;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step added to a sort key that would otherwise tie with its neighbour.
pub const TIE_EPSILON: f64 = 1e-6;

/// Below this distance a star gets an opaque core and an amplified scale.
const OPAQUE_CORE_LY: f64 = 5.0;
const ENSURE_VISIBLE_LY: f64 = 100.0;
const KM_TO_RENDER: f64 = 1e-7;
const MIN_FAR_SCALE: f64 = 0.0005;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibleParams {
    /// Straight-line cutoff from the camera, in light-years.
    pub max_distance_ly: f64,
    /// Half-angle of the view cone around the forward vector, in degrees.
    pub half_angle_deg: f64,
}

impl Default for VisibleParams {
    fn default() -> Self {
        Self {
            max_distance_ly: 1000.0,
            half_angle_deg: 75.0,
        }
    }
}

/// How the renderer should draw a star at a given distance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderHints {
    pub render_scale: f64,
    pub opaque_core: bool,
    pub ensure_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibleStar {
    pub id: BodyId,
    /// True distance from the camera.
    pub distance_ly: f64,
    /// Distance after tie-breaking. Strictly decreasing across a result.
    pub sort_key: f64,
    pub color: Rgb,
    pub hints: RenderHints,
}

/// Render hints for a body of `radius_km` seen from `distance_ly`.
///
/// ```
/// use universe_catalog::query::render_hints;
///
/// let near = render_hints(696_340.0, 1.0);
/// assert!(near.opaque_core && near.ensure_visible);
///
/// let far = render_hints(696_340.0, 500.0);
/// assert!(!far.ensure_visible);
/// assert!((far.render_scale - 0.069634).abs() < 1e-12);
/// ```
pub fn render_hints(radius_km: f64, distance_ly: f64) -> RenderHints {
    let base = radius_km * KM_TO_RENDER;
    let render_scale = if distance_ly < ENSURE_VISIBLE_LY {
        let closeness = 1.0 - (distance_ly / ENSURE_VISIBLE_LY).min(0.99);
        base * (1.0 + 2.0 * closeness)
    } else {
        base.max(MIN_FAR_SCALE)
    };

    RenderHints {
        render_scale,
        opaque_core: distance_ly < OPAQUE_CORE_LY,
        ensure_visible: distance_ly < ENSURE_VISIBLE_LY,
    }
}

/// Stars inside the view cone and distance limit, farthest first.
///
/// A star at exactly the camera position has no direction and is left out.
/// Equal distances are separated by [`TIE_EPSILON`] steps in id order, so
/// `sort_key` is strictly decreasing while `distance_ly` stays exact.
pub fn visible_stars(
    catalog: &Catalog,
    pose: &CameraPose,
    params: &VisibleParams,
) -> Vec<VisibleStar> {
    let cos_limit = libm::cos(params.half_angle_deg * DEG_TO_RAD);

    let mut results: Vec<VisibleStar> = catalog
        .stars()
        .filter_map(|(id, body, _)| {
            let (distance, direction) = pose.sight_line(&body.position);
            if distance > params.max_distance_ly || distance == 0.0 {
                return None;
            }
            if direction.dot(&pose.forward) <= cos_limit {
                return None;
            }
            Some(VisibleStar {
                id,
                distance_ly: distance,
                sort_key: distance,
                color: body.color(),
                hints: render_hints(body.radius_km, distance),
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.distance_ly
            .partial_cmp(&b.distance_ly)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });

    let mut previous = f64::NEG_INFINITY;
    for star in &mut results {
        if star.sort_key <= previous {
            star.sort_key = previous + TIE_EPSILON;
        }
        previous = star.sort_key;
    }

    results.reverse();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{CelestialBody, CurrentStarRow};
    use crate::catalog::{IndexKey, KeyPolicy};
    use universe_core::{GalacticPosition, Vector3};

    fn catalog_at(points: &[(f64, f64, f64)]) -> Catalog {
        let mut catalog = Catalog::new();
        for (i, p) in points.iter().enumerate() {
            let name = format!("S{}", i);
            let mut body = CelestialBody::from_current_row(CurrentStarRow {
                hip_id: 0,
                habitable: false,
                name: name.clone(),
                spectral_class: "K2V".to_string(),
                distance_pc: 0.0,
                galactic: GalacticPosition::default(),
                absolute_magnitude: None,
            });
            body.position = Vector3::new(p.0, p.1, p.2);
            catalog.insert_star(body, &[IndexKey::Name(name, KeyPolicy::Overwrite)]);
        }
        catalog
    }

    fn looking_down_z() -> CameraPose {
        CameraPose::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_farthest_first() {
        let catalog = catalog_at(&[(0.0, 0.0, -3.0), (0.0, 0.0, -50.0), (1.0, 0.0, -10.0)]);
        let visible = visible_stars(&catalog, &looking_down_z(), &VisibleParams::default());
        assert_eq!(visible.len(), 3);
        for pair in visible.windows(2) {
            assert!(pair[0].distance_ly >= pair[1].distance_ly);
        }
        assert!((visible[0].distance_ly - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_cone_and_distance_filters() {
        let catalog = catalog_at(&[
            (0.0, 0.0, 5.0),     // behind
            (10.0, 0.0, -1.0),   // 84° off axis
            (0.0, 0.0, -1500.0), // too far
            (0.0, 0.0, 0.0),     // at the camera
            (0.0, 1.0, -2.0),    // inside
        ]);
        let visible = visible_stars(&catalog, &looking_down_z(), &VisibleParams::default());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, catalog.find_key("s4").unwrap());
    }

    #[test]
    fn test_equal_distances_stay_distinct() {
        let catalog = catalog_at(&[(1.0, 0.0, -5.0), (-1.0, 0.0, -5.0), (0.0, 1.0, -5.0)]);
        let visible = visible_stars(&catalog, &looking_down_z(), &VisibleParams::default());
        assert_eq!(visible.len(), 3);
        for pair in visible.windows(2) {
            assert!(pair[0].sort_key > pair[1].sort_key);
            assert_eq!(pair[0].distance_ly, pair[1].distance_ly);
        }
    }

    #[test]
    fn test_render_hint_bands() {
        let close = render_hints(1.0e7, 0.5);
        assert!(close.opaque_core);
        assert!((close.render_scale - 1.0 * (1.0 + 2.0 * 0.995)).abs() < 1e-12);

        let mid = render_hints(1.0e7, 50.0);
        assert!(!mid.opaque_core && mid.ensure_visible);
        assert!((mid.render_scale - 2.0).abs() < 1e-12);

        let tiny_far = render_hints(100.0, 200.0);
        assert_eq!(tiny_far.render_scale, MIN_FAR_SCALE);
    }
}
