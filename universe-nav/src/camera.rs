//! Euler-angle camera with double-precision position.
//!
//! Yaw and pitch are in degrees. The basis is rebuilt from them after every
//! change:
//!
//! ```text
//! front = normalize(cos(yaw)·cos(pitch), sin(pitch), sin(yaw)·cos(pitch))
//! right = normalize(front × world_up)
//! up    = normalize(right × front)
//! ```
//!
//! Yaw −90° with pitch 0° looks down −Z. When `world_up` is zero or parallel
//! to `front`, the world axis least aligned with `front` stands in for it.

use std::fmt;
use std::str::FromStr;

use universe_catalog::query::CameraPose;
use universe_core::constants::DEG_TO_RAD;
use universe_core::Vector3;

use crate::error::NavError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PITCH_LIMIT_DEG: f64 = 89.0;
pub const MIN_ZOOM_DEG: f64 = 1.0;
pub const MAX_ZOOM_DEG: f64 = 120.0;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 100.0;
pub const SPEED_STEP: f64 = 1.5;

/// Offset from a star the camera lands at after a teleport, along +Z.
pub const TELEPORT_OFFSET_LY: f64 = 0.1;
/// Gap between the Sun's surface and the spawn point.
pub const SPAWN_GAP_LY: f64 = 0.8;
pub const SPAWN_SPEED: f64 = 0.1;

const DEGENERATE_CROSS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraConfig {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    /// Light-years per second.
    pub speed: f64,
    /// Degrees per unit of look input.
    pub sensitivity: f64,
    /// Field of view in degrees.
    pub zoom_deg: f64,
    pub world_up: Vector3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            yaw_deg: -90.0,
            pitch_deg: 0.0,
            speed: 1.0,
            sensitivity: 0.1,
            zoom_deg: 45.0,
            world_up: Vector3::y_axis(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl FromStr for Movement {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "F" | "FORWARD" => Ok(Movement::Forward),
            "B" | "BACK" | "BACKWARD" => Ok(Movement::Backward),
            "L" | "LEFT" => Ok(Movement::Left),
            "R" | "RIGHT" => Ok(Movement::Right),
            "U" | "UP" => Ok(Movement::Up),
            "D" | "DOWN" => Ok(Movement::Down),
            _ => Err(NavError::Parse(format!("unknown direction: {}", s))),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Movement::Forward => "forward",
            Movement::Backward => "backward",
            Movement::Left => "left",
            Movement::Right => "right",
            Movement::Up => "up",
            Movement::Down => "down",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vector3,
    yaw_deg: f64,
    pitch_deg: f64,
    speed: f64,
    sensitivity: f64,
    zoom_deg: f64,
    world_up: Vector3,
    front: Vector3,
    right: Vector3,
    up: Vector3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::zeros(), CameraConfig::default())
    }
}

impl Camera {
    pub fn new(position: Vector3, config: CameraConfig) -> Self {
        let mut camera = Self {
            position,
            yaw_deg: config.yaw_deg,
            pitch_deg: config.pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG),
            speed: config.speed.clamp(MIN_SPEED, MAX_SPEED),
            sensitivity: config.sensitivity,
            zoom_deg: config.zoom_deg.clamp(MIN_ZOOM_DEG, MAX_ZOOM_DEG),
            world_up: config.world_up.normalize(),
            front: Vector3::zeros(),
            right: Vector3::zeros(),
            up: Vector3::zeros(),
        };
        camera.update_vectors();
        camera
    }

    /// Starting pose: just outside a Sun of `sun_radius_ly` on +Z, facing it.
    pub fn spawn_near_sun(sun_radius_ly: f64) -> Self {
        let config = CameraConfig {
            yaw_deg: -90.0,
            pitch_deg: 0.0,
            speed: SPAWN_SPEED,
            ..CameraConfig::default()
        };
        Self::new(Vector3::new(0.0, 0.0, sun_radius_ly + SPAWN_GAP_LY), config)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn front(&self) -> Vector3 {
        self.front
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn yaw(&self) -> f64 {
        self.yaw_deg
    }

    pub fn pitch(&self) -> f64 {
        self.pitch_deg
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn zoom(&self) -> f64 {
        self.zoom_deg
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.front)
    }

    fn update_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = libm::sincos(self.yaw_deg * DEG_TO_RAD);
        let (sin_pitch, cos_pitch) = libm::sincos(self.pitch_deg * DEG_TO_RAD);
        self.front = Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        let mut right = self.front.cross(&self.world_up);
        if right.magnitude() < DEGENERATE_CROSS {
            right = self.front.cross(&least_aligned_axis(&self.front));
        }
        self.right = right.normalize();
        self.up = self.right.cross(&self.front).normalize();
    }

    /// Moves `speed · seconds` light-years along one of the basis vectors.
    pub fn translate(&mut self, direction: Movement, seconds: f64) {
        let step = self.speed * seconds;
        let axis = match direction {
            Movement::Forward => self.front,
            Movement::Backward => -self.front,
            Movement::Right => self.right,
            Movement::Left => -self.right,
            Movement::Up => self.up,
            Movement::Down => -self.up,
        };
        self.position += axis * step;
    }

    /// Applies look input scaled by the sensitivity. Pitch saturates at ±89°.
    pub fn look(&mut self, dx: f64, dy: f64) {
        self.yaw_deg += dx * self.sensitivity;
        self.pitch_deg =
            (self.pitch_deg + dy * self.sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.update_vectors();
    }

    /// Scroll input narrows (positive) or widens (negative) the field of view.
    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom_deg = (self.zoom_deg - delta).clamp(MIN_ZOOM_DEG, MAX_ZOOM_DEG);
    }

    pub fn speed_up(&mut self) {
        self.speed = (self.speed * SPEED_STEP).min(MAX_SPEED);
    }

    pub fn slow_down(&mut self) {
        self.speed = (self.speed / SPEED_STEP).max(MIN_SPEED);
    }

    /// Jumps next to `target`, keeping the current orientation.
    pub fn teleport_to(&mut self, target: Vector3) {
        self.position = target + Vector3::new(0.0, 0.0, TELEPORT_OFFSET_LY);
        self.update_vectors();
    }
}

fn least_aligned_axis(v: &Vector3) -> Vector3 {
    let (x, y, z) = (v.x.abs(), v.y.abs(), v.z.abs());
    if x <= y && x <= z {
        Vector3::x_axis()
    } else if y <= z {
        Vector3::y_axis()
    } else {
        Vector3::z_axis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn close(a: Vector3, b: Vector3) -> bool {
        a.distance_to(&b) < EPSILON
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(close(camera.front(), Vector3::new(0.0, 0.0, -1.0)));
        assert!(close(camera.right(), Vector3::new(1.0, 0.0, 0.0)));
        assert!(close(camera.up(), Vector3::new(0.0, 1.0, 0.0)));
        assert_eq!(camera.zoom(), 45.0);
        assert_eq!(camera.speed(), 1.0);
    }

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!(f.is_finite() && r.is_finite() && u.is_finite());
        assert!((f.magnitude() - 1.0).abs() < EPSILON);
        assert!((r.magnitude() - 1.0).abs() < EPSILON);
        assert!((u.magnitude() - 1.0).abs() < EPSILON);
        assert!(f.dot(&r).abs() < EPSILON);
        assert!(f.dot(&u).abs() < EPSILON);
        assert!(r.dot(&u).abs() < EPSILON);
    }

    #[test]
    fn test_world_up_parallel_to_front_keeps_basis() {
        // Yaw 0° and pitch 0° look straight down +X.
        let config = CameraConfig {
            yaw_deg: 0.0,
            world_up: Vector3::x_axis(),
            ..CameraConfig::default()
        };
        let camera = Camera::new(Vector3::zeros(), config);
        assert!(close(camera.front(), Vector3::x_axis()));
        assert_orthonormal(&camera);

        let config = CameraConfig {
            world_up: Vector3::zeros(),
            ..CameraConfig::default()
        };
        assert_orthonormal(&Camera::new(Vector3::zeros(), config));
    }

    #[test]
    fn test_basis_is_orthonormal_after_look() {
        let mut camera = Camera::default();
        camera.look(337.0, 215.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_pitch_saturates() {
        let mut camera = Camera::default();
        for _ in 0..100 {
            camera.look(0.0, -50.0);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT_DEG);
        camera.look(0.0, 5000.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT_DEG);
    }

    #[test]
    fn test_translate_each_direction() {
        let mut camera = Camera::default();
        camera.translate(Movement::Forward, 2.0);
        assert!(close(camera.position(), Vector3::new(0.0, 0.0, -2.0)));
        camera.translate(Movement::Backward, 2.0);
        camera.translate(Movement::Right, 0.5);
        assert!(close(camera.position(), Vector3::new(0.5, 0.0, 0.0)));
        camera.translate(Movement::Left, 0.5);
        camera.translate(Movement::Up, 3.0);
        camera.translate(Movement::Down, 1.0);
        assert!(close(camera.position(), Vector3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_small_steps_far_from_origin() {
        let mut camera = Camera::new(Vector3::new(0.0, 0.0, 5000.0), CameraConfig::default());
        camera.translate(Movement::Forward, 1e-9);
        assert!(camera.position().z < 5000.0);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::default();
        camera.zoom_by(10.0);
        assert_eq!(camera.zoom(), 35.0);
        camera.zoom_by(100.0);
        assert_eq!(camera.zoom(), MIN_ZOOM_DEG);
        camera.zoom_by(-500.0);
        assert_eq!(camera.zoom(), MAX_ZOOM_DEG);
    }

    #[test]
    fn test_speed_limits() {
        let mut camera = Camera::default();
        camera.speed_up();
        assert!((camera.speed() - 1.5).abs() < EPSILON);
        for _ in 0..50 {
            camera.speed_up();
        }
        assert_eq!(camera.speed(), MAX_SPEED);
        for _ in 0..100 {
            camera.slow_down();
        }
        assert_eq!(camera.speed(), MIN_SPEED);
    }

    #[test]
    fn test_spawn_and_teleport() {
        let mut camera = Camera::spawn_near_sun(7.36e-8);
        assert!((camera.position().z - (0.8 + 7.36e-8)).abs() < EPSILON);
        assert_eq!(camera.speed(), SPAWN_SPEED);
        assert!(close(camera.front(), Vector3::new(0.0, 0.0, -1.0)));

        camera.look(10.0, 10.0);
        let front = camera.front();
        camera.teleport_to(Vector3::new(4.0, -2.0, 1.0));
        assert!(close(camera.position(), Vector3::new(4.0, -2.0, 1.1)));
        assert!(close(camera.front(), front));
    }

    #[test]
    fn test_movement_parse() {
        assert_eq!("forward".parse::<Movement>().unwrap(), Movement::Forward);
        assert_eq!("B".parse::<Movement>().unwrap(), Movement::Backward);
        assert!("sideways".parse::<Movement>().is_err());
    }
}
