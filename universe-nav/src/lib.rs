//! Camera navigation over a loaded star catalog.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`camera`] | [`Camera`]: yaw/pitch basis, movement, look, zoom, speed, teleport |
//! | [`command`] | [`NavCommand`] and the [`CommandQueue`] input collaborators push into |
//! | [`session`] | [`Session`]: catalog, camera and the per-frame queries together |
//! | [`console`] | Text commands for the `explore` REPL |
//! | [`error`] | [`NavError`] |
//!
//! # Quick Start
//!
//! ```
//! use universe_nav::{CommandQueue, NavCommand, Session, SpeedChange};
//! use universe_nav::camera::Movement;
//!
//! let mut session = Session::default();
//! let mut queue = CommandQueue::new();
//! queue.push(NavCommand::Speed(SpeedChange::Increase));
//! queue.push(NavCommand::Move { direction: Movement::Forward, seconds: 2.0 });
//! session.apply_all(&mut queue).unwrap();
//!
//! // Spawned at z = 0.8 facing -Z, then 0.15 ly/s for 2 s.
//! assert!((session.camera.position().z - 0.5).abs() < 1e-9);
//! ```

pub mod camera;
pub mod command;
pub mod console;
pub mod error;
pub mod session;

pub use camera::{Camera, CameraConfig, Movement};
pub use command::{CommandQueue, NavCommand, SpeedChange};
pub use error::{NavError, Result};
pub use session::Session;
