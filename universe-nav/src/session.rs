//! A loaded catalog plus the camera exploring it.

use std::path::Path;

use tracing::info;
use universe_catalog::query::{
    select_target, visible_stars, TargetParams, TargetSelection, VisibleParams, VisibleStar,
};
use universe_catalog::{load, BodyId, Catalog, IngestReport, LoadConfig};

use crate::camera::Camera;
use crate::command::{CommandQueue, NavCommand, SpeedChange};
use crate::error::{NavError, Result};

pub struct Session {
    pub catalog: Catalog,
    pub report: IngestReport,
    pub camera: Camera,
    pub visible_params: VisibleParams,
    pub target_params: TargetParams,
    /// Star reached by the most recent `Goto`.
    pub last_goto: Option<BodyId>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::new(), IngestReport::default())
    }
}

impl Session {
    /// Wraps a catalog and spawns the camera beside the Sun, if there is one.
    pub fn new(catalog: Catalog, report: IngestReport) -> Self {
        let sun_radius_ly = catalog
            .find_key("sun")
            .and_then(|id| catalog.get(id))
            .map_or(0.0, |sun| sun.radius_ly());

        Self {
            camera: Camera::spawn_near_sun(sun_radius_ly),
            catalog,
            report,
            visible_params: VisibleParams::default(),
            target_params: TargetParams::default(),
            last_goto: None,
        }
    }

    pub fn open(stars: &Path, planets: Option<&Path>) -> Result<Self> {
        let mut config = LoadConfig::new(stars);
        if let Some(planets) = planets {
            config = config.with_planets(planets);
        }
        let (catalog, report) = load(&config)?;
        info!(
            "Session ready: {} stars, {} planets",
            catalog.star_count(),
            catalog.planet_count()
        );
        Ok(Self::new(catalog, report))
    }

    /// Resolves `query` and moves the camera next to the star.
    pub fn teleport(&mut self, query: &str) -> Result<BodyId> {
        let id = self
            .catalog
            .search(query)
            .ok_or_else(|| NavError::StarNotFound(query.trim().to_string()))?;
        let position = self
            .catalog
            .get(id)
            .map(|body| body.position)
            .ok_or_else(|| NavError::StarNotFound(query.trim().to_string()))?;
        self.camera.teleport_to(position);
        self.last_goto = Some(id);
        info!("Teleported to {} at {:.4}", id, position);
        Ok(id)
    }

    pub fn apply(&mut self, command: &NavCommand) -> Result<()> {
        match command {
            NavCommand::Move { direction, seconds } => self.camera.translate(*direction, *seconds),
            NavCommand::Look { dx, dy } => self.camera.look(*dx, *dy),
            NavCommand::Zoom(delta) => self.camera.zoom_by(*delta),
            NavCommand::Speed(SpeedChange::Increase) => self.camera.speed_up(),
            NavCommand::Speed(SpeedChange::Decrease) => self.camera.slow_down(),
            NavCommand::Goto(query) => {
                self.teleport(query)?;
            }
        }
        Ok(())
    }

    /// Applies every queued command in order. The first failure stops the
    /// batch and discards the commands behind it.
    pub fn apply_all(&mut self, queue: &mut CommandQueue) -> Result<usize> {
        let mut applied = 0;
        for command in queue.drain() {
            self.apply(&command)?;
            applied += 1;
        }
        Ok(applied)
    }

    pub fn visible(&self) -> Vec<VisibleStar> {
        visible_stars(&self.catalog, &self.camera.pose(), &self.visible_params)
    }

    pub fn target(&self) -> Option<TargetSelection> {
        select_target(&self.catalog, &self.camera.pose(), &self.target_params)
    }

    pub fn name_of(&self, id: BodyId) -> String {
        self.catalog
            .get(id)
            .map_or_else(|| id.to_string(), |b| b.name.clone())
    }
}
