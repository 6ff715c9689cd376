//! Arena storage for stars and planets with name and HIP indices.
//!
//! Bodies live in a single `Vec` addressed by [`BodyId`]. Lookups go through
//! two index tables: lowercase name keys (display names and legacy
//! `system_name` compound keys) and Hipparcos numbers. Several keys may point
//! to the same star; a star whose last key is overwritten by a later row
//! becomes unreachable and is dropped from the arena.
//!
//! Planets are not indexed by name. They are found through their host.

use std::collections::HashMap;

use crate::body::{BodyId, BodyKind, CelestialBody, PlanetInfo, StarInfo};
use crate::error::RowError;

/// How a name key behaves when it is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Replace the existing entry.
    Overwrite,
    /// Keep the existing entry and skip this key.
    KeepFirst,
}

/// One index entry to create for a newly inserted star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexKey {
    Name(String, KeyPolicy),
    Hip(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome {
    pub id: BodyId,
    /// Stars that lost their last key to this insert and were removed.
    pub displaced: Vec<CelestialBody>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    pub stars: usize,
    pub planets: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bodies: Vec<Option<CelestialBody>>,
    key_refs: Vec<u32>,
    names: HashMap<String, BodyId>,
    hips: HashMap<u32, BodyId>,
}

/// Lowercase compound key for a legacy row: `system_name` with spaces as `_`.
pub fn compound_key(system: &str, name: &str) -> String {
    format!("{}_{}", system, name).to_lowercase().replace(' ', "_")
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index()).and_then(Option::as_ref)
    }

    pub fn star(&self, id: BodyId) -> Option<(&CelestialBody, &StarInfo)> {
        self.get(id).and_then(|b| b.as_star().map(|s| (b, s)))
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    /// Live stars in insertion order.
    pub fn stars(&self) -> impl Iterator<Item = (BodyId, &CelestialBody, &StarInfo)> + '_ {
        self.live().filter_map(|(id, b)| b.as_star().map(|s| (id, b, s)))
    }

    /// Live planets in insertion order.
    pub fn planets(&self) -> impl Iterator<Item = (BodyId, &CelestialBody, &PlanetInfo)> + '_ {
        self.live().filter_map(|(id, b)| b.as_planet().map(|p| (id, b, p)))
    }

    pub fn planets_of(
        &self,
        host: BodyId,
    ) -> impl Iterator<Item = (BodyId, &CelestialBody, &PlanetInfo)> + '_ {
        self.planets().filter(move |(_, _, p)| p.host == host)
    }

    pub fn star_count(&self) -> usize {
        self.stars().count()
    }

    pub fn planet_count(&self) -> usize {
        self.planets().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.iter().all(Option::is_none)
    }

    /// Looks up a name or compound key, case-insensitively.
    pub fn find_key(&self, key: &str) -> Option<BodyId> {
        self.names.get(&key.trim().to_lowercase()).copied()
    }

    pub fn find_hip(&self, hip: u32) -> Option<BodyId> {
        self.hips.get(&hip).copied()
    }

    /// Exact key lookup that also accepts the `hip<N>` spelling.
    pub fn lookup(&self, key: &str) -> Option<BodyId> {
        let key = key.trim().to_lowercase();
        self.names.get(&key).copied().or_else(|| {
            key.strip_prefix("hip")
                .and_then(|n| n.parse::<u32>().ok())
                .and_then(|hip| self.find_hip(hip))
        })
    }

    /// Number of name keys currently indexed, compound keys included.
    pub fn key_count(&self) -> usize {
        self.names.len()
    }

    fn live(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.as_ref().map(|b| (BodyId(i as u32), b)))
    }

    fn push(&mut self, body: CelestialBody) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Some(body));
        self.key_refs.push(0);
        id
    }

    /// Inserts a star and indexes it under `keys`.
    ///
    /// A key that replaces another star's entry releases that star's
    /// reference; a star left with no references is removed and returned in
    /// [`InsertOutcome::displaced`].
    pub fn insert_star(&mut self, body: CelestialBody, keys: &[IndexKey]) -> InsertOutcome {
        let id = self.push(body);
        let mut released = Vec::new();

        for key in keys {
            let previous = match key {
                IndexKey::Name(name, policy) => {
                    let name = name.to_lowercase();
                    if *policy == KeyPolicy::KeepFirst && self.names.contains_key(&name) {
                        continue;
                    }
                    self.names.insert(name, id)
                }
                IndexKey::Hip(hip) => self.hips.insert(*hip, id),
            };
            match previous {
                // Same star listed the same key twice.
                Some(prev) if prev == id => {}
                Some(prev) => {
                    self.key_refs[id.index()] += 1;
                    self.key_refs[prev.index()] -= 1;
                    released.push(prev);
                }
                None => self.key_refs[id.index()] += 1,
            }
        }

        let mut displaced = Vec::new();
        for prev in released {
            if self.key_refs[prev.index()] == 0 {
                if let Some(body) = self.bodies[prev.index()].take() {
                    displaced.push(body);
                }
            }
        }

        InsertOutcome { id, displaced }
    }

    /// Inserts a planet. Its host must be a live star.
    pub fn insert_planet(&mut self, body: CelestialBody) -> Result<BodyId, RowError> {
        let host = match &body.kind {
            BodyKind::Planet(info) => info.host,
            BodyKind::Star(_) => return Err(RowError::UnknownHost(body.name.clone())),
        };
        if self.star(host).is_none() {
            return Err(RowError::UnknownHost(host.to_string()));
        }
        Ok(self.push(body))
    }

    /// Removes stars together with every planet they host, and purges all
    /// index entries that pointed at them.
    pub fn remove_stars(&mut self, ids: &[BodyId]) -> RemovalSummary {
        let mut summary = RemovalSummary::default();

        for &id in ids {
            if self.star(id).is_none() {
                continue;
            }
            let moons: Vec<BodyId> = self.planets_of(id).map(|(pid, _, _)| pid).collect();
            for pid in moons {
                self.bodies[pid.index()] = None;
                summary.planets += 1;
            }
            self.bodies[id.index()] = None;
            self.key_refs[id.index()] = 0;
            summary.stars += 1;
        }

        let bodies = &self.bodies;
        let alive = |id: &BodyId| bodies.get(id.index()).map_or(false, Option::is_some);
        self.names.retain(|_, id| alive(id));
        self.hips.retain(|_, id| alive(id));

        summary
    }

    /// Resolves free text to a star.
    ///
    /// Tried in order: `hip<N>`, a bare number as a HIP id, an exact name or
    /// compound key, then the first star in catalog order whose name contains
    /// the query. Matching is case-insensitive.
    pub fn search(&self, query: &str) -> Option<BodyId> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        if let Some(hip) = query
            .strip_prefix("hip")
            .and_then(|rest| rest.trim().parse::<u32>().ok())
        {
            if let Some(id) = self.find_hip(hip) {
                return Some(id);
            }
        }
        if let Some(id) = query.parse::<u32>().ok().and_then(|hip| self.find_hip(hip)) {
            return Some(id);
        }
        if let Some(id) = self.names.get(&query) {
            return Some(*id);
        }
        self.stars()
            .find(|(_, body, _)| body.name.to_lowercase().contains(&query))
            .map(|(id, _, _)| id)
    }
}
