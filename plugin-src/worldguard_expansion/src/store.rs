//! In-memory protection host: region lookup by world and position, player names.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::host::{PlayerDirectory, RegionContainer};
use crate::location::Location;
use crate::region::Region;

/// Regions per world, in insertion order, plus known player names.
///
/// Insertion order is the discovery order reported by [`RegionContainer::regions_at`].
#[derive(Debug, Default)]
pub struct RegionStore {
    worlds: RwLock<HashMap<String, Vec<Region>>>,
    players: RwLock<HashMap<Uuid, String>>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a world with no regions.
    pub fn add_world(&self, world: &str) {
        if let Ok(mut worlds) = self.worlds.write() {
            worlds.entry(world.to_owned()).or_default();
        }
    }

    /// Adds a region. Returns false if the world already has a region with that id.
    pub fn add(&self, world: &str, region: Region) -> bool {
        let Ok(mut worlds) = self.worlds.write() else {
            return false;
        };
        let regions = worlds.entry(world.to_owned()).or_default();
        if regions.iter().any(|r| r.id() == region.id()) {
            return false;
        }
        regions.push(region);
        true
    }

    pub fn set_player_name(&self, uuid: Uuid, name: impl Into<String>) {
        if let Ok(mut players) = self.players.write() {
            players.insert(uuid, name.into());
        }
    }
}

impl RegionContainer for RegionStore {
    fn has_world(&self, world: &str) -> bool {
        self.worlds.read().is_ok_and(|w| w.contains_key(world))
    }

    fn regions_at(&self, location: &Location) -> Vec<Region> {
        let block = location.block();
        let Ok(worlds) = self.worlds.read() else {
            return Vec::new();
        };
        worlds
            .get(&location.world)
            .map(|regions| {
                regions
                    .iter()
                    .filter(|r| r.selection.contains(block))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn region(&self, world: &str, id: &str) -> Option<Region> {
        let worlds = self.worlds.read().ok()?;
        worlds
            .get(world)?
            .iter()
            .find(|r| r.id().eq_ignore_ascii_case(id))
            .cloned()
    }
}

impl PlayerDirectory for RegionStore {
    fn player_name(&self, uuid: &Uuid) -> Option<String> {
        self.players.read().ok()?.get(uuid).cloned()
    }
}
