//! Seams to the systems this expansion reads from.
//!
//! The protection host owns the region index and the server owns player
//! profiles. Both are only ever queried, never mutated.

use uuid::Uuid;

use crate::location::Location;
use crate::region::Region;

/// Read-only view of the protection host's regions.
pub trait RegionContainer {
    /// Returns true if the host manages a world with this name.
    fn has_world(&self, world: &str) -> bool;

    /// All regions covering the location, in the host's discovery order.
    fn regions_at(&self, location: &Location) -> Vec<Region>;

    /// Looks a region up by id within a world.
    fn region(&self, world: &str, id: &str) -> Option<Region>;
}

/// Resolves stored player ids to display names.
pub trait PlayerDirectory {
    fn player_name(&self, uuid: &Uuid) -> Option<String>;
}

/// The player a placeholder is rendered for.
pub trait PlaceholderPlayer {
    /// Current location while online, `None` when offline.
    fn location(&self) -> Option<Location>;

    fn is_online(&self) -> bool {
        self.location().is_some()
    }
}

/// Everything the expansion needs from the server side.
pub trait ProtectionHost: RegionContainer + PlayerDirectory {}

impl<T: RegionContainer + PlayerDirectory> ProtectionHost for T {}
