//! Placeholder resolution: locate a point, pick the ranked region there, format one attribute.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use crate::config::ExpansionConfig;
use crate::error::{ExpansionError, LookupError};
use crate::expansion::{ExpansionMetadata, PlaceholderExpansion};
use crate::host::{PlaceholderPlayer, ProtectionHost};
use crate::location::Location;
use crate::region::{FlagValue, Region, RegionDomain};
use crate::request::{LocationSpec, Request, Target};
use crate::selection::{Axis, Bound, Selection};
use crate::METADATA;

const HAS_FLAG_PREFIX: &str = "region_has_flag_";
const MIN_POINT_PREFIX: &str = "region_min_point_";
const MAX_POINT_PREFIX: &str = "region_max_point_";

/// The `worldguard` placeholder expansion.
pub struct WorldGuardExpansion<H> {
    host: Arc<H>,
    config: ExpansionConfig,
}

impl<H: ProtectionHost> WorldGuardExpansion<H> {
    pub fn new(host: Arc<H>, config: ExpansionConfig) -> Self {
        Self { host, config }
    }

    /// Builds the expansion if the protection host is present.
    ///
    /// Without a host there is nothing to read from, so registration is refused.
    pub fn can_register(host: Option<Arc<H>>, config: ExpansionConfig) -> Result<Self, ExpansionError> {
        let Some(host) = host else {
            log::warn!("worldguard: Protection host not found, placeholders not registered");
            return Err(ExpansionError::HostUnavailable);
        };
        log::info!(
            "worldguard: Registered %{}_<params>% placeholders (v{})",
            METADATA.identifier,
            METADATA.version
        );
        Ok(Self::new(host, config))
    }

    /// Resolves one placeholder. Lookup failures never escape: they become `None` or `""`.
    pub fn resolve(&self, player: Option<&dyn PlaceholderPlayer>, params: &str) -> Option<String> {
        let request = match Request::parse(params) {
            Ok(r) => r,
            Err(e) => return miss(params, &e),
        };

        let location = match &request.target {
            Target::Player => {
                let Some(location) = player.filter(|p| p.is_online()).and_then(|p| p.location())
                else {
                    log::debug!("worldguard: {params}: {}", LookupError::MissingPlayer);
                    return Some(String::new());
                };
                location
            }
            Target::At(spec) => match self.locate(spec) {
                Ok(l) => l,
                Err(e) => return miss(params, &e),
            },
        };

        match self.ranked_region(&location, request.rank) {
            Ok(region) => self.format(&region, &request.key),
            Err(e) => miss(params, &e),
        }
    }

    fn locate(&self, spec: &LocationSpec) -> Result<Location, LookupError> {
        match spec {
            LocationSpec::Point(location) => {
                if !self.host.has_world(&location.world) {
                    return Err(LookupError::UnknownWorld(location.world.clone()));
                }
                Ok(location.clone())
            }
            LocationSpec::Region { world, id } => {
                if !self.host.has_world(world) {
                    return Err(LookupError::UnknownWorld(world.clone()));
                }
                let region = self.host.region(world, id).ok_or_else(|| LookupError::UnknownRegion {
                    world: world.clone(),
                    region: id.clone(),
                })?;
                let (x, y, z) = region
                    .selection
                    .center()
                    .ok_or_else(|| LookupError::NoCentroid(region.id().to_owned()))?;
                Ok(Location::new(world.as_str(), x, y, z))
            }
        }
    }

    /// The region at 1-based `rank` among those covering `location`, highest priority first.
    ///
    /// Equal priorities keep the host's discovery order.
    fn ranked_region(&self, location: &Location, rank: u32) -> Result<Region, LookupError> {
        let mut regions = self.host.regions_at(location);
        regions.sort_by_key(|r| Reverse(r.priority));
        let mut seen = HashSet::new();
        regions.retain(|r| seen.insert(r.id().to_owned()));

        let available = regions.len();
        let index = usize::try_from(rank).unwrap_or(usize::MAX).saturating_sub(1);
        regions
            .into_iter()
            .nth(index)
            .ok_or(LookupError::RankOutOfRange { rank, available })
    }

    fn format(&self, region: &Region, key: &str) -> Option<String> {
        if let Some(flag) = key.strip_prefix(HAS_FLAG_PREFIX) {
            if flag.is_empty() {
                return None;
            }
            return Some(self.config.booleans.token(region.has_flag(flag)).to_owned());
        }

        match key {
            "region_name" => return Some(region.id().to_owned()),
            "region_name_capitalized" => return Some(capitalize(region.id())),
            "region_owner" => return Some(self.player_names(&region.owners)),
            "region_owner_groups" => return Some(group_list(&region.owners)),
            "region_members" => return Some(self.player_names(&region.members)),
            "region_members_groups" => return Some(group_list(&region.members)),
            "region_flags" => return Some(flag_dump(&region.flags)),
            _ => {}
        }

        let (bound, axis) = point_key(key)?;
        if matches!(region.selection, Selection::Global) {
            return Some(String::new());
        }
        region.selection.extremum(bound, axis).map(|v| v.to_string())
    }

    fn player_names(&self, domain: &RegionDomain) -> String {
        let names: BTreeSet<String> = domain
            .players
            .iter()
            .filter_map(|uuid| {
                let name = self.host.player_name(uuid);
                if name.is_none() {
                    log::debug!("worldguard: No name known for player {uuid}");
                }
                name
            })
            .collect();
        names.into_iter().collect::<Vec<_>>().join(", ")
    }
}

impl<H: ProtectionHost + Send + Sync> PlaceholderExpansion for WorldGuardExpansion<H> {
    fn metadata(&self) -> &ExpansionMetadata<'static> {
        &METADATA
    }

    fn on_request(&self, player: Option<&dyn PlaceholderPlayer>, params: &str) -> Option<String> {
        self.resolve(player, params)
    }
}

fn miss(params: &str, err: &LookupError) -> Option<String> {
    log::debug!("worldguard: {params}: {err}");
    None
}

/// Uppercases the first character, but only when it is a letter.
fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => first.to_uppercase().chain(chars).collect(),
        _ => id.to_owned(),
    }
}

fn group_list(domain: &RegionDomain) -> String {
    domain
        .groups
        .iter()
        .map(|g| format!("*{g}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn flag_dump(flags: &BTreeMap<String, FlagValue>) -> String {
    let entries: Vec<String> = flags.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("[{}]", entries.join(", "))
}

fn point_key(key: &str) -> Option<(Bound, Axis)> {
    let (bound, axis) = if let Some(axis) = key.strip_prefix(MIN_POINT_PREFIX) {
        (Bound::Min, axis)
    } else {
        (Bound::Max, key.strip_prefix(MAX_POINT_PREFIX)?)
    };
    let axis = match axis {
        "x" => Axis::X,
        "y" => Axis::Y,
        "z" => Axis::Z,
        _ => return None,
    };
    Some((bound, axis))
}
