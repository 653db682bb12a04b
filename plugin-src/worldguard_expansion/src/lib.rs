//! WorldGuard expansion: region metadata as `%worldguard_<params>%` placeholders.
//!
//! This crate is structured in a decentralized way:
//! - **[location](location)** — World locations and block points
//! - **[selection](selection)** — Region shapes (cuboid, polygon, global)
//! - **[region](region)** — Region, owner/member and flag types
//! - **[host](host)** — Read-only traits the protection host implements
//! - **[store](store)** — In-memory region store implementing those traits
//! - **[request](request)** — Placeholder parameter parsing
//! - **[resolver](resolver)** — Region ranking and attribute formatting
//! - **[expansion](expansion)** — Placeholder host contract
//! - **[config](config)** — `config.toml` settings
//!
//! Supported placeholders, each optionally suffixed with `_<rank>` to pick the
//! n-th highest priority region and with `:<world>,<x>,<y>,<z>` or
//! `:<world>,<region>` to evaluate somewhere other than the player:
//!
//! | Placeholder | Value |
//! |---|---|
//! | `region_name`, `region_name_capitalized` | Region id |
//! | `region_owner`, `region_members` | Player names, `, ` separated |
//! | `region_owner_groups`, `region_members_groups` | Groups as `*group` |
//! | `region_flags` | `[flag=value, ...]` |
//! | `region_has_flag_<flag>` | Configured true/false text |
//! | `region_{min,max}_point_{x,y,z}` | Shape bounds |

pub mod config;
pub mod error;
pub mod expansion;
pub mod host;
pub mod location;
pub mod region;
pub mod request;
pub mod resolver;
pub mod selection;
pub mod store;

pub use config::ExpansionConfig;
pub use error::{ExpansionError, LookupError};
pub use expansion::{ExpansionMetadata, PlaceholderExpansion};
pub use host::{PlaceholderPlayer, PlayerDirectory, ProtectionHost, RegionContainer};
pub use location::{BlockVector, BlockVector2, Location};
pub use region::{FlagValue, Region, RegionDomain, StateFlag};
pub use resolver::WorldGuardExpansion;
pub use selection::Selection;
pub use store::RegionStore;

/// Identity reported to the placeholder host.
pub static METADATA: ExpansionMetadata<'static> = ExpansionMetadata {
    name: "WorldGuard",
    identifier: "worldguard",
    author: "clip",
    version: env!("CARGO_PKG_VERSION"),
};
