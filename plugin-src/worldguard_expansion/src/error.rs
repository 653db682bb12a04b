//! Error types: load-time failures and lookup misses.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading or registering the expansion.
#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error("protection host is not available")]
    HostUnavailable,
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("write default config {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Reasons a placeholder lookup produced no value. Never leaves the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("malformed location `{0}`")]
    MalformedLocation(String),
    #[error("unknown world `{0}`")]
    UnknownWorld(String),
    #[error("no region `{region}` in world `{world}`")]
    UnknownRegion { world: String, region: String },
    #[error("region `{0}` has no center")]
    NoCentroid(String),
    #[error("rank {rank} requested but only {available} regions cover the point")]
    RankOutOfRange { rank: u32, available: usize },
    #[error("priority `{0}` is out of range")]
    PriorityOverflow(String),
    #[error("no online player to take a location from")]
    MissingPlayer,
}
