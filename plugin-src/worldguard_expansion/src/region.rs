//! Region and flag types as exposed by the protection host.
//!
//! Decoupled from placeholder logic so region records can be built and tested independently.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use uuid::Uuid;

use crate::selection::Selection;

/// Value of a region flag. Displays the way the host prints flag values.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    State(StateFlag),
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
}

/// Allow/deny toggle used by most protection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFlag {
    Allow,
    Deny,
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(StateFlag::Allow) => write!(f, "ALLOW"),
            Self::State(StateFlag::Deny) => write!(f, "DENY"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d:?}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// Players and groups attached to a region in one role (owners or members).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionDomain {
    pub players: HashSet<Uuid>,
    pub groups: BTreeSet<String>,
}

impl RegionDomain {
    pub fn with_players(players: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            players: players.into_iter().collect(),
            groups: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.groups.insert(name.into());
        self
    }
}

/// A named, prioritized protected area.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: String,
    pub priority: i32,
    pub owners: RegionDomain,
    pub members: RegionDomain,
    pub flags: BTreeMap<String, FlagValue>,
    pub selection: Selection,
}

impl Region {
    /// Creates an empty region. Ids are stored lowercase, the way the host normalizes them.
    pub fn new(id: &str, selection: Selection) -> Self {
        Self {
            id: id.to_lowercase(),
            priority: 0,
            owners: RegionDomain::default(),
            members: RegionDomain::default(),
            flags: BTreeMap::new(),
            selection,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_owners(mut self, owners: RegionDomain) -> Self {
        self.owners = owners;
        self
    }

    #[must_use]
    pub fn with_members(mut self, members: RegionDomain) -> Self {
        self.members = members;
        self
    }

    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>, value: FlagValue) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns true if a flag with this name is set, ignoring ASCII case.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.keys().any(|k| k.eq_ignore_ascii_case(name))
    }
}
