//! Parsing of placeholder parameters.
//!
//! Grammar of the text after `%worldguard_`:
//! - `<key>[_<rank>]` for the player's own location
//! - `<key>[_<rank>]:<world>,<x>,<y>,<z>` for an explicit point
//! - `<key>[_<rank>]:<world>,<region>` for the center of a named region
//!
//! The rank may sit anywhere as long as it is the last `_` followed by a non-zero digit.
//! It is taken from the whole text, location included, so `region_name:world_2,5,5,5`
//! asks for rank 2 at `world,5,5,5`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LookupError;
use crate::location::Location;

/// Where a placeholder should be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSpec {
    /// A literal point in a world.
    Point(Location),
    /// The center of a region, looked up by id.
    Region { world: String, id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// The requesting player's current location.
    Player,
    At(LocationSpec),
}

/// A parsed placeholder request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub key: String,
    /// 1-based rank among overlapping regions, highest priority first.
    pub rank: u32,
    pub target: Target,
}

impl Request {
    pub fn parse(params: &str) -> Result<Self, LookupError> {
        let (rank, params) = split_rank(params)?;
        let Some((key, rest)) = params.split_once(':') else {
            return Ok(Self {
                key: params.clone(),
                rank,
                target: Target::Player,
            });
        };
        let spec = rest.split(':').next().unwrap_or_default();
        Ok(Self {
            key: key.to_owned(),
            rank,
            target: Target::At(LocationSpec::parse(spec)?),
        })
    }
}

/// Last `_` followed by a non-zero digit, with its whole digit run.
static RANK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)_([1-9]\d*)(.*)$").expect("rank pattern compiles"));

/// Removes the last `_<digits>` group whose first digit is non-zero and returns it as the rank.
fn split_rank(params: &str) -> Result<(u32, String), LookupError> {
    let Some(caps) = RANK_PATTERN.captures(params) else {
        return Ok((1, params.to_owned()));
    };
    let digits = &caps[2];
    let rank = digits
        .parse::<u32>()
        .map_err(|_| LookupError::PriorityOverflow(digits.to_owned()))?;
    Ok((rank, format!("{}{}", &caps[1], &caps[3])))
}

impl LocationSpec {
    pub fn parse(spec: &str) -> Result<Self, LookupError> {
        let malformed = || LookupError::MalformedLocation(spec.to_owned());
        if !spec.contains(',') {
            return Err(malformed());
        }
        let mut parts: Vec<&str> = spec.split(',').collect();
        while parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
        match parts.as_slice() {
            [world, id] => Ok(Self::Region {
                world: (*world).to_owned(),
                id: (*id).to_owned(),
            }),
            [world, x, y, z, ..] => {
                let coord = |s: &str| {
                    s.trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(malformed)
                };
                Ok(Self::Point(Location::new(*world, coord(*x)?, coord(*y)?, coord(*z)?)))
            }
            _ => Err(malformed()),
        }
    }
}
