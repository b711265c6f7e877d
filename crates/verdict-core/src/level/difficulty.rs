use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::Error;

/// Difficulty tier on the P/G/U scale. Tiers order P < G < U; every U-tier
/// clear counts as a universal pass.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Tier {
    #[default]
    P = 1,
    G = 2,
    U = 3,
}

impl Tier {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A tiered difficulty like `U7`: tier letter plus a level number.
///
/// Orders tier-first, then by level, matching how top-difficulty stats are
/// tracked. The default is `P1`, the lowest rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PguDifficulty {
    pub tier: Tier,
    pub level: u32,
}

impl Default for PguDifficulty {
    fn default() -> Self {
        Self {
            tier: Tier::P,
            level: 1,
        }
    }
}

impl PguDifficulty {
    pub fn new(tier: Tier, level: u32) -> Self {
        Self { tier, level }
    }

    /// Scalar usable as a sort key across tiers (P1 = 101, U7 = 307, ...).
    pub fn sort_order(&self) -> u32 {
        u32::from(self.tier as u8) * 100 + self.level
    }
}

impl FromStr for PguDifficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let invalid = || Error::InvalidDifficulty(s.to_string());
        let (tier_str, level_str) = s.split_at_checked(1).ok_or_else(invalid)?;
        let tier = Tier::from_str(tier_str).map_err(|_| invalid())?;
        let level: u32 = level_str.parse().map_err(|_| invalid())?;
        Ok(Self { tier, level })
    }
}

impl std::fmt::Display for PguDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tier, self.level)
    }
}

impl Serialize for PguDifficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PguDifficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
