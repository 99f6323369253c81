//! Hourly rate lookup by experience tier and region

use std::collections::HashMap;
use taskplan_core::{ExperienceTier, Region};

/// USD hourly rates for every supported (tier, region) pair
const RATES: &[(ExperienceTier, Region, u32)] = &[
    (ExperienceTier::Junior, Region::UsCanada, 30),
    (ExperienceTier::Junior, Region::WesternEurope, 25),
    (ExperienceTier::Junior, Region::EasternEurope, 15),
    (ExperienceTier::Junior, Region::Asia, 10),
    (ExperienceTier::Junior, Region::LatinAmerica, 12),
    (ExperienceTier::Junior, Region::GlobalAverage, 20),
    (ExperienceTier::Mid, Region::UsCanada, 60),
    (ExperienceTier::Mid, Region::WesternEurope, 50),
    (ExperienceTier::Mid, Region::EasternEurope, 30),
    (ExperienceTier::Mid, Region::Asia, 20),
    (ExperienceTier::Mid, Region::LatinAmerica, 25),
    (ExperienceTier::Mid, Region::GlobalAverage, 40),
    (ExperienceTier::Senior, Region::UsCanada, 100),
    (ExperienceTier::Senior, Region::WesternEurope, 80),
    (ExperienceTier::Senior, Region::EasternEurope, 50),
    (ExperienceTier::Senior, Region::Asia, 35),
    (ExperienceTier::Senior, Region::LatinAmerica, 40),
    (ExperienceTier::Senior, Region::GlobalAverage, 65),
];

/// Immutable hourly rate table
///
/// Built once at construction and read-only afterwards, so a single table
/// can be shared across any number of concurrent estimates.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<(ExperienceTier, Region), u32>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RateTable {
    pub fn new() -> Self {
        Self {
            rates: RATES.iter().map(|&(tier, region, rate)| ((tier, region), rate)).collect(),
        }
    }

    /// Hourly rate for the combination, if supported
    pub fn rate(&self, tier: ExperienceTier, region: Region) -> Option<u32> {
        self.rates.get(&(tier, region)).copied()
    }
}
