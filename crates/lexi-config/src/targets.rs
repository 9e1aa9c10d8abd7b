use std::collections::BTreeMap;

use lexi_types::Tier;
use serde::{Deserialize, Serialize};

/// Per-tier target word counts. Tiers missing from the file fall back to
/// [`Tier::default_target`].
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct TargetsConfig {
    overrides: BTreeMap<Tier, u32>,
}

impl TargetsConfig {
    pub fn target_for(&self, tier: Tier) -> u32 {
        self.overrides
            .get(&tier)
            .copied()
            .unwrap_or_else(|| tier.default_target())
    }

    pub fn set(&mut self, tier: Tier, target: u32) {
        self.overrides.insert(tier, target);
    }
}
