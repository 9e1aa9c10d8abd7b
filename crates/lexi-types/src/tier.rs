use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// TOEIC score band a word belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Below300,  // everyday function words
    From300,   // 300-500
    From500,   // 500-600
    From600,   // 600-700
    From700,   // 700-800
    From800,   // 800-900
    Above900,  // 900+
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 7] = [
        Tier::Below300,
        Tier::From300,
        Tier::From500,
        Tier::From600,
        Tier::From700,
        Tier::From800,
        Tier::Above900,
    ];

    /// Parse a tier label. Accepts the canonical labels and the legacy
    /// `300以下` / `900以上` labels found in older exports.
    pub fn from_label(s: &str) -> Option<Self> {
        let label: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match label.to_lowercase().as_str() {
            "<300" | "300以下" | "below300" | "under300" => Some(Tier::Below300),
            "300-500" => Some(Tier::From300),
            "500-600" => Some(Tier::From500),
            "600-700" => Some(Tier::From600),
            "700-800" => Some(Tier::From700),
            "800-900" => Some(Tier::From800),
            "900+" | "900以上" | "above900" | "over900" => Some(Tier::Above900),
            _ => None,
        }
    }

    /// Canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Below300 => "<300",
            Tier::From300 => "300-500",
            Tier::From500 => "500-600",
            Tier::From600 => "600-700",
            Tier::From700 => "700-800",
            Tier::From800 => "800-900",
            Tier::Above900 => "900+",
        }
    }

    /// Short description embedded in generation prompts
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Below300 => "basic daily words",
            Tier::From300 => "basic business words",
            Tier::From500 => "intermediate business words",
            Tier::From600 => "advanced business words",
            Tier::From700 => "professional business words",
            Tier::From800 => "expert business words",
            Tier::Above900 => "advanced vocabulary words",
        }
    }

    /// Default number of words the vocabulary should hold for this tier
    pub fn default_target(&self) -> u32 {
        match self {
            Tier::Below300 => 200,
            Tier::From300 => 500,
            Tier::From500 => 800,
            Tier::From600 => 1000,
            Tier::From700 => 1200,
            Tier::From800 => 800,
            Tier::Above900 => 500,
        }
    }

    /// Position in [`Tier::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Tier::from_label(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown tier label: {label}")))
    }
}
