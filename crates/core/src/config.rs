use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_POINTS_PER_DAY: usize = 5;
pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 80;

/// Tunables of itinerary assembly and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Capacity contributed by each requested day.
    pub points_per_day: usize,
    /// Capacity when no duration was detected.
    pub default_capacity: usize,
    /// Description length (in characters) before the ellipsis kicks in.
    pub description_limit: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            points_per_day: DEFAULT_POINTS_PER_DAY,
            default_capacity: DEFAULT_CAPACITY,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self {
            points_per_day: env_usize("GUIDE_POINTS_PER_DAY", DEFAULT_POINTS_PER_DAY),
            default_capacity: env_usize("GUIDE_DEFAULT_CAPACITY", DEFAULT_CAPACITY),
            description_limit: env_usize("GUIDE_DESCRIPTION_LIMIT", DEFAULT_DESCRIPTION_LIMIT),
        }
    }

    pub fn capacity_for(&self, days: Option<u8>) -> usize {
        match days {
            Some(days) => usize::from(days).saturating_mul(self.points_per_day),
            None => self.default_capacity,
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    parse_positive(env::var(key).ok().as_deref(), default)
}

/// Zero, blank and unparsable values fall back to `default`.
fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
