use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::drivers::carousel::DEFAULT_INTERVAL_MS;
use crate::drivers::playback::PlaybackTimings;
use crate::drivers::scroll_spy::DEFAULT_THRESHOLD_PX;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown site variant `{0}` (expected `aupa` or `lawyer`)")]
    UnknownVariant(String),
}

/// Which skin of the landing page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    Aupa,
    Lawyer,
}

impl SiteVariant {
    #[cfg(test)]
    pub const ALL: [SiteVariant; 2] = [SiteVariant::Aupa, SiteVariant::Lawyer];

    pub fn slug(self) -> &'static str {
        match self {
            SiteVariant::Aupa => "aupa",
            SiteVariant::Lawyer => "lawyer",
        }
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SiteVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aupa" => Ok(SiteVariant::Aupa),
            "lawyer" | "ask-ai-lawyer" => Ok(SiteVariant::Lawyer),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// Variant served at `/`, chosen at build time with `LANDING_VARIANT`.
pub fn default_variant() -> SiteVariant {
    resolve_variant(option_env!("LANDING_VARIANT"))
}

fn resolve_variant(raw: Option<&str>) -> SiteVariant {
    match raw {
        None => SiteVariant::Aupa,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("{e}; falling back to {}", SiteVariant::Aupa);
            SiteVariant::Aupa
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub carousel_interval_ms: u32,
    pub playback: PlaybackTimings,
    /// Fixed header height the scroll spy compensates for.
    pub nav_offset_px: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            carousel_interval_ms: DEFAULT_INTERVAL_MS,
            playback: PlaybackTimings::default(),
            nav_offset_px: DEFAULT_THRESHOLD_PX,
        }
    }
}
