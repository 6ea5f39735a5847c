use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reported state of a backend service or external integration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Online,
    Connected,
    Healthy,
    Warning,
    Degraded,
    Offline,
    Error,
}

/// Colour family a [`Health`] value is shown with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Warn,
    Bad,
    Neutral,
}

impl Health {
    pub fn tone(self) -> Tone {
        match self {
            Self::Online | Self::Connected | Self::Healthy => Tone::Good,
            Self::Warning | Self::Degraded => Tone::Warn,
            Self::Offline | Self::Error => Tone::Bad,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Connected => "connected",
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Degraded => "degraded",
            Self::Offline => "offline",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Tone {
    /// Single-character marker used by the text renderer
    pub fn marker(self) -> char {
        match self {
            Self::Good => '●',
            Self::Warn => '▲',
            Self::Bad => '✖',
            Self::Neutral => '○',
        }
    }
}

/// Deployed backend service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub name: String,
    pub status: Health,
    pub url: String,
    pub last_update: DateTime<Utc>,
    pub version: String,
    pub health: Health,
}

/// Labelled usage figure shown under an integration, e.g. "156 posts"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageCounter {
    pub label: String,
    pub value: String,
}

/// Third-party account the product is wired to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Integration {
    pub name: String,
    pub status: Health,
    pub description: String,
    #[serde(default)]
    pub usage: Vec<UsageCounter>,
}

/// Entry in the sidebar health panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemComponent {
    pub name: String,
    pub status: Health,
}
