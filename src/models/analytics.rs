use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::service::Tone;
use crate::error::DashboardError;

/// Page a metric card is displayed on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    Dashboard,
    Analytics,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Headline figure with its week-over-week or month-over-month change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricCard {
    pub board: Board,
    pub title: String,
    pub value: String,
    pub delta: String,
    pub trend: Trend,
    /// Whether the movement is good news; a falling response time is.
    pub positive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLeads {
    pub day: String,
    pub leads: u32,
    pub conversions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentScore {
    pub name: String,
    pub engagement: u32,
}

/// Share of scraped listings coming from one site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceShare {
    pub name: String,
    pub percent: u32,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Scrape,
    Lead,
    Post,
    Conversion,
    Ai,
}

/// Extra detail shown next to an activity entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ActivityBadge {
    Count(u32),
    Score(u32),
    Engagement(String),
    Agent(String),
}

impl ActivityBadge {
    pub fn label(&self) -> String {
        match self {
            Self::Count(count) => format!("{} items", count),
            Self::Score(score) => format!("Score: {}", score),
            Self::Engagement(text) => text.clone(),
            Self::Agent(agent) => format!("Agent: {}", agent),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: String,
    /// Relative time label, e.g. "2 minutes ago"
    pub time: String,
    pub badge: Option<ActivityBadge>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPerformance {
    pub month: String,
    pub leads: u32,
    pub conversions: u32,
    /// HKD
    pub revenue: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEngagement {
    pub name: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourcePerformance {
    pub name: String,
    pub properties: u32,
    pub leads: u32,
    pub conversion: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyActivity {
    pub day: String,
    pub scrapes: u32,
    pub posts: u32,
    pub leads: u32,
    pub responses: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentPerformance {
    pub name: String,
    pub leads: u32,
    pub conversions: u32,
    pub rate: f64,
}

/// Settings tab a [`SettingEntry`] belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    Services,
    Integrations,
    Api,
    Automation,
    Notifications,
    Security,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 6] = [
        Self::Services,
        Self::Integrations,
        Self::Api,
        Self::Automation,
        Self::Notifications,
        Self::Security,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Integrations => "integrations",
            Self::Api => "api",
            Self::Automation => "automation",
            Self::Notifications => "notifications",
            Self::Security => "security",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Integrations => "Integrations",
            Self::Api => "API Keys",
            Self::Automation => "Automation",
            Self::Notifications => "Notifications",
            Self::Security => "Security",
        }
    }
}

impl FromStr for SettingsTab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownTab(s.to_string()))
    }
}

/// Read-only configuration row, e.g. "Lead scoring: Enabled"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingEntry {
    pub tab: SettingsTab,
    pub section: String,
    pub label: String,
    pub value: String,
    pub tone: Tone,
}
