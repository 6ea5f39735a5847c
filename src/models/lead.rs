use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Shown, and filtered on, in place of a missing agent
pub const UNASSIGNED: &str = "Unassigned";

/// Position of a lead in the sales lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Hot,
    Warm,
    Cold,
    Converted,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [Self::Hot, Self::Warm, Self::Cold, Self::Converted];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Converted => "converted",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownStatus {
                kind: "lead",
                value: s.to_string(),
            })
    }
}

/// Channel of a single touchpoint with a lead
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Dm,
    Whatsapp,
    Call,
    Email,
    Viewing,
    Contract,
    Comment,
}

impl InteractionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dm => "DM",
            Self::Whatsapp => "WhatsApp",
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Viewing => "Viewing",
            Self::Contract => "Contract",
            Self::Comment => "Comment",
        }
    }
}

/// A logged touchpoint with a lead
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub message: String,
    pub time: DateTime<Utc>,
}

/// Prospective client tracked by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub status: LeadStatus,
    /// Nominally 0-100; not enforced.
    pub score: u32,
    pub interested_property: String,
    pub budget: String,
    pub assigned_agent: Option<String>,
    pub last_contact: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_lowercase_names() {
        assert_eq!("hot".parse::<LeadStatus>(), Ok(LeadStatus::Hot));
        assert_eq!("converted".parse::<LeadStatus>(), Ok(LeadStatus::Converted));
    }

    #[test]
    fn status_rejects_unknown_and_mixed_case() {
        assert_eq!(
            "Hot".parse::<LeadStatus>(),
            Err(DashboardError::UnknownStatus {
                kind: "lead",
                value: "Hot".into()
            })
        );
        assert!("lukewarm".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn status_serializes_as_lowercase() {
        let json = serde_json::to_string(&LeadStatus::Warm).unwrap();
        assert_eq!(json, "\"warm\"");
    }
}
