use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Listing site the property was collected from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Source {
    #[serde(rename = "28hse")]
    Hse28,
    #[serde(rename = "squarefoot")]
    Squarefoot,
    #[serde(rename = "centaline")]
    Centaline,
}

impl Source {
    pub const ALL: [Source; 3] = [Self::Hse28, Self::Squarefoot, Self::Centaline];

    /// Identifier used in badges and filters
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hse28 => "28hse",
            Self::Squarefoot => "squarefoot",
            Self::Centaline => "centaline",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::UnknownSource(s.to_string()))
    }
}

/// Publication state of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Published,
    Pending,
    Draft,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 3] = [Self::Published, Self::Pending, Self::Draft];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Pending => "pending",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownStatus {
                kind: "property",
                value: s.to_string(),
            })
    }
}

/// Social engagement counters for a published listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Tone the caption was written in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentStyle {
    Engaging,
    Professional,
    Casual,
}

impl fmt::Display for ContentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Engaging => "engaging",
            Self::Professional => "professional",
            Self::Casual => "casual",
        })
    }
}

/// Pre-written social caption bundle attached to a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedContent {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub style: ContentStyle,
}

/// Asking rent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub amount: u64,
    pub currency: String,
    pub period: String,
}

/// Rental listing managed by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price: Price,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square feet
    pub area: u32,
    pub image: String,
    pub source: Source,
    pub status: ListingStatus,
    #[serde(default)]
    pub engagement: Engagement,
    pub content: GeneratedContent,
    pub posted_at: Option<DateTime<Utc>>,
    pub scraped_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_parses_case_insensitively() {
        assert_eq!("28HSE".parse::<Source>(), Ok(Source::Hse28));
        assert_eq!("Centaline".parse::<Source>(), Ok(Source::Centaline));
        assert_eq!(
            "hemnet".parse::<Source>(),
            Err(DashboardError::UnknownSource("hemnet".into()))
        );
    }

    #[test]
    fn listing_status_round_trips_through_str() {
        for status in ListingStatus::ALL {
            assert_eq!(status.as_str().parse::<ListingStatus>(), Ok(status));
        }
    }

    #[test]
    fn source_uses_site_identifiers_in_json() {
        assert_eq!(serde_json::to_string(&Source::Hse28).unwrap(), "\"28hse\"");
    }
}
