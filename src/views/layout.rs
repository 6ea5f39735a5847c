use std::fmt;

use serde::Serialize;

use super::format;
use crate::app::{AppState, Page};
use crate::models::{Health, Tone};
use crate::store::Dataset;

pub const BRAND: &str = "PropAI";
pub const TAGLINE: &str = "Property Automation";
pub const SEARCH_PLACEHOLDER: &str = "Search properties, leads...";
/// Unread badge on the header bell
const NOTIFICATIONS: u32 = 3;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusLine {
    pub name: String,
    pub status: Health,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Layout {
    pub brand: &'static str,
    pub sidebar_open: bool,
    pub nav: Vec<NavItem>,
    pub system_status: Vec<StatusLine>,
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub notifications: u32,
}

impl Layout {
    pub fn build(data: &Dataset, state: &AppState) -> Self {
        Self {
            brand: BRAND,
            sidebar_open: state.sidebar_open,
            nav: Page::ALL
                .into_iter()
                .map(|page| NavItem {
                    page,
                    label: page.title(),
                    active: page == state.current_page,
                })
                .collect(),
            system_status: data
                .system_status
                .iter()
                .map(|component| StatusLine {
                    name: format::title_case(&component.name),
                    status: component.status,
                    tone: component.status.tone(),
                })
                .collect(),
            title: state.current_page.title(),
            search_placeholder: SEARCH_PLACEHOLDER,
            notifications: NOTIFICATIONS,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sidebar_open {
            writeln!(f, "{} · {}", self.brand, TAGLINE)?;
            for item in &self.nav {
                let cursor = if item.active { '>' } else { ' ' };
                writeln!(f, " {} {}", cursor, item.label)?;
            }
            writeln!(f, "System Status")?;
            for line in &self.system_status {
                writeln!(f, "   {} {:<18} {}", line.tone.marker(), line.name, line.status)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "{} | {} | 🔔 {}",
            self.title, self.search_placeholder, self.notifications
        )
    }
}
