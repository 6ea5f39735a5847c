//! Shell state: which page is mounted and the UI toggles each page owns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DashboardError;
use crate::filter::{Query, RecordFilter, SearchMode, StatusFilter, DEFAULT_PER_PAGE};
use crate::models::{LeadStatus, ListingStatus, SettingsTab};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Properties,
    Leads,
    Analytics,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Self::Dashboard,
        Self::Properties,
        Self::Leads,
        Self::Analytics,
        Self::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Properties => "properties",
            Self::Leads => "leads",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Properties => "Properties",
            Self::Leads => "Leads",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownPage(s.to_string()))
    }
}

/// Search box, filter buttons and paging of one list page
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<S> {
    pub search: String,
    pub status: StatusFilter<S>,
    pub source: Option<String>,
    /// Assigned agent; only leads carry one
    pub agent: Option<String>,
    pub page: usize,
    pub per_page: usize,
}

impl<S> Default for ListState<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            source: None,
            agent: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl<S: Copy + PartialEq> ListState<S> {
    /// Criteria the filter engine applies for the current UI state
    pub fn filter(&self, mode: SearchMode) -> RecordFilter<S> {
        let mut filter = RecordFilter::new(Query::new(self.search.clone(), mode), self.status);
        if let Some(source) = &self.source {
            filter = filter.with_source(source.clone());
        }
        if let Some(agent) = &self.agent {
            filter = filter.with_agent(agent.clone());
        }
        filter
    }
}

/// Everything the UI remembers between interactions
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub current_page: Page,
    pub sidebar_open: bool,
    pub settings_tab: SettingsTab,
    pub search_mode: SearchMode,
    pub leads: ListState<LeadStatus>,
    pub properties: ListState<ListingStatus>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: Page::Dashboard,
            sidebar_open: true,
            settings_tab: SettingsTab::Services,
            search_mode: SearchMode::Literal,
            leads: ListState::default(),
            properties: ListState::default(),
        }
    }
}

impl AppState {
    pub fn new(search_mode: SearchMode) -> Self {
        Self {
            search_mode,
            ..Self::default()
        }
    }

    /// Mount `page`. Every page is reachable from every other.
    pub fn navigate(&mut self, page: Page) {
        debug!("Navigating {} -> {}", self.current_page, page);
        self.current_page = page;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.settings_tab = tab;
    }

    pub fn lead_filter(&self) -> RecordFilter<LeadStatus> {
        self.leads.filter(self.search_mode)
    }

    pub fn property_filter(&self) -> RecordFilter<ListingStatus> {
        self.properties.filter(self.search_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_load() {
        let state = AppState::default();
        assert_eq!(state.current_page, Page::Dashboard);
        assert!(state.sidebar_open);
        assert_eq!(state.settings_tab, SettingsTab::Services);
        assert_eq!(state.leads.status, StatusFilter::All);
        assert!(state.properties.search.is_empty());
    }

    #[test]
    fn any_page_is_reachable_from_any_other() {
        let mut state = AppState::default();
        for from in Page::ALL {
            for to in Page::ALL {
                state.navigate(from);
                state.navigate(to);
                assert_eq!(state.current_page, to);
            }
        }
    }

    #[test]
    fn sidebar_toggles() {
        let mut state = AppState::default();
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
        state.toggle_sidebar();
        assert!(state.sidebar_open);
    }

    #[test]
    fn page_names_parse() {
        assert_eq!("leads".parse::<Page>(), Ok(Page::Leads));
        assert_eq!(
            "reports".parse::<Page>(),
            Err(DashboardError::UnknownPage("reports".into()))
        );
    }

    #[test]
    fn list_state_builds_filter_with_search_mode() {
        let mut state = AppState::new(SearchMode::Trimmed);
        state.properties.search = "  central ".into();
        state.properties.status = StatusFilter::Only(ListingStatus::Published);
        state.properties.source = Some("28hse".into());

        let filter = state.property_filter();
        assert_eq!(filter.query.mode(), SearchMode::Trimmed);
        assert_eq!(filter.query.as_str(), "  central ");
        assert_eq!(filter.status, StatusFilter::Only(ListingStatus::Published));
        assert_eq!(filter.source.as_deref(), Some("28hse"));
    }

    #[test]
    fn list_states_are_independent() {
        let mut state = AppState::default();
        state.leads.search = "sarah".into();
        assert!(state.properties.search.is_empty());
    }
}
