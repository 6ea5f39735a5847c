//! Page view models and their plain-text rendering.
//!
//! Views are derived entirely from a [`Dataset`] and the [`AppState`]; they
//! hold no state of their own.

pub mod analytics;
pub mod dashboard;
pub mod format;
pub mod layout;
pub mod leads;
pub mod properties;
pub mod search;
pub mod settings;

use std::fmt;

use serde::Serialize;

use crate::app::{AppState, Page};
use crate::store::Dataset;

pub use analytics::AnalyticsView;
pub use dashboard::DashboardView;
pub use layout::Layout;
pub use leads::LeadsView;
pub use properties::PropertiesView;
pub use search::SearchView;
pub use settings::SettingsView;

/// Search box plus the row of status buttons above a list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterBar {
    pub placeholder: String,
    pub search: String,
    pub options: Vec<String>,
    pub active: String,
}

impl FilterBar {
    pub fn new<'a>(
        placeholder: &str,
        search: &str,
        statuses: impl Iterator<Item = &'a str>,
        active: String,
    ) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            search: search.to_string(),
            options: std::iter::once("all").chain(statuses).map(str::to_string).collect(),
            active,
        }
    }
}

impl fmt::Display for FilterBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.search.is_empty() {
            writeln!(f, "Search: ({})", self.placeholder)?;
        } else {
            writeln!(f, "Search: {:?}", self.search)?;
        }
        let buttons: Vec<String> = self
            .options
            .iter()
            .map(|option| {
                if *option == self.active {
                    format!("[{}]", option)
                } else {
                    option.clone()
                }
            })
            .collect();
        writeln!(f, "Filter: {}", buttons.join(" "))
    }
}

/// What a list shows when nothing matches
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub hint: String,
}

impl EmptyState {
    pub fn new(title: &str, hint: &str) -> Self {
        Self {
            title: title.to_string(),
            hint: hint.to_string(),
        }
    }
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.hint)
    }
}

/// The mounted page
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Dashboard(DashboardView),
    Properties(PropertiesView),
    Leads(LeadsView),
    Analytics(AnalyticsView),
    Settings(SettingsView),
}

impl PageView {
    pub fn build(data: &Dataset, state: &AppState) -> Self {
        match state.current_page {
            Page::Dashboard => Self::Dashboard(DashboardView::build(data)),
            Page::Properties => Self::Properties(PropertiesView::build(data, state)),
            Page::Leads => Self::Leads(LeadsView::build(data, state)),
            Page::Analytics => Self::Analytics(AnalyticsView::build(data)),
            Page::Settings => Self::Settings(SettingsView::build(data, state.settings_tab)),
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard(view) => fmt::Display::fmt(view, f),
            Self::Properties(view) => fmt::Display::fmt(view, f),
            Self::Leads(view) => fmt::Display::fmt(view, f),
            Self::Analytics(view) => fmt::Display::fmt(view, f),
            Self::Settings(view) => fmt::Display::fmt(view, f),
        }
    }
}

/// Shell chrome around the mounted page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Screen {
    pub layout: Layout,
    pub content: PageView,
}

impl Screen {
    pub fn build(data: &Dataset, state: &AppState) -> Self {
        Self {
            layout: Layout::build(data, state),
            content: PageView::build(data, state),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout)?;
        writeln!(f)?;
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn mounted_view_follows_current_page() {
        let data = fixtures::dataset();
        let mut state = AppState::default();
        for page in Page::ALL {
            state.navigate(page);
            let screen = Screen::build(&data, &state);
            let json = serde_json::to_value(&screen.content).unwrap();
            assert_eq!(json["page"], page.as_str());
        }
    }

    #[test]
    fn filter_bar_marks_the_active_option() {
        let bar = FilterBar::new("Search leads...", "", ["hot", "warm"].into_iter(), "hot".into());
        assert_eq!(bar.options, vec!["all", "hot", "warm"]);
        let text = bar.to_string();
        assert!(text.contains("all [hot] warm"), "{text}");
        assert!(text.contains("(Search leads...)"));
    }
}
