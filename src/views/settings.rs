use std::fmt;

use serde::Serialize;

use super::format;
use crate::models::{Health, Integration, Service, SettingEntry, SettingsTab, Tone};
use crate::store::Dataset;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServiceRow {
    pub name: String,
    pub status: Health,
    pub tone: Tone,
    pub url: String,
    pub version: String,
    pub updated: String,
    pub health: Health,
}

impl ServiceRow {
    fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            status: service.status,
            tone: service.status.tone(),
            url: service.url.clone(),
            version: service.version.clone(),
            updated: format!("Updated {}", format::date(&service.last_update)),
            health: service.health,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntegrationRow {
    pub name: String,
    pub status: Health,
    pub tone: Tone,
    pub description: String,
    /// "5 scenarios", "156 posts", ...
    pub usage: Vec<String>,
}

impl IntegrationRow {
    fn from_integration(integration: &Integration) -> Self {
        Self {
            name: integration.name.clone(),
            status: integration.status,
            tone: integration.status.tone(),
            description: integration.description.clone(),
            usage: integration
                .usage
                .iter()
                .map(|counter| format!("{} {}", counter.value, counter.label))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SettingRow {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SettingSection {
    pub title: String,
    pub rows: Vec<SettingRow>,
}

/// Groups consecutive entries that share a section heading
fn sections<'a>(entries: impl Iterator<Item = &'a SettingEntry>) -> Vec<SettingSection> {
    let mut sections: Vec<SettingSection> = Vec::new();
    for entry in entries {
        let row = SettingRow {
            label: entry.label.clone(),
            value: entry.value.clone(),
            tone: entry.tone,
        };
        match sections.last_mut() {
            Some(section) if section.title == entry.section => section.rows.push(row),
            _ => sections.push(SettingSection {
                title: entry.section.clone(),
                rows: vec![row],
            }),
        }
    }
    sections
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "tab", content = "rows", rename_all = "lowercase")]
pub enum TabContent {
    Services(Vec<ServiceRow>),
    Integrations(Vec<IntegrationRow>),
    Entries(Vec<SettingSection>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SettingsView {
    pub active: SettingsTab,
    pub tabs: Vec<(SettingsTab, &'static str)>,
    pub heading: &'static str,
    pub content: TabContent,
}

fn heading(tab: SettingsTab) -> &'static str {
    match tab {
        SettingsTab::Services => "Service Status",
        SettingsTab::Integrations => "External Integrations",
        SettingsTab::Api => "API Configuration",
        SettingsTab::Automation => "Automation Rules",
        SettingsTab::Notifications => "Notification Preferences",
        SettingsTab::Security => "Security Settings",
    }
}

impl SettingsView {
    pub fn build(data: &Dataset, tab: SettingsTab) -> Self {
        let content = match tab {
            SettingsTab::Services => {
                TabContent::Services(data.services.iter().map(ServiceRow::from_service).collect())
            }
            SettingsTab::Integrations => TabContent::Integrations(
                data.integrations
                    .iter()
                    .map(IntegrationRow::from_integration)
                    .collect(),
            ),
            other => TabContent::Entries(sections(data.settings_for(other))),
        };

        Self {
            active: tab,
            tabs: SettingsTab::ALL.into_iter().map(|t| (t, t.title())).collect(),
            heading: heading(tab),
            content,
        }
    }
}

impl fmt::Display for SettingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings")?;
        writeln!(f, "Configure your property automation system")?;
        writeln!(f)?;
        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|(tab, title)| {
                if *tab == self.active {
                    format!("[{}]", title)
                } else {
                    title.to_string()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" | "))?;
        writeln!(f)?;
        writeln!(f, "{}", self.heading)?;

        match &self.content {
            TabContent::Services(rows) => {
                for row in rows {
                    writeln!(f, "  {} {} ({})", row.tone.marker(), row.name, row.status)?;
                    writeln!(f, "    {}  {}  {}", row.url, row.version, row.updated)?;
                }
            }
            TabContent::Integrations(rows) => {
                for row in rows {
                    writeln!(f, "  {} {} ({})", row.tone.marker(), row.name, row.status)?;
                    writeln!(f, "    {}", row.description)?;
                    if !row.usage.is_empty() {
                        writeln!(f, "    {}", row.usage.join(" · "))?;
                    }
                }
            }
            TabContent::Entries(sections) => {
                for section in sections {
                    writeln!(f, "  {}", section.title)?;
                    for row in &section.rows {
                        writeln!(f, "    {} {:<28} {}", row.tone.marker(), row.label, row.value)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn services_tab_lists_every_service() {
        let view = SettingsView::build(&fixtures::dataset(), SettingsTab::Services);
        assert_eq!(view.heading, "Service Status");
        let TabContent::Services(rows) = &view.content else {
            panic!("expected services, got {:?}", view.content);
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].updated, "Updated Jan 15, 02:30 PM");
        let analytics = rows.last().unwrap();
        assert_eq!(analytics.status, Health::Warning);
        assert_eq!(analytics.tone, Tone::Warn);
    }

    #[test]
    fn integrations_show_usage_counters() {
        let view = SettingsView::build(&fixtures::dataset(), SettingsTab::Integrations);
        let TabContent::Integrations(rows) = &view.content else {
            panic!("expected integrations, got {:?}", view.content);
        };
        assert_eq!(rows[0].usage[0], "5 scenarios");
        assert!(rows.iter().all(|row| row.tone == Tone::Good));
    }

    #[test]
    fn entry_tabs_group_by_section() {
        let view = SettingsView::build(&fixtures::dataset(), SettingsTab::Automation);
        assert_eq!(view.heading, "Automation Rules");
        let TabContent::Entries(sections) = &view.content else {
            panic!("expected entries, got {:?}", view.content);
        };
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Scraping Schedule", "Content Publishing", "Lead Management"]);
        assert_eq!(sections[2].rows[2].value, "Partial");
    }

    #[test]
    fn active_tab_is_marked() {
        let text = SettingsView::build(&fixtures::dataset(), SettingsTab::Api).to_string();
        assert!(text.contains("[API Keys]"), "{text}");
        assert!(text.contains("Cloudinary Cloud Name"));
        assert!(!text.contains("[Services]"));
    }

    #[test]
    fn empty_dataset_renders_empty_tabs() {
        let view = SettingsView::build(&Dataset::default(), SettingsTab::Security);
        assert_eq!(view.content, TabContent::Entries(Vec::new()));
    }
}
