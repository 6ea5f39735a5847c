use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::traits::{DataProvider, RecordProvider};
use crate::error::DashboardError;
use crate::models::{
    Activity, AgentPerformance, Board, ContentEngagement, ContentScore, DailyLeads, Integration,
    Lead, MetricCard, MonthlyPerformance, Property, Service, SettingEntry, SettingsTab,
    SourcePerformance, SourceShare, SystemComponent, WeeklyActivity,
};

/// Every record the dashboard renders, loaded once per run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Dataset {
    pub leads: Vec<Lead>,
    pub properties: Vec<Property>,
    pub services: Vec<Service>,
    pub integrations: Vec<Integration>,
    pub system_status: Vec<SystemComponent>,
    pub metrics: Vec<MetricCard>,
    pub lead_trend: Vec<DailyLeads>,
    pub content_performance: Vec<ContentScore>,
    pub source_distribution: Vec<SourceShare>,
    pub recent_activity: Vec<Activity>,
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub content_engagement: Vec<ContentEngagement>,
    pub source_performance: Vec<SourcePerformance>,
    pub weekly_activity: Vec<WeeklyActivity>,
    pub agent_performance: Vec<AgentPerformance>,
    pub settings: Vec<SettingEntry>,
}

/// A record kind stored in a [`Dataset`]
pub trait Record: Clone + Send + Sync + 'static {
    /// Key of the collection in a data file
    const KIND: &'static str;

    fn select(dataset: &Dataset) -> &[Self];
}

macro_rules! record {
    ($ty:ty, $field:ident) => {
        impl Record for $ty {
            const KIND: &'static str = stringify!($field);

            fn select(dataset: &Dataset) -> &[Self] {
                &dataset.$field
            }
        }
    };
}

record!(Lead, leads);
record!(Property, properties);
record!(Service, services);
record!(Integration, integrations);
record!(SystemComponent, system_status);
record!(MetricCard, metrics);
record!(DailyLeads, lead_trend);
record!(ContentScore, content_performance);
record!(SourceShare, source_distribution);
record!(Activity, recent_activity);
record!(MonthlyPerformance, monthly_performance);
record!(ContentEngagement, content_engagement);
record!(SourcePerformance, source_performance);
record!(WeeklyActivity, weekly_activity);
record!(AgentPerformance, agent_performance);
record!(SettingEntry, settings);

async fn load_kind<T, P>(provider: &P) -> Result<Vec<T>>
where
    T: Record,
    P: RecordProvider<T> + DataProvider + ?Sized,
{
    let records = RecordProvider::<T>::list(provider).await?;
    debug!("Loaded {} {} from {}", records.len(), T::KIND, provider.source_name());
    Ok(records)
}

impl Dataset {
    /// Pull every record kind from `provider`
    pub async fn load<P: DataProvider + ?Sized>(provider: &P) -> Result<Self> {
        info!("Loading dashboard data from {}", provider.source_name());

        let dataset = Self {
            leads: load_kind(provider).await?,
            properties: load_kind(provider).await?,
            services: load_kind(provider).await?,
            integrations: load_kind(provider).await?,
            system_status: load_kind(provider).await?,
            metrics: load_kind(provider).await?,
            lead_trend: load_kind(provider).await?,
            content_performance: load_kind(provider).await?,
            source_distribution: load_kind(provider).await?,
            recent_activity: load_kind(provider).await?,
            monthly_performance: load_kind(provider).await?,
            content_engagement: load_kind(provider).await?,
            source_performance: load_kind(provider).await?,
            weekly_activity: load_kind(provider).await?,
            agent_performance: load_kind(provider).await?,
            settings: load_kind(provider).await?,
        };

        info!(
            "Loaded {} leads, {} properties, {} services",
            dataset.leads.len(),
            dataset.properties.len(),
            dataset.services.len()
        );
        Ok(dataset)
    }

    pub fn lead(&self, id: u32) -> Result<&Lead, DashboardError> {
        self.leads
            .iter()
            .find(|lead| lead.id == id)
            .ok_or(DashboardError::NotFound { kind: "lead", id })
    }

    pub fn property(&self, id: u32) -> Result<&Property, DashboardError> {
        self.properties
            .iter()
            .find(|property| property.id == id)
            .ok_or(DashboardError::NotFound { kind: "property", id })
    }

    pub fn metrics_for(&self, board: Board) -> impl Iterator<Item = &MetricCard> {
        self.metrics.iter().filter(move |card| card.board == board)
    }

    pub fn settings_for(&self, tab: SettingsTab) -> impl Iterator<Item = &SettingEntry> {
        self.settings.iter().filter(move |entry| entry.tab == tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn lookup_by_id() {
        let dataset = fixtures::dataset();
        assert_eq!(dataset.lead(2).unwrap().name, "David Liu");
        assert_eq!(dataset.property(3).unwrap().title, "Luxury 3BR Penthouse in Mid-Levels");
        assert_eq!(
            dataset.lead(99),
            Err(DashboardError::NotFound { kind: "lead", id: 99 })
        );
    }

    #[test]
    fn metrics_split_by_board() {
        let dataset = fixtures::dataset();
        assert_eq!(dataset.metrics_for(Board::Dashboard).count(), 4);
        assert_eq!(dataset.metrics_for(Board::Analytics).count(), 4);
    }

    #[test]
    fn partial_documents_default_missing_collections() {
        let dataset: Dataset = serde_json::from_str(r#"{ "leads": [] }"#).unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn record_kinds_match_document_keys() {
        assert_eq!(<Lead as Record>::KIND, "leads");
        assert_eq!(<SystemComponent as Record>::KIND, "system_status");
    }
}
