use anyhow::Result;
use async_trait::async_trait;

use super::dataset::Record;
use crate::models::{
    Activity, AgentPerformance, ContentEngagement, ContentScore, DailyLeads, Integration, Lead,
    MetricCard, MonthlyPerformance, Property, Service, SettingEntry, SourcePerformance, SourceShare,
    SystemComponent, WeeklyActivity,
};

/// Capability to list every record of one kind.
/// Fixture data and data files sit behind this, so views never know where records came from.
#[async_trait]
pub trait RecordProvider<T: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>>;
}

/// A provider able to supply every record kind the dashboard shows
pub trait DataProvider:
    RecordProvider<Lead>
    + RecordProvider<Property>
    + RecordProvider<Service>
    + RecordProvider<Integration>
    + RecordProvider<SystemComponent>
    + RecordProvider<MetricCard>
    + RecordProvider<DailyLeads>
    + RecordProvider<ContentScore>
    + RecordProvider<SourceShare>
    + RecordProvider<Activity>
    + RecordProvider<MonthlyPerformance>
    + RecordProvider<ContentEngagement>
    + RecordProvider<SourcePerformance>
    + RecordProvider<WeeklyActivity>
    + RecordProvider<AgentPerformance>
    + RecordProvider<SettingEntry>
{
    /// Name of the backing source, for logs
    fn source_name(&self) -> &str;
}
