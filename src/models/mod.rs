pub mod analytics;
pub mod lead;
pub mod property;
pub mod service;

pub use analytics::{
    Activity, ActivityBadge, ActivityKind, AgentPerformance, Board, ContentEngagement, ContentScore,
    DailyLeads, MetricCard, MonthlyPerformance, SettingEntry, SettingsTab, SourcePerformance,
    SourceShare, Trend, WeeklyActivity,
};
pub use lead::{Interaction, InteractionKind, Lead, LeadStatus, UNASSIGNED};
pub use property::{ContentStyle, Engagement, GeneratedContent, ListingStatus, Price, Property, Source};
pub use service::{Health, Integration, Service, SystemComponent, Tone, UsageCounter};
