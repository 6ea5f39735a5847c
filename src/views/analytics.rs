use std::fmt;

use serde::Serialize;

use super::dashboard::write_metrics;
use super::format;
use super::leads::LeadScoring;
use crate::models::{
    AgentPerformance, Board, ContentEngagement, MetricCard, MonthlyPerformance, SourcePerformance,
    WeeklyActivity,
};
use crate::store::Dataset;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalyticsView {
    pub kpis: Vec<MetricCard>,
    pub monthly: Vec<MonthlyPerformance>,
    pub content: Vec<ContentEngagement>,
    pub sources: Vec<SourcePerformance>,
    pub weekly: Vec<WeeklyActivity>,
    pub agents: Vec<AgentPerformance>,
    pub lead_scoring: LeadScoring,
}

impl AnalyticsView {
    pub fn build(data: &Dataset) -> Self {
        Self {
            kpis: data.metrics_for(Board::Analytics).cloned().collect(),
            monthly: data.monthly_performance.clone(),
            content: data.content_engagement.clone(),
            sources: data.source_performance.clone(),
            weekly: data.weekly_activity.clone(),
            agents: data.agent_performance.clone(),
            lead_scoring: LeadScoring::of(&data.leads),
        }
    }

    pub fn total_revenue(&self) -> u64 {
        self.monthly.iter().map(|month| month.revenue).sum()
    }
}

impl fmt::Display for AnalyticsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analytics")?;
        writeln!(f, "Comprehensive insights into your automation performance")?;
        writeln!(f)?;
        write_metrics(f, &self.kpis)?;

        writeln!(f)?;
        writeln!(f, "Lead Generation & Conversion Trends / Revenue Growth")?;
        for month in &self.monthly {
            writeln!(
                f,
                "  {:<4} {:>4} leads {:>4} conversions {:>10}",
                month.month,
                month.leads,
                month.conversions,
                format::currency_k(month.revenue)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Content Engagement")?;
        for content in &self.content {
            writeln!(
                f,
                "  {:<16} {:>7} views {:>6} likes {:>5} comments {:>4} shares",
                content.name,
                format::thousands(content.views),
                format::thousands(content.likes),
                content.comments,
                content.shares
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Source Performance")?;
        for source in &self.sources {
            writeln!(
                f,
                "  {:<12} {:>4} properties {:>4} leads {:>7}",
                source.name,
                source.properties,
                source.leads,
                format::percent(source.conversion)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Weekly Activity")?;
        for day in &self.weekly {
            writeln!(
                f,
                "  {:<4} {:>3} scrapes {:>3} posts {:>3} leads {:>3} responses",
                day.day, day.scrapes, day.posts, day.leads, day.responses
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Agent Performance")?;
        for agent in &self.agents {
            writeln!(
                f,
                "  {:<14} {:>3} leads {:>3} conversions {:>7}",
                agent.name,
                agent.leads,
                agent.conversions,
                format::percent(agent.rate)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Lead Scoring")?;
        write!(f, "{}", self.lead_scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tone;
    use crate::store::fixtures;

    #[test]
    fn shows_analytics_cards_only() {
        let view = AnalyticsView::build(&fixtures::dataset());
        assert_eq!(view.kpis.len(), 4);
        assert_eq!(view.kpis[0].title, "Total Revenue");
    }

    #[test]
    fn revenue_series_sums_to_headline() {
        let view = AnalyticsView::build(&fixtures::dataset());
        // headline card reads HK$5.36M
        assert_eq!(view.total_revenue(), 5_355_000);
    }

    #[test]
    fn renders_money_and_rates() {
        let text = AnalyticsView::build(&fixtures::dataset()).to_string();
        assert!(text.contains("HK$540K"));
        assert!(text.contains("HK$1125K"));
        assert!(text.contains("28.1%"));
        assert!(text.contains("Lisa Zhang"));
    }

    #[test]
    fn lead_scoring_covers_the_loaded_leads() {
        let view = AnalyticsView::build(&fixtures::dataset());
        let scored: usize = view.lead_scoring.distribution.iter().map(|b| b.count).sum();
        assert_eq!(scored, 4);

        let text = view.to_string();
        assert!(text.contains("Lead Scoring"));
        assert!(text.contains("81-100"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("avg score 95.00 (1 leads)"));
    }

    #[test]
    fn avg_response_time_drop_is_good_news() {
        let text = AnalyticsView::build(&fixtures::dataset()).to_string();
        let line = text.lines().find(|l| l.starts_with("Avg. Response Time")).unwrap();
        assert!(line.contains('↓'));
        assert!(line.ends_with(Tone::Good.marker()));
    }
}
