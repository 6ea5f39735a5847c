use std::fmt;

use serde::Serialize;

use super::format;
use crate::models::{
    Activity, ActivityKind, Board, ContentScore, DailyLeads, MetricCard, SourceShare, Tone, Trend,
};
use crate::store::Dataset;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub metrics: Vec<MetricCard>,
    pub lead_trend: Vec<DailyLeads>,
    pub content_performance: Vec<ContentScore>,
    pub sources: Vec<SourceShare>,
    pub activity: Vec<Activity>,
}

impl DashboardView {
    pub fn build(data: &Dataset) -> Self {
        Self {
            metrics: data.metrics_for(Board::Dashboard).cloned().collect(),
            lead_trend: data.lead_trend.clone(),
            content_performance: data.content_performance.clone(),
            sources: data.source_distribution.clone(),
            activity: data.recent_activity.clone(),
        }
    }
}

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Scrape => "🏢",
        ActivityKind::Lead => "👥",
        ActivityKind::Post => "👁",
        ActivityKind::Conversion => "📈",
        ActivityKind::Ai => "⚡",
    }
}

/// Writes metric cards as `Title value arrow delta` lines. The marker
/// after the delta says whether the change is good news, which the arrow
/// alone does not (a falling response time is an improvement).
pub(super) fn write_metrics(f: &mut fmt::Formatter<'_>, cards: &[MetricCard]) -> fmt::Result {
    for card in cards {
        let arrow = match card.trend {
            Trend::Up => '↑',
            Trend::Down => '↓',
        };
        let tone = if card.positive { Tone::Good } else { Tone::Bad };
        writeln!(
            f,
            "{:<22} {:>10}  {} {} {}",
            card.title,
            card.value,
            arrow,
            card.delta,
            tone.marker()
        )?;
    }
    Ok(())
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard")?;
        writeln!(f, "Welcome back! Here's what's happening with your property automation.")?;
        writeln!(f)?;
        write_metrics(f, &self.metrics)?;

        writeln!(f)?;
        writeln!(f, "Lead Generation Trend")?;
        let peak = self.lead_trend.iter().map(|d| d.leads).max().unwrap_or(0);
        for day in &self.lead_trend {
            writeln!(
                f,
                "  {:<4} {:<w$} {} leads / {} conversions",
                day.day,
                format::bar(f64::from(day.leads), f64::from(peak), BAR_WIDTH),
                day.leads,
                day.conversions,
                w = BAR_WIDTH
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Content Performance")?;
        for content in &self.content_performance {
            writeln!(
                f,
                "  {:<18} {:<w$} {}",
                content.name,
                format::bar(f64::from(content.engagement), 100.0, BAR_WIDTH),
                content.engagement,
                w = BAR_WIDTH
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Data Sources")?;
        for source in &self.sources {
            writeln!(f, "  {:<12} {:>3}%", source.name, source.percent)?;
        }

        writeln!(f)?;
        writeln!(f, "Recent Activity")?;
        for entry in &self.activity {
            write!(f, "  {} {} · {}", activity_icon(entry.kind), entry.message, entry.time)?;
            if let Some(badge) = &entry.badge {
                write!(f, " [{}]", badge.label())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
