use std::fmt;

use serde::Serialize;

use super::format::{self, NO_RESULTS_HINT};
use super::{EmptyState, FilterBar};
use crate::app::AppState;
use crate::filter::{paginate, PageInfo};
use crate::models::{InteractionKind, Lead, LeadStatus, UNASSIGNED};
use crate::store::Dataset;

/// Interactions shown per card
const RECENT_INTERACTIONS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        match score {
            80.. => Self::High,
            60..=79 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Headline numbers over the whole lead collection, ignoring filters
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeadStats {
    pub total: usize,
    pub hot: usize,
    pub converted: usize,
    /// Mean score rounded half-up; `None` when there are no leads
    pub average_score: Option<u32>,
}

impl LeadStats {
    pub fn of(leads: &[Lead]) -> Self {
        let count = |status| leads.iter().filter(|lead| lead.status == status).count();
        Self {
            total: leads.len(),
            hot: count(LeadStatus::Hot),
            converted: count(LeadStatus::Converted),
            average_score: average_score(leads),
        }
    }
}

pub fn average_score(leads: &[Lead]) -> Option<u32> {
    if leads.is_empty() {
        return None;
    }
    let sum: u64 = leads.iter().map(|lead| u64::from(lead.score)).sum();
    Some((sum as f64 / leads.len() as f64).round() as u32)
}

/// Score bands of the scoring analysis, inclusive on both ends
const SCORE_RANGES: [(u32, u32, &str); 5] = [
    (0, 20, "Very Low"),
    (21, 40, "Low"),
    (41, 60, "Medium"),
    (61, 80, "High"),
    (81, 100, "Very High"),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreBucket {
    pub range: String,
    pub label: &'static str,
    pub count: usize,
    pub converted: usize,
    /// Percent of the bucket that converted; 0 for an empty bucket
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusScore {
    pub status: LeadStatus,
    /// Rounded to two decimals
    pub average_score: f64,
    pub count: usize,
}

/// How well lead scores predict conversion
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeadScoring {
    pub distribution: Vec<ScoreBucket>,
    /// Only statuses that have leads, in lifecycle order
    pub by_status: Vec<StatusScore>,
}

impl LeadScoring {
    pub fn of(leads: &[Lead]) -> Self {
        let distribution = SCORE_RANGES
            .into_iter()
            .map(|(min, max, label)| {
                let in_range: Vec<&Lead> = leads
                    .iter()
                    .filter(|lead| (min..=max).contains(&lead.score))
                    .collect();
                let converted = in_range
                    .iter()
                    .filter(|lead| lead.status == LeadStatus::Converted)
                    .count();
                let conversion_rate = if in_range.is_empty() {
                    0.0
                } else {
                    converted as f64 / in_range.len() as f64 * 100.0
                };
                ScoreBucket {
                    range: format!("{}-{}", min, max),
                    label,
                    count: in_range.len(),
                    converted,
                    conversion_rate,
                }
            })
            .collect();

        let by_status = LeadStatus::ALL
            .into_iter()
            .filter_map(|status| {
                let scores: Vec<u32> = leads
                    .iter()
                    .filter(|lead| lead.status == status)
                    .map(|lead| lead.score)
                    .collect();
                if scores.is_empty() {
                    return None;
                }
                let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;
                Some(StatusScore {
                    status,
                    average_score: (mean * 100.0).round() / 100.0,
                    count: scores.len(),
                })
            })
            .collect();

        Self {
            distribution,
            by_status,
        }
    }
}

impl fmt::Display for LeadScoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in &self.distribution {
            writeln!(
                f,
                "  {:<7} {:<10} {:>3} leads {:>3} converted {:>7}",
                bucket.range,
                bucket.label,
                bucket.count,
                bucket.converted,
                format::percent(bucket.conversion_rate)
            )?;
        }
        for score in &self.by_status {
            writeln!(
                f,
                "  {:<10} avg score {:.2} ({} leads)",
                score.status.as_str(), score.average_score, score.count
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionLine {
    pub kind: InteractionKind,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeadCard {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    pub score: u32,
    pub score_band: ScoreBand,
    pub source: String,
    pub budget: String,
    pub agent: String,
    /// Unassigned leads get an "Assign Agent" action
    pub needs_agent: bool,
    pub interested_property: String,
    pub interactions: Vec<InteractionLine>,
    pub notes: Option<String>,
    pub created: String,
    pub last_contact: String,
}

impl LeadCard {
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            id: lead.id,
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            status: lead.status,
            score: lead.score,
            score_band: ScoreBand::of(lead.score),
            source: lead.source.clone(),
            budget: format!("HKD {}", lead.budget),
            agent: lead
                .assigned_agent
                .clone()
                .unwrap_or_else(|| UNASSIGNED.to_string()),
            needs_agent: lead.assigned_agent.is_none(),
            interested_property: lead.interested_property.clone(),
            interactions: lead
                .interactions
                .iter()
                .take(RECENT_INTERACTIONS)
                .map(|interaction| InteractionLine {
                    kind: interaction.kind,
                    message: interaction.message.clone(),
                    time: format::date(&interaction.time),
                })
                .collect(),
            notes: (!lead.notes.is_empty()).then(|| lead.notes.clone()),
            created: format::date(&lead.created_at),
            last_contact: format::date(&lead.last_contact),
        }
    }
}

impl fmt::Display for LeadCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {} <{}> {}", self.id, self.name, self.email, self.phone)?;
        writeln!(
            f,
            "  [{}] score {} ({:?})  source: {}  budget: {}  agent: {}",
            self.status, self.score, self.score_band, self.source, self.budget, self.agent
        )?;
        writeln!(f, "  Interested in: {}", self.interested_property)?;
        for line in &self.interactions {
            writeln!(f, "    - {}: {} ({})", line.kind.label(), line.message, line.time)?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "  Notes: {}", notes)?;
        }
        write!(f, "  Created {} · Last contact {}", self.created, self.last_contact)?;
        if self.needs_agent {
            write!(f, "  [Assign Agent]")?;
        }
        writeln!(f)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeadsView {
    pub stats: LeadStats,
    pub filter_bar: FilterBar,
    pub cards: Vec<LeadCard>,
    pub paging: PageInfo,
    pub empty: Option<EmptyState>,
}

impl LeadsView {
    pub fn build(data: &Dataset, state: &AppState) -> Self {
        let list = &state.leads;
        let matching = state.lead_filter().apply(&data.leads);
        let empty = matching
            .is_empty()
            .then(|| EmptyState::new("No leads found", NO_RESULTS_HINT));
        let paged = paginate(matching, list.page, list.per_page);

        Self {
            stats: LeadStats::of(&data.leads),
            filter_bar: FilterBar::new(
                "Search leads...",
                &list.search,
                LeadStatus::ALL.iter().map(|status| status.as_str()),
                list.status.to_string(),
            ),
            cards: paged.items.into_iter().map(LeadCard::from_lead).collect(),
            paging: paged.info,
            empty,
        }
    }
}

impl fmt::Display for LeadsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Leads")?;
        writeln!(f, "Manage and track potential clients from all channels")?;
        writeln!(f)?;
        let average = self
            .stats
            .average_score
            .map_or_else(|| "-".to_string(), |score| score.to_string());
        writeln!(
            f,
            "Total Leads: {}   Hot Leads: {}   Converted: {}   Avg. Score: {}",
            self.stats.total, self.stats.hot, self.stats.converted, average
        )?;
        writeln!(f)?;
        write!(f, "{}", self.filter_bar)?;
        writeln!(f)?;

        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }

        if let Some(empty) = &self.empty {
            write!(f, "{}", empty)?;
        } else if self.paging.pages > 1 || self.paging.page > self.paging.pages {
            writeln!(f, "Page {} of {} ({} leads)", self.paging.page, self.paging.pages, self.paging.total)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StatusFilter;
    use crate::store::fixtures;

    fn view(configure: impl FnOnce(&mut AppState)) -> LeadsView {
        let mut state = AppState::default();
        configure(&mut state);
        LeadsView::build(&fixtures::dataset(), &state)
    }

    #[test]
    fn average_score_rounds_half_up() {
        // (95 + 78 + 45 + 100) / 4 = 79.5
        assert_eq!(average_score(&fixtures::leads()), Some(80));
        assert_eq!(average_score(&[]), None);
    }

    #[test]
    fn stats_ignore_the_active_filter() {
        let view = view(|state| state.leads.search = "sarah".into());
        assert_eq!(
            view.stats,
            LeadStats {
                total: 4,
                hot: 1,
                converted: 1,
                average_score: Some(80),
            }
        );
        assert_eq!(view.cards.len(), 1);
    }

    #[test]
    fn hot_filter_shows_one_card() {
        let view = view(|state| state.leads.status = StatusFilter::Only(LeadStatus::Hot));
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].name, "Sarah Chen");
        assert_eq!(view.filter_bar.active, "hot");
        assert!(view.empty.is_none());
    }

    #[test]
    fn no_match_renders_the_empty_state() {
        let view = view(|state| state.leads.search = "nonexistent-zzz".into());
        assert!(view.cards.is_empty());
        let empty = view.empty.as_ref().expect("empty state");
        assert_eq!(empty.title, "No leads found");
        assert!(view.to_string().contains("No leads found"));
        assert!(view.to_string().contains(NO_RESULTS_HINT));
    }

    #[test]
    fn unassigned_lead_falls_back_and_offers_assignment() {
        let view = view(|_| {});
        let emily = view.cards.iter().find(|card| card.name == "Emily Wong").unwrap();
        assert_eq!(emily.agent, "Unassigned");
        assert!(emily.needs_agent);
        let sarah = &view.cards[0];
        assert_eq!(sarah.agent, "Michael Wong");
        assert!(!sarah.needs_agent);
    }

    #[test]
    fn cards_carry_formatted_fields() {
        let view = view(|_| {});
        let sarah = &view.cards[0];
        assert_eq!(sarah.budget, "HKD 40000-50000");
        assert_eq!(sarah.score_band, ScoreBand::High);
        assert_eq!(sarah.created, "Jan 15, 10:15 AM");
        assert_eq!(sarah.interactions.len(), 3);
        assert_eq!(view.cards[1].score_band, ScoreBand::Medium);
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::of(100), ScoreBand::High);
        assert_eq!(ScoreBand::of(80), ScoreBand::High);
        assert_eq!(ScoreBand::of(79), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(60), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(59), ScoreBand::Low);
    }

    #[test]
    fn only_three_interactions_are_shown() {
        let mut data = fixtures::dataset();
        let extra = data.leads[0].interactions[0].clone();
        data.leads[0].interactions.push(extra);
        let view = LeadsView::build(&data, &AppState::default());
        assert_eq!(view.cards[0].interactions.len(), 3);
    }

    fn scored(score: u32, status: LeadStatus) -> Lead {
        let mut lead = fixtures::leads().remove(0);
        lead.score = score;
        lead.status = status;
        lead
    }

    fn bucket_counts(scoring: &LeadScoring) -> Vec<usize> {
        scoring.distribution.iter().map(|bucket| bucket.count).collect()
    }

    #[test]
    fn scoring_buckets_are_inclusive_at_both_ends() {
        let leads = vec![
            scored(20, LeadStatus::Cold),
            scored(21, LeadStatus::Cold),
            scored(80, LeadStatus::Warm),
            scored(81, LeadStatus::Hot),
        ];
        let scoring = LeadScoring::of(&leads);
        assert_eq!(bucket_counts(&scoring), vec![1, 1, 0, 1, 1]);
        assert_eq!(scoring.distribution[0].range, "0-20");
        assert_eq!(scoring.distribution[4].label, "Very High");
    }

    #[test]
    fn scoring_over_fixture_leads() {
        let scoring = LeadScoring::of(&fixtures::leads());
        assert_eq!(bucket_counts(&scoring), vec![0, 0, 1, 1, 2]);
        let very_high = &scoring.distribution[4];
        assert_eq!(very_high.converted, 1);
        assert_eq!(very_high.conversion_rate, 50.0);
        let statuses: Vec<LeadStatus> = scoring.by_status.iter().map(|s| s.status).collect();
        assert_eq!(statuses, LeadStatus::ALL.to_vec());
    }

    #[test]
    fn scoring_empty_collection_has_zero_rates() {
        let scoring = LeadScoring::of(&[]);
        assert!(scoring.distribution.iter().all(|b| b.count == 0 && b.conversion_rate == 0.0));
        assert!(scoring.by_status.is_empty());
    }

    #[test]
    fn status_averages_round_to_two_decimals() {
        let leads = vec![
            scored(70, LeadStatus::Warm),
            scored(71, LeadStatus::Warm),
            scored(71, LeadStatus::Warm),
        ];
        let scoring = LeadScoring::of(&leads);
        assert_eq!(scoring.by_status.len(), 1);
        assert_eq!(scoring.by_status[0].average_score, 70.67);
        assert_eq!(scoring.by_status[0].count, 3);
    }

    #[test]
    fn source_filter_narrows_cards_by_channel() {
        let view = view(|state| state.leads.source = Some("instagram dm".into()));
        let names: Vec<&str> = view.cards.iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Chen", "James Park"]);
    }

    #[test]
    fn agent_filter_narrows_cards() {
        let view = view(|state| state.leads.agent = Some("Lisa Zhang".into()));
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].name, "David Liu");

        let view = super::tests::view(|state| state.leads.agent = Some("unassigned".into()));
        assert_eq!(view.cards[0].name, "Emily Wong");
        assert!(view.cards[0].needs_agent);
    }

    #[test]
    fn page_past_the_end_explains_itself() {
        let view = view(|state| state.leads.page = 9);
        assert!(view.cards.is_empty());
        assert!(view.empty.is_none());
        assert!(view.to_string().contains("Page 9 of 1 (4 leads)"));
    }

    #[test]
    fn pagination_slices_cards() {
        let view = view(|state| {
            state.leads.per_page = 3;
            state.leads.page = 2;
        });
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].name, "James Park");
        assert_eq!(view.paging.pages, 2);
        assert!(view.empty.is_none());
    }
}
