use std::fmt;

use serde::Serialize;

use super::format::{self, NO_RESULTS_HINT};
use super::{EmptyState, FilterBar};
use crate::app::AppState;
use crate::filter::{paginate, PageInfo};
use crate::models::{ContentStyle, ListingStatus, Property, Source};
use crate::store::Dataset;

/// Hashtags previewed before collapsing into "+N more"
const HASHTAG_PREVIEW: usize = 3;
const TOP_PERFORMING: usize = 2;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EngagementLine {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub posted: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyCard {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub source: Source,
    pub status: ListingStatus,
    pub price: String,
    /// Hidden for studios
    pub bedrooms: Option<u32>,
    pub bathrooms: u32,
    pub area: String,
    pub caption: String,
    pub style: ContentStyle,
    pub hashtags: Vec<String>,
    pub more_hashtags: Option<String>,
    /// Only published listings have engagement to show
    pub engagement: Option<EngagementLine>,
    pub actions: Vec<&'static str>,
}

impl PropertyCard {
    pub fn from_property(property: &Property) -> Self {
        let tags = &property.content.hashtags;
        let hidden = tags.len().saturating_sub(HASHTAG_PREVIEW);

        let engagement = (property.status == ListingStatus::Published).then(|| EngagementLine {
            views: property.engagement.views,
            likes: property.engagement.likes,
            comments: property.engagement.comments,
            posted: format::optional_date(property.posted_at.as_ref()),
        });

        let mut actions = vec!["View Details"];
        match property.status {
            ListingStatus::Draft => actions.push("Publish"),
            ListingStatus::Pending => actions.push("Schedule"),
            ListingStatus::Published => {}
        }

        Self {
            id: property.id,
            title: property.title.clone(),
            location: property.location.clone(),
            source: property.source,
            status: property.status,
            price: format::price(&property.price),
            bedrooms: (property.bedrooms > 0).then_some(property.bedrooms),
            bathrooms: property.bathrooms,
            area: format!("{}ft²", property.area),
            caption: property.content.caption.clone(),
            style: property.content.style,
            hashtags: tags.iter().take(HASHTAG_PREVIEW).cloned().collect(),
            more_hashtags: (hidden > 0).then(|| format!("+{} more", hidden)),
            engagement,
            actions,
        }
    }
}

impl fmt::Display for PropertyCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} [{}] [{}] {}", self.id, self.source, self.status, self.title)?;
        writeln!(f, "  {}", self.location)?;
        write!(f, "  {}  ", self.price)?;
        if let Some(bedrooms) = self.bedrooms {
            write!(f, "{} bd  ", bedrooms)?;
        }
        writeln!(f, "{} ba  {}", self.bathrooms, self.area)?;
        writeln!(f, "  AI Generated Caption ({})", self.style)?;
        writeln!(f, "    {}", self.caption)?;
        write!(f, "    {}", self.hashtags.join(" "))?;
        if let Some(more) = &self.more_hashtags {
            write!(f, " {}", more)?;
        }
        writeln!(f)?;
        if let Some(engagement) = &self.engagement {
            writeln!(
                f,
                "  {} views · {} likes · {} comments · Posted {}",
                engagement.views, engagement.likes, engagement.comments, engagement.posted
            )?;
        }
        let actions: Vec<String> = self.actions.iter().map(|a| format!("[{}]", a)).collect();
        writeln!(f, "  {}", actions.join(" "))
    }
}

/// Listing counts over the whole collection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PropertyStats {
    pub total: usize,
    pub published: usize,
    pub pending: usize,
    pub draft: usize,
    pub by_source: Vec<(Source, usize)>,
    /// Most viewed listings, best first
    pub top_performing: Vec<(String, u64)>,
}

impl PropertyStats {
    pub fn of(properties: &[Property]) -> Self {
        let with_status = |status| properties.iter().filter(|p| p.status == status).count();

        let mut ranked: Vec<&Property> = properties
            .iter()
            .filter(|p| p.engagement.views > 0)
            .collect();
        ranked.sort_by(|a, b| b.engagement.views.cmp(&a.engagement.views));

        Self {
            total: properties.len(),
            published: with_status(ListingStatus::Published),
            pending: with_status(ListingStatus::Pending),
            draft: with_status(ListingStatus::Draft),
            by_source: Source::ALL
                .into_iter()
                .map(|source| (source, properties.iter().filter(|p| p.source == source).count()))
                .collect(),
            top_performing: ranked
                .into_iter()
                .take(TOP_PERFORMING)
                .map(|p| (p.title.clone(), p.engagement.views))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertiesView {
    pub stats: PropertyStats,
    pub filter_bar: FilterBar,
    pub cards: Vec<PropertyCard>,
    pub paging: PageInfo,
    pub empty: Option<EmptyState>,
}

impl PropertiesView {
    pub fn build(data: &Dataset, state: &AppState) -> Self {
        let list = &state.properties;
        let matching = state.property_filter().apply(&data.properties);
        let empty = matching
            .is_empty()
            .then(|| EmptyState::new("No properties found", NO_RESULTS_HINT));
        let paged = paginate(matching, list.page, list.per_page);

        Self {
            stats: PropertyStats::of(&data.properties),
            filter_bar: FilterBar::new(
                "Search properties...",
                &list.search,
                ListingStatus::ALL.iter().map(|status| status.as_str()),
                list.status.to_string(),
            ),
            cards: paged.items.into_iter().map(PropertyCard::from_property).collect(),
            paging: paged.info,
            empty,
        }
    }
}

impl fmt::Display for PropertiesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Properties")?;
        writeln!(f, "Manage scraped properties and their AI-generated content")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} listings: {} published, {} pending, {} draft",
            self.stats.total, self.stats.published, self.stats.pending, self.stats.draft
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
            writeln!(f, "Page {} of {} ({} properties)", self.paging.page, self.paging.pages, self.paging.total)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StatusFilter;
    use crate::store::fixtures;

    fn view(configure: impl FnOnce(&mut AppState)) -> PropertiesView {
        let mut state = AppState::default();
        configure(&mut state);
        PropertiesView::build(&fixtures::dataset(), &state)
    }

    #[test]
    fn published_cards_show_engagement() {
        let view = view(|_| {});
        let central = &view.cards[0];
        assert_eq!(central.price, "HKD 45,000/month");
        assert_eq!(central.area, "800ft²");
        let engagement = central.engagement.as_ref().unwrap();
        assert_eq!(engagement.views, 1250);
        assert_eq!(engagement.posted, "Jan 15, 10:30 AM");
        assert_eq!(central.actions, vec!["View Details"]);
    }

    #[test]
    fn studio_hides_bedrooms_and_pending_offers_schedule() {
        let view = view(|_| {});
        let studio = &view.cards[1];
        assert_eq!(studio.bedrooms, None);
        assert!(studio.engagement.is_none());
        assert_eq!(studio.actions, vec!["View Details", "Schedule"]);
        assert_eq!(studio.more_hashtags.as_deref(), Some("+1 more"));
    }

    #[test]
    fn draft_offers_publish() {
        let view = view(|state| state.properties.status = StatusFilter::Only(ListingStatus::Draft));
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].actions, vec!["View Details", "Publish"]);
        assert_eq!(view.cards[0].hashtags.len(), 3);
        assert_eq!(view.cards[0].more_hashtags.as_deref(), Some("+2 more"));
    }

    #[test]
    fn published_without_timestamp_says_not_posted() {
        let mut data = fixtures::dataset();
        data.properties[0].posted_at = None;
        let view = PropertiesView::build(&data, &AppState::default());
        assert_eq!(view.cards[0].engagement.as_ref().unwrap().posted, "Not posted");
    }

    #[test]
    fn source_filter_narrows_cards() {
        let view = view(|state| state.properties.source = Some("centaline".into()));
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].title, "Luxury 3BR Penthouse in Mid-Levels");
    }

    #[test]
    fn no_match_renders_the_empty_state() {
        let view = view(|state| state.properties.search = "kowloon".into());
        assert!(view.cards.is_empty());
        assert_eq!(view.empty.as_ref().unwrap().title, "No properties found");
        assert!(view.to_string().contains("No properties found"));
    }

    #[test]
    fn page_past_the_end_explains_itself() {
        let view = view(|state| state.properties.page = 9);
        assert!(view.cards.is_empty());
        assert!(view.to_string().contains("Page 9 of 1 (4 properties)"));
    }

    #[test]
    fn stats_count_statuses_sources_and_top_views() {
        let stats = PropertyStats::of(&fixtures::properties());
        assert_eq!((stats.total, stats.published, stats.pending, stats.draft), (4, 2, 1, 1));
        assert_eq!(
            stats.by_source,
            vec![(Source::Hse28, 2), (Source::Squarefoot, 1), (Source::Centaline, 1)]
        );
        assert_eq!(
            stats.top_performing,
            vec![
                ("Luxury 3BR Penthouse in Mid-Levels".to_string(), 2100),
                ("Modern 2BR Apartment in Central".to_string(), 1250),
            ]
        );
    }
}
