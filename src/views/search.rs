use std::fmt;

use serde::Serialize;

use super::format::NO_RESULTS_HINT;
use super::EmptyState;
use crate::filter::{filter_records, Query, StatusFilter};
use crate::store::Dataset;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Lead,
    Property,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: HitKind,
    pub id: u32,
    pub title: String,
    pub detail: String,
    pub status: String,
}

/// Header search across leads and properties, status filter `all`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub empty: Option<EmptyState>,
}

impl SearchView {
    pub fn build(data: &Dataset, query: &Query) -> Self {
        let leads = filter_records(&data.leads, query, &StatusFilter::All)
            .into_iter()
            .map(|lead| SearchHit {
                kind: HitKind::Lead,
                id: lead.id,
                title: lead.name.clone(),
                detail: lead.interested_property.clone(),
                status: lead.status.to_string(),
            });
        let properties = filter_records(&data.properties, query, &StatusFilter::All)
            .into_iter()
            .map(|property| SearchHit {
                kind: HitKind::Property,
                id: property.id,
                title: property.title.clone(),
                detail: property.location.clone(),
                status: property.status.to_string(),
            });

        let hits: Vec<SearchHit> = leads.chain(properties).collect();
        let empty = hits
            .is_empty()
            .then(|| EmptyState::new("No results found", NO_RESULTS_HINT));

        Self {
            query: query.as_str().to_string(),
            hits,
            empty,
        }
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search results for {:?}", self.query)?;
        writeln!(f)?;
        for hit in &self.hits {
            let kind = match hit.kind {
                HitKind::Lead => "lead",
                HitKind::Property => "property",
            };
            writeln!(f, "{:<9} #{:<3} {} [{}]", kind, hit.id, hit.title, hit.status)?;
            writeln!(f, "               {}", hit.detail)?;
        }
        if let Some(empty) = &self.empty {
            write!(f, "{}", empty)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SearchMode;
    use crate::store::fixtures;

    #[test]
    fn finds_leads_and_properties_together() {
        // Sarah is interested in the Central apartment, which is also a listing
        let view = SearchView::build(&fixtures::dataset(), &Query::literal("central"));
        let kinds: Vec<HitKind> = view.hits.iter().map(|hit| hit.kind).collect();
        assert_eq!(kinds, vec![HitKind::Lead, HitKind::Property]);
        assert_eq!(view.hits[0].title, "Sarah Chen");
        assert_eq!(view.hits[1].id, 1);
    }

    #[test]
    fn ignores_status() {
        let view = SearchView::build(&fixtures::dataset(), &Query::literal(""));
        assert_eq!(view.hits.len(), 8);
    }

    #[test]
    fn no_hits_shows_the_empty_state() {
        let view = SearchView::build(&fixtures::dataset(), &Query::literal("nonexistent-zzz"));
        assert!(view.hits.is_empty());
        assert!(view.to_string().contains("No results found"));
    }

    #[test]
    fn honours_search_mode() {
        let data = fixtures::dataset();
        let literal = SearchView::build(&data, &Query::literal("penthouse mid-levels"));
        assert!(literal.hits.is_empty());
        let terms = SearchView::build(&data, &Query::new("penthouse mid-levels", SearchMode::AllTerms));
        // David's lead plus the listing itself
        assert_eq!(terms.hits.len(), 2);
    }
}
