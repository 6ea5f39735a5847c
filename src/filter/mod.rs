//! Client-side record filtering.
//!
//! A record is kept when its searchable text matches the query AND its status
//! matches the status filter (AND, optionally, its source matches the source
//! filter). Results always preserve the input order.

pub mod pagination;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::{Lead, LeadStatus, ListingStatus, Property, UNASSIGNED};

pub use pagination::{paginate, PageInfo, Paged, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// A record that can be narrowed by free text and status
pub trait Searchable {
    type Status: Copy + PartialEq;

    /// Fields the free-text query is matched against
    fn search_fields(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;

    /// Source label, for record kinds that have one
    fn source(&self) -> Option<&str> {
        None
    }

    /// Assigned agent, for record kinds that carry one
    fn agent(&self) -> Option<&str> {
        None
    }
}

impl Searchable for Lead {
    type Status = LeadStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.interested_property.as_str()]
    }

    fn status(&self) -> LeadStatus {
        self.status
    }

    fn source(&self) -> Option<&str> {
        Some(self.source.as_str())
    }

    fn agent(&self) -> Option<&str> {
        self.assigned_agent.as_deref()
    }
}

impl Searchable for Property {
    type Status = ListingStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }

    fn status(&self) -> ListingStatus {
        self.status
    }

    fn source(&self) -> Option<&str> {
        Some(self.source.as_str())
    }
}

/// How the query text is interpreted
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Whole query as one case-insensitive substring, whitespace included
    #[default]
    Literal,
    /// Like `Literal` after trimming surrounding whitespace
    Trimmed,
    /// Every whitespace-separated term must appear in some field
    AllTerms,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Literal => "literal",
            Self::Trimmed => "trimmed",
            Self::AllTerms => "all-terms",
        })
    }
}

impl FromStr for SearchMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" => Ok(Self::Literal),
            "trimmed" => Ok(Self::Trimmed),
            "all-terms" => Ok(Self::AllTerms),
            other => Err(DashboardError::UnknownSearchMode(other.to_string())),
        }
    }
}

/// Free-text query, case-folded once up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: String,
    mode: SearchMode,
}

impl Query {
    pub fn new(text: impl Into<String>, mode: SearchMode) -> Self {
        let raw = text.into();
        let folded = raw.to_lowercase();
        Self { raw, folded, mode }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, SearchMode::Literal)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Whether this query lets every record through
    pub fn is_empty(&self) -> bool {
        match self.mode {
            SearchMode::Literal => self.folded.is_empty(),
            SearchMode::Trimmed | SearchMode::AllTerms => self.folded.trim().is_empty(),
        }
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.is_empty() {
            return true;
        }

        let fields: Vec<String> = record
            .search_fields()
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        let any_field_contains = |needle: &str| fields.iter().any(|field| field.contains(needle));

        match self.mode {
            SearchMode::Literal => any_field_contains(self.folded.as_str()),
            SearchMode::Trimmed => any_field_contains(self.folded.trim()),
            SearchMode::AllTerms => self.folded.split_whitespace().all(any_field_contains),
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::literal("")
    }
}

/// `all`, or a single status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl<S: fmt::Display> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => write!(f, "{}", status),
        }
    }
}

impl<S: FromStr<Err = DashboardError>> FromStr for StatusFilter<S> {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Full set of narrowing criteria for one record kind
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFilter<S> {
    pub query: Query,
    pub status: StatusFilter<S>,
    /// Exact, case-insensitive source label; `None` keeps every source.
    pub source: Option<String>,
    /// Exact, case-insensitive agent name. `unassigned` keeps records
    /// without an agent.
    pub agent: Option<String>,
}

impl<S> Default for RecordFilter<S> {
    fn default() -> Self {
        Self {
            query: Query::default(),
            status: StatusFilter::All,
            source: None,
            agent: None,
        }
    }
}

impl<S: Copy + PartialEq> RecordFilter<S> {
    pub fn new(query: Query, status: StatusFilter<S>) -> Self {
        Self {
            query,
            status,
            source: None,
            agent: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        self.source = (source != "all").then_some(source);
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    pub fn matches<T: Searchable<Status = S>>(&self, record: &T) -> bool {
        let source_ok = match &self.source {
            None => true,
            Some(wanted) => record
                .source()
                .is_some_and(|source| source.eq_ignore_ascii_case(wanted)),
        };
        let agent_ok = match (&self.agent, record.agent()) {
            (None, _) => true,
            (Some(wanted), Some(agent)) => agent.eq_ignore_ascii_case(wanted),
            (Some(wanted), None) => wanted.eq_ignore_ascii_case(UNASSIGNED),
        };
        source_ok && agent_ok && self.status.matches(record.status()) && self.query.matches(record)
    }

    pub fn apply<'a, T: Searchable<Status = S>>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}

/// Records matching both `query` and `status`, in their original order
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    query: &Query,
    status: &StatusFilter<T::Status>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| status.matches(record.status()) && query.matches(*record))
        .collect()
}
