//! Command line and environment configuration.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use crate::app::{AppState, ListState, Page};
use crate::error::DashboardError;
use crate::filter::{SearchMode, StatusFilter, DEFAULT_PER_PAGE};
use crate::models::{SettingsTab, Source};

#[derive(Parser, Debug)]
#[command(name = "propai", about = "PropAI property automation dashboard")]
pub struct Cli {
    /// JSON dataset to load instead of the built-in demo data
    #[arg(long, env = "PROPAI_DATA")]
    pub data: Option<PathBuf>,

    #[arg(long, env = "PROPAI_SEARCH_MODE", default_value_t = SearchMode::Literal)]
    pub search_mode: SearchMode,

    /// Page size for the leads and properties lists
    #[arg(long, global = true, env = "PROPAI_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: usize,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a page
    Show(ShowArgs),
    /// Search leads and properties at once
    Search { query: String },
    /// Show one lead
    Lead { id: u32 },
    /// Show one property
    Property { id: u32 },
    /// Write the filtered leads or properties to a file
    Export(ExportArgs),
}

/// Search box, status buttons and paging of a list page
#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long, default_value = "all")]
    pub status: String,

    /// Listing site or lead channel; "all" keeps every source
    #[arg(long)]
    pub source: Option<String>,

    /// Assigned agent of a lead, or "unassigned"
    #[arg(long)]
    pub agent: Option<String>,

    /// 1-based page of the list
    #[arg(long = "page", default_value_t = 1)]
    pub page_number: usize,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub page: Page,

    #[command(flatten)]
    pub list: ListArgs,

    #[arg(long)]
    pub tab: Option<SettingsTab>,

    #[arg(long)]
    pub hide_sidebar: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// `leads` or `properties`
    pub kind: Page,

    #[command(flatten)]
    pub list: ListArgs,

    #[arg(long, short)]
    pub output: PathBuf,
}

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data: Option<PathBuf>,
    pub search_mode: SearchMode,
    pub per_page: usize,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data: cli.data.clone(),
            search_mode: cli.search_mode,
            per_page: cli.per_page,
        }
    }

    /// Fresh UI state on `page`, with this configuration's defaults
    pub fn state_for(&self, page: Page) -> AppState {
        let mut state = AppState::new(self.search_mode);
        state.leads.per_page = self.per_page;
        state.properties.per_page = self.per_page;
        state.navigate(page);
        state
    }
}

impl ListArgs {
    fn apply_to<S>(&self, list: &mut ListState<S>) -> Result<(), DashboardError>
    where
        S: FromStr<Err = DashboardError>,
    {
        list.search = self.search.clone();
        list.status = self.status.parse::<StatusFilter<S>>()?;
        list.source = self.source.clone().filter(|source| source != "all");
        list.page = self.page_number;
        Ok(())
    }

    /// Applies the arguments to whichever list `page` shows.
    /// Status strings are parsed for that record kind, and property
    /// sources must name a known listing site.
    pub fn apply(&self, state: &mut AppState, page: Page) -> Result<(), DashboardError> {
        match page {
            Page::Leads => {
                self.apply_to(&mut state.leads)?;
                state.leads.agent = self.agent.clone();
            }
            Page::Properties => {
                self.apply_to(&mut state.properties)?;
                if let Some(source) = &state.properties.source {
                    let site: Source = source.parse()?;
                    state.properties.source = Some(site.as_str().to_string());
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl ShowArgs {
    pub fn state(&self, config: &Config) -> Result<AppState, DashboardError> {
        let mut state = config.state_for(self.page);
        self.list.apply(&mut state, self.page)?;
        if let Some(tab) = self.tab {
            state.select_tab(tab);
        }
        if self.hide_sidebar {
            state.toggle_sidebar();
        }
        Ok(state)
    }
}

impl ExportArgs {
    pub fn state(&self, config: &Config) -> Result<AppState, DashboardError> {
        if !matches!(self.kind, Page::Leads | Page::Properties) {
            return Err(DashboardError::NotExportable(self.kind.to_string()));
        }
        let mut state = config.state_for(self.kind);
        self.list.apply(&mut state, self.kind)?;
        Ok(state)
    }
}
