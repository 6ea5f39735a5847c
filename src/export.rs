//! Writes the currently filtered leads or properties to a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::app::{AppState, Page};
use crate::error::DashboardError;
use crate::store::Dataset;

#[derive(Debug, Serialize)]
pub struct Export<'a, T> {
    pub exported_at: DateTime<Utc>,
    pub kind: Page,
    pub total: usize,
    pub records: Vec<&'a T>,
}

impl<'a, T> Export<'a, T> {
    fn new(kind: Page, records: Vec<&'a T>) -> Self {
        Self {
            exported_at: Utc::now(),
            kind,
            total: records.len(),
            records,
        }
    }
}

/// Pretty JSON for the records of `kind` that pass the list's filters.
/// Paging is ignored; every match is exported.
pub fn render(data: &Dataset, state: &AppState, kind: Page) -> Result<(usize, String)> {
    let (total, json) = match kind {
        Page::Leads => {
            let export = Export::new(kind, state.lead_filter().apply(&data.leads));
            (export.total, serde_json::to_string_pretty(&export)?)
        }
        Page::Properties => {
            let export = Export::new(kind, state.property_filter().apply(&data.properties));
            (export.total, serde_json::to_string_pretty(&export)?)
        }
        other => return Err(DashboardError::NotExportable(other.to_string()).into()),
    };
    Ok((total, json))
}

/// One-line result printed by `propai export --json`
pub fn summary(path: &Path, total: usize) -> serde_json::Value {
    serde_json::json!({ "output": path.display().to_string(), "total": total })
}

pub async fn write(data: &Dataset, state: &AppState, kind: Page, path: &Path) -> Result<usize> {
    let (total, json) = render(data, state, kind)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    info!("💾 Saved {} {} to {}", total, kind, path.display());
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StatusFilter;
    use crate::models::LeadStatus;
    use crate::store::fixtures;

    #[tokio::test]
    async fn writes_filtered_leads_with_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.json");
        let mut state = AppState::default();
        state.leads.status = StatusFilter::Only(LeadStatus::Hot);

        let total = write(&fixtures::dataset(), &state, Page::Leads, &path).await.unwrap();
        assert_eq!(total, 1);

        let written: serde_json::Value =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(written["kind"], "leads");
        assert_eq!(written["total"], 1);
        assert_eq!(written["records"][0]["name"], "Sarah Chen");
        assert!(written["exported_at"].is_string());
    }

    #[test]
    fn exports_every_match_regardless_of_paging() {
        let mut state = AppState::default();
        state.properties.per_page = 1;
        let (total, _) = render(&fixtures::dataset(), &state, Page::Properties).unwrap();
        assert_eq!(total, 4);
    }

    #[test]
    fn summary_prints_the_output_path_as_text() {
        let summary = summary(Path::new("out/leads.json"), 3);
        assert_eq!(summary["output"], "out/leads.json");
        assert_eq!(summary["total"], 3);
    }

    #[test]
    fn only_lists_are_exportable() {
        let err = render(&fixtures::dataset(), &AppState::default(), Page::Analytics).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DashboardError>(),
            Some(&DashboardError::NotExportable("analytics".into()))
        );
    }
}
