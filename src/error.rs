use thiserror::Error;

/// Errors raised while interpreting dashboard input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown page `{0}` (expected dashboard, properties, leads, analytics or settings)")]
    UnknownPage(String),
    #[error("unknown {kind} status `{value}`")]
    UnknownStatus { kind: &'static str, value: String },
    #[error("unknown property source `{0}` (expected 28hse, squarefoot or centaline)")]
    UnknownSource(String),
    #[error("unknown settings tab `{0}`")]
    UnknownTab(String),
    #[error("unknown search mode `{0}` (expected literal, trimmed or all-terms)")]
    UnknownSearchMode(String),
    #[error("{kind} `{id}` not found")]
    NotFound { kind: &'static str, id: u32 },
    #[error("`{0}` records cannot be exported")]
    NotExportable(String),
}
