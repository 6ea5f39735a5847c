//! PropAI dashboard: property listings, leads and automation health for a
//! real-estate agency, rendered from a pluggable record provider.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod store;
pub mod views;
