pub mod dataset;
pub mod fixtures;
pub mod json;
pub mod traits;

pub use dataset::{Dataset, Record};
pub use fixtures::FixtureProvider;
pub use json::JsonFileProvider;
pub use traits::{DataProvider, RecordProvider};
