//! Bookfind engine: search IO pipeline and session persistence.
mod client;
mod pipeline;
mod store;
mod types;

pub use client::{ReqwestSearchClient, SearchClient, SearchSettings};
pub use pipeline::ResultsPipeline;
pub use store::{FileQueryStore, QueryStore, StoreError};
pub use types::{BookDoc, ResultsSnapshot, SearchError, SearchQuery, SearchResults};
