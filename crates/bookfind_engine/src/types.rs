use serde::Deserialize;

/// Engine-side request value: what to ask the search endpoint for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub page: u32,
    pub limit: u32,
}

/// Response payload of the bibliographic search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResults {
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<BookDoc>,
}

/// One matching book as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookDoc {
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    #[serde(default)]
    pub cover_edition_key: Option<String>,
}

/// Latest value of the results stream: `None` until a search is active.
pub type ResultsSnapshot = Option<Result<SearchResults, SearchError>>;

/// Failure surfaced by a search attempt; propagated to observers, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search endpoint {url}: {message}")]
    Endpoint { url: String, message: String },
    #[error("search endpoint returned http status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed search response: {0}")]
    Decode(String),
}
