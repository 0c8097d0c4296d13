use crate::{SearchError, SearchQuery, SearchResults};

/// Settings for the outbound search client.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Base URL of the bibliographic search endpoint.
    pub endpoint: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://openlibrary.org/search.json".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError>;
}

/// [`SearchClient`] backed by a shared `reqwest` client.
///
/// A single best-effort GET per query: no retries, no backoff, no timeout
/// beyond what the transport itself enforces.
#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let endpoint =
            reqwest::Url::parse(&settings.endpoint).map_err(|err| SearchError::Endpoint {
                url: settings.endpoint.clone(),
                message: err.to_string(),
            })?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Builds the exact wire URL for `query`:
    /// `{endpoint}?q=<text>&page=<page>&limit=<limit>`.
    ///
    /// The free text is forwarded verbatim apart from lower-casing;
    /// form-urlencoding renders its spaces as `+`.
    pub fn request_url(&self, query: &SearchQuery) -> reqwest::Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("q", &query.text.to_lowercase())
            .append_pair("page", &query.page.to_string())
            .append_pair("limit", &query.limit.to_string());
        url
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError> {
        let url = self.request_url(query);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SearchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response
            .json::<SearchResults>()
            .await
            .map_err(map_body_error)
    }
}

fn map_body_error(err: reqwest::Error) -> SearchError {
    if err.is_decode() {
        return SearchError::Decode(err.to_string());
    }
    SearchError::Network(err.to_string())
}
