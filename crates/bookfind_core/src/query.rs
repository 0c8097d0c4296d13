use url::form_urlencoded;

const SEARCH_TEXT_PARAM: &str = "searchText";
const PAGE_PARAM: &str = "page";

/// Search parameters persisted in the session query string.
///
/// `search_text` keeps the user's original casing and spacing; only the
/// outbound request query is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub search_text: String,
    pub page: u32,
}

/// Parses persisted query parameters.
///
/// Returns `None` unless a non-empty `searchText` parameter is present.
/// `page` defaults to 1 when absent, non-numeric, or not positive.
pub fn parse_query(query: &str) -> Option<QueryParams> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search_text = None;
    let mut raw_page = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            SEARCH_TEXT_PARAM => search_text = Some(value.into_owned()),
            PAGE_PARAM => raw_page = Some(value.into_owned()),
            _ => {}
        }
    }

    let search_text = search_text.filter(|text| !text.is_empty())?;
    let page = raw_page
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1);

    Some(QueryParams { search_text, page })
}

/// Encodes parameters as a query string, e.g. `searchText=dune&page=3`.
pub fn encode_query(params: &QueryParams) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(SEARCH_TEXT_PARAM, &params.search_text)
        .append_pair(PAGE_PARAM, &params.page.to_string())
        .finish()
}
