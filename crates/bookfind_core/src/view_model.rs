use crate::state::CurrentSearch;

/// Snapshot of the search state rendered by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchViewModel {
    pub search_text: String,
    pub page: u32,
    pub page_size: u32,
    pub current: Option<CurrentSearch>,
    pub dirty: bool,
}
