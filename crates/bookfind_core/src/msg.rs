#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input box.
    SearchTextChanged(String),
    /// User submitted the search form.
    SearchSubmitted,
    /// User selected a page in the pagination control.
    PageSelected(u32),
    /// Restore the search persisted in query parameters (startup, one-shot).
    RestoreFromQuery(Option<crate::QueryParams>),
}
