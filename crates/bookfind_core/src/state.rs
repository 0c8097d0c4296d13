use crate::query::QueryParams;
use crate::view_model::SearchViewModel;

/// The active, user-submitted search driving the results pipeline.
///
/// Instances are immutable per emission: a submit or page change produces a
/// fresh value that supersedes the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSearch {
    pub search_text: String,
    pub page: u32,
    pub page_size: u32,
}

/// Injectable configuration for [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Results per page for every search this state emits.
    pub default_page_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
        }
    }
}

/// Single source of truth for what is currently being searched.
///
/// `search_text`/`page` track in-progress edits; `current` holds the last
/// submitted search, or `None` when no search is active. An empty or absent
/// search is always `None`, never a value with an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    search_text: String,
    page: u32,
    page_size: u32,
    current: Option<CurrentSearch>,
    initialized: bool,
    dirty: bool,
}

impl SearchState {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search_text: String::new(),
            // Page size is positive by contract; a zero from the caller is lifted to 1.
            page_size: config.default_page_size.max(1),
            page: 1,
            current: None,
            initialized: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> SearchViewModel {
        SearchViewModel {
            search_text: self.search_text.clone(),
            page: self.page,
            page_size: self.page_size,
            current: self.current.clone(),
            dirty: self.dirty,
        }
    }

    /// In-progress (not yet submitted) contents of the search box.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The submitted search currently driving the results pipeline, if any.
    pub fn current_search(&self) -> Option<&CurrentSearch> {
        self.current.as_ref()
    }

    /// Whether the one-shot restore from persisted query parameters has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the dirty flag and clears it; the shell uses this to coalesce renders.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        if self.search_text != text {
            self.search_text = text;
            self.dirty = true;
        }
    }

    /// Starts a fresh search from the draft text, resetting to page 1.
    pub(crate) fn begin_search(&mut self) -> CurrentSearch {
        self.page = 1;
        let current = CurrentSearch {
            search_text: self.search_text.clone(),
            page: self.page,
            page_size: self.page_size,
        };
        self.current = Some(current.clone());
        // A user-driven search closes the startup-restore window for good.
        self.initialized = true;
        self.dirty = true;
        current
    }

    /// Moves the active search to `page`; `None` when no search is active.
    pub(crate) fn change_page(&mut self, page: u32) -> Option<CurrentSearch> {
        let current = self.current.as_mut()?;
        current.page = page;
        let current = current.clone();
        self.page = page;
        self.dirty = true;
        Some(current)
    }

    /// Adopts persisted parameters as the active search.
    pub(crate) fn restore(&mut self, params: QueryParams) -> CurrentSearch {
        self.search_text = params.search_text;
        self.page = params.page;
        let current = CurrentSearch {
            search_text: self.search_text.clone(),
            page: self.page,
            page_size: self.page_size,
        };
        self.current = Some(current.clone());
        self.dirty = true;
        current
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
