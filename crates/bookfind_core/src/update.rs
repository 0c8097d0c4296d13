use crate::{CurrentSearch, Effect, Msg, QueryParams, SearchState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchTextChanged(text) => {
            state.set_search_text(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            // An empty search box submits nothing: no emission, no navigation.
            if state.search_text().is_empty() {
                return (state, Vec::new());
            }
            let current = state.begin_search();
            let params = persisted_params(&current);
            vec![Effect::PublishSearch(current), Effect::PersistQuery(params)]
        }
        Msg::PageSelected(page) => match state.change_page(page) {
            Some(current) => {
                let params = persisted_params(&current);
                vec![Effect::PublishSearch(current), Effect::PersistQuery(params)]
            }
            // A paginator event with no active search is stale; ignore it.
            None => Vec::new(),
        },
        Msg::RestoreFromQuery(params) => {
            if state.is_initialized() {
                return (state, Vec::new());
            }
            state.mark_initialized();
            match params {
                Some(params) => {
                    let current = state.restore(params);
                    // The store already holds these parameters; restoring must not write them back.
                    vec![Effect::PublishSearch(current)]
                }
                None => Vec::new(),
            }
        }
    };

    (state, effects)
}

fn persisted_params(current: &CurrentSearch) -> QueryParams {
    QueryParams {
        search_text: current.search_text.clone(),
        page: current.page,
    }
}
