use std::sync::Once;

use bookfind_core::{parse_query, update, Effect, Msg, QueryParams, SearchConfig, SearchState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bookfind_logging::initialize_for_tests);
}

#[test]
fn restore_emits_persisted_search_without_rewriting_the_store() {
    init_logging();
    let state = SearchState::new(SearchConfig {
        default_page_size: 10,
    });
    let params = parse_query("searchText=dune&page=3").expect("params");

    let (next, effects) = update(state, Msg::RestoreFromQuery(Some(params)));

    let current = next.current_search().expect("active search").clone();
    assert_eq!(current.search_text, "dune");
    assert_eq!(current.page, 3);
    assert_eq!(current.page_size, 10);
    // The restored text shows up in the search box as well.
    assert_eq!(next.search_text(), "dune");
    assert_eq!(effects, vec![Effect::PublishSearch(current)]);
    assert!(next.is_initialized());
}

#[test]
fn restore_defaults_invalid_page_to_one() {
    init_logging();
    let state = SearchState::new(SearchConfig::default());
    let params = parse_query("searchText=dune&page=abc").expect("params");

    let (next, _effects) = update(state, Msg::RestoreFromQuery(Some(params)));

    assert_eq!(next.current_search().expect("active search").page, 1);
}

#[test]
fn restore_without_params_only_marks_initialized() {
    init_logging();
    let state = SearchState::new(SearchConfig::default());

    let (next, effects) = update(state, Msg::RestoreFromQuery(None));

    assert!(effects.is_empty());
    assert!(next.current_search().is_none());
    assert!(next.is_initialized());
}

#[test]
fn restore_runs_exactly_once() {
    init_logging();
    let state = SearchState::new(SearchConfig::default());
    let (state, _) = update(state, Msg::RestoreFromQuery(None));

    // A second restore must not start a search, whatever it carries.
    let params = QueryParams {
        search_text: "dune".to_string(),
        page: 2,
    };
    let (next, effects) = update(state, Msg::RestoreFromQuery(Some(params)));

    assert!(effects.is_empty());
    assert!(next.current_search().is_none());
}

#[test]
fn restore_cannot_override_a_search_the_user_already_submitted() {
    init_logging();
    let state = SearchState::new(SearchConfig::default());
    let (state, _) = update(state, Msg::SearchTextChanged("tolkien".to_string()));
    let (state, _) = update(state, Msg::SearchSubmitted);

    let params = QueryParams {
        search_text: "dune".to_string(),
        page: 9,
    };
    let (next, effects) = update(state, Msg::RestoreFromQuery(Some(params)));

    assert!(effects.is_empty());
    assert_eq!(
        next.current_search().expect("active search").search_text,
        "tolkien"
    );
}
