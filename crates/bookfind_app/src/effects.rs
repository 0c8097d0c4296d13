use bookfind_core::{encode_query, CurrentSearch, Effect};
use bookfind_engine::{QueryStore, SearchQuery};
use bookfind_logging::{app_debug, app_error};
use tokio::sync::watch;

/// Executes the effects returned by the state machine against the engine.
pub struct EffectRunner {
    search_tx: watch::Sender<Option<SearchQuery>>,
    store: Box<dyn QueryStore>,
}

impl EffectRunner {
    pub fn new(search_tx: watch::Sender<Option<SearchQuery>>, store: Box<dyn QueryStore>) -> Self {
        Self { search_tx, store }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PublishSearch(current) => {
                    app_debug!(
                        "Publishing search '{}' page {}",
                        current.search_text,
                        current.page
                    );
                    let _ = self.search_tx.send(Some(map_query(&current)));
                }
                Effect::PersistQuery(params) => {
                    let query = encode_query(&params);
                    if let Err(err) = self.store.replace(&query) {
                        // A failed session write loses the restore, nothing else.
                        app_error!("Failed to persist session query '{}': {}", query, err);
                    }
                }
            }
        }
    }
}

fn map_query(current: &CurrentSearch) -> SearchQuery {
    SearchQuery {
        text: current.search_text.clone(),
        page: current.page,
        limit: current.page_size,
    }
}
