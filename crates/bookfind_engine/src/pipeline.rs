use std::sync::Arc;

use bookfind_logging::{app_debug, app_warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::{ResultsSnapshot, SearchClient, SearchQuery};

/// Turns a stream of search queries into a stream of search results.
///
/// One request is in flight at a time. When a newer query arrives while a
/// request is still running, the running request is dropped mid-transfer and
/// the newer query takes its place; observers never see results for a
/// superseded query. The latest snapshot is cached, so a subscriber that
/// arrives after a search completes still reads its outcome.
pub struct ResultsPipeline {
    results_rx: watch::Receiver<ResultsSnapshot>,
    driver: JoinHandle<()>,
}

impl ResultsPipeline {
    /// Spawns the driver task on the current runtime.
    pub fn spawn(
        client: Arc<dyn SearchClient>,
        search_rx: watch::Receiver<Option<SearchQuery>>,
    ) -> Self {
        let (results_tx, results_rx) = watch::channel(None);
        let driver = tokio::spawn(drive(client, search_rx, results_tx));
        Self { results_rx, driver }
    }

    /// A new observer of the results stream. Starts at the cached snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ResultsSnapshot> {
        self.results_rx.clone()
    }
}

impl Drop for ResultsPipeline {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive(
    client: Arc<dyn SearchClient>,
    mut search_rx: watch::Receiver<Option<SearchQuery>>,
    results_tx: watch::Sender<ResultsSnapshot>,
) {
    loop {
        let search = search_rx.borrow_and_update().clone();

        match search {
            Some(query) if !query.text.is_empty() => {
                tokio::select! {
                    biased;

                    changed = search_rx.changed() => {
                        if changed.is_err() {
                            return;
                        }
                        app_debug!("Superseded in-flight search for '{}'", query.text);
                        continue;
                    }
                    outcome = client.search(&query) => {
                        match &outcome {
                            Ok(results) => app_debug!(
                                "Search '{}' page {} returned {} of {} works",
                                query.text,
                                query.page,
                                results.docs.len(),
                                results.num_found
                            ),
                            Err(err) => {
                                app_warn!("Search '{}' page {} failed: {}", query.text, query.page, err)
                            }
                        }
                        let _ = results_tx.send(Some(outcome));
                    }
                }
            }
            _ => {
                // Empty text never reaches the queries stream, but an absent
                // query does: it means no search is active, so any stale
                // snapshot must go.
                results_tx.send_if_modified(|snapshot| {
                    if snapshot.is_some() {
                        *snapshot = None;
                        true
                    } else {
                        false
                    }
                });
            }
        }

        if search_rx.changed().await.is_err() {
            return;
        }
    }
}
