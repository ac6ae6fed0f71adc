//! Search engine preference store.

use std::rc::Rc;

use url::Url;

use crate::catalog::{self, SearchEngine};
use crate::config;
use crate::navigation::Navigator;
use crate::observable::{Observable, Subscription};
use crate::storage::Storage;

/// Reactive, persisted holder of the selected search engine id.
///
/// Also performs the search side effect itself: builds the destination URL
/// from the engine's template and hands it to the host's [`Navigator`].
pub struct SearchEngineStore {
    storage: Storage,
    navigator: Rc<dyn Navigator>,
    selected: Observable<String>,
}

impl SearchEngineStore {
    /// Seed the in-memory id from storage. In a headless context the adapter
    /// hands back the literal default, so rendered output is deterministic.
    pub fn new(storage: Storage, navigator: Rc<dyn Navigator>) -> Self {
        let initial = storage.load(
            config::KEY_SEARCH_ENGINE,
            config::DEFAULT_SEARCH_ENGINE.to_string(),
        );

        Self {
            storage,
            navigator,
            selected: Observable::new(initial),
        }
    }

    /// Currently selected engine id.
    pub fn selected_engine_id(&self) -> String {
        self.selected.get()
    }

    /// Observe selection changes; the new id is delivered synchronously.
    pub fn subscribe(&self, callback: impl Fn(&String) + 'static) -> Subscription<String> {
        self.selected.subscribe(callback)
    }

    /// Select an engine. Observers are notified first, then the id is written
    /// through; in a headless context the in-memory state still updates.
    pub fn set_engine(&self, engine_id: &str) {
        self.selected.set(engine_id.to_string());
        self.storage.save(config::KEY_SEARCH_ENGINE, &engine_id);
    }

    /// Resolve the selected id against the catalog.
    ///
    /// Unknown or stale ids fall back to the first catalog entry rather than
    /// erroring, so a corrupted persisted id degrades to a usable engine.
    pub fn engine_config(&self) -> &'static SearchEngine {
        let id = self.selected.get();
        catalog::engine_by_id(&id).unwrap_or(&catalog::SEARCH_ENGINES[0])
    }

    /// Run a search with the selected engine.
    ///
    /// No-op in a headless context or for an empty query. Honors the
    /// `openLinksInNewTab` preference (default true) when deciding how to
    /// navigate.
    pub fn search(&self, query: &str) {
        if !self.storage.context().is_interactive() || query.is_empty() {
            return;
        }

        let engine = self.engine_config();
        let destination = format!("{}{}", engine.url, urlencoding::encode(query));
        let destination = match Url::parse(&destination) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Refusing to navigate to malformed search URL {:?}: {}", destination, e);
                return;
            }
        };

        let open_in_new_tab = self.storage.load(
            config::KEY_OPEN_LINKS_IN_NEW_TAB,
            config::DEFAULT_OPEN_LINKS_IN_NEW_TAB,
        );

        if open_in_new_tab {
            self.navigator.open_new_tab(destination.as_str());
        } else {
            self.navigator.navigate(destination.as_str());
        }
    }
}
