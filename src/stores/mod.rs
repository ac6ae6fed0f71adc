//! Preference stores exposed to the host UI.

mod search_engine;
mod tools;

pub use search_engine::SearchEngineStore;
pub use tools::ToolsStore;

use std::rc::Rc;

use crate::context::Context;
use crate::navigation::Navigator;
use crate::storage::{Storage, StorageMedium};

/// The preference stores, constructed once at application startup.
///
/// Consumers receive this by reference (or through their UI framework's
/// context mechanism) instead of reaching for global singletons, so tests
/// can build isolated instances over their own medium.
pub struct Preferences {
    storage: Storage,
    pub search_engine: SearchEngineStore,
    pub tools: ToolsStore,
}

impl Preferences {
    pub fn new(
        context: Context,
        medium: Rc<dyn StorageMedium>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let storage = Storage::new(context, medium);

        Self {
            search_engine: SearchEngineStore::new(storage.clone(), navigator),
            tools: ToolsStore::new(storage.clone()),
            storage,
        }
    }

    /// The shared adapter, for preferences outside the two stores
    /// (e.g. `openLinksInNewTab`, written by a settings screen).
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}
