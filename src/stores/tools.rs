//! Tool widget preference store.

use crate::catalog::{self, Tool};
use crate::config;
use crate::observable::{Observable, Subscription};
use crate::storage::Storage;

/// Reactive, persisted holder of the ordered list of active tool ids.
///
/// Order is significant: it drives the host's render order. Membership is
/// kept unique by [`add_tool`](ToolsStore::add_tool).
pub struct ToolsStore {
    storage: Storage,
    active: Observable<Vec<String>>,
}

impl ToolsStore {
    pub fn new(storage: Storage) -> Self {
        let initial = storage.load(config::KEY_ACTIVE_TOOLS, config::default_active_tools());

        Self {
            storage,
            active: Observable::new(initial),
        }
    }

    /// Active tool ids, in render order.
    pub fn active_tool_ids(&self) -> Vec<String> {
        self.active.get()
    }

    /// Observe changes to the active list.
    pub fn subscribe(&self, callback: impl Fn(&Vec<String>) + 'static) -> Subscription<Vec<String>> {
        self.active.subscribe(callback)
    }

    /// Activate a tool. Idempotent: an already-active id leaves the state
    /// untouched and writes nothing; otherwise the id is appended at the end.
    pub fn add_tool(&self, tool_id: &str) {
        let mut active = self.active.get();
        if active.iter().any(|id| id == tool_id) {
            return;
        }

        active.push(tool_id.to_string());
        self.active.set(active.clone());
        self.storage.save(config::KEY_ACTIVE_TOOLS, &active);
    }

    /// Deactivate a tool. The filter is unconditional, so the write happens
    /// even when nothing was removed.
    pub fn remove_tool(&self, tool_id: &str) {
        let mut active = self.active.get();
        active.retain(|id| id != tool_id);
        self.active.set(active.clone());
        self.storage.save(config::KEY_ACTIVE_TOOLS, &active);
    }

    /// Replace the list wholesale. No validation that `new_order` permutes
    /// the previous set; that is the caller's responsibility.
    pub fn reorder_tools(&self, new_order: Vec<String>) {
        self.active.set(new_order.clone());
        self.storage.save(config::KEY_ACTIVE_TOOLS, &new_order);
    }

    /// Restore the fixed default list.
    pub fn reset_to_default(&self) {
        let defaults = config::default_active_tools();
        self.active.set(defaults.clone());
        self.storage.save(config::KEY_ACTIVE_TOOLS, &defaults);
    }

    /// Whether `tool_id` is currently active.
    pub fn is_active(&self, tool_id: &str) -> bool {
        self.active.get().iter().any(|id| id == tool_id)
    }

    /// Catalog lookup by id. No fallback: an unknown id is `None`.
    pub fn tool_config(&self, tool_id: &str) -> Option<&'static Tool> {
        catalog::tool_by_id(tool_id)
    }

    /// Catalog entries for the active ids, in order. Ids with no catalog
    /// match are silently pruned.
    pub fn active_tools_config(&self) -> Vec<&'static Tool> {
        self.active
            .get()
            .iter()
            .filter_map(|id| catalog::tool_by_id(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::storage::{MemoryMedium, StorageMedium};
    use std::rc::Rc;

    fn interactive_store() -> ToolsStore {
        ToolsStore::new(Storage::new(
            Context::Interactive,
            Rc::new(MemoryMedium::new()),
        ))
    }

    #[test]
    fn test_fresh_store_has_default_tools_in_order() {
        let store = interactive_store();
        let configs = store.active_tools_config();
        let ids: Vec<&str> = configs.iter().map(|tool| tool.id).collect();
        assert_eq!(ids, vec!["weather", "clock"]);
    }

    #[test]
    fn test_add_tool_is_idempotent() {
        let store = interactive_store();
        store.add_tool("weather");
        store.add_tool("weather");
        assert_eq!(store.active_tool_ids(), vec!["weather", "clock"]);
    }

    #[test]
    fn test_remove_tool_and_repeat() {
        let store = interactive_store();
        store.remove_tool("clock");
        assert!(!store.is_active("clock"));
        assert_eq!(store.active_tool_ids(), vec!["weather"]);

        // Removing again is a no-op that still succeeds
        store.remove_tool("clock");
        assert_eq!(store.active_tool_ids(), vec!["weather"]);
    }

    #[test]
    fn test_reorder_drives_config_order() {
        let store = interactive_store();
        store.reorder_tools(vec!["clock".to_string(), "weather".to_string()]);

        let configs = store.active_tools_config();
        let ids: Vec<&str> = configs.iter().map(|tool| tool.id).collect();
        assert_eq!(ids, vec!["clock", "weather"]);
    }

    #[test]
    fn test_reset_to_default() {
        let store = interactive_store();
        store.remove_tool("weather");
        store.remove_tool("clock");
        store.reset_to_default();
        assert_eq!(store.active_tool_ids(), vec!["weather", "clock"]);
    }

    #[test]
    fn test_unknown_ids_are_pruned_from_configs() {
        let store = interactive_store();
        store.add_tool("stocks");
        assert!(store.is_active("stocks"));
        assert!(store.tool_config("stocks").is_none());

        let configs = store.active_tools_config();
        let ids: Vec<&str> = configs.iter().map(|tool| tool.id).collect();
        assert_eq!(ids, vec!["weather", "clock"]);
    }

    #[test]
    fn test_changes_persist_across_stores() {
        let medium: Rc<dyn StorageMedium> = Rc::new(MemoryMedium::new());

        let store = ToolsStore::new(Storage::new(Context::Interactive, medium.clone()));
        store.remove_tool("weather");
        store.add_tool("weather"); // now ["clock", "weather"]

        let store = ToolsStore::new(Storage::new(Context::Interactive, medium));
        assert_eq!(store.active_tool_ids(), vec!["clock", "weather"]);
    }

    #[test]
    fn test_observers_get_the_new_list() {
        use std::cell::RefCell;

        let store = interactive_store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move |ids| sink.borrow_mut().push(ids.clone()));

        store.remove_tool("clock");
        store.add_tool("clock");

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["weather".to_string()],
                vec!["weather".to_string(), "clock".to_string()],
            ]
        );
    }

    #[test]
    fn test_headless_store_updates_memory_only() {
        let medium: Rc<dyn StorageMedium> = Rc::new(MemoryMedium::new());

        let store = ToolsStore::new(Storage::new(Context::Headless, medium.clone()));
        store.remove_tool("clock");
        assert_eq!(store.active_tool_ids(), vec!["weather"]);

        let store = ToolsStore::new(Storage::new(Context::Interactive, medium));
        assert_eq!(store.active_tool_ids(), vec!["weather", "clock"]);
    }
}
