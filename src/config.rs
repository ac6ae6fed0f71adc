/// Application name, used for on-disk project directories
pub const APP_NAME: &str = "tabula";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Persisted keys
// ============================================================================
// Key names and JSON value encoding match the original deployment so an
// existing keyspace stays readable.

/// Storage key for the selected search engine id
pub const KEY_SEARCH_ENGINE: &str = "searchEngine";

/// Storage key for the ordered list of active tool ids
pub const KEY_ACTIVE_TOOLS: &str = "activeTools";

/// Storage key for the open-links-in-new-tab preference
pub const KEY_OPEN_LINKS_IN_NEW_TAB: &str = "openLinksInNewTab";

// ============================================================================
// Defaults
// ============================================================================

/// Default search engine id
pub const DEFAULT_SEARCH_ENGINE: &str = "google";

/// Default active tools, in render order
pub const DEFAULT_ACTIVE_TOOLS: &[&str] = &["weather", "clock"];

/// Whether search results open in a new tab by default
pub const DEFAULT_OPEN_LINKS_IN_NEW_TAB: bool = true;

/// Preferences filename used by the file-backed medium
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Default active tools as an owned list, for seeding store state
pub fn default_active_tools() -> Vec<String> {
    DEFAULT_ACTIVE_TOOLS.iter().map(|id| (*id).to_string()).collect()
}
