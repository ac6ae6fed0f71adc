//! Static catalogs of selectable search engines and available tool widgets.
//!
//! Both catalogs are fixed at compile time; entries are never created or
//! destroyed at runtime. The first search engine entry doubles as the
//! fallback when a persisted id no longer matches anything.

/// A selectable search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    pub id: &'static str,
    pub name: &'static str,
    /// URL template; the percent-encoded query is concatenated at the end
    pub url: &'static str,
    /// Display reference, emoji or asset path
    pub icon: &'static str,
    /// Autocomplete endpoint, where the provider has one
    pub suggestion_url: Option<&'static str>,
}

/// Available search engines. Order matters: the first entry is the fallback
/// for unknown ids.
pub const SEARCH_ENGINES: &[SearchEngine] = &[
    SearchEngine {
        id: "google",
        name: "Google",
        url: "https://www.google.com/search?q=",
        icon: "🔍",
        suggestion_url: Some(
            "https://suggestqueries.google.com/complete/search?client=firefox&q=",
        ),
    },
    SearchEngine {
        id: "bing",
        name: "Bing",
        url: "https://www.bing.com/search?q=",
        icon: "🔎",
        suggestion_url: Some("https://api.bing.com/osjson.aspx?query="),
    },
    SearchEngine {
        id: "duckduckgo",
        name: "DuckDuckGo",
        url: "https://duckduckgo.com/?q=",
        icon: "🦆",
        suggestion_url: None,
    },
    SearchEngine {
        id: "yahoo",
        name: "Yahoo",
        url: "https://search.yahoo.com/search?p=",
        icon: "🔱",
        suggestion_url: Some(
            "https://search.yahoo.com/sugg/gossip/gossip-us-ura/?command=",
        ),
    },
    SearchEngine {
        id: "baidu",
        name: "Baidu",
        url: "https://www.baidu.com/s?wd=",
        icon: "🔵",
        suggestion_url: Some("https://suggestion.baidu.com/su?wd="),
    },
];

/// An optional start page widget the host can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Reference to the UI unit the host renders for this tool
    pub component: &'static str,
}

/// Available tool widgets.
pub const AVAILABLE_TOOLS: &[Tool] = &[
    Tool {
        id: "weather",
        name: "Weather",
        description: "Shows the weather at the current location",
        icon: "🌤️",
        component: "Weather",
    },
    Tool {
        id: "clock",
        name: "Clock",
        description: "Shows the current time and date",
        icon: "🕒",
        component: "Clock",
    },
];

/// Look up a search engine by id.
pub fn engine_by_id(id: &str) -> Option<&'static SearchEngine> {
    SEARCH_ENGINES.iter().find(|engine| engine.id == id)
}

/// Look up a tool by id.
pub fn tool_by_id(id: &str) -> Option<&'static Tool> {
    AVAILABLE_TOOLS.iter().find(|tool| tool.id == id)
}
