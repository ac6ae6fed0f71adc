//! Navigation primitives supplied by the host.

/// Browsing actions the search store asks of its host.
///
/// The preference layer only decides the destination and whether it belongs
/// in a new tab; the host owns the actual browsing primitives. Tests
/// substitute a recording implementation.
pub trait Navigator {
    /// Open `url` in a new browsing context.
    fn open_new_tab(&self, url: &str);

    /// Navigate the current browsing context to `url`.
    fn navigate(&self, url: &str);
}

/// Navigator that drops every request, for hosts without a browsing context.
#[derive(Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn open_new_tab(&self, url: &str) {
        log::debug!("No browsing context, dropping new-tab navigation to {}", url);
    }

    fn navigate(&self, url: &str) {
        log::debug!("No browsing context, dropping navigation to {}", url);
    }
}
