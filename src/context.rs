//! Execution-context capability flag.

/// Whether the process is an interactive client or a headless renderer.
///
/// Resolved once at application startup and injected into the storage adapter
/// and stores. In a headless context every persistence call short-circuits to
/// inert behavior and navigation is never attempted, so rendered output stays
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Interactive client: storage and navigation are available
    Interactive,
    /// Rendering without a client, e.g. server-side render
    Headless,
}

impl Context {
    pub fn is_interactive(self) -> bool {
        matches!(self, Context::Interactive)
    }
}
