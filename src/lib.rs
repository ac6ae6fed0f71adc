//! Client-side preference layer for a start page.
//!
//! Tracks which search engine the user selected and which optional tool
//! widgets are active, persists both through a key-value adapter over a
//! host-provided storage medium, and exposes reactive state to the host UI.
//!
//! Everything is synchronous and single-threaded; a corrupted or missing
//! preference never fails upward, it degrades to a sane default.
//!
//! ```
//! use std::rc::Rc;
//! use tabula::{Context, MemoryMedium, NullNavigator, Preferences};
//!
//! let preferences = Preferences::new(
//!     Context::Interactive,
//!     Rc::new(MemoryMedium::new()),
//!     Rc::new(NullNavigator),
//! );
//!
//! preferences.search_engine.set_engine("duckduckgo");
//! assert_eq!(preferences.search_engine.engine_config().name, "DuckDuckGo");
//! assert!(preferences.tools.is_active("clock"));
//! ```

pub mod catalog;
pub mod config;

mod context;
mod error;
mod navigation;
mod observable;
mod storage;
mod stores;

pub use context::Context;
pub use error::StorageError;
pub use navigation::{Navigator, NullNavigator};
pub use observable::{Observable, Subscription};
pub use storage::{FileMedium, MemoryMedium, Storage, StorageMedium};
pub use stores::{Preferences, SearchEngineStore, ToolsStore};
