//! keysheet-core - UI-agnostic cheatsheet document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{NormalizedShortcuts, ShortcutDocument, normalize_shortcuts};
pub use error::{KeysheetError, Result};
pub use storage::{LayoutData, load_layout_data};
