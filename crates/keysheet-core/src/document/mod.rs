//! Cheatsheet document model and document-level operations (UI-agnostic).

mod lint;
mod model;
mod normalize;
mod validate;

pub use lint::{fix_content, lint_content};
pub use model::{Category, LayoutInfo, ShortcutDocument, ShortcutEntry};
pub use normalize::{NormalizedCategory, NormalizedShortcuts, normalize_shortcuts};
pub use validate::validate_document;
