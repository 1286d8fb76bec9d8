//! Document-level shortcut normalization.
//!
//! Walks a document's categories in author order and replaces every raw
//! shortcut key with its parsed, symbol-substituted display form. The input
//! document is never touched; the output is a fresh structure the renderer
//! owns.

use keysheet_notation::{SymbolMap, display_shortcut};

use super::model::{ShortcutDocument, ShortcutEntry};

/// One normalized category: display keys paired with their entries, in the
/// source document's order.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedCategory {
    pub name: String,
    pub entries: Vec<(String, ShortcutEntry)>,
}

pub type NormalizedShortcuts = Vec<NormalizedCategory>;

/// Normalize every shortcut key in the document.
///
/// With `allow_text` set the keys are free-text commands and pass through
/// byte-for-byte. Two raw keys that normalize to the same string within one
/// category collapse to the later entry (last write wins, keeping the first
/// occurrence's position).
pub fn normalize_shortcuts(doc: &ShortcutDocument, symbols: &SymbolMap) -> NormalizedShortcuts {
    let mut normalized = Vec::with_capacity(doc.shortcuts.len());

    for category in &doc.shortcuts {
        let mut entries: Vec<(String, ShortcutEntry)> = Vec::with_capacity(category.entries.len());
        for (raw_key, entry) in &category.entries {
            let key = if doc.allow_text {
                raw_key.clone()
            } else {
                display_shortcut(raw_key, symbols)
            };
            match entries.iter().position(|(existing, _)| *existing == key) {
                Some(index) => {
                    tracing::warn!(
                        category = category.name,
                        key,
                        "duplicate normalized shortcut, later entry wins"
                    );
                    entries[index].1 = entry.clone();
                }
                None => entries.push((key, entry.clone())),
            }
        }
        normalized.push(NormalizedCategory {
            name: category.name.clone(),
            entries,
        });
    }

    normalized
}
