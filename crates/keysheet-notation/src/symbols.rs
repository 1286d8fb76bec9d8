//! Key-name to display-symbol resolution.
//!
//! Two lookup layers: a fixed arrow-key table (case-sensitive, the same on
//! every system) and a per-system map loaded from configuration
//! (case-insensitive). Anything unmatched passes through unchanged.

use std::collections::HashMap;

/// Arrow-key names and their glyphs. Matched case-sensitively.
const ARROW_KEYS: [(&str, &str); 4] = [("Up", "↑"), ("Down", "↓"), ("Left", "←"), ("Right", "→")];

/// The four canonical modifier glyphs the presentation layer styles
/// specially. The resolver itself always emits the bare glyph.
const MODIFIER_GLYPHS: [&str; 4] = ["⌘", "⌥", "⌃", "⇧"];

/// Glyph for an arrow-key name, if the name is one.
pub fn arrow_symbol(name: &str) -> Option<&'static str> {
    ARROW_KEYS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, glyph)| *glyph)
}

/// Whether a resolved token is one of the modifier glyphs the renderer
/// wraps in its distinguishing style marker.
pub fn is_modifier_glyph(text: &str) -> bool {
    MODIFIER_GLYPHS.contains(&text)
}

/// Symbol map for one target system. Keys are stored lowercased; lookup is
/// case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolMap {
    entries: HashMap<String, String>,
}

impl SymbolMap {
    /// The empty map: every key passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (name, glyph) in entries {
            map.insert(name.as_ref(), glyph);
        }
        map
    }

    pub fn insert(&mut self, name: &str, glyph: impl Into<String>) {
        self.entries.insert(name.to_lowercase(), glyph.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve one trimmed token to its display form.
    ///
    /// Arrow names win over the system map so arrow substitution works even
    /// with an empty or arrow-remapping system table.
    pub fn resolve(&self, token: &str) -> String {
        if let Some(glyph) = arrow_symbol(token) {
            return glyph.to_string();
        }
        self.entries
            .get(&token.to_lowercase())
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }
}

/// The full system-name-keyed collection of symbol maps.
#[derive(Clone, Debug, Default)]
pub struct SystemMappings {
    systems: HashMap<String, SymbolMap>,
}

impl SystemMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, system: impl Into<String>, map: SymbolMap) {
        self.systems.insert(system.into(), map);
    }

    /// The symbol map for a system. Unknown names resolve to the empty map
    /// so every key passes through unchanged.
    pub fn for_system(&self, system: &str) -> SymbolMap {
        match self.systems.get(system) {
            Some(map) => map.clone(),
            None => {
                tracing::warn!(system, "no symbol mapping for system, keys pass through");
                SymbolMap::new()
            }
        }
    }

    pub fn contains(&self, system: &str) -> bool {
        self.systems.contains_key(system)
    }
}
